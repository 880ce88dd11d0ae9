use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use bincode::config::{self, Configuration, Fixint, LittleEndian};
use log::{debug, warn};
use thiserror::Error;

use crate::arithmetic::compute_new_score;
use crate::block_iterator::{BlockIterator, FIELD_SIZE};
use crate::error::{ConvertError, Result};
use crate::report::ReportRow;

/// Number of computors with a score slot in the file.
pub const NUMBER_OF_COMPUTORS: usize = 676;
/// Size in bytes of one block of scores.
pub const SCORE_BLOCK_LEN: usize = NUMBER_OF_COMPUTORS * FIELD_SIZE;
/// Size in bytes of a complete score file: old scores, then custom scores.
pub const SCORE_FILE_LEN: usize = 2 * SCORE_BLOCK_LEN;

/// Fixed-width little-endian encoding, matching the on-disk field layout.
fn field_config() -> Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}

/// The two score blocks of a revenue dump, indexed by computor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreFile {
    pub old_final_scores: [u64; NUMBER_OF_COMPUTORS],
    pub custom_mining_scores: [u64; NUMBER_OF_COMPUTORS],
}

/// Why decoding from a bare reader stopped.
///
/// `read_score_file` turns this into a `ConvertError` carrying the path.
#[derive(Debug, Error)]
pub enum DecodeFailure {
    /// The field starting at `offset` was incomplete.
    #[error("unexpected end of input: incomplete field at byte {offset}")]
    Truncated { offset: u64 },
    #[error("read failed: {0}")]
    Io(#[source] io::Error),
}

impl Default for ScoreFile {
    fn default() -> Self {
        ScoreFile {
            old_final_scores: [0; NUMBER_OF_COMPUTORS],
            custom_mining_scores: [0; NUMBER_OF_COMPUTORS],
        }
    }
}

impl ScoreFile {
    /// Decodes both blocks from `reader`. At most `SCORE_FILE_LEN` bytes are consumed.
    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, DecodeFailure> {
        let mut fields = BlockIterator::new(reader.take(SCORE_FILE_LEN as u64));
        let mut scores = ScoreFile::default();

        read_block(&mut fields, &mut scores.old_final_scores)?;
        debug!("decoded old final score block");
        read_block(&mut fields, &mut scores.custom_mining_scores)?;
        debug!("decoded custom mining score block");

        Ok(scores)
    }

    /// New score of every computor, in index order.
    pub fn new_scores(&self) -> [u64; NUMBER_OF_COMPUTORS] {
        let mut out = [0u64; NUMBER_OF_COMPUTORS];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = compute_new_score(self.old_final_scores[i], self.custom_mining_scores[i]);
        }
        out
    }

    /// One report row per computor, in index order.
    pub fn rows(&self) -> impl Iterator<Item = ReportRow> + '_ {
        let new_scores = self.new_scores();
        self.old_final_scores
            .iter()
            .zip(self.custom_mining_scores.iter())
            .zip(new_scores)
            .enumerate()
            .map(|(index, ((&old, &custom), new))| ReportRow {
                index,
                old_final_score: old,
                custom_mining_score: custom,
                new_score: new,
            })
    }

    /// Encodes both blocks in file layout.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for value in self
            .old_final_scores
            .iter()
            .chain(self.custom_mining_scores.iter())
        {
            bincode::encode_into_std_write(value, writer, field_config())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        }
        Ok(())
    }
}

fn read_block<R: Read>(
    fields: &mut BlockIterator<R>,
    block: &mut [u64; NUMBER_OF_COMPUTORS],
) -> std::result::Result<(), DecodeFailure> {
    for slot in block.iter_mut() {
        let offset = fields.offset();
        *slot = match fields.next() {
            Some(Ok(value)) => value,
            None => return Err(DecodeFailure::Truncated { offset }),
            Some(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(DecodeFailure::Truncated { offset })
            }
            Some(Err(e)) => return Err(DecodeFailure::Io(e)),
        };
    }
    Ok(())
}

/// Reads a revenue score dump from `path`.
///
/// Only the first `SCORE_FILE_LEN` bytes are read. A shorter file is an
/// error; nothing is zero-filled.
pub fn read_score_file<P: AsRef<Path>>(path: P) -> Result<ScoreFile> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConvertError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened {}", path.display());

    if let Ok(meta) = file.metadata() {
        if meta.len() > SCORE_FILE_LEN as u64 {
            warn!(
                "{} is {} bytes; ignoring everything past byte {}",
                path.display(),
                meta.len(),
                SCORE_FILE_LEN
            );
        }
    }

    ScoreFile::from_reader(file).map_err(|failure| match failure {
        DecodeFailure::Truncated { offset } => ConvertError::Truncated {
            path: path.to_path_buf(),
            offset,
            expected: SCORE_FILE_LEN as u64,
        },
        DecodeFailure::Io(source) => ConvertError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Writes `scores` to `path` in the layout `read_score_file` expects.
pub fn write_score_file<P: AsRef<Path>>(path: P, scores: &ScoreFile) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ConvertError::output_write(path, e))?;
    let mut writer = BufWriter::new(file);
    scores
        .write_to(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::output_write(path, e))?;
    Ok(())
}
