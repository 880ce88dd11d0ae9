//! CSV report of old, custom mining and new scores per computor.
//!
//! The report has a fixed header followed by one row per computor in index
//! order, each line terminated by `\r\n`:
//!
//! ```text
//! Index,OldFinalScore,CustomMiningScore,NewScore
//! 0,1,2,2
//! 1,18446744073709551615,2,18446744073709551614
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::{csv_to_io, ConvertError, Result};
use crate::score_file::ScoreFile;

/// Column names, in output order.
pub const HEADER: [&str; 4] = ["Index", "OldFinalScore", "CustomMiningScore", "NewScore"];

/// One data row of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "OldFinalScore")]
    pub old_final_score: u64,
    #[serde(rename = "CustomMiningScore")]
    pub custom_mining_score: u64,
    #[serde(rename = "NewScore")]
    pub new_score: u64,
}

/// Writes the report for `scores` to `writer` and returns the number of data rows.
pub fn write_report_to<W: Write>(writer: W, scores: &ScoreFile) -> io::Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(HEADER).map_err(csv_to_io)?;
    let mut rows = 0;
    for row in scores.rows() {
        csv_writer.serialize(row).map_err(csv_to_io)?;
        rows += 1;
    }
    csv_writer.flush()?;
    Ok(rows)
}

/// Creates `path` and writes the report for `scores` into it.
pub fn write_report<P: AsRef<Path>>(path: P, scores: &ScoreFile) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ConvertError::output_write(path, e))?;
    debug!("created {}", path.display());

    write_report_to(io::BufWriter::new(file), scores)
        .map_err(|e| ConvertError::output_write(path, e))
}
