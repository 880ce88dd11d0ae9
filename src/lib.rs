//! Converts a custom mining revenue score dump into a CSV report.
//!
//! The dump holds two blocks of 676 little-endian `u64` scores: every
//! computor's old final score, then every computor's custom mining score.
//! The report lists both per computor along with their (wrapping) product.
//!
//! ```no_run
//! # fn main() -> custom_mining_revenue::Result<()> {
//! let summary = custom_mining_revenue::convert("custom_mining.bin", "custom_mining.csv")?;
//! assert_eq!(summary.rows, 676);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::info;

pub mod arithmetic;
pub mod block_iterator;
pub mod error;
pub mod report;
pub mod score_file;

pub use arithmetic::compute_new_score;
pub use error::{ConvertError, Result};
pub use report::{write_report, write_report_to, ReportRow};
pub use score_file::{
    read_score_file, write_score_file, DecodeFailure, ScoreFile, NUMBER_OF_COMPUTORS,
    SCORE_FILE_LEN,
};

/// Outcome of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Data rows written, excluding the header
    pub rows: usize,
}

/// Reads the score dump at `input` and writes its report to `output`.
///
/// The input is decoded completely before `output` is created, so a bad
/// input never leaves a report behind.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConversionSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let scores = read_score_file(input)?;
    let rows = write_report(output, &scores)?;
    info!(
        "wrote {} rows from {} to {}",
        rows,
        input.display(),
        output.display()
    );

    Ok(ConversionSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows,
    })
}
