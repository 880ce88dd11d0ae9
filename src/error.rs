//! Error types for the score conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can stop a conversion run.
///
/// All variants are terminal: the binary reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened.
    #[error("Cannot open file '{}': {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input ended before every score field was read.
    #[error(
        "Unexpected end of file '{}': incomplete field at byte {offset}, expected {expected} bytes",
        path.display()
    )]
    Truncated {
        path: PathBuf,
        /// Offset of the first field that could not be read in full
        offset: u64,
        /// Number of bytes the layout requires
        expected: u64,
    },

    /// Reading the input failed for a reason other than a short file.
    #[error("Error reading file '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("Error writing file '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn output_write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ConvertError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

/// Flattens a csv error back into the I/O error that caused it.
pub(crate) fn csv_to_io(err: csv::Error) -> io::Error {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, format!("{:?}", other)),
        }
    } else {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
