//!
//! Gas report reading error.
//!

use std::path::PathBuf;

///
/// Gas report reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening the input file.
    #[error("Opening input file {path:?}: {error}")]
    Opening {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error reading the input file, including invalid UTF-8.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
}
