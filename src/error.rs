//! Error types for the cvmark library.

use std::io;
use thiserror::Error;

/// Result type alias for cvmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the parsing core.
///
/// Parsing itself never fails: any input, however malformed, yields a
/// [`Document`](crate::model::Document) and validity is a separate judgment
/// made by the [`validate`](crate::validate) module. Errors arise only at
/// the file-reading and rendering boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),
}
