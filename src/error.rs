//! Error types for the ABA parser.

use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, AbaError>;

/// Errors that can occur while parsing an ABA file.
///
/// Malformed field content and unrecognized lines are never errors; the only
/// failure the library itself produces is a batch rejected by validation.
#[derive(Error, Debug)]
pub enum AbaError {
    /// A batch failed validation while the parser had validation enabled
    #[error("Invalid batch, batch ended on line: {line}, message: {message}")]
    InvalidBatch { line: usize, message: String },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write CSV output
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: aba-parser <input.aba> [--validate]")]
    MissingArgument,
}
