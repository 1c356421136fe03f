//! Error types for tabulation

use thiserror::Error;

/// Tabulation error types
#[derive(Debug, Error)]
pub enum TablifyError {
    /// The record limit must be at least 1.
    #[error("Invalid record limit: {0} (must be a positive integer)")]
    InvalidLimit(usize),
    /// The input began with `[` but did not parse as a JSON array document.
    #[error("Invalid JSON array document: {0}")]
    ArrayDocument(#[source] simd_json::Error),
    /// I/O operation failed while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
