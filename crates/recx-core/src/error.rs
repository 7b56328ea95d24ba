//! Error types for the recx-core library.

use thiserror::Error;

/// Main error type for the recx library.
#[derive(Error, Debug)]
pub enum RecxError {
    /// Receipt extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to receipt field extraction.
///
/// A heuristic miss is not an error: a field that cannot be derived resolves
/// to its sentinel value instead of raising. Only structurally invalid input
/// at the parser boundary is reported here, and only when strict input
/// checking is enabled.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input text is empty or whitespace-only (strict mode only).
    #[error("input text is empty")]
    EmptyInput,
}

/// Result type for the recx library.
pub type Result<T> = std::result::Result<T, RecxError>;
