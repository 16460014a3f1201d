//! Error types for the juristext library.

use thiserror::Error;

/// Result type alias for juristext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for judgment structure inference.
///
/// Errors are raised only for input-contract violations. Data-quality issues
/// (garbled text, missing fields, OCR noise) degrade gracefully to defaults
/// and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Input exceeds the configured line-count cap.
    #[error("Input has {0} lines, exceeding the cap of {1}")]
    TooManyLines(usize, usize),

    /// Lines arrived out of extraction order.
    #[error("Line ordering violated at index {index}: page {page}, position {position}")]
    OutOfOrder {
        /// Index of the offending line in the input sequence
        index: usize,
        /// Page index of the offending line
        page: usize,
        /// Intra-page position of the offending line
        position: usize,
    },

    /// Worker pool construction failed.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
