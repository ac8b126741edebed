//! Error types for the labelscan-core library.

use thiserror::Error;

/// Main error type for the labelscan library.
#[derive(Error, Debug)]
pub enum LabelscanError {
    /// Insight extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// OCR document error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR document parsing.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document is not valid vision-API JSON.
    #[error("failed to parse OCR document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to insight extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document carries no usable OCR text.
    #[error("no OCR text in document")]
    NoText,

    /// A registry pattern failed to compile.
    #[error("invalid pattern for {name}: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Result type for the labelscan library.
pub type Result<T> = std::result::Result<T, LabelscanError>;
