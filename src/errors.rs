//! Error types for the searchbuddy pipeline
//!
//! Every failure aborts the current pipeline invocation and is surfaced
//! to the caller. Nothing is retried and no partial result is returned.

use thiserror::Error;

/// Main error type for the answer pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Required credentials or configuration missing at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Search boundary call failed
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// Search boundary returned zero documents
    #[error("Search returned no documents for query: {query}")]
    EmptyResults { query: String },

    /// A retrieved document lacks an expected metadata field
    #[error("Document at rank {rank} is missing metadata field '{field}'")]
    MissingField { rank: usize, field: &'static str },

    /// Completion boundary call failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Pipeline error: {0}")]
    Generic(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Convert anyhow errors to PipelineError
impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        PipelineError::Generic(err.to_string())
    }
}
