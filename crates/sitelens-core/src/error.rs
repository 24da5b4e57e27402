//! Centralized error types for sitelens.

use thiserror::Error;

/// Main error type for the analysis pipeline.
///
/// Each variant maps to one way the request/response cycle can go wrong, so
/// callers can tell "the endpoint is down" apart from "the model replied
/// with garbage".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Failed to reach the inference endpoint: {0}")]
    Network(String),

    #[error("Inference endpoint returned HTTP {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("Malformed endpoint response: {0}")]
    MalformedResponse(String),

    #[error("Generated analysis does not match the expected schema: {0}")]
    SchemaMismatch(String),
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// Create a malformed-response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a schema-mismatch error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    /// Stable machine-readable kind, used in web API error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyUrl => "empty_url",
            Self::Busy => "busy",
            Self::Network(_) => "network",
            Self::Endpoint { .. } => "endpoint",
            Self::MalformedResponse(_) => "malformed_response",
            Self::SchemaMismatch(_) => "schema_mismatch",
        }
    }
}
