//! Error types for the analysis pipeline

use medgenius_llm::LlmError;
use thiserror::Error;

/// Errors that can occur while producing a normalized record.
///
/// Every variant is caught at the top of the pipeline and converted
/// into a `Degraded` or `Failed` outcome; none escape to presentation
/// code as a panic.
#[derive(Error, Debug, Clone)]
pub enum PipelineError {
    /// Transport error or non-success HTTP status.
    #[error("Network failure: {0}")]
    Network(String),

    /// The service reply lacked the expected message field.
    #[error("Response shape failure: {0}")]
    Shape(String),

    /// No extraction pattern matched the reply text.
    #[error("No structured payload found in reply")]
    Extraction,

    /// The extracted candidate text is not valid structured data.
    #[error("Unparseable payload: {0}")]
    Normalize(String),
}

impl From<LlmError> for PipelineError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Communication(msg) => PipelineError::Network(msg),
            LlmError::Http { status, body } => {
                PipelineError::Network(format!("HTTP {}: {}", status, body))
            }
            LlmError::InvalidResponse(msg) => PipelineError::Shape(msg),
        }
    }
}
