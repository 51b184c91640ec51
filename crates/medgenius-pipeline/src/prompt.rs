//! Request Builder
//!
//! Assembles one outbound completion request from an analysis kind and
//! the user's free text.

use crate::analysis::{AnalysisKind, SAMPLE_PATIENT_REPORT};
use crate::config::PipelineConfig;
use medgenius_domain::ChatRequest;

/// Build the completion request for one user action.
///
/// Empty or whitespace-only input substitutes the built-in example
/// report, so the demo always has something to analyze.
pub fn build_request(kind: AnalysisKind, input: &str, config: &PipelineConfig) -> ChatRequest {
    let text = if input.trim().is_empty() {
        SAMPLE_PATIENT_REPORT
    } else {
        input
    };

    let user = format!("{}{}", kind.user_preamble(), text);

    ChatRequest::new(kind.system_instruction(), user)
        .with_model(config.model.clone())
        .with_temperature(config.temperature)
        .with_max_tokens(config.max_tokens)
}
