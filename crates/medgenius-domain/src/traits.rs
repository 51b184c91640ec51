//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline and
//! infrastructure. Provider implementations live in `medgenius-llm`.

use crate::chat::ChatRequest;

/// A chat-completion service: given a structured prompt, returns the
/// free-form text of the model's single reply message.
///
/// Implementations make exactly one attempt per call; retry policy, if
/// any, is the caller's concern (the pipeline deliberately has none).
pub trait ChatCompletion {
    /// Error type for provider operations.
    type Error;

    /// Issue one completion request and return the reply text.
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<String, Self::Error>> + Send;
}
