//! Chat-completion request types

/// Default model requested from the completion service.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Default sampling temperature. Low, because the reply must be
/// machine-parseable rather than creative.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default completion length bound.
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// One outbound chat-completion request.
///
/// Built fresh per user action and immutable once sent: the pipeline
/// issues exactly one network call per request, with no retries and no
/// deduplication of identical concurrent requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Model identifier, e.g. `llama3-70b-8192`.
    pub model: String,
    /// The fixed system instruction for this analysis.
    pub system: String,
    /// The user-supplied free-text content.
    pub user: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion length bound.
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Create a request with the default model parameters.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system: system.into(),
            user: user.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the completion length bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = ChatRequest::new("system", "user");
        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(request.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_builder_overrides() {
        let request = ChatRequest::new("s", "u")
            .with_model("mixtral-8x7b")
            .with_temperature(0.7)
            .with_max_tokens(512);
        assert_eq!(request.model, "mixtral-8x7b");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 512);
    }
}
