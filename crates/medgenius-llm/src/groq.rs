//! Groq provider implementation
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint with a
//! Bearer credential. Endpoint and credential are injected at
//! construction; this crate never embeds a literal secret.
//!
//! Exactly one request per `complete` call: no retries, no explicit
//! timeout beyond the transport default (an optional client timeout can
//! be configured with [`GroqProvider::with_timeout`]).
//!
//! # Examples
//!
//! ```no_run
//! use medgenius_llm::GroqProvider;
//!
//! let provider = GroqProvider::new(
//!     "https://api.groq.com/openai/v1/chat/completions",
//!     std::env::var("MEDGENIUS_API_KEY").unwrap(),
//! );
//! ```

use crate::LlmError;
use medgenius_domain::{ChatCompletion, ChatRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default chat-completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Chat-completion provider over HTTP.
pub struct GroqProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the chat-completion API.
#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

/// One prompt message on the wire.
#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response from the chat-completion API.
///
/// Only the reply text is of interest; everything else is ignored.
#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl GroqProvider {
    /// Create a provider for the given endpoint and credential.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a provider against the default endpoint.
    pub fn default_endpoint(api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, api_key)
    }

    /// Set a client-level request timeout.
    ///
    /// Fails rather than fall back to an unbounded client, so a caller
    /// that asked for a bound always gets one.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let body = CompletionBody {
            model: &request.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &request.system,
                },
                WireMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        // Absence of choices[0].message is a hard failure
        let message = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .ok_or_else(|| {
                LlmError::InvalidResponse("response has no choices[0].message".to_string())
            })?;

        debug!("Reply length: {} chars", message.content.len());

        Ok(message.content)
    }
}

impl ChatCompletion for GroqProvider {
    type Error = LlmError;

    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        self.send(request).await
    }
}
