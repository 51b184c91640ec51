//! MedGenius LLM Provider Layer
//!
//! Implementations of the `ChatCompletion` trait from
//! `medgenius-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `GroqProvider`: OpenAI-compatible chat-completion API over HTTP
//!
//! # Examples
//!
//! ```
//! use medgenius_llm::MockProvider;
//! use medgenius_domain::{ChatCompletion, ChatRequest};
//!
//! # async fn example() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let request = ChatRequest::new("system", "user");
//! let reply = provider.complete(&request).await.unwrap();
//! assert_eq!(reply, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod groq;

use medgenius_domain::{ChatCompletion, ChatRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use groq::GroqProvider;

/// Errors that can occur when talking to a completion service.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body, best effort.
        body: String,
    },

    /// The response body did not have the expected message shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure mode injected into a [`MockProvider`].
#[derive(Debug, Clone)]
enum MockFailure {
    Transport(String),
    HttpStatus(u16),
}

/// Mock chat-completion provider for deterministic testing.
///
/// Returns pre-configured replies without any network calls.
///
/// # Examples
///
/// ```
/// use medgenius_llm::MockProvider;
/// use medgenius_domain::{ChatCompletion, ChatRequest};
///
/// # async fn example() {
/// let mut provider = MockProvider::new("default reply");
/// provider.add_reply("specific input", "specific reply");
///
/// let request = ChatRequest::new("sys", "specific input");
/// assert_eq!(provider.complete(&request).await.unwrap(), "specific reply");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: String,
    replies: Arc<Mutex<HashMap<String, String>>>,
    failure: Arc<Mutex<Option<MockFailure>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider returning a fixed reply for all requests.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            replies: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific reply for a given user-content string.
    pub fn add_reply(&mut self, user_content: impl Into<String>, reply: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(user_content.into(), reply.into());
    }

    /// Make every subsequent call fail with a transport error.
    pub fn fail_with_transport(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(MockFailure::Transport(message.into()));
    }

    /// Make every subsequent call fail as a non-success HTTP status.
    pub fn fail_with_status(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(MockFailure::HttpStatus(status));
    }

    /// Clear any injected failure.
    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of times `complete` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock reply")
    }
}

impl ChatCompletion for MockProvider {
    type Error = LlmError;

    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(failure) = self.failure.lock().unwrap().clone() {
            return Err(match failure {
                MockFailure::Transport(message) => LlmError::Communication(message),
                MockFailure::HttpStatus(status) => LlmError::Http {
                    status,
                    body: "mock failure".to_string(),
                },
            });
        }

        let replies = self.replies.lock().unwrap();
        if let Some(reply) = replies.get(&request.user) {
            return Ok(reply.clone());
        }

        Ok(self.default_reply.clone())
    }
}
