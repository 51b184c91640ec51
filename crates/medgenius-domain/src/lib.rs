//! MedGenius Domain Layer
//!
//! Core types shared by every other layer: declared record schemas,
//! the normalized result record, chat-completion request types, and the
//! provider trait seam. Infrastructure implementations (HTTP providers,
//! the pipeline itself) live in other crates.
//!
//! ## Key Concepts
//!
//! - **RecordSchema**: a declared field-name → shape mapping; the
//!   normalizer consults it instead of per-field conditionals
//! - **NormalizedRecord**: an insertion-ordered field map whose
//!   sequence fields are always materialized as sequences
//! - **ChatRequest**: one immutable outbound completion request

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod record;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use chat::{ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use record::NormalizedRecord;
pub use schema::{FieldShape, RecordSchema};
pub use traits::ChatCompletion;
