//! MedGenius Analysis Pipeline
//!
//! Turns a free-form chat-completion reply into a typed, normalized
//! record. One parametrized pipeline serves every analysis kind; the
//! presentation layer stays thin.
//!
//! # Architecture
//!
//! ```text
//! user text → Request Builder → provider → Response Extractor
//!           → Shape Normalizer → NormalizedRecord
//! ```
//!
//! Any failure along the way (network, response shape, extraction,
//! normalization) substitutes the analysis kind's fixed fallback
//! record, surfaced as a distinguishable [`AnalysisOutcome::Degraded`]
//! so callers and tests can tell genuine results from placeholders.
//!
//! # Example
//!
//! ```
//! use medgenius_pipeline::{AnalysisKind, Pipeline, PipelineConfig};
//! use medgenius_llm::MockProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"symptoms":["cough","fever"]}"#);
//! let pipeline = Pipeline::new(provider, PipelineConfig::default());
//!
//! let outcome = pipeline.run(AnalysisKind::PatientAnalysis, "persistent cough and fever").await;
//! assert!(outcome.is_genuine());
//! # }
//! ```

#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
mod extract;
mod fallback;
mod normalize;
mod outcome;
mod pipeline;
mod prompt;

pub use analysis::{AnalysisKind, SAMPLE_PATIENT_REPORT};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use extract::extract_payload;
pub use normalize::normalize;
pub use outcome::AnalysisOutcome;
pub use pipeline::Pipeline;
pub use prompt::build_request;
