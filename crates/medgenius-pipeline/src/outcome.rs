//! Pipeline outcome type
//!
//! Callers must be able to tell a genuine model-derived record from a
//! substituted placeholder, so failure masking is explicit here rather
//! than silent.

use crate::error::PipelineError;
use medgenius_domain::NormalizedRecord;

/// The result of one pipeline run.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// The model reply was extracted and normalized successfully.
    Genuine(NormalizedRecord),

    /// The pipeline failed and the analysis kind's fixed fallback
    /// record was substituted.
    Degraded {
        /// The substituted fallback record.
        record: NormalizedRecord,
        /// Why the real pipeline failed.
        reason: PipelineError,
    },

    /// The pipeline failed and the analysis kind has no fallback.
    Failed(PipelineError),
}

impl AnalysisOutcome {
    /// The record to render, if any.
    pub fn record(&self) -> Option<&NormalizedRecord> {
        match self {
            AnalysisOutcome::Genuine(record) => Some(record),
            AnalysisOutcome::Degraded { record, .. } => Some(record),
            AnalysisOutcome::Failed(_) => None,
        }
    }

    /// Whether the record came from the model.
    pub fn is_genuine(&self) -> bool {
        matches!(self, AnalysisOutcome::Genuine(_))
    }

    /// Whether a fallback record was substituted.
    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisOutcome::Degraded { .. })
    }

    /// The failure reason, if the pipeline failed.
    pub fn reason(&self) -> Option<&PipelineError> {
        match self {
            AnalysisOutcome::Genuine(_) => None,
            AnalysisOutcome::Degraded { reason, .. } => Some(reason),
            AnalysisOutcome::Failed(reason) => Some(reason),
        }
    }
}
