//! Clinical trial record

use serde::{Deserialize, Serialize};

/// One clinical trial listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Registry identifier, e.g. `NCT04832932`.
    pub id: String,
    /// Study title.
    pub title: String,
    /// Condition under study.
    pub condition: String,
    /// Trial phase, e.g. `Phase 1/2`.
    pub phase: String,
    /// Recruitment status.
    pub status: String,
    /// City and state.
    pub location: String,
    /// Running institution.
    pub institution: String,
    /// Contact person.
    pub contact_name: String,
    /// Contact email.
    pub contact_email: String,
    /// Eligibility criteria summary.
    pub eligibility: String,
    /// Study description.
    pub description: String,
}

impl Trial {
    /// File name used when this trial is exported as JSON.
    pub fn export_file_name(&self) -> String {
        format!("clinical_trial_{}.json", self.id)
    }

    /// Serialize as indented JSON, the export format offered to users.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
