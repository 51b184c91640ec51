//! Trial registry and search

use crate::trial::Trial;
use crate::TrialError;

/// Search criteria. Empty/absent criteria do not filter.
#[derive(Debug, Clone, Default)]
pub struct TrialQuery {
    /// Condition substring, matched case-insensitively.
    pub condition: Option<String>,
    /// Location substring, matched case-insensitively.
    pub location: Option<String>,
    /// Exact phase, e.g. `Phase 2`. `any` matches every phase.
    pub phase: Option<String>,
}

impl TrialQuery {
    fn is_empty(&self) -> bool {
        let phase_matters = self
            .phase
            .as_deref()
            .is_some_and(|p| !p.is_empty() && !p.eq_ignore_ascii_case("any"));
        !phase_matters
            && self.condition.as_deref().is_none_or(str::is_empty)
            && self.location.as_deref().is_none_or(str::is_empty)
    }
}

/// The built-in trial registry.
#[derive(Debug, Clone)]
pub struct TrialRegistry {
    trials: Vec<Trial>,
}

impl TrialRegistry {
    /// Create a registry over the built-in sample trials.
    pub fn sample() -> Self {
        Self {
            trials: sample_trials(),
        }
    }

    /// All trials in the registry.
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Search the registry.
    ///
    /// Requires at least one effective criterion. Condition and
    /// location filter by case-insensitive substring; phase filters by
    /// exact match (`any` is treated as no phase filter).
    pub fn search(&self, query: &TrialQuery) -> Result<Vec<Trial>, TrialError> {
        if query.is_empty() {
            return Err(TrialError::EmptyQuery);
        }

        let mut results: Vec<Trial> = self.trials.clone();

        if let Some(condition) = query.condition.as_deref().filter(|c| !c.is_empty()) {
            let needle = condition.to_lowercase();
            results.retain(|t| t.condition.to_lowercase().contains(&needle));
        }

        if let Some(location) = query.location.as_deref().filter(|l| !l.is_empty()) {
            let needle = location.to_lowercase();
            results.retain(|t| t.location.to_lowercase().contains(&needle));
        }

        if let Some(phase) = query
            .phase
            .as_deref()
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("any"))
        {
            results.retain(|t| t.phase == phase);
        }

        Ok(results)
    }
}

impl Default for TrialRegistry {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_trials() -> Vec<Trial> {
    vec![
        Trial {
            id: "NCT04832932".to_string(),
            title: "A Study of Gene Therapy for Metachromatic Leukodystrophy".to_string(),
            condition: "Metachromatic Leukodystrophy".to_string(),
            phase: "Phase 1/2".to_string(),
            status: "Recruiting".to_string(),
            location: "Boston, Massachusetts".to_string(),
            institution: "Boston Children's Hospital".to_string(),
            contact_name: "Dr. Sarah Johnson".to_string(),
            contact_email: "s.johnson@example.edu".to_string(),
            eligibility: "Children ages 3-17 with confirmed diagnosis of MLD".to_string(),
            description: "This study evaluates the safety and efficacy of a gene therapy \
                          approach for treating Metachromatic Leukodystrophy (MLD), a rare \
                          genetic disorder affecting the nervous system."
                .to_string(),
        },
        Trial {
            id: "NCT04751877".to_string(),
            title: "Immunotherapy Combination for Advanced Rare Cancers".to_string(),
            condition: "Rare Cancers".to_string(),
            phase: "Phase 2".to_string(),
            status: "Recruiting".to_string(),
            location: "Houston, Texas".to_string(),
            institution: "MD Anderson Cancer Center".to_string(),
            contact_name: "Dr. Michael Chen".to_string(),
            contact_email: "m.chen@example.org".to_string(),
            eligibility: "Adults with advanced rare solid tumors that have progressed on \
                          standard therapies"
                .to_string(),
            description: "This trial investigates a novel combination of immunotherapy \
                          agents targeting rare cancer types with high unmet medical need."
                .to_string(),
        },
        Trial {
            id: "NCT04962451".to_string(),
            title: "Novel Treatment for Familial Amyloid Polyneuropathy".to_string(),
            condition: "Familial Amyloid Polyneuropathy".to_string(),
            phase: "Phase 3".to_string(),
            status: "Recruiting".to_string(),
            location: "San Francisco, California".to_string(),
            institution: "UCSF Medical Center".to_string(),
            contact_name: "Dr. Emily Rodriguez".to_string(),
            contact_email: "e.rodriguez@example.net".to_string(),
            eligibility: "Adults aged 18-75 with genetically confirmed hATTR amyloidosis \
                          with polyneuropathy"
                .to_string(),
            description: "A randomized, double-blind, placebo-controlled study evaluating \
                          the efficacy and safety of a novel RNA-targeting therapy for \
                          patients with hereditary transthyretin-mediated amyloidosis."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_rejected() {
        let registry = TrialRegistry::sample();
        assert!(registry.search(&TrialQuery::default()).is_err());

        // "any" phase alone is not an effective criterion
        let query = TrialQuery {
            phase: Some("any".to_string()),
            ..Default::default()
        };
        assert!(registry.search(&query).is_err());
    }

    #[test]
    fn test_condition_substring_case_insensitive() {
        let registry = TrialRegistry::sample();
        let query = TrialQuery {
            condition: Some("rare".to_string()),
            ..Default::default()
        };
        let results = registry.search(&query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "NCT04751877");
    }

    #[test]
    fn test_location_substring() {
        let registry = TrialRegistry::sample();
        let query = TrialQuery {
            location: Some("boston".to_string()),
            ..Default::default()
        };
        let results = registry.search(&query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].institution, "Boston Children's Hospital");
    }

    #[test]
    fn test_phase_exact_match() {
        let registry = TrialRegistry::sample();

        let query = TrialQuery {
            phase: Some("Phase 2".to_string()),
            ..Default::default()
        };
        let results = registry.search(&query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].phase, "Phase 2");

        // Exact: "Phase 1" does not match "Phase 1/2"
        let query = TrialQuery {
            phase: Some("Phase 1".to_string()),
            ..Default::default()
        };
        assert!(registry.search(&query).unwrap().is_empty());
    }

    #[test]
    fn test_criteria_combine() {
        let registry = TrialRegistry::sample();
        let query = TrialQuery {
            condition: Some("amyloid".to_string()),
            location: Some("texas".to_string()),
            phase: None,
        };
        assert!(registry.search(&query).unwrap().is_empty());
    }

    #[test]
    fn test_no_matches_is_ok_and_empty() {
        let registry = TrialRegistry::sample();
        let query = TrialQuery {
            condition: Some("influenza".to_string()),
            ..Default::default()
        };
        assert!(registry.search(&query).unwrap().is_empty());
    }
}
