//! Fallback Supplier
//!
//! Fixed per-analysis records substituted when the real pipeline
//! fails, so presentation code can always render something. Callers
//! can tell a substituted record apart via
//! [`AnalysisOutcome::Degraded`](crate::AnalysisOutcome).

use medgenius_domain::NormalizedRecord;
use serde_json::{json, Value};

fn record_from(value: Value) -> NormalizedRecord {
    match value {
        Value::Object(map) => NormalizedRecord::from(map),
        _ => NormalizedRecord::new(),
    }
}

/// Canned patient-analysis result.
pub(crate) fn patient_analysis() -> NormalizedRecord {
    record_from(json!({
        "demographics": {
            "age": 56,
            "gender": "Male",
            "ethnicity": "Caucasian"
        },
        "symptoms": [
            "Persistent cough",
            "Fever (101.2°F)",
            "Shortness of breath",
            "Fatigue"
        ],
        "medicalHistory": [
            "Hypertension (diagnosed 2015)",
            "Type 2 Diabetes (diagnosed 2018)"
        ],
        "geneticMarkers": [
            "CYP2D6 - Intermediate metabolizer",
            "SLCO1B1 - Reduced function"
        ],
        "currentMedications": [
            "Lisinopril 10mg daily",
            "Metformin 500mg twice daily"
        ],
        "allergies": [
            "Penicillin (severe rash)",
            "Shellfish"
        ]
    }))
}

/// Canned drug-recommendation result.
pub(crate) fn drug_recommendation() -> NormalizedRecord {
    record_from(json!({
        "patientData": {
            "id": "PT-10482",
            "name": "Patient",
            "age": 56,
            "gender": "Male",
            "condition": "Type 2 Diabetes with Hypertension",
            "geneticMarkers": [
                { "name": "CYP2D6", "status": "Intermediate metabolizer" },
                { "name": "SLCO1B1", "status": "Reduced function" }
            ]
        },
        "drugRecommendations": [
            {
                "name": "Metformin XR",
                "score": 92,
                "confidence": "High",
                "effectiveness": 94,
                "sideEffects": "Low",
                "interactions": "Minimal",
                "geneticMatch": "Optimal",
                "reasoning": [
                    "Excellent glycemic control for T2DM patients",
                    "Low risk profile for patients with hypertension",
                    "Compatible with CYP2D6 intermediate metabolizer status",
                    "Minimal drug interactions with current medications"
                ]
            },
            {
                "name": "Lisinopril",
                "score": 88,
                "confidence": "High",
                "effectiveness": 90,
                "sideEffects": "Low to Moderate",
                "interactions": "Minimal",
                "geneticMatch": "Good",
                "reasoning": [
                    "Effective blood pressure management",
                    "Protective renal effects beneficial for diabetic patients",
                    "Well-tolerated in patients with metabolic conditions",
                    "Favorable pharmacokinetic profile for the patient's genetic markers"
                ]
            }
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_analysis_fallback_is_stable() {
        // Two calls must yield identical records, field for field
        assert_eq!(patient_analysis(), patient_analysis());

        let record = patient_analysis();
        assert_eq!(record.sequence("symptoms").map(|s| s.len()), Some(4));
        assert_eq!(record.sequence("allergies").map(|s| s.len()), Some(2));
        assert!(record.mapping("demographics").is_some());
    }

    #[test]
    fn test_drug_recommendation_fallback_is_stable() {
        assert_eq!(drug_recommendation(), drug_recommendation());

        let record = drug_recommendation();
        let drugs = record.sequence("drugRecommendations").unwrap();
        assert_eq!(drugs.len(), 2);
        assert_eq!(drugs[0]["name"], "Metformin XR");
        assert_eq!(drugs[1]["name"], "Lisinopril");
    }
}
