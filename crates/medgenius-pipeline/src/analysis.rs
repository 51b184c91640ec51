//! Analysis profiles
//!
//! Each analysis kind is one parametrization of the shared pipeline: a
//! system instruction, a user-content preamble, a declared result
//! schema, an optional fixed fallback record, and an export file name.

use crate::fallback;
use medgenius_domain::{FieldShape, NormalizedRecord, RecordSchema};

/// Built-in example report substituted when the user submits no text.
pub const SAMPLE_PATIENT_REPORT: &str = "56-year-old male with persistent cough, fever of 101.2°F, shortness of breath, and fatigue. Medical history includes hypertension diagnosed in 2015 and Type 2 Diabetes diagnosed in 2018. Genetic test shows CYP2D6 - Intermediate metabolizer and SLCO1B1 - Reduced function. Currently taking Lisinopril 10mg daily and Metformin 500mg twice daily. Known allergies to Penicillin and Shellfish.";

/// The analysis kinds the pipeline can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Extract structured data from a free-text patient report.
    PatientAnalysis,
    /// Recommend drugs for a patient profile.
    DrugRecommendation,
    /// Predict diseases and risk factors for a patient profile.
    DiseasePrediction,
}

impl AnalysisKind {
    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisKind::PatientAnalysis => "Patient Report Analysis",
            AnalysisKind::DrugRecommendation => "Drug Recommendation",
            AnalysisKind::DiseasePrediction => "Disease Prediction",
        }
    }

    /// The fixed system instruction sent with every request.
    pub fn system_instruction(&self) -> &'static str {
        match self {
            AnalysisKind::PatientAnalysis => {
                "You are a medical AI assistant specialized in analyzing patient reports. \
                 Extract key information and organize it into structured data. Return a \
                 JSON object with demographics, symptoms, medicalHistory, geneticMarkers, \
                 currentMedications, and allergies properties."
            }
            AnalysisKind::DrugRecommendation => {
                "You are a medical AI assistant specialized in drug recommendations based \
                 on patient data. Provide comprehensive, evidence-based drug \
                 recommendations with supporting data."
            }
            AnalysisKind::DiseasePrediction => {
                "You are a medical AI assistant. Provide disease predictions in pure JSON \
                 format with NO markdown, NO text before/after the JSON."
            }
        }
    }

    /// The preamble prepended to the user's free text.
    pub fn user_preamble(&self) -> &'static str {
        match self {
            AnalysisKind::PatientAnalysis => {
                "Analyze this patient report and extract key information into JSON format \
                 with demographics, symptoms, medicalHistory, geneticMarkers, \
                 currentMedications, and allergies fields: "
            }
            AnalysisKind::DrugRecommendation => {
                "Based on these patient details, provide drug recommendations with \
                 efficacy scores, side effect profiles, and genetic compatibility. Format \
                 your response as a JSON object with patientData and drugRecommendations \
                 arrays. "
            }
            AnalysisKind::DiseasePrediction => {
                "Analyze this patient and return a JSON object with these fields: \
                 predictedDiseases, riskFactors, geneticFactors, recommendations. "
            }
        }
    }

    /// The declared shape of this kind's normalized record.
    pub fn schema(&self) -> RecordSchema {
        match self {
            AnalysisKind::PatientAnalysis => RecordSchema::new()
                .field("demographics", FieldShape::Record)
                .field("symptoms", FieldShape::ScalarSeq)
                .field("medicalHistory", FieldShape::ScalarSeq)
                .field("geneticMarkers", FieldShape::ScalarSeq)
                .field("currentMedications", FieldShape::ScalarSeq)
                .field("allergies", FieldShape::ScalarSeq),
            AnalysisKind::DrugRecommendation => RecordSchema::new()
                .field("patientData", FieldShape::Record)
                .field("drugRecommendations", FieldShape::RecordSeq),
            AnalysisKind::DiseasePrediction => RecordSchema::new()
                .field("predictedDiseases", FieldShape::RecordSeq)
                .field("riskFactors", FieldShape::RecordSeq)
                .field("geneticFactors", FieldShape::RecordSeq)
                .field("recommendations", FieldShape::ScalarSeq),
        }
    }

    /// The fixed record substituted when the pipeline fails.
    ///
    /// Disease prediction has none: its failure leaves the result
    /// empty instead of masking it with sample data.
    pub fn fallback(&self) -> Option<NormalizedRecord> {
        match self {
            AnalysisKind::PatientAnalysis => Some(fallback::patient_analysis()),
            AnalysisKind::DrugRecommendation => Some(fallback::drug_recommendation()),
            AnalysisKind::DiseasePrediction => None,
        }
    }

    /// File name used when the record is exported as JSON.
    pub fn export_file_name(&self) -> &'static str {
        match self {
            AnalysisKind::PatientAnalysis => "patient_analysis_results.json",
            AnalysisKind::DrugRecommendation => "drug_recommendations.json",
            AnalysisKind::DiseasePrediction => "disease_prediction_results.json",
        }
    }
}
