//! Core pipeline implementation

use crate::analysis::AnalysisKind;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::extract::extract_payload;
use crate::normalize::normalize;
use crate::outcome::AnalysisOutcome;
use crate::prompt::build_request;
use medgenius_domain::{ChatCompletion, NormalizedRecord};
use tracing::{debug, info, warn};

/// The shared analysis pipeline, parametrized per run by an
/// [`AnalysisKind`].
///
/// One provider call per run; no retries, no caching, no deduplication
/// of identical concurrent runs.
pub struct Pipeline<C: ChatCompletion> {
    provider: C,
    config: PipelineConfig,
}

impl<C> Pipeline<C>
where
    C: ChatCompletion,
    C::Error: Into<PipelineError>,
{
    /// Create a pipeline over the given provider.
    pub fn new(provider: C, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run one analysis.
    ///
    /// Never returns an error: failure is folded into the outcome,
    /// either as a `Degraded` substitution or, for kinds without a
    /// fallback, a `Failed` result.
    pub async fn run(&self, kind: AnalysisKind, input: &str) -> AnalysisOutcome {
        info!("Starting {} run, input length {}", kind.title(), input.len());

        match self.attempt(kind, input).await {
            Ok(record) => {
                info!("{} complete: {} fields", kind.title(), record.len());
                AnalysisOutcome::Genuine(record)
            }
            Err(reason) => {
                warn!("{} failed: {}", kind.title(), reason);
                match kind.fallback() {
                    Some(record) => AnalysisOutcome::Degraded { record, reason },
                    None => AnalysisOutcome::Failed(reason),
                }
            }
        }
    }

    /// Builder → provider → extractor → normalizer. The first failure
    /// short-circuits; an HTTP failure never reaches the extractor.
    async fn attempt(
        &self,
        kind: AnalysisKind,
        input: &str,
    ) -> Result<NormalizedRecord, PipelineError> {
        let request = build_request(kind, input, &self.config);
        debug!("Prompt length: {} chars", request.user.len());

        let reply = self
            .provider
            .complete(&request)
            .await
            .map_err(Into::into)?;
        debug!("Reply length: {} chars", reply.len());

        let candidate = extract_payload(&reply)?;
        normalize(&candidate, &kind.schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medgenius_llm::MockProvider;

    fn pipeline(reply: &str) -> Pipeline<MockProvider> {
        Pipeline::new(MockProvider::new(reply), PipelineConfig::default())
    }

    #[tokio::test]
    async fn test_fenced_reply_yields_genuine_record() {
        let reply = "Here you go:\n```json\n{\"symptoms\":[\"cough\",\"fever\"]}\n```\nThanks!";
        let outcome = pipeline(reply)
            .run(AnalysisKind::PatientAnalysis, "some report")
            .await;

        assert!(outcome.is_genuine());
        let record = outcome.record().unwrap();

        let symptoms: Vec<&str> = record
            .sequence("symptoms")
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(symptoms, vec!["cough", "fever"]);

        // Every other declared sequence field is an empty sequence
        for field in [
            "medicalHistory",
            "geneticMarkers",
            "currentMedications",
            "allergies",
        ] {
            assert_eq!(record.sequence(field).map(Vec::len), Some(0));
        }
    }

    #[tokio::test]
    async fn test_unstructured_reply_substitutes_fallback() {
        let outcome = pipeline("No JSON anywhere in this reply.")
            .run(AnalysisKind::PatientAnalysis, "some report")
            .await;

        assert!(outcome.is_degraded());
        assert!(matches!(
            outcome.reason(),
            Some(PipelineError::Extraction)
        ));

        // Field-for-field the documented constant
        let expected = AnalysisKind::PatientAnalysis.fallback().unwrap();
        assert_eq!(outcome.record().unwrap(), &expected);
    }

    #[tokio::test]
    async fn test_http_failure_short_circuits_before_extraction() {
        let provider = MockProvider::new("```json\n{}\n```");
        provider.fail_with_status(500);
        let pipeline = Pipeline::new(provider, PipelineConfig::default());

        let outcome = pipeline
            .run(AnalysisKind::DrugRecommendation, "patient details")
            .await;

        assert!(outcome.is_degraded());
        assert!(matches!(outcome.reason(), Some(PipelineError::Network(_))));
        assert_eq!(
            outcome.record().unwrap(),
            &AnalysisKind::DrugRecommendation.fallback().unwrap()
        );
    }

    #[tokio::test]
    async fn test_disease_prediction_failure_leaves_result_empty() {
        let outcome = pipeline("still no structure here")
            .run(AnalysisKind::DiseasePrediction, "some report")
            .await;

        assert!(matches!(outcome, AnalysisOutcome::Failed(_)));
        assert!(outcome.record().is_none());
    }

    #[tokio::test]
    async fn test_unparseable_payload_is_normalize_failure() {
        let outcome = pipeline("```json\n{not valid json}\n```")
            .run(AnalysisKind::PatientAnalysis, "report")
            .await;

        assert!(outcome.is_degraded());
        assert!(matches!(
            outcome.reason(),
            Some(PipelineError::Normalize(_))
        ));
    }

    #[tokio::test]
    async fn test_drug_recommendation_genuine_path() {
        let reply = r#"{"patientData": {"id": "PT-1", "age": 62}, "drugRecommendations": {"name": "Empagliflozin", "score": 89}}"#;
        let outcome = pipeline(reply)
            .run(AnalysisKind::DrugRecommendation, "62-year-old with T2DM")
            .await;

        assert!(outcome.is_genuine());
        let record = outcome.record().unwrap();
        // A single recommendation object wraps into a one-element sequence
        let drugs = record.sequence("drugRecommendations").unwrap();
        assert_eq!(drugs.len(), 1);
        assert_eq!(drugs[0]["name"], "Empagliflozin");
    }
}
