//! Analysis command implementation, shared by analyze, recommend and
//! predict.

use crate::cli::AnalysisArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use medgenius_domain::ChatCompletion;
use medgenius_pipeline::{AnalysisKind, AnalysisOutcome, Pipeline, PipelineError};
use std::fs;
use std::path::Path;

/// Execute one analysis command.
pub async fn execute_analysis<C>(
    kind: AnalysisKind,
    args: AnalysisArgs,
    pipeline: &Pipeline<C>,
    formatter: &Formatter,
) -> Result<()>
where
    C: ChatCompletion,
    C::Error: Into<PipelineError>,
{
    let input = resolve_input(&args)?;

    if let Some(name) = &args.attachment {
        // Attachments are noted but never read or transmitted
        println!(
            "{}",
            formatter.info(&format!("Attachment noted: {}", name))
        );
    }

    let outcome = pipeline.run(kind, &input).await;

    let record = match &outcome {
        AnalysisOutcome::Genuine(record) => record,
        AnalysisOutcome::Degraded { record, reason } => {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "{} failed ({}); showing sample data",
                    kind.title(),
                    reason
                ))
            );
            record
        }
        AnalysisOutcome::Failed(reason) => {
            return Err(CliError::Analysis(reason.clone()));
        }
    };

    println!("{}", formatter.format_record(kind.title(), record)?);

    if args.export {
        let dir = args.output.as_deref().unwrap_or(".");
        let path = Path::new(dir).join(kind.export_file_name());
        fs::write(&path, record.to_pretty_json())?;
        println!(
            "{}",
            formatter.success(&format!("Results exported to {}", path.display()))
        );
    }

    Ok(())
}

/// Resolve the analysis input from the positional argument or a file.
/// An empty result is fine; the pipeline substitutes its sample report.
fn resolve_input(args: &AnalysisArgs) -> Result<String> {
    match (&args.text, &args.file) {
        (Some(_), Some(_)) => Err(CliError::InvalidInput(
            "Provide input text or --file, not both".to_string(),
        )),
        (None, Some(file)) => Ok(fs::read_to_string(file)?),
        (Some(text), None) => Ok(text.clone()),
        (None, None) => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use medgenius_llm::MockProvider;
    use medgenius_pipeline::PipelineConfig;
    use tempfile::tempdir;

    fn args() -> AnalysisArgs {
        AnalysisArgs {
            text: Some("56-year-old male with muscle weakness".to_string()),
            file: None,
            attachment: None,
            export: false,
            output: None,
        }
    }

    fn pipeline(reply: &str) -> Pipeline<MockProvider> {
        Pipeline::new(MockProvider::new(reply), PipelineConfig::default())
    }

    #[tokio::test]
    async fn test_genuine_analysis_succeeds() {
        let pipeline = pipeline("```json\n{\"symptoms\": [\"weakness\"]}\n```");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result =
            execute_analysis(AnalysisKind::PatientAnalysis, args(), &pipeline, &formatter).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_export_writes_per_kind_file() {
        let dir = tempdir().unwrap();
        let mut args = args();
        args.export = true;
        args.output = Some(dir.path().to_string_lossy().into_owned());

        let pipeline = pipeline("```json\n{\"symptoms\": [\"weakness\"]}\n```");
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_analysis(AnalysisKind::PatientAnalysis, args, &pipeline, &formatter)
            .await
            .unwrap();

        let path = dir.path().join("patient_analysis_results.json");
        let contents = fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["symptoms"][0], "weakness");
    }

    #[tokio::test]
    async fn test_failed_prediction_is_an_error() {
        let pipeline = pipeline("no structure in this reply");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result =
            execute_analysis(AnalysisKind::DiseasePrediction, args(), &pipeline, &formatter).await;
        assert!(matches!(result, Err(CliError::Analysis(_))));
    }

    #[test]
    fn test_input_from_both_sources_is_rejected() {
        let mut args = args();
        args.file = Some("report.txt".to_string());
        assert!(matches!(
            resolve_input(&args),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_input_is_empty() {
        let mut args = args();
        args.text = None;
        assert_eq!(resolve_input(&args).unwrap(), "");
    }
}
