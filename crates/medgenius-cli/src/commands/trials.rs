//! Trials command implementation.

use crate::cli::TrialsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use medgenius_trials::{TrialQuery, TrialRegistry};
use std::fs;
use std::path::Path;

/// Execute the trials command.
pub fn execute_trials(
    args: TrialsArgs,
    registry: &TrialRegistry,
    formatter: &Formatter,
) -> Result<()> {
    if let Some(id) = &args.export {
        let trial = registry
            .trials()
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| CliError::InvalidInput(format!("Unknown trial ID: {}", id)))?;

        let dir = args.output.as_deref().unwrap_or(".");
        let path = Path::new(dir).join(trial.export_file_name());
        fs::write(&path, trial.to_pretty_json())?;
        println!(
            "{}",
            formatter.success(&format!("Trial exported to {}", path.display()))
        );
        return Ok(());
    }

    let query = TrialQuery {
        condition: args.condition,
        location: args.location,
        phase: args.phase,
    };

    let results = registry.search(&query)?;
    println!("{}", formatter.format_trials(&results)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::tempdir;

    fn args() -> TrialsArgs {
        TrialsArgs {
            condition: None,
            location: None,
            phase: None,
            export: None,
            output: None,
        }
    }

    #[test]
    fn test_search_by_condition() {
        let registry = TrialRegistry::sample();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut args = args();
        args.condition = Some("leukodystrophy".to_string());

        assert!(execute_trials(args, &registry, &formatter).is_ok());
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let registry = TrialRegistry::sample();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = execute_trials(args(), &registry, &formatter);
        assert!(matches!(result, Err(CliError::Trials(_))));
    }

    #[test]
    fn test_export_writes_trial_file() {
        let dir = tempdir().unwrap();
        let registry = TrialRegistry::sample();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let mut args = args();
        args.export = Some("NCT04751877".to_string());
        args.output = Some(dir.path().to_string_lossy().into_owned());
        execute_trials(args, &registry, &formatter).unwrap();

        let path = dir.path().join("clinical_trial_NCT04751877.json");
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("MD Anderson Cancer Center"));
    }

    #[test]
    fn test_export_unknown_id_fails() {
        let registry = TrialRegistry::sample();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let mut args = args();
        args.export = Some("NCT00000000".to_string());
        let result = execute_trials(args, &registry, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
