//! MedGenius CLI - AI-assisted analysis for rare disease research.

use anyhow::Context;
use clap::Parser;
use medgenius_cli::commands;
use medgenius_cli::{Cli, Command, Config, Formatter};
use medgenius_llm::GroqProvider;
use medgenius_pipeline::{AnalysisKind, Pipeline};
use medgenius_trials::TrialRegistry;

#[tokio::main]
async fn main() {
    // Log to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing config file gets defaults written; an existing but
    // unparseable one is an error, never silently replaced
    let path = Config::path()?;
    let mut config = if path.exists() {
        Config::load_from(&path)
            .with_context(|| format!("failed to read config at {}", path.display()))?
    } else {
        let cfg = Config::default();
        cfg.save_to(&path).ok();
        cfg
    };

    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(model) = cli.model {
        config.pipeline.model = model;
    }
    config
        .pipeline
        .validate()
        .map_err(medgenius_cli::CliError::Config)?;
    tracing::debug!("Using endpoint {} model {}", config.endpoint, config.pipeline.model);

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Trials(args) => {
            let registry = TrialRegistry::sample();
            commands::execute_trials(args, &registry, &formatter)?;
        }
        cmd => {
            let api_key = config.resolve_api_key(cli.api_key)?;
            let provider = GroqProvider::new(&config.endpoint, api_key);
            let pipeline = Pipeline::new(provider, config.pipeline.clone());

            let (kind, args) = match cmd {
                Command::Analyze(args) => (AnalysisKind::PatientAnalysis, args),
                Command::Recommend(args) => (AnalysisKind::DrugRecommendation, args),
                Command::Predict(args) => (AnalysisKind::DiseasePrediction, args),
                Command::Trials(_) => unreachable!(),
            };
            commands::execute_analysis(kind, args, &pipeline, &formatter).await?;
        }
    }

    Ok(())
}
