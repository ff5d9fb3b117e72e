//! `finstat` command line.
//!
//! Reads a pipeline config (or builds one from flags), runs the pipeline and
//! prints the result JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use finstat_pipeline::{PipelineConfig, PipelineError, execute};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finstat")]
#[command(about = "Technical indicators and statistics for a daily price series", long_about = None)]
struct Cli {
    /// Pipeline config JSON file
    #[arg(short, long, conflicts_with = "symbol")]
    config: Option<PathBuf>,

    /// Symbol to analyse when no config file is given
    #[arg(short, long)]
    symbol: Option<String>,

    /// Saved envelope to read instead of the default data path
    #[arg(long, requires = "symbol")]
    data_file: Option<PathBuf>,

    /// Skip the statistical analysis
    #[arg(long)]
    no_analysis: bool,

    /// Omit the per-bar indicator table
    #[arg(long)]
    no_table: bool,

    /// Pretty-print the result
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("finstat: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<String, PipelineError> {
    let config_json = config_json(cli)?;

    // Only the level is needed here; the runner validates the full config.
    let level = PipelineConfig::from_json(&config_json)
        .map(|c| c.logging.level)
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&level);

    let output = execute(&config_json)?;
    if cli.pretty {
        let value: serde_json::Value = serde_json::from_str(&output)
            .map_err(|e| PipelineError::ResultSerialize(e.to_string()))?;
        return serde_json::to_string_pretty(&value)
            .map_err(|e| PipelineError::ResultSerialize(e.to_string()));
    }
    Ok(output)
}

fn config_json(cli: &Cli) -> Result<String, PipelineError> {
    if let Some(path) = &cli.config {
        let mut config: serde_json::Value = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::ConfigParse(format!("{}: {e}", path.display())))
            .and_then(|text| {
                serde_json::from_str(&text).map_err(|e| PipelineError::ConfigParse(e.to_string()))
            })?;
        if let Some(obj) = config.as_object_mut() {
            if cli.no_analysis {
                obj.insert("run_analysis".into(), false.into());
            }
            if cli.no_table {
                obj.insert("include_table".into(), false.into());
            }
        }
        return Ok(config.to_string());
    }

    let Some(symbol) = &cli.symbol else {
        return Err(PipelineError::ConfigValidation(
            "either --config or --symbol is required".to_string(),
        ));
    };
    let mut config = PipelineConfig::for_symbol(symbol.clone());
    config.data_file.clone_from(&cli.data_file);
    config.run_analysis = !cli.no_analysis;
    config.include_table = !cli.no_table;

    serde_json::to_string(&config).map_err(|e| PipelineError::ConfigParse(e.to_string()))
}

fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
