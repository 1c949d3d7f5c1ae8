//! CLI entrypoint for kubereport
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use kubereport_application::ReportResultsUseCase;
use kubereport_domain::{OutputFormat, ValidationResult};
use kubereport_infrastructure::{ConfigLoader, FileConfig, ResultReader, StdoutSink};
use kubereport_presentation::{Cli, OutputConfig, OutputManager};
use std::io;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout is reserved for the report
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let output = resolve_output_config(&cli, &file_config);
    info!(
        format = %output.format,
        failures_only = output.failures_only,
        "Starting kubereport"
    );

    let results = read_results(&cli)?;

    // === Dependency Injection ===
    let manager = OutputManager::from_config(&output, Box::new(StdoutSink::stdout()));
    let mut use_case = ReportResultsUseCase::new(manager);
    let summary = use_case
        .execute(&results)
        .context("Failed to write report")?;

    if summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Merge CLI flags over file configuration
fn resolve_output_config(cli: &Cli, file: &FileConfig) -> OutputConfig {
    let format = match cli.output.as_deref() {
        Some(name) => {
            if name.parse::<OutputFormat>().is_err() {
                warn!(
                    "Unknown output format '{}', using {} (valid: {})",
                    name,
                    OutputFormat::default(),
                    OutputFormat::valid_names().join(", ")
                );
            }
            OutputFormat::from_name_or_default(name)
        }
        None => file.output.format.unwrap_or_default(),
    };

    OutputConfig {
        format,
        failures_only: cli.failures_only || file.output.failures_only,
        color: file.output.color && !cli.no_color,
    }
}

fn read_results(cli: &Cli) -> Result<Vec<ValidationResult>> {
    if cli.files.is_empty() {
        return Ok(ResultReader::read_from(io::stdin().lock(), "<stdin>")?);
    }

    let mut results = Vec::new();
    for path in &cli.files {
        results.extend(ResultReader::read_path(path)?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubereport_infrastructure::FileOutputConfig;

    fn file_config(format: Option<OutputFormat>, failures_only: bool, color: bool) -> FileConfig {
        FileConfig {
            output: FileOutputConfig {
                format,
                failures_only,
                color,
            },
        }
    }

    #[test]
    fn test_cli_format_overrides_file() {
        let cli = Cli::parse_from(["kubereport", "-o", "json"]);
        let config = resolve_output_config(&cli, &file_config(Some(OutputFormat::Tap), false, true));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_file_format_used_without_flag() {
        let cli = Cli::parse_from(["kubereport"]);
        let config = resolve_output_config(&cli, &file_config(Some(OutputFormat::Tap), true, true));
        assert_eq!(config.format, OutputFormat::Tap);
        assert!(config.failures_only);
    }

    #[test]
    fn test_unknown_cli_format_falls_back_to_stdout() {
        let cli = Cli::parse_from(["kubereport", "-o", "junit"]);
        let config = resolve_output_config(&cli, &file_config(Some(OutputFormat::Tap), false, true));
        assert_eq!(config.format, OutputFormat::Stdout);
    }

    #[test]
    fn test_no_color_flag_wins() {
        let cli = Cli::parse_from(["kubereport", "--no-color"]);
        let config = resolve_output_config(&cli, &FileConfig::default());
        assert!(!config.color);
        assert_eq!(config.format, OutputFormat::Stdout);
    }
}
