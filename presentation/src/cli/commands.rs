//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for kubereport
#[derive(Parser, Debug)]
#[command(name = "kubereport")]
#[command(author, version, about = "Report schema-validation results as console text, JSON or TAP")]
#[command(long_about = r#"
kubereport renders the results of a schema-validation run.

Results are read as JSON (an array of result objects) or JSON Lines (one
result object per line) from the given files, or from stdin when no files
are given.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./kubereport.toml     Project-level config
3. ~/.config/kubereport/config.toml   Global config

Example:
  kubereport results.json
  kubereport -o tap results.jsonl
  validator --emit-json manifests/ | kubereport -o json --failures-only
"#)]
pub struct Cli {
    /// Result files to report (JSON array or JSON Lines); stdin if empty
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format: stdout, json or tap (unknown values fall back to stdout)
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Only report failures
    #[arg(long, visible_alias = "quiet")]
    pub failures_only: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["kubereport"]);
        assert!(cli.files.is_empty());
        assert!(cli.output.is_none());
        assert!(!cli.failures_only);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["kubereport", "-o", "tap", "--quiet", "-vv", "a.json", "b.jsonl"]);
        assert_eq!(cli.output.as_deref(), Some("tap"));
        assert!(cli.failures_only);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.files, vec![PathBuf::from("a.json"), PathBuf::from("b.jsonl")]);
    }

    #[test]
    fn test_unknown_output_is_accepted() {
        let cli = Cli::parse_from(["kubereport", "--output", "junit"]);
        assert_eq!(cli.output.as_deref(), Some("junit"));
    }
}
