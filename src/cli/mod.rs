//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Plantclip using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Plantclip - power plant satellite tile exporter
#[derive(Parser, Debug)]
#[command(name = "plantclip")]
#[command(version, about, long_about = None)]
#[command(author = "Plantclip Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "plantclip.toml", env = "PLANTCLIP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PLANTCLIP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start one Earth Engine export task per plant
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show the state of a submitted export operation
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["plantclip", "export"]);
        assert_eq!(cli.config, "plantclip.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["plantclip", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["plantclip", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "plantclip", "export", "--start", "10", "--end", "12", "--source", "ls8", "--dry-run",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.start, Some(10));
                assert_eq!(args.end, Some(12));
                assert_eq!(args.source, vec!["ls8".to_string()]);
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["plantclip", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["plantclip", "status", "projects/p/operations/ABC"]);
        match cli.command {
            Commands::Status(args) => assert_eq!(args.operation, "projects/p/operations/ABC"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["plantclip", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
