//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// FSM Flowchart Generator CLI
#[derive(Parser, Debug)]
#[command(name = "fsm-flowchart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overrides config)
    #[arg(long, global = true, env = "FSM_FLOWCHART_LOG")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a state machine definition as a flowchart
    Render {
        /// Path to the definition file (.toml or .json)
        definition: PathBuf,

        /// Layout token for the flowchart header (LR, TD, ...)
        #[arg(short = 't', long = "type")]
        diagram_type: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "mermaid")]
        format: OutputFormat,
    },

    /// Print graph statistics for a definition
    Inspect {
        /// Path to the definition file (.toml or .json)
        definition: PathBuf,
    },
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One statement per line, each terminated by `;`
    Mermaid,
    /// Single line, statements joined by `;`
    Inline,
    /// JSON dump of the graph
    Json,
    /// Plain text statistics table
    Table,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Render {
            definition,
            diagram_type,
            output,
            format,
        } => commands::render::execute(definition, diagram_type, output, format, &config),
        Commands::Inspect { definition } => commands::inspect::execute(definition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "fsm-flowchart",
            "render",
            "machine.toml",
            "--type",
            "TD",
            "--format",
            "inline",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                definition,
                diagram_type,
                output,
                format,
            } => {
                assert_eq!(definition, PathBuf::from("machine.toml"));
                assert_eq!(diagram_type.as_deref(), Some("TD"));
                assert!(output.is_none());
                assert_eq!(format, OutputFormat::Inline);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["fsm-flowchart", "render", "machine.json"]).unwrap();
        match cli.command {
            Commands::Render { format, diagram_type, .. } => {
                assert_eq!(format, OutputFormat::Mermaid);
                assert!(diagram_type.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from([
            "fsm-flowchart",
            "inspect",
            "machine.toml",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_definition_is_required() {
        assert!(Cli::try_parse_from(["fsm-flowchart", "render"]).is_err());
    }
}
