//! # Title Sentinel CLI
//!
//! Command-line interface for validating pull request and issue titles
//! against configured rules.
//!
//! This binary is the adapter between the hosting platform and the
//! `title_sentinel_core` rule engine: it reads the triggering event's body
//! from a JSON file, coerces the raw string rule inputs into typed values,
//! runs the engine once, and maps the outcome to a process exit code.
//!
//! # Commands
//!
//! - `check` - Validate the title carried by a triggering event
//! - `config` - Manage the rule configuration file
//!
//! # Examples
//!
//! ```bash
//! # Check the title carried by an event file
//! title-sentinel check --event-path event.json --regex '^(feat|fix|chore):'
//!
//! # The same, driven by the hosting environment
//! GITHUB_EVENT_PATH=event.json INPUT_MIN_LENGTH=5 title-sentinel check
//!
//! # Initialize a rule configuration file
//! title-sentinel config init
//! ```

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use std::process::{ExitCode, Termination};
use tracing::{error, info};

/// Command implementations for the CLI.
mod commands;

/// Configuration file handling for the CLI.
mod config;

/// Error types specific to the CLI.
mod errors;

/// Coercion of raw string inputs into typed rule values.
mod inputs;

use commands::{check_title::CheckArgs, config_cmd::ConfigCommands};
use errors::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line interface structure for Title Sentinel.
///
/// This struct defines the top-level CLI interface using clap's derive API.
/// It includes global options like verbose logging and the main command
/// structure.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the Title Sentinel CLI.
#[derive(Subcommand)]
enum Commands {
    /// Validate the title carried by a triggering event
    #[command(name = "check")]
    Check(CheckArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Main entry point for the Title Sentinel CLI.
///
/// Initializes logging, parses command-line arguments, dispatches to the
/// appropriate command handler, and maps any failure to its exit code: a
/// failed validation exits with 1, a configuration problem with 2, an
/// unreadable event payload with 4, bad arguments with 5.
fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("TITLE_SENTINEL_LOG"))
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbose logging if requested
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Check(args) => commands::check_title::execute(args),
        Commands::Config(cmd) => commands::config_cmd::execute(cmd),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            e.report()
        }
    }
}
