//! Extended Warranty - Command Line Binary
//!
//! # Usage
//!
//! ```bash
//! # Issue a warranty from a catalog, remembering it in a ledger
//! warranty generate --code A1E2I3 --customer "Ana" --catalog catalog.json --ledger ledger.json
//!
//! # Is this code eligible, and which tier is it in?
//! warranty check --code A1E2I3 --catalog catalog.json
//!
//! # Price a warranty without issuing it
//! warranty quote --code A1E2I3 --catalog catalog.json
//! ```
//!
//! # Environment Variables
//!
//! * `WARRANTY_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: warn)
//! * `WARRANTY_LOG_JSON` - Emit JSON logs (default: false)
//! * `WARRANTY_TIMEZONE` - IANA timezone for "today" (default: machine local)
//! * `WARRANTY_CATALOG_PATH` - Catalog file when `--catalog` is absent
//! * `WARRANTY_LEDGER_PATH` - Ledger file when `--ledger` is absent
//! * `WARRANTY_RULES__THRESHOLD`, `WARRANTY_RULES__PREMIUM_RATE`,
//!   `WARRANTY_RULES__STANDARD_RATE`, `WARRANTY_RULES__PREMIUM_TERM_DAYS`,
//!   `WARRANTY_RULES__STANDARD_TERM_DAYS` - Pricing and term rules

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use interface_cli::cli::Cli;
use interface_cli::config::AppConfig;
use interface_cli::error::EXIT_FAILURE;
use interface_cli::{commands, logging};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    logging::init_tracing(&config.log_level, config.log_json);

    match commands::run(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Loads configuration from the environment and applies command line overrides
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::from_env().context("reading WARRANTY_* environment")?;

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.log_json |= cli.log_json;

    config.validate().context("invalid configuration")?;
    Ok(config)
}
