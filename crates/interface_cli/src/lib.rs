//! Command Line Layer
//!
//! The `warranty` binary wires the warranty engine to a JSON product catalog,
//! an optional JSON ledger of issued warranties and the system clock.
//!
//! # Architecture
//!
//! - **cli**: argument parsing with clap
//! - **config**: `WARRANTY_*` environment configuration
//! - **commands**: one function per subcommand, returning printable output
//! - **output**: JSON shapes written to stdout
//! - **logging**: tracing subscriber set-up, logs go to stderr
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use interface_cli::{cli::Cli, commands, config::AppConfig};
//!
//! let cli = Cli::parse();
//! let config = AppConfig::from_env()?;
//! let output = commands::run(&cli.command, &config)?;
//! println!("{output}");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use error::CliError;
