//! Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Issue and check extended warranties for catalog products
#[derive(Debug, Parser)]
#[command(name = "warranty", version, about)]
pub struct Cli {
    /// Log filter directive; overrides WARRANTY_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Issue a warranty and print it as JSON
    Generate(GenerateArgs),
    /// Report whether a code is eligible and which tier its product is in
    Check(CheckArgs),
    /// Price and date a warranty without issuing it
    Quote(QuoteArgs),
}

/// Where products and issued warranties are read from
#[derive(Debug, Clone, Default, Args)]
pub struct StoreArgs {
    /// JSON catalog of products
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// JSON ledger of issued warranties, created on first use
    #[arg(long, value_name = "FILE")]
    pub ledger: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Product code
    #[arg(long)]
    pub code: String,

    /// Name of the customer buying the warranty
    #[arg(long)]
    pub customer: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Product code
    #[arg(long)]
    pub code: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Product code
    #[arg(long)]
    pub code: String,

    #[command(flatten)]
    pub store: StoreArgs,
}
