//! Subcommand handlers
//!
//! Each handler builds a `WarrantyService` over the requested stores, runs
//! one operation and returns the JSON to print.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use core_kernel::TimeProvider;
use domain_warranty::{is_covered, WarrantyError, WarrantyPort, WarrantyService};
use infra_store::{load_catalog, FileWarrantyLedger, InMemoryProductStore, InMemoryWarrantyStore};

use crate::cli::{CheckArgs, Command, GenerateArgs, QuoteArgs, StoreArgs};
use crate::config::AppConfig;
use crate::error::CliError;
use crate::output::{CheckOutput, QuoteOutput, WarrantyOutput};

/// Runs a subcommand against the system clock
pub fn run(command: &Command, config: &AppConfig) -> Result<String, CliError> {
    let clock = config.clock()?;
    run_with_clock(command, config, Arc::new(clock))
}

/// Runs a subcommand with an explicit source of "today"
pub fn run_with_clock(
    command: &Command,
    config: &AppConfig,
    clock: Arc<dyn TimeProvider>,
) -> Result<String, CliError> {
    match command {
        Command::Generate(args) => generate(args, config, clock),
        Command::Check(args) => check(args, config, clock),
        Command::Quote(args) => quote(args, config, clock),
    }
}

fn generate(
    args: &GenerateArgs,
    config: &AppConfig,
    clock: Arc<dyn TimeProvider>,
) -> Result<String, CliError> {
    let catalog = catalog_path(&args.store, config).ok_or(CliError::MissingCatalog)?;
    let service = build_service(Some(catalog), &args.store, config, clock)?;

    let warranty = service.generate_warranty(&args.code, &args.customer)?;
    info!(code = %args.code, id = %warranty.id, "Warranty generated");

    Ok(serde_json::to_string_pretty(&WarrantyOutput::from(&warranty))?)
}

fn check(
    args: &CheckArgs,
    config: &AppConfig,
    clock: Arc<dyn TimeProvider>,
) -> Result<String, CliError> {
    let eligible = is_covered(&args.code);
    let mut output = CheckOutput {
        code: args.code.clone(),
        eligible,
        tier: None,
        already_covered: None,
    };

    let catalog = catalog_path(&args.store, config);
    let has_ledger = resolve(&args.store.ledger, &config.ledger_path).is_some();
    if catalog.is_none() && !has_ledger {
        debug!("No catalog or ledger given, reporting eligibility only");
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let has_catalog = catalog.is_some();
    let service = build_service(catalog, &args.store, config, clock)?;

    if eligible && has_catalog {
        output.tier = match service.quote(&args.code) {
            Ok(quote) => Some(quote.tier),
            Err(WarrantyError::ProductNotFound(_)) => None,
            Err(e) => return Err(e.into()),
        };
    }
    if has_ledger {
        output.already_covered = Some(service.has_warranty(&args.code)?);
    }

    Ok(serde_json::to_string_pretty(&output)?)
}

fn quote(
    args: &QuoteArgs,
    config: &AppConfig,
    clock: Arc<dyn TimeProvider>,
) -> Result<String, CliError> {
    let catalog = catalog_path(&args.store, config).ok_or(CliError::MissingCatalog)?;
    let service = build_service(Some(catalog), &args.store, config, clock)?;

    let quote = service.quote(&args.code)?;
    Ok(serde_json::to_string_pretty(&QuoteOutput::new(&args.code, &quote))?)
}

// without a catalog the product store is empty; warranty lookups still work
fn build_service(
    catalog: Option<PathBuf>,
    store: &StoreArgs,
    config: &AppConfig,
    clock: Arc<dyn TimeProvider>,
) -> Result<WarrantyService, CliError> {
    let products = Arc::new(match catalog {
        Some(path) => load_catalog(&path)?,
        None => InMemoryProductStore::new(),
    });

    let warranties: Arc<dyn WarrantyPort> = match resolve(&store.ledger, &config.ledger_path) {
        Some(path) => Arc::new(FileWarrantyLedger::open(path)?),
        None => Arc::new(InMemoryWarrantyStore::new()),
    };

    Ok(WarrantyService::new(products, warranties, clock).with_rules(config.rules.clone())?)
}

fn catalog_path(store: &StoreArgs, config: &AppConfig) -> Option<PathBuf> {
    resolve(&store.catalog, &config.catalog_path)
}

// command line flag first, then configuration
fn resolve(flag: &Option<PathBuf>, configured: &Option<PathBuf>) -> Option<PathBuf> {
    flag.clone().or_else(|| configured.clone())
}
