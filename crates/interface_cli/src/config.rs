//! CLI configuration

use std::path::PathBuf;

use serde::Deserialize;

use core_kernel::{CoreError, SystemTimeProvider, Timezone};
use domain_warranty::WarrantyRules;

/// Environment prefix for every setting
pub const ENV_PREFIX: &str = "WARRANTY";

/// CLI configuration
///
/// Read from `WARRANTY_`-prefixed environment variables. Nested rule fields
/// use a double underscore, e.g. `WARRANTY_RULES__THRESHOLD=750000`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level directive when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// IANA timezone for "today"; the machine's zone when unset
    pub timezone: Option<String>,
    /// Catalog file used when `--catalog` is not given
    pub catalog_path: Option<PathBuf>,
    /// Ledger file used when `--ledger` is not given
    pub ledger_path: Option<PathBuf>,
    /// Pricing and term rules
    pub rules: WarrantyRules,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_json: false,
            timezone: None,
            catalog_path: None,
            ledger_path: None,
            rules: WarrantyRules::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Loads configuration from any config source, for tests and embedding
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Checks the timezone name and the rules
    pub fn validate(&self) -> Result<(), CoreError> {
        self.parsed_timezone()?;
        self.rules
            .validate()
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// The configured timezone, if any
    pub fn parsed_timezone(&self) -> Result<Option<Timezone>, CoreError> {
        self.timezone
            .as_deref()
            .map(Timezone::parse)
            .transpose()
            .map_err(CoreError::from)
    }

    /// Clock reading "today" in the configured timezone
    pub fn clock(&self) -> Result<SystemTimeProvider, CoreError> {
        Ok(match self.parsed_timezone()? {
            Some(tz) => SystemTimeProvider::in_timezone(tz),
            None => SystemTimeProvider::local(),
        })
    }
}
