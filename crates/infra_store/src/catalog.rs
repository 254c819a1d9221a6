//! JSON product catalog loader
//!
//! The catalog file is a JSON array of `{ code, name, price }` objects.
//! Prices may be written as JSON strings or numbers. Every entry is checked
//! before the store is returned, so a bad file never yields a partial
//! catalog.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use validator::Validate;

use domain_warranty::Product;

use crate::adapters::InMemoryProductStore;
use crate::error::StoreError;

/// One product as written in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CatalogEntry {
    #[validate(length(min = 1, message = "product code cannot be empty"))]
    pub code: String,
    #[validate(length(min = 1, message = "product name cannot be empty"))]
    pub name: String,
    pub price: Decimal,
}

impl CatalogEntry {
    /// Validates the entry and turns it into a domain product
    pub fn into_product(self) -> Result<Product, StoreError> {
        self.validate()?;
        if self.price.is_sign_negative() {
            return Err(StoreError::ConstraintViolation(format!(
                "product '{}' has negative price {}",
                self.code, self.price
            )));
        }
        Ok(Product::new(self.code, self.name, self.price))
    }
}

impl From<Product> for CatalogEntry {
    fn from(product: Product) -> Self {
        Self {
            code: product.code,
            name: product.name,
            price: product.price,
        }
    }
}

/// Parses catalog JSON into a product store
pub fn parse_catalog(json: &str) -> Result<InMemoryProductStore, StoreError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(entries.len());
    let mut products = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.code.clone()) {
            return Err(StoreError::duplicate("Product", "code", &entry.code));
        }
        products.push(entry.into_product()?);
    }

    debug!(count = products.len(), "Parsed catalog entries");
    InMemoryProductStore::from_products(products)
}

/// Reads a catalog file into a product store
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_catalog(path: impl AsRef<Path>) -> Result<InMemoryProductStore, StoreError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let store = parse_catalog(&contents)?;
    info!(products = store.len(), "Catalog loaded");
    Ok(store)
}
