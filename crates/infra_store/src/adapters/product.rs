//! In-memory product catalog

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError};
use domain_warranty::{Product, ProductPort};

use crate::error::StoreError;

/// Product catalog held in memory, keyed by product code
///
/// Codes are unique and prices are never negative; `add` refuses records
/// that break either rule.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a list of products, checking every record
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self, StoreError> {
        let store = Self::new();
        for product in products {
            store.insert(product)?;
        }
        Ok(store)
    }

    /// Adds a product
    pub fn insert(&self, product: Product) -> Result<(), StoreError> {
        if !product.has_valid_price() {
            return Err(StoreError::ConstraintViolation(format!(
                "product '{}' has negative price {}",
                product.code, product.price
            )));
        }

        let mut products = self.products.write().map_err(|_| StoreError::LockPoisoned)?;
        if products.contains_key(&product.code) {
            return Err(StoreError::duplicate("Product", "code", &product.code));
        }
        products.insert(product.code.clone(), product);
        Ok(())
    }

    /// Retrieves a product by code
    pub fn get(&self, code: &str) -> Result<Product, StoreError> {
        self.products
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .get(code)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Product", code))
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainPort for InMemoryProductStore {}

impl ProductPort for InMemoryProductStore {
    #[instrument(skip(self), fields(code = %code))]
    fn find_by_code(&self, code: &str) -> Result<Product, PortError> {
        debug!("Fetching product by code");
        Ok(self.get(code)?)
    }

    #[instrument(skip(self, product), fields(code = %product.code))]
    fn add(&self, product: Product) -> Result<(), PortError> {
        debug!("Adding product to catalog");
        Ok(self.insert(product)?)
    }
}
