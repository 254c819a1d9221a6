//! In-memory warranty store

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, instrument, warn};

use core_kernel::{DomainPort, PortError};
use domain_warranty::{ExtendedWarranty, Product, WarrantyPort};

use crate::error::StoreError;

/// Issued warranties held in memory, at most one per product code
///
/// The check for an existing warranty and the insert happen under one write
/// lock, so two callers racing on the same code cannot both succeed: the
/// second gets `PortError::Conflict`.
#[derive(Debug, Default)]
pub struct InMemoryWarrantyStore {
    warranties: RwLock<HashMap<String, ExtendedWarranty>>,
}

impl InMemoryWarrantyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously issued warranties
    pub fn from_warranties(
        warranties: impl IntoIterator<Item = ExtendedWarranty>,
    ) -> Result<Self, StoreError> {
        let store = Self::new();
        for warranty in warranties {
            store.insert(warranty)?;
        }
        Ok(store)
    }

    /// Stores a warranty unless its product already has one
    pub fn insert(&self, warranty: ExtendedWarranty) -> Result<(), StoreError> {
        let mut warranties = self.warranties.write().map_err(|_| StoreError::LockPoisoned)?;
        match warranties.entry(warranty.product_code().to_string()) {
            Entry::Occupied(entry) => Err(StoreError::duplicate(
                "ExtendedWarranty",
                "product code",
                entry.key(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(warranty);
                Ok(())
            }
        }
    }

    /// Removes and returns the warranty for `code`, if any
    pub fn remove(&self, code: &str) -> Result<Option<ExtendedWarranty>, StoreError> {
        Ok(self
            .warranties
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .remove(code))
    }

    /// Retrieves the warranty for `code`
    pub fn get(&self, code: &str) -> Result<ExtendedWarranty, StoreError> {
        self.warranties
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .get(code)
            .cloned()
            .ok_or_else(|| StoreError::not_found("ExtendedWarranty", code))
    }

    /// All stored warranties, ordered by request date then product code
    pub fn snapshot(&self) -> Result<Vec<ExtendedWarranty>, StoreError> {
        let mut all: Vec<_> = self
            .warranties
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .values()
            .cloned()
            .collect();
        all.sort_by(|a, b| {
            a.request_date
                .cmp(&b.request_date)
                .then_with(|| a.product_code().cmp(b.product_code()))
        });
        Ok(all)
    }

    pub fn len(&self) -> usize {
        self.warranties.read().map(|w| w.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainPort for InMemoryWarrantyStore {}

impl WarrantyPort for InMemoryWarrantyStore {
    #[instrument(skip(self), fields(code = %code))]
    fn find_product_with_warranty_by_code(&self, code: &str) -> Result<Option<Product>, PortError> {
        debug!("Looking up covered product");
        match self.get(code) {
            Ok(warranty) => Ok(Some(warranty.product)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self), fields(code = %code))]
    fn find_by_code(&self, code: &str) -> Result<ExtendedWarranty, PortError> {
        debug!("Fetching warranty by product code");
        Ok(self.get(code)?)
    }

    #[instrument(skip(self, warranty), fields(code = %warranty.product_code(), id = %warranty.id))]
    fn add(&self, warranty: ExtendedWarranty) -> Result<(), PortError> {
        debug!("Storing warranty");
        self.insert(warranty).map_err(|e| {
            if e.is_constraint_violation() {
                warn!(error = %e, "Warranty insert refused");
            }
            PortError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn warranty(code: &str, day: u32) -> ExtendedWarranty {
        let date = NaiveDate::from_ymd_opt(2018, 8, day).unwrap();
        ExtendedWarranty::new(
            Product::new(code, "Lenovo", dec!(499999)),
            date,
            date + chrono::Days::new(100),
            dec!(49999.9),
            "TEST",
        )
    }

    #[test]
    fn test_add_then_lookup() {
        let store = InMemoryWarrantyStore::new();
        assert!(store.find_product_with_warranty_by_code("A1E2I3").unwrap().is_none());

        let issued = warranty("A1E2I3", 16);
        store.add(issued.clone()).unwrap();

        assert_eq!(store.find_by_code("A1E2I3").unwrap(), issued);
        let product = store.find_product_with_warranty_by_code("A1E2I3").unwrap().unwrap();
        assert_eq!(product.code, "A1E2I3");
    }

    #[test]
    fn test_second_insert_for_same_code_conflicts() {
        let store = InMemoryWarrantyStore::new();
        let first = warranty("A1E2I3", 16);
        store.add(first.clone()).unwrap();

        let err = store.add(warranty("A1E2I3", 17)).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_code("A1E2I3").unwrap().id, first.id);
    }

    #[test]
    fn test_missing_warranty_is_not_found() {
        let store = InMemoryWarrantyStore::new();
        assert!(store.find_by_code("A1E2I3").unwrap_err().is_not_found());
    }

    #[test]
    fn test_snapshot_order() {
        let store = InMemoryWarrantyStore::from_warranties(vec![
            warranty("O1U2A3", 17),
            warranty("U1E2A3", 16),
            warranty("A1E2I3", 16),
        ])
        .unwrap();

        let codes: Vec<_> = store
            .snapshot()
            .unwrap()
            .into_iter()
            .map(|w| w.product.code)
            .collect();
        assert_eq!(codes, ["A1E2I3", "U1E2A3", "O1U2A3"]);
    }

    #[test]
    fn test_remove() {
        let store = InMemoryWarrantyStore::from_warranties(vec![warranty("A1E2I3", 16)]).unwrap();
        assert!(store.remove("A1E2I3").unwrap().is_some());
        assert!(store.remove("A1E2I3").unwrap().is_none());
        assert!(store.is_empty());
    }
}
