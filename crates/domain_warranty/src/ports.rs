//! Warranty Domain Ports
//!
//! The rule engine reaches its two stores through these traits. Adapters live
//! in `infra_store`; the test-only `mock` module below is a bare in-memory
//! version for this crate's unit tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_warranty::{WarrantyService, ports::{ProductPort, WarrantyPort}};
//!
//! let products: Arc<dyn ProductPort> = Arc::new(InMemoryProductStore::new());
//! let warranties: Arc<dyn WarrantyPort> = Arc::new(InMemoryWarrantyStore::new());
//! let service = WarrantyService::new(products, warranties, clock);
//! ```
//!
//! Ports take `&self`: an adapter is shared behind an `Arc` and guards its own
//! state.

use core_kernel::{DomainPort, PortError};

use crate::product::Product;
use crate::warranty::ExtendedWarranty;

/// Lookup of catalog products by code
pub trait ProductPort: DomainPort {
    /// Retrieves a product by code, or `PortError::NotFound`
    fn find_by_code(&self, code: &str) -> Result<Product, PortError>;

    /// Adds a product to the catalog
    fn add(&self, product: Product) -> Result<(), PortError>;
}

/// Lookup and insertion of issued warranties, keyed by product code
pub trait WarrantyPort: DomainPort {
    /// Returns the covered product if a warranty exists for `code`
    fn find_product_with_warranty_by_code(&self, code: &str) -> Result<Option<Product>, PortError>;

    /// Retrieves the warranty for `code`, or `PortError::NotFound`
    fn find_by_code(&self, code: &str) -> Result<ExtendedWarranty, PortError>;

    /// Stores a newly issued warranty
    ///
    /// Adapters that enforce one warranty per product code report a second
    /// insert as `PortError::Conflict`.
    fn add(&self, warranty: ExtendedWarranty) -> Result<(), PortError>;
}

/// Extension trait for WarrantyPort with convenience methods
pub trait WarrantyPortExt: WarrantyPort {
    /// True if a warranty was issued for `code`
    fn is_covered_by_warranty(&self, code: &str) -> Result<bool, PortError> {
        Ok(self.find_product_with_warranty_by_code(code)?.is_some())
    }

    /// Retrieves the warranty for `code`, mapping NotFound to `None`
    fn find_optional(&self, code: &str) -> Result<Option<ExtendedWarranty>, PortError> {
        match self.find_by_code(code) {
            Ok(warranty) => Ok(Some(warranty)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// Blanket implementation for all WarrantyPort implementors
impl<T: WarrantyPort + ?Sized> WarrantyPortExt for T {}

/// Mock implementations of the ports for testing
///
/// These adapters keep everything in a map and never fail, except that the
/// product mock reports unknown codes as NotFound.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    fn poisoned() -> PortError {
        PortError::internal("mock store lock poisoned")
    }

    /// In-memory mock implementation of ProductPort
    #[derive(Debug, Default)]
    pub struct MockProductPort {
        products: RwLock<HashMap<String, Product>>,
    }

    impl MockProductPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with products for testing
        pub fn with_products(products: Vec<Product>) -> Self {
            let map = products.into_iter().map(|p| (p.code.clone(), p)).collect();
            Self {
                products: RwLock::new(map),
            }
        }
    }

    impl DomainPort for MockProductPort {}

    impl ProductPort for MockProductPort {
        fn find_by_code(&self, code: &str) -> Result<Product, PortError> {
            self.products
                .read()
                .map_err(|_| poisoned())?
                .get(code)
                .cloned()
                .ok_or_else(|| PortError::not_found("Product", code))
        }

        fn add(&self, product: Product) -> Result<(), PortError> {
            self.products
                .write()
                .map_err(|_| poisoned())?
                .insert(product.code.clone(), product);
            Ok(())
        }
    }

    /// In-memory mock implementation of WarrantyPort
    ///
    /// Does not enforce uniqueness, so tests can see the engine's own
    /// duplicate check at work. Every insert is kept in `inserted`.
    #[derive(Debug, Default)]
    pub struct MockWarrantyPort {
        inserted: RwLock<Vec<ExtendedWarranty>>,
    }

    impl MockWarrantyPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with warranties for testing
        pub fn with_warranties(warranties: Vec<ExtendedWarranty>) -> Self {
            Self {
                inserted: RwLock::new(warranties),
            }
        }

        /// Number of `add` calls received, including pre-populated records
        pub fn insert_count(&self) -> usize {
            self.inserted.read().map(|w| w.len()).unwrap_or(0)
        }
    }

    impl DomainPort for MockWarrantyPort {}

    impl WarrantyPort for MockWarrantyPort {
        fn find_product_with_warranty_by_code(&self, code: &str) -> Result<Option<Product>, PortError> {
            Ok(self.find_optional(code)?.map(|w| w.product))
        }

        fn find_by_code(&self, code: &str) -> Result<ExtendedWarranty, PortError> {
            self.inserted
                .read()
                .map_err(|_| poisoned())?
                .iter()
                .find(|w| w.product_code() == code)
                .cloned()
                .ok_or_else(|| PortError::not_found("ExtendedWarranty", code))
        }

        fn add(&self, warranty: ExtendedWarranty) -> Result<(), PortError> {
            self.inserted.write().map_err(|_| poisoned())?.push(warranty);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::{MockProductPort, MockWarrantyPort};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn test_warranty(code: &str) -> ExtendedWarranty {
        let date = NaiveDate::from_ymd_opt(2018, 8, 16).unwrap();
        ExtendedWarranty::new(
            Product::new(code, "Lenovo", dec!(100)),
            date,
            date + chrono::Days::new(100),
            dec!(10),
            "TEST",
        )
    }

    #[test]
    fn test_mock_product_not_found() {
        let port = MockProductPort::new();
        let result = port.find_by_code("A1E2I3");
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_mock_product_add_and_find() {
        let port = MockProductPort::new();
        port.add(Product::new("A1E2I3", "Lenovo", dec!(100))).unwrap();
        assert_eq!(port.find_by_code("A1E2I3").unwrap().name, "Lenovo");
    }

    #[test]
    fn test_warranty_ext_methods() {
        let port = MockWarrantyPort::new();
        assert!(!port.is_covered_by_warranty("A1E2I3").unwrap());
        assert!(port.find_optional("A1E2I3").unwrap().is_none());

        port.add(test_warranty("A1E2I3")).unwrap();

        assert!(port.is_covered_by_warranty("A1E2I3").unwrap());
        let found = port.find_optional("A1E2I3").unwrap().unwrap();
        assert_eq!(found.product.code, "A1E2I3");
        assert_eq!(
            port.find_product_with_warranty_by_code("A1E2I3").unwrap().unwrap().name,
            "Lenovo"
        );
    }

    #[test]
    fn test_mock_warranty_counts_inserts() {
        let port = MockWarrantyPort::with_warranties(vec![test_warranty("A1E2I3")]);
        assert_eq!(port.insert_count(), 1);
        port.add(test_warranty("O1U2A3")).unwrap();
        assert_eq!(port.insert_count(), 2);
    }
}
