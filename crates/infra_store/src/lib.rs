//! Storage Layer
//!
//! Adapters that back the warranty engine's ports, plus loaders for the two
//! files the command line works with.
//!
//! # Adapters
//!
//! - [`InMemoryProductStore`]: the product catalog, keyed by code
//! - [`InMemoryWarrantyStore`]: issued warranties, one per product code
//! - [`FileWarrantyLedger`]: the warranty store, written through to a JSON file
//!
//! # Files
//!
//! A catalog is a JSON array of products:
//!
//! ```json
//! [
//!   { "code": "A1E2I3", "name": "Computador Lenovo", "price": "780000" }
//! ]
//! ```
//!
//! A ledger is a JSON array of issued warranties in the shape
//! `ExtendedWarranty` serializes to.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_store::{catalog, InMemoryWarrantyStore};
//!
//! let products = Arc::new(catalog::load_catalog("catalog.json")?);
//! let warranties = Arc::new(InMemoryWarrantyStore::new());
//! ```

pub mod adapters;
pub mod catalog;
pub mod error;
pub mod ledger;

pub use adapters::{InMemoryProductStore, InMemoryWarrantyStore};
pub use catalog::{load_catalog, parse_catalog, CatalogEntry};
pub use error::StoreError;
pub use ledger::FileWarrantyLedger;
