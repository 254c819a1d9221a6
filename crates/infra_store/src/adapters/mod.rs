//! Domain Adapters
//!
//! In-memory implementations of the warranty domain ports. Each store keeps
//! its records behind an `RwLock`, so one instance can be shared by every
//! caller through an `Arc`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_store::adapters::{InMemoryProductStore, InMemoryWarrantyStore};
//! use domain_warranty::{ProductPort, WarrantyPort};
//!
//! let products: Arc<dyn ProductPort> = Arc::new(InMemoryProductStore::new());
//! let warranties: Arc<dyn WarrantyPort> = Arc::new(InMemoryWarrantyStore::new());
//! ```

pub mod product;
pub mod warranty;

pub use product::InMemoryProductStore;
pub use warranty::InMemoryWarrantyStore;
