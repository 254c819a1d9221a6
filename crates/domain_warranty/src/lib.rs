//! Extended Warranty Domain
//!
//! This crate holds the seller's rules for offering an extended warranty on a
//! catalog product. It is infrastructure-agnostic: products and warranties are
//! reached through the ports in [`ports`], and "today" comes from an injected
//! [`core_kernel::TimeProvider`].
//!
//! # Issuing a warranty
//!
//! ```text
//! code ──► eligibility ──► not yet covered? ──► product lookup
//!             │                  │                    │
//!         NoCoverage       AlreadyCovered     tier ─► price, end date ─► store
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use core_kernel::FixedTimeProvider;
//! use domain_warranty::{Product, WarrantyService};
//! use domain_warranty::ports::ProductPort;
//! use infra_store::{InMemoryProductStore, InMemoryWarrantyStore};
//! use rust_decimal_macros::dec;
//!
//! let products = Arc::new(InMemoryProductStore::new());
//! products.add(Product::new("A1E2I3", "Laptop", dec!(650000))).unwrap();
//!
//! let service = WarrantyService::new(
//!     products,
//!     Arc::new(InMemoryWarrantyStore::new()),
//!     Arc::new(FixedTimeProvider::new(NaiveDate::from_ymd_opt(2018, 8, 16).unwrap())),
//! );
//!
//! let warranty = service.generate_warranty("A1E2I3", "Ana").unwrap();
//! assert_eq!(warranty.warranty_price, dec!(130000));
//! assert_eq!(warranty.end_date, NaiveDate::from_ymd_opt(2019, 4, 6).unwrap());
//! ```

pub mod product;
pub mod warranty;
pub mod eligibility;
pub mod pricing;
pub mod expiration;
pub mod ports;
pub mod services;
pub mod error;

pub use product::Product;
pub use warranty::{ExtendedWarranty, WarrantyQuote};
pub use eligibility::is_covered;
pub use pricing::{WarrantyRules, WarrantyTier};
pub use ports::{ProductPort, WarrantyPort, WarrantyPortExt};
pub use services::WarrantyService;
pub use error::WarrantyError;
