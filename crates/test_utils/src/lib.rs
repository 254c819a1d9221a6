//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! warranty test suite.
//!
//! # Modules
//!
//! - `fixtures`: Catalog products, request dates and clocks used across tests
//! - `builders`: Builder patterns for products and issued warranties
//! - `assertions`: Assertion helpers for warranty records and rejections
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
