//! Core Kernel - Foundational types for the extended warranty system
//!
//! This crate provides the building blocks shared by the warranty domain,
//! its storage adapters and the command line front end:
//! - Percentage rates applied to decimal prices
//! - Calendar dates, timezones and the current-date provider
//! - Strongly-typed identifiers
//! - The port error type every storage adapter reports through

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Rate, round_price, PRICE_PRECISION};
pub use temporal::{
    Timezone, TemporalError, TimeProvider, SystemTimeProvider, FixedTimeProvider,
    add_calendar_days, next_day,
};
pub use identifiers::WarrantyId;
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
