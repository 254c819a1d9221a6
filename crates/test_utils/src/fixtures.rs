//! Pre-built Test Fixtures
//!
//! Products, dates and clocks shared by the warranty tests. The codes below
//! are picked so their eligibility is obvious at a glance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::FixedTimeProvider;
use domain_warranty::Product;

/// Product codes with a known eligibility outcome
pub struct CodeFixtures;

impl CodeFixtures {
    /// Exactly three vowels: A, E, I
    pub fn covered() -> &'static str {
        "A1E2I3"
    }

    /// A second covered code, vowels O, U, A
    pub fn covered_alt() -> &'static str {
        "O1U2A3"
    }

    /// No vowels at all
    pub fn no_vowels() -> &'static str {
        "F01TS50"
    }

    /// Four vowels, one too many
    pub fn too_many_vowels() -> &'static str {
        "A1E2I3O4"
    }
}

/// Catalog prices around the premium threshold
pub struct PriceFixtures;

impl PriceFixtures {
    /// The threshold itself, still standard
    pub fn threshold() -> Decimal {
        dec!(500000)
    }

    /// Just under the threshold
    pub fn standard() -> Decimal {
        dec!(499999)
    }

    /// Just over the threshold
    pub fn premium() -> Decimal {
        dec!(500001)
    }

    /// A typical premium laptop
    pub fn laptop() -> Decimal {
        dec!(780000)
    }
}

/// Fixture for catalog products
pub struct ProductFixtures;

impl ProductFixtures {
    /// Covered premium product
    pub fn premium_laptop() -> Product {
        Product::new(CodeFixtures::covered(), "Computador Lenovo", PriceFixtures::laptop())
    }

    /// Covered standard product
    pub fn standard_monitor() -> Product {
        Product::new(CodeFixtures::covered_alt(), "Monitor Samsung", PriceFixtures::standard())
    }

    /// Product whose code fails the eligibility check
    pub fn uncovered() -> Product {
        Product::new(CodeFixtures::no_vowels(), "Cable", dec!(15000))
    }

    /// The three products above
    pub fn catalog() -> Vec<Product> {
        vec![Self::premium_laptop(), Self::standard_monitor(), Self::uncovered()]
    }
}

/// Fixture for request dates
pub struct DateFixtures;

impl DateFixtures {
    /// Thursday 2018-08-16
    pub fn thursday() -> NaiveDate {
        date(2018, 8, 16)
    }

    /// Friday 2018-08-17; a premium term from here lands on a Sunday
    pub fn friday() -> NaiveDate {
        date(2018, 8, 17)
    }

    /// Monday 2018-08-13
    pub fn monday() -> NaiveDate {
        date(2018, 8, 13)
    }

    /// Premium end date for a request on [`DateFixtures::thursday`]
    pub fn premium_end_from_thursday() -> NaiveDate {
        date(2019, 4, 6)
    }

    /// Premium end date for a request on [`DateFixtures::friday`]
    pub fn premium_end_from_friday() -> NaiveDate {
        date(2019, 4, 8)
    }

    /// Standard end date for a request on [`DateFixtures::thursday`]
    pub fn standard_end_from_thursday() -> NaiveDate {
        date(2018, 11, 24)
    }
}

/// Fixture for clocks
pub struct ClockFixtures;

impl ClockFixtures {
    /// Clock stopped on [`DateFixtures::thursday`]
    pub fn thursday() -> FixedTimeProvider {
        FixedTimeProvider::new(DateFixtures::thursday())
    }

    /// Clock stopped on [`DateFixtures::friday`]
    pub fn friday() -> FixedTimeProvider {
        FixedTimeProvider::new(DateFixtures::friday())
    }
}

/// Builds a calendar date, panicking on an invalid one
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}
