//! Percentage rates applied to decimal prices
//!
//! Prices are plain `rust_decimal::Decimal` values so that a warranty charge is
//! an exact product of the catalog price and a rate, never a float.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places prices are displayed with
pub const PRICE_PRECISION: u32 = 2;

/// Rounds a price to display precision using banker's rounding
///
/// The result always carries exactly `PRICE_PRECISION` decimal places, so
/// `156000.0` displays as `156000.00`.
pub fn round_price(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(
        PRICE_PRECISION,
        rust_decimal::RoundingStrategy::MidpointNearestEven,
    );
    rounded.rescale(PRICE_PRECISION);
    rounded
}

/// Represents a percentage rate (e.g., a warranty charge of 10% of the price)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.1 for 10%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.1 for 10%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 20 for 20%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to a price, without rounding
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn applying_a_rate_is_linear(
            a in 0i64..1_000_000_000i64,
            b in 0i64..1_000_000_000i64,
        ) {
            let rate = Rate::new(dec!(0.1));
            let da = Decimal::new(a, 2);
            let db = Decimal::new(b, 2);
            prop_assert_eq!(rate.apply(da + db), rate.apply(da) + rate.apply(db));
        }
    }
}
