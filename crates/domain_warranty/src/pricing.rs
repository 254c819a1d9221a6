//! Tiered warranty pricing
//!
//! A single price threshold splits products into two tiers. The tier decides
//! both the share of the product price charged for the warranty and how the
//! coverage term is counted:
//!
//! | Tier     | Price            | Charge | Term                               |
//! |----------|------------------|--------|------------------------------------|
//! | Standard | `<= 500000`      | 10%    | 100 calendar days                  |
//! | Premium  | `> 500000`       | 20%    | 200 days not counting Mondays      |

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Rate;

use crate::error::WarrantyError;
use crate::expiration;
use crate::product::Product;
use crate::warranty::WarrantyQuote;

/// Price tier of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarrantyTier {
    /// Price at or below the threshold
    Standard,
    /// Price strictly above the threshold
    Premium,
}

/// Pricing and term rules for extended warranties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarrantyRules {
    /// Prices strictly above this are premium
    pub threshold: Decimal,
    /// Share of the price charged for a premium warranty
    pub premium_rate: Rate,
    /// Share of the price charged for a standard warranty
    pub standard_rate: Rate,
    /// Premium term, in days that are not Mondays
    pub premium_term_days: u32,
    /// Standard term, in calendar days
    pub standard_term_days: u32,
}

impl Default for WarrantyRules {
    fn default() -> Self {
        Self {
            threshold: dec!(500000),
            premium_rate: Rate::new(dec!(0.2)),
            standard_rate: Rate::new(dec!(0.1)),
            premium_term_days: 200,
            standard_term_days: 100,
        }
    }
}

impl WarrantyRules {
    /// Checks that the rules can produce a valid warranty
    ///
    /// Terms must be at least one day so the end date lands after the
    /// request date; rates and threshold cannot be negative.
    pub fn validate(&self) -> Result<(), WarrantyError> {
        if self.threshold.is_sign_negative() {
            return Err(WarrantyError::InvalidRules(format!(
                "threshold {} is negative",
                self.threshold
            )));
        }
        for (name, rate) in [("premium_rate", self.premium_rate), ("standard_rate", self.standard_rate)] {
            if rate.as_decimal().is_sign_negative() {
                return Err(WarrantyError::InvalidRules(format!("{name} {rate} is negative")));
            }
        }
        if self.premium_term_days == 0 || self.standard_term_days == 0 {
            return Err(WarrantyError::InvalidRules(
                "warranty terms must be at least one day".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the tier a product price falls into
    pub fn tier_for(&self, price: Decimal) -> WarrantyTier {
        if price > self.threshold {
            WarrantyTier::Premium
        } else {
            WarrantyTier::Standard
        }
    }

    /// Returns the charge rate of a tier
    pub fn rate_for(&self, tier: WarrantyTier) -> Rate {
        match tier {
            WarrantyTier::Premium => self.premium_rate,
            WarrantyTier::Standard => self.standard_rate,
        }
    }

    /// Computes the warranty price for a product price
    pub fn warranty_price(&self, price: Decimal) -> Decimal {
        self.rate_for(self.tier_for(price)).apply(price)
    }

    /// Computes the coverage end date for a tier starting on `start`
    pub fn end_date(&self, tier: WarrantyTier, start: NaiveDate) -> Result<NaiveDate, WarrantyError> {
        let end = match tier {
            WarrantyTier::Premium => {
                expiration::premium_end_date(start, self.premium_term_days)?
            }
            WarrantyTier::Standard => {
                expiration::standard_end_date(start, self.standard_term_days)?
            }
        };
        Ok(end)
    }

    /// Prices a product and dates its coverage from `request_date`
    pub fn quote(&self, product: &Product, request_date: NaiveDate) -> Result<WarrantyQuote, WarrantyError> {
        let tier = self.tier_for(product.price);
        Ok(WarrantyQuote {
            tier,
            price: self.rate_for(tier).apply(product.price),
            request_date,
            end_date: self.end_date(tier, request_date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let rules = WarrantyRules::default();
        assert_eq!(rules.tier_for(dec!(500000)), WarrantyTier::Standard);
        assert_eq!(rules.tier_for(dec!(500000.01)), WarrantyTier::Premium);
        assert_eq!(rules.tier_for(dec!(500001)), WarrantyTier::Premium);
    }

    #[test]
    fn test_warranty_price_by_tier() {
        let rules = WarrantyRules::default();
        assert_eq!(rules.warranty_price(dec!(500000)), dec!(500000) * dec!(0.1));
        assert_eq!(rules.warranty_price(dec!(500001)), dec!(500001) * dec!(0.2));
        assert_eq!(rules.warranty_price(dec!(499999)), dec!(49999.9));
        assert_eq!(rules.warranty_price(dec!(0)), dec!(0));
    }

    #[test]
    fn test_quote_premium() {
        let rules = WarrantyRules::default();
        let product = Product::new("A1E2I3", "Lenovo", dec!(780000));
        let quote = rules.quote(&product, date(2018, 8, 16)).unwrap();

        assert_eq!(quote.tier, WarrantyTier::Premium);
        assert_eq!(quote.price, dec!(156000));
        assert_eq!(quote.end_date, date(2019, 4, 6));
    }

    #[test]
    fn test_quote_standard() {
        let rules = WarrantyRules::default();
        let product = Product::new("A1E2I3", "Lenovo", dec!(499999));
        let quote = rules.quote(&product, date(2018, 8, 16)).unwrap();

        assert_eq!(quote.tier, WarrantyTier::Standard);
        assert_eq!(quote.end_date, date(2018, 11, 24));
    }

    #[test]
    fn test_validate_defaults() {
        assert!(WarrantyRules::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_term() {
        let rules = WarrantyRules {
            standard_term_days: 0,
            ..Default::default()
        };
        assert!(matches!(rules.validate(), Err(WarrantyError::InvalidRules(_))));
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let rules = WarrantyRules {
            premium_rate: Rate::new(dec!(-0.2)),
            ..Default::default()
        };
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("premium_rate"));
    }

    #[test]
    fn test_rules_partial_json_uses_defaults() {
        let rules: WarrantyRules = serde_json::from_str(r#"{"threshold":"1000"}"#).unwrap();
        assert_eq!(rules.threshold, dec!(1000));
        assert_eq!(rules.premium_term_days, 200);
        assert_eq!(rules.standard_rate, Rate::new(dec!(0.1)));
    }
}
