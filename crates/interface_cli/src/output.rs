//! JSON written to stdout

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::round_price;
use domain_warranty::{ExtendedWarranty, WarrantyQuote, WarrantyTier};

/// An issued warranty
#[derive(Debug, Serialize)]
pub struct WarrantyOutput {
    pub id: String,
    pub product_code: String,
    pub product_name: String,
    pub product_price: Decimal,
    pub customer_name: String,
    pub request_date: NaiveDate,
    pub end_date: NaiveDate,
    pub warranty_price: Decimal,
}

impl From<&ExtendedWarranty> for WarrantyOutput {
    fn from(w: &ExtendedWarranty) -> Self {
        Self {
            id: w.id.to_string(),
            product_code: w.product.code.clone(),
            product_name: w.product.name.clone(),
            product_price: w.product.price,
            customer_name: w.customer_name.clone(),
            request_date: w.request_date,
            end_date: w.end_date,
            warranty_price: round_price(w.warranty_price),
        }
    }
}

/// Eligibility of a code, plus its tier when the catalog knows the product
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub code: String,
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<WarrantyTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_covered: Option<bool>,
}

/// A priced warranty that was not issued
#[derive(Debug, Serialize)]
pub struct QuoteOutput {
    pub code: String,
    pub tier: WarrantyTier,
    pub warranty_price: Decimal,
    pub request_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl QuoteOutput {
    pub fn new(code: impl Into<String>, quote: &WarrantyQuote) -> Self {
        Self {
            code: code.into(),
            tier: quote.tier,
            warranty_price: round_price(quote.price),
            request_date: quote.request_date,
            end_date: quote.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_utils::WarrantyTestDataBuilder;

    #[test]
    fn test_warranty_output_rounds_price() {
        let warranty = WarrantyTestDataBuilder::new().with_price(dec!(49999.905)).build();
        let output = WarrantyOutput::from(&warranty);
        assert_eq!(output.warranty_price, dec!(49999.90));
        assert_eq!(serde_json::to_value(&output).unwrap()["warranty_price"], "49999.90");
        assert_eq!(output.product_code, warranty.product.code);
    }

    #[test]
    fn test_check_output_skips_unknowns() {
        let json = serde_json::to_value(CheckOutput {
            code: "F01TS50".into(),
            eligible: false,
            tier: None,
            already_covered: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"code": "F01TS50", "eligible": false}));
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        let json = serde_json::to_value(CheckOutput {
            code: "A1E2I3".into(),
            eligible: true,
            tier: Some(WarrantyTier::Premium),
            already_covered: Some(false),
        })
        .unwrap();
        assert_eq!(json["tier"], "premium");
    }
}
