//! Catalog products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product from the pre-existing catalog
///
/// Identified by its `code`, which is also the key warranties are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// Catalog prices are never negative
    pub fn has_valid_price(&self) -> bool {
        !self.price.is_sign_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_new() {
        let product = Product::new("A1E2I3", "Computador Lenovo", dec!(780000));
        assert_eq!(product.code, "A1E2I3");
        assert_eq!(product.name, "Computador Lenovo");
        assert_eq!(product.price, dec!(780000));
        assert!(product.has_valid_price());
    }

    #[test]
    fn test_negative_price_is_invalid() {
        assert!(!Product::new("A1E2I3", "Broken", dec!(-1)).has_valid_price());
        assert!(Product::new("A1E2I3", "Free", dec!(0)).has_valid_price());
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{"code":"A1E2I3","name":"Lenovo","price":"499999"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, dec!(499999));
    }
}
