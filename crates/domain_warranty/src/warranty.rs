//! Extended warranty records and quotes

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::WarrantyId;

use crate::pricing::WarrantyTier;
use crate::product::Product;

/// An issued extended warranty
///
/// Created once by [`crate::WarrantyService::generate_warranty`] and never
/// changed afterwards. `end_date` is always strictly after `request_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedWarranty {
    pub id: WarrantyId,
    pub product: Product,
    pub request_date: NaiveDate,
    pub end_date: NaiveDate,
    pub warranty_price: Decimal,
    pub customer_name: String,
}

impl ExtendedWarranty {
    pub fn new(
        product: Product,
        request_date: NaiveDate,
        end_date: NaiveDate,
        warranty_price: Decimal,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: WarrantyId::new_v7(),
            product,
            request_date,
            end_date,
            warranty_price,
            customer_name: customer_name.into(),
        }
    }

    /// Code of the covered product
    pub fn product_code(&self) -> &str {
        &self.product.code
    }

    /// Length of the coverage in calendar days
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.request_date).num_days()
    }
}

/// What a warranty would cost and when it would end, without issuing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyQuote {
    pub tier: WarrantyTier,
    pub price: Decimal,
    pub request_date: NaiveDate,
    pub end_date: NaiveDate,
}
