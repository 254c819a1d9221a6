//! Test Data Builders
//!
//! Builders for products and issued warranties. Tests set only the fields
//! they care about; everything else comes from the fixtures.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use domain_warranty::{ExtendedWarranty, Product, WarrantyRules};

use crate::fixtures::{CodeFixtures, DateFixtures, PriceFixtures};

/// Builder for catalog products
pub struct ProductTestDataBuilder {
    code: String,
    name: String,
    price: Decimal,
}

impl Default for ProductTestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductTestDataBuilder {
    /// Creates a covered standard-tier product
    pub fn new() -> Self {
        Self {
            code: CodeFixtures::covered().to_string(),
            name: "Test Product".to_string(),
            price: PriceFixtures::standard(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Sets a price just above the default premium threshold
    pub fn premium(self) -> Self {
        self.with_price(PriceFixtures::premium())
    }

    pub fn build(self) -> Product {
        Product::new(self.code, self.name, self.price)
    }
}

/// Builder for issued warranties
///
/// Unless overridden, price and end date are computed from the default
/// rules, so the record looks like one the engine would have issued.
pub struct WarrantyTestDataBuilder {
    product: Product,
    request_date: NaiveDate,
    end_date: Option<NaiveDate>,
    warranty_price: Option<Decimal>,
    customer_name: String,
}

impl Default for WarrantyTestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WarrantyTestDataBuilder {
    pub fn new() -> Self {
        Self {
            product: ProductTestDataBuilder::new().build(),
            request_date: DateFixtures::thursday(),
            end_date: None,
            warranty_price: None,
            customer_name: "TEST".to_string(),
        }
    }

    pub fn for_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    pub fn with_request_date(mut self, date: NaiveDate) -> Self {
        self.request_date = date;
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.warranty_price = Some(price);
        self
    }

    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    /// Builds the warranty
    ///
    /// # Panics
    ///
    /// Panics if the default rules cannot date the request, which only
    /// happens at the edge of the calendar.
    pub fn build(self) -> ExtendedWarranty {
        let quote = WarrantyRules::default()
            .quote(&self.product, self.request_date)
            .unwrap_or_else(|e| panic!("cannot quote test warranty: {e}"));

        ExtendedWarranty::new(
            self.product,
            self.request_date,
            self.end_date.unwrap_or(quote.end_date),
            self.warranty_price.unwrap_or(quote.price),
            self.customer_name,
        )
    }
}
