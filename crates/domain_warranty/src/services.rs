//! Warranty domain services
//!
//! `WarrantyService` is the seller's rule engine: it decides whether a product
//! code may get an extended warranty, prices it, dates it and files it.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::TimeProvider;

use crate::eligibility::is_covered;
use crate::error::WarrantyError;
use crate::ports::{ProductPort, WarrantyPort, WarrantyPortExt};
use crate::pricing::WarrantyRules;
use crate::product::Product;
use crate::warranty::{ExtendedWarranty, WarrantyQuote};

/// Service for quoting and issuing extended warranties
pub struct WarrantyService {
    products: Arc<dyn ProductPort>,
    warranties: Arc<dyn WarrantyPort>,
    clock: Arc<dyn TimeProvider>,
    rules: WarrantyRules,
}

impl WarrantyService {
    /// Creates a service with the default pricing and term rules
    pub fn new(
        products: Arc<dyn ProductPort>,
        warranties: Arc<dyn WarrantyPort>,
        clock: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            products,
            warranties,
            clock,
            rules: WarrantyRules::default(),
        }
    }

    /// Replaces the pricing and term rules
    ///
    /// # Errors
    ///
    /// Returns `InvalidRules` if the rules could not produce a valid warranty
    pub fn with_rules(mut self, rules: WarrantyRules) -> Result<Self, WarrantyError> {
        rules.validate()?;
        self.rules = rules;
        Ok(self)
    }

    /// The rules this service prices with
    pub fn rules(&self) -> &WarrantyRules {
        &self.rules
    }

    /// Issues an extended warranty for a product
    ///
    /// This method:
    /// 1. Checks the code against the eligibility pattern
    /// 2. Rejects codes that already have a warranty
    /// 3. Looks the product up in the catalog
    /// 4. Prices the warranty and computes its end date from today
    /// 5. Stores the new warranty
    ///
    /// # Errors
    ///
    /// * `NoCoverage` - the code does not qualify; nothing is stored
    /// * `AlreadyCovered` - a warranty exists for the code; nothing is stored
    /// * `ProductNotFound` - the catalog has no product with this code
    #[instrument(skip(self, customer_name), fields(code = %code))]
    pub fn generate_warranty(
        &self,
        code: &str,
        customer_name: &str,
    ) -> Result<ExtendedWarranty, WarrantyError> {
        self.ensure_eligible(code)?;
        self.ensure_not_yet_covered(code)?;

        let product = self.find_product(code)?;
        let quote = self.rules.quote(&product, self.clock.today())?;

        let warranty = ExtendedWarranty::new(
            product,
            quote.request_date,
            quote.end_date,
            quote.price,
            customer_name,
        );

        // A store enforcing uniqueness catches a racing issuer the check above missed
        self.warranties.add(warranty.clone()).map_err(|e| {
            if e.is_conflict() {
                warn!("Warranty stored concurrently for this code");
                WarrantyError::already_covered(code)
            } else {
                e.into()
            }
        })?;

        info!(
            warranty_id = %warranty.id,
            tier = ?quote.tier,
            price = %warranty.warranty_price,
            end_date = %warranty.end_date,
            "Extended warranty issued"
        );
        Ok(warranty)
    }

    /// Returns true if a warranty was issued for `code`
    ///
    /// Unknown codes are simply not covered.
    pub fn has_warranty(&self, code: &str) -> Result<bool, WarrantyError> {
        Ok(self.warranties.is_covered_by_warranty(code)?)
    }

    /// Prices and dates a warranty without issuing it
    ///
    /// Applies the eligibility check but not the existing-warranty check.
    #[instrument(skip(self), fields(code = %code))]
    pub fn quote(&self, code: &str) -> Result<WarrantyQuote, WarrantyError> {
        self.ensure_eligible(code)?;
        let product = self.find_product(code)?;
        self.rules.quote(&product, self.clock.today())
    }

    /// Retrieves the warranty issued for `code`, if any
    pub fn find_warranty(&self, code: &str) -> Result<Option<ExtendedWarranty>, WarrantyError> {
        Ok(self.warranties.find_optional(code)?)
    }

    fn ensure_eligible(&self, code: &str) -> Result<(), WarrantyError> {
        if !is_covered(code) {
            warn!("Product code is not eligible for an extended warranty");
            return Err(WarrantyError::no_coverage(code));
        }
        Ok(())
    }

    fn ensure_not_yet_covered(&self, code: &str) -> Result<(), WarrantyError> {
        if self.has_warranty(code)? {
            warn!("Product already has an extended warranty");
            return Err(WarrantyError::already_covered(code));
        }
        Ok(())
    }

    fn find_product(&self, code: &str) -> Result<Product, WarrantyError> {
        debug!("Fetching product by code");
        self.products.find_by_code(code).map_err(|e| {
            if e.is_not_found() {
                WarrantyError::ProductNotFound(code.to_string())
            } else {
                e.into()
            }
        })
    }
}
