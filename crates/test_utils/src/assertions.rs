//! Custom Test Assertions
//!
//! Assertion helpers for warranty records and engine rejections that give
//! more meaningful failure messages than a bare `assert!`.

use chrono::{Datelike, Weekday};

use domain_warranty::{ExtendedWarranty, WarrantyError, WarrantyQuote};

/// Asserts that a stored warranty carries exactly what a quote computed
pub fn assert_warranty_matches_quote(warranty: &ExtendedWarranty, quote: &WarrantyQuote) {
    assert_eq!(
        warranty.warranty_price, quote.price,
        "Warranty price mismatch for {}",
        warranty.product_code()
    );
    assert_eq!(
        warranty.request_date, quote.request_date,
        "Request date mismatch for {}",
        warranty.product_code()
    );
    assert_eq!(
        warranty.end_date, quote.end_date,
        "End date mismatch for {}",
        warranty.product_code()
    );
}

/// Asserts the invariants every issued warranty holds
pub fn assert_well_formed(warranty: &ExtendedWarranty) {
    assert!(
        warranty.end_date > warranty.request_date,
        "End date {} is not after request date {}",
        warranty.end_date,
        warranty.request_date
    );
    assert!(
        !warranty.warranty_price.is_sign_negative(),
        "Warranty price {} is negative",
        warranty.warranty_price
    );
}

/// Asserts that a premium end date was not left on a Sunday
pub fn assert_not_sunday(warranty: &ExtendedWarranty) {
    assert_ne!(
        warranty.end_date.weekday(),
        Weekday::Sun,
        "End date {} falls on a Sunday",
        warranty.end_date
    );
}

/// Asserts that a result is the "no coverage" rejection
pub fn assert_no_coverage<T: std::fmt::Debug>(result: Result<T, WarrantyError>) {
    match result {
        Err(WarrantyError::NoCoverage { .. }) => {}
        other => panic!("Expected NoCoverage rejection, got {:?}", other),
    }
}

/// Asserts that a result is the "already covered" rejection
pub fn assert_already_covered<T: std::fmt::Debug>(result: Result<T, WarrantyError>) {
    match result {
        Err(WarrantyError::AlreadyCovered { .. }) => {}
        other => panic!("Expected AlreadyCovered rejection, got {:?}", other),
    }
}
