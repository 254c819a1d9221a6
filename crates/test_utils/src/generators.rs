//! Property-Based Test Generators
//!
//! Proptest strategies for product codes, prices and request dates.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use proptest::sample::select;
use rust_decimal::Decimal;

use domain_warranty::Product;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];
const FILLER: &[char] = &[
    'B', 'C', 'D', 'F', 'G', 'H', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'X', 'Z', 'b', 'c',
    'd', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-', '_',
];

/// Strategy for a run of characters that are not vowels
pub fn filler_strategy(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(select(FILLER), 0..=max_len).prop_map(|c| c.into_iter().collect())
}

/// Strategy for a code with exactly `vowels` vowels, spread among filler
pub fn code_with_vowels_strategy(vowels: usize) -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(select(VOWELS), vowels),
        proptest::collection::vec(filler_strategy(4), vowels + 1),
    )
        .prop_map(|(vowels, fillers)| {
            let mut code = String::new();
            for (i, filler) in fillers.iter().enumerate() {
                code.push_str(filler);
                if let Some(v) = vowels.get(i) {
                    code.push(*v);
                }
            }
            code
        })
}

/// Strategy for codes that pass the eligibility check
pub fn covered_code_strategy() -> impl Strategy<Value = String> {
    code_with_vowels_strategy(3)
}

/// Strategy for codes that fail the eligibility check
pub fn uncovered_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![0usize..3, 4usize..8].prop_flat_map(code_with_vowels_strategy)
}

/// Strategy for non-negative catalog prices with two decimal places
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..200_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for request dates between 2000 and roughly 2054
pub fn request_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.checked_add_days(Days::new(offset)))
            .unwrap_or(NaiveDate::MIN)
    })
}

/// Strategy for covered products at any price
pub fn covered_product_strategy() -> impl Strategy<Value = Product> {
    (covered_code_strategy(), price_strategy())
        .prop_map(|(code, price)| Product::new(code, "Generated Product", price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_warranty::is_covered;

    proptest! {
        #[test]
        fn covered_codes_are_covered(code in covered_code_strategy()) {
            prop_assert!(is_covered(&code));
        }

        #[test]
        fn uncovered_codes_are_not_covered(code in uncovered_code_strategy()) {
            prop_assert!(!is_covered(&code));
        }

        #[test]
        fn prices_are_not_negative(price in price_strategy()) {
            prop_assert!(!price.is_sign_negative());
        }
    }
}
