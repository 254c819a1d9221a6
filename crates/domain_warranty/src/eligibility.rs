//! Product code eligibility
//!
//! A code qualifies for an extended warranty when, ignoring case, the whole
//! code matches
//!
//! ```text
//! ^[^aeiou]*[aeiou][^aeiou]*[aeiou][^aeiou]*[aeiou][^aeiou]*$
//! ```
//!
//! Every `[^aeiou]*` group may be empty, so vowels may sit next to each other
//! and anything that is not a vowel (digits, spaces, line breaks, non-ASCII
//! letters) fills the gaps. The pattern therefore accepts exactly the codes
//! holding three ASCII vowels, which is what the scan below checks.

/// Number of vowels a covered code must contain
pub const COVERED_VOWEL_COUNT: usize = 3;

/// Case folding is ASCII-only: `À` or `é` are not vowels here
fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Returns true if the product code qualifies for an extended warranty
pub fn is_covered(code: &str) -> bool {
    let mut vowels = 0;
    for c in code.chars() {
        if is_vowel(c) {
            vowels += 1;
            if vowels > COVERED_VOWEL_COUNT {
                return false;
            }
        }
    }
    vowels == COVERED_VOWEL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_separated_vowels_are_covered() {
        assert!(is_covered("A1E2I3"));
        assert!(is_covered("f0r0u7a1n"));
        assert!(is_covered("xAxExIx"));
    }

    #[test]
    fn test_adjacent_vowels_are_covered() {
        assert!(is_covered("F01TSAEI50"));
        assert!(is_covered("aei"));
        assert!(is_covered("OUa"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_covered("AeI"));
        assert!(is_covered("aEi"));
    }

    #[test]
    fn test_wrong_vowel_count_is_not_covered() {
        assert!(!is_covered(""));
        assert!(!is_covered("F01TS50"));
        assert!(!is_covered("A1E2"));
        assert!(!is_covered("A1E2I3O4"));
        assert!(!is_covered("aeiou"));
    }

    #[test]
    fn test_y_and_accented_letters_are_not_vowels() {
        assert!(!is_covered("yyy"));
        assert!(!is_covered("ÀÉÍ"));
        assert!(is_covered("ÀaÉeÍi"));
    }

    #[test]
    fn test_line_breaks_count_as_gaps() {
        assert!(is_covered("a\ne\ni"));
        assert!(is_covered("a1e2i3\n"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn gap() -> impl Strategy<Value = String> {
        "[b-df-hj-np-tv-zB-DF-HJ-NP-TV-Z0-9 _-]{0,4}"
    }

    fn vowel() -> impl Strategy<Value = char> {
        prop::sample::select(vec!['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'])
    }

    proptest! {
        #[test]
        fn exactly_three_vowels_with_any_gaps_is_covered(
            g0 in gap(), v1 in vowel(), g1 in gap(), v2 in vowel(),
            g2 in gap(), v3 in vowel(), g3 in gap(),
        ) {
            let code = format!("{g0}{v1}{g1}{v2}{g2}{v3}{g3}");
            prop_assert!(is_covered(&code));
        }

        #[test]
        fn coverage_matches_vowel_count(code in "[a-zA-Z0-9]{0,16}") {
            let vowels = code.chars().filter(|c| "aeiouAEIOU".contains(*c)).count();
            prop_assert_eq!(is_covered(&code), vowels == 3);
        }
    }
}
