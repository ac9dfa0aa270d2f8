//! Property-based tests for the scanner and session.
//!
//! Random mixes of digits, separators, Latin and Devanagari letters check
//! that scanning never overlaps, traces agree with the consumed input, and
//! text without normalizable spans passes through untouched.

use proptest::prelude::*;
use text_normalizer::Normalizer;
use tn_core::TextNormalizer;

const ALL: &[&str] = &[
    "numbers",
    "ordinals",
    "currency",
    "units",
    "dates",
    "time",
    "abbreviations",
];

fn normalizer() -> &'static Normalizer {
    Normalizer::shared().expect("built-in registry")
}

/// Text likely to contain numbers, dates, times, and amounts.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9०-९a-zA-Zक-ह ,.:/%₹-]{1,48}")
        .expect("valid regex")
        .prop_filter("not blank", |s| !s.trim().is_empty())
}

/// Devanagari consonants and spaces only.
fn plain_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[क-ह ]{1,32}")
        .expect("valid regex")
        .prop_filter("not blank", |s| !s.trim().is_empty())
}

proptest! {
    #[test]
    fn matches_are_ordered_and_disjoint(text in mixed_text()) {
        let set = normalizer().scan(&text, ALL, "hi-IN").unwrap();
        let mut cursor = 0;
        for m in &set {
            prop_assert!(m.start >= cursor);
            prop_assert!(m.end > m.start);
            prop_assert_eq!(&text[m.start..m.end], m.raw.as_str());
            cursor = m.end;
        }
    }

    #[test]
    fn trace_length_follows_consumed_chars(text in mixed_text()) {
        let result = normalizer().normalize(&text, ALL, "hi-IN").unwrap();
        for entry in &result.dfa_info {
            prop_assert_eq!(entry.states.len(), entry.original.chars().count() + 1);
            prop_assert_eq!(entry.states[0].as_str(), "START");
        }
    }

    #[test]
    fn only_enabled_categories_match(text in mixed_text(), pick in 0usize..7) {
        let category = ALL[pick];
        let result = normalizer().normalize(&text, &[category], "hi-IN").unwrap();
        for entry in &result.dfa_info {
            prop_assert_eq!(entry.category.as_str(), category);
        }
    }

    #[test]
    fn normalization_is_deterministic(text in mixed_text()) {
        let first = normalizer().normalize(&text, ALL, "hi-IN").unwrap();
        let second = normalizer().normalize(&text, ALL, "hi-IN").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn plain_text_is_unchanged(text in plain_text()) {
        let result = normalizer().normalize(&text, ALL, "hi-IN").unwrap();
        prop_assert_eq!(&result.normalized_text, &text);
        prop_assert!(result.dfa_info.is_empty());
    }

    #[test]
    fn cardinals_are_fully_spelled(n in 0u64..1_000_000_000_000) {
        let text = format!("कुल {n} लोग");
        let result = normalizer().normalize(&text, &["numbers"], "hi-IN").unwrap();
        prop_assert_eq!(result.dfa_info.len(), 1);
        prop_assert!(!result.normalized_text.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(result.normalized_text.starts_with("कुल "));
        prop_assert!(result.normalized_text.ends_with(" लोग"));
    }

    #[test]
    fn ssml_is_one_speak_element(text in mixed_text()) {
        let result = normalizer().normalize(&text, ALL, "hi-IN").unwrap();
        prop_assert_eq!(result.ssml.matches("<speak ").count(), 1);
        prop_assert!(result.ssml.ends_with("</speak>"));
        prop_assert_eq!(
            result.ssml.matches("<say-as").count() + result.ssml.matches("<sub ").count(),
            result.dfa_info.len()
        );
    }
}
