//! Number to words conversion using the Indian numbering system.

use crate::automaton::digit_value;
use crate::lexicon::NumberWords;

const HUNDRED: u64 = 100;
const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Parse a run of ASCII/Devanagari digits, ignoring `,` group separators.
///
/// Returns `None` if the text contains no digits, any other character, or
/// does not fit in a `u64`.
pub fn parse_digits(s: &str) -> Option<u64> {
    let mut value: u64 = 0;
    let mut seen = false;
    for c in s.chars() {
        if c == ',' {
            continue;
        }
        let d = digit_value(c)?;
        value = value.checked_mul(10)?.checked_add(u64::from(d))?;
        seen = true;
    }
    seen.then_some(value)
}

/// Spells numbers with a language's number words.
#[derive(Debug, Clone, Copy)]
pub struct NumberSpeller<'a> {
    words: &'a NumberWords,
}

impl<'a> NumberSpeller<'a> {
    /// Create a speller over validated number words (100 entries).
    pub fn new(words: &'a NumberWords) -> Self {
        Self { words }
    }

    fn word(&self, n: u64) -> &'a str {
        self.words
            .words
            .get(n as usize)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Convert a number to words.
    pub fn cardinal(&self, n: u64) -> String {
        if n < HUNDRED {
            return self.word(n).to_string();
        }

        let scales = &self.words.scales;
        let (head, scale, unit) = if n < THOUSAND {
            (self.word(n / HUNDRED).to_string(), &scales.hundred, HUNDRED)
        } else if n < LAKH {
            (self.cardinal(n / THOUSAND), &scales.thousand, THOUSAND)
        } else if n < CRORE {
            (self.cardinal(n / LAKH), &scales.lakh, LAKH)
        } else {
            (self.cardinal(n / CRORE), &scales.crore, CRORE)
        };

        let rest = n % unit;
        if rest == 0 {
            format!("{head} {scale}")
        } else {
            format!("{head} {scale} {}", self.cardinal(rest))
        }
    }

    /// Read every digit separately.
    pub fn digit_by_digit(&self, s: &str) -> String {
        s.chars()
            .filter_map(digit_value)
            .map(|d| self.word(u64::from(d)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Read a digit run as a cardinal, falling back to digit-by-digit when
    /// the value does not fit in a `u64`.
    pub fn digits(&self, s: &str) -> String {
        match parse_digits(s) {
            Some(n) => self.cardinal(n),
            None => self.digit_by_digit(s),
        }
    }

    /// Read a decimal number: integer part as a cardinal, fraction digit by digit.
    pub fn decimal(&self, integer: &str, fraction: &str) -> String {
        let integer = if integer.is_empty() {
            self.cardinal(0)
        } else {
            self.digits(integer)
        };
        if fraction.is_empty() {
            return integer;
        }
        format!(
            "{integer} {} {}",
            self.words.decimal_point,
            self.digit_by_digit(fraction)
        )
    }

    /// Read a number written with an optional `.` fraction.
    pub fn number(&self, s: &str) -> String {
        match s.split_once('.') {
            Some((integer, fraction)) => self.decimal(integer, fraction),
            None => self.digits(s),
        }
    }

    /// Read a calendar year.
    ///
    /// Years 1100-1999 are read as a pair ("उन्नीस सौ नब्बे") when the
    /// lexicon asks for it; everything else is a plain cardinal.
    pub fn year(&self, year: u64) -> String {
        if self.words.years_in_hundreds && (1100..2000).contains(&year) {
            let head = self.word(year / HUNDRED);
            let rest = year % HUNDRED;
            return if rest == 0 {
                format!("{head} {}", self.words.scales.hundred)
            } else {
                format!("{head} {} {}", self.words.scales.hundred, self.word(rest))
            };
        }
        self.cardinal(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn speller_test<F: FnOnce(NumberSpeller<'_>)>(f: F) {
        let lex = Lexicon::hindi().unwrap();
        f(NumberSpeller::new(&lex.numbers));
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("1990"), Some(1990));
        assert_eq!(parse_digits("१९९०"), Some(1990));
        assert_eq!(parse_digits("1,00,000"), Some(100_000));
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("12a"), None);
        assert_eq!(parse_digits("99999999999999999999999"), None);
    }

    #[test]
    fn test_hindi_basic() {
        speller_test(|s| {
            assert_eq!(s.cardinal(0), "शून्य");
            assert_eq!(s.cardinal(5), "पाँच");
            assert_eq!(s.cardinal(19), "उन्नीस");
            assert_eq!(s.cardinal(23), "तेईस");
            assert_eq!(s.cardinal(99), "निन्यानवे");
            assert_eq!(s.cardinal(100), "एक सौ");
            assert_eq!(s.cardinal(123), "एक सौ तेईस");
            assert_eq!(s.cardinal(500), "पाँच सौ");
        });
    }

    #[test]
    fn test_hindi_indian_scales() {
        speller_test(|s| {
            assert_eq!(s.cardinal(1000), "एक हज़ार");
            assert_eq!(s.cardinal(1990), "एक हज़ार नौ सौ नब्बे");
            assert_eq!(s.cardinal(2024), "दो हज़ार चौबीस");
            assert_eq!(s.cardinal(25_000), "पच्चीस हज़ार");
            assert_eq!(s.cardinal(100_000), "एक लाख");
            assert_eq!(s.cardinal(125_000), "एक लाख पच्चीस हज़ार");
            assert_eq!(s.cardinal(10_000_000), "एक करोड़");
            assert_eq!(s.cardinal(50_00_00_000), "पचास करोड़");
            assert_eq!(s.cardinal(1_000_000_000_000), "एक लाख करोड़");
        });
    }

    #[test]
    fn test_hindi_years() {
        speller_test(|s| {
            assert_eq!(s.year(1990), "उन्नीस सौ नब्बे");
            assert_eq!(s.year(1900), "उन्नीस सौ");
            assert_eq!(s.year(1047), "एक हज़ार सैंतालीस");
            assert_eq!(s.year(2024), "दो हज़ार चौबीस");
        });
    }

    #[test]
    fn test_hindi_decimals() {
        speller_test(|s| {
            assert_eq!(s.number("2.5"), "दो दशमलव पाँच");
            assert_eq!(s.number("2.05"), "दो दशमलव शून्य पाँच");
            assert_eq!(s.number("1,000"), "एक हज़ार");
        });
    }

    #[test]
    fn test_oversized_digit_run() {
        speller_test(|s| {
            let text = "123456789012345678901234";
            let spoken = s.digits(text);
            assert_eq!(spoken.split(' ').count(), text.len());
            assert!(spoken.starts_with("एक दो तीन"));
        });
    }
}
