//! Category rulesets: the automata of one category plus its rewrite function.

use std::sync::Arc;

use tn_core::NormResult;
use tracing::warn;

use crate::automaton::{Automaton, Visit, is_digit};
use crate::categories::{Category, Rendition};
use crate::lexicon::Lexicon;

/// Whether `c` counts as part of a word for boundary checks.
///
/// Letters, digits, and the Devanagari block (vowel signs, virama, nukta)
/// are word characters; the danda and double danda are punctuation.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
        || (('\u{0900}'..='\u{097F}').contains(&c) && !matches!(c, '\u{0964}' | '\u{0965}'))
}

/// Whether a span may start or end at byte offset `pos`.
///
/// Two word characters are never split, and neither is a `,` sitting
/// between two digits, so a badly grouped `1,0000` stays one token.
pub fn is_boundary(text: &str, pos: usize) -> bool {
    let mut before = text[..pos].chars().rev();
    let mut after = text[pos..].chars();
    match (before.next(), after.next()) {
        (Some(prev), Some(next)) if is_word_char(prev) && is_word_char(next) => false,
        (Some(prev), Some(',')) if is_digit(prev) => !after.next().is_some_and(is_digit),
        (Some(','), Some(next)) if is_digit(next) => !before.next().is_some_and(is_digit),
        _ => true,
    }
}

/// A recognized span, already rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Category that recognized the span.
    pub category: Category,
    /// Name of the automaton within the category.
    pub pattern: &'static str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Accepting tag of the sub-pattern.
    pub tag: &'static str,
    /// States visited, start state first.
    pub path: Vec<Visit>,
    /// The original substring.
    pub raw: String,
    /// Spoken form and markup.
    pub rendition: Rendition,
}

impl Match {
    /// Length of the span in bytes.
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }

    /// State names along the path.
    pub fn state_names(&self) -> Vec<String> {
        self.path.iter().map(|v| v.name.to_string()).collect()
    }
}

/// One category's automata bound to a language lexicon.
#[derive(Debug, Clone)]
pub struct CategoryRuleset {
    category: Category,
    automata: Vec<Automaton>,
    lexicon: Arc<Lexicon>,
}

impl CategoryRuleset {
    /// Build the category's automata from `lexicon`.
    pub fn new(category: Category, lexicon: Arc<Lexicon>) -> NormResult<Self> {
        let automata = category.automata(&lexicon)?;
        Ok(Self {
            category,
            automata,
            lexicon,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn automata(&self) -> &[Automaton] {
        &self.automata
    }

    /// Total number of states across the category's automata.
    pub fn state_count(&self) -> usize {
        self.automata.iter().map(Automaton::state_count).sum()
    }

    /// Rewrite a recognized span.
    pub fn rewrite(&self, raw: &str, tag: &str) -> NormResult<Rendition> {
        self.category.rewrite(raw, tag, &self.lexicon)
    }

    /// Every automaton that accepts at `pos`, in automaton order.
    ///
    /// A span may not start or end in the middle of a word. Candidates whose
    /// rewrite fails are logged and treated as non-matching.
    pub fn find_candidates(&self, text: &str, pos: usize) -> Vec<Match> {
        if text.get(pos..).map_or(true, str::is_empty) || !is_boundary(text, pos) {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        for automaton in &self.automata {
            let Some(rec) = automaton.match_at_where(text, pos, |end| is_boundary(text, end)) else {
                continue;
            };
            let raw = &text[pos..rec.end];
            match self.rewrite(raw, rec.tag) {
                Ok(rendition) => {
                    candidates.push(Match {
                        category: self.category,
                        pattern: automaton.name(),
                        start: pos,
                        end: rec.end,
                        tag: rec.tag,
                        path: rec.path,
                        raw: raw.to_string(),
                        rendition,
                    });
                }
                Err(e) => {
                    warn!(category = %self.category, pattern = automaton.name(), raw, error = %e, "dropping candidate");
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset(category: Category) -> CategoryRuleset {
        CategoryRuleset::new(category, Arc::new(Lexicon::hindi().unwrap())).unwrap()
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('७'));
        assert!(is_word_char('क'));
        assert!(is_word_char('्'));
        assert!(!is_word_char('।'));
        assert!(!is_word_char('₹'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('.'));
    }

    #[test]
    fn test_year_and_integer_candidates() {
        let numbers = ruleset(Category::Numbers);
        let text = "वर्ष 1990 में";
        let pos = "वर्ष ".len();
        let candidates = numbers.find_candidates(text, pos);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].tag, "year");
        assert_eq!(candidates[1].tag, "integer");
        assert_eq!(candidates[0].raw, "1990");
        assert_eq!(candidates[0].span_len(), 4);
        assert_eq!(candidates[0].path.len(), 5);
    }

    #[test]
    fn test_boundary_inside_word() {
        let numbers = ruleset(Category::Numbers);
        assert!(numbers.find_candidates("5kg", 0).is_empty());
        assert!(numbers.find_candidates("a5", 1).is_empty());
        assert_eq!(numbers.find_candidates("5।", 0).len(), 1);

        let abbreviations = ruleset(Category::Abbreviations);
        assert!(abbreviations.find_candidates("डॉक्टर", 0).is_empty());
        assert_eq!(abbreviations.find_candidates("डॉ शर्मा", 0)[0].raw, "डॉ");
    }

    #[test]
    fn test_boundary_backtracks() {
        let numbers = ruleset(Category::Numbers);
        // "12.5" would end inside "12.5x"
        let candidates = numbers.find_candidates("12.5x", 0);
        assert_eq!(candidates[0].raw, "12");
    }

    #[test]
    fn test_comma_joins_digits() {
        assert!(!is_boundary("1,0000", 1));
        assert!(!is_boundary("1,0000", 2));
        assert!(is_boundary("1, 2", 1));
        assert!(is_boundary("हाँ,5", "हाँ,".len()));

        let numbers = ruleset(Category::Numbers);
        for pos in 0.."1,0000 लोग".len() {
            if "1,0000 लोग".is_char_boundary(pos) {
                assert!(numbers.find_candidates("1,0000 लोग", pos).is_empty(), "match at {pos}");
            }
        }
        assert_eq!(numbers.find_candidates("1,000 लोग", 0)[0].raw, "1,000");
        assert_eq!(numbers.find_candidates("1, 2", 0)[0].raw, "1");
    }

    #[test]
    fn test_position_out_of_range() {
        let numbers = ruleset(Category::Numbers);
        assert!(numbers.find_candidates("12", 2).is_empty());
        assert!(numbers.find_candidates("12", 10).is_empty());
    }
}
