//! Projects a match set onto caller-facing trace entries.

use tn_core::TraceEntry;

use crate::scanner::MatchSet;

/// One entry per match, in match order.
pub fn record(matches: &MatchSet) -> Vec<TraceEntry> {
    matches
        .iter()
        .map(|m| TraceEntry {
            category: m.category.id().to_string(),
            original: m.raw.clone(),
            states: m.state_names(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::categories::Category;
    use crate::lexicon::Lexicon;
    use crate::ruleset::CategoryRuleset;
    use crate::scanner::Scanner;

    #[test]
    fn test_record_year() {
        let lex = Arc::new(Lexicon::hindi().unwrap());
        let numbers = CategoryRuleset::new(Category::Numbers, lex).unwrap();
        let set = Scanner::new(vec![&numbers]).scan("वर्ष 1990 में, 25 लोग");

        let entries = record(&set);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "numbers");
        assert_eq!(entries[0].original, "1990");
        assert_eq!(entries[0].states, ["START", "YEAR", "YEAR", "YEAR", "YEAR"]);
        assert_eq!(entries[1].original, "25");
        assert_eq!(entries[1].states, ["START", "DIGIT", "DIGIT"]);
        assert_eq!(entries[1].chain(), "START → DIGIT → DIGIT");
    }

    #[test]
    fn test_record_empty() {
        assert!(record(&MatchSet::default()).is_empty());
    }
}
