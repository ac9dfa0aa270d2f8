//! Ordinals: a digit run followed by a written suffix (`1st`, `5वाँ`, `21वीं`).

use tn_core::{NormError, NormResult};

use super::{Markup, Rendition, split_number};
use crate::automaton::{Automaton, AutomatonBuilder, CharClass, START};
use crate::lexicon::Lexicon;
use crate::num2words::{NumberSpeller, parse_digits};

const ORDINAL: &str = "ordinal";

pub(super) fn automata(lexicon: &Lexicon) -> NormResult<Vec<Automaton>> {
    let mut b = AutomatonBuilder::new("ordinal", "START");
    let digit = b.state("DIGIT");
    b.transition(START, CharClass::digit(), digit)?;
    b.transition(digit, CharClass::digit(), digit)?;

    for suffix in lexicon.ordinals.suffixes.keys() {
        let classes = suffix.chars().map(CharClass::caseless).collect();
        let end = b.path(digit, classes, "ORDINAL_SUFFIX")?;
        b.accept(end, ORDINAL)?;
    }
    Ok(vec![b.build()?])
}

pub(super) fn rewrite(raw: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
    let (digits, suffix) = split_number(raw);
    let value = parse_digits(digits)
        .ok_or_else(|| NormError::inconsistency(format!("ordinal {raw:?} has no readable number")))?;
    let words = &lexicon.ordinals;
    let form = words.form_of(suffix);

    let spoken = match words.irregular.get(&value) {
        Some(forms) => forms.get(form).to_string(),
        None => {
            let cardinal = NumberSpeller::new(&lexicon.numbers).cardinal(value);
            format!("{cardinal}{}", words.generic_suffix.get(form))
        }
    };
    Ok(Rendition {
        spoken,
        markup: Markup::say_as(ORDINAL),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::hindi().unwrap()
    }

    #[test]
    fn test_ordinal_automaton() {
        let lex = lexicon();
        let dfa = automata(&lex).unwrap().remove(0);
        assert_eq!(dfa.match_at("1st", 0).unwrap().end, 3);
        assert_eq!(dfa.match_at("2ND", 0).unwrap().end, 3);
        assert_eq!(dfa.match_at("21वीं", 0).unwrap().end, "21वीं".len());
        let rec = dfa.match_at("5वाँ", 0).unwrap();
        assert_eq!(rec.tag, ORDINAL);
        assert_eq!(rec.path.len(), 5);
        assert_eq!(rec.path[1].name, "DIGIT");
        assert_eq!(rec.path[4].name, "ORDINAL_SUFFIX");
        assert!(dfa.match_at("25", 0).is_none());
    }

    #[test]
    fn test_irregular_ordinals() {
        let lex = lexicon();
        assert_eq!(rewrite("1st", &lex).unwrap().spoken, "पहला");
        assert_eq!(rewrite("1ली", &lex).unwrap().spoken, "पहली");
        assert_eq!(rewrite("6th", &lex).unwrap().spoken, "छठा");
    }

    #[test]
    fn test_generic_ordinals() {
        let lex = lexicon();
        assert_eq!(rewrite("5वाँ", &lex).unwrap().spoken, "पाँचवाँ");
        assert_eq!(rewrite("21वीं", &lex).unwrap().spoken, "इक्कीसवीं");
        assert_eq!(rewrite("10वें", &lex).unwrap().spoken, "दसवें");
        assert_eq!(rewrite("5TH", &lex).unwrap().markup, Markup::say_as("ordinal"));
    }
}
