//! Measurements: a number followed by a unit symbol (`5 kg`, `2.5किमी`, `50%`).
//!
//! A space may separate the number from its symbol, except for symbols the
//! lexicon lists in `glued_units`: `5 in 10` is not a length.

use tn_core::{NormError, NormResult};

use super::{AmountNames, Markup, Rendition, amount, split_number};
use crate::automaton::{Automaton, AutomatonBuilder, CharClass, START};
use crate::lexicon::Lexicon;
use crate::num2words::NumberSpeller;

const UNIT: &str = "unit";

pub(super) fn automata(lexicon: &Lexicon) -> NormResult<Vec<Automaton>> {
    let mut b = AutomatonBuilder::new("unit", "START");
    let names = AmountNames {
        integer: "DIGIT",
        group_separator: "GROUP_SEPARATOR",
        group: "DIGIT_GROUP",
        decimal_point: "DECIMAL_POINT",
        fraction: "DECIMAL_DIGIT",
    };
    let entries = amount(&mut b, &[START], &names, None)?;
    let space = b.state("SPACE");
    b.transitions(&entries, &CharClass::space(), space)?;

    // each entry state gets its own copy of the symbol trie
    for &entry in &entries {
        for symbol in lexicon.units.keys() {
            let end = b.word(entry, symbol, "UNIT_SYMBOL")?;
            b.accept(end, UNIT)?;
        }
    }
    let spaced = lexicon.units.keys().filter(|s| !lexicon.glued_units.contains(*s));
    for symbol in spaced {
        let end = b.word(space, symbol, "UNIT_SYMBOL")?;
        b.accept(end, UNIT)?;
    }
    Ok(vec![b.build()?])
}

pub(super) fn rewrite(raw: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
    let (number, symbol) = split_number(raw);
    let symbol = symbol.trim_start_matches(|c: char| c.is_whitespace());
    let name = lexicon
        .units
        .get(symbol)
        .ok_or_else(|| NormError::inconsistency(format!("unit {symbol:?} is not in the lexicon")))?;
    let spoken = format!("{} {name}", NumberSpeller::new(&lexicon.numbers).number(number));
    Ok(Rendition {
        spoken,
        markup: Markup::say_as(UNIT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::hindi().unwrap()
    }

    #[test]
    fn test_unit_automaton() {
        let lex = lexicon();
        let dfa = automata(&lex).unwrap().remove(0);
        assert_eq!(dfa.match_at("5kg", 0).unwrap().end, 3);
        assert_eq!(dfa.match_at("5 kg", 0).unwrap().end, 4);
        assert_eq!(dfa.match_at("1,000 km", 0).unwrap().end, 8);
        assert_eq!(dfa.match_at("2.5 किमी", 0).unwrap().end, "2.5 किमी".len());
        assert_eq!(dfa.match_at("50%", 0).unwrap().tag, UNIT);
        assert!(dfa.match_at("5 ", 0).is_none());
        assert!(dfa.match_at("kg", 0).is_none());
        assert!(dfa.match_at("5 in", 0).is_none());
        assert!(dfa.match_at("3 A", 0).is_none());
        assert_eq!(dfa.match_at("5in", 0).unwrap().end, 3);
        assert!(dfa.match_at("2 ली", 0).is_none());
        assert_eq!(dfa.match_at("2ली", 0).unwrap().end, "2ली".len());
        assert_eq!(dfa.match_at("5 mm", 0).unwrap().end, 4);

        let rec = dfa.match_at("5 kg", 0).unwrap();
        let names: Vec<_> = rec.path.iter().map(|v| v.name).collect();
        assert_eq!(names, ["START", "DIGIT", "SPACE", "UNIT_SYMBOL", "UNIT_SYMBOL"]);
    }

    #[test]
    fn test_rewrite_units() {
        let lex = lexicon();
        let r = rewrite("5 kg", &lex).unwrap();
        assert_eq!(r.spoken, "पाँच किलोग्राम");
        assert_eq!(r.markup, Markup::say_as("unit"));
        assert_eq!(rewrite("50%", &lex).unwrap().spoken, "पचास प्रतिशत");
        assert_eq!(
            rewrite("2.5 km", &lex).unwrap().spoken,
            format!("दो दशमलव पाँच {}", lex.units["km"])
        );
    }

    #[test]
    fn test_rewrite_unknown_symbol() {
        let err = rewrite("5 furlong", &lexicon()).unwrap_err();
        assert!(matches!(err, NormError::EngineInconsistency(_)));
    }
}
