//! Cardinal numbers, decimals, and years.

use tn_core::{NormError, NormResult};

use super::{AmountNames, AmountTags, Markup, Rendition, amount};
use crate::automaton::{Automaton, AutomatonBuilder, CharClass, START};
use crate::lexicon::Lexicon;
use crate::num2words::{NumberSpeller, parse_digits};

pub(super) const YEAR: &str = "year";
pub(super) const INTEGER: &str = "integer";
pub(super) const DECIMAL: &str = "decimal";

/// Four digits starting with 1; listed first so it wins ties against `integer`.
fn year() -> NormResult<Automaton> {
    let mut b = AutomatonBuilder::new("year", "START");
    let millennium = b.state("YEAR");
    let century = b.state("YEAR");
    let decade = b.state("YEAR");
    let year = b.accepting("YEAR", YEAR);
    b.transition(START, CharClass::digit_range(1, 1), millennium)?;
    b.transition(millennium, CharClass::digit(), century)?;
    b.transition(century, CharClass::digit(), decade)?;
    b.transition(decade, CharClass::digit(), year)?;
    b.build()
}

fn integer() -> NormResult<Automaton> {
    let mut b = AutomatonBuilder::new("integer", "START");
    let names = AmountNames {
        integer: "DIGIT",
        group_separator: "GROUP_SEPARATOR",
        group: "DIGIT_GROUP",
        decimal_point: "DECIMAL_POINT",
        fraction: "DECIMAL_DIGIT",
    };
    let tags = AmountTags {
        integer: INTEGER,
        fraction: DECIMAL,
    };
    amount(&mut b, &[START], &names, Some(&tags))?;
    b.build()
}

pub(super) fn automata() -> NormResult<Vec<Automaton>> {
    Ok(vec![year()?, integer()?])
}

pub(super) fn rewrite(raw: &str, tag: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
    let speller = NumberSpeller::new(&lexicon.numbers);
    match tag {
        YEAR => {
            let value = parse_digits(raw)
                .ok_or_else(|| NormError::inconsistency(format!("year {raw:?} is not numeric")))?;
            Ok(Rendition {
                spoken: speller.year(value),
                markup: Markup::say_as_with("date", "y"),
            })
        }
        INTEGER | DECIMAL => Ok(Rendition {
            spoken: speller.number(raw),
            markup: Markup::say_as("cardinal"),
        }),
        other => Err(NormError::inconsistency(format!(
            "numbers: unknown pattern tag {other}"
        ))),
    }
}
