//! Numeric dates, day first (`15/08/2024`, `1-1-24`, `05.06.1990`).
//!
//! Day and month ranges are encoded in the transitions, so `32/01/2024` and
//! `15/13/2024` are never recognized. Both separators must be the same.

use tn_core::{NormError, NormResult};

use super::{Markup, Rendition};
use crate::automaton::{Automaton, AutomatonBuilder, CharClass, START, StateId, digit_value};
use crate::lexicon::Lexicon;
use crate::num2words::{NumberSpeller, parse_digits};

const SEPARATORS: [char; 3] = ['/', '-', '.'];

/// Day 1-31, one or two digits. Returns the states where a day is complete.
fn day(b: &mut AutomatonBuilder) -> NormResult<Vec<StateId>> {
    let zero = b.state("DAY");
    let one_two = b.state("DAY");
    let three = b.state("DAY");
    let single = b.state("DAY");
    let done = b.state("DAY");
    b.transition(START, CharClass::digit_range(0, 0), zero)?;
    b.transition(START, CharClass::digit_range(1, 2), one_two)?;
    b.transition(START, CharClass::digit_range(3, 3), three)?;
    b.transition(START, CharClass::digit_range(4, 9), single)?;
    b.transition(zero, CharClass::digit_range(1, 9), done)?;
    b.transition(one_two, CharClass::digit(), done)?;
    b.transition(three, CharClass::digit_range(0, 1), done)?;
    Ok(vec![one_two, three, single, done])
}

/// Month 1-12 after `separator`; returns the states where the month is complete.
fn month(b: &mut AutomatonBuilder, separator: StateId) -> NormResult<Vec<StateId>> {
    let zero = b.state("MONTH");
    let one = b.state("MONTH");
    let single = b.state("MONTH");
    let done = b.state("MONTH");
    b.transition(separator, CharClass::digit_range(0, 0), zero)?;
    b.transition(separator, CharClass::digit_range(1, 1), one)?;
    b.transition(separator, CharClass::digit_range(2, 9), single)?;
    b.transition(zero, CharClass::digit_range(1, 9), done)?;
    b.transition(one, CharClass::digit_range(0, 2), done)?;
    Ok(vec![one, single, done])
}

/// Two- or four-digit year after `separator`.
fn year(b: &mut AutomatonBuilder, separator: StateId) -> NormResult<()> {
    let y1 = b.state("YEAR");
    let y2 = b.accepting("YEAR", "dmy_short");
    let y3 = b.state("YEAR");
    let y4 = b.accepting("YEAR", "dmy");
    b.transition(separator, CharClass::digit(), y1)?;
    b.transition(y1, CharClass::digit(), y2)?;
    b.transition(y2, CharClass::digit(), y3)?;
    b.transition(y3, CharClass::digit(), y4)?;
    Ok(())
}

pub(super) fn automata() -> NormResult<Vec<Automaton>> {
    let mut b = AutomatonBuilder::new("date", "START");
    let days = day(&mut b)?;
    for sep in SEPARATORS {
        let class = CharClass::exact(sep);
        let first = b.state("SEPARATOR");
        b.transitions(&days, &class, first)?;
        let months = month(&mut b, first)?;
        let second = b.state("SEPARATOR");
        b.transitions(&months, &class, second)?;
        year(&mut b, second)?;
    }
    Ok(vec![b.build()?])
}

pub(super) fn rewrite(raw: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
    let fields: Vec<&str> = raw.split(|c: char| SEPARATORS.contains(&c)).collect();
    let &[day, month, year] = &fields[..] else {
        return Err(NormError::inconsistency(format!("date {raw:?} does not have three fields")));
    };
    let invalid = || NormError::inconsistency(format!("date {raw:?} has a non-numeric field"));
    let day = parse_digits(day).ok_or_else(invalid)?;
    let month = parse_digits(month).ok_or_else(invalid)?;
    let year_digits = year.chars().filter(|&c| digit_value(c).is_some()).count();
    let mut year = parse_digits(year).ok_or_else(invalid)?;
    if year_digits <= 2 {
        year += 2000;
    }

    let month_name = month
        .checked_sub(1)
        .and_then(|i| lexicon.dates.months.get(i as usize))
        .ok_or_else(|| NormError::inconsistency(format!("date {raw:?} has month {month}")))?;
    let speller = NumberSpeller::new(&lexicon.numbers);
    Ok(Rendition {
        spoken: format!("{} {month_name} {}", speller.cardinal(day), speller.year(year)),
        markup: Markup::say_as_with("date", "dmy"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::hindi().unwrap()
    }

    fn date() -> Automaton {
        automata().unwrap().remove(0)
    }

    #[test]
    fn test_date_automaton() {
        let dfa = date();
        let rec = dfa.match_at("15/08/2024", 0).unwrap();
        assert_eq!(rec.end, 10);
        assert_eq!(rec.tag, "dmy");
        assert_eq!(rec.path.len(), 11);
        assert_eq!(rec.path[3].name, "SEPARATOR");
        assert_eq!(rec.path[10].name, "YEAR");
        assert_eq!(dfa.match_at("1-1-24", 0).unwrap().tag, "dmy_short");
        assert_eq!(dfa.match_at("05.06.1990", 0).unwrap().end, 10);
    }

    #[test]
    fn test_date_ranges() {
        let dfa = date();
        assert!(dfa.match_at("32/01/2024", 0).is_none());
        assert!(dfa.match_at("00/01/2024", 0).is_none());
        assert!(dfa.match_at("15/13/2024", 0).is_none());
        assert!(dfa.match_at("15/00/2024", 0).is_none());
        assert!(dfa.match_at("31/12/2024", 0).is_some());
    }

    #[test]
    fn test_mixed_separators_rejected() {
        assert!(date().match_at("15/08-2024", 0).is_none());
    }

    #[test]
    fn test_three_digit_year_backtracks() {
        let rec = date().match_at("15/08/202", 0).unwrap();
        assert_eq!(rec.end, 8);
        assert_eq!(rec.tag, "dmy_short");
    }

    #[test]
    fn test_rewrite_dates() {
        let lex = lexicon();
        let r = rewrite("15/08/2024", &lex).unwrap();
        assert_eq!(r.spoken, "पंद्रह अगस्त दो हज़ार चौबीस");
        assert_eq!(r.markup, Markup::say_as_with("date", "dmy"));
        assert_eq!(rewrite("1-1-24", &lex).unwrap().spoken, "एक जनवरी दो हज़ार चौबीस");
        assert_eq!(rewrite("05.06.1990", &lex).unwrap().spoken, "पाँच जून उन्नीस सौ नब्बे");
    }
}
