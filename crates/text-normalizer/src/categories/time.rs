//! Clock times (`10:30`, `14:45:20`, `7:05 PM`, `9:00 a.m.`).

use tn_core::{NormError, NormResult};

use super::{Markup, Rendition};
use crate::automaton::{Automaton, AutomatonBuilder, CharClass, START, StateId};
use crate::lexicon::Lexicon;
use crate::num2words::{NumberSpeller, parse_digits};

/// Hour 0-23, one or two digits. Returns the states where an hour is complete.
fn hour(b: &mut AutomatonBuilder) -> NormResult<Vec<StateId>> {
    let zero_one = b.state("HOUR");
    let two = b.state("HOUR");
    let single = b.state("HOUR");
    let done = b.state("HOUR");
    b.transition(START, CharClass::digit_range(0, 1), zero_one)?;
    b.transition(START, CharClass::digit_range(2, 2), two)?;
    b.transition(START, CharClass::digit_range(3, 9), single)?;
    b.transition(zero_one, CharClass::digit(), done)?;
    b.transition(two, CharClass::digit_range(0, 3), done)?;
    Ok(vec![zero_one, two, single, done])
}

/// Two digits 00-59 after `from`.
fn sixty(b: &mut AutomatonBuilder, from: StateId, name: &'static str, tag: &'static str) -> NormResult<StateId> {
    let tens = b.state(name);
    let units = b.accepting(name, tag);
    b.transition(from, CharClass::digit_range(0, 5), tens)?;
    b.transition(tens, CharClass::digit(), units)?;
    Ok(units)
}

/// `AM`, `pm`, `A.M.`, `p.m` after any of `from`, with an optional space.
fn period(b: &mut AutomatonBuilder, from: &[StateId]) -> NormResult<()> {
    let space = b.state("SPACE");
    b.transitions(from, &CharClass::space(), space)?;

    let mut entries = from.to_vec();
    entries.push(space);
    let meridiem = b.state("PERIOD");
    b.transitions(&entries, &CharClass::any_of(&['A', 'a', 'P', 'p']), meridiem)?;

    let m = CharClass::caseless('m');
    let short = b.accepting("PERIOD", "period");
    b.transition(meridiem, m.clone(), short)?;

    let dot = b.state("PERIOD");
    let dotted = b.accepting("PERIOD", "period");
    let closed = b.accepting("PERIOD", "period");
    b.transition(meridiem, CharClass::exact('.'), dot)?;
    b.transition(dot, m, dotted)?;
    b.transition(dotted, CharClass::exact('.'), closed)?;
    Ok(())
}

pub(super) fn automata() -> NormResult<Vec<Automaton>> {
    let mut b = AutomatonBuilder::new("time", "START");
    let hours = hour(&mut b)?;
    let colon = b.state("COLON");
    b.transitions(&hours, &CharClass::exact(':'), colon)?;
    let minutes = sixty(&mut b, colon, "MINUTE", "hm")?;

    let colon = b.state("COLON");
    b.transition(minutes, CharClass::exact(':'), colon)?;
    let seconds = sixty(&mut b, colon, "SECOND", "hms")?;

    period(&mut b, &[minutes, seconds])?;
    Ok(vec![b.build()?])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Split `10:30:15 PM` into hour, minute, optional second and optional period.
fn parse(raw: &str) -> Option<(u64, u64, Option<u64>, Option<Meridiem>)> {
    let split = raw
        .find(|c: char| !(c == ':' || crate::automaton::is_digit(c)))
        .unwrap_or(raw.len());
    let (clock, rest) = raw.split_at(split);
    let mut fields = clock.split(':');
    let hour = parse_digits(fields.next()?)?;
    let minute = parse_digits(fields.next()?)?;
    let second = match fields.next() {
        Some(s) => Some(parse_digits(s)?),
        None => None,
    };

    let period = rest.trim().replace('.', "").to_ascii_uppercase();
    let meridiem = match period.as_str() {
        "" => None,
        "AM" => Some(Meridiem::Am),
        "PM" => Some(Meridiem::Pm),
        _ => return None,
    };
    Some((hour, minute, second, meridiem))
}

pub(super) fn rewrite(raw: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
    let (hour, minute, second, meridiem) = parse(raw)
        .ok_or_else(|| NormError::inconsistency(format!("time {raw:?} cannot be read")))?;
    let words = &lexicon.time;
    let speller = NumberSpeller::new(&lexicon.numbers);

    let mut spoken = if minute == 0 && second.is_none() {
        format!("{} {}", speller.cardinal(hour), words.hour_marker)
    } else {
        format!(
            "{} {} {} {}",
            speller.cardinal(hour),
            words.hour_minute_connector,
            speller.cardinal(minute),
            words.minute_word
        )
    };
    if let Some(second) = second.filter(|&s| s > 0) {
        spoken = format!("{spoken} {} {}", speller.cardinal(second), words.second_word);
    }

    let periods = &words.periods;
    let prefix = match meridiem {
        None => None,
        Some(Meridiem::Am) => Some(&periods.am),
        Some(Meridiem::Pm) if hour < 4 || hour == 12 => Some(&periods.pm_afternoon),
        Some(Meridiem::Pm) if hour < 7 => Some(&periods.pm_evening),
        Some(Meridiem::Pm) => Some(&periods.pm_night),
    };
    if let Some(prefix) = prefix {
        spoken = format!("{prefix} {spoken}");
    }

    let format = if meridiem.is_some() { "hms12" } else { "hms24" };
    Ok(Rendition {
        spoken,
        markup: Markup::say_as_with("time", format),
    })
}
