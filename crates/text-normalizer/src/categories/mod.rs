//! Normalization categories.
//!
//! Each category contributes automata built from the language lexicon and a
//! rewrite function from a recognized span to its spoken form. Categories are
//! variants of one enum and dispatch by match, so automata and rewrite rules
//! can be tested on their own.

mod abbreviations;
mod currency;
mod dates;
mod numbers;
mod ordinals;
mod time;
mod units;

use std::fmt;

use tn_core::NormResult;

use crate::automaton::{Automaton, AutomatonBuilder, CharClass, StateId};
use crate::lexicon::Lexicon;

/// A named group of patterns sharing a normalization purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Dates,
    Time,
    Currency,
    Units,
    Ordinals,
    Abbreviations,
    Numbers,
}

impl Category {
    /// All categories in registration order.
    pub const ALL: [Category; 7] = [
        Category::Dates,
        Category::Time,
        Category::Currency,
        Category::Units,
        Category::Ordinals,
        Category::Abbreviations,
        Category::Numbers,
    ];

    /// Canonical identifier.
    pub fn id(self) -> &'static str {
        match self {
            Category::Dates => "dates",
            Category::Time => "time",
            Category::Currency => "currency",
            Category::Units => "units",
            Category::Ordinals => "ordinals",
            Category::Abbreviations => "abbreviations",
            Category::Numbers => "numbers",
        }
    }

    /// Alternative identifiers accepted from callers.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Category::Dates => &["date"],
            Category::Time => &[],
            Category::Currency => &[],
            Category::Units => &["unit"],
            Category::Ordinals => &["ordinal"],
            Category::Abbreviations => &["abbreviation", "named_entity"],
            Category::Numbers => &["number", "cardinal"],
        }
    }

    /// Resolve a caller-supplied identifier (case-insensitive, aliases allowed).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| {
            c.id().eq_ignore_ascii_case(name)
                || c.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
        })
    }

    /// Whether the lexicon has the tables this category needs.
    pub fn is_available(self, lexicon: &Lexicon) -> bool {
        match self {
            Category::Units => !lexicon.units.is_empty(),
            Category::Abbreviations => !lexicon.abbreviations.is_empty(),
            _ => true,
        }
    }

    /// Build this category's automata, in tie-break order.
    pub fn automata(self, lexicon: &Lexicon) -> NormResult<Vec<Automaton>> {
        match self {
            Category::Dates => dates::automata(),
            Category::Time => time::automata(),
            Category::Currency => currency::automata(lexicon),
            Category::Units => units::automata(lexicon),
            Category::Ordinals => ordinals::automata(lexicon),
            Category::Abbreviations => abbreviations::automata(lexicon),
            Category::Numbers => numbers::automata(),
        }
    }

    /// Rewrite a span recognized by one of this category's automata.
    pub fn rewrite(self, raw: &str, tag: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
        match self {
            Category::Dates => dates::rewrite(raw, lexicon),
            Category::Time => time::rewrite(raw, lexicon),
            Category::Currency => currency::rewrite(raw, lexicon),
            Category::Units => units::rewrite(raw, lexicon),
            Category::Ordinals => ordinals::rewrite(raw, lexicon),
            Category::Abbreviations => abbreviations::rewrite(raw, lexicon),
            Category::Numbers => numbers::rewrite(raw, tag, lexicon),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How a rewritten span is marked up for the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// `<say-as interpret-as=".." format="..">spoken</say-as>`
    SayAs {
        interpret_as: &'static str,
        format: Option<&'static str>,
    },
    /// `<sub alias="spoken">original</sub>`
    Sub,
}

impl Markup {
    fn say_as(interpret_as: &'static str) -> Self {
        Markup::SayAs {
            interpret_as,
            format: None,
        }
    }

    fn say_as_with(interpret_as: &'static str, format: &'static str) -> Self {
        Markup::SayAs {
            interpret_as,
            format: Some(format),
        }
    }
}

/// Spoken form and markup of one span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendition {
    pub spoken: String,
    pub markup: Markup,
}

/// Trace names of the states making up an amount.
struct AmountNames {
    integer: &'static str,
    group_separator: &'static str,
    group: &'static str,
    decimal_point: &'static str,
    fraction: &'static str,
}

/// Accepting tags for an amount; `None` builds it non-accepting.
struct AmountTags {
    integer: &'static str,
    fraction: &'static str,
}

/// Add digit states with optional `,` grouping and `.` fraction.
///
/// Every state in `entries` gets a digit transition into the amount. Returns
/// the states in which a complete amount has been read.
fn amount(
    b: &mut AutomatonBuilder,
    entries: &[StateId],
    names: &AmountNames,
    tags: Option<&AmountTags>,
) -> NormResult<Vec<StateId>> {
    let complete = |b: &mut AutomatonBuilder, name: &'static str, fraction: bool| match tags {
        Some(t) => b.accepting(name, if fraction { t.fraction } else { t.integer }),
        None => b.state(name),
    };

    let digit = CharClass::digit();
    let integer = complete(b, names.integer, false);
    b.transitions(entries, &digit, integer)?;
    b.transition(integer, digit.clone(), integer)?;

    // groups after a separator hold two or three digits
    let separator = b.state(names.group_separator);
    let g1 = b.state(names.group);
    let g2 = complete(b, names.group, false);
    let g3 = complete(b, names.group, false);
    b.transition(integer, CharClass::exact(','), separator)?;
    b.transition(separator, digit.clone(), g1)?;
    b.transition(g1, digit.clone(), g2)?;
    b.transition(g2, digit.clone(), g3)?;
    b.transitions(&[g2, g3], &CharClass::exact(','), separator)?;

    let point = b.state(names.decimal_point);
    let fraction = complete(b, names.fraction, true);
    b.transitions(&[integer, g2, g3], &CharClass::exact('.'), point)?;
    b.transition(point, digit.clone(), fraction)?;
    b.transition(fraction, digit, fraction)?;

    Ok(vec![integer, g2, g3, fraction])
}

/// Split a span into its leading number (digits, `,`, `.`) and the rest.
fn split_number(raw: &str) -> (&str, &str) {
    let end = raw
        .char_indices()
        .find(|&(_, c)| !(crate::automaton::is_digit(c) || c == ',' || c == '.'))
        .map_or(raw.len(), |(i, _)| i);
    raw.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(Category::from_name("numbers"), Some(Category::Numbers));
        assert_eq!(Category::from_name("cardinal"), Some(Category::Numbers));
        assert_eq!(Category::from_name(" Named_Entity "), Some(Category::Abbreviations));
        assert_eq!(Category::from_name("DATE"), Some(Category::Dates));
        assert_eq!(Category::from_name("weather"), None);
        assert_eq!(Category::Units.to_string(), "units");
    }

    #[test]
    fn test_every_category_builds() {
        let lex = Lexicon::hindi().unwrap();
        for category in Category::ALL {
            assert!(category.is_available(&lex));
            let automata = category.automata(&lex).unwrap();
            assert!(!automata.is_empty(), "{category} has no automata");
        }
    }

    #[test]
    fn test_split_number() {
        assert_eq!(split_number("5kg"), ("5", "kg"));
        assert_eq!(split_number("2.5 किमी"), ("2.5", " किमी"));
        assert_eq!(split_number("1,000"), ("1,000", ""));
    }
}
