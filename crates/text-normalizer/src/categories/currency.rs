//! Currency amounts: a symbol followed by an amount (`₹500`, `Rs. 1,250.50`).

use tn_core::{NormError, NormResult};

use super::{AmountNames, AmountTags, Markup, Rendition, amount, split_number};
use crate::automaton::{Automaton, AutomatonBuilder, CharClass, START, is_digit};
use crate::lexicon::Lexicon;
use crate::num2words::{NumberSpeller, parse_digits};

pub(super) fn automata(lexicon: &Lexicon) -> NormResult<Vec<Automaton>> {
    let mut b = AutomatonBuilder::new("currency", "START");
    let mut symbols = Vec::with_capacity(lexicon.currency.symbols.len());
    for symbol in &lexicon.currency.symbols {
        symbols.push(b.word(START, symbol, "CURRENCY_SYMBOL")?);
    }
    symbols.dedup();

    let space = b.state("SPACE");
    b.transitions(&symbols, &CharClass::space(), space)?;

    let mut entries = symbols;
    entries.push(space);
    let names = AmountNames {
        integer: "INTEGER_PART",
        group_separator: "GROUP_SEPARATOR",
        group: "INTEGER_PART",
        decimal_point: "DECIMAL_POINT",
        fraction: "DECIMAL_PART",
    };
    let tags = AmountTags {
        integer: "amount",
        fraction: "amount_decimal",
    };
    amount(&mut b, &entries, &names, Some(&tags))?;
    Ok(vec![b.build()?])
}

/// Paise from the written fraction: the first two digits, right-padded.
/// A paisa is the smallest unit, so later digits are not read.
fn paise(fraction: &str) -> u64 {
    let mut digits: String = fraction.chars().take(2).collect();
    while digits.chars().count() < 2 {
        digits.push('0');
    }
    parse_digits(&digits).unwrap_or(0)
}

pub(super) fn rewrite(raw: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
    let start = raw
        .find(is_digit)
        .ok_or_else(|| NormError::inconsistency(format!("currency {raw:?} has no amount")))?;
    let (number, _) = split_number(&raw[start..]);
    let (integer, fraction) = number.split_once('.').unwrap_or((number, ""));

    let speller = NumberSpeller::new(&lexicon.numbers);
    let words = &lexicon.currency;
    let rupees = parse_digits(integer);
    let mut spoken = format!(
        "{} {}",
        speller.digits(integer),
        words.main_unit.for_count(rupees.unwrap_or(u64::MAX))
    );

    let paise = paise(fraction);
    if paise > 0 {
        spoken.push(' ');
        spoken.push_str(&speller.cardinal(paise));
        spoken.push(' ');
        spoken.push_str(words.sub_unit.for_count(paise));
    }
    Ok(Rendition {
        spoken,
        markup: Markup::say_as("currency"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::hindi().unwrap()
    }

    #[test]
    fn test_currency_automaton() {
        let lex = lexicon();
        let dfa = automata(&lex).unwrap().remove(0);
        assert_eq!(dfa.match_at("₹500", 0).unwrap().end, "₹500".len());
        assert_eq!(dfa.match_at("Rs. 1,250.50 only", 0).unwrap().end, 12);
        assert_eq!(dfa.match_at("INR 20", 0).unwrap().tag, "amount");
        assert_eq!(dfa.match_at("₹2.5", 0).unwrap().tag, "amount_decimal");
        assert!(dfa.match_at("₹ ", 0).is_none());
        assert!(dfa.match_at("500", 0).is_none());

        let rec = dfa.match_at("₹50", 0).unwrap();
        let names: Vec<_> = rec.path.iter().map(|v| v.name).collect();
        assert_eq!(names, ["START", "CURRENCY_SYMBOL", "INTEGER_PART", "INTEGER_PART"]);
    }

    #[test]
    fn test_paise() {
        assert_eq!(paise("50"), 50);
        assert_eq!(paise("5"), 50);
        assert_eq!(paise("05"), 5);
        assert_eq!(paise("999"), 99);
        assert_eq!(paise(""), 0);
    }

    #[test]
    fn test_rewrite_rupees() {
        let lex = lexicon();
        let r = rewrite("₹500", &lex).unwrap();
        assert_eq!(r.spoken, "पाँच सौ रुपये");
        assert_eq!(r.markup, Markup::say_as("currency"));
        assert_eq!(rewrite("Rs. 1", &lex).unwrap().spoken, "एक रुपया");
        assert_eq!(rewrite("₹1,00,000", &lex).unwrap().spoken, "एक लाख रुपये");
    }

    #[test]
    fn test_rewrite_paise() {
        let lex = lexicon();
        assert_eq!(rewrite("₹500.50", &lex).unwrap().spoken, "पाँच सौ रुपये पचास पैसे");
        assert_eq!(rewrite("₹2.01", &lex).unwrap().spoken, "दो रुपये एक पैसा");
        assert_eq!(rewrite("₹2.00", &lex).unwrap().spoken, "दो रुपये");
        assert_eq!(rewrite("₹5.999", &lex).unwrap().spoken, "पाँच रुपये निन्यानवे पैसे");
        assert_eq!(rewrite("₹5.001", &lex).unwrap().spoken, "पाँच रुपये");
    }
}
