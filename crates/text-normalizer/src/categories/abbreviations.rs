//! Abbreviations and named entities expanded from the lexicon (`डॉ.`, `Mr.`, `भा.ज.पा.`).

use tn_core::{NormError, NormResult};

use super::{Markup, Rendition};
use crate::automaton::{Automaton, AutomatonBuilder, START};
use crate::lexicon::Lexicon;

pub(super) fn automata(lexicon: &Lexicon) -> NormResult<Vec<Automaton>> {
    let mut b = AutomatonBuilder::new("abbreviation", "START");
    for key in lexicon.abbreviations.keys() {
        let end = b.word(START, key, "ENTITY")?;
        b.accept(end, "abbreviation")?;
    }
    Ok(vec![b.build()?])
}

pub(super) fn rewrite(raw: &str, lexicon: &Lexicon) -> NormResult<Rendition> {
    let expansion = lexicon
        .abbreviations
        .get(raw)
        .ok_or_else(|| NormError::inconsistency(format!("abbreviation {raw:?} is not in the lexicon")))?;
    Ok(Rendition {
        spoken: expansion.clone(),
        markup: Markup::Sub,
    })
}
