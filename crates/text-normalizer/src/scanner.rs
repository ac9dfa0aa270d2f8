//! Leftmost-longest scanning over the enabled categories.

use std::cmp::Reverse;

use tn_core::{NormError, NormResult};
use tracing::{debug, trace};

use crate::ruleset::{CategoryRuleset, Match};

/// Non-overlapping matches sorted by start offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    matches: Vec<Match>,
}

/// A piece of the input: either untouched text or a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Matched(&'a Match),
}

impl MatchSet {
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Split `text` into literal gaps and matches, in order.
    ///
    /// Fails if the matches do not describe disjoint, in-bounds spans of
    /// `text` whose raw substrings agree with it.
    pub fn segments<'a>(&'a self, text: &'a str) -> NormResult<Vec<Segment<'a>>> {
        let mut segments = Vec::with_capacity(self.matches.len() * 2 + 1);
        let mut cursor = 0;
        for m in &self.matches {
            if m.start < cursor || m.end <= m.start {
                return Err(NormError::inconsistency(format!(
                    "match {}..{} overlaps or is empty (cursor {cursor})",
                    m.start, m.end
                )));
            }
            if text.get(m.start..m.end) != Some(m.raw.as_str()) {
                return Err(NormError::inconsistency(format!(
                    "match {}..{} does not agree with the input text",
                    m.start, m.end
                )));
            }
            if m.start > cursor {
                segments.push(Segment::Literal(&text[cursor..m.start]));
            }
            segments.push(Segment::Matched(m));
            cursor = m.end;
        }
        if cursor < text.len() {
            segments.push(Segment::Literal(&text[cursor..]));
        }
        Ok(segments)
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl From<Vec<Match>> for MatchSet {
    fn from(matches: Vec<Match>) -> Self {
        Self { matches }
    }
}

/// Scans text with rulesets in caller priority order.
#[derive(Debug, Clone)]
pub struct Scanner<'r> {
    rulesets: Vec<&'r CategoryRuleset>,
}

impl<'r> Scanner<'r> {
    /// `rulesets` are in caller order; earlier wins ties on span length.
    pub fn new(rulesets: Vec<&'r CategoryRuleset>) -> Self {
        Self { rulesets }
    }

    /// Pick among candidates starting at one position.
    ///
    /// Longest span first, then caller order, then registration order. The
    /// sort is stable, so sub-patterns of one category keep automaton order.
    fn select(&self, pos: usize, text: &str) -> Option<Match> {
        let mut candidates: Vec<(usize, Match)> = self
            .rulesets
            .iter()
            .enumerate()
            .flat_map(|(rank, ruleset)| {
                ruleset
                    .find_candidates(text, pos)
                    .into_iter()
                    .map(move |m| (rank, m))
            })
            .collect();
        candidates.sort_by_key(|(rank, m)| (Reverse(m.span_len()), *rank, m.category));
        for (_, rejected) in candidates.iter().skip(1) {
            trace!(category = %rejected.category, raw = %rejected.raw, "candidate lost tie-break");
        }
        candidates.into_iter().next().map(|(_, m)| m)
    }

    /// Produce the match set for `text`.
    pub fn scan(&self, text: &str) -> MatchSet {
        let mut matches = Vec::new();
        let mut pos = 0;
        while let Some(c) = text[pos..].chars().next() {
            match self.select(pos, text) {
                Some(m) => {
                    debug!(category = %m.category, tag = m.tag, raw = %m.raw, start = m.start, "matched");
                    pos = m.end;
                    matches.push(m);
                }
                None => pos += c.len_utf8(),
            }
        }
        MatchSet { matches }
    }
}
