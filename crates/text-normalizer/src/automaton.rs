//! Deterministic finite automata over character classes.
//!
//! Automata are stored as arenas: every state lives in one `Vec` and
//! transitions refer to states by index, so digit loops and other cycles are
//! plain index edges.

use std::fmt;

use tn_core::{NormError, NormResult};

/// Index of a state inside its automaton.
pub type StateId = usize;

/// The start state of every automaton.
pub const START: StateId = 0;

const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Numeric value of an ASCII or Devanagari digit.
pub fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    DEVANAGARI_DIGITS
        .iter()
        .position(|&d| d == c)
        .map(|i| i as u32)
}

/// Whether `c` is an ASCII or Devanagari digit.
pub fn is_digit(c: char) -> bool {
    digit_value(c).is_some()
}

/// A set of characters, stored as inclusive ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    ranges: Vec<(char, char)>,
}

impl CharClass {
    /// A single character.
    pub fn exact(c: char) -> Self {
        Self {
            ranges: vec![(c, c)],
        }
    }

    /// An inclusive character range.
    pub fn range(lo: char, hi: char) -> Self {
        Self {
            ranges: vec![(lo.min(hi), lo.max(hi))],
        }
    }

    /// Any of the listed characters.
    pub fn any_of(chars: &[char]) -> Self {
        Self {
            ranges: chars.iter().map(|&c| (c, c)).collect(),
        }
    }

    /// A letter in either case for ASCII letters, the exact character otherwise.
    pub fn caseless(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::any_of(&[c.to_ascii_lowercase(), c.to_ascii_uppercase()])
        } else {
            Self::exact(c)
        }
    }

    /// Any ASCII or Devanagari digit.
    pub fn digit() -> Self {
        Self::digit_range(0, 9)
    }

    /// Digits with values in `lo..=hi`, in both scripts.
    pub fn digit_range(lo: u8, hi: u8) -> Self {
        let lo = usize::from(lo.min(9));
        let hi = usize::from(hi.min(9)).max(lo);
        Self {
            ranges: vec![
                (ASCII_DIGITS[lo], ASCII_DIGITS[hi]),
                (DEVANAGARI_DIGITS[lo], DEVANAGARI_DIGITS[hi]),
            ],
        }
    }

    /// A space or no-break space.
    pub fn space() -> Self {
        Self::any_of(&[' ', '\u{00A0}'])
    }

    /// Whether the class contains `c`.
    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }

    /// Whether the two classes share at least one character.
    pub fn overlaps(&self, other: &CharClass) -> bool {
        self.ranges.iter().any(|&(alo, ahi)| {
            other
                .ranges
                .iter()
                .any(|&(blo, bhi)| alo <= bhi && blo <= ahi)
        })
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for &(lo, hi) in &self.ranges {
            if lo == hi {
                write!(f, "{lo}")?;
            } else {
                write!(f, "{lo}-{hi}")?;
            }
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone)]
struct State {
    name: &'static str,
    accept: Option<&'static str>,
    transitions: Vec<(CharClass, StateId)>,
}

impl State {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            accept: None,
            transitions: Vec::new(),
        }
    }
}

/// One state visited during recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// State index.
    pub id: StateId,
    /// State name.
    pub name: &'static str,
}

/// A successful recognition starting at some position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// Byte offset one past the last consumed character.
    pub end: usize,
    /// Tag of the accepting state reached at `end`.
    pub tag: &'static str,
    /// States visited, start state first; one entry per consumed character plus one.
    pub path: Vec<Visit>,
}

/// Incremental constructor for an [`Automaton`].
#[derive(Debug)]
pub struct AutomatonBuilder {
    name: &'static str,
    states: Vec<State>,
}

impl AutomatonBuilder {
    /// Create a builder whose start state is named `start_name`.
    pub fn new(name: &'static str, start_name: &'static str) -> Self {
        Self {
            name,
            states: vec![State::new(start_name)],
        }
    }

    /// Add a non-accepting state.
    pub fn state(&mut self, name: &'static str) -> StateId {
        self.states.push(State::new(name));
        self.states.len() - 1
    }

    /// Add an accepting state.
    pub fn accepting(&mut self, name: &'static str, tag: &'static str) -> StateId {
        let id = self.state(name);
        self.states[id].accept = Some(tag);
        id
    }

    /// Mark an existing state as accepting.
    pub fn accept(&mut self, id: StateId, tag: &'static str) -> NormResult<()> {
        let name = self.name;
        let state = self
            .states
            .get_mut(id)
            .ok_or_else(|| NormError::inconsistency(format!("{name}: no state {id}")))?;
        if let Some(existing) = state.accept {
            if existing != tag {
                return Err(NormError::inconsistency(format!(
                    "{name}: state {id} already accepts as {existing}"
                )));
            }
        }
        state.accept = Some(tag);
        Ok(())
    }

    /// Add a transition.
    ///
    /// Re-adding an identical transition is a no-op. A class overlapping any
    /// other outgoing class of `from` is rejected.
    pub fn transition(&mut self, from: StateId, class: CharClass, to: StateId) -> NormResult<()> {
        if to >= self.states.len() {
            return Err(NormError::inconsistency(format!(
                "{}: transition to missing state {to}",
                self.name
            )));
        }
        let name = self.name;
        let state = self
            .states
            .get_mut(from)
            .ok_or_else(|| NormError::inconsistency(format!("{name}: no state {from}")))?;

        for (existing, target) in &state.transitions {
            if *existing == class && *target == to {
                return Ok(());
            }
            if existing.overlaps(&class) {
                return Err(NormError::inconsistency(format!(
                    "{name}: state {from} ({}) has overlapping transitions {existing} and {class}",
                    state.name
                )));
            }
        }
        state.transitions.push((class, to));
        Ok(())
    }

    /// Add the same class transition from several states.
    pub fn transitions(&mut self, from: &[StateId], class: &CharClass, to: StateId) -> NormResult<()> {
        for &f in from {
            self.transition(f, class.clone(), to)?;
        }
        Ok(())
    }

    /// Insert a chain of classes as a trie path and return its last state.
    ///
    /// Existing transitions with an identical class are followed, so words
    /// sharing a prefix share states. New states are named `name`.
    pub fn path(&mut self, from: StateId, classes: Vec<CharClass>, name: &'static str) -> NormResult<StateId> {
        if classes.is_empty() {
            return Err(NormError::inconsistency(format!(
                "{}: empty literal path",
                self.name
            )));
        }
        let mut current = from;
        for class in classes {
            let existing = self
                .states
                .get(current)
                .and_then(|s| s.transitions.iter().find(|(c, _)| *c == class))
                .map(|&(_, target)| target);
            current = match existing {
                Some(next) => next,
                None => {
                    let next = self.state(name);
                    self.transition(current, class, next)?;
                    next
                }
            };
        }
        Ok(current)
    }

    /// Insert a literal word as a trie path and return its last state.
    pub fn word(&mut self, from: StateId, word: &str, name: &'static str) -> NormResult<StateId> {
        self.path(from, word.chars().map(CharClass::exact).collect(), name)
    }

    /// Finish construction.
    pub fn build(self) -> NormResult<Automaton> {
        if !self.states.iter().any(|s| s.accept.is_some()) {
            return Err(NormError::inconsistency(format!(
                "{}: automaton has no accepting state",
                self.name
            )));
        }
        if self.states[START].accept.is_some() {
            return Err(NormError::inconsistency(format!(
                "{}: start state must not accept",
                self.name
            )));
        }
        Ok(Automaton {
            name: self.name,
            states: self.states,
        })
    }
}

/// An immutable deterministic finite automaton.
#[derive(Debug, Clone)]
pub struct Automaton {
    name: &'static str,
    states: Vec<State>,
}

impl Automaton {
    /// Automaton name (the pattern family it recognizes).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Name of a state.
    pub fn state_name(&self, id: StateId) -> Option<&'static str> {
        self.states.get(id).map(|s| s.name)
    }

    fn step(&self, state: StateId, c: char) -> Option<StateId> {
        self.states
            .get(state)?
            .transitions
            .iter()
            .find(|(class, _)| class.contains(c))
            .map(|&(_, target)| target)
    }

    fn visit(&self, id: StateId) -> Visit {
        Visit {
            id,
            name: self.states[id].name,
        }
    }

    /// Recognize the longest pattern starting exactly at byte offset `pos`.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<Recognition> {
        self.match_at_where(text, pos, |_| true)
    }

    /// Like [`match_at`](Self::match_at), but only accepting positions for
    /// which `accept_end(end)` holds are remembered.
    ///
    /// The automaton keeps consuming while transitions exist and backtracks to
    /// the last remembered accepting position.
    pub fn match_at_where<F>(&self, text: &str, pos: usize, accept_end: F) -> Option<Recognition>
    where
        F: Fn(usize) -> bool,
    {
        let rest = text.get(pos..)?;
        let mut state = START;
        let mut path = vec![self.visit(START)];
        let mut best: Option<(usize, &'static str, usize)> = None;

        for (offset, c) in rest.char_indices() {
            let Some(next) = self.step(state, c) else {
                break;
            };
            state = next;
            path.push(self.visit(next));

            if let Some(tag) = self.states[next].accept {
                let end = pos + offset + c.len_utf8();
                if accept_end(end) {
                    best = Some((end, tag, path.len()));
                }
            }
        }

        best.map(|(end, tag, len)| {
            path.truncate(len);
            Recognition { end, tag, path }
        })
    }
}
