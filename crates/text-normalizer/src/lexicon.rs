//! Per-language spoken-form tables.
//!
//! A lexicon is plain data: number words, month names, unit names,
//! abbreviation expansions and so on. Automata for units, currency symbols,
//! ordinal suffixes, and abbreviations are generated from these tables, and
//! rewrite functions read their spoken forms from them.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tn_core::{NormError, NormResult};

/// Built-in Hindi lexicon.
pub const HINDI_LEXICON: &str = include_str!("../resources/hi-IN.json");

/// Spoken-form tables for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Number words.
    pub numbers: NumberWords,
    /// Ordinal forms.
    pub ordinals: OrdinalWords,
    /// Currency symbols and unit names.
    pub currency: CurrencyWords,
    /// Date words.
    pub dates: DateWords,
    /// Time-of-day words.
    pub time: TimeWords,
    /// Measurement unit symbol to spoken name.
    #[serde(default)]
    pub units: BTreeMap<String, String>,
    /// Unit symbols that double as ordinary words (`in`, `A`, `ली`). These
    /// are only recognized written directly after the number.
    #[serde(default)]
    pub glued_units: BTreeSet<String>,
    /// Abbreviation to expansion.
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
}

/// Number words for the Indian numbering system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberWords {
    /// Words for 0 through 99.
    pub words: Vec<String>,
    /// Scale words.
    pub scales: Scales,
    /// Word read between integer and fraction digits.
    pub decimal_point: String,
    /// Read four-digit years 1100-1999 as pairs ("nineteen hundred ninety").
    #[serde(default = "default_true")]
    pub years_in_hundreds: bool,
}

fn default_true() -> bool {
    true
}

/// Scale words (100, 1 000, 1 00 000, 1 00 00 000).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scales {
    pub hundred: String,
    pub thousand: String,
    pub lakh: String,
    pub crore: String,
}

/// Grammatical form of an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdinalForm {
    #[default]
    Masculine,
    Feminine,
    Oblique,
}

/// One word per ordinal form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalForms {
    pub masculine: String,
    pub feminine: String,
    pub oblique: String,
}

impl OrdinalForms {
    /// The word for `form`.
    pub fn get(&self, form: OrdinalForm) -> &str {
        match form {
            OrdinalForm::Masculine => &self.masculine,
            OrdinalForm::Feminine => &self.feminine,
            OrdinalForm::Oblique => &self.oblique,
        }
    }
}

/// Ordinal tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalWords {
    /// Ordinals that are not cardinal + suffix.
    #[serde(default)]
    pub irregular: BTreeMap<u64, OrdinalForms>,
    /// Suffix appended to the cardinal for all other numbers.
    pub generic_suffix: OrdinalForms,
    /// Written suffixes recognized after a digit run, with the form each implies.
    pub suffixes: BTreeMap<String, OrdinalForm>,
}

impl OrdinalWords {
    /// Form implied by a written suffix; ASCII suffixes match case-insensitively.
    pub fn form_of(&self, suffix: &str) -> OrdinalForm {
        self.suffixes
            .get(suffix)
            .or_else(|| self.suffixes.get(&suffix.to_ascii_lowercase()))
            .copied()
            .unwrap_or_default()
    }
}

/// Singular and plural of a noun.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inflection {
    pub singular: String,
    pub plural: String,
}

impl Inflection {
    /// Pick the form agreeing with `count`.
    pub fn for_count(&self, count: u64) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Currency tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyWords {
    /// Written currency markers preceding an amount.
    pub symbols: Vec<String>,
    /// Main unit (rupee).
    pub main_unit: Inflection,
    /// Hundredth unit (paisa).
    pub sub_unit: Inflection,
}

/// Date tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateWords {
    /// Month names, January first.
    pub months: Vec<String>,
}

/// Time-of-day tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeWords {
    /// Said after the hour on the full hour ("o'clock").
    pub hour_marker: String,
    /// Joins hour and minutes.
    pub hour_minute_connector: String,
    pub minute_word: String,
    pub second_word: String,
    pub periods: DayPeriods,
}

/// Words for parts of the day, used with AM/PM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPeriods {
    pub am: String,
    pub pm_afternoon: String,
    pub pm_evening: String,
    pub pm_night: String,
}

impl Lexicon {
    /// The built-in Hindi lexicon.
    pub fn hindi() -> NormResult<Self> {
        Self::from_json(HINDI_LEXICON)
    }

    /// Parse and validate a lexicon from JSON.
    pub fn from_json(json: &str) -> NormResult<Self> {
        let lexicon: Lexicon =
            serde_json::from_str(json).map_err(|e| NormError::serialization(e.to_string()))?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load a lexicon file.
    pub fn load(path: impl AsRef<Path>) -> NormResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| NormError::config(format!("{}: {e}", path.display())))
    }

    /// Check that every table the rewrite functions index into is complete.
    pub fn validate(&self) -> NormResult<()> {
        if self.numbers.words.len() != 100 {
            return Err(NormError::config(format!(
                "numbers.words must list 100 words (0-99), found {}",
                self.numbers.words.len()
            )));
        }
        if self.dates.months.len() != 12 {
            return Err(NormError::config(format!(
                "dates.months must list 12 months, found {}",
                self.dates.months.len()
            )));
        }
        if self.currency.symbols.is_empty() {
            return Err(NormError::config("currency.symbols must not be empty"));
        }
        if self.ordinals.suffixes.is_empty() {
            return Err(NormError::config("ordinals.suffixes must not be empty"));
        }
        let tables = [
            ("currency.symbols", self.currency.symbols.iter().collect::<Vec<_>>()),
            ("ordinals.suffixes", self.ordinals.suffixes.keys().collect()),
            ("units", self.units.keys().collect()),
            ("abbreviations", self.abbreviations.keys().collect()),
        ];
        for (table, keys) in tables {
            if let Some(bad) = keys.iter().find(|k| k.is_empty() || k.chars().any(char::is_whitespace)) {
                return Err(NormError::config(format!(
                    "{table}: entry {bad:?} must be non-empty and contain no whitespace"
                )));
            }
        }
        if let Some(bad) = self
            .units
            .keys()
            .find(|k| k.starts_with(|c: char| crate::automaton::is_digit(c) || c == '.' || c == ','))
        {
            return Err(NormError::config(format!(
                "units: symbol {bad:?} must not start with a digit or separator"
            )));
        }
        if let Some(bad) = self.glued_units.iter().find(|k| !self.units.contains_key(*k)) {
            return Err(NormError::config(format!(
                "glued_units: {bad:?} is not a unit symbol"
            )));
        }
        if let Some(bad) = self
            .ordinals
            .suffixes
            .keys()
            .find(|k| k.starts_with(crate::automaton::is_digit))
        {
            return Err(NormError::config(format!(
                "ordinals.suffixes: suffix {bad:?} must not start with a digit"
            )));
        }
        if let Some(bad) = self
            .currency
            .symbols
            .iter()
            .find(|s| s.ends_with(crate::automaton::is_digit))
        {
            return Err(NormError::config(format!(
                "currency.symbols: symbol {bad:?} must not end with a digit"
            )));
        }
        Ok(())
    }
}
