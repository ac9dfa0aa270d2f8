//! # text-normalizer
//!
//! Rules-based Hindi text normalization for speech synthesis.
//!
//! Each normalization category (numbers, ordinals, currency, units, dates,
//! time, abbreviations) is a set of deterministic finite automata plus a
//! rewrite function. The scanner walks the input leftmost-longest over the
//! categories a caller enables, and every recognized span is rewritten into
//! its spoken form, wrapped in SSML, and reported with the automaton states
//! that recognized it.
//!
//! # Example
//!
//! ```ignore
//! use text_normalizer::Normalizer;
//! use tn_core::TextNormalizer;
//!
//! let normalizer = Normalizer::new()?;
//! let result = normalizer.normalize("वर्ष 1990 में", &["numbers"], "hi-IN")?;
//! assert_eq!(result.normalized_text, "वर्ष उन्नीस सौ नब्बे में");
//! ```

pub mod automaton;
pub mod categories;
pub mod lexicon;
pub mod num2words;
pub mod registry;
pub mod rewriter;
pub mod ruleset;
pub mod scanner;
pub mod trace;

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tn_core::{EngineConfig, NormError, NormResult, NormalizationResult, TextNormalizer};
use tracing::{debug, instrument};

pub use categories::{Category, Markup, Rendition};
pub use lexicon::Lexicon;
pub use registry::{LanguagePack, Registry};
pub use ruleset::{CategoryRuleset, Match};
pub use scanner::{MatchSet, Scanner};

static SHARED: OnceCell<Normalizer> = OnceCell::new();

/// The normalization session: validates requests and runs scanner, rewriter
/// and trace recorder over an immutable registry.
#[derive(Debug, Clone)]
pub struct Normalizer {
    registry: Arc<Registry>,
}

impl Normalizer {
    /// Create a normalizer with the built-in language packs.
    pub fn new() -> NormResult<Self> {
        Ok(Self::with_registry(Registry::builtin()?))
    }

    /// Create a normalizer from engine configuration.
    pub fn from_config(config: &EngineConfig) -> NormResult<Self> {
        Ok(Self::with_registry(Registry::from_config(config)?))
    }

    /// Create a normalizer over a prepared registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Process-wide normalizer with the built-in packs, built on first use.
    pub fn shared() -> NormResult<&'static Normalizer> {
        SHARED.get_or_try_init(Self::new)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Canonical category ids available for `language`.
    pub fn categories(&self, language: &str) -> NormResult<Vec<&'static str>> {
        Ok(self.registry.language(language)?.categories())
    }

    /// Validate a request and scan it, without rewriting.
    pub fn scan(&self, text: &str, categories: &[&str], language: &str) -> NormResult<MatchSet> {
        let (_, rulesets) = self.prepare(text, categories, language)?;
        Ok(Scanner::new(rulesets).scan(text))
    }

    fn prepare<'a>(
        &'a self,
        text: &str,
        categories: &[&str],
        language: &str,
    ) -> NormResult<(&'a LanguagePack, Vec<&'a CategoryRuleset>)> {
        if text.trim().is_empty() {
            return Err(NormError::EmptyInput);
        }
        if categories.is_empty() {
            return Err(NormError::NoCategoriesSelected);
        }
        let pack = self.registry.language(language)?;
        let rulesets = pack.resolve(categories)?;
        Ok((pack, rulesets))
    }
}

impl TextNormalizer for Normalizer {
    #[instrument(skip(self, text, categories), fields(text_len = text.len(), categories = categories.len()))]
    fn normalize(
        &self,
        text: &str,
        categories: &[&str],
        language: &str,
    ) -> NormResult<NormalizationResult> {
        let (pack, rulesets) = self.prepare(text, categories, language)?;
        let matches = Scanner::new(rulesets).scan(text);
        let (normalized_text, ssml) = rewriter::apply(text, &matches, pack.code())?;
        let dfa_info = trace::record(&matches);
        debug!(matches = matches.len(), "normalized");

        Ok(NormalizationResult {
            normalized_text,
            ssml,
            dfa_info,
        })
    }
}
