//! Language packs: a lexicon plus the rulesets built from it.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tn_core::{EngineConfig, NormError, NormResult};
use tracing::{debug, info};

use crate::categories::Category;
use crate::lexicon::Lexicon;
use crate::ruleset::CategoryRuleset;

/// Canonical form used to compare language codes (`hi_IN` == `hi-in`).
fn language_key(code: &str) -> String {
    code.trim().replace('_', "-").to_ascii_lowercase()
}

/// Rulesets for one language, in registration order.
#[derive(Debug)]
pub struct LanguagePack {
    code: String,
    lexicon: Arc<Lexicon>,
    rulesets: Vec<CategoryRuleset>,
}

impl LanguagePack {
    /// Build every category the lexicon supports.
    pub fn new(code: impl Into<String>, lexicon: Lexicon) -> NormResult<Self> {
        let code = code.into();
        let lexicon = Arc::new(lexicon);
        let mut rulesets = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            if !category.is_available(&lexicon) {
                debug!(language = %code, %category, "category unavailable, skipping");
                continue;
            }
            let ruleset = CategoryRuleset::new(category, Arc::clone(&lexicon))?;
            debug!(
                language = %code,
                %category,
                automata = ruleset.automata().len(),
                states = ruleset.state_count(),
                "built ruleset"
            );
            rulesets.push(ruleset);
        }
        info!(language = %code, categories = rulesets.len(), "built language pack");
        Ok(Self {
            code,
            lexicon,
            rulesets,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn rulesets(&self) -> &[CategoryRuleset] {
        &self.rulesets
    }

    /// Canonical ids of the registered categories.
    pub fn categories(&self) -> Vec<&'static str> {
        self.rulesets.iter().map(|r| r.category().id()).collect()
    }

    /// Resolve caller category names to rulesets, keeping caller order.
    ///
    /// Repeated names (including aliases of one category) keep their first
    /// position.
    pub fn resolve(&self, names: &[&str]) -> NormResult<Vec<&CategoryRuleset>> {
        let mut resolved: Vec<&CategoryRuleset> = Vec::with_capacity(names.len());
        for &name in names {
            let ruleset = Category::from_name(name)
                .and_then(|category| self.rulesets.iter().find(|r| r.category() == category))
                .ok_or_else(|| NormError::unknown_category(name))?;
            if !resolved.iter().any(|r| r.category() == ruleset.category()) {
                resolved.push(ruleset);
            }
        }
        Ok(resolved)
    }
}

/// All language packs known to the engine.
#[derive(Debug)]
pub struct Registry {
    packs: BTreeMap<String, LanguagePack>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            packs: BTreeMap::new(),
        }
    }

    /// The built-in Hindi pack.
    pub fn builtin() -> NormResult<Self> {
        let mut registry = Self::new();
        registry.register(LanguagePack::new(tn_core::types::DEFAULT_LANGUAGE, Lexicon::hindi()?)?);
        Ok(registry)
    }

    /// Built-in packs plus every `<code>.json` lexicon in `config.lexicon_dir`.
    pub fn from_config(config: &EngineConfig) -> NormResult<Self> {
        let mut registry = Self::builtin()?;
        if let Some(dir) = &config.lexicon_dir {
            registry.load_dir(dir)?;
        }
        if registry.language(&config.default_language).is_err() {
            return Err(NormError::config(format!(
                "default language {} has no lexicon",
                config.default_language
            )));
        }
        Ok(registry)
    }

    /// Register every `<code>.json` lexicon in `dir`.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> NormResult<()> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let pack = LanguagePack::new(code, Lexicon::load(&path)?)?;
            info!(language = code, path = %path.display(), "loaded lexicon");
            self.register(pack);
        }
        Ok(())
    }

    /// Add a pack, replacing any pack with the same language code.
    pub fn register(&mut self, pack: LanguagePack) {
        self.packs.insert(language_key(&pack.code), pack);
    }

    /// Look up a pack by language code.
    ///
    /// Codes compare case-insensitively with `_` and `-` interchangeable; a
    /// bare primary subtag (`hi`) selects the first pack of that language.
    pub fn language(&self, code: &str) -> NormResult<&LanguagePack> {
        let key = language_key(code);
        if let Some(pack) = self.packs.get(&key) {
            return Ok(pack);
        }
        if !key.is_empty() && !key.contains('-') {
            if let Some(pack) = self
                .packs
                .iter()
                .find(|(k, _)| k.split('-').next() == Some(key.as_str()))
                .map(|(_, p)| p)
            {
                return Ok(pack);
            }
        }
        Err(NormError::unsupported_language(code))
    }

    /// Registered language codes.
    pub fn languages(&self) -> Vec<&str> {
        self.packs.values().map(LanguagePack::code).collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
