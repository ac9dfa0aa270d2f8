//! Unified error types for the normalization engine.

/// Main error type for normalization operations.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// Input text is empty after trimming.
    #[error("input text is empty")]
    EmptyInput,

    /// The request enabled no categories.
    #[error("no normalization categories selected")]
    NoCategoriesSelected,

    /// A requested category is not registered for the language.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// No rulesets exist for the requested language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A ruleset or automaton was built inconsistently (should not happen).
    #[error("engine inconsistency: {0}")]
    EngineInconsistency(String),

    /// Configuration or lexicon error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create an unknown category error.
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    /// Create an unsupported language error.
    pub fn unsupported_language(name: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(name.into())
    }

    /// Create an engine inconsistency error with message.
    pub fn inconsistency(msg: impl Into<String>) -> Self {
        Self::EngineInconsistency(msg.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a serialization error with message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Stable identifier of the error kind, used in failure responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::NoCategoriesSelected => "no_categories_selected",
            Self::UnknownCategory(_) => "unknown_category",
            Self::UnsupportedLanguage(_) => "unsupported_language",
            Self::EngineInconsistency(_) => "engine_inconsistency",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Whether the error was caused by the request rather than the engine.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::NoCategoriesSelected
                | Self::UnknownCategory(_)
                | Self::UnsupportedLanguage(_)
        )
    }
}
