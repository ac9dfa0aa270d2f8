//! Boundary data types for normalization requests and results.

use serde::{Deserialize, Serialize};

use crate::error::NormError;

/// Language used when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "hi-IN";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// A normalization request as received from a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeRequest {
    /// Raw input text.
    pub text: String,
    /// Enabled category identifiers, in caller priority order.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Language code (e.g. `hi-IN`).
    #[serde(default = "default_language")]
    pub language: String,
}

impl NormalizeRequest {
    /// Create a request for the default language.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            categories: Vec::new(),
            language: default_language(),
        }
    }

    /// Set the enabled categories.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Diagnostic trace of one rewritten span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Canonical category identifier.
    pub category: String,
    /// Exact original substring.
    pub original: String,
    /// Automaton state names visited, start state first.
    pub states: Vec<String>,
}

impl TraceEntry {
    /// Render the state chain as `A → B → C`.
    pub fn chain(&self) -> String {
        self.states.join(" → ")
    }
}

/// Result of a successful normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// Text with every recognized span replaced by its spoken form.
    pub normalized_text: String,
    /// SSML markup document.
    pub ssml: String,
    /// One trace entry per rewritten span, in text order.
    pub dfa_info: Vec<TraceEntry>,
}

impl NormalizationResult {
    /// Number of rewritten spans.
    pub fn match_count(&self) -> usize {
        self.dfa_info.len()
    }
}

/// Failure response: an error identifier and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error identifier (see [`NormError::kind`]).
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&NormError> for ErrorResponse {
    fn from(err: &NormError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
