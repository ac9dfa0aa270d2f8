//! Trait definitions for normalization front ends.

use crate::error::NormResult;
use crate::types::{ErrorResponse, NormalizationResult, NormalizeRequest};

/// Text normalization trait.
///
/// Implementations rewrite raw input text into a speakable form, emit SSML
/// for the rewritten spans, and report how each span was recognized.
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text.
    ///
    /// # Arguments
    /// * `text` - Raw input text
    /// * `categories` - Enabled category identifiers, in priority order
    /// * `language` - Language code (e.g. `hi-IN`)
    ///
    /// # Returns
    /// Normalized text, SSML document, and per-span traces. No partial output
    /// is produced on failure.
    fn normalize(
        &self,
        text: &str,
        categories: &[&str],
        language: &str,
    ) -> NormResult<NormalizationResult>;

    /// Serve a boundary request.
    fn handle(&self, request: &NormalizeRequest) -> Result<NormalizationResult, ErrorResponse> {
        let categories: Vec<&str> = request.categories.iter().map(String::as_str).collect();
        self.normalize(&request.text, &categories, &request.language)
            .map_err(|e| ErrorResponse::from(&e))
    }
}
