//! Normalize command implementation.

use anyhow::{Context, Result};
use text_normalizer::Normalizer;
use tn_core::{ErrorResponse, NormResult, NormalizationResult, TextNormalizer};

/// Options for the normalize command.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub input: String,
    /// Empty means every category registered for the language.
    pub categories: Vec<String>,
    pub lang: String,
    pub json: bool,
}

/// Read `@path` inputs from disk; anything else is the text itself.
fn read_input(input: &str) -> Result<String> {
    match input.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {path}")),
        None => Ok(input.to_string()),
    }
}

fn normalize(
    normalizer: &Normalizer,
    text: &str,
    options: &NormalizeOptions,
) -> NormResult<NormalizationResult> {
    let categories: Vec<String> = if options.categories.is_empty() {
        normalizer
            .categories(&options.lang)?
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        options.categories.clone()
    };
    let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
    normalizer.normalize(text, &categories, &options.lang)
}

/// Run the normalize command.
pub fn run(normalizer: &Normalizer, options: NormalizeOptions) -> Result<()> {
    let text = read_input(&options.input)?;
    let outcome = normalize(normalizer, &text, &options);

    if options.json {
        let json = match &outcome {
            Ok(result) => serde_json::to_string_pretty(result)?,
            Err(e) => serde_json::to_string_pretty(&ErrorResponse::from(e))?,
        };
        println!("{json}");
        outcome?;
        return Ok(());
    }

    let result = outcome?;
    println!("Input:      {text}");
    println!("Normalized: {}", result.normalized_text);
    println!();
    println!("SSML:");
    println!("{}", result.ssml);

    if !result.dfa_info.is_empty() {
        println!();
        println!("Traces:");
        for entry in &result.dfa_info {
            println!("  [{}] {}: {}", entry.category, entry.original, entry.chain());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(categories: &[&str]) -> NormalizeOptions {
        NormalizeOptions {
            input: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            lang: "hi-IN".to_string(),
            json: false,
        }
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "वर्ष 1990 में").unwrap();
        let text = read_input(&format!("@{}", path.display())).unwrap();
        assert_eq!(text, "वर्ष 1990 में");
        assert_eq!(read_input("सीधा पाठ").unwrap(), "सीधा पाठ");
        assert!(read_input("@/nonexistent/input.txt").is_err());
    }

    #[test]
    fn test_default_categories() {
        let normalizer = Normalizer::new().unwrap();
        let result = normalize(&normalizer, "डॉ. शर्मा ₹500", &options(&[])).unwrap();
        assert_eq!(result.normalized_text, "डॉक्टर शर्मा पाँच सौ रुपये");
    }

    #[test]
    fn test_selected_categories() {
        let normalizer = Normalizer::new().unwrap();
        let result = normalize(&normalizer, "डॉ. शर्मा ₹500", &options(&["abbreviations"])).unwrap();
        assert_eq!(result.normalized_text, "डॉक्टर शर्मा ₹500");
    }

    #[test]
    fn test_unsupported_language() {
        let normalizer = Normalizer::new().unwrap();
        let mut opts = options(&[]);
        opts.lang = "ta-IN".to_string();
        let err = normalize(&normalizer, "12", &opts).unwrap_err();
        assert_eq!(ErrorResponse::from(&err).error, "unsupported_language");
    }
}
