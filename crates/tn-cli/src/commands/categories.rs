//! Categories command implementation.

use anyhow::Result;
use text_normalizer::{Category, Normalizer};

/// Run the categories command.
pub fn run(normalizer: &Normalizer, lang: &str) -> Result<()> {
    let pack = normalizer.registry().language(lang)?;
    println!("Categories for {}:", pack.code());
    for ruleset in pack.rulesets() {
        let category: Category = ruleset.category();
        let aliases = category.aliases();
        if aliases.is_empty() {
            println!("  {category}");
        } else {
            println!("  {category} (aliases: {})", aliases.join(", "));
        }
    }
    Ok(())
}
