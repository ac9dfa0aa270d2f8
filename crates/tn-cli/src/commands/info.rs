//! Info command implementation.

use text_normalizer::Normalizer;
use tn_core::EngineConfig;

/// Run the info command.
pub fn run(normalizer: &Normalizer, config: &EngineConfig) {
    println!("Hindi Text Normalization Engine");
    println!("===============================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    println!("Configuration:");
    println!("  Default language: {}", config.default_language);
    match &config.lexicon_dir {
        Some(dir) => println!("  Lexicon directory: {}", dir.display()),
        None => println!("  Lexicon directory: (built-in only)"),
    }
    println!();
    println!("Languages:");
    for code in normalizer.registry().languages() {
        if let Ok(pack) = normalizer.registry().language(code) {
            let states: usize = pack.rulesets().iter().map(|r| r.state_count()).sum();
            println!(
                "  {code}: {} categories, {states} automaton states",
                pack.rulesets().len()
            );
        }
    }
    println!();
    println!("Crates:");
    println!("  tn-core: Core types, traits and errors");
    println!("  text-normalizer: Automata, scanner, rewriter and trace recorder");
    println!("  tn-cli: This CLI tool");
}
