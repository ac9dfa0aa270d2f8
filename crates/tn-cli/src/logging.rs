//! Log output for the `tn` binary.
//!
//! Events go to stderr so `normalize --json` keeps stdout parseable.

use tn_core::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Level used when neither a flag nor a config file names one.
const QUIET_LEVEL: &str = "warn";

/// Settle the logging settings for this run.
///
/// Command-line flags win over the config file. Without a config file the
/// CLI stays quiet and only reports warnings.
pub fn settings(
    config: Option<&LoggingConfig>,
    level: Option<String>,
    format: Option<&str>,
) -> LoggingConfig {
    let mut settings = match config {
        Some(config) => config.clone(),
        None => LoggingConfig {
            level: QUIET_LEVEL.to_string(),
            ..LoggingConfig::default()
        },
    };
    if let Some(level) = level {
        settings.level = level;
    }
    if let Some(format) = format {
        settings.format = format.to_string();
    }
    settings
}

fn is_json(settings: &LoggingConfig) -> bool {
    settings.format.eq_ignore_ascii_case("json")
}

/// Install the global subscriber. `RUST_LOG`, when set, overrides the level.
pub fn init(settings: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    // a second install (tests) keeps the first subscriber
    let _ = if is_json(settings) {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
