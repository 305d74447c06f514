//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
/// Later sources (global file, workspace files, environment) override these.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("translation.provider", "none")?
        .set_default("translation.source_language", "en")?
        .set_default("translation.target_language", "ko")?
        .set_default("translation.timeout_ms", 3000)?
        .set_default("questions.language", "ko")?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
