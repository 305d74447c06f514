//! Config loader facade: assembles sources in precedence order and deserializes.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::ReminisceConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};

/// Loads [`ReminisceConfig`] from layered sources.
///
/// Precedence (lowest to highest): defaults, global file, workspace files, environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    pub fn load(workspace_root: &Path) -> Result<ReminisceConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from an explicit file; the global and workspace files are skipped.
    pub fn load_from_file(path: &Path) -> Result<ReminisceConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
