use std::path::Path;

use casegen_core::config::CONFIG_FILE_NAME;
use casegen_core::ExpansionConfig;

pub mod config;
pub mod expand;
pub mod logging;
pub mod stringify;

/// Loads `path` when given, otherwise `casegen.toml` in the working
/// directory, otherwise defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ExpansionConfig> {
    if let Some(path) = path {
        return Ok(ExpansionConfig::from_file(path)?);
    }

    if Path::new(CONFIG_FILE_NAME).is_file() {
        tracing::debug!(path = CONFIG_FILE_NAME, "loading configuration");
        return Ok(ExpansionConfig::from_file(CONFIG_FILE_NAME)?);
    }

    tracing::warn!(
        path = CONFIG_FILE_NAME,
        "no configuration file found, using defaults"
    );
    Ok(ExpansionConfig::default())
}
