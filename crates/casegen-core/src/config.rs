use std::path::Path;

use serde::{Deserialize, Serialize};

/// Keywords that cannot be written as raw identifiers, so cannot name a case.
const RESERVED_CASE_NAMES: [&str; 4] = ["self", "Self", "super", "crate"];

/// File the proc macros look for next to the invoking crate's `Cargo.toml`.
pub const CONFIG_FILE_NAME: &str = "casegen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionConfig {
    #[serde(default)]
    pub codegen: CodegenConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    #[serde(default = "default_fallback_case")]
    pub fallback_case: String,
    #[serde(default = "default_serde_path")]
    pub serde_path: String,
}

fn default_fallback_case() -> String {
    "Unknown".into()
}

fn default_serde_path() -> String {
    "serde".into()
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            fallback_case: default_fallback_case(),
            serde_path: default_serde_path(),
        }
    }
}

impl ExpansionConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `casegen.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let codegen = &self.codegen;

        if !is_identifier(&codegen.fallback_case) {
            return Err(ConfigError::Validation(format!(
                "fallback_case `{}` is not a valid identifier",
                codegen.fallback_case
            )));
        }
        if RESERVED_CASE_NAMES.contains(&codegen.fallback_case.as_str()) {
            return Err(ConfigError::Validation(format!(
                "fallback_case `{}` is a reserved keyword",
                codegen.fallback_case
            )));
        }

        let segments = codegen
            .serde_path
            .strip_prefix("::")
            .unwrap_or(&codegen.serde_path);
        if !segments.split("::").all(is_identifier) {
            return Err(ConfigError::Validation(format!(
                "serde_path `{}` is not a valid path",
                codegen.serde_path
            )));
        }

        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(String),
}
