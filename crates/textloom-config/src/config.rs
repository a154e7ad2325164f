use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use textloom_discover::{MatchError, ResolveOptions, resolve_patterns};
use textloom_inflect::{InflectionRule, Inflector};

use crate::atomic::write_bytes_atomic;

/// Errors raised while loading, validating, or persisting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for one codegen run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    pub documents: DocumentSearch,
    pub inflection: InflectionSettings,
}

/// Where input documents are discovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSearch {
    /// Pattern list; a leading `!` turns a pattern into an exclusion.
    pub include: Vec<String>,
    /// Directory the patterns are evaluated against; defaults to the
    /// process working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Directory names skipped during recursive descent.
    pub excluded_directories: Vec<String>,
}

impl Default for DocumentSearch {
    fn default() -> Self {
        Self {
            include: vec!["**/*.graphql".to_string()],
            root: None,
            excluded_directories: vec!["node_modules".to_string(), ".git".to_string()],
        }
    }
}

impl DocumentSearch {
    /// Resolve the configured patterns into the input document set.
    pub fn resolve(&self) -> Result<BTreeSet<PathBuf>, MatchError> {
        let options = ResolveOptions {
            root: self.root.clone(),
            excluded_directories: self.excluded_directories.clone(),
        };
        resolve_patterns(&self.include, &options)
    }
}

/// Extra inflection rules appended after the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InflectionSettings {
    pub rules: Vec<InflectionRule>,
}

impl InflectionSettings {
    /// Build the run's inflector: defaults first, configured rules after.
    pub fn build_inflector(&self) -> ConfigResult<Inflector> {
        Inflector::builder()
            .rules(self.rules.iter().cloned())
            .build()
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

/// Read the configuration at `path`, or write the default one there and
/// return it.
pub fn load_or_create_config(path: &Path) -> ConfigResult<CodegenConfig> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content)?;
        validate_config(&config)?;
        debug!(path = %path.display(), "configuration loaded");
        return Ok(config);
    }

    let config = CodegenConfig::default();
    save_config(path, &config)?;
    debug!(path = %path.display(), "default configuration written");
    Ok(config)
}

/// Persist `config` as pretty TOML via an atomic replace.
pub fn save_config(path: &Path, config: &CodegenConfig) -> ConfigResult<()> {
    let encoded = toml::to_string_pretty(config)?;
    write_bytes_atomic(path, encoded.as_bytes())
}

/// Structural checks performed before any file-system work.
pub fn validate_config(config: &CodegenConfig) -> ConfigResult<()> {
    if config.documents.include.is_empty() {
        return Err(ConfigError::Invalid(
            "documents.include must list at least one pattern".to_string(),
        ));
    }
    for pattern in &config.documents.include {
        if pattern.is_empty() || pattern == "!" {
            return Err(ConfigError::Invalid(format!(
                "empty document pattern: '{pattern}'"
            )));
        }
    }
    for name in &config.documents.excluded_directories {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(ConfigError::Invalid(format!(
                "excluded directory must be a bare name: '{name}'"
            )));
        }
    }
    Ok(())
}
