//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/coursecat/coursecat.toml`
//! 3. Environment variables: `COURSECAT_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};

/// Unified configuration for coursecat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default catalog source, used when a subcommand omits its file argument
    pub catalog_file: Option<PathBuf>,
    /// Field delimiter for the catalog source (single character)
    pub delimiter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_file: None,
            delimiter: ",".to_string(),
        }
    }
}

/// Get the XDG config directory for coursecat.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "coursecat").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("coursecat.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/coursecat/coursecat.toml`
    /// 3. Environment variables: `COURSECAT_*` prefix
    pub fn load() -> CatalogResult<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("COURSECAT").separator("__"));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// The delimiter as a single character.
    ///
    /// The config layer stores it as a string; anything other than
    /// exactly one character is a configuration error.
    pub fn delimiter_char(&self) -> CatalogResult<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CatalogError::Config {
                message: format!(
                    "delimiter must be a single character, got {:?}",
                    self.delimiter
                ),
            }),
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> CatalogResult<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> CatalogError {
    CatalogError::Config {
        message: e.to_string(),
    }
}
