// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration loaded from TOML.

use crate::iofile::DEFAULT_SENTINEL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

/// Replay settings shared by every session in a suite
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Input appended after every script (default: "quit")
    #[serde(default = "default_sentinel")]
    pub sentinel: String,

    /// Keep the captures left over after a failure for the report
    #[serde(default)]
    pub show_all_program_output: bool,

    /// Keep the run transcript for passing cases too
    #[serde(default)]
    pub always_show_log: bool,

    /// Base directory for relative IO-file paths
    #[serde(default)]
    pub io_dir: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            show_all_program_output: false,
            always_show_log: false,
            io_dir: None,
        }
    }
}

/// Errors that can occur when loading a harness config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl HarnessConfig {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: HarnessConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for the binary: explicit path, then `IOPAIRS_CONFIG`,
    /// then defaults. `IOPAIRS_IO_DIR` overrides `io_dir` either way.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path.map(Path::to_path_buf).or_else(crate::env::config_path) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        if let Some(dir) = crate::env::io_dir() {
            config.io_dir = Some(dir);
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sentinel.is_empty() {
            return Err(ConfigError::Validation(
                "sentinel must not be empty".to_string(),
            ));
        }
        if self.sentinel.contains('\n') {
            return Err(ConfigError::Validation(
                "sentinel must be a single line".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve an IO-file path against `io_dir`
    pub fn io_path(&self, path: &Path) -> PathBuf {
        match &self.io_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
