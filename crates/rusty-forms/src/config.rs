// File: src/config.rs
// Purpose: Configuration parsing from rusty-forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::messages::MessageTemplates;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "rusty-forms.toml";

/// Form rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormsConfig {
    /// Overrides for individual message templates
    #[serde(default)]
    pub messages: MessageTemplates,
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // A missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from ./rusty-forms.toml
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
