//! Configuration Management
//!
//! Handles persistent configuration storage for xpcost.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use crate::region::FALLBACK_REGION;

/// Environment variables consulted for the default region, in order
const REGION_ENV_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Region for manifests that do not set one
    #[serde(default)]
    pub default_region: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("xpcost").join("config.json"))
    }

    /// Load configuration from the user config dir
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load configuration from `path`; a missing or unreadable file yields
    /// the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to the user config dir
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            anyhow::bail!("Could not determine the user config directory");
        };
        self.save_to(&path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing config {:?}", path))?;

        Ok(())
    }

    /// Persist `region` as the default region; a blank value clears it
    pub fn set_default_region(&mut self, region: &str) -> Result<()> {
        self.update_default_region(region);
        self.save()
    }

    fn update_default_region(&mut self, region: &str) {
        let region = region.trim();
        self.default_region = (!region.is_empty()).then(|| region.to_string());
    }

    /// Get effective default region (CLI > environment > config > fallback)
    pub fn effective_default_region(&self, cli: Option<&str>) -> String {
        self.default_region_with(cli, |key| std::env::var(key).ok())
    }

    fn default_region_with<F>(&self, cli: Option<&str>, env: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |s: &String| !s.trim().is_empty();

        cli.map(String::from)
            .filter(non_empty)
            .or_else(|| REGION_ENV_VARS.iter().filter_map(|k| env(k)).find(non_empty))
            .or_else(|| self.default_region.clone().filter(non_empty))
            .unwrap_or_else(|| FALLBACK_REGION.to_string())
    }
}
