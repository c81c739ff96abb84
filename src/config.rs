//! YAML configuration: skin selection, theme tokens, nerdfont preference.
//!
//! Loaded from `~/.config/running-indicator/config.yaml` (or `.yml`), then
//! overridden by `.running-indicator.yaml` in the current directory. An
//! explicit path replaces both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::skin::Skin;
use crate::theme::Theme;

/// Project-level config file name.
const PROJECT_CONFIG_FILE: &str = ".running-indicator.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Selected skin. There is no built-in default.
    #[serde(default)]
    pub skin: Option<Skin>,

    /// Theme color tokens
    #[serde(default)]
    pub theme: Theme,

    /// Use nerdfont glyphs in the terminal demo
    #[serde(default)]
    pub nerdfont: Option<bool>,
}

impl Config {
    /// Load configuration.
    ///
    /// With `path`, only that file is read and it must exist. Otherwise the
    /// global and project files are merged; either may be missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read_file(path)?
                .with_context(|| format!("Config file not found: {}", path.display()));
        }

        let global = match global_config_path() {
            Some(p) => Self::read_file(&p)?.unwrap_or_default(),
            None => Self::default(),
        };
        let project = Self::read_file(Path::new(PROJECT_CONFIG_FILE))?.unwrap_or_default();
        Ok(global.merge(project))
    }

    /// Read a single config file. Returns `Ok(None)` if it doesn't exist.
    fn read_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), skin = ?config.skin, "config:loaded");
        Ok(Some(config))
    }

    /// Overlay `other` on this config. Keys set in `other` win.
    pub fn merge(self, other: Config) -> Config {
        Config {
            skin: other.skin.or(self.skin),
            theme: self.theme.merge(other.theme),
            nerdfont: other.nerdfont.or(self.nerdfont),
        }
    }

    /// Pick the skin: CLI flag first, then config. Neither is an error.
    pub fn resolve_skin(&self, flag: Option<Skin>) -> Result<Skin> {
        flag.or(self.skin).with_context(|| {
            format!(
                "No skin selected. Pass --skin or set `skin:` in the config. Available: {}",
                Skin::names()
            )
        })
    }
}

/// Get the path to the global config file.
/// Prefers existing .yml file to avoid shadowing, otherwise defaults to .yaml.
fn global_config_path() -> Option<PathBuf> {
    let home = home::home_dir()?;
    let yaml = home.join(".config/running-indicator/config.yaml");
    let yml = home.join(".config/running-indicator/config.yml");

    if yml.exists() && !yaml.exists() {
        Some(yml)
    } else {
        Some(yaml)
    }
}
