//! Configuration management for motd
//!
//! The configuration lives in `$XDG_CONFIG_HOME/motd/config.toml`. Every
//! field has a default, so a missing file (or a partial one) is fine.

mod migrate;

pub use migrate::{migrate_config, MigrateResult};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::status::OnError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub image: ImageConfig,
    pub fortune: FortuneConfig,
    pub status: StatusConfig,
}

/// The ASCII image drawn on the left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// When false, messages are printed without an image
    pub enabled: bool,
    /// Text file holding the image (`~` is expanded)
    pub path: PathBuf,
    /// Image color: a name, `#rrggbb`, a 0-255 index, or `none`
    pub color: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("~/.motd_image"),
            color: "blue".to_string(),
        }
    }
}

/// The preamble printed above the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    pub enabled: bool,
    pub command: String,
    pub args: Vec<String>,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "fortune".to_string(),
            args: vec!["-s".to_string()],
        }
    }
}

/// Status lines printed beside the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// What to do when a status command fails
    pub on_error: OnError,
    /// Run status commands concurrently
    pub parallel: bool,
    /// Status lines, top to bottom
    pub items: Vec<StatusItem>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            on_error: OnError::Abort,
            parallel: true,
            items: vec![
                StatusItem::Uname {
                    args: default_uname_args(),
                },
                StatusItem::Updates {
                    command: default_updates_command(),
                    args: Vec::new(),
                },
            ],
        }
    }
}

/// One configured status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StatusItem {
    /// Kernel name, hostname and release
    Uname {
        #[serde(default = "default_uname_args")]
        args: Vec<String>,
    },
    /// Number of pending package updates
    Updates {
        #[serde(default = "default_updates_command")]
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Any command; `{output}` in `format` is replaced with its stdout
    Command {
        command: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default = "default_format")]
        format: String,
    },
}

fn default_uname_args() -> Vec<String> {
    vec!["-snr".to_string()]
}

fn default_updates_command() -> String {
    "checkupdates".to_string()
}

fn default_format() -> String {
    "{output}".to_string()
}

impl Config {
    /// Default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("motd").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
