use crate::{CONFIG_DIRECTORY, expand_tilde};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "config.toml";
const EPISODES_FILE: &str = "episodes.toml";

/// User settings, read from `config.toml`.
///
/// Every field has a default, so a partial file (or none at all) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Episode list file.
    pub episodes: PathBuf,
    /// Seconds moved by a plain seek key.
    pub seek_step: u64,
    /// Seconds moved by a shifted seek key.
    pub seek_step_large: u64,
    pub log_level: String,
    pub theme: ThemeSettings,
}

/// Colors as written in the config file: names, `#RRGGBB` or `rgb(r, g, b)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub background: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub progress_complete: String,
    pub progress_incomplete: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            episodes: config_dir()
                .map(|dir| dir.join(EPISODES_FILE))
                .unwrap_or_else(|| PathBuf::from(EPISODES_FILE)),
            seek_step: 5,
            seek_step_large: 30,
            log_level: String::from("info"),
            theme: ThemeSettings::default(),
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        ThemeSettings {
            background: String::from("#191919"),
            border: String::from("#646464"),
            text: String::from("#D2D2D2"),
            text_muted: String::from("#646464"),
            accent: String::from("#DCDC64"),
            progress_complete: String::from("#FF4646"),
            progress_incomplete: String::from("#646464"),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields defaults; a missing file
    /// that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Settings::default()),
            },
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut settings = toml::from_str::<Settings>(contents)?;
        settings.episodes = expand_tilde(&settings.episodes)?;
        Ok(settings)
    }

    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(CONFIG_FILE))
    }
}

fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY))
}
