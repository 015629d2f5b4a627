const APP_PREFIX: &str = "daybook";
const CONFIG: &str = "config.toml";

use crate::error::Result;
use chrono::Weekday;
use log::{debug, warn};
use ratatui::style::Color;
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr};
use xdg::BaseDirectories;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) week_start: WeekStart,
    pub(crate) mark_days_with_tasks: bool,
    /// Any name or `#rrggbb` value ratatui understands.
    pub(crate) accent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            week_start: WeekStart::default(),
            mark_days_with_tasks: true,
            accent: "cyan".to_string(),
        }
    }
}

impl Config {
    /// Reads `$XDG_CONFIG_HOME/daybook/config.toml`, falling back to the
    /// defaults when there is no such file.
    pub(crate) fn load() -> Result<Config> {
        let dirs = BaseDirectories::with_prefix(APP_PREFIX)?;
        match dirs.find_config_file(CONFIG) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub(crate) fn from_path(path: &Path) -> Result<Config> {
        debug!("Loading config from {path:?}");
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub(crate) fn parse(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }

    pub(crate) fn accent_color(&self) -> Color {
        Color::from_str(&self.accent).unwrap_or_else(|_| {
            warn!("Unknown accent color {:?}, using cyan", self.accent);
            Color::Cyan
        })
    }
}
