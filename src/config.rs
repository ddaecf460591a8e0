//! Configuration file support for wdlive.
//!
//! Loads startup selections from `~/.config/wdlive/config.toml` on Linux
//! (or platform-appropriate location on other OSes). Nothing is written back;
//! selections changed at runtime are lost on restart.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::items::WeatherItemType;
use crate::settings::Preferences;
use crate::units::{PressureUnit, RainfallUnit, TemperatureUnit, WindDirectionUnit, WindSpeedUnit};

/// Preferred starting unit for each measurement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    pub pressure: PressureUnit,
    pub rainfall: RainfallUnit,
    pub temperature: TemperatureUnit,
    pub wind_direction: WindDirectionUnit,
    pub wind_speed: WindSpeedUnit,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        let defaults = Preferences::default();
        Self {
            pressure: defaults.pressure,
            rainfall: defaults.rainfall,
            temperature: defaults.temperature,
            wind_direction: defaults.wind_direction,
            wind_speed: defaults.wind_speed,
        }
    }
}

/// Application configuration loaded from TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File holding the clientraw record, used when no path is given on the
    /// command line.
    pub clientraw_path: Option<PathBuf>,

    /// Weather item shown first.
    pub item: WeatherItemType,

    /// Units shown first.
    pub units: UnitsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clientraw_path: None,
            item: Preferences::default().item,
            units: UnitsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but is malformed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wdlive/config.toml"))
    }

    /// Starting selections for [`crate::settings::Settings::with_preferences`].
    pub fn preferences(&self) -> Preferences {
        Preferences {
            item: self.item,
            pressure: self.units.pressure,
            rainfall: self.units.rainfall,
            temperature: self.units.temperature,
            wind_direction: self.units.wind_direction,
            wind_speed: self.units.wind_speed,
        }
    }
}
