//! wdlive - Decode Weather Display `clientraw.txt` records for a two-line display.
//!
//! This crate provides:
//! - A nom-based decoder for space-separated clientraw records
//! - Measurement types with unit conversions
//! - Formatters and a composer producing two display lines per weather item
//! - Cyclical settings for the current weather item and units
//!
//! # Example
//!
//! ```rust
//! use wdlive::{ClientRaw, Screen, Settings};
//!
//! let record = ClientRaw::new("12345 1 2 3 25.4 97");
//! let settings = Settings::new();
//!
//! let item = Screen::classify(Some(&record)).render(&settings);
//! assert_eq!(item.line1, "25.4°C - 97% -");
//! ```

pub mod clientraw;
pub mod config;
pub mod cyclical;
pub mod formatters;
pub mod items;
pub mod measures;
pub mod screen;
pub mod settings;
pub mod units;

pub use clientraw::{ClientRaw, FORECASTS};
pub use config::{Config, UnitsConfig};
pub use cyclical::{Cyclical, SettingsError};
pub use items::{WeatherItem, WeatherItemType};
pub use measures::{Pressure, Rainfall, Temperature, Trend, WindDirection, WindSpeed};
pub use screen::Screen;
pub use settings::{Preferences, Settings};
pub use units::{
    PressureUnit, RainfallUnit, TemperatureUnit, UnknownVariant, WindDirectionUnit, WindSpeedUnit,
};
