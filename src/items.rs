//! Weather items: the two display lines built for each selectable item type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clientraw::ClientRaw;
use crate::formatters::{
    format_forecast, format_humidity, format_pressure, format_rainfall, format_rainfall_rate,
    format_temperature, format_time, format_trend, format_uv_index, format_wind_direction,
    format_wind_speed,
};
use crate::settings::Settings;
use crate::units::UnknownVariant;

/// The category of weather data currently on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherItemType {
    Summary,
    AverageWind,
    DailyRainfall,
    DewPoint,
    Forecast,
    GustSpeed,
    HeatIndex,
    Humidex,
    Humidity,
    Indoor,
    LastUpdate,
    RainfallRate,
    SurfacePressure,
    Temperature,
    UvIndex,
    WindChill,
}

impl WeatherItemType {
    /// Order in which the display cycles through items.
    pub const ALL: [WeatherItemType; 16] = [
        WeatherItemType::Summary,
        WeatherItemType::Forecast,
        WeatherItemType::Temperature,
        WeatherItemType::SurfacePressure,
        WeatherItemType::Humidity,
        WeatherItemType::AverageWind,
        WeatherItemType::GustSpeed,
        WeatherItemType::DailyRainfall,
        WeatherItemType::RainfallRate,
        WeatherItemType::DewPoint,
        WeatherItemType::WindChill,
        WeatherItemType::HeatIndex,
        WeatherItemType::Humidex,
        WeatherItemType::UvIndex,
        WeatherItemType::Indoor,
        WeatherItemType::LastUpdate,
    ];

    /// Human readable name, also used as the first display line.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherItemType::Summary => "Summary",
            WeatherItemType::AverageWind => "Average Wind",
            WeatherItemType::DailyRainfall => "Daily Rainfall",
            WeatherItemType::DewPoint => "Dew Point",
            WeatherItemType::Forecast => "Forecast",
            WeatherItemType::GustSpeed => "Gust Speed",
            WeatherItemType::HeatIndex => "Heat Index",
            WeatherItemType::Humidex => "Humidex",
            WeatherItemType::Humidity => "Humidity",
            WeatherItemType::Indoor => "Indoor",
            WeatherItemType::LastUpdate => "Last Update",
            WeatherItemType::RainfallRate => "Rainfall Rate",
            WeatherItemType::SurfacePressure => "Surface Pressure",
            WeatherItemType::Temperature => "Temperature",
            WeatherItemType::UvIndex => "UV Index",
            WeatherItemType::WindChill => "Wind Chill",
        }
    }
}

impl fmt::Display for WeatherItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeatherItemType {
    type Err = UnknownVariant;

    /// Accepts either the label ("Dew Point") or its snake case form ("dew_point").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        WeatherItemType::ALL
            .into_iter()
            .find(|item| item.label().to_ascii_lowercase().replace(' ', "_") == wanted)
            .ok_or_else(|| UnknownVariant::new("weather item", s))
    }
}

/// Two lines of text ready for a two-row character display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherItem {
    pub line1: String,
    pub line2: String,
}

impl WeatherItem {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Build the lines for the currently selected item from a decoded record.
    ///
    /// # Example
    ///
    /// ```
    /// use wdlive::{ClientRaw, Settings, WeatherItem};
    ///
    /// let record = ClientRaw::new("12345 11.2 12.3 180");
    /// let mut settings = Settings::new();
    /// while settings.weather_item_type() != wdlive::WeatherItemType::AverageWind {
    ///     settings.next_weather_item_type();
    /// }
    /// let item = WeatherItem::compose(&record, &settings);
    /// assert_eq!(item.line1, "Average Wind");
    /// assert_eq!(item.line2, "12.9 mph S");
    /// ```
    pub fn compose(record: &ClientRaw, settings: &Settings) -> Self {
        let pressure_unit = settings.pressure_unit();
        let rainfall_unit = settings.rainfall_unit();
        let temperature_unit = settings.temperature_unit();
        let wind_direction_unit = settings.wind_direction_unit();
        let wind_speed_unit = settings.wind_speed_unit();

        let item_type = settings.weather_item_type();
        let label = item_type.label();

        match item_type {
            WeatherItemType::Summary => Self::new(
                format!(
                    "{} {} {} {}",
                    format_temperature(record.outdoor_temperature(), temperature_unit),
                    format_trend(record.outdoor_temperature_trend()),
                    format_humidity(record.outdoor_humidity()),
                    format_trend(record.outdoor_humidity_trend()),
                ),
                format!(
                    "{} {}",
                    format_pressure(record.surface_pressure(), pressure_unit),
                    format_trend(record.surface_pressure_trend()),
                ),
            ),
            WeatherItemType::AverageWind => Self::new(
                label,
                format!(
                    "{} {}",
                    format_wind_speed(record.average_wind_speed(), wind_speed_unit),
                    format_wind_direction(record.wind_direction(), wind_direction_unit),
                ),
            ),
            WeatherItemType::DailyRainfall => Self::new(
                label,
                format_rainfall(record.daily_rainfall(), rainfall_unit),
            ),
            WeatherItemType::DewPoint => Self::new(
                label,
                format_temperature(record.dew_point(), temperature_unit),
            ),
            WeatherItemType::Forecast => Self::new(label, format_forecast(record.forecast())),
            WeatherItemType::GustSpeed => Self::new(
                label,
                format_wind_speed(record.gust_speed(), wind_speed_unit),
            ),
            WeatherItemType::HeatIndex => Self::new(
                label,
                format_temperature(record.heat_index(), temperature_unit),
            ),
            WeatherItemType::Humidex => Self::new(
                label,
                format_temperature(record.humidex(), temperature_unit),
            ),
            WeatherItemType::Humidity => Self::new(
                label,
                format!(
                    "{} {}",
                    format_humidity(record.outdoor_humidity()),
                    format_trend(record.outdoor_humidity_trend()),
                ),
            ),
            WeatherItemType::Indoor => Self::new(
                label,
                format!(
                    "{} {}",
                    format_temperature(record.indoor_temperature(), temperature_unit),
                    format_humidity(record.indoor_humidity()),
                ),
            ),
            WeatherItemType::LastUpdate => {
                Self::new(label, format_time(record.hour(), record.minute()))
            }
            WeatherItemType::RainfallRate => Self::new(
                label,
                format_rainfall_rate(record.rainfall_rate(), rainfall_unit),
            ),
            WeatherItemType::SurfacePressure => Self::new(
                label,
                format!(
                    "{} {}",
                    format_pressure(record.surface_pressure(), pressure_unit),
                    format_trend(record.surface_pressure_trend()),
                ),
            ),
            WeatherItemType::Temperature => Self::new(
                label,
                format!(
                    "{} {}",
                    format_temperature(record.outdoor_temperature(), temperature_unit),
                    format_trend(record.outdoor_temperature_trend()),
                ),
            ),
            WeatherItemType::UvIndex => Self::new(label, format_uv_index(record.uv_index())),
            WeatherItemType::WindChill => Self::new(
                label,
                format_temperature(record.wind_chill(), temperature_unit),
            ),
        }
    }
}

impl fmt::Display for WeatherItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.line1, self.line2)
    }
}
