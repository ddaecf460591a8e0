//! User-selectable display settings.
//!
//! `Settings` holds one [`Cyclical`] selector per dimension: the weather item
//! shown and the unit used for each measurement kind. It is plain data;
//! callers driving it from several threads wrap it in their own lock.

use crate::cyclical::Cyclical;
use crate::items::WeatherItemType;
use crate::units::{PressureUnit, RainfallUnit, TemperatureUnit, WindDirectionUnit, WindSpeedUnit};

/// Initial selections for each settings dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub item: WeatherItemType,
    pub pressure: PressureUnit,
    pub rainfall: RainfallUnit,
    pub temperature: TemperatureUnit,
    pub wind_direction: WindDirectionUnit,
    pub wind_speed: WindSpeedUnit,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            item: WeatherItemType::ALL[0],
            pressure: PressureUnit::ALL[0],
            rainfall: RainfallUnit::ALL[0],
            temperature: TemperatureUnit::ALL[0],
            wind_direction: WindDirectionUnit::ALL[0],
            wind_speed: WindSpeedUnit::ALL[0],
        }
    }
}

/// Current weather item and unit selections.
#[derive(Debug, Clone)]
pub struct Settings {
    weather_item_types: Cyclical<WeatherItemType>,
    pressure_units: Cyclical<PressureUnit>,
    rainfall_units: Cyclical<RainfallUnit>,
    temperature_units: Cyclical<TemperatureUnit>,
    wind_direction_units: Cyclical<WindDirectionUnit>,
    wind_speed_units: Cyclical<WindSpeedUnit>,
}

impl Settings {
    /// Create settings positioned on the first entry of each default order.
    pub fn new() -> Self {
        Self {
            weather_item_types: Cyclical::new(WeatherItemType::ALL.to_vec())
                .expect("weather item order is non-empty"),
            pressure_units: Cyclical::new(PressureUnit::ALL.to_vec())
                .expect("pressure unit order is non-empty"),
            rainfall_units: Cyclical::new(RainfallUnit::ALL.to_vec())
                .expect("rainfall unit order is non-empty"),
            temperature_units: Cyclical::new(TemperatureUnit::ALL.to_vec())
                .expect("temperature unit order is non-empty"),
            wind_direction_units: Cyclical::new(WindDirectionUnit::ALL.to_vec())
                .expect("wind direction unit order is non-empty"),
            wind_speed_units: Cyclical::new(WindSpeedUnit::ALL.to_vec())
                .expect("wind speed unit order is non-empty"),
        }
    }

    /// Create settings starting on the given selections.
    ///
    /// Each selector is advanced from its default position until the
    /// preferred entry is current, so the cycle order is unchanged.
    pub fn with_preferences(preferences: &Preferences) -> Self {
        let mut settings = Self::new();
        advance_to(&mut settings.weather_item_types, &preferences.item);
        advance_to(&mut settings.pressure_units, &preferences.pressure);
        advance_to(&mut settings.rainfall_units, &preferences.rainfall);
        advance_to(&mut settings.temperature_units, &preferences.temperature);
        advance_to(&mut settings.wind_direction_units, &preferences.wind_direction);
        advance_to(&mut settings.wind_speed_units, &preferences.wind_speed);
        settings
    }

    pub fn next_weather_item_type(&mut self) {
        self.weather_item_types.advance();
    }

    pub fn previous_weather_item_type(&mut self) {
        self.weather_item_types.retreat();
    }

    pub fn weather_item_type(&self) -> WeatherItemType {
        *self.weather_item_types.current()
    }

    pub fn change_pressure_unit(&mut self) {
        self.pressure_units.advance();
    }

    pub fn pressure_unit(&self) -> PressureUnit {
        *self.pressure_units.current()
    }

    pub fn change_rainfall_unit(&mut self) {
        self.rainfall_units.advance();
    }

    pub fn rainfall_unit(&self) -> RainfallUnit {
        *self.rainfall_units.current()
    }

    pub fn change_temperature_unit(&mut self) {
        self.temperature_units.advance();
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        *self.temperature_units.current()
    }

    pub fn change_wind_direction_unit(&mut self) {
        self.wind_direction_units.advance();
    }

    pub fn wind_direction_unit(&self) -> WindDirectionUnit {
        *self.wind_direction_units.current()
    }

    pub fn change_wind_speed_unit(&mut self) {
        self.wind_speed_units.advance();
    }

    pub fn wind_speed_unit(&self) -> WindSpeedUnit {
        *self.wind_speed_units.current()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance `cycle` until `target` is current, giving up after one full lap.
fn advance_to<T: PartialEq>(cycle: &mut Cyclical<T>, target: &T) {
    for _ in 0..cycle.len() {
        if cycle.current() == target {
            return;
        }
        cycle.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_item_type_defaults() {
        let mut settings = Settings::new();
        assert_eq!(settings.weather_item_type(), WeatherItemType::Summary);
        settings.next_weather_item_type();
        assert_eq!(settings.weather_item_type(), WeatherItemType::Forecast);
        settings.previous_weather_item_type();
        settings.previous_weather_item_type();
        assert_eq!(settings.weather_item_type(), WeatherItemType::LastUpdate);
    }

    #[test]
    fn test_weather_item_type_full_cycle() {
        let mut settings = Settings::new();
        let mut seen = Vec::new();
        for _ in 0..WeatherItemType::ALL.len() {
            seen.push(settings.weather_item_type());
            settings.next_weather_item_type();
        }
        assert_eq!(seen, WeatherItemType::ALL.to_vec());
        assert_eq!(settings.weather_item_type(), WeatherItemType::Summary);
    }

    #[test]
    fn test_pressure_unit() {
        let mut settings = Settings::new();
        assert_eq!(settings.pressure_unit(), PressureUnit::Kilopascals);
        settings.change_pressure_unit();
        assert_eq!(settings.pressure_unit(), PressureUnit::Millibars);
    }

    #[test]
    fn test_rainfall_unit() {
        let mut settings = Settings::new();
        assert_eq!(settings.rainfall_unit(), RainfallUnit::Millimetres);
        settings.change_rainfall_unit();
        assert_eq!(settings.rainfall_unit(), RainfallUnit::Inches);
    }

    #[test]
    fn test_temperature_unit() {
        let mut settings = Settings::new();
        assert_eq!(settings.temperature_unit(), TemperatureUnit::Celsius);
        settings.change_temperature_unit();
        assert_eq!(settings.temperature_unit(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_wind_direction_unit() {
        let mut settings = Settings::new();
        assert_eq!(
            settings.wind_direction_unit(),
            WindDirectionUnit::CardinalDirection
        );
        settings.change_wind_direction_unit();
        assert_eq!(
            settings.wind_direction_unit(),
            WindDirectionUnit::CompassDegrees
        );
    }

    #[test]
    fn test_wind_speed_unit() {
        let mut settings = Settings::new();
        assert_eq!(settings.wind_speed_unit(), WindSpeedUnit::MilesPerHour);
        settings.change_wind_speed_unit();
        assert_eq!(settings.wind_speed_unit(), WindSpeedUnit::BeaufortScale);
    }

    #[test]
    fn test_default_preferences_match_new() {
        let settings = Settings::with_preferences(&Preferences::default());
        let fresh = Settings::new();
        assert_eq!(settings.weather_item_type(), fresh.weather_item_type());
        assert_eq!(settings.pressure_unit(), fresh.pressure_unit());
        assert_eq!(settings.wind_speed_unit(), fresh.wind_speed_unit());
    }

    #[test]
    fn test_with_preferences_keeps_cycle_order() {
        let preferences = Preferences {
            item: WeatherItemType::UvIndex,
            pressure: PressureUnit::Hectopascals,
            rainfall: RainfallUnit::Inches,
            temperature: TemperatureUnit::Fahrenheit,
            wind_direction: WindDirectionUnit::CompassDegrees,
            wind_speed: WindSpeedUnit::Knots,
        };
        let mut settings = Settings::with_preferences(&preferences);

        assert_eq!(settings.weather_item_type(), WeatherItemType::UvIndex);
        assert_eq!(settings.pressure_unit(), PressureUnit::Hectopascals);
        assert_eq!(settings.rainfall_unit(), RainfallUnit::Inches);
        assert_eq!(settings.temperature_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(
            settings.wind_direction_unit(),
            WindDirectionUnit::CompassDegrees
        );
        assert_eq!(settings.wind_speed_unit(), WindSpeedUnit::Knots);

        settings.next_weather_item_type();
        assert_eq!(settings.weather_item_type(), WeatherItemType::Indoor);
        settings.change_pressure_unit();
        assert_eq!(settings.pressure_unit(), PressureUnit::InchesOfMercury);
        settings.change_wind_speed_unit();
        assert_eq!(settings.wind_speed_unit(), WindSpeedUnit::MetresPerSecond);
    }
}
