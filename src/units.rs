//! Selectable unit catalogs for each measurement kind.
//!
//! Every catalog is a closed enum. The `ALL` constant on each enum is the
//! order in which the settings selector cycles through the units; its first
//! element is the unit shown at startup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a unit or item name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    /// What was being parsed, e.g. "pressure unit".
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Units available for atmospheric pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureUnit {
    Hectopascals,
    InchesOfMercury,
    Kilopascals,
    Millibars,
    MillimetresOfMercury,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 5] = [
        PressureUnit::Kilopascals,
        PressureUnit::Millibars,
        PressureUnit::MillimetresOfMercury,
        PressureUnit::Hectopascals,
        PressureUnit::InchesOfMercury,
    ];

    /// Suffix used when displaying a value in this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Hectopascals => "hPa",
            PressureUnit::InchesOfMercury => "inHg",
            PressureUnit::Kilopascals => "kPa",
            PressureUnit::Millibars => "mb",
            PressureUnit::MillimetresOfMercury => "mmHg",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hpa" | "hectopascals" => Ok(PressureUnit::Hectopascals),
            "inhg" | "inches_of_mercury" => Ok(PressureUnit::InchesOfMercury),
            "kpa" | "kilopascals" => Ok(PressureUnit::Kilopascals),
            "mb" | "millibars" => Ok(PressureUnit::Millibars),
            "mmhg" | "millimetres_of_mercury" => Ok(PressureUnit::MillimetresOfMercury),
            _ => Err(UnknownVariant::new("pressure unit", s)),
        }
    }
}

/// Units available for rainfall totals and rainfall rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainfallUnit {
    Inches,
    Millimetres,
}

impl RainfallUnit {
    pub const ALL: [RainfallUnit; 2] = [RainfallUnit::Millimetres, RainfallUnit::Inches];

    pub fn symbol(&self) -> &'static str {
        match self {
            RainfallUnit::Inches => "in",
            RainfallUnit::Millimetres => "mm",
        }
    }
}

impl fmt::Display for RainfallUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for RainfallUnit {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inches" => Ok(RainfallUnit::Inches),
            "mm" | "millimetres" => Ok(RainfallUnit::Millimetres),
            _ => Err(UnknownVariant::new("rainfall unit", s)),
        }
    }
}

/// Units available for temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(UnknownVariant::new("temperature unit", s)),
        }
    }
}

/// How wind direction is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindDirectionUnit {
    /// 16-point compass label such as "NNW".
    CardinalDirection,
    /// Whole compass degrees, 0-359.
    CompassDegrees,
}

impl WindDirectionUnit {
    pub const ALL: [WindDirectionUnit; 2] = [
        WindDirectionUnit::CardinalDirection,
        WindDirectionUnit::CompassDegrees,
    ];
}

impl fmt::Display for WindDirectionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindDirectionUnit::CardinalDirection => write!(f, "cardinal"),
            WindDirectionUnit::CompassDegrees => write!(f, "degrees"),
        }
    }
}

impl FromStr for WindDirectionUnit {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinal" | "cardinal_direction" => Ok(WindDirectionUnit::CardinalDirection),
            "degrees" | "compass_degrees" => Ok(WindDirectionUnit::CompassDegrees),
            _ => Err(UnknownVariant::new("wind direction unit", s)),
        }
    }
}

/// Units available for wind speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindSpeedUnit {
    BeaufortScale,
    KilometresPerHour,
    Knots,
    MetresPerSecond,
    MilesPerHour,
}

impl WindSpeedUnit {
    pub const ALL: [WindSpeedUnit; 5] = [
        WindSpeedUnit::MilesPerHour,
        WindSpeedUnit::BeaufortScale,
        WindSpeedUnit::KilometresPerHour,
        WindSpeedUnit::Knots,
        WindSpeedUnit::MetresPerSecond,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            WindSpeedUnit::BeaufortScale => "Bft",
            WindSpeedUnit::KilometresPerHour => "kph",
            WindSpeedUnit::Knots => "kts",
            WindSpeedUnit::MetresPerSecond => "m/s",
            WindSpeedUnit::MilesPerHour => "mph",
        }
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WindSpeedUnit {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bft" | "beaufort_scale" => Ok(WindSpeedUnit::BeaufortScale),
            "kph" | "kilometres_per_hour" => Ok(WindSpeedUnit::KilometresPerHour),
            "kts" | "knots" => Ok(WindSpeedUnit::Knots),
            "m/s" | "metres_per_second" => Ok(WindSpeedUnit::MetresPerSecond),
            "mph" | "miles_per_hour" => Ok(WindSpeedUnit::MilesPerHour),
            _ => Err(UnknownVariant::new("wind speed unit", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_orders() {
        assert_eq!(
            PressureUnit::ALL,
            [
                PressureUnit::Kilopascals,
                PressureUnit::Millibars,
                PressureUnit::MillimetresOfMercury,
                PressureUnit::Hectopascals,
                PressureUnit::InchesOfMercury,
            ]
        );
        assert_eq!(RainfallUnit::ALL[0], RainfallUnit::Millimetres);
        assert_eq!(TemperatureUnit::ALL[0], TemperatureUnit::Celsius);
        assert_eq!(WindDirectionUnit::ALL[0], WindDirectionUnit::CardinalDirection);
        assert_eq!(
            WindSpeedUnit::ALL,
            [
                WindSpeedUnit::MilesPerHour,
                WindSpeedUnit::BeaufortScale,
                WindSpeedUnit::KilometresPerHour,
                WindSpeedUnit::Knots,
                WindSpeedUnit::MetresPerSecond,
            ]
        );
    }

    #[test]
    fn test_parse_symbols_and_names() {
        assert_eq!("hPa".parse::<PressureUnit>().unwrap(), PressureUnit::Hectopascals);
        assert_eq!(
            "inches_of_mercury".parse::<PressureUnit>().unwrap(),
            PressureUnit::InchesOfMercury
        );
        assert_eq!("IN".parse::<RainfallUnit>().unwrap(), RainfallUnit::Inches);
        assert_eq!("Fahrenheit".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(
            "degrees".parse::<WindDirectionUnit>().unwrap(),
            WindDirectionUnit::CompassDegrees
        );
        assert_eq!("Bft".parse::<WindSpeedUnit>().unwrap(), WindSpeedUnit::BeaufortScale);
        assert_eq!("m/s".parse::<WindSpeedUnit>().unwrap(), WindSpeedUnit::MetresPerSecond);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = "furlongs".parse::<WindSpeedUnit>().unwrap_err();
        assert_eq!(err.kind, "wind speed unit");
        assert_eq!(err.to_string(), "unknown wind speed unit: furlongs");
    }

    #[test]
    fn test_parse_accepts_only_symbol_or_name() {
        assert!("km/h".parse::<WindSpeedUnit>().is_err());
        assert!("beaufort".parse::<WindSpeedUnit>().is_err());
        assert!("c".parse::<TemperatureUnit>().is_err());
        assert!("°".parse::<WindDirectionUnit>().is_err());
        assert_eq!("°C".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!(
            "kilometres_per_hour".parse::<WindSpeedUnit>().unwrap(),
            WindSpeedUnit::KilometresPerHour
        );
    }

    #[test]
    fn test_every_symbol_parses_back() {
        for unit in PressureUnit::ALL {
            assert_eq!(unit.symbol().parse::<PressureUnit>().unwrap(), unit);
        }
        for unit in RainfallUnit::ALL {
            assert_eq!(unit.symbol().parse::<RainfallUnit>().unwrap(), unit);
        }
        for unit in TemperatureUnit::ALL {
            assert_eq!(unit.symbol().parse::<TemperatureUnit>().unwrap(), unit);
        }
        for unit in WindDirectionUnit::ALL {
            assert_eq!(unit.to_string().parse::<WindDirectionUnit>().unwrap(), unit);
        }
        for unit in WindSpeedUnit::ALL {
            assert_eq!(unit.symbol().parse::<WindSpeedUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_deserialize_snake_case() {
        #[derive(Deserialize)]
        struct Units {
            pressure: PressureUnit,
            wind_speed: WindSpeedUnit,
        }

        let units: Units = toml::from_str(
            r#"
            pressure = "millimetres_of_mercury"
            wind_speed = "beaufort_scale"
        "#,
        )
        .unwrap();
        assert_eq!(units.pressure, PressureUnit::MillimetresOfMercury);
        assert_eq!(units.wind_speed, WindSpeedUnit::BeaufortScale);
    }
}
