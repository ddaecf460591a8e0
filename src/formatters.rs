//! Fixed-width display formatting for decoded measurements.
//!
//! Every formatter accepts an optional value. A missing value renders as a
//! placeholder with the same shape as a real reading: dashes stand in for the
//! digits and the unit suffix is kept, so the display layout does not jump
//! when data drops out.

use crate::measures::{Pressure, Rainfall, Temperature, Trend, WindDirection, WindSpeed};
use crate::units::{PressureUnit, RainfallUnit, TemperatureUnit, WindDirectionUnit, WindSpeedUnit};

pub const RISING: &str = "➚";
pub const STEADY: &str = "➙";
pub const FALLING: &str = "➘";

pub fn format_forecast(forecast: Option<&str>) -> String {
    match forecast {
        Some(forecast) => forecast.to_string(),
        None => "-----".to_string(),
    }
}

/// Relative humidity as a whole percentage, e.g. `97%`.
pub fn format_humidity(humidity: Option<i64>) -> String {
    match humidity {
        Some(humidity) => format!("{}%", humidity),
        None => "--%".to_string(),
    }
}

pub fn format_pressure(pressure: Option<Pressure>, unit: PressureUnit) -> String {
    match pressure {
        Some(pressure) => {
            let value = pressure.value(unit);
            match unit {
                PressureUnit::Hectopascals
                | PressureUnit::Millibars
                | PressureUnit::MillimetresOfMercury => format!("{:.1} {}", value, unit),
                PressureUnit::Kilopascals | PressureUnit::InchesOfMercury => {
                    format!("{:.2} {}", value, unit)
                }
            }
        }
        None => match unit {
            PressureUnit::Hectopascals => "----.- hPa".to_string(),
            PressureUnit::Millibars => "----.- mb".to_string(),
            PressureUnit::Kilopascals => "---.-- kPa".to_string(),
            PressureUnit::InchesOfMercury => "--.-- inHg".to_string(),
            PressureUnit::MillimetresOfMercury => "---.- mmHg".to_string(),
        },
    }
}

/// Rainfall total, always to two decimal places.
pub fn format_rainfall(rainfall: Option<Rainfall>, unit: RainfallUnit) -> String {
    match rainfall {
        Some(rainfall) => format!("{:.2} {}", rainfall.value(unit), unit),
        None => format!("-.-- {}", unit),
    }
}

/// Rainfall rate per minute. Inches get an extra decimal place.
pub fn format_rainfall_rate(rate: Option<Rainfall>, unit: RainfallUnit) -> String {
    match (rate, unit) {
        (Some(rate), RainfallUnit::Millimetres) => format!("{:.2} mm/min", rate.millimetres()),
        (Some(rate), RainfallUnit::Inches) => format!("{:.3} in/min", rate.inches()),
        (None, RainfallUnit::Millimetres) => "-.-- mm/min".to_string(),
        (None, RainfallUnit::Inches) => "-.--- in/min".to_string(),
    }
}

pub fn format_temperature(temperature: Option<Temperature>, unit: TemperatureUnit) -> String {
    match temperature {
        Some(temperature) => format!("{:.1}{}", temperature.value(unit), unit),
        None => format!("--.-{}", unit),
    }
}

/// Time of day as `HH:MM`. Both parts must be present.
pub fn format_time(hour: Option<i64>, minute: Option<i64>) -> String {
    match (hour, minute) {
        (Some(hour), Some(minute)) => format!("{:02}:{:02}", hour, minute),
        _ => "--:--".to_string(),
    }
}

pub fn format_trend(trend: Option<Trend>) -> String {
    let arrow = match trend {
        Some(Trend::Rising) => RISING,
        Some(Trend::Steady) => STEADY,
        Some(Trend::Falling) => FALLING,
        None => "-",
    };
    arrow.to_string()
}

/// UV index to one decimal place followed by its exposure band.
pub fn format_uv_index(uv_index: Option<f64>) -> String {
    match uv_index {
        Some(uv_index) => format!("{:.1} {}", uv_index, uv_index_band(uv_index)),
        None => "-.- -----".to_string(),
    }
}

/// Exposure band for a UV index. The index is rounded half down first, so
/// 2.5 is still "low" while 2.6 is "moderate".
fn uv_index_band(uv_index: f64) -> &'static str {
    match round_half_down(uv_index) as i64 {
        i64::MIN..=2 => "low",
        3..=5 => "moderate",
        6..=7 => "high",
        8..=10 => "very high",
        _ => "extreme",
    }
}

/// Round to the nearest integer with ties going toward zero.
fn round_half_down(value: f64) -> f64 {
    let magnitude = value.abs();
    let floor = magnitude.floor();
    let rounded = if magnitude - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded.copysign(value)
}

pub fn format_wind_direction(direction: Option<WindDirection>, unit: WindDirectionUnit) -> String {
    match (direction, unit) {
        (Some(direction), WindDirectionUnit::CompassDegrees) => {
            format!("{}°", direction.compass_degrees())
        }
        (Some(direction), WindDirectionUnit::CardinalDirection) => {
            direction.cardinal_direction().to_string()
        }
        (None, WindDirectionUnit::CompassDegrees) => "---°".to_string(),
        (None, WindDirectionUnit::CardinalDirection) => "---".to_string(),
    }
}

pub fn format_wind_speed(speed: Option<WindSpeed>, unit: WindSpeedUnit) -> String {
    match (speed, unit) {
        (Some(speed), WindSpeedUnit::BeaufortScale) => {
            format!("{} {}", speed.beaufort_scale(), unit)
        }
        (Some(speed), _) => format!("{:.1} {}", speed.value(unit), unit),
        (None, WindSpeedUnit::BeaufortScale) => format!("-- {}", unit),
        (None, _) => format!("--.- {}", unit),
    }
}
