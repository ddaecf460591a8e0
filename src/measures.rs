//! Measurement value objects.
//!
//! Each measurement is built from a single value in its canonical unit and
//! computes every other unit once, at construction. Derived values are rounded
//! to seven significant digits so the published conversion constants are
//! reproduced without binary floating point drift.

use crate::units::{PressureUnit, RainfallUnit, TemperatureUnit, WindSpeedUnit};

/// Significant digits kept for every converted value.
const SIGNIFICANT_DIGITS: usize = 7;

/// Round `value` to [`SIGNIFICANT_DIGITS`] significant digits.
fn to_precision(value: f64) -> f64 {
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Atmospheric pressure, canonically in hectopascals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pressure {
    hectopascals: f64,
    millibars: f64,
    kilopascals: f64,
    inches_of_mercury: f64,
    millimetres_of_mercury: f64,
}

impl Pressure {
    pub fn new(hectopascals: f64) -> Self {
        Self {
            hectopascals,
            millibars: hectopascals,
            kilopascals: to_precision(hectopascals / 10.0),
            inches_of_mercury: to_precision(hectopascals * 0.02953),
            millimetres_of_mercury: to_precision(hectopascals * 0.750062),
        }
    }

    pub fn hectopascals(&self) -> f64 {
        self.hectopascals
    }

    pub fn millibars(&self) -> f64 {
        self.millibars
    }

    pub fn kilopascals(&self) -> f64 {
        self.kilopascals
    }

    pub fn inches_of_mercury(&self) -> f64 {
        self.inches_of_mercury
    }

    pub fn millimetres_of_mercury(&self) -> f64 {
        self.millimetres_of_mercury
    }

    /// Returns the pressure expressed in `unit`.
    pub fn value(&self, unit: PressureUnit) -> f64 {
        match unit {
            PressureUnit::Hectopascals => self.hectopascals,
            PressureUnit::Millibars => self.millibars,
            PressureUnit::Kilopascals => self.kilopascals,
            PressureUnit::InchesOfMercury => self.inches_of_mercury,
            PressureUnit::MillimetresOfMercury => self.millimetres_of_mercury,
        }
    }
}

/// A rainfall amount (or per-minute rate), canonically in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rainfall {
    millimetres: f64,
    inches: f64,
}

impl Rainfall {
    pub fn new(millimetres: f64) -> Self {
        Self {
            millimetres,
            inches: to_precision(millimetres * (1.0 / 25.4)),
        }
    }

    pub fn millimetres(&self) -> f64 {
        self.millimetres
    }

    pub fn inches(&self) -> f64 {
        self.inches
    }

    pub fn value(&self, unit: RainfallUnit) -> f64 {
        match unit {
            RainfallUnit::Millimetres => self.millimetres,
            RainfallUnit::Inches => self.inches,
        }
    }
}

/// A temperature, canonically in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    celsius: f64,
    fahrenheit: f64,
}

impl Temperature {
    pub fn new(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: to_precision(to_precision(celsius * 1.8) + 32.0),
        }
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> f64 {
        self.fahrenheit
    }

    pub fn value(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.fahrenheit,
        }
    }
}

/// Direction of change of a measurement, taken from the sign of a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

impl Trend {
    /// Classify a signed delta. Exactly zero is steady; there is no deadband.
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Trend::Falling
        } else if delta > 0.0 {
            Trend::Rising
        } else {
            Trend::Steady
        }
    }
}

/// 16-point compass labels, clockwise from north.
const CARDINAL_DIRECTIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Wind direction, canonically in whole compass degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindDirection {
    compass_degrees: i64,
    cardinal_direction: &'static str,
}

impl WindDirection {
    pub fn new(compass_degrees: i64) -> Self {
        let sector = (compass_degrees.saturating_add(11) as f64 / 22.5) as i64;
        Self {
            compass_degrees,
            cardinal_direction: CARDINAL_DIRECTIONS[sector.rem_euclid(16) as usize],
        }
    }

    pub fn compass_degrees(&self) -> i64 {
        self.compass_degrees
    }

    pub fn cardinal_direction(&self) -> &'static str {
        self.cardinal_direction
    }
}

/// Wind speed, canonically in knots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSpeed {
    knots: f64,
    metres_per_second: f64,
    kilometres_per_hour: f64,
    miles_per_hour: f64,
    beaufort_scale: u8,
}

impl WindSpeed {
    pub fn new(knots: f64) -> Self {
        Self {
            knots,
            metres_per_second: to_precision(knots * 0.514444),
            kilometres_per_hour: to_precision(knots * 1.852),
            miles_per_hour: to_precision(knots * 1.15078),
            beaufort_scale: beaufort_scale(knots),
        }
    }

    pub fn knots(&self) -> f64 {
        self.knots
    }

    pub fn metres_per_second(&self) -> f64 {
        self.metres_per_second
    }

    pub fn kilometres_per_hour(&self) -> f64 {
        self.kilometres_per_hour
    }

    pub fn miles_per_hour(&self) -> f64 {
        self.miles_per_hour
    }

    pub fn beaufort_scale(&self) -> u8 {
        self.beaufort_scale
    }

    /// Returns the speed in `unit`. Beaufort force is returned as a whole number.
    pub fn value(&self, unit: WindSpeedUnit) -> f64 {
        match unit {
            WindSpeedUnit::Knots => self.knots,
            WindSpeedUnit::MetresPerSecond => self.metres_per_second,
            WindSpeedUnit::KilometresPerHour => self.kilometres_per_hour,
            WindSpeedUnit::MilesPerHour => self.miles_per_hour,
            WindSpeedUnit::BeaufortScale => f64::from(self.beaufort_scale),
        }
    }
}

/// Beaufort force for a speed in knots, rounding the speed half away from zero.
fn beaufort_scale(knots: f64) -> u8 {
    match knots.round() as i64 {
        i64::MIN..=0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=10 => 3,
        11..=16 => 4,
        17..=21 => 5,
        22..=27 => 6,
        28..=33 => 7,
        34..=40 => 8,
        41..=47 => 9,
        48..=55 => 10,
        56..=63 => 11,
        _ => 12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_precision() {
        assert_eq!(to_precision(30.052681), 30.05268);
        assert_eq!(to_precision(0.0), 0.0);
        assert_eq!(to_precision(-90.90000000000001), -90.9);
        assert_eq!(to_precision(1234567.8), 1234568.0);
    }

    #[test]
    fn test_pressure_zero() {
        let pressure = Pressure::new(0.0);
        for unit in PressureUnit::ALL {
            assert_eq!(pressure.value(unit), 0.0);
        }
    }

    #[test]
    fn test_pressure_conversions() {
        let pressure = Pressure::new(1017.7);
        assert_eq!(pressure.value(PressureUnit::Hectopascals), 1017.7);
        assert_eq!(pressure.value(PressureUnit::Millibars), 1017.7);
        assert_eq!(pressure.value(PressureUnit::Kilopascals), 101.77);
        assert_eq!(pressure.value(PressureUnit::InchesOfMercury), 30.05268);
        assert_eq!(pressure.value(PressureUnit::MillimetresOfMercury), 763.3381);
    }

    #[test]
    fn test_rainfall_conversions() {
        assert_eq!(Rainfall::new(0.0).inches(), 0.0);
        assert_eq!(Rainfall::new(2.5).value(RainfallUnit::Millimetres), 2.5);
        assert_eq!(Rainfall::new(50.0).value(RainfallUnit::Inches), 1.968504);
    }

    #[test]
    fn test_temperature_conversions() {
        assert_eq!(Temperature::new(-25.5).celsius(), -25.5);
        assert_eq!(Temperature::new(25.5).value(TemperatureUnit::Celsius), 25.5);
        assert_eq!(Temperature::new(-50.5).fahrenheit(), -58.9);
        assert_eq!(Temperature::new(0.0).fahrenheit(), 32.0);
        assert_eq!(Temperature::new(50.5).value(TemperatureUnit::Fahrenheit), 122.9);
    }

    #[test]
    fn test_trend_from_delta() {
        assert_eq!(Trend::from_delta(-0.1), Trend::Falling);
        assert_eq!(Trend::from_delta(0.0), Trend::Steady);
        assert_eq!(Trend::from_delta(-0.0), Trend::Steady);
        assert_eq!(Trend::from_delta(0.001), Trend::Rising);
    }

    #[test]
    fn test_wind_direction_degrees() {
        assert_eq!(WindDirection::new(0).compass_degrees(), 0);
        assert_eq!(WindDirection::new(180).compass_degrees(), 180);
    }

    #[test]
    fn test_wind_direction_cardinal() {
        let cases = [
            (0, "N"),
            (22, "NNE"),
            (45, "NE"),
            (68, "ENE"),
            (90, "E"),
            (112, "ESE"),
            (135, "SE"),
            (158, "SSE"),
            (180, "S"),
            (202, "SSW"),
            (225, "SW"),
            (248, "WSW"),
            (270, "W"),
            (292, "WNW"),
            (315, "NW"),
            (338, "NNW"),
            (349, "N"),
            (359, "N"),
        ];

        for (degrees, expected) in cases {
            assert_eq!(
                WindDirection::new(degrees).cardinal_direction(),
                expected,
                "{} degrees",
                degrees
            );
        }
    }

    #[test]
    fn test_wind_speed_conversions() {
        let calm = WindSpeed::new(0.0);
        assert_eq!(calm.knots(), 0.0);
        assert_eq!(calm.metres_per_second(), 0.0);

        let breeze = WindSpeed::new(5.0);
        assert_eq!(breeze.value(WindSpeedUnit::Knots), 5.0);
        assert_eq!(breeze.value(WindSpeedUnit::MetresPerSecond), 2.57222);
        assert_eq!(breeze.value(WindSpeedUnit::KilometresPerHour), 9.26);
        assert_eq!(breeze.value(WindSpeedUnit::MilesPerHour), 5.7539);
        assert_eq!(breeze.value(WindSpeedUnit::BeaufortScale), 2.0);
    }

    #[test]
    fn test_beaufort_boundaries() {
        let cases = [
            (0.0, 0),
            (0.4, 0),
            (0.5, 1),
            (3.4, 1),
            (3.5, 2),
            (6.4, 2),
            (6.5, 3),
            (10.4, 3),
            (10.5, 4),
            (16.4, 4),
            (16.5, 5),
            (21.4, 5),
            (21.5, 6),
            (27.4, 6),
            (27.5, 7),
            (33.4, 7),
            (33.5, 8),
            (40.4, 8),
            (40.5, 9),
            (47.4, 9),
            (47.5, 10),
            (55.4, 10),
            (55.5, 11),
            (63.4, 11),
            (63.5, 12),
            (64.0, 12),
            (120.0, 12),
        ];

        for (knots, expected) in cases {
            assert_eq!(
                WindSpeed::new(knots).beaufort_scale(),
                expected,
                "{} knots",
                knots
            );
        }
    }

    #[test]
    fn test_beaufort_negative_speed_is_calm() {
        assert_eq!(WindSpeed::new(-3.0).beaufort_scale(), 0);
    }
}
