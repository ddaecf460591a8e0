//! Decoder for clientraw weather-station records.
//!
//! A clientraw record is a single line of space separated tokens written by
//! the weather-station console. Each quantity lives at a fixed token position.
//! Decoding is tolerant: a missing or malformed token never fails, it simply
//! reads back as `None`.
//!
//! # Record Format
//!
//! ```text
//! 12345 11.2 12.3 180 25.4 97 1019.7 15.67 ...
//! ^     ^    ^    ^   ^    ^  ^      ^
//! |     |    |    |   |    |  |      daily rainfall (mm)
//! |     |    |    |   |    |  surface pressure (hPa)
//! |     |    |    |   |    outdoor humidity (%)
//! |     |    |    |   outdoor temperature (C)
//! |     |    |    wind direction (degrees)
//! |     |    gust speed (knots)
//! |     average wind speed (knots)
//! header
//! ```
//!
//! Tokens are separated by exactly one space. Consecutive spaces are not
//! collapsed; each extra space yields an empty token that occupies a position
//! and reads back as `None`.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_till},
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::separated_list0,
    number::complete::double,
};
use tracing::{debug, trace};

use crate::measures::{Pressure, Rainfall, Temperature, Trend, WindDirection, WindSpeed};

/// Forecast icon names indexed by the icon code in the record.
///
/// Several codes share a name; the table is kept exactly as the console
/// numbers its icons.
pub const FORECASTS: [&str; 36] = [
    "Sunny",
    "Clear Night",
    "Cloudy",
    "Cloudy",
    "Cloudy Night",
    "Dry Clear",
    "Fog",
    "Hazy",
    "Heavy Rain",
    "Mainly Fine",
    "Misty",
    "Night Fog",
    "Night Heavy Rain",
    "Night Overcast",
    "Night Rain",
    "Night Showers",
    "Night Snow",
    "Night Thunder",
    "Overcast",
    "Partly Cloudy",
    "Rain",
    "Hard Rain",
    "Showers",
    "Sleet",
    "Sleet Showers",
    "Snow",
    "Snow Melt",
    "Snow Showers",
    "Sunny",
    "Thunder Showers",
    "Thunder Showers",
    "Thunderstorms",
    "Tornado Warning",
    "Windy",
    "Stopped Raining",
    "Windy Rain",
];

/// Split a record into tokens on single spaces.
fn parse_fields(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(char(' '), take_till(|c| c == ' ')).parse(input)
}

/// Parse a whole token as a base-10 integer with an optional sign.
///
/// Only ASCII digits are accepted, and values outside `i64` are rejected.
fn parse_integer(input: &str) -> IResult<&str, i64> {
    all_consuming(map_res(recognize((opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>()
    }))
    .parse(input)
}

/// Parse a whole token as a floating point number.
///
/// Besides decimal and exponent forms, accepts `inf`, `infinity` and `nan`
/// in any case with an optional sign.
fn parse_float(input: &str) -> IResult<&str, f64> {
    alt((all_consuming(double), all_consuming(non_finite))).parse(input)
}

fn non_finite(input: &str) -> IResult<&str, f64> {
    map(
        (
            opt(one_of("+-")),
            alt((
                tag_no_case("infinity"),
                tag_no_case("inf"),
                tag_no_case("nan"),
            )),
        ),
        |(sign, keyword): (Option<char>, &str)| {
            let value = if keyword.eq_ignore_ascii_case("nan") {
                f64::NAN
            } else {
                f64::INFINITY
            };
            if sign == Some('-') { -value } else { value }
        },
    )
    .parse(input)
}

/// A decoded clientraw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRaw {
    fields: Vec<String>,
}

impl ClientRaw {
    /// Value the header token must hold for the record to be valid.
    pub const VALID_HEADER_VALUE: &'static str = "12345";

    pub const HEADER: usize = 0;
    pub const AVERAGE_WIND_SPEED_KNOTS: usize = 1;
    pub const GUST_SPEED_KNOTS: usize = 2;
    pub const WIND_DIRECTION_COMPASS_DEGREES: usize = 3;
    pub const OUTDOOR_TEMPERATURE_CELSIUS: usize = 4;
    pub const OUTDOOR_HUMIDITY: usize = 5;
    pub const SURFACE_PRESSURE_HECTOPASCALS: usize = 6;
    pub const DAILY_RAINFALL_MILLIMETRES: usize = 7;
    pub const RAINFALL_RATE_MILLIMETRES_PER_MINUTE: usize = 10;
    pub const INDOOR_TEMPERATURE_CELSIUS: usize = 12;
    pub const INDOOR_HUMIDITY: usize = 13;
    pub const FORECAST: usize = 15;
    pub const HOUR: usize = 29;
    pub const MINUTE: usize = 30;
    pub const WIND_CHILL_CELSIUS: usize = 44;
    pub const HUMIDEX_CELSIUS: usize = 45;
    pub const SURFACE_PRESSURE_TREND: usize = 50;
    pub const DEW_POINT_CELSIUS: usize = 72;
    pub const UV_INDEX: usize = 79;
    pub const HEAT_INDEX_CELSIUS: usize = 112;
    pub const OUTDOOR_TEMPERATURE_TREND: usize = 143;
    pub const OUTDOOR_HUMIDITY_TREND: usize = 144;

    /// Decode a raw record line.
    ///
    /// An empty string produces an empty record with no tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use wdlive::clientraw::ClientRaw;
    ///
    /// let record = ClientRaw::new("12345 11.2 12.3 180 25.4");
    /// assert!(record.is_valid());
    /// assert_eq!(record.wind_direction().unwrap().cardinal_direction(), "S");
    /// assert!(record.outdoor_humidity().is_none());
    /// ```
    pub fn new(raw: &str) -> Self {
        let fields = if raw.is_empty() {
            Vec::new()
        } else {
            match parse_fields(raw) {
                Ok((_, fields)) => fields.into_iter().map(str::to_string).collect(),
                Err(e) => {
                    debug!("Unable to split clientraw record: {:?}", e);
                    Vec::new()
                }
            }
        };

        trace!("Decoded clientraw record with {} fields", fields.len());
        Self { fields }
    }

    /// Number of tokens in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when the header token holds [`Self::VALID_HEADER_VALUE`].
    pub fn is_valid(&self) -> bool {
        match self.header() {
            Some(header) if header == Self::VALID_HEADER_VALUE => true,
            Some(header) => {
                debug!("Rejecting clientraw record with header '{}'", header);
                false
            }
            None => false,
        }
    }

    pub fn header(&self) -> Option<&str> {
        self.field_as_string(Self::HEADER)
    }

    pub fn average_wind_speed(&self) -> Option<WindSpeed> {
        self.field_as_wind_speed(Self::AVERAGE_WIND_SPEED_KNOTS)
    }

    pub fn gust_speed(&self) -> Option<WindSpeed> {
        self.field_as_wind_speed(Self::GUST_SPEED_KNOTS)
    }

    pub fn wind_direction(&self) -> Option<WindDirection> {
        self.field_as_int(Self::WIND_DIRECTION_COMPASS_DEGREES)
            .map(WindDirection::new)
    }

    pub fn outdoor_temperature(&self) -> Option<Temperature> {
        self.field_as_temperature(Self::OUTDOOR_TEMPERATURE_CELSIUS)
    }

    /// Outdoor relative humidity in percent.
    pub fn outdoor_humidity(&self) -> Option<i64> {
        self.field_as_int(Self::OUTDOOR_HUMIDITY)
    }

    pub fn surface_pressure(&self) -> Option<Pressure> {
        self.field_as_float(Self::SURFACE_PRESSURE_HECTOPASCALS)
            .map(Pressure::new)
    }

    pub fn daily_rainfall(&self) -> Option<Rainfall> {
        self.field_as_rainfall(Self::DAILY_RAINFALL_MILLIMETRES)
    }

    /// Rainfall rate, per minute.
    pub fn rainfall_rate(&self) -> Option<Rainfall> {
        self.field_as_rainfall(Self::RAINFALL_RATE_MILLIMETRES_PER_MINUTE)
    }

    pub fn indoor_temperature(&self) -> Option<Temperature> {
        self.field_as_temperature(Self::INDOOR_TEMPERATURE_CELSIUS)
    }

    /// Indoor relative humidity in percent.
    pub fn indoor_humidity(&self) -> Option<i64> {
        self.field_as_int(Self::INDOOR_HUMIDITY)
    }

    /// Forecast name for the icon code in the record.
    ///
    /// Codes outside the forecast table read back as `None`.
    pub fn forecast(&self) -> Option<&'static str> {
        self.field_as_int(Self::FORECAST)
            .and_then(|code| usize::try_from(code).ok())
            .and_then(|code| FORECASTS.get(code).copied())
    }

    pub fn hour(&self) -> Option<i64> {
        self.field_as_int(Self::HOUR)
    }

    pub fn minute(&self) -> Option<i64> {
        self.field_as_int(Self::MINUTE)
    }

    pub fn wind_chill(&self) -> Option<Temperature> {
        self.field_as_temperature(Self::WIND_CHILL_CELSIUS)
    }

    pub fn humidex(&self) -> Option<Temperature> {
        self.field_as_temperature(Self::HUMIDEX_CELSIUS)
    }

    pub fn surface_pressure_trend(&self) -> Option<Trend> {
        self.field_as_trend(Self::SURFACE_PRESSURE_TREND)
    }

    pub fn dew_point(&self) -> Option<Temperature> {
        self.field_as_temperature(Self::DEW_POINT_CELSIUS)
    }

    pub fn uv_index(&self) -> Option<f64> {
        self.field_as_float(Self::UV_INDEX)
    }

    pub fn heat_index(&self) -> Option<Temperature> {
        self.field_as_temperature(Self::HEAT_INDEX_CELSIUS)
    }

    pub fn outdoor_temperature_trend(&self) -> Option<Trend> {
        self.field_as_trend(Self::OUTDOOR_TEMPERATURE_TREND)
    }

    pub fn outdoor_humidity_trend(&self) -> Option<Trend> {
        self.field_as_trend(Self::OUTDOOR_HUMIDITY_TREND)
    }

    fn field_as_rainfall(&self, position: usize) -> Option<Rainfall> {
        self.field_as_float(position).map(Rainfall::new)
    }

    fn field_as_temperature(&self, position: usize) -> Option<Temperature> {
        self.field_as_float(position).map(Temperature::new)
    }

    fn field_as_trend(&self, position: usize) -> Option<Trend> {
        self.field_as_float(position).map(Trend::from_delta)
    }

    fn field_as_wind_speed(&self, position: usize) -> Option<WindSpeed> {
        self.field_as_float(position).map(WindSpeed::new)
    }

    fn field_as_float(&self, position: usize) -> Option<f64> {
        let token = self.field_as_string(position)?;
        parse_float(token.trim()).ok().map(|(_, value)| value)
    }

    fn field_as_int(&self, position: usize) -> Option<i64> {
        let token = self.field_as_string(position)?;
        parse_integer(token.trim()).ok().map(|(_, value)| value)
    }

    fn field_as_string(&self, position: usize) -> Option<&str> {
        self.fields.get(position).map(String::as_str)
    }
}
