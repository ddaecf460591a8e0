//! Chooses what the display shows for the latest record.
//!
//! A weather item is only composed for a valid record. Otherwise the display
//! shows a fixed status message explaining why there is nothing to show.

use tracing::{debug, warn};

use crate::clientraw::ClientRaw;
use crate::items::WeatherItem;
use crate::settings::Settings;

/// What the display should show for a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    /// No record could be obtained.
    Unavailable,
    /// The record had no content.
    Empty,
    /// The record header did not validate.
    Invalid,
    /// A valid record to compose a weather item from.
    Weather(&'a ClientRaw),
}

impl<'a> Screen<'a> {
    /// Classify the latest record, or `None` if fetching it failed.
    pub fn classify(record: Option<&'a ClientRaw>) -> Self {
        match record {
            None => {
                warn!("Clientraw record unavailable");
                Screen::Unavailable
            }
            Some(record) if record.is_empty() => {
                debug!("Clientraw record is empty");
                Screen::Empty
            }
            Some(record) if !record.is_valid() => {
                warn!("Clientraw record has an invalid header");
                Screen::Invalid
            }
            Some(record) => Screen::Weather(record),
        }
    }

    /// Render the screen using the current settings.
    pub fn render(&self, settings: &Settings) -> WeatherItem {
        match self {
            Screen::Unavailable => WeatherItem::new("CLIENTRAW IS", "UNAVAILABLE"),
            Screen::Empty => WeatherItem::new("CLIENTRAW IS", "EMPTY"),
            Screen::Invalid => WeatherItem::new("CLIENTRAW IS", "INVALID"),
            Screen::Weather(record) => WeatherItem::compose(record, settings),
        }
    }
}
