//! A ring cursor over a fixed, non-empty list of choices.

use thiserror::Error;

/// Errors raised while building settings selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Cycles through a list of items, wrapping at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cyclical<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> Cyclical<T> {
    /// Create a selector positioned on the first item.
    ///
    /// Fails if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, SettingsError> {
        if items.is_empty() {
            return Err(SettingsError::InvalidConfiguration(
                "items must contain at least one item",
            ));
        }
        Ok(Self { items, current: 0 })
    }

    /// Like [`Cyclical::new`], but also rejects a missing list.
    pub fn try_from_option(items: Option<Vec<T>>) -> Result<Self, SettingsError> {
        match items {
            Some(items) => Self::new(items),
            None => Err(SettingsError::InvalidConfiguration("items cannot be missing")),
        }
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.items.len();
    }

    pub fn retreat(&mut self) {
        self.current = match self.current {
            0 => self.items.len() - 1,
            n => n - 1,
        };
    }

    /// Number of items in the cycle.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A constructed cycle is never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
