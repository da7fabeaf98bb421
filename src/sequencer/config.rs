//! Sequencer configuration

use chrono::format::{Item, StrftimeItems};

use crate::error::ServerError;

/// Default date column format (`15.03.2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Default time column format (`14:05:09`)
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Sequencer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerConfig {
    /// strftime format for the date column
    pub date_format: String,

    /// strftime format for the time column
    pub time_format: String,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl SequencerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            date_format: std::env::var("QUOTE_DATE_FORMAT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            time_format: std::env::var("QUOTE_TIME_FORMAT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string()),
        }
    }

    /// Reject format strings chrono cannot render
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` naming the offending format.
    pub fn validate(&self) -> Result<(), ServerError> {
        for (name, fmt) in [("date", &self.date_format), ("time", &self.time_format)] {
            if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
                return Err(ServerError::Config(format!(
                    "invalid {name} format: {fmt:?}"
                )));
            }
        }
        Ok(())
    }
}
