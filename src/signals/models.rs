use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a provider hands the core a malformed signal record.
///
/// The pure scoring pipeline never validates (it clamps); these checks live
/// at the provider boundary so bad upstream payloads are rejected before
/// they enter an analysis run.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Free-text condition label, e.g. "partly cloudy".
    pub condition: String,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Atmospheric pressure in hPa.
    pub pressure: f64,
    pub location: String,
}

impl WeatherSample {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.condition.is_empty() {
            return Err(ValidationError::MissingField("condition"));
        }
        if !self.temperature.is_finite() {
            return Err(ValidationError::OutOfRange {
                field: "temperature",
                value: self.temperature,
            });
        }
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(ValidationError::OutOfRange {
                field: "humidity",
                value: self.humidity,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Work,
    Personal,
    Social,
    Other,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    /// Unix seconds.
    pub start_time: i64,
    /// Unix seconds.
    pub end_time: i64,
    pub category: EventCategory,
    /// Pre-assigned by the calendar provider, in [0, 1].
    pub stress_level: f64,
}

impl CalendarEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        if !(0.0..=1.0).contains(&self.stress_level) {
            return Err(ValidationError::OutOfRange {
                field: "stress_level",
                value: self.stress_level,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    Facebook,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: String,
    pub platform: SocialPlatform,
    pub content: String,
    /// Pre-assigned by the social provider, in [-1, 1].
    pub sentiment_score: f64,
    /// Unix seconds.
    pub timestamp: i64,
}

impl SocialPost {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        if !(-1.0..=1.0).contains(&self.sentiment_score) {
            return Err(ValidationError::OutOfRange {
                field: "sentiment_score",
                value: self.sentiment_score,
            });
        }
        Ok(())
    }
}
