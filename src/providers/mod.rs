//! Provider trait definitions and error taxonomy.
//!
//! These traits abstract the external collaborators the engine consumes:
//! a weather service, a calendar, a social feed, and a track catalog. The
//! orchestrator awaits them sequentially; implementations decide whether
//! the data comes from a real upstream or a simulation.

mod http_weather;
mod memory_catalog;
mod simulated;

pub use http_weather::HttpWeatherProvider;
pub use memory_catalog::InMemoryCatalogProvider;
pub use simulated::{SimulatedWeatherProvider, StaticCalendarProvider, StaticSocialProvider};

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::Track;
use crate::signals::{CalendarEvent, SocialPost, ValidationError, WeatherSample};

/// Errors raised by upstream providers.
///
/// All variants are non-recoverable at the engine level: any provider
/// failure aborts the analysis run and retrying is the caller's decision.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("provider API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("request timeout")]
    Timeout,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions at the user's location.
    async fn current_weather(&self) -> Result<WeatherSample, ProviderError>;

    /// Daily forecast, one sample per day.
    async fn forecast(&self, days: usize) -> Result<Vec<WeatherSample>, ProviderError>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Upcoming events with pre-assigned stress weights.
    async fn upcoming_events(&self) -> Result<Vec<CalendarEvent>, ProviderError>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait SocialProvider: Send + Sync {
    /// Recent posts with pre-assigned sentiment weights.
    async fn recent_posts(&self) -> Result<Vec<SocialPost>, ProviderError>;
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Candidate tracks for the given genres, ranked against the targets.
    async fn search_tracks(
        &self,
        genres: &[String],
        target_mood: f64,
        target_energy: f64,
        limit: usize,
    ) -> Result<Vec<Track>, ProviderError>;

    /// Persist a playlist in the external catalog, returning its id there.
    /// This is the only persistence in the system.
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
        track_ids: &[String],
    ) -> Result<String, ProviderError>;
}
