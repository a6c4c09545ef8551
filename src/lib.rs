//! Moodify Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.
//! The engine turns context signals (weather, calendar, social sentiment)
//! into a mood profile and curates tracks against it; `server` wraps it in a
//! JSON HTTP API.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod playlist;
pub mod providers;
pub mod server;
pub mod signals;

// Re-export commonly used types for convenience
pub use analysis::{MoodAnalyzer, MoodProfile};
pub use playlist::Playlist;
pub use providers::{
    CalendarProvider, CatalogProvider, ProviderError, SocialProvider, WeatherProvider,
};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
