//! Context signal records and normalizers.
//!
//! Each normalizer reduces one raw signal collection to a single bounded
//! influence scalar. They are pure and total over well-formed input: empty
//! collections contribute zero influence, and every result is clamped to
//! its declared range.

mod calendar;
mod models;
mod social;
mod weather;

pub use calendar::{calendar_stress, NEAR_TERM_WINDOW_SECS};
pub use models::*;
pub use social::{social_sentiment, SENTIMENT_WINDOW_SECS};
pub use weather::weather_influence;
