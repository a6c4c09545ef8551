//! The mood-inference pipeline: aggregation, genre rules, orchestration.

mod aggregator;
mod analyzer;
mod genres;
mod profile;

pub use aggregator::{energy_level, mood_score};
pub use analyzer::MoodAnalyzer;
pub use genres::{recommend_genres, MAX_GENRES};
pub use profile::MoodProfile;
