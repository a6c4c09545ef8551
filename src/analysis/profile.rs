use serde::{Deserialize, Serialize};

/// The result of one analysis run.
///
/// A profile is created once per run and never mutated; regenerating
/// produces a new profile with a fresh id. It is owned by the caller that
/// requested the analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoodProfile {
    pub id: String,
    pub user_id: String,
    /// Aggregate mood in [-1, 1]; negative means low mood.
    pub mood_score: f64,
    /// Aggregate arousal in [0, 1].
    pub energy_level: f64,
    /// Normalized weather influence in [-1, 1].
    pub weather_influence: f64,
    /// Normalized social sentiment in [-1, 1].
    pub social_sentiment: f64,
    /// Normalized calendar stress in [0, 1].
    pub calendar_stress: f64,
    /// Ordered, unique, at most five entries.
    pub recommended_genres: Vec<String>,
    /// Unix seconds.
    pub analysis_timestamp: i64,
}
