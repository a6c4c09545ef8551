//! Analysis orchestrator.
//!
//! Sequences the provider fetches, runs the scoring pipeline, and assembles
//! the resulting profile. Provider calls are issued one at a time; any
//! failure aborts the whole run with no partial profile, and retrying is
//! left to the caller.

use std::sync::Arc;

use tracing::{debug, info};

use crate::providers::{CalendarProvider, ProviderError, SocialProvider, WeatherProvider};
use crate::signals::{
    calendar_stress, social_sentiment, weather_influence, CalendarEvent, SocialPost, WeatherSample,
};

use super::aggregator::{energy_level, mood_score};
use super::genres::recommend_genres;
use super::profile::MoodProfile;

pub struct MoodAnalyzer {
    weather: Arc<dyn WeatherProvider>,
    calendar: Arc<dyn CalendarProvider>,
    social: Arc<dyn SocialProvider>,
}

impl MoodAnalyzer {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        calendar: Arc<dyn CalendarProvider>,
        social: Arc<dyn SocialProvider>,
    ) -> Self {
        Self {
            weather,
            calendar,
            social,
        }
    }

    /// Run one full analysis for `user_id` and return a fresh profile.
    pub async fn analyze(&self, user_id: &str) -> Result<MoodProfile, ProviderError> {
        let weather = self.weather.current_weather().await?;
        debug!(
            "Weather for analysis: {:.1}C, {}",
            weather.temperature, weather.condition
        );

        let events = self.calendar.upcoming_events().await?;
        let posts = self.social.recent_posts().await?;
        debug!(
            "Fetched {} calendar events and {} social posts",
            events.len(),
            posts.len()
        );

        let now = chrono::Utc::now().timestamp();
        let profile = assemble(user_id, &weather, &events, &posts, now);
        info!(
            "Analysis {} for user {}: mood {:.2}, energy {:.2}, genres {:?}",
            profile.id, user_id, profile.mood_score, profile.energy_level,
            profile.recommended_genres
        );
        Ok(profile)
    }
}

/// Pure tail of the pipeline: normalize, aggregate, recommend, assemble.
fn assemble(
    user_id: &str,
    weather: &WeatherSample,
    events: &[CalendarEvent],
    posts: &[SocialPost],
    now: i64,
) -> MoodProfile {
    let weather_influence = weather_influence(weather);
    let calendar_stress = calendar_stress(events, now);
    let social_sentiment = social_sentiment(posts, now);

    let mood_score = mood_score(weather_influence, social_sentiment, calendar_stress);
    let energy_level = energy_level(weather, events, posts, now);
    let recommended_genres = recommend_genres(mood_score, energy_level, weather_influence);

    MoodProfile {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        mood_score,
        energy_level,
        weather_influence,
        social_sentiment,
        calendar_stress,
        recommended_genres,
        analysis_timestamp: now,
    }
}
