//! Mood and energy aggregation.
//!
//! Combines the normalized signal influences into the two headline scores
//! of a profile. Weights are fixed design constants: weather and social
//! sentiment pull mood up, calendar stress acts as a dampener.

use crate::signals::{CalendarEvent, EventCategory, SocialPost, WeatherSample};

const WEATHER_WEIGHT: f64 = 0.4;
const SOCIAL_WEIGHT: f64 = 0.4;
const STRESS_WEIGHT: f64 = 0.2;

const BASELINE_ENERGY: f64 = 0.5;
const SUNNY_BONUS: f64 = 0.2;
const TEMPERATURE_PENALTY: f64 = 0.1;
const BUSY_DAY_PENALTY: f64 = 0.2;
const ACTIVITY_BONUS: f64 = 0.1;

/// Above this temperature the day is too hot to feel energetic.
const HOT_CUTOFF: f64 = 30.0;
/// Below this temperature the day is too cold to feel energetic.
const COLD_CUTOFF: f64 = 5.0;
/// More work events than this makes a busy day.
const BUSY_WORK_EVENTS: usize = 3;
/// More posts than this within the activity window counts as high activity.
const HIGH_ACTIVITY_POSTS: usize = 5;
const ACTIVITY_WINDOW_SECS: i64 = 6 * 60 * 60;

/// Weighted mood score in [-1, 1].
pub fn mood_score(weather_influence: f64, social_sentiment: f64, calendar_stress: f64) -> f64 {
    let weighted = WEATHER_WEIGHT * weather_influence + SOCIAL_WEIGHT * social_sentiment
        - STRESS_WEIGHT * calendar_stress;
    weighted.clamp(-1.0, 1.0)
}

/// Energy level in [0, 1], starting from a 0.5 baseline.
///
/// The hot and cold penalties are evaluated as two independent checks, as
/// are the sunny bonus and the calendar/social adjustments.
pub fn energy_level(
    weather: &WeatherSample,
    events: &[CalendarEvent],
    posts: &[SocialPost],
    now: i64,
) -> f64 {
    let mut energy = BASELINE_ENERGY;

    if weather.condition.to_lowercase().contains("sunny") {
        energy += SUNNY_BONUS;
    }
    if weather.temperature > HOT_CUTOFF {
        energy -= TEMPERATURE_PENALTY;
    }
    if weather.temperature < COLD_CUTOFF {
        energy -= TEMPERATURE_PENALTY;
    }

    let work_events = events
        .iter()
        .filter(|e| e.category == EventCategory::Work)
        .count();
    if work_events > BUSY_WORK_EVENTS {
        energy -= BUSY_DAY_PENALTY;
    }

    let activity_cutoff = now - ACTIVITY_WINDOW_SECS;
    let recent_posts = posts.iter().filter(|p| p.timestamp > activity_cutoff).count();
    if recent_posts > HIGH_ACTIVITY_POSTS {
        energy += ACTIVITY_BONUS;
    }

    energy.clamp(0.0, 1.0)
}
