//! Simulated providers used when no real upstream is configured.
//!
//! The weather simulation derives plausible conditions from the local time
//! of day; calendar and social providers serve fixed sample data shifted
//! relative to the current time so the near-term windows see them.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Timelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::signals::{
    CalendarEvent, EventCategory, SocialPlatform, SocialPost, WeatherSample,
};

use super::{CalendarProvider, ProviderError, SocialProvider, WeatherProvider};

const CURRENT_CONDITIONS: [&str; 5] = ["sunny", "partly cloudy", "cloudy", "light rain", "clear"];
const FORECAST_CONDITIONS: [&str; 4] = ["sunny", "partly cloudy", "cloudy", "light rain"];

/// Nights are cooler by this many degrees.
const NIGHT_COOLING: f64 = 5.0;

pub struct SimulatedWeatherProvider {
    rng: Mutex<StdRng>,
}

impl SimulatedWeatherProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn sample(&self, hour: u32) -> WeatherSample {
        let mut rng = self.rng.lock().unwrap();

        let mut temperature = 15.0 + rng.random_range(0.0..20.0);
        if !(6..=20).contains(&hour) {
            temperature -= NIGHT_COOLING;
        }

        let condition = CURRENT_CONDITIONS[rng.random_range(0..CURRENT_CONDITIONS.len())];
        WeatherSample {
            temperature: temperature.round(),
            condition: condition.to_string(),
            humidity: (40.0_f64 + rng.random_range(0.0..40.0)).round(),
            pressure: (1000.0_f64 + rng.random_range(0.0..50.0)).round(),
            location: "Current Location".to_string(),
        }
    }
}

impl Default for SimulatedWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for SimulatedWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherSample, ProviderError> {
        Ok(self.sample(chrono::Local::now().hour()))
    }

    async fn forecast(&self, days: usize) -> Result<Vec<WeatherSample>, ProviderError> {
        let mut rng = self.rng.lock().unwrap();
        let base_temperature = 20.0_f64;

        let forecast = (0..days)
            .map(|_| WeatherSample {
                temperature: (base_temperature + rng.random_range(-5.0..5.0)).round(),
                condition: FORECAST_CONDITIONS[rng.random_range(0..FORECAST_CONDITIONS.len())]
                    .to_string(),
                humidity: (40.0_f64 + rng.random_range(0.0..40.0)).round(),
                pressure: (1000.0_f64 + rng.random_range(0.0..50.0)).round(),
                location: "Current Location".to_string(),
            })
            .collect();
        Ok(forecast)
    }
}

/// Calendar provider serving a fixed set of events.
pub struct StaticCalendarProvider {
    events: Vec<CalendarEvent>,
}

impl StaticCalendarProvider {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    /// The sample agenda: a stressful work meeting in two hours and a
    /// relaxed social lunch later on.
    pub fn sample() -> Self {
        let now = chrono::Utc::now().timestamp();
        Self::new(vec![
            CalendarEvent {
                id: "evt-1".to_string(),
                title: "Team Meeting".to_string(),
                start_time: now + 2 * 3600,
                end_time: now + 3 * 3600,
                category: EventCategory::Work,
                stress_level: 0.6,
            },
            // Comfortably past the near-term stress window.
            CalendarEvent {
                id: "evt-2".to_string(),
                title: "Lunch with Friends".to_string(),
                start_time: now + 5 * 3600,
                end_time: now + 6 * 3600,
                category: EventCategory::Social,
                stress_level: 0.1,
            },
        ])
    }
}

#[async_trait]
impl CalendarProvider for StaticCalendarProvider {
    async fn upcoming_events(&self) -> Result<Vec<CalendarEvent>, ProviderError> {
        Ok(self.events.clone())
    }
}

/// Social provider serving a fixed set of posts.
pub struct StaticSocialProvider {
    posts: Vec<SocialPost>,
}

impl StaticSocialProvider {
    pub fn new(posts: Vec<SocialPost>) -> Self {
        Self { posts }
    }

    pub fn sample() -> Self {
        let now = chrono::Utc::now().timestamp();
        Self::new(vec![
            SocialPost {
                id: "post-1".to_string(),
                platform: SocialPlatform::Twitter,
                content: "Having a great day! ☀️".to_string(),
                sentiment_score: 0.8,
                timestamp: now - 2 * 3600,
            },
            SocialPost {
                id: "post-2".to_string(),
                platform: SocialPlatform::Twitter,
                content: "Work is challenging but rewarding".to_string(),
                sentiment_score: 0.3,
                timestamp: now - 4 * 3600,
            },
        ])
    }
}

#[async_trait]
impl SocialProvider for StaticSocialProvider {
    async fn recent_posts(&self) -> Result<Vec<SocialPost>, ProviderError> {
        Ok(self.posts.clone())
    }
}
