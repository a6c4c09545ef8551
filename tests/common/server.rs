//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers. Each
//! test gets an isolated server with deterministic providers: a fixed
//! weather report, the sample calendar/social fixtures, and the seeded
//! sample catalog.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use moodify_server::analysis::MoodAnalyzer;
use moodify_server::providers::{
    InMemoryCatalogProvider, ProviderError, StaticCalendarProvider, StaticSocialProvider,
    WeatherProvider,
};
use moodify_server::server::state::ServerState;
use moodify_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use moodify_server::signals::WeatherSample;

use super::constants::*;

/// Weather provider returning the same comfortable sunny day every time.
struct FixedWeatherProvider;

#[async_trait]
impl WeatherProvider for FixedWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherSample, ProviderError> {
        Ok(WeatherSample {
            temperature: FIXED_TEMPERATURE,
            condition: FIXED_CONDITION.to_string(),
            humidity: 50.0,
            pressure: 1013.0,
            location: "Test City".to_string(),
        })
    }

    async fn forecast(&self, days: usize) -> Result<Vec<WeatherSample>, ProviderError> {
        let mut forecast = Vec::with_capacity(days);
        for day in 0..days {
            forecast.push(WeatherSample {
                temperature: FIXED_TEMPERATURE + day as f64,
                condition: FIXED_CONDITION.to_string(),
                humidity: 50.0,
                pressure: 1013.0,
                location: "Test City".to_string(),
            });
        }
        Ok(forecast)
    }
}

/// Weather provider that always fails, for provider-error paths.
struct UnreachableWeatherProvider;

#[async_trait]
impl WeatherProvider for UnreachableWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherSample, ProviderError> {
        Err(ProviderError::Connection(
            "weather service unreachable".to_string(),
        ))
    }

    async fn forecast(&self, _days: usize) -> Result<Vec<WeatherSample>, ProviderError> {
        Err(ProviderError::Timeout)
    }
}

/// Test server instance on an ephemeral port.
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a test server with deterministic, always-healthy providers.
    pub async fn spawn() -> Self {
        Self::spawn_with_weather(Arc::new(FixedWeatherProvider)).await
    }

    /// Spawns a test server whose weather provider always fails.
    pub async fn spawn_with_unreachable_weather() -> Self {
        Self::spawn_with_weather(Arc::new(UnreachableWeatherProvider)).await
    }

    async fn spawn_with_weather(weather: Arc<dyn WeatherProvider>) -> Self {
        let calendar = Arc::new(StaticCalendarProvider::sample());
        let social = Arc::new(StaticSocialProvider::sample());
        let catalog = Arc::new(InMemoryCatalogProvider::with_sample_catalog().with_seed(7));

        let analyzer = Arc::new(MoodAnalyzer::new(weather.clone(), calendar, social));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let state = ServerState {
            config: ServerConfig {
                port,
                requests_logging_level: RequestsLoggingLevel::None,
                playlist_limit: 15,
            },
            start_time: Instant::now(),
            hash: "test".to_string(),
            analyzer,
            weather,
            catalog,
        };

        let app = make_app(state);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    async fn wait_for_ready(&self) {
        let client = reqwest::Client::new();
        let url = format!("{}/health", self.base_url);
        let deadline = Instant::now() + Duration::from_secs(5);

        loop {
            if let Ok(response) = client.get(&url).send().await {
                if response.status().is_success() {
                    return;
                }
            }
            assert!(
                Instant::now() < deadline,
                "Test server did not become ready in time"
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}
