use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moodify_server::analysis::MoodAnalyzer;
use moodify_server::config::{AppConfig, CliConfig, FileConfig};
use moodify_server::providers::{
    CalendarProvider, HttpWeatherProvider, InMemoryCatalogProvider, SimulatedWeatherProvider,
    SocialProvider, StaticCalendarProvider, StaticSocialProvider, WeatherProvider,
};
use moodify_server::server::state::ServerState;
use moodify_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to an optional TOML config file; its values override CLI flags.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Base URL of a weather service; simulated weather when omitted.
    #[clap(long)]
    pub weather_url: Option<String>,

    /// Timeout in seconds for weather service requests.
    #[clap(long, default_value_t = 10)]
    pub weather_timeout_sec: u64,

    /// Mean simulated latency of the in-memory catalog in milliseconds.
    #[clap(long, default_value_t = 0)]
    pub catalog_latency_ms: u64,

    /// Default number of tracks per generated playlist.
    #[clap(long, default_value_t = 15)]
    pub playlist_limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        weather_url: cli_args.weather_url,
        weather_timeout_sec: cli_args.weather_timeout_sec,
        catalog_latency_ms: cli_args.catalog_latency_ms,
        playlist_limit: cli_args.playlist_limit,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let weather: Arc<dyn WeatherProvider> = match &config.weather_url {
        Some(url) => {
            info!("Weather service configured at {}", url);
            Arc::new(HttpWeatherProvider::new(
                url.clone(),
                config.weather_timeout_sec,
            ))
        }
        None => {
            info!("No weather service configured, simulating weather");
            Arc::new(SimulatedWeatherProvider::new())
        }
    };
    let calendar: Arc<dyn CalendarProvider> = Arc::new(StaticCalendarProvider::sample());
    let social: Arc<dyn SocialProvider> = Arc::new(StaticSocialProvider::sample());

    let catalog = InMemoryCatalogProvider::with_sample_catalog()
        .with_latency_ms(config.catalog_latency_ms);
    info!("Catalog ready with {} tracks", catalog.track_count());

    let analyzer = Arc::new(MoodAnalyzer::new(
        weather.clone(),
        calendar,
        social,
    ));

    let state = ServerState {
        config: ServerConfig {
            port: config.port,
            requests_logging_level: config.logging_level,
            playlist_limit: config.playlist_limit,
        },
        start_time: Instant::now(),
        hash: env!("GIT_HASH").to_string(),
        analyzer,
        weather,
        catalog: Arc::new(catalog),
    };

    info!("Ready to serve at port {}!", state.config.port);
    run_server(state).await.context("Server terminated")
}
