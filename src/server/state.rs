use axum::extract::FromRef;

use std::sync::Arc;
use std::time::Instant;

use crate::analysis::MoodAnalyzer;
use crate::providers::{CatalogProvider, WeatherProvider};

use super::ServerConfig;

pub type SharedAnalyzer = Arc<MoodAnalyzer>;
pub type SharedWeatherProvider = Arc<dyn WeatherProvider>;
pub type SharedCatalogProvider = Arc<dyn CatalogProvider>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub hash: String,
    pub analyzer: SharedAnalyzer,
    pub weather: SharedWeatherProvider,
    pub catalog: SharedCatalogProvider,
}

impl FromRef<ServerState> for SharedAnalyzer {
    fn from_ref(input: &ServerState) -> Self {
        input.analyzer.clone()
    }
}

impl FromRef<ServerState> for SharedWeatherProvider {
    fn from_ref(input: &ServerState) -> Self {
        input.weather.clone()
    }
}

impl FromRef<ServerState> for SharedCatalogProvider {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
