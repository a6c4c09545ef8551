mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub weather_url: Option<String>,
    pub weather_timeout_sec: u64,
    pub catalog_latency_ms: u64,
    pub playlist_limit: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    /// Base URL of a real weather service; simulated weather when unset.
    pub weather_url: Option<String>,
    pub weather_timeout_sec: u64,
    /// Mean simulated latency of the in-memory catalog; 0 disables it.
    pub catalog_latency_ms: u64,
    /// Default number of tracks per generated playlist.
    pub playlist_limit: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {}", s),
            },
            None => cli.logging_level.clone(),
        };

        let weather_url = file.weather_url.or_else(|| cli.weather_url.clone());
        let weather_timeout_sec = file.weather_timeout_sec.unwrap_or(cli.weather_timeout_sec);
        let catalog_latency_ms = file.catalog_latency_ms.unwrap_or(cli.catalog_latency_ms);

        let playlist_limit = file.playlist_limit.unwrap_or(cli.playlist_limit);
        if playlist_limit == 0 {
            bail!("playlist_limit must be at least 1");
        }

        Ok(Self {
            port,
            logging_level,
            weather_url,
            weather_timeout_sec,
            catalog_latency_ms,
            playlist_limit,
        })
    }
}

/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
