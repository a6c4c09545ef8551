use super::RequestsLoggingLevel;

/// Settings the HTTP layer needs at request time.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
    /// Default number of tracks per generated playlist.
    pub playlist_limit: usize,
}
