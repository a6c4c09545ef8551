mod analysis_routes;
pub mod config;
mod playlist_routes;
mod requests_logging;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use requests_logging::RequestsLoggingLevel;
pub use server::{make_app, run_server};
