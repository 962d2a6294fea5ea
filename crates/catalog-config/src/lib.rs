pub mod config;
pub mod paths;
pub mod session;

pub use config::{AppConfig, CatalogOptions, LatencyOptions, SearchOptions};
pub use paths::PathManager;
pub use session::SessionState;
