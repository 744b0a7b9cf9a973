/// Application settings loaded from the environment or a TOML file
pub mod app;

/// Database configuration and connection management
pub mod database;

pub use app::{AppConfig, load_app_configuration};
