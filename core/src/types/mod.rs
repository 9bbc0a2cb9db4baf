pub mod config;
pub use config::{AppSettings, Config, ConfigError, SettingsError};
