mod app;
mod core;

pub use app::{AppSettings, SettingsError};
pub use core::{
    APP_DATA_DIR_NAME, APP_DIR_ENV, Config, ConfigError, DATA_DIR_ENV, FRIENDS_FILE,
};
