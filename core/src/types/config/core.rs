use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name under the per-user data root that holds `settings.json`.
pub const APP_DATA_DIR_NAME: &str = "SastCSharpTest";

/// Friend directory location relative to the application directory.
pub const FRIENDS_FILE: &str = "res/data.json";

/// Overrides the per-user data root.
pub const DATA_DIR_ENV: &str = "SAST_DATA_DIR";

/// Overrides the bundled resource directory.
pub const APP_DIR_ENV: &str = "SAST_APP_DIR";

/// Filesystem locations the application works against.
#[derive(Clone, Debug)]
pub struct Config {
    /// Per-user application data root (ApplicationData on Windows).
    pub data_dir: PathBuf,
    /// Directory holding bundled resources (`res/`, portraits).
    pub app_dir: PathBuf,
}

impl Config {
    /// Resolves directories from the environment, falling back to the
    /// platform config directory and the executable's directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }

    /// Like `from_env`, but explicit directories win over the environment and
    /// skip the platform lookup entirely.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        app_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let data_dir = match data_dir.or_else(|| env_dir(DATA_DIR_ENV)) {
            Some(dir) => dir,
            None => dirs::config_dir().ok_or(ConfigError::NoDataDir)?,
        };

        let app_dir = match app_dir.or_else(|| env_dir(APP_DIR_ENV)) {
            Some(dir) => dir,
            None => {
                let exe = std::env::current_exe()?;
                exe.parent()
                    .map(Path::to_path_buf)
                    .ok_or(ConfigError::NoAppDir)?
            }
        };

        Ok(Self { data_dir, app_dir })
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(APP_DATA_DIR_NAME).join("settings.json")
    }

    pub fn friends_path(&self) -> PathBuf {
        self.app_dir.join(FRIENDS_FILE)
    }

    /// Resolves a path from a bundled data file against the application directory.
    pub fn resolve_asset(&self, relative: &str) -> PathBuf {
        self.app_dir.join(relative)
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var).map(PathBuf::from)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no per-user data directory available")]
    NoDataDir,

    #[error("executable has no parent directory")]
    NoAppDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
