use crate::theme::ThemeVariant;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User appearance settings, persisted as `settings.json`.
///
/// Both keys are optional on disk. Keys this record does not know about are
/// kept in `other` so a read-modify-write cycle leaves them untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(
        rename = "SelectedAppTheme",
        default,
        deserialize_with = "lenient_variant",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_app_theme: Option<ThemeVariant>,

    #[serde(
        rename = "IsAcrylicMode",
        default,
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_acrylic_mode: Option<bool>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl AppSettings {
    /// Loads settings from a JSON file. Returns `None` if the file doesn't exist.
    /// A leading UTF-8 byte-order mark is ignored.
    pub fn load(path: &Path) -> Result<Option<Self>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // Editors such as Notepad prepend a byte-order mark.
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let settings = serde_json::from_str(content)?;
        Ok(Some(settings))
    }

    /// Saves settings as indented JSON, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    pub fn acrylic(&self) -> bool {
        self.is_acrylic_mode.unwrap_or(false)
    }
}

/// Any string other than `"Light"` or `"Dark"`, or any non-string, reads as System.
fn lenient_variant<'de, D>(deserializer: D) -> Result<Option<ThemeVariant>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        Value::String(s) => ThemeVariant::from_setting(&s),
        _ => ThemeVariant::System,
    }))
}

/// Only a literal JSON `true` enables the flag.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|value| matches!(value, Value::Bool(true))))
}

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
