use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Theme variant requested from the host toolkit.
///
/// Persisted as `"Light"`, `"Dark"` or `"Default"`; the last one means
/// "follow the operating system".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ThemeVariant {
    Light,
    Dark,
    #[default]
    #[serde(rename = "Default")]
    System,
}

impl ThemeVariant {
    /// Parses a persisted value. Anything unrecognised follows the system.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "Light" => ThemeVariant::Light,
            "Dark" => ThemeVariant::Dark,
            _ => ThemeVariant::System,
        }
    }

    pub fn as_setting(self) -> &'static str {
        match self {
            ThemeVariant::Light => "Light",
            ThemeVariant::Dark => "Dark",
            ThemeVariant::System => "Default",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeVariant::Light => write!(f, "light"),
            ThemeVariant::Dark => write!(f, "dark"),
            ThemeVariant::System => write!(f, "system"),
        }
    }
}

/// The user-facing appearance selection.
///
/// Acrylic is stored as a separate flag but offered as a fifth exclusive choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeChoice {
    Light,
    Dark,
    System,
    Acrylic,
}

impl ThemeChoice {
    /// All choices in the order they are offered.
    pub const ALL: [ThemeChoice; 4] = [
        ThemeChoice::Light,
        ThemeChoice::Dark,
        ThemeChoice::System,
        ThemeChoice::Acrylic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::System => "Follow system setting",
            ThemeChoice::Acrylic => "Acrylic",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }
}

impl From<ThemeVariant> for ThemeChoice {
    fn from(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => ThemeChoice::Light,
            ThemeVariant::Dark => ThemeChoice::Dark,
            ThemeVariant::System => ThemeChoice::System,
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeChoice::Light => write!(f, "light"),
            ThemeChoice::Dark => write!(f, "dark"),
            ThemeChoice::System => write!(f, "system"),
            ThemeChoice::Acrylic => write!(f, "acrylic"),
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = UnknownThemeChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeChoice::Light),
            "dark" => Ok(ThemeChoice::Dark),
            "system" | "default" => Ok(ThemeChoice::System),
            "acrylic" => Ok(ThemeChoice::Acrylic),
            _ => Err(UnknownThemeChoice(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown theme choice: {0}")]
pub struct UnknownThemeChoice(pub String);

/// In-memory form of the two persisted appearance keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSetting {
    pub variant: ThemeVariant,
    pub acrylic: bool,
}

impl ThemeSetting {
    pub fn choice(&self) -> ThemeChoice {
        if self.acrylic {
            ThemeChoice::Acrylic
        } else {
            self.variant.into()
        }
    }

    /// The variant to request from the host. Acrylic always follows the system.
    pub fn requested(&self) -> ThemeVariant {
        if self.acrylic {
            ThemeVariant::System
        } else {
            self.variant
        }
    }
}
