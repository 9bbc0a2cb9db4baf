//! Appearance preference: persistence, the requested theme variant and the
//! resolved light/dark decision used to recolor window chrome.
//!
//! `ThemeStore` is the single owner of this state. It holds non-`Send`
//! trait objects, so it stays on the thread that created it.

use crate::types::{AppSettings, Config, SettingsError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod system;
mod variant;

pub use system::error::SystemThemeError;
pub use system::{FixedSystemTheme, SystemTheme, UnsupportedSystemTheme};
pub use variant::{ThemeChoice, ThemeSetting, ThemeVariant, UnknownThemeChoice};

/// Receives the variant the application should request from its toolkit.
pub trait RequestedThemeSink {
    fn request(&mut self, variant: ThemeVariant);
}

impl<F: FnMut(ThemeVariant)> RequestedThemeSink for F {
    fn request(&mut self, variant: ThemeVariant) {
        self(variant)
    }
}

/// Result of `ThemeStore::initialize`.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded,
    Defaulted(DefaultReason),
}

#[derive(Debug)]
pub enum DefaultReason {
    Missing,
    Failed(SettingsError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }
}

/// Result of a mutation. In-memory state is updated either way.
#[must_use]
#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    Unsaved(SettingsError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// How the light/dark decision was reached.
#[derive(Debug)]
pub enum DarkResolution {
    /// Light or Dark was requested explicitly.
    Requested(bool),
    /// System was requested and the OS answered.
    System(bool),
    /// System was requested and the OS query failed; treated as light.
    Fallback(SystemThemeError),
}

impl DarkResolution {
    pub fn is_dark(&self) -> bool {
        match self {
            DarkResolution::Requested(dark) | DarkResolution::System(dark) => *dark,
            DarkResolution::Fallback(_) => false,
        }
    }
}

pub struct ThemeStore {
    settings_path: PathBuf,
    setting: ThemeSetting,
    requested: ThemeVariant,
    system: Box<dyn SystemTheme>,
    sink: Option<Box<dyn RequestedThemeSink>>,
}

impl ThemeStore {
    pub fn new(settings_path: impl Into<PathBuf>, system: Box<dyn SystemTheme>) -> Self {
        Self {
            settings_path: settings_path.into(),
            setting: ThemeSetting::default(),
            requested: ThemeVariant::default(),
            system,
            sink: None,
        }
    }

    /// Store backed by the configured settings file and the platform OS query.
    pub fn open(config: &Config) -> Self {
        Self::new(config.settings_path(), system::platform_default())
    }

    pub fn with_sink(mut self, sink: Box<dyn RequestedThemeSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Loads the persisted setting and requests it. Falls back to System on
    /// any failure; never returns an error.
    pub fn initialize(&mut self) -> LoadOutcome {
        let (settings, outcome) = match AppSettings::load(&self.settings_path) {
            Ok(Some(settings)) => (settings, LoadOutcome::Loaded),
            Ok(None) => (
                AppSettings::default(),
                LoadOutcome::Defaulted(DefaultReason::Missing),
            ),
            Err(err) => {
                warn!(
                    path = %self.settings_path.display(),
                    error = %err,
                    "failed to load settings, using defaults"
                );
                (
                    AppSettings::default(),
                    LoadOutcome::Defaulted(DefaultReason::Failed(err)),
                )
            }
        };

        self.setting = ThemeSetting {
            variant: settings.selected_app_theme.unwrap_or_default(),
            acrylic: settings.acrylic(),
        };
        debug!(choice = %self.setting.choice(), "theme setting loaded");
        self.push(self.setting.requested());
        outcome
    }
}

/// Queries.
impl ThemeStore {
    /// The requested variant, not resolved against the OS.
    pub fn effective_theme(&self) -> ThemeVariant {
        self.requested
    }

    pub fn is_acrylic_mode(&self) -> bool {
        self.setting.acrylic
    }

    pub fn setting(&self) -> ThemeSetting {
        self.setting
    }

    pub fn choice(&self) -> ThemeChoice {
        self.setting.choice()
    }

    /// Resolves the requested variant, querying the OS for System.
    /// Recomputed on every call.
    pub fn resolve_dark(&self) -> DarkResolution {
        match self.requested {
            ThemeVariant::Light => DarkResolution::Requested(false),
            ThemeVariant::Dark => DarkResolution::Requested(true),
            ThemeVariant::System => match self.system.prefers_dark() {
                Ok(dark) => DarkResolution::System(dark),
                Err(err) => {
                    debug!(error = %err, "system theme unavailable, treating as light");
                    DarkResolution::Fallback(err)
                }
            },
        }
    }

    pub fn is_dark_theme(&self) -> bool {
        self.resolve_dark().is_dark()
    }
}

/// Mutations. None of these repaint; callers recolor chrome afterwards.
impl ThemeStore {
    /// Selects Light, Dark or System and clears acrylic mode.
    pub fn set_theme(&mut self, variant: ThemeVariant) -> SaveOutcome {
        self.setting = ThemeSetting {
            variant,
            acrylic: false,
        };
        let outcome = self.persist(|settings| {
            settings.is_acrylic_mode = Some(false);
            settings.selected_app_theme = Some(variant);
        });
        self.push(variant);
        outcome
    }

    /// Enables acrylic mode. The requested variant follows the system so text
    /// color still tracks the OS preference.
    pub fn set_acrylic_mode(&mut self) -> SaveOutcome {
        self.setting.acrylic = true;
        let outcome = self.persist(|settings| settings.is_acrylic_mode = Some(true));
        self.push(ThemeVariant::System);
        outcome
    }

    pub fn apply_choice(&mut self, choice: ThemeChoice) -> SaveOutcome {
        match choice {
            ThemeChoice::Light => self.set_theme(ThemeVariant::Light),
            ThemeChoice::Dark => self.set_theme(ThemeVariant::Dark),
            ThemeChoice::System => self.set_theme(ThemeVariant::System),
            ThemeChoice::Acrylic => self.set_acrylic_mode(),
        }
    }

    /// Switches to the concrete variant opposite the resolved appearance.
    pub fn toggle_theme(&mut self) -> SaveOutcome {
        let target = if self.is_dark_theme() {
            ThemeVariant::Light
        } else {
            ThemeVariant::Dark
        };
        self.set_theme(target)
    }

    fn push(&mut self, variant: ThemeVariant) {
        self.requested = variant;
        if let Some(sink) = self.sink.as_mut() {
            sink.request(variant);
        }
    }

    /// Read-modify-write of the whole settings file. A file that cannot be
    /// read back is left untouched and the change stays in memory only.
    fn persist(&self, update: impl FnOnce(&mut AppSettings)) -> SaveOutcome {
        let mut settings = match AppSettings::load(&self.settings_path) {
            Ok(existing) => existing.unwrap_or_default(),
            Err(err) => {
                warn!(
                    path = %self.settings_path.display(),
                    error = %err,
                    "existing settings unreadable, not saving"
                );
                return SaveOutcome::Unsaved(err);
            }
        };
        update(&mut settings);

        match settings.save(&self.settings_path) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                warn!(
                    path = %self.settings_path.display(),
                    error = %err,
                    "failed to save settings"
                );
                SaveOutcome::Unsaved(err)
            }
        }
    }
}
