use sast_core::theme::{
    FixedSystemTheme, SystemTheme, ThemeChoice, ThemeStore, ThemeVariant, UnsupportedSystemTheme,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn settings_path(temp: &TempDir) -> PathBuf {
    temp.path().join("SastCSharpTest").join("settings.json")
}

/// A fresh store over the same file, as after a process restart.
fn restart(path: &Path, system: Box<dyn SystemTheme>) -> ThemeStore {
    let mut store = ThemeStore::new(path, system);
    store.initialize();
    store
}

/// Verify every variant survives a restart and clears acrylic mode.
#[test]
fn test_set_theme_survives_restart() {
    let temp = TempDir::new().unwrap();
    let path = settings_path(&temp);

    for variant in [ThemeVariant::Light, ThemeVariant::Dark, ThemeVariant::System] {
        let mut store = restart(&path, Box::new(UnsupportedSystemTheme));
        let _ = store.set_acrylic_mode();
        assert!(store.set_theme(variant).is_saved());

        let reloaded = restart(&path, Box::new(UnsupportedSystemTheme));
        assert_eq!(reloaded.effective_theme(), variant);
        assert!(!reloaded.is_acrylic_mode());
    }
}

/// Verify acrylic mode survives a restart and requests the system variant.
#[test]
fn test_acrylic_survives_restart() {
    let temp = TempDir::new().unwrap();
    let path = settings_path(&temp);
    let mut store = restart(&path, Box::new(UnsupportedSystemTheme));
    let _ = store.set_theme(ThemeVariant::Dark);

    let _ = store.set_acrylic_mode();

    let reloaded = restart(&path, Box::new(UnsupportedSystemTheme));
    assert!(reloaded.is_acrylic_mode());
    assert_eq!(reloaded.effective_theme(), ThemeVariant::System);
    assert_eq!(reloaded.choice(), ThemeChoice::Acrylic);
}

/// Verify toggling lands on the opposite concrete variant and back.
#[test]
fn test_toggle_flips_and_returns() {
    let temp = TempDir::new().unwrap();
    let mut store = restart(&settings_path(&temp), Box::new(UnsupportedSystemTheme));
    let _ = store.set_theme(ThemeVariant::Dark);

    let _ = store.toggle_theme();
    assert_eq!(store.effective_theme(), ThemeVariant::Light);
    assert!(!store.is_dark_theme());

    let _ = store.toggle_theme();
    assert_eq!(store.effective_theme(), ThemeVariant::Dark);
    assert!(store.is_dark_theme());
}

/// Verify a corrupt settings file falls back to the system variant.
#[test]
fn test_invalid_json_defaults_to_system() {
    let temp = TempDir::new().unwrap();
    let path = settings_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "this is not json").unwrap();

    let store = restart(&path, Box::new(FixedSystemTheme { dark: false }));

    assert_eq!(store.effective_theme(), ThemeVariant::System);
}

/// Verify a stored Dark preference resolves as dark.
#[test]
fn test_stored_dark_is_dark() {
    let temp = TempDir::new().unwrap();
    let path = settings_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"SelectedAppTheme":"Dark"}"#).unwrap();

    let store = restart(&path, Box::new(UnsupportedSystemTheme));

    assert!(store.is_dark_theme());
}

/// Verify no settings file and no OS query resolves as light.
#[test]
fn test_no_file_no_os_query_is_light() {
    let temp = TempDir::new().unwrap();

    let store = restart(&settings_path(&temp), Box::new(UnsupportedSystemTheme));

    assert!(!store.is_dark_theme());
    assert!(!settings_path(&temp).exists());
}
