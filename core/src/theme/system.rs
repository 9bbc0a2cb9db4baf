//! Operating system dark-mode detection.

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum SystemThemeError {
        #[error("system theme detection is not supported on this platform")]
        Unsupported,

        #[cfg(windows)]
        #[error("registry query failed: {0}")]
        Registry(#[from] windows::core::Error),
    }
}

use error::SystemThemeError;

/// Source of the operating system's dark-mode preference.
pub trait SystemTheme {
    fn prefers_dark(&self) -> Result<bool, SystemThemeError>;
}

/// Returns the detector for the current platform.
pub fn platform_default() -> Box<dyn SystemTheme> {
    #[cfg(windows)]
    {
        Box::new(WindowsRegistryTheme)
    }
    #[cfg(not(windows))]
    {
        Box::new(UnsupportedSystemTheme)
    }
}

/// Used where no OS query is implemented. Always reports `Unsupported`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedSystemTheme;

impl SystemTheme for UnsupportedSystemTheme {
    fn prefers_dark(&self) -> Result<bool, SystemThemeError> {
        Err(SystemThemeError::Unsupported)
    }
}

/// A preference supplied by the host, e.g. from its own theme-change events.
#[derive(Clone, Copy, Debug)]
pub struct FixedSystemTheme {
    pub dark: bool,
}

impl SystemTheme for FixedSystemTheme {
    fn prefers_dark(&self) -> Result<bool, SystemThemeError> {
        Ok(self.dark)
    }
}

#[cfg(windows)]
pub use windows_registry::WindowsRegistryTheme;

#[cfg(windows)]
mod windows_registry {
    use super::SystemTheme;
    use super::error::SystemThemeError;
    use std::ffi::c_void;
    use windows::Win32::System::Registry::{HKEY_CURRENT_USER, RRF_RT_REG_DWORD, RegGetValueW};
    use windows::core::w;

    /// Reads `AppsUseLightTheme` from the current user's personalization key.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WindowsRegistryTheme;

    impl SystemTheme for WindowsRegistryTheme {
        fn prefers_dark(&self) -> Result<bool, SystemThemeError> {
            let mut value: u32 = 0;
            let mut size = size_of::<u32>() as u32;

            // SAFETY: `value` and `size` outlive the call and `size` matches the buffer.
            unsafe {
                RegGetValueW(
                    HKEY_CURRENT_USER,
                    w!(r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize"),
                    w!("AppsUseLightTheme"),
                    RRF_RT_REG_DWORD,
                    None,
                    Some(&mut value as *mut u32 as *mut c_void),
                    Some(&mut size as *mut u32),
                )
            }
            .ok()?;

            // 0 = apps use the dark theme
            Ok(value == 0)
        }
    }
}
