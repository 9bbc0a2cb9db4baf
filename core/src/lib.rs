//! Appearance and navigation core for the sast desktop shell.
//!
//! The host toolkit supplies rendering; this crate owns the state behind it:
//! - [`theme::ThemeStore`]: persisted Light/Dark/System/Acrylic preference
//!   and the resolved light/dark decision.
//! - [`navigation::Navigator`]: one display surface plus a back history.
//! - [`pages`]: the page models and the factory that builds them.
//! - [`shell::Shell`]: routes user actions to the two and recolors chrome.
//!
//! Everything here runs on the UI thread; the stateful types are `!Send`.

pub mod friends;
pub mod navigation;
pub mod pages;
pub mod shell;
pub mod theme;
pub mod types;
