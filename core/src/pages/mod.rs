//! The application's pages and the factory that builds them.
//!
//! Pages hold only their own view state. Anything that needs a service (theme
//! changes, navigation) is returned as a `PageRequest` for the shell to carry out.

use crate::navigation::PageFactory;
use crate::theme::ThemeChoice;
use crate::types::Config;
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

mod friend;
mod more_info;
mod settings;

pub use friend::{FriendLayout, FriendPage, GridLength, WIDE_LAYOUT_MIN_WIDTH};
pub use more_info::{ABOUT_LINKS, Link, LinkError, MoreInfoPage, browser_command};
pub use settings::SettingsPage;

pub mod error {
    use crate::friends::error::FriendError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum PageError {
        #[error("friend directory unavailable: {0}")]
        Friends(#[from] FriendError),
    }

    #[derive(Debug, Error)]
    #[error("unknown page: {0}")]
    pub struct UnknownPage(pub String);
}

use error::{PageError, UnknownPage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Welcome,
    Friend,
    Settings,
    MoreInfo,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Welcome,
        PageId::Friend,
        PageId::Settings,
        PageId::MoreInfo,
    ];

    /// The tag carried by navigation buttons.
    pub fn tag(self) -> &'static str {
        match self {
            PageId::Welcome => "WelcomeView",
            PageId::Friend => "FriendView",
            PageId::Settings => "SettingsView",
            PageId::MoreInfo => "MoreInfoView",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.tag() == tag)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Welcome => write!(f, "welcome"),
            PageId::Friend => write!(f, "friend"),
            PageId::Settings => write!(f, "settings"),
            PageId::MoreInfo => write!(f, "more-info"),
        }
    }
}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.to_string() == s.to_ascii_lowercase() || id.tag() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Style class selected by pages that restyle themselves on theme changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeClass {
    Light,
    Dark,
}

impl ThemeClass {
    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeClass::Dark } else { ThemeClass::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeClass::Light => "LightTheme",
            ThemeClass::Dark => "DarkTheme",
        }
    }
}

/// Work a page asks the shell to do on its behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequest {
    Navigate(PageId),
    ApplyTheme(ThemeChoice),
}

#[derive(Debug)]
pub struct WelcomePage {
    theme_class: ThemeClass,
}

impl WelcomePage {
    pub fn new(dark: bool) -> Self {
        Self {
            theme_class: ThemeClass::from_dark(dark),
        }
    }

    pub fn theme_class(&self) -> ThemeClass {
        self.theme_class
    }

    /// The large "more info" button.
    pub fn more_info(&self) -> PageRequest {
        PageRequest::Navigate(PageId::MoreInfo)
    }
}

#[derive(Debug)]
pub enum Page {
    Welcome(WelcomePage),
    Friend(FriendPage),
    Settings(SettingsPage),
    MoreInfo(MoreInfoPage),
}

impl Page {
    pub fn id(&self) -> PageId {
        match self {
            Page::Welcome(_) => PageId::Welcome,
            Page::Friend(_) => PageId::Friend,
            Page::Settings(_) => PageId::Settings,
            Page::MoreInfo(_) => PageId::MoreInfo,
        }
    }

    /// Restyles the page after the resolved appearance changed.
    pub fn apply_appearance(&mut self, dark: bool) {
        match self {
            Page::Welcome(page) => page.theme_class = ThemeClass::from_dark(dark),
            Page::Settings(page) => page.apply_appearance(dark),
            Page::Friend(_) | Page::MoreInfo(_) => {}
        }
    }
}

/// Appearance snapshot handed to newly created pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub choice: ThemeChoice,
    pub dark: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            choice: ThemeChoice::System,
            dark: false,
        }
    }
}

/// Builds every navigable page.
pub struct Pages {
    config: Config,
    appearance: Cell<Appearance>,
}

impl Pages {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            appearance: Cell::new(Appearance::default()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance.get()
    }

    pub fn observe(&self, appearance: Appearance) {
        self.appearance.set(appearance);
    }
}

impl PageFactory for Pages {
    type Id = PageId;
    type Page = Page;
    type Parameter = str;
    type Error = PageError;

    fn create(&self, id: PageId, _parameter: Option<&str>) -> Result<Page, PageError> {
        let appearance = self.appearance.get();
        let page = match id {
            PageId::Welcome => Page::Welcome(WelcomePage::new(appearance.dark)),
            PageId::Friend => Page::Friend(FriendPage::load(&self.config)?),
            PageId::Settings => {
                Page::Settings(SettingsPage::new(appearance.choice, appearance.dark))
            }
            PageId::MoreInfo => Page::MoreInfo(MoreInfoPage::new()),
        };
        Ok(page)
    }
}
