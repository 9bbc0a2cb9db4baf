//! Wires user actions to the theme store and the navigator, and recolors the
//! window chrome whenever the resolved appearance may have changed.

use crate::navigation::{ContentFrame, NavigationOutcome, Navigator};
use crate::pages::{Appearance, Page, PageId, PageRequest, Pages, WelcomePage};
use crate::theme::{SaveOutcome, ThemeChoice, ThemeStore};
use crate::types::Config;
use tracing::{debug, info, warn};

mod palette;
mod title_bar;

pub use palette::{Color, NavButton, Palette};
pub use title_bar::{COMPACT_INSET, TitleBar};

/// The host window. Receives colors; never calls back into the shell.
pub trait Chrome {
    fn apply_palette(&mut self, palette: &Palette);

    fn apply_title_bar(&mut self, _title_bar: &TitleBar) {}
}

pub type PageNavigator = Navigator<Pages, ContentFrame<Page>>;

/// What handling a `PageRequest` did.
#[derive(Debug)]
pub enum RequestOutcome {
    Navigation(NavigationOutcome),
    Theme(SaveOutcome),
}

pub struct Shell<C: Chrome> {
    theme: ThemeStore,
    navigator: PageNavigator,
    title_bar: TitleBar,
    chrome: C,
}

impl<C: Chrome> Shell<C> {
    /// Opens the configured settings file and starts on the welcome page.
    pub fn start(config: Config, chrome: C) -> Self {
        let theme = ThemeStore::open(&config);
        Self::new(theme, Pages::new(config), chrome)
    }

    /// Initializes `theme`, shows the welcome page without a history entry
    /// and paints the chrome once.
    pub fn new(mut theme: ThemeStore, pages: Pages, chrome: C) -> Self {
        let outcome = theme.initialize();
        info!(
            loaded = outcome.is_loaded(),
            choice = %theme.choice(),
            "shell starting"
        );

        let mut navigator = Navigator::new(pages);
        let welcome = WelcomePage::new(theme.is_dark_theme());
        navigator.attach(ContentFrame::with_content(Page::Welcome(welcome)));

        let mut shell = Self {
            theme,
            navigator,
            title_bar: TitleBar::default(),
            chrome,
        };
        shell.repaint();
        shell.chrome.apply_title_bar(&shell.title_bar);
        shell
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn title_bar(&self) -> &TitleBar {
        &self.title_bar
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.navigator.current()
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.navigator.current_mut()
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.theme.is_acrylic_mode(), self.theme.is_dark_theme())
    }
}

/// Navigation.
impl<C: Chrome> Shell<C> {
    /// Handles a click on a navigation pane button. Unknown tags are ignored.
    pub fn on_navigation_button(&mut self, tag: &str) -> Option<NavigationOutcome> {
        let outcome = match NavButton::from_tag(tag) {
            Some(button) => Some(self.navigator.navigate(button.page(), None)),
            None => {
                warn!(tag, "unknown navigation tag");
                None
            }
        };
        self.repaint();
        outcome
    }

    pub fn navigate(&mut self, id: PageId) -> NavigationOutcome {
        let outcome = self.navigator.navigate(id, None);
        self.repaint();
        outcome
    }

    pub fn back(&mut self) -> NavigationOutcome {
        let outcome = self.navigator.navigate_back();
        self.repaint();
        outcome
    }

    pub fn handle(&mut self, request: PageRequest) -> RequestOutcome {
        debug!(?request, "page request");
        match request {
            PageRequest::Navigate(id) => RequestOutcome::Navigation(self.navigate(id)),
            PageRequest::ApplyTheme(choice) => RequestOutcome::Theme(self.select_theme(choice)),
        }
    }
}

/// Appearance.
impl<C: Chrome> Shell<C> {
    pub fn select_theme(&mut self, choice: ThemeChoice) -> SaveOutcome {
        let outcome = self.theme.apply_choice(choice);
        if let Some(Page::Settings(page)) = self.navigator.current_mut() {
            page.sync(choice);
        }
        self.repaint();
        outcome
    }

    pub fn toggle_theme(&mut self) -> SaveOutcome {
        let outcome = self.theme.toggle_theme();
        let choice = self.theme.choice();
        if let Some(Page::Settings(page)) = self.navigator.current_mut() {
            page.sync(choice);
        }
        self.repaint();
        outcome
    }

    /// Call when the host reports that the OS light/dark preference changed.
    pub fn on_system_theme_changed(&mut self) {
        self.repaint();
    }

    pub fn set_active(&mut self, active: bool) {
        self.title_bar.set_active(active);
        self.chrome.apply_title_bar(&self.title_bar);
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.title_bar.set_compact(compact);
        self.chrome.apply_title_bar(&self.title_bar);
    }

    fn repaint(&mut self) {
        let palette = self.palette();
        self.chrome.apply_palette(&palette);

        self.navigator.factory().observe(Appearance {
            choice: self.theme.choice(),
            dark: palette.dark,
        });
        if let Some(page) = self.navigator.current_mut() {
            page.apply_appearance(palette.dark);
        }
    }
}

#[cfg(test)]
mod tests;
