use super::{PageId, PageRequest, ThemeClass};
use crate::theme::ThemeChoice;

/// Appearance picker.
#[derive(Debug)]
pub struct SettingsPage {
    selected: ThemeChoice,
    theme_class: ThemeClass,
}

impl SettingsPage {
    pub fn new(selected: ThemeChoice, dark: bool) -> Self {
        Self {
            selected,
            theme_class: ThemeClass::from_dark(dark),
        }
    }

    pub fn choices(&self) -> &'static [ThemeChoice] {
        &ThemeChoice::ALL
    }

    pub fn selected(&self) -> ThemeChoice {
        self.selected
    }

    pub fn theme_class(&self) -> ThemeClass {
        self.theme_class
    }

    /// Changes the selection. Returns the theme to apply only when it changed.
    pub fn select(&mut self, choice: ThemeChoice) -> Option<PageRequest> {
        if choice == self.selected {
            return None;
        }
        self.selected = choice;
        Some(PageRequest::ApplyTheme(choice))
    }

    pub fn select_label(&mut self, label: &str) -> Option<PageRequest> {
        ThemeChoice::from_label(label).and_then(|choice| self.select(choice))
    }

    /// Mirrors a choice applied elsewhere without requesting it again.
    pub fn sync(&mut self, choice: ThemeChoice) {
        self.selected = choice;
    }

    pub fn help(&self) -> PageRequest {
        PageRequest::Navigate(PageId::MoreInfo)
    }

    pub(super) fn apply_appearance(&mut self, dark: bool) {
        self.theme_class = ThemeClass::from_dark(dark);
    }
}
