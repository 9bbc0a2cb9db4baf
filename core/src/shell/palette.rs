use crate::pages::PageId;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
        a: 0x00,
    };
    /// Window background in dark mode.
    pub const DARK_BACKGROUND: Color = Color::rgb(0x1E, 0x1E, 0x1E);
    /// Title text while the window is inactive.
    pub const INACTIVE_TITLE: Color = Color::rgb(0x8E, 0x8E, 0x8E);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

/// The three buttons in the navigation pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavButton {
    Welcome,
    Friend,
    Settings,
}

impl NavButton {
    pub const ALL: [NavButton; 3] = [NavButton::Welcome, NavButton::Friend, NavButton::Settings];

    pub fn page(self) -> PageId {
        match self {
            NavButton::Welcome => PageId::Welcome,
            NavButton::Friend => PageId::Friend,
            NavButton::Settings => PageId::Settings,
        }
    }

    pub fn tag(self) -> &'static str {
        self.page().tag()
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.tag() == tag)
    }
}

/// Window chrome colors for one appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub acrylic: bool,
    pub dark: bool,
    pub window_background: Color,
    pub window_foreground: Color,
    /// Foreground shared by every `NavButton`.
    pub nav_foreground: Color,
}

impl Palette {
    pub fn new(acrylic: bool, dark: bool) -> Self {
        let text = if dark { Color::WHITE } else { Color::BLACK };
        let window_background = match (acrylic, dark) {
            (true, _) => Color::TRANSPARENT,
            (false, true) => Color::DARK_BACKGROUND,
            (false, false) => Color::WHITE,
        };
        Self {
            acrylic,
            dark,
            window_background,
            window_foreground: text,
            nav_foreground: text,
        }
    }

    pub fn nav_buttons(&self) -> impl Iterator<Item = (NavButton, Color)> + use<> {
        let color = self.nav_foreground;
        NavButton::ALL.into_iter().map(move |button| (button, color))
    }
}
