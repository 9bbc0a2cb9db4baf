use super::palette::Color;

/// Left inset of the title while the navigation pane is collapsed, in pixels.
pub const COMPACT_INSET: f32 = 45.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleBar {
    compact: bool,
    active: bool,
}

impl Default for TitleBar {
    fn default() -> Self {
        Self {
            compact: false,
            active: true,
        }
    }
}

impl TitleBar {
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn left_inset(&self) -> f32 {
        if self.compact { COMPACT_INSET } else { 0.0 }
    }

    pub fn title_color(&self) -> Color {
        if self.active {
            Color::BLACK
        } else {
            Color::INACTIVE_TITLE
        }
    }
}
