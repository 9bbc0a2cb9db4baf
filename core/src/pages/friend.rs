use crate::friends::error::FriendError;
use crate::friends::{Friend, Portrait, load_directory};
use crate::types::Config;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Window width at which the portrait moves beside the form.
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 800.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridLength {
    Auto,
    Star(f32),
    Pixel(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FriendLayout {
    /// Form and portrait side by side.
    Wide,
    /// Portrait column collapsed, portrait stacked above the form.
    Narrow,
}

impl FriendLayout {
    pub fn for_width(width: f32) -> Self {
        if width >= WIDE_LAYOUT_MIN_WIDTH {
            FriendLayout::Wide
        } else {
            FriendLayout::Narrow
        }
    }

    pub fn columns(self) -> [GridLength; 2] {
        match self {
            FriendLayout::Wide => [GridLength::Star(1.0), GridLength::Star(1.0)],
            FriendLayout::Narrow => [GridLength::Star(1.0), GridLength::Pixel(0.0)],
        }
    }

    pub fn rows(self) -> [GridLength; 2] {
        match self {
            FriendLayout::Wide => [GridLength::Auto, GridLength::Star(1.0)],
            FriendLayout::Narrow => [GridLength::Star(1.0), GridLength::Auto],
        }
    }

    /// (row, column) of the portrait.
    pub fn portrait_cell(self) -> (usize, usize) {
        match self {
            FriendLayout::Wide => (1, 1),
            FriendLayout::Narrow => (0, 0),
        }
    }
}

/// Friend picker with a read-only form that can be unlocked for editing.
///
/// Edits stay in the page; the directory file is never written.
#[derive(Debug)]
pub struct FriendPage {
    friends: Vec<Friend>,
    app_dir: PathBuf,
    selected: Option<usize>,
    name_text: String,
    description_text: String,
    editing: bool,
    edit_visible: bool,
    portrait_path: Option<PathBuf>,
    layout: FriendLayout,
}

impl FriendPage {
    /// Reads the friend directory and selects the first entry.
    pub fn load(config: &Config) -> Result<Self, FriendError> {
        let friends = load_directory(&config.friends_path())?;
        Ok(Self::with_friends(friends, config.app_dir.clone()))
    }

    pub fn with_friends(friends: Vec<Friend>, app_dir: PathBuf) -> Self {
        let mut page = Self {
            friends,
            app_dir,
            selected: None,
            name_text: String::new(),
            description_text: String::new(),
            editing: false,
            edit_visible: false,
            portrait_path: None,
            layout: FriendLayout::Wide,
        };
        page.choose_index(0);
        page
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.friends.iter().map(|friend| friend.name.as_str())
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn selected(&self) -> Option<&Friend> {
        self.selected.map(|index| &self.friends[index])
    }

    pub fn name_text(&self) -> &str {
        &self.name_text
    }

    pub fn description_text(&self) -> &str {
        &self.description_text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_edit_button_visible(&self) -> bool {
        self.edit_visible
    }

    pub fn portrait_path(&self) -> Option<&Path> {
        self.portrait_path.as_deref()
    }

    pub fn layout(&self) -> FriendLayout {
        self.layout
    }
}

/// Interaction.
impl FriendPage {
    /// Selects a friend by name. Returns the portrait to load, or `None` if no
    /// friend has that name.
    pub fn choose(&mut self, name: &str) -> Option<&Path> {
        let Some(index) = self.friends.iter().position(|f| f.name.as_str() == name) else {
            warn!(name, "no friend with that name");
            return None;
        };
        self.choose_index(index)
    }

    pub fn choose_index(&mut self, index: usize) -> Option<&Path> {
        let friend = self.friends.get(index)?;

        self.name_text = friend.name.to_string();
        self.description_text = friend.description.clone();
        self.portrait_path = Some(self.app_dir.join(&friend.img_url));
        self.selected = Some(index);
        self.edit_visible = true;
        self.editing = false;

        self.portrait_path.as_deref()
    }

    /// Unlocks the name and description fields.
    pub fn begin_edit(&mut self) {
        if self.selected.is_some() {
            self.editing = true;
        }
    }

    /// Returns `false` when the field is locked.
    pub fn set_name_text(&mut self, text: impl Into<String>) -> bool {
        if !self.editing {
            return false;
        }
        self.name_text = text.into();
        true
    }

    /// Returns `false` when the field is locked.
    pub fn set_description_text(&mut self, text: impl Into<String>) -> bool {
        if !self.editing {
            return false;
        }
        self.description_text = text.into();
        true
    }

    pub fn resize(&mut self, width: f32) -> FriendLayout {
        self.layout = FriendLayout::for_width(width);
        self.layout
    }

    /// Decodes the selected friend's portrait. Failures are logged and leave
    /// the page as it was.
    pub fn load_portrait(&self) -> Option<Result<Portrait, FriendError>> {
        let path = self.portrait_path.as_deref()?;
        let result = Portrait::load(path);
        if let Err(err) = &result {
            warn!(path = %path.display(), error = %err, "error loading image");
        }
        Some(result)
    }
}
