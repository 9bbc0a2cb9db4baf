//! Read-only friend directory bundled with the application (`res/data.json`).

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum FriendError {
        #[error("IO error on {path}: {source}")]
        Io {
            path: PathBuf,
            source: std::io::Error,
        },

        #[error("invalid friend directory: {0}")]
        Json(#[from] serde_json::Error),

        #[error("Image error: {0}")]
        Image(#[from] image::ImageError),
    }
}

use error::FriendError;

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FriendName(String);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Friend {
    pub name: FriendName,
    pub description: String,
    /// Portrait path relative to the application directory.
    pub img_url: String,
}

/// Loads the friend list. Entries without a name fail the whole load.
pub fn load_directory(path: &Path) -> Result<Vec<Friend>, FriendError> {
    let content = std::fs::read_to_string(path).map_err(|source| FriendError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let friends = serde_json::from_str(&content)?;
    Ok(friends)
}

/// Decoded portrait, ready for a toolkit to upload.
#[derive(Clone, Debug)]
pub struct Portrait {
    pub path: PathBuf,
    pub image: image::RgbaImage,
}

impl Portrait {
    pub fn load(path: &Path) -> Result<Self, FriendError> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
