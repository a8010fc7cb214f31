//! The photo record handed to the gallery layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolution::Resolution;

/// An uploaded photo as seen by the gallery: identity, intrinsic size and an
/// optional group tag (typically the capture date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Photo {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Build a photo from a measured resolution.
    pub fn from_resolution(
        id: impl Into<String>,
        resolution: Resolution,
        group: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            width: resolution.width as f64,
            height: resolution.height as f64,
            group,
        }
    }
}

/// Parse a JSON array of photos.
pub fn parse_photos(json: &str) -> Result<Vec<Photo>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of photos from a file.
pub fn load_photos(path: impl AsRef<Path>) -> Result<Vec<Photo>> {
    let path = path.as_ref();
    let photos = parse_photos(&std::fs::read_to_string(path)?)?;
    log::debug!("Read {} photos from {}", photos.len(), path.display());
    Ok(photos)
}
