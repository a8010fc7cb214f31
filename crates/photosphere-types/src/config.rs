//! Layout configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PhotosphereError, Result};

/// Parameters of the justified row layout.
///
/// ```toml
/// gallery_width = 1280
/// target_row_height = 180
/// group_boundaries_break_rows = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Width of the gallery container in pixels.
    #[serde(default = "default_gallery_width")]
    pub gallery_width: f64,
    /// Height every row starts at before it is stretched.
    #[serde(default = "default_target_row_height")]
    pub target_row_height: f64,
    /// Start a new row whenever the group tag changes, and leave the last
    /// row of each group unstretched.
    #[serde(default = "yes")]
    pub group_boundaries_break_rows: bool,
}

fn default_gallery_width() -> f64 {
    1000.0
}
fn default_target_row_height() -> f64 {
    200.0
}
fn yes() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gallery_width: default_gallery_width(),
            target_row_height: default_target_row_height(),
            group_boundaries_break_rows: true,
        }
    }
}

impl LayoutConfig {
    pub fn new(gallery_width: f64, target_row_height: f64) -> Self {
        Self {
            gallery_width,
            target_row_height,
            ..Self::default()
        }
    }

    pub fn with_group_breaks(mut self, enabled: bool) -> Self {
        self.group_boundaries_break_rows = enabled;
        self
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded layout config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Reject non-positive or non-finite dimensions.
    pub fn validate(&self) -> Result<()> {
        if !(self.gallery_width.is_finite() && self.gallery_width > 0.0) {
            return Err(PhotosphereError::InvalidConfiguration(format!(
                "gallery width must be positive, got {}",
                self.gallery_width
            )));
        }
        if !(self.target_row_height.is_finite() && self.target_row_height > 0.0) {
            return Err(PhotosphereError::InvalidConfiguration(format!(
                "target row height must be positive, got {}",
                self.target_row_height
            )));
        }
        Ok(())
    }
}
