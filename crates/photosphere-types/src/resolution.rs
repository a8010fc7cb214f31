//! Pixel resolution of an image or video.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` for a zero height.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }

    /// Resolution of a thumbnail whose shorter side is `min_size`.
    ///
    /// Landscape images keep `min_size` as their height, everything else
    /// (portrait and square) keeps it as their width. The other side is
    /// rounded to the nearest pixel. Returns `None` for a degenerate source
    /// or when the longer side does not fit in a `u32`.
    pub fn scale_to_min_side(&self, min_size: u32) -> Option<Self> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let (w, h) = (self.width as f64, self.height as f64);
        let landscape = self.width > self.height;
        let ratio = if landscape { w / h } else { h / w };
        let long = (ratio * min_size as f64).round();
        if long > u32::MAX as f64 {
            return None;
        }
        let long = long as u32;
        Some(if landscape {
            Self::new(long, min_size)
        } else {
            Self::new(min_size, long)
        })
    }
}
