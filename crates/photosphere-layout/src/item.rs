//! Gallery items and their laid-out counterparts.

use std::fmt;

use photosphere_types::Photo;
use serde::Serialize;

/// Anything the gallery can lay out: an intrinsic size and an optional
/// group tag.
pub trait GalleryItem: Clone {
    /// Opaque tag compared for equality only.
    type Group: PartialEq + Clone + fmt::Debug;

    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn group(&self) -> Option<&Self::Group>;
}

impl GalleryItem for Photo {
    type Group = String;

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn group(&self) -> Option<&String> {
        self.group.as_ref()
    }
}

/// A copy of a source item with its display size.
///
/// `width == height * aspect_ratio` holds in every state the engine
/// produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct LayoutItem<T> {
    pub item: T,
    /// Intrinsic width over intrinsic height of `item`.
    pub aspect_ratio: f64,
    /// Display width in pixels.
    pub width: f64,
    /// Display height in pixels.
    pub height: f64,
}

impl<T: GalleryItem> LayoutItem<T> {
    /// Scale `item` to `row_height`.
    pub fn at_row_height(item: T, row_height: f64) -> Self {
        let aspect_ratio = item.width() / item.height();
        Self {
            item,
            aspect_ratio,
            width: row_height * aspect_ratio,
            height: row_height,
        }
    }
}

impl<T> LayoutItem<T> {
    /// Grow (or shrink, for a negative `delta`) the display width and derive
    /// the height from the stored aspect ratio.
    pub fn widened_by(self, delta: f64) -> Self {
        let width = self.width + delta;
        Self {
            height: width / self.aspect_ratio,
            width,
            ..self
        }
    }
}
