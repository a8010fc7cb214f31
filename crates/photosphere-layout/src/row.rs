//! A horizontal row of laid-out items.

use serde::Serialize;

use crate::item::{GalleryItem, LayoutItem};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize, T::Group: Serialize"))]
pub struct Row<T: GalleryItem> {
    pub items: Vec<LayoutItem<T>>,
    /// Tallest item in the row. Equals the target row height until the row
    /// is stretched.
    pub height: f64,
    /// Sum of item widths at the target row height. Stretching does not
    /// update it.
    pub width: f64,
    pub group: Option<T::Group>,
}

impl<T: GalleryItem> Row<T> {
    /// An empty row waiting for its first item.
    pub fn new(height: f64, group: Option<T::Group>) -> Self {
        Self {
            items: Vec::new(),
            height,
            width: 0.0,
            group,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, item: LayoutItem<T>) {
        self.width += item.width;
        self.items.push(item);
    }

    /// Sum of the current display widths of the items.
    pub fn display_width(&self) -> f64 {
        self.items.iter().map(|i| i.width).sum()
    }

    /// Build a new row whose items share `gallery_width - self.width`
    /// equally, each keeping its aspect ratio.
    pub fn stretched_to(self, gallery_width: f64) -> Self {
        if self.items.is_empty() {
            return self;
        }
        let delta = (gallery_width - self.width) / self.items.len() as f64;
        let items: Vec<_> = self
            .items
            .into_iter()
            .map(|item| item.widened_by(delta))
            .collect();
        let height = items.iter().map(|i| i.height).fold(0.0, f64::max);
        Self {
            items,
            height,
            width: self.width,
            group: self.group,
        }
    }
}
