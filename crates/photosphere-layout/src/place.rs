//! Absolute positions for laid-out rows.
//!
//! The renderer positions absolutely sized image elements; this turns rows
//! into one rectangle per item, top to bottom and left to right.

use serde::Serialize;

use crate::item::GalleryItem;
use crate::row::Row;

/// Computed rectangle for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedItem {
    /// Index of the row the item sits in.
    pub row: usize,
    /// Index of the item within its row.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Place every item. Rows stack vertically with `row_gap` pixels between
/// them; items within a row abut.
pub fn place<T: GalleryItem>(rows: &[Row<T>], row_gap: f64) -> Vec<PlacedItem> {
    let mut placed = Vec::with_capacity(rows.iter().map(Row::len).sum());
    let mut y = 0.0;
    for (row_idx, row) in rows.iter().enumerate() {
        let mut x = 0.0;
        for (index, item) in row.items.iter().enumerate() {
            placed.push(PlacedItem {
                row: row_idx,
                index,
                x,
                y,
                width: item.width,
                height: item.height,
            });
            x += item.width;
        }
        y += row.height + row_gap;
    }
    placed
}

/// Total height of the stacked rows, gaps included.
pub fn layout_height<T: GalleryItem>(rows: &[Row<T>], row_gap: f64) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let heights: f64 = rows.iter().map(|r| r.height).sum();
    heights + row_gap * (rows.len() - 1) as f64
}
