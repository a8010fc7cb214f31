//! Loading photo lists and rendering layouts as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use photosphere_layout::{Row, place};
use photosphere_types::Photo;
use serde::Serialize;

/// A photo with its display rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub aspect_ratio: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub width: f64,
    pub height: f64,
    pub items: Vec<RenderedItem>,
}

/// Read a JSON array of photos.
pub fn load_photos(path: &Path) -> Result<Vec<Photo>> {
    let photos = photosphere_types::load_photos(path)
        .with_context(|| format!("loading photo list {}", path.display()))?;
    log::info!("Loaded {} photos from {}", photos.len(), path.display());
    Ok(photos)
}

/// Attach placement to each laid-out photo.
pub fn render(rows: &[Row<Photo>], row_gap: f64) -> Vec<RenderedRow> {
    let mut placed = place(rows, row_gap).into_iter();
    rows.iter()
        .map(|row| RenderedRow {
            group: row.group.clone(),
            width: row.width,
            height: row.height,
            items: row
                .items
                .iter()
                .zip(placed.by_ref())
                .map(|(item, rect)| RenderedItem {
                    id: item.item.id.clone(),
                    group: item.item.group.clone(),
                    aspect_ratio: item.aspect_ratio,
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                })
                .collect(),
        })
        .collect()
}
