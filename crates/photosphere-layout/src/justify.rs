//! The justified row layout: a packing pass followed by a stretch pass.

use photosphere_types::{LayoutConfig, PhotosphereError, Result};

use crate::item::{GalleryItem, LayoutItem};
use crate::row::Row;

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Reject items whose size, or any size derived from it for `config`, is
/// non-positive or non-finite.
///
/// A stretched item is never wider than the gallery, so its height is
/// bounded by `gallery_width / aspect_ratio`.
pub fn validate_items<T: GalleryItem>(items: &[T], config: &LayoutConfig) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        let (width, height) = (item.width(), item.height());
        let valid = is_positive(width) && is_positive(height) && {
            let aspect_ratio = width / height;
            is_positive(aspect_ratio)
                && is_positive(config.target_row_height * aspect_ratio)
                && is_positive(config.gallery_width / aspect_ratio)
        };
        if !valid {
            log::warn!("Rejecting gallery item {index} with size {width}x{height}");
            return Err(PhotosphereError::InvalidDimension {
                index,
                width,
                height,
            });
        }
    }
    Ok(())
}

/// Assign items to rows at the target row height.
///
/// A row is closed when the next item would push it past the gallery width,
/// or (with group breaks enabled) when the next item carries a different
/// group tag. An item never opens more than one row.
pub fn pack<T: GalleryItem>(items: &[T], config: &LayoutConfig) -> Result<Vec<Row<T>>> {
    config.validate()?;
    validate_items(items, config)?;

    let target = config.target_row_height;
    let mut rows = Vec::new();
    if items.is_empty() {
        return Ok(rows);
    }

    let mut current = Row::new(target, None);
    for item in items {
        let laid = LayoutItem::at_row_height(item.clone(), target);
        let group = item.group();

        if current.is_empty() {
            current.group = group.cloned();
        } else if current.width + laid.width > config.gallery_width
            || (config.group_boundaries_break_rows && current.group.as_ref() != group)
        {
            let next = Row::new(target, group.cloned());
            rows.push(std::mem::replace(&mut current, next));
        }

        current.push(laid);
    }
    rows.push(current);

    Ok(rows)
}

/// Stretch every row except the last to fill the gallery width.
///
/// With group breaks enabled, the last row of each group keeps its natural
/// width. Consumes the packed rows and returns freshly built ones.
pub fn stretch<T: GalleryItem>(rows: Vec<Row<T>>, config: &LayoutConfig) -> Vec<Row<T>> {
    let mut out = Vec::with_capacity(rows.len());
    let mut rows = rows.into_iter().peekable();

    while let Some(row) = rows.next() {
        let fill = match rows.peek() {
            None => false,
            Some(next) => !config.group_boundaries_break_rows || row.group == next.group,
        };
        out.push(if fill {
            row.stretched_to(config.gallery_width)
        } else {
            row
        });
    }

    out
}

/// Lay out `items` as justified rows.
///
/// Configuration is validated before any item is looked at. An empty input
/// produces no rows.
pub fn compute_layout<T: GalleryItem>(items: &[T], config: &LayoutConfig) -> Result<Vec<Row<T>>> {
    let rows = stretch(pack(items, config)?, config);
    log::debug!(
        "Laid out {} items in {} rows ({}px wide, target row height {}px)",
        items.len(),
        rows.len(),
        config.gallery_width,
        config.target_row_height,
    );
    Ok(rows)
}

/// [`compute_layout`] with group breaks enabled.
pub fn justify<T: GalleryItem>(
    items: &[T],
    gallery_width: f64,
    target_row_height: f64,
) -> Result<Vec<Row<T>>> {
    compute_layout(items, &LayoutConfig::new(gallery_width, target_row_height))
}
