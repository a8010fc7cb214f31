//! photosphere-layout: justified row layout for the photo gallery.
//!
//! Photos are scaled to a common target height and packed left to right
//! into rows no wider than the gallery. Every completed row is then
//! stretched so its items exactly fill the gallery width, keeping each
//! photo's aspect ratio. Rows never mix group tags, and the last row of a
//! group keeps its natural width.
//!
//! The engine is a pure function of its inputs: no I/O and no shared state.

pub mod item;
pub mod justify;
pub mod place;
pub mod row;

pub use item::{GalleryItem, LayoutItem};
pub use justify::{compute_layout, justify, pack, stretch, validate_items};
pub use photosphere_types::{LayoutConfig, PhotosphereError, Result};
pub use place::{PlacedItem, layout_height, place};
pub use row::Row;
