//! Foundation types for Photosphere.
//!
//! This crate contains the types shared by the layout engine and the
//! command-line front end: the photo record, image resolutions, the layout
//! configuration and the error type.

pub mod config;
pub mod error;
pub mod photo;
pub mod resolution;

pub use config::LayoutConfig;
pub use error::{PhotosphereError, Result};
pub use photo::{Photo, load_photos, parse_photos};
pub use resolution::Resolution;
