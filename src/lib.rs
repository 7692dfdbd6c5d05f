//! img2json - Image to JSON point converter
//!
//! A library for turning raster images into flat collections of per-pixel
//! points, filtering them, and writing them back out as images or JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod output;
pub mod points;
pub mod types;

pub use config::PipelineConfig;
pub use error::{Img2JsonError, Result};
pub use filters::{by_color, by_random, FilterStep};
pub use points::{Format, PointCollection, Provenance};
pub use types::{ColorBounds, Point, Rect};
