//! Core domain types for img2json.
//!
//! This module contains the value types the rest of the crate is built on:
//! - `Point` - one pixel's coordinate and RGBA colour
//! - `ColorBounds` - inclusive RGB range used as a keep/drop predicate
//! - `Rect` - bounding rectangle of a point collection

mod bounds;
mod point;
mod rect;

pub use bounds::ColorBounds;
pub use point::Point;
pub use rect::Rect;
