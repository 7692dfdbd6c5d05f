//! Point collections.
//!
//! A `PointCollection` is the flat, in-memory form of a raster: one `Point`
//! per pixel plus a bounding rectangle. Collections are built from one of two
//! sources and written to one of two sinks:
//!
//! - images (`raster.rs`), decoded in column-major order
//! - JSON point documents (`json.rs`), kept in file order
//!
//! Filters replace the point sequence in place and never touch the bounds,
//! so after filtering the rectangle still describes the pre-filter extent.

mod json;
mod raster;

use std::path::Path;

use crate::error::Result;
use crate::types::{Point, Rect};

/// Where a collection's points came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Default-constructed, never loaded.
    Empty,
    /// Decoded from a raster image.
    Image,
    /// Decoded from a JSON point document.
    Json,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Empty => "empty",
            Provenance::Image => "image",
            Provenance::Json => "json",
        }
    }
}

/// On-disk representation of a point collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Image,
    Json,
}

impl Format {
    /// Pick a format from a path's extension: `.json` is JSON, anything else
    /// is treated as an image.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Image,
        }
    }
}

/// Column-major layout of an image-sourced sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RasterLayout {
    width: u32,
    height: u32,
}

/// All points of a decoded image or JSON document, plus their bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCollection {
    points: Vec<Point>,
    bounds: Rect,
    provenance: Provenance,
    layout: Option<RasterLayout>,
}

impl Default for PointCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl PointCollection {
    /// Create an empty collection with zero bounds.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            bounds: Rect::default(),
            provenance: Provenance::Empty,
            layout: None,
        }
    }

    /// Load a collection from any path, choosing the decoder by extension.
    pub fn load(path: &Path) -> Result<Self> {
        match Format::from_path(path) {
            Format::Image => Self::load_from_image(path),
            Format::Json => Self::load_from_json(path),
        }
    }

    /// Save a collection to any path, choosing the encoder by extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        match Format::from_path(path) {
            Format::Image => self.save_as_image(path),
            Format::Json => self.save_as_json(path),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Look up a point by coordinate through the column-major index `x*H + y`.
    ///
    /// Only answers while the sequence is still in its decoded raster order,
    /// i.e. for image-sourced collections no filter has touched.
    pub fn point_at(&self, x: u32, y: u32) -> Option<&Point> {
        let layout = self.layout?;
        if x >= layout.width || y >= layout.height {
            return None;
        }
        let index = x as usize * layout.height as usize + y as usize;
        self.points.get(index)
    }

    /// Recompute the bounds as the tight envelope over all points.
    ///
    /// An empty collection keeps its previous bounds.
    pub fn recalc_bounds(&mut self) {
        if let Some(envelope) = Rect::envelope(&self.points) {
            self.bounds = envelope;
        }
    }

    /// Build a collection from a JSON-style point sequence.
    fn from_points(points: Vec<Point>) -> Self {
        let mut collection = Self {
            points,
            bounds: Rect::default(),
            provenance: Provenance::Json,
            layout: None,
        };
        collection.recalc_bounds();
        collection
    }

    /// Swap in a new point sequence. Bounds are left as they were.
    pub(crate) fn replace_points(&mut self, points: Vec<Point>) {
        self.points = points;
        self.layout = None;
    }

    /// Mutable access for in-place reordering. Invalidates the raster layout.
    pub(crate) fn points_mut(&mut self) -> &mut Vec<Point> {
        self.layout = None;
        &mut self.points
    }
}
