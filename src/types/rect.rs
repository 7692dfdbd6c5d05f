//! Axis-aligned bounding rectangle.

use std::fmt;

use super::Point;

/// Bounding rectangle of a point collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Rect {
    pub const fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Tight min/max envelope over the points' coordinates.
    ///
    /// Returns `None` for an empty slice.
    pub fn envelope(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first.x, first.y, first.x, first.y);

        Some(points.iter().fold(init, |acc, p| Self {
            min_x: acc.min_x.min(p.x),
            min_y: acc.min_y.min(p.y),
            max_x: acc.max_x.max(p.x),
            max_y: acc.max_y.max(p.y),
        }))
    }

    /// Raster dimensions for image output: the max corner, not `max - min`.
    pub fn raster_size(&self) -> (u32, u32) {
        (clamp_dim(self.max_x), clamp_dim(self.max_y))
    }
}

fn clamp_dim(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})..({}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
