//! Inclusive RGB range predicate.

/// An inclusive per-channel RGB range.
///
/// No ordering is enforced between a minimum and its maximum. A minimum
/// above its maximum is accepted and simply never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorBounds {
    pub r_min: u8,
    pub g_min: u8,
    pub b_min: u8,
    pub r_max: u8,
    pub g_max: u8,
    pub b_max: u8,
}

impl ColorBounds {
    /// Bounds covering every colour.
    pub const ALL: Self = Self::new([0, 0, 0], [255, 255, 255]);

    /// Create bounds from a `[r, g, b]` minimum and a `[r, g, b]` maximum.
    pub const fn new(min: [u8; 3], max: [u8; 3]) -> Self {
        Self {
            r_min: min[0],
            g_min: min[1],
            b_min: min[2],
            r_max: max[0],
            g_max: max[1],
            b_max: max[2],
        }
    }

    /// Check whether a colour lies within these bounds. Alpha plays no part.
    pub fn within_bounds(&self, r: u8, g: u8, b: u8) -> bool {
        (self.r_min..=self.r_max).contains(&r)
            && (self.g_min..=self.g_max).contains(&g)
            && (self.b_min..=self.b_max).contains(&b)
    }
}

impl Default for ColorBounds {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<[u8; 6]> for ColorBounds {
    /// `[r_min, g_min, b_min, r_max, g_max, b_max]`
    fn from(v: [u8; 6]) -> Self {
        Self::new([v[0], v[1], v[2]], [v[3], v[4], v[5]])
    }
}
