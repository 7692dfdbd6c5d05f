//! Point type.

use serde::{Deserialize, Serialize};

/// One pixel: a zero-based coordinate plus its RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Point {
    /// Create a new point from a coordinate and RGBA components.
    pub const fn new(x: i64, y: i64, r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { x, y, r, g, b, a }
    }

    /// Create a point from a coordinate and an `[r, g, b, a]` array.
    pub const fn from_rgba(x: i64, y: i64, rgba: [u8; 4]) -> Self {
        Self::new(x, y, rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Colour channels as an `[r, g, b, a]` array.
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_array() {
        let p = Point::from_rgba(3, 4, [10, 20, 30, 40]);
        assert_eq!(p, Point::new(3, 4, 10, 20, 30, 40));
        assert_eq!(p.rgba(), [10, 20, 30, 40]);
    }

    #[test]
    fn test_field_names() {
        let json = serde_json::to_value(Point::new(1, 2, 3, 4, 5, 6)).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b", "g", "r", "x", "y"]);
    }

    #[test]
    fn test_channel_out_of_range_rejected() {
        let result: serde_json::Result<Point> =
            serde_json::from_str(r#"{"x":0,"y":0,"r":256,"g":0,"b":0,"a":0}"#);
        assert!(result.is_err());
    }
}
