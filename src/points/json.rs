//! JSON point document decode and encode paths.
//!
//! The document is a plain array of `{x, y, r, g, b, a}` records. Output is
//! pretty-printed with two-space indentation; input may be pretty or compact.

use std::fs;
use std::path::Path;

use crate::error::{Img2JsonError, Result};
use crate::types::Point;

use super::PointCollection;

impl PointCollection {
    /// Decode a JSON point document from a file.
    pub fn load_from_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Img2JsonError::Decode {
            path: path.to_path_buf(),
            message: format!("Failed to read JSON: {}", e),
        })?;

        let points = parse_points(&content).map_err(|e| Img2JsonError::Decode {
            path: path.to_path_buf(),
            message: format!("Invalid point document: {}", e),
        })?;

        Ok(Self::from_points(points))
    }

    /// Decode a JSON point document from a string.
    ///
    /// Points keep their document order; bounds are the tight envelope.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let points = parse_points(content).map_err(|e| Img2JsonError::Document {
            message: format!("Invalid point document: {}", e),
            help: Some("Expected an array of {x, y, r, g, b, a} records".to_string()),
        })?;

        Ok(Self::from_points(points))
    }

    /// Write the points as a pretty-printed JSON array.
    pub fn save_as_json(&self, path: &Path) -> Result<()> {
        let io_err = |message: String| Img2JsonError::Io {
            path: path.to_path_buf(),
            message,
        };

        let json = serde_json::to_string_pretty(&self.points)
            .map_err(|e| io_err(format!("Failed to serialize points: {}", e)))?;

        fs::write(path, json).map_err(|e| io_err(format!("Failed to write JSON: {}", e)))
    }

    /// Serialise the points as a pretty-printed JSON array, in sequence order.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.points).map_err(|e| Img2JsonError::Parse {
            message: format!("Failed to serialize points: {}", e),
            help: None,
        })
    }
}

fn parse_points(content: &str) -> serde_json::Result<Vec<Point>> {
    serde_json::from_str(content)
}
