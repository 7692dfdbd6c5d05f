//! Pipeline file (YAML) parsing.
//!
//! A pipeline file describes one conversion: where points come from, which
//! filters run, and where the result is written. Every field is optional so
//! the command line can fill in or override any of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Img2JsonError, Result};
use crate::filters::FilterStep;

/// Conversion pipeline loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Image or JSON source.
    pub input: Option<PathBuf>,

    /// Filters in application order, using the `--filter` syntax
    /// (e.g. `color:0,0,0,40,40,40`, `rand:50`).
    pub filters: Vec<String>,

    /// Destinations; each is written as JSON or image by extension.
    pub outputs: Vec<PathBuf>,

    /// Seed for the random filter. Seeded from system entropy when absent.
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// Load a pipeline from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Img2JsonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read pipeline file: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a pipeline from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| Img2JsonError::Parse {
            message: format!("Invalid pipeline file: {}", e),
            help: Some("Check the pipeline YAML syntax".to_string()),
        })
    }

    /// Parse the filter strings into steps.
    pub fn filter_steps(&self) -> Result<Vec<FilterStep>> {
        self.filters.iter().map(|f| f.parse()).collect()
    }
}
