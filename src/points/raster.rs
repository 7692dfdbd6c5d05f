//! Image decode and encode paths.

use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};

use crate::error::{Img2JsonError, Result};
use crate::types::{Point, Rect};

use super::{PointCollection, Provenance, RasterLayout};

impl PointCollection {
    /// Decode an image file into a collection.
    ///
    /// The format is sniffed from the file content, not its extension.
    pub fn load_from_image(path: &Path) -> Result<Self> {
        let decode_err = |message: String| Img2JsonError::Decode {
            path: path.to_path_buf(),
            message,
        };

        let img = ImageReader::open(path)
            .map_err(|e| decode_err(format!("Failed to open image: {}", e)))?
            .with_guessed_format()
            .map_err(|e| decode_err(format!("Failed to read image: {}", e)))?
            .decode()
            .map_err(|e| decode_err(format!("Failed to decode image: {}", e)))?;

        Ok(Self::from_image(&img))
    }

    /// Build a collection from a decoded image.
    ///
    /// Channels are normalised to 8 bits. Points are laid out column-major:
    /// the point for `(x, y)` sits at index `x * height + y`.
    pub fn from_image(img: &DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut points = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                let pixel = rgba.get_pixel(x, y);
                points.push(Point::from_rgba(x as i64, y as i64, pixel.0));
            }
        }

        Self {
            points,
            bounds: Rect::new(0, 0, width as i64, height as i64),
            provenance: Provenance::Image,
            layout: Some(RasterLayout { width, height }),
        }
    }

    /// Encode the collection as a PNG, whatever the path's extension.
    pub fn save_as_image(&self, path: &Path) -> Result<()> {
        self.to_rgba_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Img2JsonError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to write image: {}", e),
            })
    }

    /// Rasterise the collection.
    ///
    /// The raster is sized to the bounds' max corner. Points are written in
    /// sequence order, so later points at the same coordinate win; points
    /// outside the raster are dropped.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let (width, height) = self.bounds.raster_size();
        let mut img = RgbaImage::new(width, height);

        for p in &self.points {
            if p.x < 0 || p.y < 0 || p.x >= width as i64 || p.y >= height as i64 {
                continue;
            }
            img.put_pixel(p.x as u32, p.y as u32, Rgba(p.rgba()));
        }

        img
    }
}
