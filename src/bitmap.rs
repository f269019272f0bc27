//! Source image access.
//!
//! The graph builder only needs to ask "is this pixel black?", so decoding is
//! kept behind [`PixelSource`] and any in-memory image can stand in for a file.

use std::fs;
use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];

pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Color at `(x, y)`, or `None` outside the image.
    fn color_at(&self, x: u32, y: u32) -> Option<[u8; 3]>;

    /// Exact match against pure black. Out-of-range pixels are never black.
    fn is_black(&self, x: u32, y: u32) -> bool {
        self.color_at(x, y) == Some(BLACK)
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn color_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let (w, h) = self.dimensions();
        if x < w && y < h {
            Some(self.get_pixel(x, y).0)
        } else {
            None
        }
    }
}

/// Read and decode a bitmap into 8-bit RGB.
pub fn open(path: &Path) -> Result<RgbImage> {
    let bytes = fs::read(path).map_err(|source| Error::AssetMissing {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    tracing::info!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "bitmap decoded"
    );
    Ok(rgb)
}
