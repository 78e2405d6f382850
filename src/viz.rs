//! Image-grid rendering for generation monitoring

use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array3;

use crate::error::Result;

/// Renders a batch of images into a composed grid file
pub trait GridRenderer {
    /// Compose `images` into a `(rows, cols)` grid and write it to `path`.
    ///
    /// Cells beyond the batch size stay black; extra images are dropped.
    fn render(&self, images: &Array3<f32>, grid: (usize, usize), path: &Path) -> Result<()>;
}

/// Grayscale PNG compositor with no gaps between cells
///
/// Pixel values are clamped to `[0, 1]` before quantization.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngGridRenderer;

impl GridRenderer for PngGridRenderer {
    fn render(&self, images: &Array3<f32>, grid: (usize, usize), path: &Path) -> Result<()> {
        let (n, h, w) = images.dim();
        let (rows, cols) = grid;
        let mut canvas = GrayImage::new((cols * w) as u32, (rows * h) as u32);

        for idx in 0..n.min(rows * cols) {
            let (grid_row, grid_col) = (idx / cols, idx % cols);
            for y in 0..h {
                for x in 0..w {
                    let v = (images[[idx, y, x]].clamp(0.0, 1.0) * 255.0).round() as u8;
                    canvas.put_pixel(
                        (grid_col * w + x) as u32,
                        (grid_row * h + y) as u32,
                        Luma([v]),
                    );
                }
            }
        }

        canvas.save(path)?;
        Ok(())
    }
}
