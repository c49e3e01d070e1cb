//! Image export
//!
//! Rasterizes the grid at `cell_size_px` per cell onto a background of the
//! export sentinel color, then encodes RGBA PNG bytes for the host to download.
//! Cells whose color equals the sentinel are left as background.

use crate::core::{EngineError, Result};
use crate::domain::color::{Rgb, EXPORT_SENTINEL};
use crate::spatial::grid::Grid;

/// Faint grid line on each painted cell's outer pixel ring (0.5px black at 10%).
const GRID_LINE_ALPHA: f32 = 0.05;

/// Largest accepted cell side; keeps the full raster at 1920×960 or below.
pub const MAX_CELL_SIZE_PX: u32 = 64;

pub struct Raster {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8.
    pub pixels: Vec<u8>,
}

impl Raster {
    fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let area = (width as usize)
            .checked_mul(height as usize)
            .filter(|area| area.checked_mul(4).is_some())
            .ok_or_else(|| EngineError::export(format!("image too large: {}x{}", width, height)))?;

        let mut pixels = Vec::with_capacity(area * 4);
        for _ in 0..area {
            pixels.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
        Ok(Self { width, height, pixels })
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// RGBA at `(x, y)`, `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        let p = self.pixels.get(i..i + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }
}

pub struct ExportedImage {
    pub file_name: String,
    pub png: Vec<u8>,
}

pub fn export_file_name(epoch_ms: i64) -> String {
    format!("pixel-art-{}.png", epoch_ms)
}

/// Fails with `EngineError::Export` when `cell_size_px` is above
/// `MAX_CELL_SIZE_PX` or the image size does not fit.
pub fn rasterize(grid: &Grid, cell_size_px: u32) -> Result<Raster> {
    let cell = cell_size_px.max(1);
    if cell > MAX_CELL_SIZE_PX {
        return Err(EngineError::export(format!(
            "image too large: cell size {} exceeds {}",
            cell, MAX_CELL_SIZE_PX
        )));
    }
    let too_large = || EngineError::export("image too large");
    let width = (grid.cols() as u32).checked_mul(cell).ok_or_else(too_large)?;
    let height = (grid.rows() as u32).checked_mul(cell).ok_or_else(too_large)?;
    let mut raster = Raster::filled(width, height, EXPORT_SENTINEL)?;

    let line = |c: Rgb| c.lerp(Rgb::new(0, 0, 0), GRID_LINE_ALPHA);

    for (idx, color) in grid.colors().into_iter().enumerate() {
        if color == EXPORT_SENTINEL {
            continue;
        }
        let (row, col) = grid.coords(idx);
        let x0 = col as u32 * cell;
        let y0 = row as u32 * cell;
        let edge = line(color);

        for dy in 0..cell {
            for dx in 0..cell {
                let on_ring = dx == 0 || dy == 0 || dx == cell - 1 || dy == cell - 1;
                raster.put(x0 + dx, y0 + dy, if on_ring { edge } else { color });
            }
        }
    }

    Ok(raster)
}

pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, raster.width, raster.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| EngineError::export(format!("PNG header write error: {}", e)))?;
        writer
            .write_image_data(&raster.pixels)
            .map_err(|e| EngineError::export(format!("PNG data write error: {}", e)))?;
        writer
            .finish()
            .map_err(|e| EngineError::export(format!("PNG finish error: {}", e)))?;
    }
    Ok(out)
}

pub fn export_png(grid: &Grid, cell_size_px: u32, epoch_ms: i64) -> Result<ExportedImage> {
    let raster = rasterize(grid, cell_size_px)?;
    let png = encode_png(&raster)?;
    Ok(ExportedImage {
        file_name: export_file_name(epoch_ms),
        png,
    })
}
