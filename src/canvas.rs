//! Canvas buffers and frames.
//!
//! Every frame owns one [`Canvas`]: a fixed 512x512 RGBA raster that is the
//! single source of truth for pixel color. Only the logical block size used
//! to edit it ever changes, never the raster dimensions.

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};

use crate::grid::BlockSize;

/// Side length of every canvas, in device pixels.
pub const CANVAS_WIDTH: u32 = 512;

/// The transparent color used for blank canvases and the eraser.
///
/// White with zero alpha, so a serialized blank cell reads `[255,255,255,0]`.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// A fixed-size RGBA raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn blank() -> Self {
        Self { image: RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_WIDTH, TRANSPARENT) }
    }

    /// Build a canvas from an arbitrary image, stretched to fit with
    /// nearest-neighbor sampling. Aspect ratio is not preserved.
    pub fn from_image(image: &RgbaImage) -> Self {
        if image.dimensions() == (CANVAS_WIDTH, CANVAS_WIDTH) {
            return Self { image: image.clone() };
        }
        if image.width() == 0 || image.height() == 0 {
            return Self::blank();
        }
        let scaled =
            image::imageops::resize(image, CANVAS_WIDTH, CANVAS_WIDTH, FilterType::Nearest);
        Self { image: scaled }
    }

    /// Canvas side length in device pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Whether a signed device coordinate lies on the canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.width() as i64
    }

    /// Read a device pixel. Returns `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.width() && y < self.width() {
            Some(*self.image.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Overwrite a device pixel. Writes outside the canvas are dropped.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if x < self.width() && y < self.width() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Overwrite every pixel with one color.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    pub fn clear(&mut self) {
        self.fill(TRANSPARENT);
    }

    /// True when every pixel has zero alpha.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p[3] == 0)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::blank()
    }
}

/// One frame of the animation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    canvas: Canvas,
}

impl Frame {
    /// A fully transparent frame.
    pub fn blank() -> Self {
        Self { canvas: Canvas::blank() }
    }

    pub fn from_canvas(canvas: Canvas) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Color of a logical cell, read from the top-left device pixel of the
    /// block. Blocks are painted uniformly, so one sample represents the
    /// whole cell.
    pub fn cell(&self, block: BlockSize, col: u32, row: u32) -> Option<Rgba<u8>> {
        let (x, y) = block.cell_origin(col, row);
        self.canvas.get(x, y)
    }

    /// Render the frame at its logical resolution: one image pixel per cell.
    ///
    /// Used for the preview window and for serialization.
    pub fn logical_image(&self, block: BlockSize) -> RgbaImage {
        let res = block.resolution();
        RgbaImage::from_fn(res, res, |col, row| self.cell(block, col, row).unwrap_or(TRANSPARENT))
    }
}
