//! Block painting on canvases.
//!
//! All writes are direct overwrites; alpha compositing only happens when a
//! stamp is placed (see [`crate::stamp`]).

use image::Rgba;

use crate::canvas::Canvas;
use crate::grid::BlockSize;

/// Color the `size x size` square of device pixels whose top-left corner is
/// `(x, y)`. Pixels outside the canvas are silently clipped.
pub fn fill_block(canvas: &mut Canvas, x: i32, y: i32, size: u32, color: Rgba<u8>) {
    let width = canvas.width() as i64;
    let x0 = (x as i64).max(0);
    let y0 = (y as i64).max(0);
    let x1 = (x as i64 + size as i64).min(width);
    let y1 = (y as i64 + size as i64).min(width);

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.set(px as u32, py as u32, color);
        }
    }
}

/// Paint the logical pixel under a device point.
///
/// The point is snapped down to its block before filling, so a click
/// anywhere inside a block colors the whole block.
pub fn paint_point(canvas: &mut Canvas, x: i32, y: i32, block: BlockSize, color: Rgba<u8>) {
    fill_block(canvas, block.snap(x), block.snap(y), block.pixels(), color);
}

/// Paint one logical cell by grid coordinates.
pub fn paint_cell(canvas: &mut Canvas, col: u32, row: u32, block: BlockSize, color: Rgba<u8>) {
    let (x, y) = block.cell_origin(col, row);
    // Cells past i32::MAX are far off-canvas anyway
    let x = i32::try_from(x).unwrap_or(i32::MAX);
    let y = i32::try_from(y).unwrap_or(i32::MAX);
    fill_block(canvas, x, y, block.pixels(), color);
}
