//! Block-size changes for the whole frame sequence.
//!
//! Each frame is sampled into an intermediate grid of the smaller of the old
//! and new resolutions, cleared, then repainted at the new block size. The
//! intermediate grid is anchored at the top-left corner: growing the block
//! size (shrinking the resolution) keeps only the top-left `newRes x newRes`
//! cells and drops the rest. Sampling reads one device pixel per cell; it
//! does not average.

use image::RgbaImage;
use tracing::debug;

use crate::canvas::Canvas;
use crate::frames::FrameSequence;
use crate::grid::BlockSize;
use crate::paint::paint_cell;

/// Sample the first `res x res` logical cells of a canvas into a small image.
fn sample_cells(canvas: &Canvas, block: BlockSize, res: u32) -> RgbaImage {
    RgbaImage::from_fn(res, res, |col, row| {
        let (x, y) = block.cell_origin(col, row);
        // Every sampled cell lies inside the canvas because res <= block.resolution()
        canvas.get(x, y).unwrap_or(crate::canvas::TRANSPARENT)
    })
}

/// Convert a single canvas from `from` to `to` block size in place.
pub fn resample_canvas(canvas: &mut Canvas, from: BlockSize, to: BlockSize) {
    let min_res = from.resolution().min(to.resolution());
    let cells = sample_cells(canvas, from, min_res);

    canvas.clear();
    for (col, row, color) in cells.enumerate_pixels() {
        paint_cell(canvas, col, row, to, *color);
    }
}

/// Convert every frame from `from` to `to` block size.
///
/// Resizing to the same block size leaves frames untouched. Returns the
/// number of frames converted.
pub fn resample_frames(frames: &mut FrameSequence, from: BlockSize, to: BlockSize) -> usize {
    if from == to {
        debug!(block = to.pixels(), "resize to current block size skipped");
        return 0;
    }
    let mut converted = 0;
    for frame in frames.iter_mut() {
        resample_canvas(frame.canvas_mut(), from, to);
        converted += 1;
    }
    debug!(from = from.pixels(), to = to.pixels(), frames = converted, "frames resampled");
    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Frame, TRANSPARENT};
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    /// Snapshot every logical cell of a frame.
    fn cells(frame: &Frame, block: BlockSize) -> Vec<Rgba<u8>> {
        let res = block.resolution();
        (0..res)
            .flat_map(|row| (0..res).map(move |col| (col, row)))
            .map(|(col, row)| frame.cell(block, col, row).unwrap())
            .collect()
    }

    fn checkerboard(block: BlockSize) -> Frame {
        let mut frame = Frame::blank();
        let res = block.resolution();
        for row in 0..res {
            for col in 0..res {
                let color = if (col + row) % 2 == 0 { RED } else { Rgba([0, (col * 4) as u8, (row * 4) as u8, 255]) };
                paint_cell(frame.canvas_mut(), col, row, block, color);
            }
        }
        frame
    }

    #[test]
    fn test_same_size_resample_is_identity() {
        for block in BlockSize::ALL {
            let mut frame = checkerboard(block);
            let before = frame.clone();
            resample_canvas(frame.canvas_mut(), block, block);
            assert_eq!(frame, before, "{}", block);
        }
    }

    #[test]
    fn test_resample_frames_same_size_skips() {
        let mut frames = FrameSequence::from_frames(vec![checkerboard(BlockSize::Px16)]).unwrap();
        let before = frames.clone();
        assert_eq!(resample_frames(&mut frames, BlockSize::Px16, BlockSize::Px16), 0);
        assert_eq!(frames, before);
    }

    #[test]
    fn test_coarser_resize_keeps_top_left_and_drops_rest() {
        // 32x32 grid -> 16x16 grid, red at (0,0) and blue at (20,20)
        let mut frame = Frame::blank();
        paint_cell(frame.canvas_mut(), 0, 0, BlockSize::Px16, RED);
        paint_cell(frame.canvas_mut(), 20, 20, BlockSize::Px16, BLUE);
        paint_cell(frame.canvas_mut(), 15, 3, BlockSize::Px16, BLUE);

        resample_canvas(frame.canvas_mut(), BlockSize::Px16, BlockSize::Px32);

        assert_eq!(frame.cell(BlockSize::Px32, 0, 0), Some(RED));
        assert_eq!(frame.cell(BlockSize::Px32, 15, 3), Some(BLUE));
        // Nothing survives outside the 16x16 overlap region
        assert_eq!(frame.canvas().get(20 * 16, 20 * 16), Some(TRANSPARENT));
        let blue_pixels = frame.canvas().as_image().pixels().filter(|p| **p == BLUE).count();
        assert_eq!(blue_pixels, 32 * 32);
    }

    #[test]
    fn test_coarser_resize_compares_against_crop() {
        let before = checkerboard(BlockSize::Px8);
        let mut after = before.clone();
        resample_canvas(after.canvas_mut(), BlockSize::Px8, BlockSize::Px64);

        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(
                    after.cell(BlockSize::Px64, col, row),
                    before.cell(BlockSize::Px8, col, row),
                    "cell ({}, {})",
                    col,
                    row
                );
            }
        }
    }

    #[test]
    fn test_finer_resize_preserves_cells_and_pads_transparent() {
        let before = checkerboard(BlockSize::Px64);
        let mut after = before.clone();
        resample_canvas(after.canvas_mut(), BlockSize::Px64, BlockSize::Px16);

        for row in 0..32 {
            for col in 0..32 {
                let expected = if col < 8 && row < 8 {
                    before.cell(BlockSize::Px64, col, row).unwrap()
                } else {
                    TRANSPARENT
                };
                assert_eq!(after.cell(BlockSize::Px16, col, row), Some(expected));
            }
        }
    }

    #[test]
    fn test_round_trip_through_finer_grid_is_lossless() {
        let original = checkerboard(BlockSize::Px32);
        let mut frame = original.clone();
        resample_canvas(frame.canvas_mut(), BlockSize::Px32, BlockSize::Px8);
        resample_canvas(frame.canvas_mut(), BlockSize::Px8, BlockSize::Px32);
        assert_eq!(cells(&frame, BlockSize::Px32), cells(&original, BlockSize::Px32));
    }

    #[test]
    fn test_resample_frames_converts_every_frame() {
        let mut frames = FrameSequence::from_frames(vec![
            checkerboard(BlockSize::Px16),
            checkerboard(BlockSize::Px16),
            Frame::blank(),
        ])
        .unwrap();
        let converted = resample_frames(&mut frames, BlockSize::Px16, BlockSize::Px64);
        assert_eq!(converted, 3);
        for frame in frames.iter().take(2) {
            assert_eq!(frame.cell(BlockSize::Px64, 0, 0), Some(RED));
        }
        assert!(frames.get(2).unwrap().canvas().is_blank());
    }
}
