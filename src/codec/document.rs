//! The `.ssp` project document.
//!
//! ```text
//! { "height": 32, "width": 32, "numberOfFrames": 2,
//!   "frames": { "frame0": [[[R,G,B,A], ...], ...], "frame1": [...] } }
//! ```
//!
//! Each frame is a row-major grid with one `[R,G,B,A]` entry per logical
//! cell.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::CodecError;
use crate::canvas::Frame;
use crate::frames::FrameSequence;
use crate::grid::{selector_for_grid, BlockSize};
use crate::paint::paint_cell;
use crate::project::Project;

/// One serialized frame: `rows[row][col] = [r, g, b, a]`.
pub type FrameCells = Vec<Vec<[u8; 4]>>;

/// Serialized form of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub height: u32,
    pub width: u32,
    #[serde(rename = "numberOfFrames")]
    pub number_of_frames: usize,
    pub frames: BTreeMap<String, FrameCells>,
}

/// Key of the `index`th frame (0-based).
pub fn frame_key(index: usize) -> String {
    format!("frame{}", index)
}

impl ProjectDocument {
    /// Encode a project at its logical resolution.
    pub fn encode(project: &Project) -> Self {
        let grid = project.grid_size();
        let frames = project
            .frames
            .iter()
            .enumerate()
            .map(|(index, frame)| (frame_key(index), encode_frame(frame, project.block)))
            .collect();

        Self { height: grid, width: grid, number_of_frames: project.frames.len(), frames }
    }

    /// Validate the grid header and return the block size it maps to.
    ///
    /// Grid size 4 is refused: there is no block size that shows a 4x4 grid,
    /// and mapping it onto the 8x8 selector would silently change the sprite.
    pub fn block_size(&self) -> Result<BlockSize, CodecError> {
        if self.width != self.height {
            return Err(CodecError::NonSquare { width: self.width, height: self.height });
        }
        if selector_for_grid(self.width).is_none() {
            return Err(CodecError::UnsupportedGrid(self.width));
        }
        BlockSize::from_resolution(self.width).ok_or(CodecError::AmbiguousGrid(self.width))
    }

    /// Rebuild a project from the document.
    ///
    /// The whole project is built before anything is returned, so a
    /// rejected document never yields partial state.
    pub fn decode(&self) -> Result<Project, CodecError> {
        let block = self.block_size()?;

        let mut frames = FrameSequence::new();
        for index in 0..self.number_of_frames {
            let key = frame_key(index);
            let cells = self.frames.get(&key).ok_or_else(|| CodecError::MissingFrame(key.clone()))?;
            if index == frames.len() {
                frames.push(Frame::blank());
            }
            let frame = frames.get_mut(index).ok_or(CodecError::MissingFrame(key))?;
            decode_frame(frame, cells, block);
        }

        if self.frames.len() > self.number_of_frames {
            warn!(
                declared = self.number_of_frames,
                found = self.frames.len(),
                "project has more frame entries than numberOfFrames; extras ignored"
            );
        }
        debug!(grid = self.width, frames = frames.len(), "project decoded");
        Ok(Project { frames, block })
    }
}

/// Sample one representative device pixel per logical cell.
fn encode_frame(frame: &Frame, block: BlockSize) -> FrameCells {
    let logical = frame.logical_image(block);
    logical.rows().map(|row| row.map(|pixel| pixel.0).collect()).collect()
}

/// Paint every serialized cell onto a frame. Rows or columns beyond the
/// grid clip at the canvas edge.
fn decode_frame(frame: &mut Frame, cells: &FrameCells, block: BlockSize) {
    let res = block.resolution() as usize;
    for (row, entries) in cells.iter().enumerate() {
        if entries.len() != res {
            debug!(row, entries = entries.len(), expected = res, "row width differs from grid");
        }
        for (col, rgba) in entries.iter().enumerate() {
            paint_cell(frame.canvas_mut(), col as u32, row as u32, block, image::Rgba(*rgba));
        }
    }
}
