//! A project: the frame sequence plus the block size it is edited at.

use tracing::debug;

use crate::canvas::{Canvas, Frame};
use crate::frames::FrameSequence;
use crate::grid::BlockSize;
use crate::resize::resample_frames;

/// Block size imports reset to, the finest grid the editor offers.
pub const IMPORT_BLOCK_SIZE: BlockSize = BlockSize::Px8;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Project {
    pub frames: FrameSequence,
    pub block: BlockSize,
}

impl Project {
    /// One blank frame at the given block size.
    pub fn new(block: BlockSize) -> Self {
        Self { frames: FrameSequence::new(), block }
    }

    /// Logical cells per canvas side.
    pub fn grid_size(&self) -> u32 {
        self.block.resolution()
    }

    /// Convert every frame to a new block size.
    ///
    /// The block size is only updated once all frames are converted.
    /// Returns false when `to` is already the current block size.
    pub fn resize(&mut self, to: BlockSize) -> bool {
        if to == self.block {
            return false;
        }
        resample_frames(&mut self.frames, self.block, to);
        debug!(from = %self.block, to = %to, "project resized");
        self.block = to;
        true
    }

    /// This project with frame 0 replaced by an imported raster.
    ///
    /// Remaining frames are kept, resampled to the import block size first.
    pub fn with_raster(&self, canvas: Canvas) -> Project {
        let mut next = self.clone();
        next.resize(IMPORT_BLOCK_SIZE);
        if let Some(first) = next.frames.get_mut(0) {
            *first = Frame::from_canvas(canvas);
        }
        next
    }

    /// A project built from decoded animation frames. Returns `None` for an
    /// empty frame list.
    pub fn from_animation(canvases: Vec<Canvas>) -> Option<Project> {
        let frames = canvases.into_iter().map(Frame::from_canvas).collect();
        let frames = FrameSequence::from_frames(frames)?;
        Some(Project { frames, block: IMPORT_BLOCK_SIZE })
    }
}
