//! Animation preview.
//!
//! The preview loop only reads the frame sequence. Frames can be added or
//! removed between ticks, so the cursor re-checks the length every time.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};
use image::imageops::{self, FilterType};
use image::{Delay, Frame as GifFrame, RgbaImage};
use thiserror::Error;
use tracing::debug;

use crate::frames::FrameSequence;
use crate::grid::BlockSize;

/// Default preview rate in frames per second.
pub const DEFAULT_FPS: u32 = 4;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode preview: {0}")]
    Encode(#[from] image::ImageError),
    #[error("fps must be between 1 and 60 (got {0})")]
    InvalidFps(u32),
}

/// Position of the preview within the frame sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCursor {
    position: usize,
    fps: u32,
}

impl PreviewCursor {
    pub fn new(fps: u32) -> Result<Self, PreviewError> {
        if !(1..=60).contains(&fps) {
            return Err(PreviewError::InvalidFps(fps));
        }
        Ok(Self { position: 0, fps })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Time between ticks: `1000 / fps` milliseconds.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.fps))
    }

    /// Index of the frame to show on this tick, then advance.
    ///
    /// Wraps to the first frame once the position passes the end of the
    /// sequence as it is now.
    pub fn tick(&mut self, frames: &FrameSequence) -> usize {
        if self.position >= frames.len() {
            self.position = 0;
        }
        let shown = self.position;
        self.position += 1;
        shown
    }
}

impl Default for PreviewCursor {
    fn default() -> Self {
        Self { position: 0, fps: DEFAULT_FPS }
    }
}

/// Every frame rendered at its logical resolution, optionally enlarged by
/// an integer `scale` with nearest-neighbor sampling.
pub fn preview_images(frames: &FrameSequence, block: BlockSize, scale: u32) -> Vec<RgbaImage> {
    let scale = scale.max(1);
    frames
        .iter()
        .map(|frame| {
            let image = frame.logical_image(block);
            if scale == 1 {
                image
            } else {
                let size = block.resolution() * scale;
                imageops::resize(&image, size, size, FilterType::Nearest)
            }
        })
        .collect()
}

/// Write the preview as a looping animated GIF played at `cursor`'s rate.
pub fn write_preview_gif(
    path: &Path,
    frames: &FrameSequence,
    block: BlockSize,
    scale: u32,
    cursor: &PreviewCursor,
) -> Result<(), PreviewError> {
    let io_err = |source| PreviewError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    // GIF delays are stored in centiseconds
    let delay_ms = (cursor.interval().as_millis() as u32 / 10).max(1) * 10;
    let images = preview_images(frames, block, scale);
    let count = images.len();
    for image in images {
        encoder.encode_frame(GifFrame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1)))?;
    }

    debug!(path = %path.display(), frames = count, fps = cursor.fps(), "preview written");
    Ok(())
}
