//! Raster and animated raster import.
//!
//! Imported images are stretched to the 512x512 canvas with nearest-neighbor
//! sampling.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use tracing::debug;

use super::CodecError;
use crate::canvas::Canvas;

/// Decode a static raster image into a canvas.
pub fn import_raster(path: &Path) -> Result<Canvas, CodecError> {
    let image = image::open(path)
        .map_err(|source| CodecError::Image { path: path.to_path_buf(), source })?
        .to_rgba8();
    debug!(path = %path.display(), width = image.width(), height = image.height(), "raster decoded");
    Ok(Canvas::from_image(&image))
}

/// Decode every frame of an animated GIF into canvases.
///
/// Frames are fully composited by the decoder, so each canvas holds what
/// the animation shows at that point.
pub fn import_animation(path: &Path) -> Result<Vec<Canvas>, CodecError> {
    let file = File::open(path).map_err(|source| CodecError::Io { path: path.to_path_buf(), source })?;
    let image_err = |source| CodecError::Image { path: path.to_path_buf(), source };

    let decoder = GifDecoder::new(BufReader::new(file)).map_err(image_err)?;
    let frames = decoder.into_frames().collect_frames().map_err(image_err)?;
    if frames.is_empty() {
        return Err(CodecError::EmptyAnimation(path.to_path_buf()));
    }
    debug!(path = %path.display(), frames = frames.len(), "animation decoded");

    Ok(frames.into_iter().map(|frame| Canvas::from_image(&frame.into_buffer())).collect())
}
