//! pixelsprite - frame model and file formats for a pixel-sprite editor
//!
//! This library provides:
//! - A fixed 512x512 canvas per frame, painted in blocks of 8, 16, 32 or 64 pixels
//! - Frame sequences with add, duplicate, delete and select
//! - Lossless-where-possible resampling between block sizes
//! - Stamp compositing and a stamp catalog
//! - The `.ssp` JSON project format plus PNG/JPEG/GIF import
//! - An [`session::EditorSession`] that ties the pieces to user actions

pub mod canvas;
pub mod cli;
pub mod codec;
pub mod color;
pub mod config;
pub mod frames;
pub mod grid;
pub mod paint;
pub mod preview;
pub mod project;
pub mod resize;
pub mod session;
pub mod stamp;
