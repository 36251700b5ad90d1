//! Project files and image import.
//!
//! Projects are stored as `.ssp` JSON documents (see [`ProjectDocument`]).
//! Static rasters (`.png`, `.jpg`) and animated GIFs can be imported into a
//! fresh frame sequence.

pub mod document;
pub mod import;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use document::{frame_key, FrameCells, ProjectDocument};
pub use import::{import_animation, import_raster};

use crate::project::Project;

/// File extension of project documents.
pub const PROJECT_EXTENSION: &str = "ssp";

/// Errors from reading, writing or importing files.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error occurred while parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("serialized project is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("image must be square (got {width}x{height})")]
    NonSquare { width: u32, height: u32 },
    #[error("unable to load image: compatible sizes are 8x8, 16x16, 32x32, 64x64 (got {0}x{0})")]
    UnsupportedGrid(u32),
    /// Grid sizes that pass the size table but have no editable block size.
    #[error("{0}x{0} projects cannot be edited at their original resolution")]
    AmbiguousGrid(u32),
    #[error("project is missing '{0}'")]
    MissingFrame(String),
    #[error("invalid or unsupported image '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("animation '{0}' contains no frames")]
    EmptyAnimation(PathBuf),
    #[error("selected file type is not supported: '{0}'")]
    UnsupportedFileType(String),
}

/// What kind of file a path refers to, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Project,
    Raster,
    Animation,
}

impl FileKind {
    /// Classify a path by its (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            PROJECT_EXTENSION => Ok(FileKind::Project),
            "png" | "jpg" | "jpeg" => Ok(FileKind::Raster),
            "gif" => Ok(FileKind::Animation),
            _ => Err(CodecError::UnsupportedFileType(path.display().to_string())),
        }
    }
}

/// Parse a project document from JSON text.
pub fn parse_document(json: &str) -> Result<ProjectDocument, CodecError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a document as indented JSON (four-space indent).
pub fn to_json(doc: &ProjectDocument) -> Result<String, CodecError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    doc.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}

/// Load and decode a project file.
pub fn read_project(path: &Path) -> Result<Project, CodecError> {
    let json =
        fs::read_to_string(path).map_err(|source| CodecError::Io { path: path.to_path_buf(), source })?;
    let project = parse_document(&json)?.decode()?;
    debug!(path = %path.display(), frames = project.frames.len(), grid = project.grid_size(), "project loaded");
    Ok(project)
}

/// Encode and write a project file, creating parent directories.
pub fn write_project(path: &Path, project: &Project) -> Result<(), CodecError> {
    let io_err = |source| CodecError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let json = to_json(&ProjectDocument::encode(project))?;
    fs::write(path, json).map_err(io_err)?;
    debug!(path = %path.display(), frames = project.frames.len(), "project saved");
    Ok(())
}
