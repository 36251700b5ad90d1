//! Whole-project commands: `new`, `import`, `preview`.

use std::path::Path;
use std::process::ExitCode;

use crate::canvas::Frame;
use crate::codec::{self, FileKind};
use crate::config::PxsConfig;
use crate::grid::BlockSize;
use crate::preview::{write_preview_gif, PreviewCursor};
use crate::project::Project;

use super::{open_session, save_session, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the new command
pub fn run_new(output: &Path, grid: Option<u32>, frames: u32, force: bool, config: &PxsConfig) -> ExitCode {
    let block = match grid {
        None => config.block_size(),
        Some(g) => match BlockSize::from_resolution(g) {
            Some(b) => b,
            None => {
                eprintln!("Error: grid must be one of 8, 16, 32, 64 (got {})", g);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
    };
    if !matches!(FileKind::from_path(output), Ok(FileKind::Project)) {
        eprintln!("Error: '{}' is not a .ssp project path", output.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    if output.exists() && !force {
        eprintln!("Error: '{}' already exists (use --force to overwrite)", output.display());
        return ExitCode::from(EXIT_ERROR);
    }

    let mut project = Project::new(block);
    for _ in 1..frames {
        project.frames.push(Frame::blank());
    }
    match codec::write_project(output, &project) {
        Ok(()) => {
            eprintln!("Created: {} ({}, {} frames)", output.display(), block, frames);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the import command
pub fn run_import(input: &Path, output: &Path, config: &PxsConfig) -> ExitCode {
    if matches!(FileKind::from_path(input), Ok(FileKind::Project)) {
        eprintln!("Error: '{}' is already a project", input.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    let mut session = match open_session(input, config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    save_session(&mut session, input, Some(output))
}

/// Execute the preview command
pub fn run_preview(input: &Path, output: &Path, fps: Option<u32>, scale: u32, config: &PxsConfig) -> ExitCode {
    let cursor = match PreviewCursor::new(fps.unwrap_or(config.editor.fps)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let session = match open_session(input, config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match write_preview_gif(output, session.frames(), session.block(), scale, &cursor) {
        Ok(()) => {
            eprintln!("Wrote: {}", output.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
