//! `pxs frame` subcommands.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Subcommand;

use crate::config::PxsConfig;
use crate::session::{EditorError, EditorSession};

use super::{open_session, save_session, EXIT_ERROR, EXIT_INVALID_ARGS};

#[derive(Subcommand)]
pub enum FrameAction {
    /// Insert a blank frame after the given frame
    Add {
        input: PathBuf,

        /// Frame number (1-based) to insert after
        #[arg(short, long, default_value = "1")]
        frame: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Copy a frame and insert the copy right after it
    Duplicate {
        input: PathBuf,

        #[arg(short, long, default_value = "1")]
        frame: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a frame (the last remaining frame cannot be deleted)
    Delete {
        input: PathBuf,

        #[arg(short, long, default_value = "1")]
        frame: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type FrameOp = fn(&mut EditorSession) -> Result<(), EditorError>;

/// Execute a frame subcommand
pub fn run_frame(action: FrameAction, config: &PxsConfig) -> ExitCode {
    let op: FrameOp = match &action {
        FrameAction::Add { .. } => EditorSession::add_frame,
        FrameAction::Duplicate { .. } => EditorSession::duplicate_frame,
        FrameAction::Delete { .. } => EditorSession::delete_frame,
    };
    match action {
        FrameAction::Add { input, frame, output }
        | FrameAction::Duplicate { input, frame, output }
        | FrameAction::Delete { input, frame, output } => {
            apply(&input, frame, output.as_deref(), config, op)
        }
    }
}

fn apply(
    input: &Path,
    frame: usize,
    output: Option<&Path>,
    config: &PxsConfig,
    op: FrameOp,
) -> ExitCode {
    let mut session = match open_session(input, config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if let Err(e) = session.select_frame(frame) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    if let Err(e) = op(&mut session) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("{} frames", session.frames().len());
    save_session(&mut session, input, output)
}
