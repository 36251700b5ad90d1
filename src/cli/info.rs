//! Read-only commands: `info` and `stamps`.

use std::path::Path;
use std::process::ExitCode;

use serde_json::json;

use crate::canvas::Frame;
use crate::config::PxsConfig;
use crate::grid::BlockSize;

use super::edit::load_catalog;
use super::{open_session, EXIT_ERROR, EXIT_SUCCESS};

/// Number of cells with any opacity.
fn painted_cells(frame: &Frame, block: BlockSize) -> usize {
    frame.logical_image(block).pixels().filter(|p| p.0[3] != 0).count()
}

/// Execute the info command
pub fn run_info(input: &Path, json: bool, config: &PxsConfig) -> ExitCode {
    let session = match open_session(input, config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let block = session.block();
    let painted: Vec<usize> = session.frames().iter().map(|f| painted_cells(f, block)).collect();

    if json {
        let report = json!({
            "grid": block.resolution(),
            "blockSize": block.pixels(),
            "numberOfFrames": painted.len(),
            "paintedCells": painted,
        });
        println!("{}", report);
    } else {
        println!("{}", input.display());
        println!("  Grid:   {}", block);
        println!("  Frames: {}", painted.len());
        for (i, count) in painted.iter().enumerate() {
            println!("    frame {}: {} painted cells", i + 1, count);
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the stamps command
pub fn run_stamps(stamps_dir: Option<&Path>, config: &PxsConfig) -> ExitCode {
    let catalog = match load_catalog(stamps_dir, config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    for name in catalog.names() {
        if let Some(stamp) = catalog.get(name) {
            let (w, h) = stamp.dimensions();
            println!("{:<16} {}x{}", name, w, h);
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}
