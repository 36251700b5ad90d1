//! Canvas editing commands: `paint`, `erase`, `fill`, `clear`, `resize`, `stamp`.

use std::path::Path;
use std::process::ExitCode;

use image::Rgba;

use crate::color::parse_color;
use crate::config::PxsConfig;
use crate::grid::BlockSize;
use crate::session::{ActiveTool, EditorSession};
use crate::stamp::StampCatalog;

use super::{open_session, save_session, EXIT_ERROR, EXIT_INVALID_ARGS};

/// Open `input` and make frame `frame` current, reporting failures.
fn open_at_frame(input: &Path, frame: usize, config: &PxsConfig) -> Result<EditorSession, ExitCode> {
    let mut session = open_session(input, config).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })?;
    session.select_frame(frame).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })?;
    Ok(session)
}

fn resolve_color(color: Option<&str>) -> Result<Option<Rgba<u8>>, ExitCode> {
    color
        .map(|c| {
            parse_color(c).map_err(|e| {
                eprintln!("Error: invalid color '{}': {}", c, e);
                ExitCode::from(EXIT_INVALID_ARGS)
            })
        })
        .transpose()
}

/// Convert a command-line point to a canvas point.
fn to_device(point: (i32, i32), cells: bool, block: BlockSize) -> (i32, i32) {
    if cells {
        let size = block.pixels() as i32;
        (point.0.saturating_mul(size), point.1.saturating_mul(size))
    } else {
        point
    }
}

fn click_all(session: &mut EditorSession, points: &[(i32, i32)], cells: bool) {
    let block = session.block();
    for &point in points {
        let (x, y) = to_device(point, cells, block);
        session.click(x, y);
    }
}

/// Execute the paint command
pub fn run_paint(
    input: &Path,
    points: &[(i32, i32)],
    color: Option<&str>,
    cells: bool,
    frame: usize,
    output: Option<&Path>,
    config: &PxsConfig,
) -> ExitCode {
    let color = match resolve_color(color) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let mut session = match open_at_frame(input, frame, config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if let Some(color) = color {
        session.set_color(color);
    }
    // Only the stamp tool can be refused
    let _ = session.select_tool(ActiveTool::Pencil);
    click_all(&mut session, points, cells);
    save_session(&mut session, input, output)
}

/// Execute the erase command
pub fn run_erase(
    input: &Path,
    points: &[(i32, i32)],
    cells: bool,
    frame: usize,
    output: Option<&Path>,
    config: &PxsConfig,
) -> ExitCode {
    let mut session = match open_at_frame(input, frame, config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let _ = session.select_tool(ActiveTool::Eraser);
    click_all(&mut session, points, cells);
    save_session(&mut session, input, output)
}

/// Execute the fill command
pub fn run_fill(
    input: &Path,
    color: Option<&str>,
    frame: usize,
    output: Option<&Path>,
    config: &PxsConfig,
) -> ExitCode {
    let color = match resolve_color(color) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let mut session = match open_at_frame(input, frame, config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if let Some(color) = color {
        session.set_color(color);
    }
    session.fill_frame();
    save_session(&mut session, input, output)
}

/// Execute the clear command
pub fn run_clear(input: &Path, frame: usize, output: Option<&Path>, config: &PxsConfig) -> ExitCode {
    let mut session = match open_at_frame(input, frame, config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    session.clear_frame();
    save_session(&mut session, input, output)
}

/// Execute the resize command
pub fn run_resize(input: &Path, grid: u32, output: Option<&Path>, config: &PxsConfig) -> ExitCode {
    let Some(block) = BlockSize::from_resolution(grid) else {
        eprintln!("Error: grid must be one of 8, 16, 32, 64 (got {})", grid);
        return ExitCode::from(EXIT_INVALID_ARGS);
    };
    let mut session = match open_session(input, config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    session.set_block_size(block);
    save_session(&mut session, input, output)
}

/// Build the stamp catalog: built-ins plus PNGs from the configured or
/// given directory.
pub(crate) fn load_catalog(stamps_dir: Option<&Path>, config: &PxsConfig) -> Result<StampCatalog, ExitCode> {
    let mut catalog = StampCatalog::builtin();
    if let Some(dir) = stamps_dir.or(config.stamps.dir.as_deref()) {
        if let Err(e) = catalog.load_dir(dir) {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    }
    Ok(catalog)
}

/// Execute the stamp command
pub fn run_stamp(
    input: &Path,
    name: &str,
    at: (i32, i32),
    frame: usize,
    stamps_dir: Option<&Path>,
    output: Option<&Path>,
    config: &PxsConfig,
) -> ExitCode {
    let catalog = match load_catalog(stamps_dir, config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let Some(stamp) = catalog.get(name) else {
        eprintln!("Error: unknown stamp '{}'. Available stamps:", name);
        for available in catalog.names() {
            eprintln!("  {}", available);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    };
    let mut session = match open_at_frame(input, frame, config) {
        Ok(s) => s,
        Err(code) => return code,
    };

    session.choose_stamp(stamp.clone());
    session.click(at.0, at.1);
    save_session(&mut session, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_device_cells() {
        assert_eq!(to_device((3, 4), true, BlockSize::Px16), (48, 64));
        assert_eq!(to_device((3, 4), false, BlockSize::Px16), (3, 4));
        assert_eq!(to_device((-1, 0), true, BlockSize::Px64), (-64, 0));
    }

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color(None).ok(), Some(None));
        assert_eq!(resolve_color(Some("#ff0000")).ok(), Some(Some(Rgba([255, 0, 0, 255]))));
        assert!(resolve_color(Some("nope-nope")).is_err());
    }
}
