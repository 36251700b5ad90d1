//! Command-line interface implementation
//!
//! The command line is a headless shell around [`EditorSession`]: each
//! mutating command opens a project, applies one editor operation and saves
//! the result.

mod edit;
mod frame;
mod info;
mod project;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::codec::FileKind;
use crate::config::{load_config, PxsConfig};
use crate::session::{EditorError, EditorSession, ScriptedShell};

pub use frame::FrameAction;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// pxs - edit pixel sprites stored as .ssp projects
#[derive(Parser)]
#[command(name = "pxs")]
#[command(about = "pxs - edit pixel sprite projects (.ssp) from the command line")]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of searching for pxs.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty project
    New {
        /// Project file to create (.ssp)
        output: PathBuf,

        /// Grid resolution: 8, 16, 32 or 64 cells per side
        #[arg(long)]
        grid: Option<u32>,

        /// Number of blank frames
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        frames: u32,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show grid size and frame details of a project
    Info {
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Paint blocks at canvas points
    Paint {
        input: PathBuf,

        /// Points as X,Y (canvas pixels, or cells with --cells)
        #[arg(required = true, value_parser = parse_point)]
        points: Vec<(i32, i32)>,

        /// Paint color (#RGB, #RRGGBB, swatch name or CSS color)
        #[arg(short, long)]
        color: Option<String>,

        /// Treat points as grid cells instead of canvas pixels
        #[arg(long)]
        cells: bool,

        /// Frame number to edit (1-based)
        #[arg(short, long, default_value = "1")]
        frame: usize,

        /// Write the result here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Erase blocks at canvas points
    Erase {
        input: PathBuf,

        /// Points as X,Y (canvas pixels, or cells with --cells)
        #[arg(required = true, value_parser = parse_point)]
        points: Vec<(i32, i32)>,

        #[arg(long)]
        cells: bool,

        #[arg(short, long, default_value = "1")]
        frame: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fill a whole frame with one color
    Fill {
        input: PathBuf,

        #[arg(short, long)]
        color: Option<String>,

        #[arg(short, long, default_value = "1")]
        frame: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear a frame to transparent
    Clear {
        input: PathBuf,

        #[arg(short, long, default_value = "1")]
        frame: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Change the grid resolution, resampling every frame
    Resize {
        input: PathBuf,

        /// New grid resolution: 8, 16, 32 or 64 cells per side
        #[arg(long)]
        grid: u32,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add, duplicate or delete frames
    Frame {
        #[command(subcommand)]
        action: FrameAction,
    },

    /// Place a stamp at a canvas point
    Stamp {
        input: PathBuf,

        /// Stamp name (see `pxs stamps`)
        name: String,

        /// Top-left corner as X,Y in canvas pixels
        #[arg(long, value_parser = parse_point)]
        at: (i32, i32),

        #[arg(short, long, default_value = "1")]
        frame: usize,

        /// Directory of extra PNG stamps
        #[arg(long)]
        stamps_dir: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available stamps
    Stamps {
        /// Directory of extra PNG stamps
        #[arg(long)]
        stamps_dir: Option<PathBuf>,
    },

    /// Convert a PNG, JPEG or animated GIF into a project
    Import {
        input: PathBuf,

        /// Project file to write (.ssp)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render the animation preview as a GIF
    Preview {
        input: PathBuf,

        /// GIF file to write
        #[arg(short, long)]
        output: PathBuf,

        /// Frames per second (1-60)
        #[arg(long)]
        fps: Option<u32>,

        /// Enlarge each cell to this many pixels
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=64))]
        scale: u32,
    },
}

/// Parse an `X,Y` pair.
fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("invalid X in '{}': {}", s, e))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("invalid Y in '{}': {}", s, e))?;
    Ok((x, y))
}

fn initialise_tracing(config: &PxsConfig, verbose: bool) {
    let fallback = if verbose {
        "debug".to_string()
    } else {
        config.logging.filter.clone().unwrap_or_else(|| "info".to_string())
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Open a project into a fresh session.
pub(crate) fn open_session(input: &Path, config: &PxsConfig) -> Result<EditorSession, EditorError> {
    let mut session = EditorSession::new(config.block_size());
    session.set_color(config.color());
    let mut shell = ScriptedShell::new().with_open_path(input);
    session.open(&mut shell)?;
    Ok(session)
}

/// Save a session to `output`, or back over `input`.
pub(crate) fn save_session(
    session: &mut EditorSession,
    input: &Path,
    output: Option<&Path>,
) -> ExitCode {
    let target = output.unwrap_or(input);
    if !matches!(FileKind::from_path(target), Ok(FileKind::Project)) {
        eprintln!("Error: '{}' is not a .ssp project; pass --output", target.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    match session.save_to(target) {
        Ok(()) => {
            eprintln!("Wrote: {}", target.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    initialise_tracing(&config, cli.verbose);

    match cli.command {
        Commands::New { output, grid, frames, force } => {
            project::run_new(&output, grid, frames, force, &config)
        }
        Commands::Info { input, json } => info::run_info(&input, json, &config),
        Commands::Paint { input, points, color, cells, frame, output } => edit::run_paint(
            &input,
            &points,
            color.as_deref(),
            cells,
            frame,
            output.as_deref(),
            &config,
        ),
        Commands::Erase { input, points, cells, frame, output } => {
            edit::run_erase(&input, &points, cells, frame, output.as_deref(), &config)
        }
        Commands::Fill { input, color, frame, output } => {
            edit::run_fill(&input, color.as_deref(), frame, output.as_deref(), &config)
        }
        Commands::Clear { input, frame, output } => {
            edit::run_clear(&input, frame, output.as_deref(), &config)
        }
        Commands::Resize { input, grid, output } => {
            edit::run_resize(&input, grid, output.as_deref(), &config)
        }
        Commands::Frame { action } => frame::run_frame(action, &config),
        Commands::Stamp { input, name, at, frame, stamps_dir, output } => edit::run_stamp(
            &input,
            &name,
            at,
            frame,
            stamps_dir.as_deref(),
            output.as_deref(),
            &config,
        ),
        Commands::Stamps { stamps_dir } => info::run_stamps(stamps_dir.as_deref(), &config),
        Commands::Import { input, output } => project::run_import(&input, &output, &config),
        Commands::Preview { input, output, fps, scale } => {
            project::run_preview(&input, &output, fps, scale, &config)
        }
    }
}
