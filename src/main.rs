//! pxs - command-line editor for pixel sprite projects

use std::process::ExitCode;

use pixelsprite::cli;

fn main() -> ExitCode {
    cli::run()
}
