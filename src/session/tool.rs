//! Canvas tools.

use std::fmt;

/// The tool that decides what a click on the canvas does.
///
/// Tools are mutually exclusive: selecting one replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTool {
    /// Clicks are ignored.
    #[default]
    None,
    /// Paint the clicked block with the active color.
    Pencil,
    /// Paint the clicked block transparent.
    Eraser,
    /// Composite the chosen stamp at the clicked point, once.
    Stamp,
}

impl fmt::Display for ActiveTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActiveTool::None => "none",
            ActiveTool::Pencil => "pencil",
            ActiveTool::Eraser => "eraser",
            ActiveTool::Stamp => "stamp",
        };
        f.write_str(name)
    }
}
