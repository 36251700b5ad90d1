//! The contract between the editor core and whatever hosts it.
//!
//! The core asks the shell for file paths, for a save/discard/cancel
//! decision before destroying unsaved work, and to show messages. It tells
//! the shell what changed through [`EditorEvent`]s.

use std::collections::VecDeque;
use std::path::PathBuf;

/// Notifications the shell must react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// Frame contents changed; redraw the canvas and previews.
    Redraw,
    /// The number of frames changed; update the frame selector range.
    FrameCountChanged(usize),
    /// The resize selector should show this index.
    ResizeSelector(u32),
    /// The current frame changed to this 1-based frame number.
    FrameSelected(usize),
    /// A stamp was just placed and stamp mode has ended.
    StampPlaced,
}

/// Answer to "the project has unsaved changes".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Services the editor core consumes from its host.
pub trait Shell {
    /// Ask for a file to open. `None` means the user cancelled.
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask where to save the project. `None` means the user cancelled.
    fn pick_save_path(&mut self) -> Option<PathBuf>;

    /// Ask what to do with unsaved changes.
    fn confirm_unsaved_changes(&mut self) -> SaveChoice;

    /// Show an error to the user.
    fn show_error(&mut self, message: &str);

    /// Show an informational message.
    fn show_message(&mut self, _message: &str) {}
}

/// A shell that answers from preset values and records what it was told.
///
/// Used by the command-line front end, which has no interactive dialogs,
/// and by tests.
#[derive(Debug, Clone)]
pub struct ScriptedShell {
    open_paths: VecDeque<PathBuf>,
    save_path: Option<PathBuf>,
    choice: SaveChoice,
    pub errors: Vec<String>,
    pub messages: Vec<String>,
    pub prompts: usize,
}

impl ScriptedShell {
    pub fn new() -> Self {
        Self {
            open_paths: VecDeque::new(),
            save_path: None,
            choice: SaveChoice::Cancel,
            errors: Vec::new(),
            messages: Vec::new(),
            prompts: 0,
        }
    }

    /// Queue a path for the next open request.
    pub fn with_open_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_paths.push_back(path.into());
        self
    }

    /// Path returned by every save request.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// Answer given to unsaved-changes prompts (default: cancel).
    pub fn with_choice(mut self, choice: SaveChoice) -> Self {
        self.choice = choice;
        self
    }

}

impl Default for ScriptedShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for ScriptedShell {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.open_paths.pop_front()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self.save_path.clone()
    }

    fn confirm_unsaved_changes(&mut self) -> SaveChoice {
        self.prompts += 1;
        self.choice
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
