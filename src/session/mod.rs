//! Editing session: the project plus everything the user is doing to it.
//!
//! All state that the editor mutates in response to user actions lives on
//! [`EditorSession`]: the project, the unsaved-changes flag, the active tool
//! and color, and the chosen stamp. Every operation runs to completion
//! synchronously; load paths build the replacement project first and swap
//! it in only once it is complete.

mod shell;
mod tool;

use std::path::Path;

use image::Rgba;
use thiserror::Error;
use tracing::debug;

pub use shell::{EditorEvent, SaveChoice, ScriptedShell, Shell};
pub use tool::ActiveTool;

use crate::canvas::TRANSPARENT;
use crate::codec::{self, CodecError, FileKind};
use crate::frames::{FrameError, FrameSequence};
use crate::grid::BlockSize;
use crate::paint::paint_point;
use crate::project::Project;
use crate::stamp::{place_stamp, StampImage};

/// Default paint color: opaque black.
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Stamp mode is entered by choosing a stamp, not by selecting the tool.
    #[error("choose a stamp from the catalog first")]
    StampNotChosen,
}

/// How a flow that may prompt the user ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Completed,
    Cancelled,
}

/// Result of a click on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No painting tool was active.
    Ignored,
    Painted,
    StampPlaced,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    project: Project,
    dirty: bool,
    tool: ActiveTool,
    color: Rgba<u8>,
    stamp: Option<StampImage>,
    events: Vec<EditorEvent>,
}

impl EditorSession {
    /// A session on a fresh project at the given block size.
    pub fn new(block: BlockSize) -> Self {
        Self::with_project(Project::new(block))
    }

    /// A clean session on an existing project.
    pub fn with_project(project: Project) -> Self {
        Self {
            project,
            dirty: false,
            tool: ActiveTool::None,
            color: DEFAULT_COLOR,
            stamp: None,
            events: Vec::new(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn frames(&self) -> &FrameSequence {
        &self.project.frames
    }

    pub fn block(&self) -> BlockSize {
        self.project.block
    }

    /// True when the project has changes since the last save or load.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn tool(&self) -> ActiveTool {
        self.tool
    }

    /// The color the user picked, regardless of the eraser.
    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    /// The color a paint action will write right now.
    pub fn paint_color(&self) -> Rgba<u8> {
        if self.tool == ActiveTool::Eraser {
            TRANSPARENT
        } else {
            self.color
        }
    }

    pub fn stamp(&self) -> Option<&StampImage> {
        self.stamp.as_ref()
    }

    /// Take the notifications produced since the last call.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.events.push(EditorEvent::Redraw);
    }

    // --- tools and color -------------------------------------------------

    /// Switch tools. The stamp tool can only be entered through
    /// [`choose_stamp`](Self::choose_stamp).
    pub fn select_tool(&mut self, tool: ActiveTool) -> Result<(), EditorError> {
        if tool == ActiveTool::Stamp {
            return Err(EditorError::StampNotChosen);
        }
        debug!(from = %self.tool, to = %tool, "tool selected");
        self.tool = tool;
        Ok(())
    }

    /// Pick a stamp from the catalog and arm it for one placement.
    pub fn choose_stamp(&mut self, stamp: StampImage) {
        debug!(stamp = stamp.name(), "stamp chosen");
        self.stamp = Some(stamp);
        self.tool = ActiveTool::Stamp;
    }

    /// Set the picked color. While erasing, the color is remembered and
    /// takes effect once another tool is selected.
    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    // --- canvas edits ----------------------------------------------------

    /// Handle a click at a device point on the current frame.
    pub fn click(&mut self, x: i32, y: i32) -> ClickOutcome {
        match self.tool {
            ActiveTool::None => ClickOutcome::Ignored,
            ActiveTool::Stamp => {
                let Some(stamp) = self.stamp.as_ref() else {
                    self.tool = ActiveTool::None;
                    return ClickOutcome::Ignored;
                };
                place_stamp(self.project.frames.current_mut().canvas_mut(), x, y, stamp);
                self.tool = ActiveTool::None;
                self.touch();
                self.events.push(EditorEvent::StampPlaced);
                ClickOutcome::StampPlaced
            }
            ActiveTool::Pencil | ActiveTool::Eraser => {
                let color = self.paint_color();
                let block = self.project.block;
                paint_point(self.project.frames.current_mut().canvas_mut(), x, y, block, color);
                self.touch();
                ClickOutcome::Painted
            }
        }
    }

    /// Fill the whole current frame with the paint color.
    pub fn fill_frame(&mut self) {
        let color = self.paint_color();
        self.project.frames.current_mut().canvas_mut().fill(color);
        self.touch();
    }

    pub fn clear_frame(&mut self) {
        self.project.frames.current_mut().canvas_mut().clear();
        self.touch();
    }

    /// Change the block size, resampling every frame.
    pub fn set_block_size(&mut self, block: BlockSize) {
        if self.project.resize(block) {
            self.touch();
        }
    }

    /// Apply a resize-selector index (see [`BlockSize::from_selector`]).
    pub fn set_resize_selector(&mut self, selector: i32) {
        self.set_block_size(BlockSize::from_selector(selector));
    }

    // --- frame lifecycle -------------------------------------------------

    /// Announce a new frame count and current frame after a lifecycle edit.
    fn frames_changed(&mut self) {
        let number = self.project.frames.current_index() + 1;
        self.events.push(EditorEvent::FrameCountChanged(self.project.frames.len()));
        self.events.push(EditorEvent::FrameSelected(number));
        self.touch();
    }

    /// Insert a blank frame after the current one and select it.
    pub fn add_frame(&mut self) -> Result<(), EditorError> {
        let number = self.project.frames.current_index() + 1;
        self.project.frames.insert_blank(number)?;
        self.project.frames.select(number + 1)?;
        self.frames_changed();
        Ok(())
    }

    /// Copy the current frame after itself and select the copy.
    pub fn duplicate_frame(&mut self) -> Result<(), EditorError> {
        let number = self.project.frames.current_index() + 1;
        self.project.frames.duplicate(number)?;
        self.project.frames.select(number + 1)?;
        self.frames_changed();
        Ok(())
    }

    /// Delete the current frame and select the one before it.
    ///
    /// Refused when it is the only frame.
    pub fn delete_frame(&mut self) -> Result<(), EditorError> {
        let number = self.project.frames.current_index() + 1;
        self.project.frames.delete(number)?;
        self.project.frames.select(number.saturating_sub(1).max(1))?;
        self.frames_changed();
        Ok(())
    }

    /// Make the 1-based frame `number` current.
    pub fn select_frame(&mut self, number: usize) -> Result<(), EditorError> {
        self.project.frames.select(number)?;
        self.events.push(EditorEvent::FrameSelected(number));
        Ok(())
    }

    // --- file flows ------------------------------------------------------

    fn report<T>(shell: &mut dyn Shell, result: Result<T, EditorError>) -> Result<T, EditorError> {
        if let Err(e) = &result {
            debug!(error = %e, "operation failed");
            shell.show_error(&e.to_string());
        }
        result
    }

    /// Give the user a chance to save before unsaved work is destroyed.
    ///
    /// Returns `Cancelled` when the destructive operation must not go ahead,
    /// including when the user chose to save but then cancelled the save.
    fn guard_unsaved(&mut self, shell: &mut dyn Shell) -> Result<Flow, EditorError> {
        if !self.dirty {
            return Ok(Flow::Completed);
        }
        match shell.confirm_unsaved_changes() {
            SaveChoice::Save => self.save(shell),
            SaveChoice::Discard => Ok(Flow::Completed),
            SaveChoice::Cancel => Ok(Flow::Cancelled),
        }
    }

    /// Reset to a single blank frame, keeping the block size.
    pub fn new_project(&mut self, shell: &mut dyn Shell) -> Result<Flow, EditorError> {
        if self.guard_unsaved(shell)? == Flow::Cancelled {
            return Ok(Flow::Cancelled);
        }
        self.project.frames.truncate_to_first();
        self.project.frames.current_mut().canvas_mut().clear();
        self.dirty = false;
        self.events.push(EditorEvent::FrameCountChanged(1));
        self.events.push(EditorEvent::FrameSelected(1));
        self.events.push(EditorEvent::Redraw);
        debug!("new project");
        Ok(Flow::Completed)
    }

    /// Ask for a file and open it as a project, raster or animation.
    pub fn open(&mut self, shell: &mut dyn Shell) -> Result<Flow, EditorError> {
        if self.guard_unsaved(shell)? == Flow::Cancelled {
            return Ok(Flow::Cancelled);
        }
        let Some(path) = shell.pick_open_path() else {
            return Ok(Flow::Cancelled);
        };
        let result = self.load_path(&path);
        Self::report(shell, result).map(|_| Flow::Completed)
    }

    fn load_path(&mut self, path: &Path) -> Result<(), EditorError> {
        match FileKind::from_path(path)? {
            FileKind::Project => {
                let project = codec::read_project(path)?;
                self.project = project;
                self.dirty = false;
                self.events.push(EditorEvent::ResizeSelector(self.project.block.selector()));
                self.events.push(EditorEvent::FrameCountChanged(self.project.frames.len()));
                self.events.push(EditorEvent::FrameSelected(1));
            }
            FileKind::Raster => {
                let canvas = codec::import_raster(path)?;
                self.project = self.project.with_raster(canvas);
                self.dirty = true;
                self.events.push(EditorEvent::ResizeSelector(self.project.block.selector()));
                debug!(path = %path.display(), "raster imported into frame 1");
            }
            FileKind::Animation => {
                let canvases = codec::import_animation(path)?;
                let project = Project::from_animation(canvases)
                    .ok_or_else(|| CodecError::EmptyAnimation(path.to_path_buf()))?;
                self.project = project;
                self.dirty = true;
                self.events.push(EditorEvent::ResizeSelector(self.project.block.selector()));
                self.events.push(EditorEvent::FrameCountChanged(self.project.frames.len()));
                self.events.push(EditorEvent::FrameSelected(1));
                debug!(path = %path.display(), frames = self.project.frames.len(), "animation imported");
            }
        }
        self.events.push(EditorEvent::Redraw);
        Ok(())
    }

    /// Ask for a destination and save the project there.
    pub fn save(&mut self, shell: &mut dyn Shell) -> Result<Flow, EditorError> {
        let Some(path) = shell.pick_save_path() else {
            return Ok(Flow::Cancelled);
        };
        let result = self.save_to(&path);
        Self::report(shell, result)?;
        shell.show_message("Project has been saved.");
        Ok(Flow::Completed)
    }

    /// Save to a known path without prompting.
    pub fn save_to(&mut self, path: &Path) -> Result<(), EditorError> {
        codec::write_project(path, &self.project)?;
        self.dirty = false;
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(BlockSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stamp::StampCatalog;
    use image::RgbaImage;
    use tempfile::tempdir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn pencil_session() -> EditorSession {
        let mut session = EditorSession::default();
        session.select_tool(ActiveTool::Pencil).unwrap();
        session.set_color(RED);
        session
    }

    #[test]
    fn test_initial_state() {
        let session = EditorSession::default();
        assert!(!session.is_dirty());
        assert_eq!(session.tool(), ActiveTool::None);
        assert_eq!(session.color(), DEFAULT_COLOR);
        assert_eq!(session.block(), BlockSize::Px16);
        assert_eq!(session.frames().len(), 1);
    }

    #[test]
    fn test_click_without_tool_is_ignored() {
        let mut session = EditorSession::default();
        assert_eq!(session.click(10, 10), ClickOutcome::Ignored);
        assert!(!session.is_dirty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_pencil_click_paints_block_and_marks_dirty() {
        let mut session = pencil_session();
        assert_eq!(session.click(10, 10), ClickOutcome::Painted);
        assert!(session.is_dirty());
        assert_eq!(session.frames().current().cell(BlockSize::Px16, 0, 0), Some(RED));
        assert_eq!(session.drain_events(), vec![EditorEvent::Redraw]);
    }

    #[test]
    fn test_eraser_forces_transparent_and_pencil_restores_color() {
        let mut session = pencil_session();
        session.click(0, 0);
        session.click(100, 100);

        session.select_tool(ActiveTool::Eraser).unwrap();
        assert_eq!(session.paint_color(), TRANSPARENT);
        session.set_color(Rgba([0, 0, 255, 255]));
        assert_eq!(session.paint_color(), TRANSPARENT);
        session.click(0, 0);
        assert_eq!(session.frames().current().canvas().get(0, 0), Some(TRANSPARENT));

        session.select_tool(ActiveTool::Pencil).unwrap();
        session.set_color(Rgba([0, 255, 0, 255]));
        session.click(0, 0);
        assert_eq!(session.frames().current().canvas().get(0, 0), Some(Rgba([0, 255, 0, 255])));
        assert_eq!(session.frames().current().canvas().get(100, 100), Some(RED));
    }

    #[test]
    fn test_eraser_fill_clears_frame() {
        let mut session = pencil_session();
        session.fill_frame();
        assert_eq!(session.frames().current().canvas().get(300, 300), Some(RED));
        session.select_tool(ActiveTool::Eraser).unwrap();
        session.fill_frame();
        assert!(session.frames().current().canvas().is_blank());
    }

    #[test]
    fn test_stamp_tool_requires_choice() {
        let mut session = EditorSession::default();
        assert!(matches!(session.select_tool(ActiveTool::Stamp), Err(EditorError::StampNotChosen)));
        assert_eq!(session.tool(), ActiveTool::None);
    }

    #[test]
    fn test_stamp_is_placed_once() {
        let mut session = pencil_session();
        let stamp = StampImage::new("block", RgbaImage::from_pixel(32, 32, RED));
        session.choose_stamp(stamp);
        assert_eq!(session.tool(), ActiveTool::Stamp);

        assert_eq!(session.click(100, 100), ClickOutcome::StampPlaced);
        let canvas = session.frames().current().canvas();
        assert_eq!(canvas.get(100, 100), Some(RED));
        assert_eq!(canvas.get(131, 131), Some(RED));
        assert_eq!(canvas.get(132, 132), Some(TRANSPARENT));
        assert_eq!(canvas.get(99, 100), Some(TRANSPARENT));

        assert_eq!(session.tool(), ActiveTool::None);
        assert!(session.stamp().is_some());
        assert_eq!(session.drain_events(), vec![EditorEvent::Redraw, EditorEvent::StampPlaced]);
        assert_eq!(session.click(300, 300), ClickOutcome::Ignored);
    }

    #[test]
    fn test_selecting_tool_cancels_stamp_mode() {
        let mut session = EditorSession::default();
        session.choose_stamp(StampCatalog::builtin().get("crab").unwrap().clone());
        session.select_tool(ActiveTool::Eraser).unwrap();
        assert_eq!(session.tool(), ActiveTool::Eraser);
    }

    #[test]
    fn test_frame_lifecycle_follows_selector() {
        let mut session = pencil_session();
        session.click(0, 0);

        session.duplicate_frame().unwrap();
        assert_eq!(session.frames().len(), 2);
        assert_eq!(session.frames().current_index(), 1);
        assert_eq!(session.frames().current().canvas().get(0, 0), Some(RED));

        session.add_frame().unwrap();
        assert_eq!(session.frames().len(), 3);
        assert_eq!(session.frames().current_index(), 2);
        assert!(session.frames().current().canvas().is_blank());

        session.delete_frame().unwrap();
        assert_eq!(session.frames().len(), 2);
        assert_eq!(session.frames().current_index(), 1);

        session.select_frame(1).unwrap();
        session.delete_frame().unwrap();
        assert_eq!(session.frames().len(), 1);
        assert_eq!(session.frames().current_index(), 0);

        assert!(matches!(session.delete_frame(), Err(EditorError::Frame(FrameError::LastFrame))));
        assert_eq!(session.frames().len(), 1);
    }

    #[test]
    fn test_frame_lifecycle_announces_count_and_selection() {
        let mut session = EditorSession::default();

        session.add_frame().unwrap();
        assert_eq!(
            session.drain_events(),
            vec![EditorEvent::FrameCountChanged(2), EditorEvent::FrameSelected(2), EditorEvent::Redraw]
        );

        session.duplicate_frame().unwrap();
        assert_eq!(
            session.drain_events(),
            vec![EditorEvent::FrameCountChanged(3), EditorEvent::FrameSelected(3), EditorEvent::Redraw]
        );

        session.delete_frame().unwrap();
        assert_eq!(
            session.drain_events(),
            vec![EditorEvent::FrameCountChanged(2), EditorEvent::FrameSelected(2), EditorEvent::Redraw]
        );

        session.select_frame(1).unwrap();
        assert_eq!(session.drain_events(), vec![EditorEvent::FrameSelected(1)]);

        assert!(session.delete_frame().is_ok());
        assert!(session.delete_frame().is_err());
        assert_eq!(
            session.drain_events(),
            vec![EditorEvent::FrameCountChanged(1), EditorEvent::FrameSelected(1), EditorEvent::Redraw]
        );
    }

    #[test]
    fn test_new_project_announces_single_frame() {
        let mut session = EditorSession::default();
        session.add_frame().unwrap();
        session.drain_events();

        let mut shell = ScriptedShell::new().with_choice(SaveChoice::Discard);
        session.new_project(&mut shell).unwrap();
        assert_eq!(
            session.drain_events(),
            vec![EditorEvent::FrameCountChanged(1), EditorEvent::FrameSelected(1), EditorEvent::Redraw]
        );
    }

    #[test]
    fn test_add_frame_in_middle() {
        let mut session = EditorSession::default();
        session.add_frame().unwrap();
        session.add_frame().unwrap();
        session.select_frame(1).unwrap();
        session.add_frame().unwrap();
        assert_eq!(session.frames().len(), 4);
        assert_eq!(session.frames().current_index(), 1);
    }

    #[test]
    fn test_resize_emits_single_redraw() {
        let mut session = pencil_session();
        session.add_frame().unwrap();
        session.drain_events();

        session.set_resize_selector(2);
        assert_eq!(session.block(), BlockSize::Px32);
        assert_eq!(session.drain_events(), vec![EditorEvent::Redraw]);

        session.set_block_size(BlockSize::Px32);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_new_project_cancel_keeps_work() {
        let mut session = pencil_session();
        session.click(0, 0);
        session.add_frame().unwrap();

        let mut shell = ScriptedShell::new().with_choice(SaveChoice::Cancel);
        assert_eq!(session.new_project(&mut shell).unwrap(), Flow::Cancelled);
        assert_eq!(session.frames().len(), 2);
        assert!(session.is_dirty());
        assert_eq!(shell.prompts, 1);
    }

    #[test]
    fn test_new_project_discard_resets() {
        let mut session = pencil_session();
        session.click(0, 0);
        session.add_frame().unwrap();
        session.set_block_size(BlockSize::Px64);

        let mut shell = ScriptedShell::new().with_choice(SaveChoice::Discard);
        assert_eq!(session.new_project(&mut shell).unwrap(), Flow::Completed);
        assert_eq!(session.frames().len(), 1);
        assert!(session.frames().current().canvas().is_blank());
        assert_eq!(session.block(), BlockSize::Px64);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_new_project_save_choice_saves_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.ssp");
        let mut session = pencil_session();
        session.click(0, 0);

        let mut shell = ScriptedShell::new().with_choice(SaveChoice::Save).with_save_path(&path);
        assert_eq!(session.new_project(&mut shell).unwrap(), Flow::Completed);
        assert!(path.exists());
        assert_eq!(shell.messages, vec!["Project has been saved.".to_string()]);
    }

    #[test]
    fn test_save_choice_with_cancelled_picker_aborts() {
        let mut session = pencil_session();
        session.click(0, 0);
        let mut shell = ScriptedShell::new().with_choice(SaveChoice::Save);
        assert_eq!(session.new_project(&mut shell).unwrap(), Flow::Cancelled);
        assert!(!session.frames().current().canvas().is_blank());
    }

    #[test]
    fn test_clean_session_is_not_prompted() {
        let mut session = EditorSession::default();
        let mut shell = ScriptedShell::new();
        assert_eq!(session.new_project(&mut shell).unwrap(), Flow::Completed);
        assert_eq!(shell.prompts, 0);
    }

    #[test]
    fn test_open_unsupported_extension_reports_error() {
        let mut session = pencil_session();
        session.click(0, 0);
        let before = session.project().clone();

        let mut shell = ScriptedShell::new().with_choice(SaveChoice::Discard).with_open_path("notes.txt");
        assert!(session.open(&mut shell).is_err());
        assert_eq!(shell.errors.len(), 1);
        assert!(shell.errors[0].contains("not supported"));
        assert_eq!(session.project(), &before);
    }

    #[test]
    fn test_open_cancelled_picker() {
        let mut session = EditorSession::default();
        let mut shell = ScriptedShell::new();
        assert_eq!(session.open(&mut shell).unwrap(), Flow::Cancelled);
        assert!(shell.errors.is_empty());
    }

    #[test]
    fn test_save_then_open_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sprite.ssp");

        let mut session = pencil_session();
        session.click(40, 40);
        session.duplicate_frame().unwrap();
        session.set_block_size(BlockSize::Px8);
        session.save_to(&path).unwrap();
        assert!(!session.is_dirty());

        let mut reopened = EditorSession::new(BlockSize::Px64);
        let mut shell = ScriptedShell::new().with_open_path(&path);
        assert_eq!(reopened.open(&mut shell).unwrap(), Flow::Completed);
        assert_eq!(reopened.block(), BlockSize::Px8);
        assert_eq!(reopened.frames().len(), 2);
        assert!(reopened.frames().iter().eq(session.frames().iter()));
        assert!(!reopened.is_dirty());
        assert_eq!(
            reopened.drain_events(),
            vec![
                EditorEvent::ResizeSelector(0),
                EditorEvent::FrameCountChanged(2),
                EditorEvent::FrameSelected(1),
                EditorEvent::Redraw
            ]
        );
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.ssp");
        std::fs::write(&path, r#"{"height":10,"width":10,"numberOfFrames":1,"frames":{"frame0":[]}}"#).unwrap();

        let mut session = pencil_session();
        session.click(0, 0);
        session.add_frame().unwrap();
        session.save_to(&dir.path().join("keep.ssp")).unwrap();
        let before = session.project().clone();

        let mut shell = ScriptedShell::new().with_open_path(&path);
        let err = session.open(&mut shell).unwrap_err();
        assert!(matches!(err, EditorError::Codec(CodecError::UnsupportedGrid(10))));
        assert_eq!(session.project(), &before);
        assert_eq!(session.frames().len(), 2);
        assert_eq!(session.block(), BlockSize::Px16);
        assert_eq!(shell.errors.len(), 1);
    }

    #[test]
    fn test_open_raster_replaces_first_frame() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("art.png");
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255])).save(&path).unwrap();

        let mut session = EditorSession::default();
        session.add_frame().unwrap();
        let mut shell = ScriptedShell::new().with_choice(SaveChoice::Discard).with_open_path(&path);
        session.open(&mut shell).unwrap();

        assert_eq!(session.frames().len(), 2);
        assert_eq!(session.block(), BlockSize::Px8);
        assert_eq!(session.frames().get(0).unwrap().canvas().get(511, 0), Some(Rgba([0, 0, 255, 255])));
        assert!(session.is_dirty());
    }
}
