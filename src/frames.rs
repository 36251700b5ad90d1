//! The ordered frame sequence that makes up an animation.
//!
//! Positions are 0-based internally. `duplicate`, `delete` and `select` take
//! the 1-based frame numbers the frame selector displays, matching how the
//! editor numbers frames for the user.

use thiserror::Error;

use crate::canvas::Frame;

/// Errors from structural frame operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The sequence must always keep at least one frame.
    #[error("cannot delete the last remaining frame")]
    LastFrame,
    /// Frame number or insertion point is outside the sequence.
    #[error("frame {index} is out of range (sequence has {len} frames)")]
    OutOfRange { index: usize, len: usize },
}

/// An ordered, never-empty list of frames with a current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    current: usize,
}

impl FrameSequence {
    /// A sequence holding exactly one blank frame.
    pub fn new() -> Self {
        Self { frames: vec![Frame::blank()], current: 0 }
    }

    /// Build a sequence from prepared frames. Returns `None` when `frames`
    /// is empty.
    pub fn from_frames(frames: Vec<Frame>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self { frames, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// 0-based position of the current frame.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Frame {
        &self.frames[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.current]
    }

    /// Frame at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Frame> {
        self.frames.iter_mut()
    }

    /// Insert a blank frame at 0-based `at` (valid range `0..=len`).
    ///
    /// The current position is left alone; callers reposition it.
    pub fn insert_blank(&mut self, at: usize) -> Result<(), FrameError> {
        if at > self.frames.len() {
            return Err(FrameError::OutOfRange { index: at, len: self.frames.len() });
        }
        self.frames.insert(at, Frame::blank());
        Ok(())
    }

    /// Append a frame to the end of the sequence.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Deep-copy frame number `number` (1-based) and insert the copy right
    /// after it.
    pub fn duplicate(&mut self, number: usize) -> Result<(), FrameError> {
        let source = self.position(number)?;
        let copy = self.frames[source].clone();
        self.frames.insert(source + 1, copy);
        Ok(())
    }

    /// Remove frame number `number` (1-based).
    ///
    /// Refused with [`FrameError::LastFrame`] when only one frame is left.
    /// The current position is clamped back into range.
    pub fn delete(&mut self, number: usize) -> Result<Frame, FrameError> {
        let index = self.position(number)?;
        if self.frames.len() == 1 {
            return Err(FrameError::LastFrame);
        }
        let removed = self.frames.remove(index);
        if self.current >= self.frames.len() {
            self.current = self.frames.len() - 1;
        }
        Ok(removed)
    }

    /// Make frame number `number` (1-based) current.
    pub fn select(&mut self, number: usize) -> Result<(), FrameError> {
        self.current = self.position(number)?;
        Ok(())
    }

    /// Drop every frame but the first and make it current.
    pub fn truncate_to_first(&mut self) {
        self.frames.truncate(1);
        self.current = 0;
    }

    fn position(&self, number: usize) -> Result<usize, FrameError> {
        if number == 0 || number > self.frames.len() {
            return Err(FrameError::OutOfRange { index: number, len: self.frames.len() });
        }
        Ok(number - 1)
    }
}

impl Default for FrameSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn marked(color: Rgba<u8>) -> Frame {
        let mut frame = Frame::blank();
        frame.canvas_mut().set(0, 0, color);
        frame
    }

    fn marker(seq: &FrameSequence, index: usize) -> Rgba<u8> {
        seq.get(index).unwrap().canvas().get(0, 0).unwrap()
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    #[test]
    fn test_new_sequence_has_one_blank_frame() {
        let seq = FrameSequence::new();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.current_index(), 0);
        assert!(seq.current().canvas().is_blank());
    }

    #[test]
    fn test_from_frames_rejects_empty() {
        assert!(FrameSequence::from_frames(Vec::new()).is_none());
        assert_eq!(FrameSequence::from_frames(vec![Frame::blank()]).unwrap().len(), 1);
    }

    #[test]
    fn test_insert_blank_positions() {
        let mut seq = FrameSequence::from_frames(vec![marked(RED)]).unwrap();
        seq.insert_blank(0).unwrap();
        assert_eq!(seq.len(), 2);
        assert!(seq.get(0).unwrap().canvas().is_blank());
        assert_eq!(marker(&seq, 1), RED);

        seq.insert_blank(2).unwrap();
        assert_eq!(seq.len(), 3);
        assert!(seq.get(2).unwrap().canvas().is_blank());
    }

    #[test]
    fn test_insert_blank_past_end_fails() {
        let mut seq = FrameSequence::new();
        assert_eq!(seq.insert_blank(2), Err(FrameError::OutOfRange { index: 2, len: 1 }));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_duplicate_inserts_deep_copy_after_source() {
        let mut seq = FrameSequence::from_frames(vec![marked(RED), marked(GREEN)]).unwrap();
        seq.duplicate(1).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(marker(&seq, 0), RED);
        assert_eq!(marker(&seq, 1), RED);
        assert_eq!(marker(&seq, 2), GREEN);

        // Mutating the copy leaves the original alone
        seq.get_mut(1).unwrap().canvas_mut().set(0, 0, GREEN);
        assert_eq!(marker(&seq, 0), RED);
    }

    #[test]
    fn test_duplicate_out_of_range() {
        let mut seq = FrameSequence::new();
        assert!(seq.duplicate(0).is_err());
        assert!(seq.duplicate(2).is_err());
    }

    #[test]
    fn test_delete_refuses_last_frame() {
        let mut seq = FrameSequence::new();
        assert_eq!(seq.delete(1).unwrap_err(), FrameError::LastFrame);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_delete_removes_numbered_frame_and_clamps_current() {
        let mut seq = FrameSequence::from_frames(vec![marked(RED), marked(GREEN)]).unwrap();
        seq.select(2).unwrap();
        let removed = seq.delete(2).unwrap();
        assert_eq!(removed.canvas().get(0, 0), Some(GREEN));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_never_empty_under_duplicate_delete_churn() {
        let mut seq = FrameSequence::new();
        for round in 0..20 {
            if round % 3 == 0 {
                seq.duplicate(seq.len()).unwrap();
            }
            while seq.len() > 1 {
                seq.delete(1).unwrap();
            }
            assert!(seq.delete(1).is_err());
            assert_eq!(seq.len(), 1);
        }
    }

    #[test]
    fn test_select_is_one_based() {
        let mut seq = FrameSequence::from_frames(vec![marked(RED), marked(GREEN)]).unwrap();
        seq.select(2).unwrap();
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.current().canvas().get(0, 0), Some(GREEN));
    }

    #[test]
    fn test_select_out_of_range_keeps_current() {
        let mut seq = FrameSequence::new();
        assert!(seq.select(0).is_err());
        assert!(seq.select(5).is_err());
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_truncate_to_first() {
        let mut seq = FrameSequence::from_frames(vec![marked(RED), marked(GREEN)]).unwrap();
        seq.select(2).unwrap();
        seq.truncate_to_first();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(marker(&seq, 0), RED);
    }
}
