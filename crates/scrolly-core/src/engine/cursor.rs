//! Timeline cursor: the current frame index and the completion latch

use super::accumulator::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineCursor {
    frame: usize,
    max_frame: usize,
    complete: bool,
}

impl TimelineCursor {
    pub fn new(max_frame: usize) -> Self {
        Self {
            frame: 0,
            max_frame,
            complete: false,
        }
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    #[inline]
    pub fn max_frame(&self) -> usize {
        self.max_frame
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.frame == self.max_frame
    }

    /// Move one frame; returns whether the index changed
    pub fn step(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Forward => self.frame.saturating_add(1),
            Direction::Backward => self.frame.saturating_sub(1),
        };
        self.set(target)
    }

    /// Jump to `frame`, clamped; returns whether the index changed
    pub fn set(&mut self, frame: usize) -> bool {
        let clamped = frame.min(self.max_frame);
        if clamped == self.frame {
            return false;
        }
        self.frame = clamped;
        true
    }

    /// Latch completion; true only on the first call since the last clear
    pub fn mark_complete(&mut self) -> bool {
        !std::mem::replace(&mut self.complete, true)
    }

    /// Clear the latch; true if it was set
    pub fn reopen(&mut self) -> bool {
        std::mem::replace(&mut self.complete, false)
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.complete = false;
    }
}
