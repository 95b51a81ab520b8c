//! Fixed-delay frame pacing
//!
//! The simulation advances exactly once per frame delay. Redraws the platform
//! sends on its own (resize, expose, restore) only re-render the current state.

use std::time::{Duration, Instant};

/// Decides when the next simulation step is due
pub struct FramePacer {
    delay: Duration,
    next_frame: Instant,
    step_due: bool,
}

impl FramePacer {
    /// Create a pacer whose first frame is due at `now`
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            next_frame: now,
            step_due: false,
        }
    }

    /// Restart the schedule, e.g. once the window exists
    pub fn reset(&mut self, now: Instant) {
        self.next_frame = now;
        self.step_due = false;
    }

    /// Check the schedule when the event loop goes idle
    ///
    /// Returns true when a frame is due, in which case a redraw should be
    /// requested. The step stays pending until [`FramePacer::take_step`].
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.step_due = true;
        self.next_frame = now + self.delay;
        true
    }

    /// Claim the pending step; only the first redraw after `poll` gets it
    pub fn take_step(&mut self) -> bool {
        std::mem::take(&mut self.step_due)
    }

    /// When the event loop should wake up next
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }
}
