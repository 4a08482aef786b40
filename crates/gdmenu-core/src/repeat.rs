//! Frame-counted input cooldown with typematic repeat.
//!
//! A fresh directional press always registers. While the same direction
//! stays held across consecutive frames, further moves wait for the
//! cooldown: a long pause after the first move, then a short repeat delay.

use serde::Serialize;

/// Cooldown counter plus two-frame direction history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepeatGate {
    timeout: u32,
    direction_previous: bool,
    direction_current: bool,
    initial_delay: u32,
    held_delay: u32,
}

impl RepeatGate {
    /// A gate that starts cooling down for `initial_delay` frames.
    pub fn new(initial_delay: u32, held_delay: u32) -> Self {
        Self {
            timeout: initial_delay,
            direction_previous: false,
            direction_current: false,
            initial_delay,
            held_delay,
        }
    }

    /// Frames left before a gated action is accepted.
    pub fn timeout(&self) -> u32 {
        self.timeout
    }

    /// Shift direction history at the start of a root-mode frame.
    pub fn begin_frame(&mut self) {
        self.direction_previous = self.direction_current;
        self.direction_current = false;
    }

    /// Record that a direction is asserted this frame.
    pub fn mark_direction(&mut self) {
        self.direction_current = true;
    }

    /// A direction was asserted on this frame and the one before.
    pub fn is_held(&self) -> bool {
        self.direction_previous && self.direction_current
    }

    /// Whether the cooldown has run out.
    pub fn is_ready(&self) -> bool {
        self.timeout == 0
    }

    /// Whether a directional move may happen this frame.
    pub fn allows_move(&self) -> bool {
        !self.is_held() || self.is_ready()
    }

    /// Restart the cooldown after an accepted move.
    pub fn arm(&mut self) {
        self.timeout = if self.is_held() {
            self.held_delay
        } else {
            self.initial_delay
        };
    }

    /// Force a specific cooldown, e.g. after a folder change.
    pub fn hold_off(&mut self, frames: u32) {
        self.timeout = frames;
    }

    /// Count down one frame. Called exactly once per frame.
    pub fn tick(&mut self) {
        self.timeout = self.timeout.saturating_sub(1);
    }

    /// Back to the state of a freshly activated browser.
    pub fn reset(&mut self) {
        *self = Self::new(self.initial_delay, self.held_delay);
    }
}
