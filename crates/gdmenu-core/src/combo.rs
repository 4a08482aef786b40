//! Two-trigger combo recognizer.
//!
//! Holding both shoulder triggers is a shortcut for "back one folder".
//! The shortcut must fire once per physical press, so each trigger has a
//! latch that is set while the combo is down and cleared when it lets go.

use serde::Serialize;

/// What the combo did on a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboEdge {
    /// Combo not down; input flows on to the mode handler.
    Idle,
    /// Combo just went down this frame. Act once.
    Pressed,
    /// Combo still down from an earlier frame. Swallow input, do nothing.
    Held,
}

impl ComboEdge {
    /// Whether the combo owns this frame's input.
    pub fn consumes_input(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Per-trigger latches for the L+R combo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComboLatch {
    left_held: bool,
    right_held: bool,
}

impl ComboLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's trigger levels.
    pub fn update(&mut self, left_down: bool, right_down: bool) -> ComboEdge {
        if left_down && right_down {
            if self.left_held && self.right_held {
                return ComboEdge::Held;
            }
            self.left_held = true;
            self.right_held = true;
            ComboEdge::Pressed
        } else {
            self.left_held = false;
            self.right_held = false;
            ComboEdge::Idle
        }
    }

    pub fn is_latched(&self) -> bool {
        self.left_held && self.right_held
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_frame_hold_fires_once() {
        let mut latch = ComboLatch::new();
        let edges: Vec<ComboEdge> = (0..10).map(|_| latch.update(true, true)).collect();
        assert_eq!(edges[0], ComboEdge::Pressed);
        assert!(edges[1..].iter().all(|e| *e == ComboEdge::Held));
    }

    #[test]
    fn release_rearms() {
        let mut latch = ComboLatch::new();
        assert_eq!(latch.update(true, true), ComboEdge::Pressed);
        assert_eq!(latch.update(true, false), ComboEdge::Idle);
        assert!(!latch.is_latched());
        assert_eq!(latch.update(true, true), ComboEdge::Pressed);
    }

    #[test]
    fn single_trigger_is_idle() {
        let mut latch = ComboLatch::new();
        assert_eq!(latch.update(true, false), ComboEdge::Idle);
        assert_eq!(latch.update(false, true), ComboEdge::Idle);
        assert_eq!(latch.update(false, false), ComboEdge::Idle);
    }

    #[test]
    fn held_and_pressed_consume_input() {
        assert!(ComboEdge::Pressed.consumes_input());
        assert!(ComboEdge::Held.consumes_input());
        assert!(!ComboEdge::Idle.consumes_input());
    }

    #[test]
    fn reset_clears_latches() {
        let mut latch = ComboLatch::new();
        latch.update(true, true);
        latch.reset();
        assert!(!latch.is_latched());
        assert_eq!(latch.update(true, true), ComboEdge::Pressed);
    }
}
