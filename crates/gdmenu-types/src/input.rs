//! Platform-agnostic input types.
//!
//! Backends map their native controller state to [`InputEvent`]s. The
//! browser consumes one [`FrameInput`] per frame: the single edge-detected
//! [`Control`] of that frame plus the level state of both shoulder
//! triggers.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A face / d-pad button pressed.
    ButtonPress(Button),
    /// A face / d-pad button released.
    ButtonRelease(Button),
    /// Shoulder trigger pressed.
    TriggerPress(Trigger),
    /// Shoulder trigger released.
    TriggerRelease(Trigger),
    /// User requested quit (window close, etc.).
    Quit,
}

/// Buttons that map across all platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Triangle,
    Square,
    Start,
}

/// Shoulder / trigger buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Left,
    Right,
}

/// The one edge-triggered control delivered for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Control {
    #[default]
    None,
    Button(Button),
    Trigger(Trigger),
}

impl Control {
    /// Map a press event to its control. Releases and quit map to `None`.
    pub fn from_event(event: &InputEvent) -> Self {
        match event {
            InputEvent::ButtonPress(b) => Self::Button(*b),
            InputEvent::TriggerPress(t) => Self::Trigger(*t),
            _ => Self::None,
        }
    }

    /// Whether this control is a d-pad direction or a shoulder page jump.
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            Self::Button(Button::Up | Button::Down | Button::Left | Button::Right)
                | Self::Trigger(_)
        )
    }
}

/// Input for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Edge-detected control of this frame.
    pub control: Control,
    /// Left trigger is physically down this frame.
    pub trigger_left: bool,
    /// Right trigger is physically down this frame.
    pub trigger_right: bool,
}

impl FrameInput {
    pub const IDLE: Self = Self {
        control: Control::None,
        trigger_left: false,
        trigger_right: false,
    };

    pub fn control(control: Control) -> Self {
        Self {
            control,
            ..Self::IDLE
        }
    }

    pub fn button(button: Button) -> Self {
        Self::control(Control::Button(button))
    }

    /// Both shoulder triggers held, with no other control.
    pub fn both_triggers() -> Self {
        Self {
            control: Control::None,
            trigger_left: true,
            trigger_right: true,
        }
    }
}

/// Folds a frame's worth of [`InputEvent`]s into a [`FrameInput`].
///
/// Trigger levels persist across frames until a release event arrives.
/// When several presses arrive in one frame, the first one wins.
#[derive(Debug, Default)]
pub struct FrameInputTracker {
    trigger_left: bool,
    trigger_right: bool,
}

impl FrameInputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the events of one frame. Returns `None` if a quit was seen.
    pub fn collect(&mut self, events: &[InputEvent]) -> Option<FrameInput> {
        let mut control = Control::None;
        for event in events {
            match event {
                InputEvent::Quit => return None,
                InputEvent::TriggerPress(Trigger::Left) => self.trigger_left = true,
                InputEvent::TriggerPress(Trigger::Right) => self.trigger_right = true,
                InputEvent::TriggerRelease(Trigger::Left) => self.trigger_left = false,
                InputEvent::TriggerRelease(Trigger::Right) => self.trigger_right = false,
                _ => {},
            }
            if control == Control::None {
                control = Control::from_event(event);
            }
        }
        Some(FrameInput {
            control,
            trigger_left: self.trigger_left,
            trigger_right: self.trigger_right,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_events_map_to_controls() {
        assert_eq!(
            Control::from_event(&InputEvent::ButtonPress(Button::Confirm)),
            Control::Button(Button::Confirm)
        );
        assert_eq!(
            Control::from_event(&InputEvent::TriggerPress(Trigger::Right)),
            Control::Trigger(Trigger::Right)
        );
    }

    #[test]
    fn releases_map_to_none() {
        assert_eq!(
            Control::from_event(&InputEvent::ButtonRelease(Button::Up)),
            Control::None
        );
        assert_eq!(
            Control::from_event(&InputEvent::TriggerRelease(Trigger::Left)),
            Control::None
        );
        assert_eq!(Control::from_event(&InputEvent::Quit), Control::None);
    }

    #[test]
    fn directional_controls() {
        for b in [Button::Up, Button::Down, Button::Left, Button::Right] {
            assert!(Control::Button(b).is_directional());
        }
        assert!(Control::Trigger(Trigger::Left).is_directional());
        assert!(!Control::Button(Button::Confirm).is_directional());
        assert!(!Control::None.is_directional());
    }

    #[test]
    fn control_serde_roundtrip() {
        let c = Control::Button(Button::Triangle);
        let json = serde_json::to_string(&c).unwrap();
        let back: Control = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn tracker_keeps_trigger_levels_between_frames() {
        let mut t = FrameInputTracker::new();
        let f1 = t
            .collect(&[
                InputEvent::TriggerPress(Trigger::Left),
                InputEvent::TriggerPress(Trigger::Right),
            ])
            .unwrap();
        assert!(f1.trigger_left && f1.trigger_right);
        assert_eq!(f1.control, Control::Trigger(Trigger::Left));

        let f2 = t.collect(&[]).unwrap();
        assert!(f2.trigger_left && f2.trigger_right);
        assert_eq!(f2.control, Control::None);

        let f3 = t
            .collect(&[InputEvent::TriggerRelease(Trigger::Right)])
            .unwrap();
        assert!(f3.trigger_left);
        assert!(!f3.trigger_right);
    }

    #[test]
    fn tracker_first_press_wins() {
        let mut t = FrameInputTracker::new();
        let f = t
            .collect(&[
                InputEvent::ButtonRelease(Button::Down),
                InputEvent::ButtonPress(Button::Square),
                InputEvent::ButtonPress(Button::Confirm),
            ])
            .unwrap();
        assert_eq!(f.control, Control::Button(Button::Square));
    }

    #[test]
    fn tracker_quit_ends_collection() {
        let mut t = FrameInputTracker::new();
        assert!(
            t.collect(&[InputEvent::ButtonPress(Button::Up), InputEvent::Quit])
                .is_none()
        );
    }

    #[test]
    fn frame_input_helpers() {
        assert_eq!(FrameInput::default(), FrameInput::IDLE);
        let f = FrameInput::button(Button::Down);
        assert_eq!(f.control, Control::Button(Button::Down));
        assert!(!f.trigger_left && !f.trigger_right);
        let both = FrameInput::both_triggers();
        assert!(both.trigger_left && both.trigger_right);
        assert_eq!(both.control, Control::None);
    }
}
