//! Scripted controller input.
//!
//! A script is a TOML list of `[[frame]]` tables. Each frame names the
//! button pressed that frame and any trigger presses or releases; `repeat`
//! replays the same frame several times, which is how a held button is
//! expressed.
//!
//! ```toml
//! [[frame]]
//! press = "Down"
//! repeat = 30
//!
//! [[frame]]
//! triggers = ["Left", "Right"]
//! ```

use std::path::Path;

use gdmenu_core::error::{MenuError, Result};
use gdmenu_core::input::{Button, InputEvent, Trigger};
use serde::Deserialize;

fn one() -> u32 {
    1
}

/// One scripted frame.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameSpec {
    #[serde(default)]
    pub press: Option<Button>,
    /// Triggers pressed down this frame.
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    /// Triggers let go this frame.
    #[serde(default)]
    pub release: Vec<Trigger>,
    #[serde(default = "one")]
    pub repeat: u32,
    #[serde(default)]
    pub quit: bool,
}

impl FrameSpec {
    /// Events the platform would deliver for this frame.
    pub fn events(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.quit {
            events.push(InputEvent::Quit);
        }
        events.extend(self.release.iter().map(|t| InputEvent::TriggerRelease(*t)));
        events.extend(self.press.map(InputEvent::ButtonPress));
        events.extend(self.triggers.iter().map(|t| InputEvent::TriggerPress(*t)));
        events
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "frame")]
    pub frames: Vec<FrameSpec>,
}

impl Script {
    pub fn from_toml(src: &str) -> Result<Self> {
        let script: Self = toml::from_str(src)?;
        if let Some(bad) = script.frames.iter().position(|f| f.repeat == 0) {
            return Err(MenuError::Script(format!("frame {bad} has repeat = 0")));
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml(&src)
    }

    /// Every frame's events, with repeats expanded.
    pub fn expand(&self) -> Vec<Vec<InputEvent>> {
        self.frames
            .iter()
            .flat_map(|f| std::iter::repeat_n(f.events(), f.repeat as usize))
            .collect()
    }
}

/// Used when no script is given: browse into the first folder and back out
/// with the trigger shortcut, then open and close the settings popup.
pub const DEMO_SCRIPT: &str = r#"
[[frame]]
repeat = 20

[[frame]]
press = "Confirm"

[[frame]]
repeat = 40

[[frame]]
press = "Down"

[[frame]]
triggers = ["Left", "Right"]
repeat = 5

[[frame]]
release = ["Left", "Right"]
repeat = 40

[[frame]]
press = "Square"

[[frame]]
repeat = 10

[[frame]]
press = "Cancel"
"#;
