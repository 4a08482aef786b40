//! Modal state of the folder browser.
//!
//! Exactly one mode is active. The root list is always drawn; every other
//! mode is a popup layered on top of it and owns input while open.

use serde::Serialize;

/// Which handler receives input and which overlay is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    #[default]
    Root,
    Settings,
    Credits,
    MultidiscChooser,
    ExitConfirm,
    CheatEntry,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Root,
        Mode::Settings,
        Mode::Credits,
        Mode::MultidiscChooser,
        Mode::ExitConfirm,
        Mode::CheatEntry,
    ];

    pub fn is_popup(self) -> bool {
        self != Mode::Root
    }

    /// Transition table. `None` means the event is not legal in this mode.
    pub fn next(self, event: ModeEvent) -> Option<Mode> {
        use Mode::*;
        use ModeEvent::*;
        match (self, event) {
            (Root, OpenSettings) => Some(Settings),
            (Root, OpenExit) => Some(ExitConfirm),
            (Root, OpenCheats) => Some(CheatEntry),
            (Root, OpenChooser) => Some(MultidiscChooser),
            (CheatEntry, OpenChooser) => Some(MultidiscChooser),
            (Settings, ShowCredits) => Some(Credits),
            (Credits, ShowSettings) => Some(Settings),
            (mode, Close) if mode.is_popup() => Some(Root),
            _ => None,
        }
    }
}

/// Inputs to the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// Options button in the root list.
    OpenSettings,
    /// Exit button in the root list.
    OpenExit,
    /// Alternate accept on a title.
    OpenCheats,
    /// Accept on a title whose discs need choosing.
    OpenChooser,
    /// Settings asked to show the credits page.
    ShowCredits,
    /// Credits asked to go back to settings.
    ShowSettings,
    /// The popup finished.
    Close,
}
