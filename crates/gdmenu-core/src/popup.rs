//! Popup collaborators layered over the root list.
//!
//! Each non-root [`Mode`] is served by a [`Popup`]. The browser owns the
//! transitions; popups own their own drawing and input and report back
//! through [`PopupOutcome`].

use crate::backend::{Color, MenuBackend};
use crate::catalog::ListItem;
use crate::error::Result;
use crate::input::Control;
use crate::modal::Mode;
use crate::repeat::RepeatGate;
use crate::theme::PopupColors;

/// Why the disc chooser was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChooserIntent {
    #[default]
    Launch,
    CheatLaunch,
}

/// Parameters handed to a popup when it opens.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContext {
    pub colors: PopupColors,
    pub title_color: Color,
    /// Title the popup acts on (exit target, cheat target, disc set).
    pub item: Option<ListItem>,
    pub intent: ChooserIntent,
}

/// What a popup wants after handling a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupOutcome {
    Stay,
    Close,
    ShowCredits,
    ShowSettings,
    /// Cheat entry confirmed; launch the selected title with cheats.
    StartCheats,
    /// Disc chosen; launch it according to the chooser intent.
    Launch(ListItem),
}

/// A sub-view drawn over the browser.
pub trait Popup {
    fn open(&mut self, ctx: &PopupContext);

    /// Draw over the list. `rows` is the catalog's active listing.
    fn draw(&mut self, rows: &[ListItem], backend: &mut dyn MenuBackend) -> Result<()>;

    /// Handle one frame of input. The popup may read and re-arm `gate`.
    fn handle_input(
        &mut self,
        control: Control,
        rows: &[ListItem],
        gate: &mut RepeatGate,
    ) -> PopupOutcome;
}

/// One popup per non-root mode.
pub struct Popups {
    pub settings: Box<dyn Popup>,
    pub credits: Box<dyn Popup>,
    pub chooser: Box<dyn Popup>,
    pub exit: Box<dyn Popup>,
    pub cheats: Box<dyn Popup>,
}

impl Popups {
    /// Popup serving `mode`, or `None` for the root list.
    pub fn get_mut(&mut self, mode: Mode) -> Option<&mut dyn Popup> {
        let popup = match mode {
            Mode::Root => return None,
            Mode::Settings => &mut self.settings,
            Mode::Credits => &mut self.credits,
            Mode::MultidiscChooser => &mut self.chooser,
            Mode::ExitConfirm => &mut self.exit,
            Mode::CheatEntry => &mut self.cheats,
        };
        Some(popup.as_mut())
    }
}
