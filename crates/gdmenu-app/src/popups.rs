//! Minimal popups for the headless driver.
//!
//! All five popups share one list-style widget: a bordered box with a
//! title and a column of choices, moved with up/down, confirmed with the
//! accept button and dismissed with cancel.

use gdmenu_core::backend::MenuBackend;
use gdmenu_core::catalog::ListItem;
use gdmenu_core::error::Result;
use gdmenu_core::input::{Button, Control};
use gdmenu_core::popup::{Popup, PopupContext, PopupOutcome, Popups};
use gdmenu_core::repeat::RepeatGate;

const BOX_X: i32 = 160;
const BOX_Y: i32 = 140;
const BOX_W: u32 = 320;
const BORDER: u32 = 2;
const LINE: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Settings,
    Credits,
    Exit,
    Cheats,
    Chooser,
}

impl Kind {
    fn title(self) -> &'static str {
        match self {
            Kind::Settings => "Settings",
            Kind::Credits => "Credits",
            Kind::Exit => "Exit",
            Kind::Cheats => "Cheats",
            Kind::Chooser => "Select Disc",
        }
    }
}

struct ListPopup {
    kind: Kind,
    ctx: Option<PopupContext>,
    cursor: usize,
    delay: u32,
}

impl ListPopup {
    fn new(kind: Kind, delay: u32) -> Self {
        Self {
            kind,
            ctx: None,
            cursor: 0,
            delay,
        }
    }

    fn choices(&self, rows: &[ListItem]) -> Vec<String> {
        match self.kind {
            Kind::Settings => vec!["Credits".into(), "Close".into()],
            Kind::Credits => vec!["Back".into()],
            Kind::Exit => vec!["Exit to main menu".into(), "Stay".into()],
            Kind::Cheats => vec!["Start with cheats".into(), "Cancel".into()],
            Kind::Chooser => rows
                .iter()
                .map(|item| match item.disc {
                    Some(disc) => format!("Disc {}/{}", disc.index, disc.count),
                    None => item.name.clone(),
                })
                .collect(),
        }
    }

    fn confirm(&self, rows: &[ListItem]) -> PopupOutcome {
        match (self.kind, self.cursor) {
            (Kind::Settings, 0) => PopupOutcome::ShowCredits,
            (Kind::Credits, _) => PopupOutcome::ShowSettings,
            (Kind::Exit, 0) => {
                let target = self.ctx.as_ref().and_then(|c| c.item.as_ref());
                match target {
                    Some(item) => log::info!("Exit to main menu on '{}'", item.name),
                    None => log::info!("Exit to main menu"),
                }
                PopupOutcome::Close
            },
            (Kind::Cheats, 0) => PopupOutcome::StartCheats,
            (Kind::Chooser, i) => match rows.get(i) {
                Some(item) => PopupOutcome::Launch(item.clone()),
                None => PopupOutcome::Close,
            },
            _ => PopupOutcome::Close,
        }
    }
}

impl Popup for ListPopup {
    fn open(&mut self, ctx: &PopupContext) {
        log::debug!("Open {:?} popup", self.kind);
        self.ctx = Some(ctx.clone());
        self.cursor = 0;
    }

    fn draw(&mut self, rows: &[ListItem], backend: &mut dyn MenuBackend) -> Result<()> {
        let Some(ctx) = &self.ctx else {
            return Ok(());
        };
        let choices = self.choices(rows);
        let h = (choices.len() as u32 + 2) * LINE as u32;
        backend.fill_rect(BOX_X, BOX_Y, BOX_W, h, ctx.colors.menu_border)?;
        backend.fill_rect(
            BOX_X + BORDER as i32,
            BOX_Y + BORDER as i32,
            BOX_W - 2 * BORDER,
            h - 2 * BORDER,
            ctx.colors.menu_background,
        )?;
        backend.draw_text(self.kind.title(), BOX_X + 12, BOX_Y + 6, ctx.title_color)?;
        for (i, choice) in choices.iter().enumerate() {
            let color = if i == self.cursor {
                ctx.colors.menu_highlight
            } else {
                ctx.colors.menu_text
            };
            backend.draw_text(choice, BOX_X + 20, BOX_Y + 6 + LINE * (i as i32 + 1), color)?;
        }
        Ok(())
    }

    fn handle_input(
        &mut self,
        control: Control,
        rows: &[ListItem],
        gate: &mut RepeatGate,
    ) -> PopupOutcome {
        if !gate.is_ready() {
            return PopupOutcome::Stay;
        }
        let count = self.choices(rows).len().max(1);
        let outcome = match control {
            Control::Button(Button::Up) => {
                self.cursor = (self.cursor + count - 1) % count;
                PopupOutcome::Stay
            },
            Control::Button(Button::Down) => {
                self.cursor = (self.cursor + 1) % count;
                PopupOutcome::Stay
            },
            Control::Button(Button::Confirm) => self.confirm(rows),
            Control::Button(Button::Cancel) if self.kind == Kind::Credits => {
                PopupOutcome::ShowSettings
            },
            Control::Button(Button::Cancel) => PopupOutcome::Close,
            _ => return PopupOutcome::Stay,
        };
        gate.hold_off(self.delay);
        outcome
    }
}

/// The driver's popup set. `delay` is the cooldown after each popup action.
pub fn console_popups(delay: u32) -> Popups {
    Popups {
        settings: Box::new(ListPopup::new(Kind::Settings, delay)),
        credits: Box::new(ListPopup::new(Kind::Credits, delay)),
        chooser: Box::new(ListPopup::new(Kind::Chooser, delay)),
        exit: Box::new(ListPopup::new(Kind::Exit, delay)),
        cheats: Box::new(ListPopup::new(Kind::Cheats, delay)),
    }
}
