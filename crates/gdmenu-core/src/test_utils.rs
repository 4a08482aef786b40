//! Shared test utilities for the browser core.
//!
//! Provides a [`MockBackend`] that records draw calls, a [`MockLauncher`]
//! that records launches, scripted popups, and catalog fixtures.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::backend::{Color, MenuBackend, TextureId};
use crate::catalog::{
    CatalogFile, FolderDef, FolderId, LaunchRoute, ListItem, MemoryCatalog, TitleDef,
};
use crate::error::{MenuError, Result};
use crate::input::Control;
use crate::launch::{LaunchKind, Launcher};
use crate::modal::Mode;
use crate::popup::{Popup, PopupContext, PopupOutcome, Popups};
use crate::render::ArtworkSource;
use crate::repeat::RepeatGate;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DrawCall {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        color: Color,
    },
    Blit {
        tex: TextureId,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    },
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Text of every `DrawText` call, in order.
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::DrawText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn text_colors(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::DrawText { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Every `FillRect` as `(x, y, w, h, color)`.
    pub fn rects(&self) -> Vec<(i32, i32, u32, u32, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect { x, y, w, h, color } => Some((*x, *y, *w, *h, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn blit_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Blit { .. }))
            .count()
    }
}

impl MenuBackend for MockBackend {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            color,
        });
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32, _tint: Color) -> Result<()> {
        self.calls.push(DrawCall::Blit { tex, x, y, w, h });
        Ok(())
    }
}

/// Records launches by product code. A failing launcher records nothing.
pub struct MockLauncher {
    pub launched: Vec<(LaunchKind, String)>,
    fail: bool,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self {
            launched: Vec::new(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            launched: Vec::new(),
            fail: true,
        }
    }

    fn record(&mut self, kind: LaunchKind, item: &ListItem) -> Result<()> {
        if self.fail {
            return Err(MenuError::Launch(format!("{} refused", item.product)));
        }
        self.launched.push((kind, item.product.clone()));
        Ok(())
    }
}

impl Launcher for MockLauncher {
    fn launch_disc(&mut self, item: &ListItem) -> Result<()> {
        self.record(LaunchKind::Disc, item)
    }

    fn launch_emulated(&mut self, item: &ListItem) -> Result<()> {
        self.record(LaunchKind::Emulated, item)
    }

    fn launch_with_cheats(&mut self, item: &ListItem) -> Result<()> {
        self.record(LaunchKind::Cheats, item)
    }
}

/// Artwork keyed by product code.
#[derive(Default)]
pub struct MapArtwork {
    large: HashMap<String, TextureId>,
    small: HashMap<String, TextureId>,
}

impl MapArtwork {
    pub fn with_large(mut self, product: &str, tex: TextureId) -> Self {
        self.large.insert(product.to_string(), tex);
        self
    }

    pub fn with_small(mut self, product: &str, tex: TextureId) -> Self {
        self.small.insert(product.to_string(), tex);
        self
    }
}

impl ArtworkSource for MapArtwork {
    fn large(&mut self, product: &str) -> Option<TextureId> {
        self.large.get(product).copied()
    }

    fn small(&mut self, product: &str) -> Option<TextureId> {
        self.small.get(product).copied()
    }
}

/// Shared record of what the scripted popups saw, plus queued outcomes.
#[derive(Default)]
pub struct PopupScript {
    pub outcomes: HashMap<Mode, VecDeque<PopupOutcome>>,
    pub opened: Vec<(Mode, PopupContext)>,
    pub inputs: Vec<(Mode, Control)>,
    /// Mode and listing length of every draw.
    pub drawn: Vec<(Mode, usize)>,
}

impl PopupScript {
    /// Queue `outcome` for the next input handled by `mode`'s popup.
    pub fn push(&mut self, mode: Mode, outcome: PopupOutcome) {
        self.outcomes.entry(mode).or_default().push_back(outcome);
    }

    pub fn opened_modes(&self) -> Vec<Mode> {
        self.opened.iter().map(|(m, _)| *m).collect()
    }
}

/// A popup that replays queued outcomes and records every call.
pub struct ScriptedPopup {
    mode: Mode,
    script: Rc<RefCell<PopupScript>>,
}

impl Popup for ScriptedPopup {
    fn open(&mut self, ctx: &PopupContext) {
        self.script.borrow_mut().opened.push((self.mode, ctx.clone()));
    }

    fn draw(&mut self, rows: &[ListItem], _backend: &mut dyn MenuBackend) -> Result<()> {
        self.script.borrow_mut().drawn.push((self.mode, rows.len()));
        Ok(())
    }

    fn handle_input(
        &mut self,
        control: Control,
        _rows: &[ListItem],
        _gate: &mut RepeatGate,
    ) -> PopupOutcome {
        let mut script = self.script.borrow_mut();
        script.inputs.push((self.mode, control));
        script
            .outcomes
            .get_mut(&self.mode)
            .and_then(VecDeque::pop_front)
            .unwrap_or(PopupOutcome::Stay)
    }
}

/// One scripted popup per mode, all sharing a single script.
pub fn scripted_popups() -> (Popups, Rc<RefCell<PopupScript>>) {
    let script = Rc::new(RefCell::new(PopupScript::default()));
    let popup = |mode: Mode| -> Box<dyn Popup> {
        Box::new(ScriptedPopup {
            mode,
            script: Rc::clone(&script),
        })
    };
    let popups = Popups {
        settings: popup(Mode::Settings),
        credits: popup(Mode::Credits),
        chooser: popup(Mode::MultidiscChooser),
        exit: popup(Mode::ExitConfirm),
        cheats: popup(Mode::CheatEntry),
    };
    (popups, script)
}

/// A catalog with `root_titles` titles at the root and one root folder per
/// `(id, count)` entry holding `count` titles.
///
/// Root rows are the folders (`[F<id>]`) followed by `Title 000`,
/// `Title 001`, and so on.
pub fn flat_catalog(root_titles: usize, folders: &[(FolderId, usize)]) -> MemoryCatalog {
    let mut file = CatalogFile::default();
    for &(id, count) in folders {
        file.folders.push(FolderDef {
            id,
            name: format!("F{id}"),
            parent: None,
        });
        for n in 0..count {
            file.titles.push(TitleDef {
                name: format!("F{id} Title {n:03}"),
                product: format!("F{id}-{n:03}"),
                folder: Some(id),
                disc: None,
                route: LaunchRoute::Native,
            });
        }
    }
    for n in 0..root_titles {
        file.titles.push(TitleDef {
            name: format!("Title {n:03}"),
            product: format!("T{n:03}"),
            folder: None,
            disc: None,
            route: LaunchRoute::Native,
        });
    }
    MemoryCatalog::from_file(file, true).expect("fixture catalog is valid")
}
