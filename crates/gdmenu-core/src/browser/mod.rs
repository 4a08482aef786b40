//! The folder browser: navigation state plus the per-frame entry points.
//!
//! The host calls [`FolderBrowser::on_activate`] once, then every frame
//! [`FolderBrowser::on_frame_draw_opaque`],
//! [`FolderBrowser::on_frame_draw_overlay`] and
//! [`FolderBrowser::on_input`]. Catalog, launcher, popups, artwork and the
//! drawing backend are borrowed per call; the browser owns only its
//! navigation state.


use serde::Serialize;

use crate::backend::MenuBackend;
use crate::catalog::{Catalog, ItemClass, LaunchRoute, ListItem};
use crate::combo::{ComboEdge, ComboLatch};
use crate::config::MenuConfig;
use crate::error::Result;
use crate::folders;
use crate::input::{Button, Control, FrameInput, Trigger};
use crate::launch::{self, LaunchKind, Launcher};
use crate::modal::{Mode, ModeEvent};
use crate::popup::{ChooserIntent, PopupContext, PopupOutcome, Popups};
use crate::render::{self, ArtworkSource, Backdrop, CursorStrobe};
use crate::repeat::RepeatGate;
use crate::theme::FolderTheme;
use crate::viewport::Viewport;

/// Collaborators borrowed for one input frame.
pub struct Services<'a> {
    pub catalog: &'a mut dyn Catalog,
    pub launcher: &'a mut dyn Launcher,
    pub popups: &'a mut Popups,
}

/// Everything the browser remembers between frames.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub view: Viewport,
    pub gate: RepeatGate,
    pub combo: ComboLatch,
    pub mode: Mode,
    pub strobe: CursorStrobe,
    /// Listing shown under the cursor, refreshed on every folder change.
    rows: Vec<ListItem>,
    /// Title captured when the exit prompt opened.
    exit_target: Option<ListItem>,
    intent: ChooserIntent,
}

impl NavigationState {
    fn new(config: &MenuConfig) -> Self {
        Self {
            view: Viewport::new(config.page_size),
            gate: RepeatGate::new(config.repeat_initial, config.repeat_held),
            combo: ComboLatch::new(),
            mode: Mode::Root,
            strobe: CursorStrobe::default(),
            rows: Vec::new(),
            exit_target: None,
            intent: ChooserIntent::Launch,
        }
    }

    pub fn rows(&self) -> &[ListItem] {
        &self.rows
    }

    pub fn selected_item(&self) -> Option<&ListItem> {
        self.rows.get(self.view.selected())
    }

    pub fn exit_target(&self) -> Option<&ListItem> {
        self.exit_target.as_ref()
    }

    pub fn intent(&self) -> ChooserIntent {
        self.intent
    }
}

/// Serializable summary of the navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot {
    pub mode: Mode,
    pub selected: usize,
    pub window_start: usize,
    pub len: usize,
    pub depth: usize,
    pub timeout: u32,
    pub selected_name: Option<String>,
    pub exit_target: Option<String>,
}

impl NavigationSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Paginated browser over a hierarchical catalog.
pub struct FolderBrowser {
    config: MenuConfig,
    theme: FolderTheme,
    state: NavigationState,
}

impl FolderBrowser {
    pub fn new(config: MenuConfig, theme: FolderTheme) -> Self {
        let state = NavigationState::new(&config);
        Self {
            config,
            theme,
            state,
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn theme(&self) -> &FolderTheme {
        &self.theme
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn selected(&self) -> usize {
        self.state.view.selected()
    }

    /// Reset to the root listing with the cursor on the first row.
    pub fn on_activate(&mut self, catalog: &mut dyn Catalog) {
        catalog.set_root();
        self.state = NavigationState::new(&self.config);
        self.reload_rows(catalog);
        log::info!("Folder browser active: {} root items", self.state.rows.len());
    }

    /// Opaque pass: the split background.
    pub fn on_frame_draw_opaque(
        &self,
        backend: &mut dyn MenuBackend,
        backdrop: &Backdrop,
    ) -> Result<()> {
        render::draw_backdrop(backend, backdrop)
    }

    /// Overlay pass: rows and cursor, artwork, then the open popup.
    pub fn on_frame_draw_overlay(
        &mut self,
        backend: &mut dyn MenuBackend,
        art: &mut dyn ArtworkSource,
        catalog: &dyn Catalog,
        popups: &mut Popups,
    ) -> Result<()> {
        if !self.state.rows.is_empty() {
            render::draw_list(
                backend,
                &self.theme,
                &self.state.rows,
                &self.state.view,
                self.state.strobe.alpha(),
                self.config.disambiguate_multidisc,
            )?;
            self.state.strobe.advance();
            if self.config.show_artwork
                && let Some(item) = self.state.selected_item()
            {
                render::draw_artwork(backend, &self.theme, art, item)?;
            }
        }
        if let Some(popup) = popups.get_mut(self.state.mode) {
            popup.draw(catalog.active_list(), backend)?;
        }
        Ok(())
    }

    /// Handle one frame of input, then count the cooldown down.
    pub fn on_input(&mut self, input: FrameInput, services: &mut Services<'_>) {
        match self.state.mode {
            Mode::Root => self.handle_root(input, services),
            mode => self.handle_popup(mode, input.control, services),
        }
        self.state.gate.tick();
    }

    pub fn snapshot(&self, catalog: &dyn Catalog) -> NavigationSnapshot {
        NavigationSnapshot {
            mode: self.state.mode,
            selected: self.state.view.selected(),
            window_start: self.state.view.start(),
            len: self.state.rows.len(),
            depth: catalog.depth(),
            timeout: self.state.gate.timeout(),
            selected_name: self.state.selected_item().map(|i| i.name.clone()),
            exit_target: self.state.exit_target.as_ref().map(|i| i.name.clone()),
        }
    }

    fn reload_rows(&mut self, catalog: &dyn Catalog) {
        self.state.rows = catalog.active_list().to_vec();
        self.state.view.clamp_to(self.state.rows.len());
    }

    fn handle_root(&mut self, input: FrameInput, services: &mut Services<'_>) {
        self.state.gate.begin_frame();

        let edge = self.state.combo.update(input.trigger_left, input.trigger_right);
        if edge == ComboEdge::Pressed && !services.catalog.is_at_root() {
            self.leave_folder(services.catalog);
        }
        if edge.consumes_input() {
            return;
        }

        if input.control.is_directional() {
            self.state.gate.mark_direction();
        }
        let jump = isize::try_from(self.config.page_jump).unwrap_or(isize::MAX);
        match input.control {
            Control::Button(Button::Up) => self.step(-1),
            Control::Button(Button::Down) => self.step(1),
            Control::Button(Button::Left) | Control::Trigger(Trigger::Left) => self.step(-jump),
            Control::Button(Button::Right) | Control::Trigger(Trigger::Right) => self.step(jump),
            Control::Button(Button::Confirm) => self.accept(services),
            Control::Button(Button::Square) => self.open_settings(services),
            Control::Button(Button::Triangle) => self.open_exit(services),
            Control::Button(Button::Cancel) => self.alternate_accept(services),
            _ => {},
        }
    }

    fn step(&mut self, amount: isize) {
        let gate = &mut self.state.gate;
        if !gate.allows_move() {
            return;
        }
        self.state.view.move_by(amount, self.state.rows.len());
        gate.arm();
    }

    fn leave_folder(&mut self, catalog: &mut dyn Catalog) {
        folders::go_back(catalog, &mut self.state.view);
        self.reload_rows(catalog);
        self.state.gate.hold_off(self.config.folder_settle_frames());
    }

    fn accept(&mut self, services: &mut Services<'_>) {
        if !self.state.gate.is_ready() {
            return;
        }
        let Some(item) = self.state.selected_item().cloned() else {
            return;
        };

        match item.classify() {
            ItemClass::Directory => {
                if item.is_parent_link() {
                    folders::go_back(services.catalog, &mut self.state.view);
                } else if let Some(folder) = item.folder
                    && let Err(e) = folders::enter(services.catalog, &mut self.state.view, folder)
                {
                    log::error!("Cannot open '{}': {e}", item.name);
                }
                self.reload_rows(services.catalog);
                self.state.gate.hold_off(self.config.folder_settle_frames());
            },
            ItemClass::MultiDisc if self.config.disambiguate_multidisc => {
                self.open_chooser(item, ChooserIntent::Launch, services);
            },
            _ => {
                launch::launch(services.launcher, launch::kind_for(&item), &item);
            },
        }
    }

    fn alternate_accept(&mut self, services: &mut Services<'_>) {
        if !self.state.gate.is_ready() {
            return;
        }
        let Some(item) = self.state.selected_item().cloned() else {
            return;
        };

        match item.route() {
            None => {},
            Some(LaunchRoute::Emulated) => {
                launch::launch(services.launcher, LaunchKind::Emulated, &item);
            },
            Some(LaunchRoute::Native) => {
                if self.transition(ModeEvent::OpenCheats) {
                    self.open_popup(Some(item), services.popups);
                }
            },
        }
    }

    fn open_settings(&mut self, services: &mut Services<'_>) {
        if self.state.gate.is_ready() && self.transition(ModeEvent::OpenSettings) {
            self.open_popup(None, services.popups);
        }
    }

    fn open_exit(&mut self, services: &mut Services<'_>) {
        if !self.state.gate.is_ready() {
            return;
        }
        self.state.exit_target = self.state.selected_item().cloned();
        if self.transition(ModeEvent::OpenExit) {
            self.open_popup(self.state.exit_target.clone(), services.popups);
        }
    }

    /// Narrow the catalog to `item`'s disc set and open the chooser. If the
    /// set cannot be selected, launch `item` directly instead.
    fn open_chooser(
        &mut self,
        item: ListItem,
        intent: ChooserIntent,
        services: &mut Services<'_>,
    ) {
        if let Err(e) = services.catalog.select_multidisc_group(&item.product) {
            log::warn!("No disc set for '{}' ({e}), launching directly", item.name);
            launch_for(intent, &item, services.launcher);
            return;
        }
        self.state.intent = intent;
        if self.transition(ModeEvent::OpenChooser) {
            self.open_popup(Some(item), services.popups);
        } else {
            services.catalog.clear_multidisc_group();
        }
    }

    fn handle_popup(&mut self, mode: Mode, control: Control, services: &mut Services<'_>) {
        let Some(popup) = services.popups.get_mut(mode) else {
            return;
        };
        let outcome =
            popup.handle_input(control, services.catalog.active_list(), &mut self.state.gate);

        match outcome {
            PopupOutcome::Stay => {},
            PopupOutcome::Close => self.close_popup(services.catalog),
            PopupOutcome::ShowCredits => {
                if self.transition(ModeEvent::ShowCredits) {
                    self.open_popup(None, services.popups);
                }
            },
            PopupOutcome::ShowSettings => {
                if self.transition(ModeEvent::ShowSettings) {
                    self.open_popup(None, services.popups);
                }
            },
            PopupOutcome::StartCheats if mode == Mode::CheatEntry => self.run_cheats(services),
            PopupOutcome::StartCheats => {
                log::warn!("Ignoring cheat start outside cheat entry ({mode:?})");
            },
            PopupOutcome::Launch(item) => {
                launch_for(self.state.intent, &item, services.launcher);
                self.close_popup(services.catalog);
            },
        }
    }

    /// Cheat entry confirmed: pick a disc first for multi-disc titles.
    fn run_cheats(&mut self, services: &mut Services<'_>) {
        let Some(item) = self.state.selected_item().cloned() else {
            self.close_popup(services.catalog);
            return;
        };
        if self.config.disambiguate_multidisc && item.classify() == ItemClass::MultiDisc {
            self.open_chooser(item, ChooserIntent::CheatLaunch, services);
            if self.state.mode == Mode::CheatEntry {
                self.close_popup(services.catalog);
            }
            return;
        }
        launch::launch(services.launcher, LaunchKind::Cheats, &item);
        self.close_popup(services.catalog);
    }

    fn close_popup(&mut self, catalog: &mut dyn Catalog) {
        let closing = self.state.mode;
        if self.transition(ModeEvent::Close) && closing == Mode::MultidiscChooser {
            catalog.clear_multidisc_group();
            self.state.intent = ChooserIntent::Launch;
        }
    }

    fn open_popup(&mut self, item: Option<ListItem>, popups: &mut Popups) {
        let ctx = PopupContext {
            colors: self.theme.popup_colors(),
            title_color: self.theme.menu_title_color(),
            item,
            intent: self.state.intent,
        };
        if let Some(popup) = popups.get_mut(self.state.mode) {
            popup.open(&ctx);
        }
    }

    fn transition(&mut self, event: ModeEvent) -> bool {
        match self.state.mode.next(event) {
            Some(next) => {
                log::debug!("Mode {:?} -> {next:?} on {event:?}", self.state.mode);
                self.state.mode = next;
                true
            },
            None => {
                log::warn!("Ignoring {event:?} in mode {:?}", self.state.mode);
                false
            },
        }
    }
}

fn launch_for(intent: ChooserIntent, item: &ListItem, launcher: &mut dyn Launcher) {
    let kind = match intent {
        ChooserIntent::Launch => launch::kind_for(item),
        ChooserIntent::CheatLaunch => LaunchKind::Cheats,
    };
    launch::launch(launcher, kind, item);
}
