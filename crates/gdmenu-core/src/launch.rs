//! Launch collaborator.
//!
//! Actually booting a disc is platform work. The browser only decides
//! which of the three launch paths a title takes.

use crate::catalog::{LaunchRoute, ListItem};
use crate::error::Result;

/// The launch path taken for a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchKind {
    /// Native disc loader.
    Disc,
    /// Separate emulator for special-format titles.
    Emulated,
    /// Native loader with cheat codes applied.
    Cheats,
}

/// Boots titles on behalf of the browser.
pub trait Launcher {
    fn launch_disc(&mut self, item: &ListItem) -> Result<()>;

    fn launch_emulated(&mut self, item: &ListItem) -> Result<()>;

    fn launch_with_cheats(&mut self, item: &ListItem) -> Result<()>;
}

/// Pick the launch path for a plain accept.
pub fn kind_for(item: &ListItem) -> LaunchKind {
    match item.route() {
        Some(LaunchRoute::Emulated) => LaunchKind::Emulated,
        _ => LaunchKind::Disc,
    }
}

/// Run `kind` against `launcher`, logging the outcome.
///
/// Failures are reported and swallowed: a failed launch leaves the user in
/// the browser.
pub fn launch(launcher: &mut dyn Launcher, kind: LaunchKind, item: &ListItem) -> bool {
    log::info!("Launching '{}' ({}) via {kind:?}", item.name, item.product);
    let result = match kind {
        LaunchKind::Disc => launcher.launch_disc(item),
        LaunchKind::Emulated => launcher.launch_emulated(item),
        LaunchKind::Cheats => launcher.launch_with_cheats(item),
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Launch of '{}' failed: {e}", item.name);
            false
        },
    }
}
