//! gdmenu headless driver.
//!
//! Loads a catalog (or a small built-in library), replays scripted
//! controller input through the folder browser one frame at a time with
//! both draw passes, and prints the final navigation state as JSON.
//!
//! Usage: `gdmenu-app [catalog.toml] [script.toml]`. `GDMENU_CONFIG`,
//! `GDMENU_THEME` and `GDMENU_ART` point at a menu config, a theme file
//! and an artwork directory.

mod console;
mod popups;
mod script;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use console::{DirArtwork, DrawStats, LaunchRecord, RecordingLauncher, TraceBackend};
use gdmenu_core::backend::TextureId;
use gdmenu_core::browser::{FolderBrowser, NavigationSnapshot, Services};
use gdmenu_core::catalog::{CatalogFile, MemoryCatalog};
use gdmenu_core::config::MenuConfig;
use gdmenu_core::input::FrameInputTracker;
use gdmenu_core::render::Backdrop;
use gdmenu_core::theme::FolderTheme;
use script::{DEMO_SCRIPT, Script};

const DEMO_CATALOG: &str = r#"
[[folder]]
id = 1
name = "Racing"

[[folder]]
id = 2
name = "RPG"

[[title]]
name = "Crazy Taxi"
product = "MK-51035"

[[title]]
name = "Grandia II"
product = "MK-51205"
disc = "1/3"

[[title]]
name = "Grandia II"
product = "MK-51205"
disc = "2/3"

[[title]]
name = "Grandia II"
product = "MK-51205"
disc = "3/3"

[[title]]
name = "Gran Turismo"
product = "SCUS-94194"
route = "emulated"

[[title]]
name = "Metropolis Street Racer"
product = "MK-51022"
folder = 1

[[title]]
name = "Skies of Arcadia"
product = "MK-51052"
disc = "1/2"
folder = 2

[[title]]
name = "Skies of Arcadia"
product = "MK-51052"
disc = "2/2"
folder = 2
"#;

/// Final state printed after the script ends.
#[derive(Debug, Serialize)]
struct Report {
    frames: usize,
    state: NavigationSnapshot,
    launches: Vec<LaunchRecord>,
    draws: DrawStats,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let catalog_path = args.next().map(PathBuf::from);
    let script_path = args.next().map(PathBuf::from);

    let config = match std::env::var_os("GDMENU_CONFIG") {
        Some(path) => MenuConfig::load(Path::new(&path))
            .with_context(|| format!("loading config {}", Path::new(&path).display()))?,
        None => MenuConfig::default(),
    };
    let theme = std::env::var_os("GDMENU_THEME")
        .map(|path| FolderTheme::load_or_default(Path::new(&path)))
        .unwrap_or_default();
    let art = DirArtwork::new(std::env::var_os("GDMENU_ART").map(PathBuf::from));

    let mut catalog = match &catalog_path {
        Some(path) => {
            let file = CatalogFile::load(path)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            MemoryCatalog::from_file(file, config.disambiguate_multidisc)?
        },
        None => MemoryCatalog::from_toml(DEMO_CATALOG, config.disambiguate_multidisc)?,
    };
    let script = match &script_path {
        Some(path) => {
            Script::load(path).with_context(|| format!("loading script {}", path.display()))?
        },
        None => Script::from_toml(DEMO_SCRIPT)?,
    };

    log::info!(
        "Starting gdmenu ({} rows per page, theme '{}')",
        config.page_size,
        theme.name
    );
    let report = run(config, theme, &mut catalog, &script, art)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(
    config: MenuConfig,
    theme: FolderTheme,
    catalog: &mut MemoryCatalog,
    script: &Script,
    mut art: DirArtwork,
) -> Result<Report> {
    let mut popups = popups::console_popups(config.repeat_initial);
    let mut launcher = RecordingLauncher::default();
    let mut backend = TraceBackend::default();
    // Background textures are owned by the platform; ids only need to be stable.
    log::debug!("Backdrop {} + {}", theme.bg_left, theme.bg_right);
    let backdrop = Backdrop {
        left: TextureId(0x1000),
        right: TextureId(0x1001),
    };

    let mut browser = FolderBrowser::new(config, theme);
    browser.on_activate(catalog);

    let mut tracker = FrameInputTracker::new();
    let mut frames = 0;
    for events in script.expand() {
        let Some(input) = tracker.collect(&events) else {
            log::info!("Quit requested after {frames} frames");
            break;
        };
        browser.on_frame_draw_opaque(&mut backend, &backdrop)?;
        browser.on_frame_draw_overlay(&mut backend, &mut art, &*catalog, &mut popups)?;
        let mut services = Services {
            catalog: &mut *catalog,
            launcher: &mut launcher,
            popups: &mut popups,
        };
        browser.on_input(input, &mut services);
        frames += 1;
    }

    Ok(Report {
        frames,
        state: browser.snapshot(&*catalog),
        launches: launcher.launches,
        draws: backend.stats,
    })
}
