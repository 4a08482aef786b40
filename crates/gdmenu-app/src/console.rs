//! Headless platform pieces: a draw backend that only counts and traces,
//! a launcher that records instead of booting, and file-backed artwork.

use std::collections::HashMap;
use std::path::PathBuf;

use gdmenu_core::backend::{Color, MenuBackend, TextureId};
use gdmenu_core::catalog::ListItem;
use gdmenu_core::color::to_hex;
use gdmenu_core::error::{MenuError, Result};
use gdmenu_core::launch::{LaunchKind, Launcher};
use gdmenu_core::render::ArtworkSource;
use serde::Serialize;

/// Draw calls issued since the backend was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawStats {
    pub rects: u64,
    pub texts: u64,
    pub blits: u64,
}

/// Backend that traces draw calls instead of rasterizing them.
///
/// Texture id 0 is never handed out by [`DirArtwork`]; blitting it fails.
#[derive(Debug, Default)]
pub struct TraceBackend {
    pub stats: DrawStats,
}

impl MenuBackend for TraceBackend {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.stats.rects += 1;
        log::trace!("rect {x},{y} {w}x{h} {}", to_hex(color));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<()> {
        self.stats.texts += 1;
        log::trace!("text {x},{y} {} '{text}'", to_hex(color));
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32, _tint: Color) -> Result<()> {
        if tex.0 == 0 {
            return Err(MenuError::Backend(format!("blit of unloaded texture at {x},{y}")));
        }
        self.stats.blits += 1;
        log::trace!("blit {tex:?} {x},{y} {w}x{h}");
        Ok(())
    }
}

/// A launch the driver would have performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRecord {
    pub path: String,
    pub name: String,
    pub product: String,
}

/// Records launches; the browser keeps running afterwards.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub launches: Vec<LaunchRecord>,
}

impl RecordingLauncher {
    fn record(&mut self, kind: LaunchKind, item: &ListItem) -> Result<()> {
        if item.product.is_empty() {
            return Err(MenuError::Launch(format!("'{}' has no product id", item.name)));
        }
        let path = match kind {
            LaunchKind::Disc => "disc",
            LaunchKind::Emulated => "emulator",
            LaunchKind::Cheats => "cheats",
        };
        log::info!("[{path}] {} ({})", item.name, item.product);
        self.launches.push(LaunchRecord {
            path: path.to_string(),
            name: item.name.clone(),
            product: item.product.clone(),
        });
        Ok(())
    }
}

impl Launcher for RecordingLauncher {
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

/// Artwork looked up as `<dir>/large/<product>.pvr` and
/// `<dir>/small/<product>.pvr`. Texture ids are handed out on first hit.
#[derive(Debug, Default)]
pub struct DirArtwork {
    root: Option<PathBuf>,
    loaded: HashMap<PathBuf, TextureId>,
}

impl DirArtwork {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            loaded: HashMap::new(),
        }
    }

    fn lookup(&mut self, size: &str, product: &str) -> Option<TextureId> {
        let path = self.root.as_ref()?.join(size).join(format!("{product}.pvr"));
        if let Some(tex) = self.loaded.get(&path) {
            return Some(*tex);
        }
        if !path.is_file() {
            return None;
        }
        let tex = TextureId(self.loaded.len() as u64 + 1);
        log::debug!("Artwork {} -> {tex:?}", path.display());
        self.loaded.insert(path, tex);
        Some(tex)
    }
}

impl ArtworkSource for DirArtwork {
    fn large(&mut self, product: &str) -> Option<TextureId> {
        self.lookup("large", product)
    }

    fn small(&mut self, product: &str) -> Option<TextureId> {
        self.lookup("small", product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdmenu_core::catalog::LaunchRoute;

    #[test]
    fn launcher_records_path() {
        let mut launcher = RecordingLauncher::default();
        let item = ListItem::title("Crazy Taxi", "MK-51035", LaunchRoute::Native, None);
        launcher.launch_with_cheats(&item).unwrap();
        assert_eq!(launcher.launches[0].path, "cheats");
        assert_eq!(launcher.launches[0].product, "MK-51035");
    }

    #[test]
    fn launcher_refuses_title_without_product() {
        let mut launcher = RecordingLauncher::default();
        let item = ListItem::title("Homebrew", "", LaunchRoute::Native, None);
        let err = launcher.launch_disc(&item).unwrap_err();
        assert!(matches!(err, MenuError::Launch(_)));
        assert!(launcher.launches.is_empty());
    }

    #[test]
    fn backend_rejects_unloaded_texture() {
        let mut backend = TraceBackend::default();
        let err = backend.blit(TextureId(0), 0, 0, 128, 128, Color::WHITE).unwrap_err();
        assert!(matches!(err, MenuError::Backend(_)));
        backend.blit(TextureId(1), 0, 0, 128, 128, Color::WHITE).unwrap();
        assert_eq!(backend.stats.blits, 1);
    }

    #[test]
    fn backend_counts_calls() {
        let mut backend = TraceBackend::default();
        backend.fill_rect(0, 0, 1, 1, Color::BLACK).unwrap();
        backend.draw_text("x", 0, 0, Color::WHITE).unwrap();
        backend.draw_text("y", 0, 0, Color::WHITE).unwrap();
        assert_eq!(
            backend.stats,
            DrawStats {
                rects: 1,
                texts: 2,
                blits: 0
            }
        );
    }

    #[test]
    fn artwork_found_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("small")).unwrap();
        std::fs::write(dir.path().join("small/MK-51035.pvr"), b"PVRT").unwrap();

        let mut art = DirArtwork::new(Some(dir.path().to_path_buf()));
        assert_eq!(art.large("MK-51035"), None);
        let tex = art.small("MK-51035").unwrap();
        assert_eq!(art.small("MK-51035"), Some(tex));
        assert_eq!(art.small("MK-00000"), None);
    }

    #[test]
    fn no_art_dir_means_no_art() {
        let mut art = DirArtwork::new(None);
        assert_eq!(art.large("MK-51035"), None);
    }
}
