//! Browser configuration.
//!
//! Supplied read-only at activation time. Everything has a default, so an
//! empty TOML document yields the stock settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Rows visible in the list at once.
pub const DEFAULT_PAGE_SIZE: usize = 17;
/// Rows skipped by a left/right or shoulder page jump.
pub const DEFAULT_PAGE_JUMP: usize = 5;
/// Frames to wait after a fresh directional press.
pub const DEFAULT_REPEAT_INITIAL: u32 = 18;
/// Frames between repeats while a direction stays held.
pub const DEFAULT_REPEAT_HELD: u32 = 5;

/// Navigation and presentation settings for the folder browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub page_size: usize,
    pub page_jump: usize,
    pub repeat_initial: u32,
    pub repeat_held: u32,
    /// Cooldown after entering or leaving a folder, as a multiple of
    /// `repeat_initial`.
    pub folder_settle_factor: u32,
    /// Show the disc chooser for titles spanning more than one disc.
    pub disambiguate_multidisc: bool,
    /// Draw box art for the selected title.
    pub show_artwork: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_jump: DEFAULT_PAGE_JUMP,
            repeat_initial: DEFAULT_REPEAT_INITIAL,
            repeat_held: DEFAULT_REPEAT_HELD,
            folder_settle_factor: 2,
            disambiguate_multidisc: true,
            show_artwork: true,
        }
    }
}

impl MenuConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(src: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml(&src)?;
        log::info!("Loaded menu config from {}", path.display());
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| MenuError::Config(e.to_string()))
    }

    /// Reject settings that would make navigation degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(MenuError::Config("page_size must be at least 1".into()));
        }
        if self.page_jump == 0 {
            return Err(MenuError::Config("page_jump must be at least 1".into()));
        }
        if self.repeat_held > self.repeat_initial {
            return Err(MenuError::Config(format!(
                "repeat_held ({}) must not exceed repeat_initial ({})",
                self.repeat_held, self.repeat_initial
            )));
        }
        Ok(())
    }

    /// Frames of input cooldown applied after a folder change.
    pub fn folder_settle_frames(&self) -> u32 {
        self.repeat_initial.saturating_mul(self.folder_settle_factor)
    }
}
