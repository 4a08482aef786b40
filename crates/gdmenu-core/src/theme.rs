//! Folder browser theme.
//!
//! Loaded from `theme.toml`. Colors are `#RRGGBB` or `#RRGGBBAA` strings;
//! unparsable colors fall back to the stock palette, and zero positions
//! fall back to the stock layout.

use std::path::Path;

use serde::Deserialize;

use crate::backend::Color;
use crate::color::parse_hex_color;
use crate::error::Result;

const DEFAULT_LIST_X: i32 = 11;
const DEFAULT_LIST_Y: i32 = 77;
const DEFAULT_ARTWORK_X: i32 = 420;
const DEFAULT_ARTWORK_Y: i32 = 213;
const DEFAULT_ARTWORK_SIZE: u32 = 210;

/// Colors handed to popups when they open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupColors {
    pub text: Color,
    pub highlight: Color,
    pub menu_text: Color,
    pub menu_highlight: Color,
    pub menu_background: Color,
    pub menu_border: Color,
    pub menu_icon: Color,
}

/// Palette strings as written in the theme file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaletteDef {
    pub text: String,
    pub highlight: String,
    pub menu_text: String,
    pub menu_highlight: String,
    pub menu_background: String,
    pub menu_border: String,
    pub menu_icon: String,
}

impl Default for PaletteDef {
    fn default() -> Self {
        Self {
            text: "#989EA4".into(),
            highlight: "#67C1F5".into(),
            menu_text: "#A49E98".into(),
            menu_highlight: "#67C1F5".into(),
            menu_background: "#000000".into(),
            menu_border: "#0D2C46".into(),
            menu_icon: "#FFFFFF".into(),
        }
    }
}

/// Visual configuration of the folder browser.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FolderTheme {
    pub name: String,
    /// Left background texture (512x480).
    pub bg_left: String,
    /// Right background texture (128x480).
    pub bg_right: String,
    pub font: String,
    pub palette: PaletteDef,
    pub cursor_color: String,
    pub multidisc_color: String,
    pub menu_title_color: String,
    pub cursor_width: u32,
    pub cursor_height: u32,
    pub item_spacing: i32,
    pub list_x: i32,
    pub list_y: i32,
    pub artwork_x: i32,
    pub artwork_y: i32,
    pub artwork_size: u32,
}

impl Default for FolderTheme {
    fn default() -> Self {
        Self {
            name: "FOLDERS".into(),
            bg_left: "THEME/FOLDERS/BG_L.PVR".into(),
            bg_right: "THEME/FOLDERS/BG_R.PVR".into(),
            font: "FONT/GDMNUFNT.PVR".into(),
            palette: PaletteDef::default(),
            cursor_color: "#213852".into(),
            multidisc_color: "#64FFE1".into(),
            menu_title_color: "#FFFFFF".into(),
            cursor_width: 404,
            cursor_height: 20,
            item_spacing: 21,
            list_x: DEFAULT_LIST_X,
            list_y: DEFAULT_LIST_Y,
            artwork_x: DEFAULT_ARTWORK_X,
            artwork_y: DEFAULT_ARTWORK_Y,
            artwork_size: DEFAULT_ARTWORK_SIZE,
        }
    }
}

fn or_default(value: i32, fallback: i32) -> i32 {
    if value == 0 { fallback } else { value }
}

impl FolderTheme {
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Load a theme file, falling back to the stock theme if it is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|src| Self::from_toml(&src))
        {
            Ok(theme) => {
                log::info!("Loaded theme '{}' from {}", theme.name, path.display());
                theme
            },
            Err(e) => {
                log::warn!("Theme {} unusable ({e}) -- using stock theme", path.display());
                Self::default()
            },
        }
    }

    pub fn popup_colors(&self) -> PopupColors {
        let stock = PaletteDef::default();
        let pick = |s: &str, fallback: &str| {
            parse_hex_color(s)
                .or_else(|| parse_hex_color(fallback))
                .unwrap_or(Color::WHITE)
        };
        let p = &self.palette;
        PopupColors {
            text: pick(&p.text, &stock.text),
            highlight: pick(&p.highlight, &stock.highlight),
            menu_text: pick(&p.menu_text, &stock.menu_text),
            menu_highlight: pick(&p.menu_highlight, &stock.menu_highlight),
            menu_background: pick(&p.menu_background, &stock.menu_background),
            menu_border: pick(&p.menu_border, &stock.menu_border),
            menu_icon: pick(&p.menu_icon, &stock.menu_icon),
        }
    }

    pub fn cursor_color(&self) -> Color {
        parse_hex_color(&self.cursor_color).unwrap_or(Color::rgb(33, 56, 82))
    }

    pub fn multidisc_color(&self) -> Color {
        parse_hex_color(&self.multidisc_color).unwrap_or(Color::rgb(100, 255, 225))
    }

    pub fn menu_title_color(&self) -> Color {
        parse_hex_color(&self.menu_title_color).unwrap_or(Color::WHITE)
    }

    /// List origin, with zero coordinates replaced by the stock layout.
    pub fn list_origin(&self) -> (i32, i32) {
        (
            or_default(self.list_x, DEFAULT_LIST_X),
            or_default(self.list_y, DEFAULT_LIST_Y),
        )
    }

    /// Artwork position and edge length.
    pub fn artwork_rect(&self) -> (i32, i32, u32) {
        let size = if self.artwork_size == 0 {
            DEFAULT_ARTWORK_SIZE
        } else {
            self.artwork_size
        };
        (
            or_default(self.artwork_x, DEFAULT_ARTWORK_X),
            or_default(self.artwork_y, DEFAULT_ARTWORK_Y),
            size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_palette() {
        let theme = FolderTheme::default();
        let colors = theme.popup_colors();
        assert_eq!(colors.text, Color::rgb(152, 158, 164));
        assert_eq!(colors.highlight, Color::rgb(103, 193, 245));
        assert_eq!(colors.menu_border, Color::rgb(13, 44, 70));
        assert_eq!(theme.cursor_color(), Color::rgb(33, 56, 82));
        assert_eq!(theme.multidisc_color(), Color::rgb(100, 255, 225));
        assert_eq!(theme.menu_title_color(), Color::WHITE);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let theme = FolderTheme::from_toml(
            r##"
name = "Dusk"
cursor_color = "#102030"

[palette]
text = "#FFFFFF"
"##,
        )
        .unwrap();
        assert_eq!(theme.name, "Dusk");
        assert_eq!(theme.cursor_color(), Color::rgb(16, 32, 48));
        assert_eq!(theme.popup_colors().text, Color::WHITE);
        assert_eq!(theme.popup_colors().highlight, Color::rgb(103, 193, 245));
        assert_eq!(theme.item_spacing, 21);
    }

    #[test]
    fn bad_color_falls_back() {
        let theme = FolderTheme::from_toml(
            "multidisc_color = \"teal\"\n[palette]\nhighlight = \"#XYZXYZ\"\n",
        )
        .unwrap();
        assert_eq!(theme.multidisc_color(), Color::rgb(100, 255, 225));
        assert_eq!(theme.popup_colors().highlight, Color::rgb(103, 193, 245));
    }

    #[test]
    fn zero_positions_use_stock_layout() {
        let theme = FolderTheme {
            list_x: 0,
            list_y: 0,
            artwork_x: 0,
            artwork_y: 0,
            artwork_size: 0,
            ..FolderTheme::default()
        };
        assert_eq!(theme.list_origin(), (11, 77));
        assert_eq!(theme.artwork_rect(), (420, 213, 210));
    }

    #[test]
    fn custom_positions_win() {
        let theme = FolderTheme::from_toml("list_x = 30\nartwork_size = 128\n").unwrap();
        assert_eq!(theme.list_origin(), (30, 77));
        assert_eq!(theme.artwork_rect().2, 128);
    }

    #[test]
    fn missing_file_gives_stock_theme() {
        let theme = FolderTheme::load_or_default(Path::new("/nonexistent/theme.toml"));
        assert_eq!(theme.name, "FOLDERS");
    }

    #[test]
    fn theme_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "name = \"Night\"\nitem_spacing = 24\n").unwrap();
        let theme = FolderTheme::load_or_default(&path);
        assert_eq!(theme.name, "Night");
        assert_eq!(theme.item_spacing, 24);
    }

    #[test]
    fn malformed_file_gives_stock_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "item_spacing = \"wide\"").unwrap();
        assert_eq!(FolderTheme::load_or_default(&path).item_spacing, 21);
    }
}
