//! Drawing for the folder browser.
//!
//! Two passes per frame: the opaque pass paints the split background, the
//! overlay pass paints the visible rows, the selection cursor, and the
//! focused title's artwork.

use crate::backend::{Color, MenuBackend, SubRect, TextureId};
use crate::catalog::ListItem;
use crate::error::Result;
use crate::theme::FolderTheme;
use crate::viewport::Viewport;

const TEXT_X_ADJUST: i32 = 7;
const TEXT_Y_ADJUST: i32 = 4;
const CURSOR_Y_ADJUST: i32 = 3;

const BG_LEFT_WIDTH: u32 = 512;
const BG_RIGHT_WIDTH: u32 = 128;
const BG_HEIGHT: u32 = 480;

/// Background textures, loaded by the platform from the theme paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub left: TextureId,
    pub right: TextureId,
}

/// Artwork lookup by product code.
pub trait ArtworkSource {
    fn large(&mut self, product: &str) -> Option<TextureId>;

    fn small(&mut self, product: &str) -> Option<TextureId>;
}

/// Pulsing alpha for the selection cursor: bounces between 255 and 0 in
/// steps of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorStrobe {
    alpha: u8,
    rising: bool,
}

impl Default for CursorStrobe {
    fn default() -> Self {
        Self {
            alpha: u8::MAX,
            rising: false,
        }
    }
}

impl CursorStrobe {
    const STEP: u8 = 5;

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn advance(&mut self) {
        if self.alpha == u8::MAX {
            self.rising = false;
        } else if self.alpha == 0 {
            self.rising = true;
        }
        self.alpha = if self.rising {
            self.alpha.saturating_add(Self::STEP)
        } else {
            self.alpha.saturating_sub(Self::STEP)
        };
    }
}

/// Opaque pass: left 512x480 and right 128x480 background halves.
pub fn draw_backdrop(backend: &mut dyn MenuBackend, backdrop: &Backdrop) -> Result<()> {
    backend.blit_sub(
        backdrop.left,
        SubRect::new(0, 0, BG_LEFT_WIDTH, BG_HEIGHT),
        0,
        0,
        BG_LEFT_WIDTH,
        BG_HEIGHT,
        Color::WHITE,
    )?;
    backend.blit_sub(
        backdrop.right,
        SubRect::new(0, 0, BG_RIGHT_WIDTH, BG_HEIGHT),
        BG_LEFT_WIDTH as i32,
        0,
        BG_RIGHT_WIDTH,
        BG_HEIGHT,
        Color::WHITE,
    )
}

/// Draw the visible window of `rows` with the cursor behind the selection.
///
/// The selected row of a multi-disc set uses the theme's multi-disc color
/// when `mark_multidisc` is set.
pub fn draw_list(
    backend: &mut dyn MenuBackend,
    theme: &FolderTheme,
    rows: &[ListItem],
    view: &Viewport,
    cursor_alpha: u8,
    mark_multidisc: bool,
) -> Result<()> {
    let (list_x, list_y) = theme.list_origin();
    let palette = theme.popup_colors();
    for (slot, index) in view.visible_range(rows.len()).enumerate() {
        let item = &rows[index];
        let y = list_y + TEXT_Y_ADJUST + slot as i32 * theme.item_spacing;
        let color = if index == view.selected() {
            backend.fill_rect(
                list_x,
                y - CURSOR_Y_ADJUST,
                theme.cursor_width,
                theme.cursor_height,
                theme.cursor_color().with_alpha(cursor_alpha),
            )?;
            if mark_multidisc && item.disc_count() > 1 {
                theme.multidisc_color()
            } else {
                palette.highlight
            }
        } else {
            palette.text
        };
        backend.draw_text(&item.name, list_x + TEXT_X_ADJUST, y, color)?;
    }
    Ok(())
}

/// Draw box art for `item`: large art first, small art as fallback.
/// Directories and titles without art draw nothing.
pub fn draw_artwork(
    backend: &mut dyn MenuBackend,
    theme: &FolderTheme,
    art: &mut dyn ArtworkSource,
    item: &ListItem,
) -> Result<()> {
    if item.is_directory() {
        return Ok(());
    }
    let Some(tex) = art.large(&item.product).or_else(|| art.small(&item.product)) else {
        return Ok(());
    };
    let (x, y, size) = theme.artwork_rect();
    backend.blit(tex, x, y, size, size, Color::WHITE)
}
