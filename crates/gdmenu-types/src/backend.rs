//! Drawing backend trait.
//!
//! The browser never talks to a GPU or a framebuffer directly. Every
//! platform supplies a [`MenuBackend`] and the core issues its list,
//! cursor, artwork, and background draws through it.

use crate::error::Result;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Opaque handle to a loaded texture in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Source region inside a texture, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SubRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Rendering backend used by the folder browser.
///
/// Only the four primitives the browser needs are required. Texture
/// loading, font setup, and buffer presentation stay with the platform.
#[allow(clippy::too_many_arguments)]
pub trait MenuBackend {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw a line of text with the active bitmap font.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<()>;

    /// Blit a whole texture scaled to `w` x `h`, modulated by `tint`.
    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32, tint: Color)
    -> Result<()>;

    /// Blit a region of a texture to the given destination rectangle.
    fn blit_sub(
        &mut self,
        tex: TextureId,
        src: SubRect,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        tint: Color,
    ) -> Result<()> {
        let _ = src;
        self.blit(tex, x, y, w, h, tint)
    }
}
