//! Glyph sources and codepoint resolution
//!
//! Three sources, in precedence order: a loaded PSF1 font (byte range
//! only), a wide-codepoint table, and the hand-drawn ASCII fallback.

pub mod bdf;
mod context;
pub mod fallback;
pub mod psf;
pub mod wide;

pub use context::FontContext;
pub use psf::BitmapFont;
pub use wide::WideGlyph;

/// Glyph advance and bitmap width in pixels
pub const GLYPH_WIDTH: i32 = 8;
/// Row count of the fallback and wide-table glyphs
pub const GLYPH_HEIGHT: usize = 16;

/// Row bitmaps of a compiled-in glyph, MSB = leftmost pixel
pub type GlyphRows = [u8; GLYPH_HEIGHT];

/// A resolved glyph: one byte per row, borrowed from whichever source
/// produced it. Loaded fonts may have any height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    rows: &'a [u8],
}

impl<'a> Glyph<'a> {
    #[inline]
    pub const fn new(rows: &'a [u8]) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> &'a [u8] {
        self.rows
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the pixel at (`col`, `row`) is lit; false outside the bitmap
    #[inline]
    pub fn is_set(&self, col: i32, row: i32) -> bool {
        if !(0..GLYPH_WIDTH).contains(&col) || row < 0 {
            return false;
        }
        self.rows
            .get(row as usize)
            .is_some_and(|bits| bits & (0x80 >> col) != 0)
    }
}

impl<'a> From<&'a GlyphRows> for Glyph<'a> {
    fn from(rows: &'a GlyphRows) -> Self {
        Self::new(rows)
    }
}
