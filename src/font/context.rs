use super::fallback::fallback_glyph;
use super::psf::BitmapFont;
use super::wide::{self, WideGlyph};
use super::{Glyph, GLYPH_HEIGHT};
use crate::error::FontError;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Owns the active font state: at most one loaded PSF1 font plus a wide
/// table. Resolves codepoints by precedence, first match wins:
///
/// 1. codepoint <= 255 with a font loaded: the font's glyph
/// 2. exact match in the wide table
/// 3. the ASCII fallback (`?` for anything it does not cover)
#[derive(Debug, Clone)]
pub struct FontContext {
    font: Option<BitmapFont>,
    wide: Cow<'static, [WideGlyph]>,
}

impl FontContext {
    /// No font loaded, compiled-in wide table
    pub fn new() -> Self {
        Self {
            font: None,
            wide: Cow::Borrowed(wide::builtin()),
        }
    }

    /// No font, no wide table: only the fallback set resolves
    pub fn without_wide_table() -> Self {
        Self {
            font: None,
            wide: Cow::Borrowed(&[]),
        }
    }

    /// No font, with an owned wide table (e.g. from `bdf::parse_bdf`)
    pub fn with_wide_table(table: Vec<WideGlyph>) -> Self {
        Self {
            font: None,
            wide: Cow::Owned(table),
        }
    }

    pub fn set_wide_table(&mut self, table: Vec<WideGlyph>) {
        log::debug!("wide table replaced ({} glyphs)", table.len());
        self.wide = Cow::Owned(table);
    }

    pub fn wide_table(&self) -> &[WideGlyph] {
        &self.wide
    }

    /// Drop the loaded font. The wide table is kept.
    pub fn reset(&mut self) {
        if self.font.take().is_some() {
            log::debug!("font reset");
        }
    }

    /// Load a PSF1 font, replacing the current one only on success
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), FontError> {
        match BitmapFont::read_from(reader) {
            Ok(font) => {
                log::info!(
                    "loaded PSF1 font: 256 glyphs, height {}, mode {:#04x}",
                    font.height(),
                    font.mode()
                );
                self.font = Some(font);
                Ok(())
            },
            Err(e) => {
                log::warn!("rejected font: {}", e);
                Err(e)
            },
        }
    }

    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), FontError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            log::warn!("cannot open font {}: {}", path.display(), e);
            FontError::Io(e)
        })?;
        self.load(BufReader::new(file))
    }

    pub fn is_loaded(&self) -> bool {
        self.font.is_some()
    }

    pub fn font(&self) -> Option<&BitmapFont> {
        self.font.as_ref()
    }

    /// Row count of byte-range glyphs for the current font state
    pub fn active_height(&self) -> usize {
        self.font.as_ref().map_or(GLYPH_HEIGHT, BitmapFont::height)
    }

    pub fn resolve(&self, codepoint: u32) -> Glyph<'_> {
        if let Some(font) = &self.font {
            if let Ok(byte) = u8::try_from(codepoint) {
                return font.glyph(byte);
            }
        }

        if let Some(entry) = wide::find(&self.wide, codepoint) {
            return Glyph::from(&entry.rows);
        }

        Glyph::from(fallback_glyph(codepoint))
    }
}

impl Default for FontContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fallback::{FIRST_PRINTABLE, LAST_PRINTABLE};
    use crate::font::psf::tests::sample_psf;
    use std::io::Cursor;

    #[test]
    fn test_fallback_only() {
        let ctx = FontContext::without_wide_table();
        let question = fallback_glyph(u32::from(b'?'));

        for c in FIRST_PRINTABLE..=LAST_PRINTABLE {
            assert_eq!(ctx.resolve(c).rows(), fallback_glyph(c));
        }
        for c in [0u32, 31, 127, 200, 0x410, 0xFFFF] {
            assert_eq!(ctx.resolve(c).rows(), question);
        }
    }

    #[test]
    fn test_loaded_font_matches_file_bytes() {
        let bytes = sample_psf(16);
        let mut ctx = FontContext::new();
        ctx.load(Cursor::new(&bytes)).unwrap();

        assert!(ctx.is_loaded());
        assert_eq!(ctx.active_height(), 16);
        for c in [0u32, 65, 255] {
            let start = 4 + c as usize * 16;
            assert_eq!(ctx.resolve(c).rows(), &bytes[start..start + 16]);
        }
    }

    #[test]
    fn test_bad_magic_keeps_previous_font() {
        let good = sample_psf(8);
        let mut ctx = FontContext::new();
        ctx.load(Cursor::new(&good)).unwrap();
        let before = ctx.font().cloned();

        let mut bad = sample_psf(16);
        bad[0] = 0x00;
        assert!(ctx.load(Cursor::new(&bad)).is_err());
        assert_eq!(ctx.font().cloned(), before);
        assert_eq!(ctx.active_height(), 8);
    }

    #[test]
    fn test_failed_load_without_font_stays_empty() {
        let mut ctx = FontContext::new();
        assert!(ctx.load(Cursor::new(vec![0x36, 0x04])).is_err());
        assert!(!ctx.is_loaded());
        assert_eq!(ctx.active_height(), GLYPH_HEIGHT);
    }

    #[test]
    fn test_wide_table_precedence() {
        let rows = [0xAA; GLYPH_HEIGHT];
        let mut ctx = FontContext::with_wide_table(vec![
            WideGlyph::new(0x410, rows),
            WideGlyph::new(0x410, [0x55; GLYPH_HEIGHT]),
            WideGlyph::new(65, [0x11; GLYPH_HEIGHT]),
        ]);

        assert_eq!(ctx.resolve(0x410).rows(), &rows);
        // no font: 'A' comes from the wide table
        assert_eq!(ctx.resolve(65).rows(), &[0x11; GLYPH_HEIGHT]);

        ctx.load(Cursor::new(sample_psf(16))).unwrap();
        assert_eq!(ctx.resolve(65).rows()[0], 65);
        assert_eq!(ctx.resolve(0x410).rows(), &rows);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut ctx = FontContext::new();
        ctx.load(Cursor::new(sample_psf(16))).unwrap();
        ctx.reset();
        ctx.reset();
        assert!(!ctx.is_loaded());
        assert_eq!(ctx.resolve(u32::from(b'A')).height(), GLYPH_HEIGHT);
    }

    #[test]
    fn test_reset_keeps_wide_table() {
        let table = vec![WideGlyph::new(0x416, [0x3C; GLYPH_HEIGHT])];
        let mut ctx = FontContext::with_wide_table(table);
        ctx.load(Cursor::new(sample_psf(16))).unwrap();
        ctx.reset();
        assert_eq!(ctx.wide_table().len(), 1);
        assert_eq!(ctx.wide_table()[0].codepoint, 0x416);

        assert!(FontContext::without_wide_table().wide_table().is_empty());
        assert_eq!(FontContext::new().wide_table().len(), wide::builtin().len());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut ctx = FontContext::new();
        let err = ctx.load_path("/nonexistent/font.psf").unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
