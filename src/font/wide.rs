//! Wide-codepoint glyph table
//!
//! Codepoints above the PSF byte range, looked up by exact match in table
//! order. The built-in table covers Cyrillic (U+0401, U+0410..=U+044F,
//! U+0451) in the same 8x16 style as the ASCII fallback.

use super::GlyphRows;

/// One (codepoint, bitmap) entry of a wide table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideGlyph {
    pub codepoint: u32,
    pub rows: GlyphRows,
}

impl WideGlyph {
    pub const fn new(codepoint: u32, rows: GlyphRows) -> Self {
        Self { codepoint, rows }
    }
}

/// First entry matching `codepoint`
pub fn find(table: &[WideGlyph], codepoint: u32) -> Option<&WideGlyph> {
    table.iter().find(|g| g.codepoint == codepoint)
}

/// The compiled-in table
#[cfg(feature = "wide-glyphs")]
pub fn builtin() -> &'static [WideGlyph] {
    &CYRILLIC
}

/// Built without `wide-glyphs`: nothing compiled in
#[cfg(not(feature = "wide-glyphs"))]
pub fn builtin() -> &'static [WideGlyph] {
    &[]
}

#[cfg(feature = "wide-glyphs")]
#[rustfmt::skip]
static CYRILLIC: [WideGlyph; 66] = [
    // Ё
    WideGlyph::new(0x0401, [0x00, 0x24, 0x7E, 0x40, 0x78, 0x40, 0x40, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // А
    WideGlyph::new(0x0410, [0x00, 0x00, 0x18, 0x24, 0x24, 0x7E, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Б
    WideGlyph::new(0x0411, [0x00, 0x00, 0x7E, 0x40, 0x7C, 0x42, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // В
    WideGlyph::new(0x0412, [0x00, 0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Г
    WideGlyph::new(0x0413, [0x00, 0x00, 0x7E, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Д
    WideGlyph::new(0x0414, [0x00, 0x00, 0x1C, 0x24, 0x24, 0x44, 0x44, 0x7E, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Е
    WideGlyph::new(0x0415, [0x00, 0x00, 0x7E, 0x40, 0x78, 0x40, 0x40, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ж
    WideGlyph::new(0x0416, [0x00, 0x00, 0x92, 0x54, 0x38, 0x54, 0x92, 0x92, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // З
    WideGlyph::new(0x0417, [0x00, 0x00, 0x3C, 0x42, 0x1C, 0x02, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // И
    WideGlyph::new(0x0418, [0x00, 0x00, 0x42, 0x46, 0x4A, 0x52, 0x62, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Й
    WideGlyph::new(0x0419, [0x24, 0x18, 0x42, 0x46, 0x4A, 0x52, 0x62, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // К
    WideGlyph::new(0x041A, [0x00, 0x00, 0x42, 0x44, 0x78, 0x48, 0x44, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Л
    WideGlyph::new(0x041B, [0x00, 0x00, 0x3E, 0x22, 0x22, 0x22, 0x22, 0x62, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // М
    WideGlyph::new(0x041C, [0x00, 0x00, 0x42, 0x7E, 0x5A, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Н
    WideGlyph::new(0x041D, [0x00, 0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // О
    WideGlyph::new(0x041E, [0x00, 0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // П
    WideGlyph::new(0x041F, [0x00, 0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Р
    WideGlyph::new(0x0420, [0x00, 0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // С
    WideGlyph::new(0x0421, [0x00, 0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Т
    WideGlyph::new(0x0422, [0x00, 0x00, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // У
    WideGlyph::new(0x0423, [0x00, 0x00, 0x42, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ф
    WideGlyph::new(0x0424, [0x00, 0x00, 0x18, 0x7E, 0x99, 0x99, 0x7E, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Х
    WideGlyph::new(0x0425, [0x00, 0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ц
    WideGlyph::new(0x0426, [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x44, 0x7E, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ч
    WideGlyph::new(0x0427, [0x00, 0x00, 0x42, 0x42, 0x42, 0x3E, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ш
    WideGlyph::new(0x0428, [0x00, 0x00, 0x92, 0x92, 0x92, 0x92, 0x92, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Щ
    WideGlyph::new(0x0429, [0x00, 0x00, 0x92, 0x92, 0x92, 0x92, 0x92, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ъ
    WideGlyph::new(0x042A, [0x00, 0x00, 0xC0, 0x40, 0x7C, 0x42, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ы
    WideGlyph::new(0x042B, [0x00, 0x00, 0x82, 0x82, 0xF2, 0x8A, 0x8A, 0xF2, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ь
    WideGlyph::new(0x042C, [0x00, 0x00, 0x40, 0x40, 0x7C, 0x42, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Э
    WideGlyph::new(0x042D, [0x00, 0x00, 0x3C, 0x42, 0x1E, 0x02, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Ю
    WideGlyph::new(0x042E, [0x00, 0x00, 0x9C, 0xA2, 0xE2, 0xA2, 0xA2, 0x9C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // Я
    WideGlyph::new(0x042F, [0x00, 0x00, 0x3E, 0x42, 0x42, 0x3E, 0x22, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // а
    WideGlyph::new(0x0430, [0x00, 0x00, 0x00, 0x00, 0x3C, 0x42, 0x7E, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // б
    WideGlyph::new(0x0431, [0x00, 0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // в
    WideGlyph::new(0x0432, [0x00, 0x00, 0x00, 0x00, 0x7C, 0x78, 0x44, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // г
    WideGlyph::new(0x0433, [0x00, 0x00, 0x00, 0x00, 0x7E, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // д
    WideGlyph::new(0x0434, [0x00, 0x00, 0x00, 0x00, 0x1C, 0x24, 0x44, 0x7E, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // е
    WideGlyph::new(0x0435, [0x00, 0x00, 0x00, 0x00, 0x38, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ж
    WideGlyph::new(0x0436, [0x00, 0x00, 0x00, 0x00, 0x92, 0x54, 0x38, 0xD6, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // з
    WideGlyph::new(0x0437, [0x00, 0x00, 0x00, 0x00, 0x3C, 0x1C, 0x02, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // и
    WideGlyph::new(0x0438, [0x00, 0x00, 0x00, 0x00, 0x42, 0x46, 0x5A, 0x62, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // й
    WideGlyph::new(0x0439, [0x00, 0x00, 0x24, 0x18, 0x42, 0x46, 0x5A, 0x62, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // к
    WideGlyph::new(0x043A, [0x00, 0x00, 0x00, 0x00, 0x44, 0x78, 0x48, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // л
    WideGlyph::new(0x043B, [0x00, 0x00, 0x00, 0x00, 0x3E, 0x22, 0x22, 0x62, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // м
    WideGlyph::new(0x043C, [0x00, 0x00, 0x00, 0x00, 0x42, 0x66, 0x5A, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // н
    WideGlyph::new(0x043D, [0x00, 0x00, 0x00, 0x00, 0x42, 0x7E, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // о
    WideGlyph::new(0x043E, [0x00, 0x00, 0x00, 0x00, 0x3C, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // п
    WideGlyph::new(0x043F, [0x00, 0x00, 0x00, 0x00, 0x7E, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // р
    WideGlyph::new(0x0440, [0x00, 0x00, 0x00, 0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // с
    WideGlyph::new(0x0441, [0x00, 0x00, 0x00, 0x00, 0x3C, 0x42, 0x40, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // т
    WideGlyph::new(0x0442, [0x00, 0x00, 0x00, 0x00, 0x7E, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // у
    WideGlyph::new(0x0443, [0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x24, 0x18, 0x08, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ф
    WideGlyph::new(0x0444, [0x00, 0x00, 0x00, 0x18, 0x7E, 0x99, 0x99, 0x7E, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // х
    WideGlyph::new(0x0445, [0x00, 0x00, 0x00, 0x00, 0x42, 0x24, 0x18, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ц
    WideGlyph::new(0x0446, [0x00, 0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x7E, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ч
    WideGlyph::new(0x0447, [0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x3E, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ш
    WideGlyph::new(0x0448, [0x00, 0x00, 0x00, 0x00, 0x92, 0x92, 0x92, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // щ
    WideGlyph::new(0x0449, [0x00, 0x00, 0x00, 0x00, 0x92, 0x92, 0x92, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ъ
    WideGlyph::new(0x044A, [0x00, 0x00, 0x00, 0x00, 0xC0, 0x7C, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ы
    WideGlyph::new(0x044B, [0x00, 0x00, 0x00, 0x00, 0x82, 0xF2, 0x8A, 0xF2, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ь
    WideGlyph::new(0x044C, [0x00, 0x00, 0x00, 0x00, 0x40, 0x7C, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // э
    WideGlyph::new(0x044D, [0x00, 0x00, 0x00, 0x00, 0x3C, 0x1E, 0x02, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ю
    WideGlyph::new(0x044E, [0x00, 0x00, 0x00, 0x00, 0x9C, 0xE2, 0xA2, 0x9C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // я
    WideGlyph::new(0x044F, [0x00, 0x00, 0x00, 0x00, 0x3E, 0x42, 0x3E, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    // ё
    WideGlyph::new(0x0451, [0x00, 0x00, 0x24, 0x00, 0x38, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_match_in_table_order() {
        let table = [
            WideGlyph::new(0x500, [1; 16]),
            WideGlyph::new(0x501, [2; 16]),
            WideGlyph::new(0x500, [3; 16]),
        ];
        assert_eq!(find(&table, 0x500).map(|g| g.rows[0]), Some(1));
        assert_eq!(find(&table, 0x501).map(|g| g.rows[0]), Some(2));
        assert!(find(&table, 0x502).is_none());
    }

    #[cfg(feature = "wide-glyphs")]
    #[test]
    fn test_builtin_covers_russian_alphabet() {
        let table = builtin();
        for cp in (0x410..=0x44F).chain([0x401, 0x451]) {
            assert!(find(table, cp).is_some(), "missing U+{:04X}", cp);
        }
        assert!(find(table, 'A' as u32).is_none());
    }

    #[cfg(feature = "wide-glyphs")]
    #[test]
    fn test_builtin_codepoints_are_unique() {
        let mut seen: Vec<u32> = builtin().iter().map(|g| g.codepoint).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), builtin().len());
    }
}
