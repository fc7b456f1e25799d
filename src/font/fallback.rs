//! Built-in glyphs for printable ASCII
//!
//! Hand-drawn 8x16 pixel art used when neither a loaded font nor the wide
//! table covers a codepoint. Most glyphs live in rows 2..=7 with
//! descenders in rows 8..=9. `\` and `` ` `` were never drawn and share
//! the `?` art, as does every codepoint outside 32..=126.

use super::GlyphRows;

/// First and last codepoint with an entry in the table
pub const FIRST_PRINTABLE: u32 = 32;
pub const LAST_PRINTABLE: u32 = 126;

const QUESTION: GlyphRows = [
    0x00, 0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Indexed by `codepoint - FIRST_PRINTABLE`
#[rustfmt::skip]
static FALLBACK_GLYPHS: [GlyphRows; (LAST_PRINTABLE - FIRST_PRINTABLE + 1) as usize] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '!'
    [0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '"'
    [0x00, 0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x00, 0x00, 0x00, 0x24, 0xFF, 0x24, 0xFF, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '$'
    [0x00, 0x00, 0x3E, 0x40, 0x3C, 0x02, 0x7C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '%'
    [0x00, 0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '&'
    [0x00, 0x00, 0x1C, 0x22, 0x1C, 0x28, 0x44, 0x3A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '\''
    [0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '('
    [0x00, 0x18, 0x30, 0x60, 0x60, 0x60, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // ')'
    [0x00, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '*'
    [0x00, 0x00, 0x00, 0x2A, 0x1C, 0x2A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '+'
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x7E, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // ','
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '/'
    [0x00, 0x00, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '0'
    [0x00, 0x00, 0x3C, 0x42, 0x46, 0x4A, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '1'
    [0x00, 0x00, 0x18, 0x38, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '2'
    [0x00, 0x00, 0x3C, 0x42, 0x06, 0x1C, 0x30, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '3'
    [0x00, 0x00, 0x3C, 0x42, 0x1C, 0x06, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '4'
    [0x00, 0x00, 0x0C, 0x1C, 0x2C, 0x4C, 0x7E, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '5'
    [0x00, 0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '6'
    [0x00, 0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '7'
    [0x00, 0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '8'
    [0x00, 0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '9'
    [0x00, 0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // ':'
    [0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // ';'
    [0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '<'
    [0x00, 0x04, 0x0C, 0x1C, 0x3C, 0x3C, 0x1C, 0x0C, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '='
    [0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '>'
    [0x00, 0x20, 0x30, 0x38, 0x3C, 0x3C, 0x38, 0x30, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '?'
    QUESTION,
    // '@'
    [0x00, 0x00, 0x3C, 0x42, 0x5A, 0x5A, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'A'
    [0x00, 0x00, 0x18, 0x24, 0x24, 0x7E, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'B'
    [0x00, 0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'C'
    [0x00, 0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'D'
    [0x00, 0x00, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'E'
    [0x00, 0x00, 0x7E, 0x40, 0x78, 0x40, 0x40, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'F'
    [0x00, 0x00, 0x7E, 0x40, 0x78, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'G'
    [0x00, 0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'H'
    [0x00, 0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'I'
    [0x00, 0x00, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'J'
    [0x00, 0x00, 0x7E, 0x06, 0x06, 0x06, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'K'
    [0x00, 0x00, 0x42, 0x44, 0x78, 0x48, 0x44, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'L'
    [0x00, 0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'M'
    [0x00, 0x00, 0x42, 0x7E, 0x5A, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'N'
    [0x00, 0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'O'
    [0x00, 0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'P'
    [0x00, 0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'Q'
    [0x00, 0x00, 0x3C, 0x42, 0x42, 0x42, 0x4A, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'R'
    [0x00, 0x00, 0x7C, 0x42, 0x42, 0x7C, 0x48, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'S'
    [0x00, 0x00, 0x3C, 0x42, 0x3C, 0x02, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'T'
    [0x00, 0x00, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'U'
    [0x00, 0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'V'
    [0x00, 0x00, 0x42, 0x42, 0x42, 0x24, 0x24, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'W'
    [0x00, 0x00, 0x42, 0x42, 0x5A, 0x5A, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'X'
    [0x00, 0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'Y'
    [0x00, 0x00, 0x42, 0x42, 0x24, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'Z'
    [0x00, 0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '['
    [0x00, 0x00, 0x78, 0x40, 0x40, 0x40, 0x40, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '\\'
    QUESTION,
    // ']'
    [0x00, 0x00, 0x78, 0x08, 0x08, 0x08, 0x08, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '^'
    [0x00, 0x00, 0x18, 0x24, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '_'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '`'
    QUESTION,
    // 'a'
    [0x00, 0x00, 0x00, 0x00, 0x3C, 0x42, 0x7E, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'b'
    [0x00, 0x00, 0x40, 0x40, 0x7C, 0x42, 0x42, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'c'
    [0x00, 0x00, 0x00, 0x00, 0x3C, 0x42, 0x40, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'd'
    [0x00, 0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'e'
    [0x00, 0x00, 0x00, 0x00, 0x38, 0x7C, 0x40, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'f'
    [0x00, 0x00, 0x18, 0x20, 0x7C, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'g'
    [0x00, 0x00, 0x00, 0x00, 0x3C, 0x4A, 0x4A, 0x34, 0x04, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'h'
    [0x00, 0x00, 0x40, 0x40, 0x7C, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'i'
    [0x00, 0x00, 0x10, 0x00, 0x18, 0x10, 0x10, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'j'
    [0x00, 0x00, 0x08, 0x00, 0x0C, 0x08, 0x08, 0x38, 0x08, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'k'
    [0x00, 0x00, 0x40, 0x40, 0x4C, 0x50, 0x60, 0x4C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'l'
    [0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'm'
    [0x00, 0x00, 0x00, 0x00, 0x5A, 0x5A, 0x5A, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'n'
    [0x00, 0x00, 0x00, 0x00, 0x7C, 0x42, 0x42, 0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'o'
    [0x00, 0x00, 0x00, 0x00, 0x3C, 0x42, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'p'
    [0x00, 0x00, 0x00, 0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'q'
    [0x00, 0x00, 0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'r'
    [0x00, 0x00, 0x00, 0x00, 0x78, 0x44, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 's'
    [0x00, 0x00, 0x00, 0x00, 0x3C, 0x40, 0x3C, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 't'
    [0x00, 0x00, 0x20, 0x20, 0x7C, 0x20, 0x20, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'u'
    [0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x42, 0x3E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'v'
    [0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x24, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'w'
    [0x00, 0x00, 0x00, 0x00, 0x42, 0x5A, 0x5A, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'x'
    [0x00, 0x00, 0x00, 0x00, 0x42, 0x24, 0x18, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'y'
    [0x00, 0x00, 0x00, 0x00, 0x42, 0x42, 0x24, 0x18, 0x08, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'z'
    [0x00, 0x00, 0x00, 0x00, 0x7E, 0x04, 0x08, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '{'
    [0x00, 0x00, 0x18, 0x30, 0x30, 0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '|'
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '}'
    [0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '~'
    [0x00, 0x00, 0x00, 0x00, 0x42, 0xA5, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];

/// Rows for `codepoint`, or the `?` rows when it is not printable ASCII
pub fn fallback_glyph(codepoint: u32) -> &'static GlyphRows {
    if (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&codepoint) {
        &FALLBACK_GLYPHS[(codepoint - FIRST_PRINTABLE) as usize]
    } else {
        &QUESTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_blank() {
        assert!(fallback_glyph(' ' as u32).iter().all(|&r| r == 0));
    }

    #[test]
    fn test_letter_a_rows() {
        let a = fallback_glyph('A' as u32);
        assert_eq!(&a[..8], &[0x00, 0x00, 0x18, 0x24, 0x24, 0x7E, 0x42, 0x42]);
        assert!(a[8..].iter().all(|&r| r == 0));
    }

    #[test]
    fn test_tilde_uses_leftmost_bit() {
        assert_eq!(fallback_glyph('~' as u32)[5], 0xA5);
    }

    #[test]
    fn test_undrawn_and_out_of_range_render_as_question_mark() {
        let q = fallback_glyph('?' as u32);
        assert_eq!(fallback_glyph('\\' as u32), q);
        assert_eq!(fallback_glyph('`' as u32), q);
        assert_eq!(fallback_glyph(0), q);
        assert_eq!(fallback_glyph(31), q);
        assert_eq!(fallback_glyph(127), q);
        assert_eq!(fallback_glyph(0x410), q);
    }

    #[test]
    fn test_every_other_printable_differs_from_question_mark() {
        let q = fallback_glyph('?' as u32);
        for c in FIRST_PRINTABLE..=LAST_PRINTABLE {
            if matches!(char::from_u32(c), Some('?' | '\\' | '`')) {
                continue;
            }
            assert_ne!(fallback_glyph(c), q, "codepoint {}", c);
        }
    }
}
