//! UTF-8 text to glyph pixels

pub mod decode;
mod draw;

pub use decode::{decode, Codepoints};
pub use draw::{draw_glyph, draw_string, is_glyph_pixel, text_width};
