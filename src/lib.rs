//! Software bitmap-font and scanline rasterization
//!
//! Text goes through [`text::decode`] into codepoints, which a
//! [`FontContext`] resolves to 8-pixel-wide bitmaps (loaded PSF1 font,
//! wide table, built-in ASCII fallback). Glyphs and shapes are drawn onto
//! anything implementing [`Surface`]; [`PixelBuffer`] is the bundled
//! software target, and the `window` feature puts it on screen with SDL2.

pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod raster;
pub mod surface;
pub mod text;
pub mod util;

pub use display::PixelBuffer;
pub use error::{ConfigError, FontError};
#[cfg(feature = "window")]
pub use error::DisplayError;
pub use font::{BitmapFont, FontContext, Glyph, WideGlyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use surface::{Rgb, Surface};
pub use text::{draw_string, is_glyph_pixel, text_width};
