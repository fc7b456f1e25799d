use std::io;
use thiserror::Error;

/// Errors from loading font files. A failed load never touches the
/// previously active font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("bad PSF1 magic {0:#04x} {1:#04x} (expected 0x36 0x04)")]
    BadMagic(u8, u8),

    #[error("truncated font: expected {expected} bytes of {what}, got {got}")]
    Truncated {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("font declares zero rows per glyph")]
    ZeroHeight,

    #[error("cannot allocate {0} bytes for glyph data")]
    OutOfMemory(usize),

    #[error("BDF line {line}: {reason}")]
    Bdf { line: usize, reason: String },
}

/// Errors from reading or writing the demo configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from opening the SDL window or presenting a frame
#[cfg(feature = "window")]
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("cannot create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error("cannot create renderer: {0}")]
    Renderer(#[from] sdl2::IntegerOrSdlError),

    #[error("cannot create texture: {0}")]
    Texture(#[from] sdl2::render::TextureValueError),

    #[error("cannot upload frame: {0}")]
    Upload(#[from] sdl2::render::UpdateTextureError),

    #[error("frame is {frame:?}, texture is {texture:?}")]
    SizeMismatch { frame: (u32, u32), texture: (u32, u32) },
}

/// SDL reports most failures as plain strings
#[cfg(feature = "window")]
impl From<String> for DisplayError {
    fn from(e: String) -> Self {
        Self::Sdl(e)
    }
}
