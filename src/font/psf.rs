//! PSF1 (PC Screen Font) loading
//!
//! Layout: `0x36 0x04 mode charsize`, then 256 glyphs of `charsize` bytes
//! each. One byte per row, bit 7 is the leftmost pixel. The mode byte
//! (512-glyph and unicode-table flags) is recorded but not interpreted:
//! only the first 256 glyphs are read.

use super::Glyph;
use crate::error::FontError;
use std::io::{self, Read};

pub const PSF1_MAGIC: [u8; 2] = [0x36, 0x04];
pub const PSF1_HEADER_LEN: usize = 4;
pub const PSF1_GLYPH_COUNT: usize = 256;

/// A parsed 256-glyph PSF1 font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFont {
    glyph_data: Vec<u8>,
    height: usize,
    mode: u8,
}

impl BitmapFont {
    /// Parse a PSF1 stream. Reads the header plus exactly `256 * height`
    /// glyph bytes; anything after that is left unread.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, FontError> {
        let mut header = [0u8; PSF1_HEADER_LEN];
        let got = read_full(&mut reader, &mut header)?;
        if got < PSF1_HEADER_LEN {
            return Err(FontError::Truncated {
                what: "header",
                expected: PSF1_HEADER_LEN,
                got,
            });
        }

        if header[..2] != PSF1_MAGIC {
            return Err(FontError::BadMagic(header[0], header[1]));
        }

        let mode = header[2];
        let height = header[3] as usize;
        if height == 0 {
            return Err(FontError::ZeroHeight);
        }

        let size = PSF1_GLYPH_COUNT * height;
        let mut glyph_data = Vec::new();
        glyph_data
            .try_reserve_exact(size)
            .map_err(|_| FontError::OutOfMemory(size))?;
        glyph_data.resize(size, 0);

        let got = read_full(&mut reader, &mut glyph_data)?;
        if got < size {
            return Err(FontError::Truncated {
                what: "glyph data",
                expected: size,
                got,
            });
        }

        Ok(Self {
            glyph_data,
            height,
            mode,
        })
    }

    /// Parse an in-memory PSF1 image
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        Self::read_from(bytes)
    }

    /// Rows per glyph
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw mode byte from the header
    #[inline]
    pub fn mode(&self) -> u8 {
        self.mode
    }

    /// Glyph for a byte value: bytes `[c * height, c * height + height)`
    #[inline]
    pub fn glyph(&self, c: u8) -> Glyph<'_> {
        let start = c as usize * self.height;
        Glyph::new(&self.glyph_data[start..start + self.height])
    }
}

/// Fill `buf` as far as the stream allows; returns the byte count read.
/// Short only at end of stream.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {},
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
