//! Lenient UTF-8 decoding
//!
//! Only one- and two-byte sequences are understood, so U+0000..=U+07FF is
//! the reachable range. Nothing here fails: bytes that don't start a
//! sequence we handle become `?`.

/// Substitute for undecodable input
pub const REPLACEMENT: u32 = b'?' as u32;

/// Iterator over the codepoints of a byte string. Cloning restarts from
/// the clone's position.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// Decode `text` lazily
pub fn decode<T: AsRef<[u8]> + ?Sized>(text: &T) -> Codepoints<'_> {
    Codepoints {
        bytes: text.as_ref(),
        pos: 0,
    }
}

impl Iterator for Codepoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let rest = &self.bytes[self.pos..];
        let (codepoint, consumed) = match *rest {
            [] => return None,
            [b0, ..] if b0 & 0x80 == 0 => (u32::from(b0), 1),
            // the continuation byte is masked, not validated
            [b0, b1, ..] if b0 & 0xE0 == 0xC0 => {
                ((u32::from(b0 & 0x1F) << 6) | u32::from(b1 & 0x3F), 2)
            },
            _ => (REPLACEMENT, 1),
        };
        self.pos += consumed;
        Some(codepoint)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl std::iter::FusedIterator for Codepoints<'_> {}
