//! BDF (Glyph Bitmap Distribution Format) import
//!
//! Builds a wide table from the `STARTCHAR` / `ENCODING` / `BITMAP` /
//! `ENDCHAR` records of a BDF file. Only the leftmost 8 pixels of the
//! first 16 bitmap rows are kept, and only printable ASCII and the
//! Cyrillic block survive the import.

use super::{GlyphRows, WideGlyph, GLYPH_HEIGHT};
use crate::error::FontError;
use std::io::BufRead;
use std::ops::RangeInclusive;

const ASCII_RANGE: RangeInclusive<i64> = 32..=126;
const CYRILLIC_RANGE: RangeInclusive<i64> = 0x0400..=0x04FF;

#[derive(Default)]
struct PendingGlyph {
    codepoint: Option<i64>,
    in_bitmap: bool,
    rows: Vec<u8>,
}

/// Parse a BDF stream into a wide table, in file order.
///
/// A codepoint that appears twice keeps its first position and takes the
/// later bitmap. Characters without bitmap rows are skipped.
pub fn parse_bdf<R: BufRead>(reader: R) -> Result<Vec<WideGlyph>, FontError> {
    let mut table: Vec<WideGlyph> = Vec::new();
    let mut pending: Option<PendingGlyph> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        let keyword = line.split_whitespace().next().unwrap_or("");

        match keyword {
            "STARTCHAR" => pending = Some(PendingGlyph::default()),
            "ENCODING" => {
                let glyph = pending
                    .as_mut()
                    .ok_or_else(|| bdf_error(line_no, "ENCODING outside STARTCHAR"))?;
                let value = line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|v| v.parse::<i64>().ok())
                    .ok_or_else(|| bdf_error(line_no, "ENCODING needs an integer codepoint"))?;
                glyph.codepoint = Some(value);
            },
            "BITMAP" => {
                if let Some(glyph) = pending.as_mut() {
                    glyph.in_bitmap = true;
                    glyph.rows.clear();
                }
            },
            "ENDCHAR" => {
                let Some(glyph) = pending.take() else {
                    continue;
                };
                if glyph.rows.is_empty() {
                    continue;
                }
                let codepoint = glyph
                    .codepoint
                    .ok_or_else(|| bdf_error(line_no, "character has no ENCODING"))?;
                if !ASCII_RANGE.contains(&codepoint) && !CYRILLIC_RANGE.contains(&codepoint) {
                    continue;
                }

                let mut rows: GlyphRows = [0; GLYPH_HEIGHT];
                for (dst, src) in rows.iter_mut().zip(&glyph.rows) {
                    *dst = *src;
                }
                insert(&mut table, WideGlyph::new(codepoint as u32, rows));
            },
            _ => {
                if let Some(glyph) = pending.as_mut().filter(|g| g.in_bitmap) {
                    if let Some(bits) = leading_byte(line) {
                        glyph.rows.push(bits);
                    }
                }
            },
        }
    }

    log::debug!("parsed {} BDF glyphs", table.len());
    Ok(table)
}

/// First 8 pixels of a hex bitmap row, or None for non-hex lines
fn leading_byte(row: &str) -> Option<u8> {
    if row.is_empty() || !row.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let end = row.len().min(2);
    u8::from_str_radix(&row[..end], 16).ok()
}

fn insert(table: &mut Vec<WideGlyph>, glyph: WideGlyph) {
    match table.iter_mut().find(|g| g.codepoint == glyph.codepoint) {
        Some(existing) => existing.rows = glyph.rows,
        None => table.push(glyph),
    }
}

fn bdf_error(line: usize, reason: &str) -> FontError {
    FontError::Bdf {
        line,
        reason: reason.to_string(),
    }
}
