use super::decode::decode;
use crate::font::{FontContext, Glyph, GLYPH_WIDTH};
use crate::surface::Surface;

/// Plot the set bits of `glyph` with the surface's current pen, top-left
/// corner at (x, y)
pub fn draw_glyph<S: Surface + ?Sized>(surface: &mut S, glyph: Glyph<'_>, x: i32, y: i32) {
    for (row, &bits) in glyph.rows().iter().enumerate() {
        if bits == 0 {
            continue;
        }
        // rows and columns past i32::MAX are dropped
        let Some(py) = i32::try_from(row).ok().and_then(|r| y.checked_add(r)) else {
            break;
        };
        for col in 0..GLYPH_WIDTH {
            if bits & (0x80 >> col) != 0 {
                if let Some(px) = x.checked_add(col) {
                    surface.set_pixel(px, py);
                }
            }
        }
    }
}

/// Draw `text` left to right on one line with a fixed 8-pixel advance.
/// Returns the x just past the last glyph, saturating at `i32::MAX`.
pub fn draw_string<S, T>(surface: &mut S, ctx: &FontContext, x: i32, y: i32, text: &T) -> i32
where
    S: Surface + ?Sized,
    T: AsRef<[u8]> + ?Sized,
{
    let mut cur_x = x;
    for codepoint in decode(text) {
        draw_glyph(surface, ctx.resolve(codepoint), cur_x, y);
        cur_x = cur_x.saturating_add(GLYPH_WIDTH);
    }
    cur_x
}

/// Pixel width of `text` as `draw_string` would lay it out
pub fn text_width<T: AsRef<[u8]> + ?Sized>(text: &T) -> i32 {
    i32::try_from(decode(text).count())
        .unwrap_or(i32::MAX)
        .saturating_mul(GLYPH_WIDTH)
}

/// Whether pixel (`px`, `py`) inside the cell of the `char_index`th
/// codepoint of `text` is lit. Coordinates are relative to that cell.
pub fn is_glyph_pixel<T: AsRef<[u8]> + ?Sized>(
    ctx: &FontContext,
    text: &T,
    char_index: usize,
    px: i32,
    py: i32,
) -> bool {
    decode(text)
        .nth(char_index)
        .is_some_and(|cp| ctx.resolve(cp).is_set(px, py))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fallback::fallback_glyph;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn test_draw_glyph_plots_set_bits() {
        let rows = [0b1000_0001u8, 0b0001_0000];
        let mut surface = RecordingSurface::new();
        draw_glyph(&mut surface, Glyph::new(&rows), 10, 20);
        assert_eq!(surface.pixels(), vec![(10, 20), (17, 20), (13, 21)]);
    }

    #[test]
    fn test_draw_string_advances_by_glyph_width() {
        let ctx = FontContext::without_wide_table();
        let mut surface = RecordingSurface::new();
        let end = draw_string(&mut surface, &ctx, 5, 0, "AB");
        assert_eq!(end, 5 + 16);

        let a_bits: usize = fallback_glyph(u32::from(b'A'))
            .iter()
            .map(|r| r.count_ones() as usize)
            .sum();
        let pixels = surface.pixels();
        assert!(pixels[..a_bits].iter().all(|&(x, _)| (5..13).contains(&x)));
        assert!(pixels[a_bits..].iter().all(|&(x, _)| (13..21).contains(&x)));
    }

    #[test]
    fn test_empty_string_draws_nothing() {
        let ctx = FontContext::new();
        let mut surface = RecordingSurface::new();
        assert_eq!(draw_string(&mut surface, &ctx, 3, 3, ""), 3);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_text_width_counts_codepoints() {
        assert_eq!(text_width("abc"), 24);
        assert_eq!(text_width("Привет"), 48);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_is_glyph_pixel() {
        let ctx = FontContext::without_wide_table();
        let glyph = fallback_glyph(u32::from(b'A'));
        for py in 0..16 {
            for px in 0..8 {
                let expected = glyph[py as usize] & (0x80 >> px) != 0;
                assert_eq!(is_glyph_pixel(&ctx, "xA", 1, px, py), expected);
            }
        }
    }

    #[test]
    fn test_is_glyph_pixel_out_of_range() {
        let ctx = FontContext::without_wide_table();
        assert!(!is_glyph_pixel(&ctx, "A", 1, 0, 0));
        assert!(!is_glyph_pixel(&ctx, "A", 0, 8, 0));
        assert!(!is_glyph_pixel(&ctx, "A", 0, 0, 16));
        assert!(!is_glyph_pixel(&ctx, "A", 0, -1, 0));
    }

    #[test]
    fn test_glyphs_at_integer_limits() {
        let ctx = FontContext::without_wide_table();
        let mut surface = RecordingSurface::new();
        let end = draw_string(&mut surface, &ctx, i32::MAX - 4, i32::MAX - 2, "HH");
        assert_eq!(end, i32::MAX);
        // only the first three rows and five columns of 'H' fit
        assert!(surface
            .pixels()
            .iter()
            .all(|&(x, y)| x >= i32::MAX - 4 && y >= i32::MAX - 2));
    }
}
