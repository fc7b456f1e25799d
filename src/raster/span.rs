//! Horizontal color interpolation
//!
//! Offset `o` of a span of length `n` gets `left + (right - left) * o / n`,
//! truncated per channel. `interpolate` evaluates four offsets at a time
//! with `f32x4`; every lane runs the same IEEE operations as the scalar
//! path, so the two agree bit for bit.

use crate::surface::{Rgb, Surface};
use wide::f32x4;

const LANES: i32 = 4;

#[inline]
fn channel(left: f32, diff: f32, t: f32) -> u8 {
    (left + diff * t) as u8
}

#[derive(Clone, Copy)]
struct Channels {
    left: [f32; 3],
    diff: [f32; 3],
}

impl Channels {
    fn new(left: Rgb, right: Rgb) -> Self {
        let l = [f32::from(left.r), f32::from(left.g), f32::from(left.b)];
        let r = [f32::from(right.r), f32::from(right.g), f32::from(right.b)];
        Self {
            left: l,
            diff: [r[0] - l[0], r[1] - l[1], r[2] - l[2]],
        }
    }

    #[inline]
    fn at(&self, t: f32) -> Rgb {
        Rgb::new(
            channel(self.left[0], self.diff[0], t),
            channel(self.left[1], self.diff[1], t),
            channel(self.left[2], self.diff[2], t),
        )
    }
}

/// Reference implementation: one division per offset in `0..span`
pub fn interpolate_scalar<F: FnMut(i32, Rgb)>(left: Rgb, right: Rgb, span: i32, mut emit: F) {
    let ch = Channels::new(left, right);
    let span_f = span as f32;
    for offset in 0..span {
        emit(offset, ch.at(offset as f32 / span_f));
    }
}

/// Same output as `interpolate_scalar`, four offsets per step when
/// `span >= 4`
pub fn interpolate<F: FnMut(i32, Rgb)>(left: Rgb, right: Rgb, span: i32, mut emit: F) {
    if span < LANES {
        interpolate_scalar(left, right, span, emit);
        return;
    }

    let ch = Channels::new(left, right);
    let span_v = f32x4::splat(span as f32);
    let lefts = ch.left.map(f32x4::splat);
    let diffs = ch.diff.map(f32x4::splat);

    let batched = span - span % LANES;
    let mut offset = 0;
    while offset < batched {
        let o = offset as f32;
        let t = f32x4::new([o, o + 1.0, o + 2.0, o + 3.0]) / span_v;
        let r = (lefts[0] + diffs[0] * t).to_array();
        let g = (lefts[1] + diffs[1] * t).to_array();
        let b = (lefts[2] + diffs[2] * t).to_array();
        for lane in 0..LANES as usize {
            emit(
                offset + lane as i32,
                Rgb::new(r[lane] as u8, g[lane] as u8, b[lane] as u8),
            );
        }
        offset += LANES;
    }

    let span_f = span as f32;
    for offset in batched..span {
        emit(offset, ch.at(offset as f32 / span_f));
    }
}

/// Pixel count between two columns, in i64 so far-apart columns do not
/// overflow; spans wider than `i32::MAX` are cut short on the right.
#[inline]
fn span_width(x_left: i32, x_right: i32) -> i32 {
    i32::try_from(i64::from(x_right) - i64::from(x_left)).unwrap_or(i32::MAX)
}

/// Paint `x_left..=x_right` on row `y`, blending from `left` to `right`.
/// The last pixel gets exactly `right`; a single-pixel span gets `left`.
pub fn fill_hspan<S: Surface + ?Sized>(
    surface: &mut S,
    y: i32,
    x_left: i32,
    x_right: i32,
    left: Rgb,
    right: Rgb,
) {
    let (x_left, x_right, left, right) = if x_left <= x_right {
        (x_left, x_right, left, right)
    } else {
        (x_right, x_left, right, left)
    };

    let width = span_width(x_left, x_right);
    if width == 0 {
        surface.set_color(left);
        surface.set_pixel(x_left, y);
        return;
    }

    interpolate(left, right, width, |offset, color| {
        surface.set_color(color);
        // offset < width <= x_right - x_left
        surface.set_pixel(x_left + offset, y);
    });
    surface.set_color(right);
    surface.set_pixel(x_right, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    fn collect_scalar(left: Rgb, right: Rgb, span: i32) -> Vec<(i32, Rgb)> {
        let mut out = Vec::new();
        interpolate_scalar(left, right, span, |o, c| out.push((o, c)));
        out
    }

    fn collect_fast(left: Rgb, right: Rgb, span: i32) -> Vec<(i32, Rgb)> {
        let mut out = Vec::new();
        interpolate(left, right, span, |o, c| out.push((o, c)));
        out
    }

    #[test]
    fn test_scalar_values() {
        let out = collect_scalar(Rgb::new(0, 0, 0), Rgb::new(100, 200, 40), 4);
        let colors: Vec<Rgb> = out.iter().map(|&(_, c)| c).collect();
        assert_eq!(
            colors,
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(25, 50, 10),
                Rgb::new(50, 100, 20),
                Rgb::new(75, 150, 30),
            ]
        );
    }

    #[test]
    fn test_descending_channel_truncates() {
        // 255 - 255 * (1/3) lands on either side of 170 depending on rounding
        let out = collect_scalar(Rgb::new(255, 0, 0), Rgb::BLACK, 3);
        assert_eq!(out[0].1.r, 255);
        assert!(out[1].1.r == 170 || out[1].1.r == 169);
    }

    #[test]
    fn test_empty_span_emits_nothing() {
        assert!(collect_fast(Rgb::WHITE, Rgb::BLACK, 0).is_empty());
        assert!(collect_fast(Rgb::WHITE, Rgb::BLACK, -3).is_empty());
    }

    #[test]
    fn test_fast_path_matches_scalar_small_spans() {
        let (l, r) = (Rgb::new(13, 250, 7), Rgb::new(240, 3, 129));
        for span in 0..40 {
            assert_eq!(collect_fast(l, r, span), collect_scalar(l, r, span), "span {}", span);
        }
    }

    quickcheck::quickcheck! {
        fn prop_fast_path_matches_scalar(l: (u8, u8, u8), r: (u8, u8, u8), span: u16) -> bool {
            let span = i32::from(span % 2048);
            let (l, r) = (Rgb::from(l), Rgb::from(r));
            collect_fast(l, r, span) == collect_scalar(l, r, span)
        }
    }

    #[test]
    fn test_fill_hspan_endpoints() {
        let mut surface = RecordingSurface::new();
        let (l, r) = (Rgb::new(10, 20, 30), Rgb::new(200, 100, 0));
        fill_hspan(&mut surface, 5, 2, 9, l, r);

        let xs: Vec<i32> = surface.pixels().iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, (2..=9).collect::<Vec<_>>());
        assert_eq!(surface.read_pixel(2, 5), l);
        assert_eq!(surface.read_pixel(9, 5), r);
    }

    #[test]
    fn test_fill_hspan_single_pixel_gets_left() {
        let mut surface = RecordingSurface::new();
        fill_hspan(&mut surface, 0, 4, 4, Rgb::WHITE, Rgb::BLACK);
        assert_eq!(surface.pixels(), vec![(4, 0)]);
        assert_eq!(surface.read_pixel(4, 0), Rgb::WHITE);
    }

    #[test]
    fn test_fill_hspan_reversed_is_normalized() {
        let mut surface = RecordingSurface::new();
        fill_hspan(&mut surface, 0, 6, 3, Rgb::WHITE, Rgb::BLACK);
        assert_eq!(surface.read_pixel(3, 0), Rgb::BLACK);
        assert_eq!(surface.read_pixel(6, 0), Rgb::WHITE);
        assert_eq!(surface.pixels().len(), 4);
    }

    #[test]
    fn test_span_width_of_far_columns() {
        assert_eq!(span_width(2, 9), 7);
        assert_eq!(span_width(-5, -5), 0);
        assert_eq!(span_width(-2_000_000_000, 2_000_000_000), i32::MAX);
        assert_eq!(span_width(i32::MIN, i32::MAX), i32::MAX);
        assert_eq!(span_width(i32::MIN, 0), i32::MAX);
        assert_eq!(span_width(-1, i32::MAX - 1), i32::MAX);
    }
}
