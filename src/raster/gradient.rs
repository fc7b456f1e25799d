//! Vertical multi-stop background gradient
//!
//! Rows are split into `stops - 1` bands. On top of the base color a row
//! can get per-row channel jitter (line noise), per-pixel brightness
//! jitter (pixel noise) and a black scanline on every even row.

use super::lerp_rgb;
use crate::surface::{Rgb, Surface};
use crate::util::Rng;

/// Line noise scale: (0..=254 - 128) * 0.05, about +-6 per channel
const LINE_NOISE_FACTOR: f32 = 0.05;
/// Pixel noise amplitude, same offset on all three channels
const PIXEL_NOISE: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientStyle {
    /// Top to bottom; only the first `num_stops` are used
    pub stops: [Rgb; 4],
    /// 2, 3 or 4; anything else behaves as 2
    pub num_stops: i32,
    pub scanlines: bool,
    pub line_noise: bool,
    /// Draws a fresh offset for every pixel, not one per row
    pub pixel_noise: bool,
    /// Noise generator seed
    pub seed: u64,
}

impl GradientStyle {
    /// Plain two-stop blend from `top` to `bottom`
    pub fn two_stop(top: Rgb, bottom: Rgb) -> Self {
        Self {
            stops: [top, bottom, bottom, bottom],
            num_stops: 2,
            ..Self::default()
        }
    }

    fn effective_stops(&self) -> i32 {
        if (2..=4).contains(&self.num_stops) {
            self.num_stops
        } else {
            2
        }
    }
}

impl Default for GradientStyle {
    fn default() -> Self {
        Self {
            stops: [Rgb::BLACK, Rgb::WHITE, Rgb::WHITE, Rgb::WHITE],
            num_stops: 2,
            scanlines: false,
            line_noise: false,
            pixel_noise: false,
            seed: 1,
        }
    }
}

/// `num / den`, or 0 when the band is empty
#[inline]
fn ratio(num: i32, den: i32) -> f32 {
    if den == 0 {
        0.0
    } else {
        num as f32 / den as f32
    }
}

/// Base color of row `y` before any noise
fn band_color(stops: &[Rgb; 4], num_stops: i32, y: i32, height: i32) -> Rgb {
    match num_stops {
        4 => {
            let section = height / 3;
            if y < section {
                lerp_rgb(stops[0], stops[1], ratio(y, section))
            } else if y < 2 * section {
                lerp_rgb(stops[1], stops[2], ratio(y - section, section))
            } else {
                let rest = height - 2 * section;
                lerp_rgb(stops[2], stops[3], ratio(y - 2 * section, rest))
            }
        },
        3 => {
            let half = height / 2;
            if y < half {
                lerp_rgb(stops[0], stops[1], ratio(y, half))
            } else {
                lerp_rgb(stops[1], stops[2], ratio(y - half, half))
            }
        },
        _ => lerp_rgb(stops[0], stops[1], ratio(y, height - 1)),
    }
}

fn line_jitter(rng: &mut Rng) -> i32 {
    ((rng.range_i32(0, 254) - 128) as f32 * LINE_NOISE_FACTOR) as i32
}

/// Fill the `width x height` area at the origin with `style`
pub fn gradient_vertical<S: Surface + ?Sized>(
    surface: &mut S,
    style: &GradientStyle,
    width: i32,
    height: i32,
) {
    if width <= 0 || height <= 0 {
        return;
    }

    let num_stops = style.effective_stops();
    let mut rng = Rng::new(style.seed);

    for y in 0..height {
        let base = band_color(&style.stops, num_stops, y, height);
        let (mut r, mut g, mut b) = (i32::from(base.r), i32::from(base.g), i32::from(base.b));

        if style.line_noise {
            r = (r + line_jitter(&mut rng)).clamp(0, 255);
            g = (g + line_jitter(&mut rng)).clamp(0, 255);
            b = (b + line_jitter(&mut rng)).clamp(0, 255);
        }

        if style.pixel_noise {
            for x in 0..width {
                let n = rng.range_i32(-PIXEL_NOISE, PIXEL_NOISE);
                surface.set_color(Rgb::clamped(r + n, g + n, b + n));
                surface.set_pixel(x, y);
            }
        } else {
            surface.set_color(Rgb::clamped(r, g, b));
            surface.draw_line(0, y, width - 1, y);
        }

        if style.scanlines && y % 2 == 0 {
            surface.set_color(Rgb::BLACK);
            surface.draw_line(0, y, width - 1, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PixelBuffer;
    use crate::surface::recording::RecordingSurface;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn render(style: &GradientStyle, w: i32, h: i32) -> PixelBuffer {
        let mut buf = PixelBuffer::with_size(w as u32, h as u32);
        gradient_vertical(&mut buf, style, w, h);
        buf
    }

    #[test]
    fn test_two_stop_endpoints() {
        let buf = render(&GradientStyle::two_stop(RED, BLUE), 4, 11);
        assert_eq!(buf.read_pixel(0, 0), RED);
        assert_eq!(buf.read_pixel(3, 10), BLUE);
        assert_eq!(buf.read_pixel(2, 5), Rgb::new(127, 0, 127));
    }

    #[test]
    fn test_out_of_range_stops_behave_as_two() {
        let base = GradientStyle {
            stops: [RED, BLUE, Rgb::WHITE, Rgb::new(0, 255, 0)],
            line_noise: true,
            seed: 99,
            ..GradientStyle::default()
        };
        let reference = render(&base, 3, 9);

        for n in [-1, 0, 1, 5, 100] {
            let style = GradientStyle {
                num_stops: n,
                ..base.clone()
            };
            assert_eq!(render(&style, 3, 9).as_bytes(), reference.as_bytes(), "stops {}", n);
        }
    }

    #[test]
    fn test_four_stops_pass_through_each_color() {
        let stops = [RED, BLUE, Rgb::WHITE, Rgb::new(0, 255, 0)];
        let style = GradientStyle {
            stops,
            num_stops: 4,
            ..GradientStyle::default()
        };
        let buf = render(&style, 1, 12);
        // section = 4: rows 0, 4 and 8 start the three bands
        assert_eq!(buf.read_pixel(0, 0), stops[0]);
        assert_eq!(buf.read_pixel(0, 4), stops[1]);
        assert_eq!(buf.read_pixel(0, 8), stops[2]);
    }

    #[test]
    fn test_three_stops_middle() {
        let style = GradientStyle {
            stops: [RED, Rgb::WHITE, BLUE, BLUE],
            num_stops: 3,
            ..GradientStyle::default()
        };
        let buf = render(&style, 1, 10);
        assert_eq!(buf.read_pixel(0, 0), RED);
        assert_eq!(buf.read_pixel(0, 5), Rgb::WHITE);
    }

    #[test]
    fn test_tiny_heights_do_not_divide_by_zero() {
        for stops in 2..=4 {
            for h in 1..4 {
                let style = GradientStyle {
                    stops: [RED, BLUE, RED, BLUE],
                    num_stops: stops,
                    ..GradientStyle::default()
                };
                let buf = render(&style, 2, h);
                // an empty band starts at its stop color instead of NaN
                let c = buf.read_pixel(0, 0);
                assert!(c == RED || c == BLUE, "stops {} height {}", stops, h);
            }
        }
    }

    #[test]
    fn test_scanlines_blank_even_rows() {
        let style = GradientStyle {
            scanlines: true,
            ..GradientStyle::two_stop(Rgb::WHITE, Rgb::WHITE)
        };
        let buf = render(&style, 5, 6);
        for y in 0..6 {
            let expected = if y % 2 == 0 { Rgb::BLACK } else { Rgb::WHITE };
            assert_eq!(buf.read_pixel(2, y), expected);
        }
    }

    #[test]
    fn test_line_noise_is_bounded_and_row_uniform() {
        let gray = Rgb::new(128, 128, 128);
        let style = GradientStyle {
            line_noise: true,
            seed: 7,
            ..GradientStyle::two_stop(gray, gray)
        };
        let buf = render(&style, 6, 40);
        for y in 0..40 {
            let c = buf.read_pixel(0, y);
            for ch in [c.r, c.g, c.b] {
                assert!((122..=134).contains(&ch));
            }
            assert!((1..6).all(|x| buf.read_pixel(x, y) == c));
        }
    }

    #[test]
    fn test_pixel_noise_same_offset_per_channel() {
        let gray = Rgb::new(100, 100, 100);
        let style = GradientStyle {
            pixel_noise: true,
            seed: 3,
            ..GradientStyle::two_stop(gray, gray)
        };
        let buf = render(&style, 16, 4);
        for y in 0..4 {
            for x in 0..16 {
                let c = buf.read_pixel(x, y);
                assert!(c.r == c.g && c.g == c.b);
                assert!((80..=120).contains(&c.r));
            }
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let style = GradientStyle {
            line_noise: true,
            pixel_noise: true,
            seed: 1234,
            ..GradientStyle::two_stop(RED, BLUE)
        };
        assert_eq!(render(&style, 8, 8).as_bytes(), render(&style, 8, 8).as_bytes());
    }

    #[test]
    fn test_empty_area_is_noop() {
        let mut surface = RecordingSurface::new();
        gradient_vertical(&mut surface, &GradientStyle::default(), 0, 10);
        gradient_vertical(&mut surface, &GradientStyle::default(), 10, -1);
        assert!(surface.calls.is_empty());
    }
}
