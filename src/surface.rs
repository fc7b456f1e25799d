//! Drawing target abstraction
//!
//! Everything in the font and raster modules talks to a `Surface`: a pen
//! color plus point, line and read-back primitives. `PixelBuffer` is the
//! software implementation; tests use a recording surface.

/// 8-bit RGB color triple. No alpha: blending is the surface's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from signed channel values, clamping each to [0, 255]
    #[inline]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
        )
    }

    /// Pack as 0xRRGGBB
    #[inline]
    pub fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from 0xRRGGBB (upper byte ignored)
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Pixel sink used by the glyph and shape rasterizers.
///
/// `set_color` changes the pen used by the following `set_pixel` and
/// `draw_line` calls. Lines include both endpoints. Out-of-bounds
/// coordinates are the surface's problem and must not panic.
pub trait Surface {
    fn set_color(&mut self, color: Rgb);

    fn set_pixel(&mut self, x: i32, y: i32);

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Color at (x, y); black outside the surface
    fn read_pixel(&self, x: i32, y: i32) -> Rgb;
}

#[cfg(test)]
pub(crate) mod recording {
    //! Surface that records calls instead of drawing, for asserting on
    //! exactly what a rasterizer asked for.

    use super::{Rgb, Surface};
    use std::collections::HashMap;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Call {
        Color(Rgb),
        Pixel(i32, i32),
        Line(i32, i32, i32, i32),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<Call>,
        pen: Rgb,
        plotted: HashMap<(i32, i32), Rgb>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pixels(&self) -> Vec<(i32, i32)> {
            self.calls
                .iter()
                .filter_map(|c| match *c {
                    Call::Pixel(x, y) => Some((x, y)),
                    _ => None,
                })
                .collect()
        }

        pub fn lines(&self) -> Vec<(i32, i32, i32, i32)> {
            self.calls
                .iter()
                .filter_map(|c| match *c {
                    Call::Line(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn set_color(&mut self, color: Rgb) {
            self.pen = color;
            self.calls.push(Call::Color(color));
        }

        fn set_pixel(&mut self, x: i32, y: i32) {
            self.plotted.insert((x, y), self.pen);
            self.calls.push(Call::Pixel(x, y));
        }

        fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
            self.calls.push(Call::Line(x1, y1, x2, y2));
        }

        fn read_pixel(&self, x: i32, y: i32) -> Rgb {
            self.plotted.get(&(x, y)).copied().unwrap_or(Rgb::BLACK)
        }
    }
}
