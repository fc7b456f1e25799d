use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::surface::{Rgb, Surface};

// ============================================================================
// Utility Functions
// ============================================================================

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], c: Rgb) {
    dest[0] = 255; // A
    dest[1] = c.b; // B
    dest[2] = c.g; // G
    dest[3] = c.r; // R
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8888 pixel buffer for software rendering.
///
/// Carries a pen color so it can stand in as a `Surface`: the glyph and
/// shape rasterizers set the pen, then plot points and lines.
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    pen: Rgb,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (640x480)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new pixel buffer with custom resolution, cleared to opaque black
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut buffer = Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
            pen: Rgb::WHITE,
        };
        buffer.clear(Rgb::BLACK);
        buffer
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current pen color
    #[inline]
    pub fn pen(&self) -> Rgb {
        self.pen
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Clear to a solid color
    pub fn clear(&mut self, c: Rgb) {
        for px in self.pixels.chunks_exact_mut(4) {
            write_pixel(px, c);
        }
    }

    /// Set a single pixel to an explicit color (bounds checked)
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, c: Rgb) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], c);
        }
    }

    /// Read a pixel from the buffer (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(Rgb::new(
                self.pixels[idx + 3], // R
                self.pixels[idx + 2], // G
                self.pixels[idx + 1], // B
            ))
        } else {
            None
        }
    }

    /// Draw a horizontal line (inclusive, either order)
    /// Computes starting index once, then increments by 4
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, c: Rgb) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let from = self.pixel_index(start as u32, y as u32);
        let to = self.pixel_index(end as u32, y as u32) + 4;
        for px in self.pixels[from..to].chunks_exact_mut(4) {
            write_pixel(px, c);
        }
    }

    /// Draw a line using Bresenham's algorithm with Cohen-Sutherland clipping
    ///
    /// Clips to screen bounds first; the clipped endpoints are always in range.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgb) {
        if y0 == y1 {
            self.hline(x0, x1, y0, c);
            return;
        }

        let Some((cx0, cy0, cx1, cy1)) = self.clip_line(x0, y0, x1, y1) else {
            return;
        };

        let dx = (cx1 - cx0).abs();
        let dy = -((cy1 - cy0).abs());
        let sx = if cx0 < cx1 { 1i32 } else { -1i32 };
        let sy = if cy0 < cy1 { 1i32 } else { -1i32 };
        let mut err = dx + dy;
        let mut x = cx0;
        let mut y = cy0;

        loop {
            self.put_pixel(x, y, c);
            if x == cx1 && y == cy1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Cohen-Sutherland line clipping algorithm
    /// Returns the clipped endpoints, or None if the line is fully outside
    ///
    /// Works in i64 (products in i128): endpoints may sit anywhere in the
    /// i32 range, so differences and intercepts would overflow in i32.
    fn clip_line(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i32, i32, i32, i32)> {
        const INSIDE: u8 = 0;
        const LEFT: u8 = 1;
        const RIGHT: u8 = 2;
        const BOTTOM: u8 = 4;
        const TOP: u8 = 8;
        // Converges in at most 4 iterations for valid input
        const MAX_ITERATIONS: u32 = 16;

        let w = i64::from(self.width);
        let h = i64::from(self.height);

        let outcode = |x: i64, y: i64| -> u8 {
            let mut code = INSIDE;
            if x < 0 {
                code |= LEFT;
            } else if x >= w {
                code |= RIGHT;
            }
            if y < 0 {
                code |= TOP;
            } else if y >= h {
                code |= BOTTOM;
            }
            code
        };

        // Intercept along the segment: from + delta * num / den
        let intercept = |from: i64, delta: i64, num: i64, den: i64| -> i64 {
            (i128::from(from) + i128::from(delta) * i128::from(num) / i128::from(den)) as i64
        };

        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
        let mut code0 = outcode(x0, y0);
        let mut code1 = outcode(x1, y1);

        for _ in 0..MAX_ITERATIONS {
            if (code0 | code1) == 0 {
                return Some((x0 as i32, y0 as i32, x1 as i32, y1 as i32));
            }
            if (code0 & code1) != 0 {
                return None;
            }

            let code_out = if code0 != 0 { code0 } else { code1 };
            let dy = y1 - y0;
            let dx = x1 - x0;

            let (x, y) = if (code_out & BOTTOM) != 0 {
                if dy == 0 {
                    return None;
                }
                (intercept(x0, dx, h - 1 - y0, dy), h - 1)
            } else if (code_out & TOP) != 0 {
                if dy == 0 {
                    return None;
                }
                (intercept(x0, dx, -y0, dy), 0)
            } else if (code_out & RIGHT) != 0 {
                if dx == 0 {
                    return None;
                }
                (w - 1, intercept(y0, dy, w - 1 - x0, dx))
            } else {
                // LEFT
                if dx == 0 {
                    return None;
                }
                (0, intercept(y0, dy, -x0, dx))
            };

            if code_out == code0 {
                x0 = x;
                y0 = y;
                code0 = outcode(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                code1 = outcode(x1, y1);
            }
        }

        None
    }

    /// Raw RGBA8888 bytes, for uploading to a streaming texture
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl Surface for PixelBuffer {
    #[inline]
    fn set_color(&mut self, color: Rgb) {
        self.pen = color;
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32) {
        self.put_pixel(x, y, self.pen);
    }

    #[inline]
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.line(x1, y1, x2, y2, self.pen);
    }

    #[inline]
    fn read_pixel(&self, x: i32, y: i32) -> Rgb {
        self.get_pixel(x, y).unwrap_or(Rgb::BLACK)
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
