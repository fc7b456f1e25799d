//! Triangle outline, flat fill and three-color gradient fill
//!
//! Both fills walk the same scanlines: vertices are sorted by y, the long
//! edge runs top to bottom, and the short edges split the triangle at the
//! middle vertex. Every row from the top vertex to the bottom one is
//! produced exactly once.

use super::lerp_rgb;
use super::span::fill_hspan;
use crate::surface::{Rgb, Surface};

/// Triangle corner for gradient fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl Vertex {
    pub const fn new(x: i32, y: i32, color: Rgb) -> Self {
        Self { x, y, color }
    }
}

#[inline]
fn delta(from: i32, to: i32) -> f32 {
    (i64::from(to) - i64::from(from)) as f32
}

/// One triangle side, evaluated per scanline
struct Edge {
    from: Vertex,
    to: Vertex,
    slope: f32,
    height: f32,
}

impl Edge {
    fn new(from: Vertex, to: Vertex) -> Self {
        let height = delta(from.y, to.y);
        Self {
            from,
            to,
            slope: delta(from.x, to.x) / height,
            height,
        }
    }

    /// Truncated x and interpolated color where this edge crosses row `y`
    #[inline]
    fn at(&self, y: i32) -> (i32, Rgb) {
        let dy = delta(self.from.y, y);
        let x = (self.from.x as f32 + dy * self.slope) as i32;
        (x, lerp_rgb(self.from.color, self.to.color, dy / self.height))
    }
}

/// Call `row(y, left, right)` once per scanline, `left.0 <= right.0`
fn scanlines<F>(mut vertices: [Vertex; 3], mut row: F)
where
    F: FnMut(i32, (i32, Rgb), (i32, Rgb)),
{
    vertices.sort_by_key(|v| v.y);
    let [top, mid, bottom] = vertices;
    if top.y == bottom.y {
        return;
    }

    let long = Edge::new(top, bottom);
    let mut emit = |y: i32, short: &Edge| {
        let a = short.at(y);
        let b = long.at(y);
        if a.0 <= b.0 {
            row(y, a, b);
        } else {
            row(y, b, a);
        }
    };

    if mid.y > top.y {
        let upper = Edge::new(top, mid);
        // the middle row belongs to the lower half when there is one
        let last = if bottom.y > mid.y { mid.y - 1 } else { mid.y };
        for y in top.y..=last {
            emit(y, &upper);
        }
    }

    if bottom.y > mid.y {
        let lower = Edge::new(mid, bottom);
        for y in mid.y..=bottom.y {
            emit(y, &lower);
        }
    }
}

/// Outline through the three corners, in the order given
pub fn triangle<S: Surface + ?Sized>(
    surface: &mut S,
    (x1, y1): (i32, i32),
    (x2, y2): (i32, i32),
    (x3, y3): (i32, i32),
) {
    surface.draw_line(x1, y1, x2, y2);
    surface.draw_line(x2, y2, x3, y3);
    surface.draw_line(x3, y3, x1, y1);
}

/// Solid fill with the current pen, one horizontal line per row
pub fn fill_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    (x1, y1): (i32, i32),
    (x2, y2): (i32, i32),
    (x3, y3): (i32, i32),
) {
    let vertices = [
        Vertex::new(x1, y1, Rgb::BLACK),
        Vertex::new(x2, y2, Rgb::BLACK),
        Vertex::new(x3, y3, Rgb::BLACK),
    ];
    scanlines(vertices, |y, (xl, _), (xr, _)| surface.draw_line(xl, y, xr, y));
}

/// Fill blending the three corner colors: vertically along the edges,
/// then horizontally across each row
pub fn gradient_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    v1: Vertex,
    v2: Vertex,
    v3: Vertex,
) {
    scanlines([v1, v2, v3], |y, (xl, cl), (xr, cr)| {
        fill_hspan(surface, y, xl, xr, cl, cr);
    });
}
