//! Scanline shape rasterization
//!
//! Stateless drawing routines over a `Surface`. Degenerate input (zero
//! extent, negative radius, empty rectangle) draws nothing and never
//! panics. Flat fills and outlines use the surface's current pen.

pub mod ellipse;
pub mod gradient;
pub mod shapes;
pub mod span;
pub mod triangle;

pub use ellipse::{arc, circle, ellipse, fill_circle, fill_ellipse};
pub use gradient::{gradient_vertical, GradientStyle};
pub use shapes::{fill_rectangle, pixel_gradient, rectangle};
pub use span::{fill_hspan, interpolate, interpolate_scalar};
pub use triangle::{fill_triangle, gradient_triangle, triangle, Vertex};

use crate::surface::Rgb;

/// Per-channel `a + (b - a) * t`, truncated
#[inline]
pub(crate) fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    #[inline]
    fn channel(a: u8, b: u8, t: f32) -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8
    }
    Rgb::new(channel(a.r, b.r, t), channel(a.g, b.g, t), channel(a.b, b.b, t))
}
