//! Rectangles and single colored pixels
//!
//! Rectangles take a near corner (x1, y1) and an exclusive far corner
//! (x2, y2), so the size is `(x2 - x1) x (y2 - y1)`.

use crate::surface::{Rgb, Surface};

pub fn rectangle<S: Surface + ?Sized>(surface: &mut S, x1: i32, y1: i32, x2: i32, y2: i32) {
    if x2 <= x1 || y2 <= y1 {
        return;
    }
    let (right, bottom) = (x2 - 1, y2 - 1);
    surface.draw_line(x1, y1, right, y1);
    surface.draw_line(x1, bottom, right, bottom);
    surface.draw_line(x1, y1, x1, bottom);
    surface.draw_line(right, y1, right, bottom);
}

pub fn fill_rectangle<S: Surface + ?Sized>(surface: &mut S, x1: i32, y1: i32, x2: i32, y2: i32) {
    if x2 <= x1 || y2 <= y1 {
        return;
    }
    for y in y1..y2 {
        surface.draw_line(x1, y, x2 - 1, y);
    }
}

/// Plot one pixel in `color`; the pen keeps that color afterwards
#[inline]
pub fn pixel_gradient<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, color: Rgb) {
    surface.set_color(color);
    surface.set_pixel(x, y);
}
