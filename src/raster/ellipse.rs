//! Circles, ellipses and arcs
//!
//! Outlines are 100-segment polylines with truncated vertex coordinates.
//! Fills draw two horizontal lines (above and below the center) per
//! vertical offset. A negative radius draws nothing.

use crate::surface::Surface;
use std::f32::consts::TAU;

/// Segment count of every outline
pub const SEGMENTS: u32 = 100;

/// Connect `SEGMENTS + 1` points of `point(angle)` for angles from
/// `start` in steps of `step`
fn polyline<S, F>(surface: &mut S, start: f32, step: f32, point: F)
where
    S: Surface + ?Sized,
    F: Fn(f32) -> (f32, f32),
{
    let (mut prev_x, mut prev_y) = point(start);
    for i in 1..=SEGMENTS {
        let (x, y) = point(start + i as f32 * step);
        surface.draw_line(prev_x as i32, prev_y as i32, x as i32, y as i32);
        prev_x = x;
        prev_y = y;
    }
}

pub fn circle<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, radius: i32) {
    ellipse(surface, x, y, radius, radius);
}

pub fn ellipse<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, rx: i32, ry: i32) {
    if rx < 0 || ry < 0 {
        return;
    }
    let (cx, cy) = (x as f32, y as f32);
    let (rx, ry) = (rx as f32, ry as f32);
    polyline(surface, 0.0, TAU / SEGMENTS as f32, |a| {
        (cx + rx * a.cos(), cy + ry * a.sin())
    });
}

/// Circle outline from `start` to `end` radians. Angles grow clockwise on
/// screen since y points down.
pub fn arc<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, radius: i32, start: f32, end: f32) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (x as f32, y as f32, radius as f32);
    polyline(surface, start, (end - start) / SEGMENTS as f32, |a| {
        (cx + r * a.cos(), cy + r * a.sin())
    });
}

pub fn fill_circle<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, radius: i32) {
    if radius < 0 {
        return;
    }
    if radius == 0 {
        surface.set_pixel(x, y);
        return;
    }

    let r = radius as f32;
    for i in 0..=radius {
        let half = (r * (i as f32 / r).acos().sin()) as i32;
        let (left, right) = (x.saturating_sub(half), x.saturating_add(half));
        surface.draw_line(left, y.saturating_add(i), right, y.saturating_add(i));
        surface.draw_line(left, y.saturating_sub(i), right, y.saturating_sub(i));
    }
}

pub fn fill_ellipse<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, rx: i32, ry: i32) {
    if rx < 0 || ry < 0 {
        return;
    }
    if ry == 0 {
        surface.draw_line(x.saturating_sub(rx), y, x.saturating_add(rx), y);
        return;
    }

    let (rx_f, ry_f) = (rx as f32, ry as f32);
    for i in 0..=ry {
        let v = i as f32 / ry_f;
        let half = (rx_f * (1.0 - v * v).sqrt()) as i32;
        let (left, right) = (x.saturating_sub(half), x.saturating_add(half));
        surface.draw_line(left, y.saturating_add(i), right, y.saturating_add(i));
        surface.draw_line(left, y.saturating_sub(i), right, y.saturating_sub(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn test_circle_outline_segments() {
        let mut surface = RecordingSurface::new();
        circle(&mut surface, 50, 50, 10);
        let lines = surface.lines();
        assert_eq!(lines.len(), SEGMENTS as usize);
        assert_eq!((lines[0].0, lines[0].1), (60, 50));
        for &(x1, y1, x2, y2) in &lines {
            for (px, py) in [(x1, y1), (x2, y2)] {
                assert!((40..=60).contains(&px) && (40..=60).contains(&py));
            }
        }
        // consecutive segments share endpoints
        for pair in lines.windows(2) {
            assert_eq!((pair[0].2, pair[0].3), (pair[1].0, pair[1].1));
        }
    }

    #[test]
    fn test_ellipse_extents() {
        let mut surface = RecordingSurface::new();
        ellipse(&mut surface, 0, 0, 20, 5);
        for (x1, y1, _, _) in surface.lines() {
            assert!(x1.abs() <= 20 && y1.abs() <= 5);
        }
    }

    #[test]
    fn test_fill_circle_rows() {
        let mut surface = RecordingSurface::new();
        fill_circle(&mut surface, 10, 10, 4);
        let lines = surface.lines();
        assert_eq!(lines.len(), 2 * 5);
        // widest at the center, a single point at the poles
        assert_eq!(lines[0], (6, 10, 14, 10));
        assert_eq!(lines[8], (10, 14, 10, 14));
        assert_eq!(lines[9], (10, 6, 10, 6));
    }

    #[test]
    fn test_fill_circle_degenerate() {
        let mut surface = RecordingSurface::new();
        fill_circle(&mut surface, 3, 4, 0);
        assert_eq!(surface.pixels(), vec![(3, 4)]);
        assert!(surface.lines().is_empty());

        let mut surface = RecordingSurface::new();
        fill_circle(&mut surface, 3, 4, -2);
        circle(&mut surface, 3, 4, -2);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_fill_ellipse_rows() {
        let mut surface = RecordingSurface::new();
        fill_ellipse(&mut surface, 0, 0, 8, 3);
        let lines = surface.lines();
        assert_eq!(lines.len(), 2 * 4);
        assert_eq!(lines[0], (-8, 0, 8, 0));
        assert_eq!(lines[6], (0, 3, 0, 3));
    }

    #[test]
    fn test_fill_ellipse_zero_height() {
        let mut surface = RecordingSurface::new();
        fill_ellipse(&mut surface, 5, 5, 3, 0);
        assert_eq!(surface.lines(), vec![(2, 5, 8, 5)]);

        let mut surface = RecordingSurface::new();
        fill_ellipse(&mut surface, 5, 5, -1, 4);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_arc_starts_at_start_angle() {
        let mut surface = RecordingSurface::new();
        arc(&mut surface, 0, 0, 10, 0.0, std::f32::consts::FRAC_PI_2);
        let lines = surface.lines();
        assert_eq!(lines.len(), SEGMENTS as usize);
        assert_eq!((lines[0].0, lines[0].1), (10, 0));
        let last = lines[lines.len() - 1];
        assert!(last.2.abs() <= 1 && (9..=10).contains(&last.3));
        assert!(lines.iter().all(|l| l.0 >= 0 && l.1 >= 0));
    }

    #[test]
    fn test_fills_near_integer_limits() {
        let mut surface = RecordingSurface::new();
        fill_ellipse(&mut surface, i32::MAX - 1, 0, 3, 0);
        assert_eq!(surface.lines(), vec![(i32::MAX - 4, 0, i32::MAX, 0)]);

        let mut surface = RecordingSurface::new();
        fill_circle(&mut surface, i32::MIN, i32::MAX, 2);
        for (x1, _, x2, _) in surface.lines() {
            assert_eq!(x1, i32::MIN);
            assert!(x2 >= i32::MIN && x2 <= i32::MIN + 2);
        }
        assert!(surface.lines().iter().any(|l| l.1 == i32::MAX && l.3 == i32::MAX));
    }
}
