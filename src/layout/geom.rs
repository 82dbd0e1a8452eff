//! Cartesian/polar transforms and the clamping primitives segment clipping
//! is built from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Polar form: `t` is the angle in radians, `r` the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub t: f32,
    pub r: f32,
}

pub fn polar(point: Point) -> Polar {
    Polar {
        t: point.y.atan2(point.x),
        r: (point.x * point.x + point.y * point.y).sqrt(),
    }
}

pub fn cartesian(polar: Polar) -> Point {
    Point {
        x: polar.r * polar.t.cos(),
        y: polar.r * polar.t.sin(),
    }
}

/// Clamp `value` into the closed interval spanned by `min` and `max`.
/// Tolerates min > max (quadrant sign factors produce inverted bounds).
pub fn bounded_interval(value: f32, min: f32, max: f32) -> f32 {
    let low = min.min(max);
    let high = min.max(max);
    value.clamp(low, high)
}

/// Component-wise clamp of a point into the rectangle spanned by two corners.
pub fn bounded_box(point: Point, min: Point, max: Point) -> Point {
    Point {
        x: bounded_interval(point.x, min.x, max.x),
        y: bounded_interval(point.y, min.y, max.y),
    }
}

/// Clamp only the radius, leaving the angle untouched. This is the operation
/// that lets a blip move within its wedge but never change wedge.
pub fn bounded_ring(polar: Polar, r_min: f32, r_max: f32) -> Polar {
    Polar {
        t: polar.t,
        r: bounded_interval(polar.r, r_min, r_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn polar_cartesian_round_trip() {
        let p = Point::new(120.0, -85.0);
        let back = cartesian(polar(p));
        assert_close(p.x, back.x);
        assert_close(p.y, back.y);
    }

    #[test]
    fn polar_of_axis_points() {
        assert_close(polar(Point::new(10.0, 0.0)).t, 0.0);
        assert_close(polar(Point::new(0.0, 10.0)).t, std::f32::consts::FRAC_PI_2);
        assert_close(polar(Point::new(-10.0, 0.0)).t, std::f32::consts::PI);
    }

    #[test]
    fn bounded_interval_normalizes_inverted_bounds() {
        assert_eq!(bounded_interval(5.0, 10.0, -10.0), 5.0);
        assert_eq!(bounded_interval(-20.0, 10.0, -10.0), -10.0);
        assert_eq!(bounded_interval(20.0, 10.0, -10.0), 10.0);
    }

    #[test]
    fn bounded_box_clamps_each_axis() {
        let p = bounded_box(
            Point::new(500.0, -500.0),
            Point::new(15.0, 15.0),
            Point::new(400.0, 400.0),
        );
        assert_eq!(p, Point::new(400.0, 15.0));
    }

    #[test]
    fn bounded_ring_preserves_angle() {
        let p = polar(Point::new(300.0, 300.0));
        let clamped = bounded_ring(p, 45.0, 115.0);
        assert_eq!(clamped.t, p.t);
        assert_eq!(clamped.r, 115.0);
    }
}
