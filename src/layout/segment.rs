//! Segment resolution: the annulus wedge a (quadrant, ring) pair occupies,
//! with the clipping that keeps a blip inside it for the life of the layout.

use std::f32::consts::PI;

use super::geom::{Point, Polar, bounded_box, bounded_ring, cartesian, polar};
use super::rng::SeededRng;

/// Angular range (in multiples of pi) and cartesian sign pair for each of the
/// four fixed quadrants. Index 0 is the +x/+y quadrant; the rest follow the
/// original radar's counter-clockwise numbering.
pub const QUADRANT_GEOMS: [(f32, f32, f32, f32); 4] = [
    (0.0, 0.5, 1.0, 1.0),
    (0.5, 1.0, -1.0, 1.0),
    (-1.0, -0.5, -1.0, -1.0),
    (-0.5, 0.0, 1.0, -1.0),
];

/// Outer radius of each ring, innermost first.
pub const RING_RADII: [f32; 4] = [130.0, 220.0, 310.0, 400.0];

/// Inner bound of ring 0; keeps blips off the radar's center point.
pub const RING_HOLE_RADIUS: f32 = 30.0;

/// Inset on all sides of a segment, keeping blips clear of grid lines.
pub const SEGMENT_PADDING: f32 = 15.0;

/// The padded annulus wedge for one (quadrant, ring) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub quadrant: usize,
    pub ring: usize,
    pub polar_min: Polar,
    pub polar_max: Polar,
    pub cartesian_min: Point,
    pub cartesian_max: Point,
}

/// Clamp a quadrant/ring index into [0, 3].
pub fn clamp_index(index: usize) -> usize {
    index.min(3)
}

impl Segment {
    /// Resolve the segment for a (quadrant, ring) pair. Out-of-range indices
    /// are clamped to the nearest valid value and reported on the warn
    /// channel; malformed external data degrades instead of crashing.
    pub fn new(quadrant: usize, ring: usize) -> Self {
        let q = clamp_index(quadrant);
        if q != quadrant {
            tracing::warn!(quadrant, clamped = q, "quadrant index out of range");
        }
        let r = clamp_index(ring);
        if r != ring {
            tracing::warn!(ring, clamped = r, "ring index out of range");
        }

        let (radial_min, radial_max, factor_x, factor_y) = QUADRANT_GEOMS[q];
        let inner = if r == 0 {
            RING_HOLE_RADIUS
        } else {
            RING_RADII[r - 1]
        };
        Self {
            quadrant: q,
            ring: r,
            polar_min: Polar {
                t: radial_min * PI,
                r: inner,
            },
            polar_max: Polar {
                t: radial_max * PI,
                r: RING_RADII[r],
            },
            cartesian_min: Point {
                x: SEGMENT_PADDING * factor_x,
                y: SEGMENT_PADDING * factor_y,
            },
            cartesian_max: Point {
                x: RING_RADII[3] * factor_x,
                y: RING_RADII[3] * factor_y,
            },
        }
    }

    /// Clip a point back into the segment. Box-clamp in cartesian space,
    /// then clamp the radius into the padded annulus in polar space; the
    /// angle is never altered by the ring clamp, so a clipped point cannot
    /// change wedge. Both coordinates of the result are recomputed together.
    pub fn clip(&self, point: Point) -> Point {
        let boxed = bounded_box(point, self.cartesian_min, self.cartesian_max);
        let ringed = bounded_ring(
            polar(boxed),
            self.polar_min.r + SEGMENT_PADDING,
            self.polar_max.r - SEGMENT_PADDING,
        );
        cartesian(ringed)
    }

    /// A fresh random point inside the segment: uniform in angle,
    /// center-weighted in radius so blips cluster away from ring edges.
    pub fn random_point(&self, rng: &mut SeededRng) -> Point {
        cartesian(Polar {
            t: rng.random_between(self.polar_min.t, self.polar_max.t),
            r: rng.normal_between(self.polar_min.r, self.polar_max.r),
        })
    }

    /// True when the point lies inside the padded wedge (small tolerance for
    /// float round-trips through polar form).
    pub fn contains(&self, point: Point) -> bool {
        const EPS: f32 = 1e-3;
        let p = polar(point);
        p.r >= self.polar_min.r + SEGMENT_PADDING - EPS
            && p.r <= self.polar_max.r - SEGMENT_PADDING + EPS
            && p.t >= self.polar_min.t - EPS
            && p.t <= self.polar_max.t + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rng::{LAYOUT_SEED, SeededRng};

    #[test]
    fn ring_bounds_chain() {
        let s0 = Segment::new(0, 0);
        assert_eq!(s0.polar_min.r, RING_HOLE_RADIUS);
        assert_eq!(s0.polar_max.r, 130.0);

        let s2 = Segment::new(0, 2);
        assert_eq!(s2.polar_min.r, 220.0);
        assert_eq!(s2.polar_max.r, 310.0);
    }

    #[test]
    fn out_of_range_ring_clamps_to_outermost() {
        assert_eq!(Segment::new(1, 7), Segment::new(1, 3));
        assert_eq!(Segment::new(9, 0), Segment::new(3, 0));
    }

    #[test]
    fn clip_pulls_far_point_into_padded_annulus() {
        let segment = Segment::new(0, 1);
        let clipped = segment.clip(Point::new(1000.0, 1000.0));
        let p = polar(clipped);
        assert!(p.r <= segment.polar_max.r - SEGMENT_PADDING + 1e-3);
        assert!(segment.contains(clipped));
    }

    #[test]
    fn clip_preserves_wedge_for_every_quadrant() {
        for quadrant in 0..4 {
            for ring in 0..4 {
                let segment = Segment::new(quadrant, ring);
                let mut rng = SeededRng::new(LAYOUT_SEED + quadrant as u64);
                for _ in 0..50 {
                    let seeded = segment.random_point(&mut rng);
                    let clipped = segment.clip(seeded);
                    assert!(
                        segment.contains(clipped),
                        "q{quadrant} r{ring}: {clipped:?} escaped its wedge"
                    );
                }
            }
        }
    }

    #[test]
    fn clip_is_idempotent() {
        let segment = Segment::new(2, 3);
        let once = segment.clip(Point::new(-500.0, -500.0));
        let twice = segment.clip(once);
        assert!((once.x - twice.x).abs() < 1e-3);
        assert!((once.y - twice.y).abs() < 1e-3);
    }

    #[test]
    fn random_points_land_in_radial_band() {
        let segment = Segment::new(3, 2);
        let mut rng = SeededRng::default();
        for _ in 0..200 {
            let p = polar(segment.random_point(&mut rng));
            assert!(p.r >= segment.polar_min.r - 1e-3);
            assert!(p.r <= segment.polar_max.r + 1e-3);
            assert!(p.t >= segment.polar_min.t - 1e-3);
            assert!(p.t <= segment.polar_max.t + 1e-3);
        }
    }
}
