//! Collision relaxation: an owned, fixed-budget force loop that nudges
//! overlapping blips apart while re-clipping every blip into its segment
//! after every tick.

use crate::config::CollisionConfig;

use super::geom::Point;
use super::rng::SeededRng;
use super::types::BlipLayout;

/// Run the relaxation to convergence or until the tick budget is exhausted.
/// Returns the number of ticks executed. Persistent overlap after the budget
/// is not an error; this pass is cosmetic.
pub(super) fn relax(
    blips: &mut [BlipLayout],
    collision: &CollisionConfig,
    rng: &mut SeededRng,
) -> usize {
    if blips.len() < 2 {
        return 0;
    }

    let mut velocities = vec![Point::default(); blips.len()];
    let retained = 1.0 - collision.velocity_decay;
    let mut alpha = 1.0_f32;
    let mut ticks = 0;

    while ticks < collision.max_ticks && alpha >= collision.alpha_min {
        alpha *= 1.0 - collision.alpha_decay;
        ticks += 1;

        apply_collisions(blips, &mut velocities, collision, rng);

        for (blip, velocity) in blips.iter_mut().zip(velocities.iter_mut()) {
            velocity.x *= retained;
            velocity.y *= retained;
            let moved = Point::new(blip.x + velocity.x, blip.y + velocity.y);
            // Containment is enforced per tick, not just at the end.
            let clipped = blip.segment.clip(moved);
            blip.x = clipped.x;
            blip.y = clipped.y;
        }
    }

    ticks
}

/// One pass of pairwise disc separation. Overlapping pairs push each other's
/// velocities apart, split evenly since every blip has the same radius.
fn apply_collisions(
    blips: &[BlipLayout],
    velocities: &mut [Point],
    collision: &CollisionConfig,
    rng: &mut SeededRng,
) {
    let min_distance = collision.blip_radius * 2.0;
    for i in 0..blips.len() {
        let xi = blips[i].x + velocities[i].x;
        let yi = blips[i].y + velocities[i].y;
        for j in (i + 1)..blips.len() {
            let mut dx = xi - blips[j].x - velocities[j].x;
            let mut dy = yi - blips[j].y - velocities[j].y;
            let mut l = dx * dx + dy * dy;
            if l >= min_distance * min_distance {
                continue;
            }
            // Coincident blips get a deterministic jiggle so the push has a
            // direction.
            if dx == 0.0 {
                dx = jiggle(rng);
                l += dx * dx;
            }
            if dy == 0.0 {
                dy = jiggle(rng);
                l += dy * dy;
            }
            l = l.sqrt();
            let push = (min_distance - l) / l * collision.strength;
            let px = dx * push * 0.5;
            let py = dy * push * 0.5;
            velocities[i].x += px;
            velocities[i].y += py;
            velocities[j].x -= px;
            velocities[j].y -= py;
        }
    }
}

fn jiggle(rng: &mut SeededRng) -> f32 {
    (rng.random() - 0.5) * 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rng::LAYOUT_SEED;
    use crate::layout::segment::Segment;
    use crate::ir::Moved;

    fn blip(name: &str, quadrant: usize, ring: usize, x: f32, y: f32) -> BlipLayout {
        BlipLayout {
            name: name.to_string(),
            id: String::new(),
            x,
            y,
            color: "#5BA300".to_string(),
            quadrant,
            ring,
            moved: Moved::Unchanged,
            link: None,
            segment: Segment::new(quadrant, ring),
        }
    }

    #[test]
    fn stops_within_budget() {
        let mut blips = vec![blip("a", 0, 1, 170.0, 60.0), blip("b", 0, 1, 171.0, 61.0)];
        let collision = CollisionConfig::default();
        let ticks = relax(&mut blips, &collision, &mut SeededRng::new(LAYOUT_SEED));
        assert!(ticks <= collision.max_ticks);
        assert!(ticks > 0);
    }

    #[test]
    fn separates_overlapping_pair() {
        let mut blips = vec![blip("a", 0, 2, 240.0, 80.0), blip("b", 0, 2, 242.0, 80.0)];
        let collision = CollisionConfig::default();
        relax(&mut blips, &collision, &mut SeededRng::new(LAYOUT_SEED));
        let dx = blips[0].x - blips[1].x;
        let dy = blips[0].y - blips[1].y;
        let distance = (dx * dx + dy * dy).sqrt();
        assert!(distance > 10.0, "blips barely moved apart: {distance}");
    }

    #[test]
    fn coincident_blips_do_not_produce_nan() {
        let mut blips = vec![blip("a", 1, 1, -170.0, 60.0), blip("b", 1, 1, -170.0, 60.0)];
        relax(
            &mut blips,
            &CollisionConfig::default(),
            &mut SeededRng::new(LAYOUT_SEED),
        );
        for b in &blips {
            assert!(b.x.is_finite() && b.y.is_finite());
        }
    }

    #[test]
    fn containment_survives_relaxation() {
        // A crowded segment forces many collisions; none may escape.
        let mut blips: Vec<BlipLayout> = (0..30)
            .map(|i| blip(&format!("n{i}"), 2, 0, -60.0 - i as f32 * 0.5, -60.0))
            .collect();
        relax(
            &mut blips,
            &CollisionConfig::default(),
            &mut SeededRng::new(LAYOUT_SEED),
        );
        for b in &blips {
            assert!(
                b.segment.contains(Point::new(b.x, b.y)),
                "{} escaped: ({}, {})",
                b.name,
                b.x,
                b.y
            );
        }
    }

    #[test]
    fn single_blip_is_untouched() {
        let mut blips = vec![blip("solo", 3, 3, 200.0, -250.0)];
        let ticks = relax(
            &mut blips,
            &CollisionConfig::default(),
            &mut SeededRng::new(LAYOUT_SEED),
        );
        assert_eq!(ticks, 0);
        assert_eq!((blips[0].x, blips[0].y), (200.0, -250.0));
    }
}
