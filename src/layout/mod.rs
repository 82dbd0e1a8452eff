pub(crate) mod geom;
mod relax;
pub(crate) mod rng;
pub(crate) mod segment;
pub(crate) mod types;

pub use geom::{Point, Polar, bounded_box, bounded_interval, bounded_ring, cartesian, polar};
pub use rng::{LAYOUT_SEED, SeededRng};
pub use segment::{QUADRANT_GEOMS, RING_HOLE_RADIUS, RING_RADII, SEGMENT_PADDING, Segment};
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::Radar;
use crate::theme::Theme;

use segment::clamp_index;

/// Buckets are visited in this quadrant order when assigning display ids,
/// matching the legend's visual reading order (bottom-left, bottom-right,
/// top-right, top-left). This is a display policy, not geometry.
pub const LEGEND_QUADRANT_ORDER: [usize; 4] = [2, 3, 1, 0];

/// Lay out a radar: seed a deterministic position for every entry, assign
/// sequential display ids, then relax collisions with per-tick clipping.
///
/// Malformed entries degrade instead of failing the run: blank names are
/// skipped, out-of-range indices are clamped, and each incident is recorded
/// in `Layout::diagnostics`.
pub fn compute_layout(radar: &Radar, theme: &Theme, config: &LayoutConfig) -> Layout {
    let mut diagnostics = Vec::new();
    let mut rng = SeededRng::new(LAYOUT_SEED);
    let mut blips = seed_blips(radar, theme, config, &mut rng, &mut diagnostics);

    assign_display_ids(&mut blips);
    relax::relax(&mut blips, &config.collision, &mut rng);

    let frame = 2.0 * (RING_RADII[3] + config.margin) * config.scale;
    Layout {
        width: frame,
        height: frame,
        date: radar.date.clone(),
        blips,
        rings: std::array::from_fn(|i| RingLayout {
            name: theme.ring_names[i].clone(),
            color: theme.ring_colors[i].clone(),
            outer_radius: RING_RADII[i],
        }),
        quadrants: std::array::from_fn(|i| {
            let (radial_min, radial_max, factor_x, factor_y) = QUADRANT_GEOMS[i];
            QuadrantLayout {
                name: theme.quadrant_names[i].clone(),
                radial_min,
                radial_max,
                factor_x,
                factor_y,
            }
        }),
        diagnostics,
    }
}

/// Resolve each entry's segment and draw its seed position, in input order so
/// the PRNG sequence (and therefore every position) is reproducible.
fn seed_blips(
    radar: &Radar,
    theme: &Theme,
    config: &LayoutConfig,
    rng: &mut SeededRng,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<BlipLayout> {
    let mut blips = Vec::with_capacity(radar.entries.len());
    for (index, entry) in radar.entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            let diagnostic = Diagnostic::EntrySkipped {
                index,
                reason: "missing name".to_string(),
            };
            tracing::warn!(index, "skipping entry: missing name");
            diagnostics.push(diagnostic);
            continue;
        }

        let quadrant = clamp_index(entry.quadrant);
        if quadrant != entry.quadrant {
            tracing::warn!(
                entry = %entry.name,
                given = entry.quadrant,
                clamped = quadrant,
                "quadrant index out of range"
            );
            diagnostics.push(Diagnostic::QuadrantClamped {
                entry: entry.name.clone(),
                given: entry.quadrant as i64,
                clamped: quadrant,
            });
        }
        let ring = clamp_index(entry.ring);
        if ring != entry.ring {
            tracing::warn!(
                entry = %entry.name,
                given = entry.ring,
                clamped = ring,
                "ring index out of range"
            );
            diagnostics.push(Diagnostic::RingClamped {
                entry: entry.name.clone(),
                given: entry.ring as i64,
                clamped: ring,
            });
        }

        let segment = Segment::new(quadrant, ring);
        let seeded = segment.clip(segment.random_point(rng));
        let color = if entry.active || config.layout_mode {
            theme.ring_colors[ring].clone()
        } else {
            theme.inactive_color.clone()
        };
        blips.push(BlipLayout {
            name: entry.name.clone(),
            id: String::new(),
            x: seeded.x,
            y: seeded.y,
            color,
            quadrant,
            ring,
            moved: entry.moved,
            link: entry.link.clone(),
            segment,
        });
    }
    blips
}

/// Assign "1"..N, walking quadrants in legend order, rings innermost-out,
/// and each bucket alphabetically.
fn assign_display_ids(blips: &mut [BlipLayout]) {
    let mut buckets: [[Vec<usize>; 4]; 4] = Default::default();
    for (index, blip) in blips.iter().enumerate() {
        buckets[blip.quadrant][blip.ring].push(index);
    }

    let mut next_id = 1usize;
    for quadrant in LEGEND_QUADRANT_ORDER {
        for ring in 0..4 {
            let bucket = &mut buckets[quadrant][ring];
            bucket.sort_by(|&a, &b| legend_name_cmp(&blips[a].name, &blips[b].name));
            for &index in bucket.iter() {
                blips[index].id = next_id.to_string();
                next_id += 1;
            }
        }
    }
}

/// Case-insensitive name ordering for the legend, raw comparison as the
/// tie-break so equal-folding names still order deterministically.
fn legend_name_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
