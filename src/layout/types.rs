use crate::ir::Moved;

use super::segment::Segment;

/// One positioned blip, ready for a renderer.
///
/// Coordinates are radar-centered: the origin is the radar's center and the
/// renderer translates into its own frame. The segment is carried by value so
/// a resize/update hook can re-clip without re-running the whole layout.
#[derive(Debug, Clone)]
pub struct BlipLayout {
    pub name: String,
    /// Sequential display id, "1"..N, assigned once per layout run.
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub quadrant: usize,
    pub ring: usize,
    pub moved: Moved,
    pub link: Option<String>,
    pub segment: Segment,
}

#[derive(Debug, Clone)]
pub struct RingLayout {
    pub name: String,
    pub color: String,
    pub outer_radius: f32,
}

#[derive(Debug, Clone)]
pub struct QuadrantLayout {
    pub name: String,
    /// Angular range as multiples of pi.
    pub radial_min: f32,
    pub radial_max: f32,
    pub factor_x: f32,
    pub factor_y: f32,
}

/// Non-fatal problems encountered while laying out malformed input.
///
/// Each variant is also emitted on the `tracing` warn channel at the point it
/// occurs; collecting them here lets callers (and tests) observe the
/// degradation without installing a subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    RingClamped {
        entry: String,
        given: i64,
        clamped: usize,
    },
    QuadrantClamped {
        entry: String,
        given: i64,
        clamped: usize,
    },
    EntrySkipped {
        index: usize,
        reason: String,
    },
    MovedDefaulted {
        entry: String,
        given: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RingClamped {
                entry,
                given,
                clamped,
            } => write!(f, "entry {entry:?}: ring {given} out of range, clamped to {clamped}"),
            Self::QuadrantClamped {
                entry,
                given,
                clamped,
            } => write!(
                f,
                "entry {entry:?}: quadrant {given} out of range, clamped to {clamped}"
            ),
            Self::EntrySkipped { index, reason } => {
                write!(f, "entry #{index} skipped: {reason}")
            }
            Self::MovedDefaulted { entry, given } => write!(
                f,
                "entry {entry:?}: unknown moved indicator {given}, treated as unchanged"
            ),
        }
    }
}

/// Result of a full layout run.
#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub date: Option<String>,
    pub blips: Vec<BlipLayout>,
    pub rings: [RingLayout; 4],
    pub quadrants: [QuadrantLayout; 4],
    pub diagnostics: Vec<Diagnostic>,
}

impl Layout {
    /// Re-clip every blip into its segment. A renderer calls this after it
    /// has moved blips (drag, resize re-flow) to restore containment without
    /// resetting identity or re-seeding positions.
    pub fn reclip(&mut self) {
        for blip in &mut self.blips {
            let clipped = blip.segment.clip(crate::layout::geom::Point::new(blip.x, blip.y));
            blip.x = clipped.x;
            blip.y = clipped.y;
        }
    }
}
