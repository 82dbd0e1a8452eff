use crate::layout::{Layout, SEGMENT_PADDING};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub date: Option<String>,
    pub width: f32,
    pub height: f32,
    pub blips: Vec<BlipDump>,
    pub rings: Vec<RingDump>,
    pub quadrants: Vec<QuadrantDump>,
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BlipDump {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub quadrant: usize,
    pub ring: usize,
    pub moved: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub segment: SegmentDump,
}

/// Padded radial band a blip is confined to; lets a downstream renderer
/// re-clip after drag or resize without this crate in the loop.
#[derive(Debug, Serialize)]
pub struct SegmentDump {
    pub angle_min: f32,
    pub angle_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
}

#[derive(Debug, Serialize)]
pub struct RingDump {
    pub name: String,
    pub color: String,
    pub outer_radius: f32,
}

#[derive(Debug, Serialize)]
pub struct QuadrantDump {
    pub name: String,
    pub radial_min: f32,
    pub radial_max: f32,
    pub factor_x: f32,
    pub factor_y: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let blips = layout
            .blips
            .iter()
            .map(|blip| BlipDump {
                id: blip.id.clone(),
                name: blip.name.clone(),
                x: blip.x,
                y: blip.y,
                color: blip.color.clone(),
                quadrant: blip.quadrant,
                ring: blip.ring,
                moved: blip.moved.code(),
                link: blip.link.clone(),
                segment: SegmentDump {
                    angle_min: blip.segment.polar_min.t,
                    angle_max: blip.segment.polar_max.t,
                    radius_min: blip.segment.polar_min.r + SEGMENT_PADDING,
                    radius_max: blip.segment.polar_max.r - SEGMENT_PADDING,
                },
            })
            .collect();

        let rings = layout
            .rings
            .iter()
            .map(|ring| RingDump {
                name: ring.name.clone(),
                color: ring.color.clone(),
                outer_radius: ring.outer_radius,
            })
            .collect();

        let quadrants = layout
            .quadrants
            .iter()
            .map(|quadrant| QuadrantDump {
                name: quadrant.name.clone(),
                radial_min: quadrant.radial_min,
                radial_max: quadrant.radial_max,
                factor_x: quadrant.factor_x,
                factor_y: quadrant.factor_y,
            })
            .collect();

        LayoutDump {
            date: layout.date.clone(),
            width: layout.width,
            height: layout.height,
            blips,
            rings,
            quadrants,
            diagnostics: layout
                .diagnostics
                .iter()
                .map(|diagnostic| diagnostic.to_string())
                .collect(),
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
