use serde::{Deserialize, Serialize};

/// Colors and ring/quadrant naming applied to a computed layout.
///
/// The engine only consumes colors; names travel through to the output so a
/// renderer can draw the legend without a second data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    pub grid_color: String,
    /// Blip color for inactive entries when the radar is not in layout mode.
    pub inactive_color: String,
    pub ring_names: [String; 4],
    pub ring_colors: [String; 4],
    pub quadrant_names: [String; 4],
}

impl Theme {
    /// The classic Zalando tech-radar palette.
    pub fn zalando_default() -> Self {
        Self {
            font_family: "Arial, Helvetica".to_string(),
            font_size: 13.0,
            background: "#FFFFFF".to_string(),
            grid_color: "#BBBBBB".to_string(),
            inactive_color: "#DDDDDD".to_string(),
            ring_names: [
                "ADOPT".to_string(),
                "TRIAL".to_string(),
                "ASSESS".to_string(),
                "HOLD".to_string(),
            ],
            ring_colors: [
                "#5BA300".to_string(),
                "#009EB0".to_string(),
                "#C7BA00".to_string(),
                "#E09B96".to_string(),
            ],
            quadrant_names: [
                "Languages".to_string(),
                "Infrastructure".to_string(),
                "Datastores".to_string(),
                "Data Management".to_string(),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            background: "#101214".to_string(),
            grid_color: "#3E4854".to_string(),
            inactive_color: "#4A5461".to_string(),
            ring_names: [
                "ADOPT".to_string(),
                "TRIAL".to_string(),
                "ASSESS".to_string(),
                "HOLD".to_string(),
            ],
            ring_colors: [
                "#84C926".to_string(),
                "#2BC2D4".to_string(),
                "#E8D920".to_string(),
                "#F2A09A".to_string(),
            ],
            quadrant_names: [
                "Languages".to_string(),
                "Infrastructure".to_string(),
                "Datastores".to_string(),
                "Data Management".to_string(),
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::zalando_default()
    }
}
