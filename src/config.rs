use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Collision-relaxation tuning. The defaults were tuned empirically against
/// real radars, not derived; treat them as a matched set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Radius of the disc each blip occupies during relaxation.
    pub blip_radius: f32,
    /// Fraction of each overlap resolved per tick.
    pub strength: f32,
    /// Fraction of velocity lost per tick (0.19 lost, 0.81 retained).
    pub velocity_decay: f32,
    /// Simulation cools until alpha drops below this threshold.
    pub alpha_min: f32,
    /// Per-tick cooling rate; the default reaches `alpha_min` in ~300 ticks.
    pub alpha_decay: f32,
    /// Hard tick budget; relaxation stops here even if still warm.
    pub max_ticks: usize,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            blip_radius: 12.0,
            strength: 0.85,
            velocity_decay: 0.19,
            alpha_min: 0.001,
            alpha_decay: 0.022_759,
            max_ticks: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Uniform scale applied to the output frame dimensions.
    pub scale: f32,
    /// Layout/print mode: blips always take their ring color, inactive or not.
    pub layout_mode: bool,
    /// Clearance between the outer ring and the frame edge.
    pub margin: f32,
    pub collision: CollisionConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            layout_mode: false,
            margin: 25.0,
            collision: CollisionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
    grid_color: Option<String>,
    inactive_color: Option<String>,
    ring_names: Option<[String; 4]>,
    ring_colors: Option<[String; 4]>,
    quadrant_names: Option<[String; 4]>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollisionConfigFile {
    blip_radius: Option<f32>,
    strength: Option<f32>,
    velocity_decay: Option<f32>,
    alpha_min: Option<f32>,
    alpha_decay: Option<f32>,
    max_ticks: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    scale: Option<f32>,
    layout_mode: Option<bool>,
    margin: Option<f32>,
    collision: Option<CollisionConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "zalando" || theme_name == "default" {
            config.theme = Theme::zalando_default();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.grid_color {
            config.theme.grid_color = v;
        }
        if let Some(v) = vars.inactive_color {
            config.theme.inactive_color = v;
        }
        if let Some(v) = vars.ring_names {
            config.theme.ring_names = v;
        }
        if let Some(v) = vars.ring_colors {
            config.theme.ring_colors = v;
        }
        if let Some(v) = vars.quadrant_names {
            config.theme.quadrant_names = v;
        }
    }

    if let Some(v) = parsed.scale {
        config.layout.scale = v;
    }
    if let Some(v) = parsed.layout_mode {
        config.layout.layout_mode = v;
    }
    if let Some(v) = parsed.margin {
        config.layout.margin = v;
    }
    if let Some(collision) = parsed.collision {
        if let Some(v) = collision.blip_radius {
            config.layout.collision.blip_radius = v;
        }
        if let Some(v) = collision.strength {
            config.layout.collision.strength = v;
        }
        if let Some(v) = collision.velocity_decay {
            config.layout.collision.velocity_decay = v;
        }
        if let Some(v) = collision.alpha_min {
            config.layout.collision.alpha_min = v;
        }
        if let Some(v) = collision.alpha_decay {
            config.layout.collision.alpha_decay = v;
        }
        if let Some(v) = collision.max_ticks {
            config.layout.collision.max_ticks = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuning() {
        let config = LayoutConfig::default();
        assert_eq!(config.collision.blip_radius, 12.0);
        assert_eq!(config.collision.strength, 0.85);
        assert_eq!(config.collision.velocity_decay, 0.19);
        assert_eq!(config.collision.max_ticks, 300);
        assert!(!config.layout_mode);
    }

    #[test]
    fn load_config_none_is_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.theme.ring_colors[0], "#5BA300");
        assert_eq!(config.layout.scale, 1.0);
    }
}
