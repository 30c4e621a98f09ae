use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout constants. Defaults reproduce the editor's reference geometry;
/// override individual fields through a JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Half-width contribution per label character, in px.
    pub text_scale: f32,
    /// Minimum horizontal gap between adjacent sibling silhouettes.
    pub sibling_margin: f32,
    /// Cap on a node's rendered width; half of it caps each contour side.
    pub max_node_width: f32,
    /// Root x anchor.
    pub x_base: f32,
    /// y of the root row.
    pub y_base: f32,
    /// Vertical distance between consecutive depth levels.
    pub y_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            text_scale: 6.0,
            sibling_margin: 50.0,
            max_node_width: 300.0,
            x_base: 100.0,
            y_base: 100.0,
            y_spacing: 150.0,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: LayoutConfig = serde_json::from_str(&contents)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}
