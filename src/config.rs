use crate::layout_attrs::{BOUNDS_HEIGHT_DIVISOR, DEFAULT_UNIT_SCALE, NODE_HEIGHT_SCALE};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Decode `pos`/`bb`/`width`/`height` into numeric geometry.
    pub decode_layout: bool,
    pub node_width_scale: f64,
    pub node_height_scale: f64,
    pub bounds_height_divisor: f64,
    pub subgraph_id_prefix: String,
    pub edge_name_prefix: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            decode_layout: true,
            node_width_scale: DEFAULT_UNIT_SCALE,
            node_height_scale: NODE_HEIGHT_SCALE,
            bounds_height_divisor: BOUNDS_HEIGHT_DIVISOR,
            subgraph_id_prefix: "sg".to_string(),
            edge_name_prefix: "edge".to_string(),
        }
    }
}

/// Loads a build config file. JSON5 is accepted, so plain JSON works too.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<BuildConfig> {
    let Some(path) = path else {
        return Ok(BuildConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<BuildConfig> {
    let config: BuildConfig = json5::from_str(contents)?;
    Ok(config)
}
