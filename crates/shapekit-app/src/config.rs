//! Configuration loading.

use crate::AppResult;
use shapekit_render::RenderConfig;
use std::path::Path;

/// Read a JSON [`RenderConfig`] from `path`, or fall back to defaults.
///
/// Missing keys take their default values.
pub fn load_config(path: Option<&Path>) -> AppResult<RenderConfig> {
    let Some(path) = path else {
        log::debug!("no config file given, using defaults");
        return Ok(RenderConfig::default());
    };
    let json = std::fs::read_to_string(path)?;
    let config: RenderConfig = serde_json::from_str(&json)?;
    log::info!("Loaded config from: {:?}", path);
    Ok(config)
}
