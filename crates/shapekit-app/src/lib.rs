//! Shapekit application shell.
//!
//! Loads the render configuration, builds a demo scene through the shape
//! factories, applies a few edits, renders one frame through a logging
//! backend and reports the render sequence as JSON.

mod config;
mod demo;
mod log_renderer;

pub use config::load_config;
pub use demo::{DemoScene, apply_demo_edits, build_demo_scene};
pub use log_renderer::LogRenderer;

use shapekit_core::GeometryError;
use shapekit_core::render_data;
use shapekit_render::{Renderer, RendererError, plan_frame};
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Run the demo once and return the JSON report.
pub fn run(config_path: Option<&Path>) -> AppResult<String> {
    let config = load_config(config_path)?;
    let mut demo = build_demo_scene()?;
    apply_demo_edits(&mut demo)?;

    let frame = plan_frame(&demo.scene, &config)?;
    let mut renderer = LogRenderer::default();
    renderer.render(&frame)?;
    log::info!(
        "rendered {} draw calls, {} bytes uploaded",
        renderer.draw_calls(),
        renderer.bytes_uploaded()
    );

    let sequence = demo.scene.render_sequence();
    let report = serde_json::json!({
        "shapes": demo.scene.len(),
        "vertices": render_data::vertex_count(&sequence),
        "frame_interval_ms": config.frame_interval_ms(),
        "draw_calls": renderer.draw_calls(),
        "sequence": sequence,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}
