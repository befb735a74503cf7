//! Render configuration.

use serde::{Deserialize, Serialize};
use shapekit_core::Vector3;

/// Tunables for frame planning and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target frames per second.
    pub fps: u32,
    /// Radius of the per-vertex markers drawn on highlighted shapes.
    pub point_radius: f64,
    /// Background color.
    pub clear_color: Vector3,
    /// Outline and marker color for highlighted shapes.
    pub highlight_color: Vector3,
    /// Rim segments per vertex marker.
    pub marker_segments: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            point_radius: 0.01,
            clear_color: Vector3::new(0.5, 0.5, 0.5),
            highlight_color: Vector3::new(1.0, 0.568, 0.0),
            marker_segments: 8,
        }
    }
}

impl RenderConfig {
    /// Milliseconds between frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.fps, 60);
        assert!((config.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
        assert_eq!(config.marker_segments, 8);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let config = RenderConfig {
            fps: 0,
            ..RenderConfig::default()
        };
        assert!((config.frame_interval_ms() - 1000.0).abs() < f64::EPSILON);
    }
}
