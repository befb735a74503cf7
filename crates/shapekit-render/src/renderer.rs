//! Renderer trait abstraction.

use crate::frame::{DrawCall, Frame};
use shapekit_core::GeometryError;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RendererError {
    #[error("render sequence of {len} floats is not a whole number of vertices")]
    InvalidSequence { len: usize },
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
    #[error("backend failed: {0}")]
    Backend(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// A backend that can execute planned frames.
pub trait Renderer {
    /// Clear the target to an RGB color.
    fn clear(&mut self, color: [f32; 3]) -> RenderResult<()>;

    /// Upload the call's vertices and draw them.
    fn draw(&mut self, call: &DrawCall) -> RenderResult<()>;

    /// Clear, then issue every draw call in order.
    fn render(&mut self, frame: &Frame) -> RenderResult<()> {
        self.clear(frame.clear_color)?;
        for call in &frame.draw_calls {
            self.draw(call)?;
        }
        Ok(())
    }
}
