//! A backend that logs draw calls instead of touching a GPU.

use shapekit_render::{DrawCall, RenderResult, Renderer};

/// Counts and logs everything it is asked to draw.
#[derive(Debug, Default)]
pub struct LogRenderer {
    draw_calls: usize,
    bytes_uploaded: usize,
}

impl LogRenderer {
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn bytes_uploaded(&self) -> usize {
        self.bytes_uploaded
    }
}

impl Renderer for LogRenderer {
    fn clear(&mut self, color: [f32; 3]) -> RenderResult<()> {
        log::debug!("clear to {:?}", color);
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall) -> RenderResult<()> {
        let bytes = call.as_bytes().len();
        log::debug!(
            "draw {:?} with {} vertices ({} bytes)",
            call.primitive,
            call.vertex_count(),
            bytes
        );
        self.draw_calls += 1;
        self.bytes_uploaded += bytes;
        Ok(())
    }
}
