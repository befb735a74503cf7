//! Triangle shape.

use super::{DrawMode, ShapeBase, ShapeTrait};
use crate::error::{GeometryError, GeometryResult};
use crate::transform::Transform;
use crate::vertex::Vertex;
use serde::Serialize;

/// A free triangle built from caller-supplied vertices. No closure
/// invariant is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    base: ShapeBase,
}

impl Triangle {
    pub const VERTEX_COUNT: usize = 3;

    /// Create a triangle owning exactly three vertices.
    pub fn new(transform: Transform, vertices: Vec<Vertex>) -> GeometryResult<Self> {
        if vertices.len() != Self::VERTEX_COUNT {
            log::warn!("rejected triangle with {} vertices", vertices.len());
            return Err(GeometryError::InvalidVertexCount {
                shape: "triangle",
                expected: Self::VERTEX_COUNT,
                actual: vertices.len(),
            });
        }
        Ok(Self {
            base: ShapeBase::new(transform, vertices),
        })
    }
}

impl ShapeTrait for Triangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_mode(&self) -> DrawMode {
        DrawMode::Triangles
    }
}
