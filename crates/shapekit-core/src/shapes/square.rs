//! Square shape.

use super::{DrawMode, ShapeBase, ShapeTrait};
use crate::color;
use crate::error::{GeometryError, GeometryResult, rescale_factor};
use crate::mathx;
use crate::transform::Transform;
use crate::vector::Vector2;
use crate::vertex::Vertex;
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// A square centred on its local origin.
///
/// Vertices are ordered top-right, top-left, bottom-left, bottom-right and
/// always remain successive quarter-turn rotations of one another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Square {
    base: ShapeBase,
    size: f64,
}

impl Square {
    pub const VERTEX_COUNT: usize = 4;

    pub fn new(transform: Transform, size: f64) -> Self {
        let s = size / 2.0;
        let vertices = vec![
            Vertex::new(Vector2::new(s, s), color::black()),
            Vertex::new(Vector2::new(-s, s), color::black()),
            Vertex::new(Vector2::new(-s, -s), color::black()),
            Vertex::new(Vector2::new(s, -s), color::black()),
        ];
        Self {
            base: ShapeBase::new(transform, vertices),
            size,
        }
    }

    /// Nominal side length, as last set through construction or
    /// [`Square::set_size`]. Vertex drags do not update it.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Rescale every vertex by `value / size`.
    pub fn set_size(&mut self, value: f64) -> GeometryResult<()> {
        let factor = rescale_factor("size", self.size, value)?;
        for vertex in &mut self.base.vertices {
            vertex.scale(factor);
        }
        self.size = value;
        log::debug!("square {} resized to {}", self.base.id, value);
        Ok(())
    }

    /// Current distance of the vertices from the local origin.
    pub fn radius(&self) -> f64 {
        self.base
            .vertices
            .first()
            .map(|v| v.position().length())
            .unwrap_or(0.0)
    }
}

impl ShapeTrait for Square {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_mode(&self) -> DrawMode {
        DrawMode::TriangleFan
    }

    /// Walk the other three vertices in index order, each one a further
    /// quarter turn of the previous position about the local origin.
    fn on_vertex_changed(&mut self, index: usize) -> GeometryResult<()> {
        let vertices = &mut self.base.vertices;
        if vertices.len() != Self::VERTEX_COUNT {
            return Err(GeometryError::invariant(
                "square",
                format!("expected 4 vertices, found {}", vertices.len()),
            ));
        }

        let mut position = vertices[index].position();
        for step in 1..Self::VERTEX_COUNT {
            let sibling = (index + step) % Self::VERTEX_COUNT;
            position = mathx::rotate2(position, FRAC_PI_2, Vector2::zero());
            vertices[sibling].set_raw(position);
        }
        Ok(())
    }
}
