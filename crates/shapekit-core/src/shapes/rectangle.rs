//! Rectangle shape.

use super::{DrawMode, ShapeBase, ShapeTrait};
use crate::color;
use crate::error::{GeometryError, GeometryResult, rescale_factor};
use crate::transform::Transform;
use crate::vector::Vector2;
use crate::vertex::Vertex;
use serde::Serialize;

/// Sign pair mapping the canonical corner (vertex 0) to vertex `index`.
pub fn quadrant_multiplier(index: usize) -> GeometryResult<Vector2> {
    match index {
        0 => Ok(Vector2::Q1),
        1 => Ok(Vector2::Q2),
        2 => Ok(Vector2::Q3),
        3 => Ok(Vector2::Q4),
        _ => Err(GeometryError::invariant(
            "rectangle",
            format!("no quadrant for vertex {index}"),
        )),
    }
}

/// An axis-aligned rectangle centred on its local origin, with independent
/// length (X) and width (Y).
///
/// Vertex 0 is the canonical corner; the others are sign-flipped copies of
/// it, in the order top-right, top-left, bottom-left, bottom-right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    base: ShapeBase,
    length: f64,
    width: f64,
}

impl Rectangle {
    pub const VERTEX_COUNT: usize = 4;

    pub fn new(transform: Transform, length: f64, width: f64) -> Self {
        let l = length / 2.0;
        let w = width / 2.0;
        let vertices = vec![
            Vertex::new(Vector2::new(l, w), color::black()),
            Vertex::new(Vector2::new(-l, w), color::black()),
            Vertex::new(Vector2::new(-l, -w), color::black()),
            Vertex::new(Vector2::new(l, -w), color::black()),
        ];
        Self {
            base: ShapeBase::new(transform, vertices),
            length,
            width,
        }
    }

    /// Nominal extent along X.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Nominal extent along Y.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Scale the X component of every vertex by `value / length`.
    pub fn set_length(&mut self, value: f64) -> GeometryResult<()> {
        let factor = rescale_factor("length", self.length, value)?;
        for vertex in &mut self.base.vertices {
            vertex.scale_x(factor);
        }
        self.length = value;
        log::debug!("rectangle {} length set to {}", self.base.id, value);
        Ok(())
    }

    /// Scale the Y component of every vertex by `value / width`.
    pub fn set_width(&mut self, value: f64) -> GeometryResult<()> {
        let factor = rescale_factor("width", self.width, value)?;
        for vertex in &mut self.base.vertices {
            vertex.scale_y(factor);
        }
        self.width = value;
        log::debug!("rectangle {} width set to {}", self.base.id, value);
        Ok(())
    }
}

impl ShapeTrait for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_mode(&self) -> DrawMode {
        DrawMode::TriangleFan
    }

    /// Settle vertex 0 from the moved vertex, then derive the other three
    /// from vertex 0.
    fn on_vertex_changed(&mut self, index: usize) -> GeometryResult<()> {
        let vertices = &mut self.base.vertices;
        if vertices.len() != Self::VERTEX_COUNT {
            return Err(GeometryError::invariant(
                "rectangle",
                format!("expected 4 vertices, found {}", vertices.len()),
            ));
        }

        let corner = vertices[index]
            .position()
            .mul_components(quadrant_multiplier(index)?);
        vertices[0].set_raw(corner);
        for (i, vertex) in vertices.iter_mut().enumerate().skip(1) {
            vertex.set_raw(corner.mul_components(quadrant_multiplier(i)?));
        }
        Ok(())
    }
}
