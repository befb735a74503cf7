//! Line shape.

use super::{DrawMode, ShapeBase, ShapeTrait};
use crate::color;
use crate::error::{GeometryError, GeometryResult, rescale_factor};
use crate::transform::Transform;
use crate::vector::Vector2;
use crate::vertex::Vertex;
use serde::Serialize;
use std::f64::consts::SQRT_2;

/// A two-endpoint segment. Endpoints move independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    base: ShapeBase,
    length: f64,
}

impl Line {
    pub const VERTEX_COUNT: usize = 2;

    /// A diagonal segment of `length` centred on the local origin.
    pub fn new(transform: Transform, length: f64) -> Self {
        let half_diag = (length / 2.0) * SQRT_2;
        let vertices = vec![
            Vertex::new(Vector2::new(-half_diag, -half_diag), color::black()),
            Vertex::new(Vector2::new(half_diag, half_diag), color::black()),
        ];
        Self {
            base: ShapeBase::new(transform, vertices),
            length,
        }
    }

    /// Nominal length, as last set through construction or
    /// [`Line::set_length`].
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Scale both endpoints from the local origin by `value / length`.
    pub fn set_length(&mut self, value: f64) -> GeometryResult<()> {
        if self.base.vertices.len() != Self::VERTEX_COUNT {
            return Err(GeometryError::invariant(
                "line",
                format!("expected 2 vertices, found {}", self.base.vertices.len()),
            ));
        }
        let factor = rescale_factor("length", self.length, value)?;
        for vertex in &mut self.base.vertices {
            vertex.scale(factor);
        }
        self.length = value;
        log::debug!("line {} length set to {}", self.base.id, value);
        Ok(())
    }
}

impl ShapeTrait for Line {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn draw_mode(&self) -> DrawMode {
        DrawMode::LineStrip
    }
}
