//! The render list: shapes in draw order, created through factories.

use crate::error::{GeometryError, GeometryResult};
use crate::render_data;
use crate::shapes::{Line, Rectangle, Shape, ShapeId, Square, Triangle};
use crate::transform::Transform;
use crate::vector::Vector2;
use crate::vertex::Vertex;
use serde::Serialize;
use std::collections::HashMap;

/// Shapes keyed by ID, plus their draw order (back to front).
///
/// ```compile_fail
/// let _: shapekit_core::Scene = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    shapes: HashMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape to the end of the render list.
    ///
    /// A shape whose ID is already listed replaces the stored one and keeps
    /// its place in the draw order.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        if self.shapes.insert(id, shape).is_some() {
            log::warn!("replaced shape {id} already in the render list");
        } else {
            self.order.push(id);
            log::debug!("added shape {id}");
        }
        id
    }

    pub fn create_triangle(
        &mut self,
        transform: Transform,
        vertices: Vec<Vertex>,
    ) -> GeometryResult<ShapeId> {
        let triangle = Triangle::new(transform, vertices)?;
        Ok(self.add_shape(triangle.into()))
    }

    pub fn create_square(&mut self, transform: Transform, size: f64) -> ShapeId {
        self.add_shape(Square::new(transform, size).into())
    }

    pub fn create_rectangle(&mut self, transform: Transform, length: f64, width: f64) -> ShapeId {
        self.add_shape(Rectangle::new(transform, length, width).into())
    }

    pub fn create_line(&mut self, transform: Transform, length: f64) -> ShapeId {
        self.add_shape(Line::new(transform, length).into())
    }

    /// Polygons have no vertex generation or invariant yet.
    pub fn create_polygon(
        &mut self,
        _transform: Transform,
        _vertices: Vec<Vertex>,
    ) -> GeometryResult<ShapeId> {
        Err(GeometryError::Unimplemented("polygon"))
    }

    /// Remove a shape from the render list.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.order.retain(|&shape_id| shape_id != id);
        self.shapes.remove(&id)
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    fn require_mut(&mut self, id: ShapeId) -> GeometryResult<&mut Shape> {
        self.shapes
            .get_mut(&id)
            .ok_or(GeometryError::ShapeNotFound(id))
    }

    /// Shapes in draw order.
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drag a vertex of shape `id`, restoring that shape's invariant.
    pub fn move_vertex(
        &mut self,
        id: ShapeId,
        index: usize,
        position: Vector2,
    ) -> GeometryResult<()> {
        self.require_mut(id)?.set_vertex_position(index, position)
    }

    /// Highlight exactly one shape, or none.
    pub fn highlight_only(&mut self, id: Option<ShapeId>) {
        for (shape_id, shape) in &mut self.shapes {
            shape.set_highlighted(Some(*shape_id) == id);
        }
    }

    /// The flattened records of every visible shape, in draw order.
    pub fn render_sequence(&self) -> Vec<f64> {
        render_data::project(self.shapes_ordered())
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
