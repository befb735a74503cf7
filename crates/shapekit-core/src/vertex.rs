//! Vertices: a position and color, optionally bound to an owning shape.

use crate::color;
use crate::render_data::{VERTEX_SIZE, VertexRecord};
use crate::shapes::ShapeId;
use crate::transform::Transform;
use crate::vector::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A single shape vertex in the owning shape's local space.
///
/// The back-reference to the owner is a [`ShapeId`] handle, never an owning
/// pointer; the owner passes its own [`Transform`] in whenever a vertex
/// needs its parent transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    position: Vector2,
    /// RGB color.
    pub color: Vector3,
    parent: Option<ShapeId>,
}

impl Vertex {
    pub fn new(position: Vector2, color: Vector3) -> Self {
        Self {
            position,
            color,
            parent: None,
        }
    }

    /// An unbound black vertex at the origin.
    pub fn origin() -> Self {
        Self::new(Vector2::zero(), color::black())
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn parent(&self) -> Option<ShapeId> {
        self.parent
    }

    pub fn is_bound(&self) -> bool {
        self.parent.is_some()
    }

    /// Record `shape` as this vertex's owner. Ownership itself stays with
    /// whichever shape holds the vertex.
    pub fn bind(&mut self, shape: ShapeId) {
        self.parent = Some(shape);
    }

    /// The owner's transform when bound, the identity otherwise.
    pub fn parent_transform(&self, owner: &Transform) -> Transform {
        if self.is_bound() {
            *owner
        } else {
            Transform::origin()
        }
    }

    /// Flattened attribute record:
    /// `[x, y, r, g, b, parent_x, parent_y, parent_rotation, parent_scale]`.
    pub fn data(&self, owner: &Transform) -> VertexRecord {
        let parent = self.parent_transform(owner);
        let mut record = [0.0; VERTEX_SIZE];
        record[0..2].copy_from_slice(&self.position.data());
        record[2..5].copy_from_slice(&self.color.data());
        record[5..7].copy_from_slice(&parent.position.data());
        record[7] = parent.rotation;
        record[8] = parent.scale;
        record
    }

    /// Move a vertex that is not yet part of a shape.
    ///
    /// Vertices a shape owns are only reachable by shared reference; move
    /// those through [`crate::shapes::Shape::set_vertex_position`].
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Write the position without notifying anyone.
    ///
    /// This is the non-reentrant path used by shape invariant handlers; the
    /// observed path is [`crate::shapes::Shape::set_vertex_position`].
    pub(crate) fn set_raw(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Rotate about the parent's current position (not the shape's local
    /// origin).
    pub fn rotate(&mut self, angle: f64, owner: &Transform) {
        let origin = self.parent_transform(owner).position;
        self.position.rotate(angle, origin);
    }

    pub fn scale(&mut self, factor: f64) {
        self.position.scale(factor);
    }

    pub fn scale_x(&mut self, factor: f64) {
        self.position.scale_x(factor);
    }

    pub fn scale_y(&mut self, factor: f64) {
        self.position.scale_y(factor);
    }
}
