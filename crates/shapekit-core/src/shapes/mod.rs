//! Shape definitions.
//!
//! Every shape owns an ordered list of [`Vertex`] and a [`Transform`].
//! Moving a vertex through [`Shape::set_vertex_position`] (or the per-axis
//! variants) is the observed write path: after the write, the shape's
//! [`ShapeTrait::on_vertex_changed`] handler runs with the moved vertex's
//! index and restores the shape invariant by writing sibling positions
//! through the raw path, so handlers never re-enter themselves.

mod line;
mod rectangle;
mod square;
mod triangle;

pub use line::Line;
pub use rectangle::{Rectangle, quadrant_multiplier};
pub use square::Square;
pub use triangle::Triangle;

use crate::error::{GeometryError, GeometryResult};
use crate::render_data::{VERTEX_SIZE, VertexRecord};
use crate::transform::Transform;
use crate::vector::{Vector2, Vector3};
use crate::vertex::Vertex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Primitive topology tag handed to the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    /// Independent triangles, three vertices each.
    Triangles,
    /// Fan around the first vertex.
    TriangleFan,
    /// Connected segments, not closed.
    LineStrip,
}

/// State shared by every shape variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeBase {
    pub(crate) id: ShapeId,
    /// Placement in the parent space.
    pub transform: Transform,
    pub(crate) vertices: Vec<Vertex>,
    /// Draw an outline and vertex markers in addition to the fill.
    pub highlighted: bool,
    /// Exclude from the render sequence.
    pub hidden: bool,
}

impl ShapeBase {
    /// Take ownership of `vertices` and bind each of them to the new shape.
    pub(crate) fn new(transform: Transform, vertices: Vec<Vertex>) -> Self {
        let id = Uuid::new_v4();
        let mut vertices = vertices;
        for vertex in &mut vertices {
            vertex.bind(id);
        }
        Self {
            id,
            transform,
            vertices,
            highlighted: false,
            hidden: false,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn check_index(&self, index: usize) -> GeometryResult<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GeometryError::VertexIndexOutOfRange {
                index,
                count: self.vertices.len(),
            })
        }
    }
}

/// Common behaviour of all shape variants.
pub trait ShapeTrait {
    /// Shared state.
    fn base(&self) -> &ShapeBase;

    /// Mutable shared state.
    fn base_mut(&mut self) -> &mut ShapeBase;

    /// Topology used to draw this shape.
    fn draw_mode(&self) -> DrawMode;

    /// Restore the shape invariant after vertex `index` moved.
    ///
    /// Implementations must write siblings with the raw vertex setter only.
    fn on_vertex_changed(&mut self, _index: usize) -> GeometryResult<()> {
        Ok(())
    }
}

/// Enum wrapper for all shape types.
///
/// Shapes serialize for inspection but are only ever built through their
/// constructors, which own vertex generation, counts and binding:
///
/// ```compile_fail
/// let _: shapekit_core::Shape = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Triangle(Triangle),
    Square(Square),
    Rectangle(Rectangle),
    Line(Line),
}

impl Shape {
    fn inner(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Triangle(s) => s,
            Shape::Square(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Line(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Triangle(s) => s,
            Shape::Square(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Line(s) => s,
        }
    }

    /// Variant name, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Triangle(_) => "triangle",
            Shape::Square(_) => "square",
            Shape::Rectangle(_) => "rectangle",
            Shape::Line(_) => "line",
        }
    }

    pub fn id(&self) -> ShapeId {
        self.inner().base().id
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.inner().draw_mode()
    }

    pub fn transform(&self) -> &Transform {
        &self.inner().base().transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.inner_mut().base_mut().transform
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.inner().base().vertices()
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices().get(index)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    pub fn is_highlighted(&self) -> bool {
        self.inner().base().highlighted
    }

    pub fn set_highlighted(&mut self, value: bool) {
        self.inner_mut().base_mut().highlighted = value;
    }

    pub fn is_hidden(&self) -> bool {
        self.inner().base().hidden
    }

    pub fn set_hidden(&mut self, value: bool) {
        self.inner_mut().base_mut().hidden = value;
    }

    /// Add `angle` radians to the transform rotation.
    pub fn rotate(&mut self, angle: f64) {
        self.transform_mut().rotation += angle;
    }

    /// Add `distance` to the transform position.
    pub fn translate(&mut self, distance: Vector2) {
        let transform = self.transform_mut();
        transform.position = transform.position + distance;
    }

    pub fn translate_x(&mut self, distance: f64) {
        self.transform_mut().position.x += distance;
    }

    pub fn translate_y(&mut self, distance: f64) {
        self.transform_mut().position.y += distance;
    }

    /// Multiply the transform scale by `factor`.
    pub fn scale(&mut self, factor: f64) {
        self.transform_mut().scale *= factor;
    }

    /// Attribute record of vertex `index`, with this shape's transform
    /// folded in.
    pub fn vertex_data(&self, index: usize) -> GeometryResult<VertexRecord> {
        let base = self.inner().base();
        base.check_index(index)?;
        Ok(base.vertices[index].data(&base.transform))
    }

    /// All vertex records in vertex order, concatenated.
    pub fn data(&self) -> Vec<f64> {
        let base = self.inner().base();
        let mut data = Vec::with_capacity(base.vertices.len() * VERTEX_SIZE);
        for vertex in &base.vertices {
            data.extend_from_slice(&vertex.data(&base.transform));
        }
        data
    }

    /// Position of vertex `index` in the parent space of this shape.
    pub fn world_position(&self, index: usize) -> GeometryResult<Vector2> {
        let base = self.inner().base();
        base.check_index(index)?;
        let vertex = &base.vertices[index];
        Ok(vertex.parent_transform(&base.transform).apply(vertex.position()))
    }

    /// Move vertex `index` and let the shape restore its invariant.
    pub fn set_vertex_position(&mut self, index: usize, position: Vector2) -> GeometryResult<()> {
        let kind = self.kind();
        let shape = self.inner_mut();
        shape.base().check_index(index)?;
        shape.base_mut().vertices[index].set_raw(position);
        log::debug!(
            "{} vertex {} moved to ({}, {})",
            kind,
            index,
            position.x,
            position.y
        );
        shape.on_vertex_changed(index)
    }

    /// Observed write of the X component of vertex `index`.
    pub fn set_vertex_x(&mut self, index: usize, x: f64) -> GeometryResult<()> {
        let current = self.current_position(index)?;
        self.set_vertex_position(index, Vector2::new(x, current.y))
    }

    /// Observed write of the Y component of vertex `index`.
    pub fn set_vertex_y(&mut self, index: usize, y: f64) -> GeometryResult<()> {
        let current = self.current_position(index)?;
        self.set_vertex_position(index, Vector2::new(current.x, y))
    }

    fn current_position(&self, index: usize) -> GeometryResult<Vector2> {
        let base = self.inner().base();
        base.check_index(index)?;
        Ok(base.vertices[index].position())
    }

    pub fn set_vertex_color(&mut self, index: usize, color: Vector3) -> GeometryResult<()> {
        let base = self.inner_mut().base_mut();
        base.check_index(index)?;
        base.vertices[index].color = color;
        Ok(())
    }

    /// Rotate vertex `index` about this shape's position. Does not trigger
    /// the invariant handler.
    pub fn rotate_vertex(&mut self, index: usize, angle: f64) -> GeometryResult<()> {
        let base = self.inner_mut().base_mut();
        base.check_index(index)?;
        let transform = base.transform;
        base.vertices[index].rotate(angle, &transform);
        Ok(())
    }

    /// Scale vertex `index` about the local origin. Does not trigger the
    /// invariant handler.
    pub fn scale_vertex(&mut self, index: usize, factor: f64) -> GeometryResult<()> {
        let base = self.inner_mut().base_mut();
        base.check_index(index)?;
        base.vertices[index].scale(factor);
        Ok(())
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Shape::Triangle(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_square(&self) -> Option<&Square> {
        match self {
            Shape::Square(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_square_mut(&mut self) -> Option<&mut Square> {
        match self {
            Shape::Square(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut Line> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Triangle> for Shape {
    fn from(shape: Triangle) -> Self {
        Shape::Triangle(shape)
    }
}

impl From<Square> for Shape {
    fn from(shape: Square) -> Self {
        Shape::Square(shape)
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Shape::Line(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use std::f64::consts::FRAC_PI_2;

    fn unit_square() -> Shape {
        Square::new(Transform::origin(), 2.0).into()
    }

    #[test]
    fn test_transform_edits() {
        let mut shape = unit_square();
        shape.rotate(0.5);
        shape.rotate(0.25);
        shape.translate(Vector2::new(1.0, 2.0));
        shape.translate_x(0.5);
        shape.translate_y(-1.0);
        shape.scale(2.0);
        shape.scale(1.5);

        let t = shape.transform();
        assert!((t.rotation - 0.75).abs() < f64::EPSILON);
        assert_eq!(t.position, Vector2::new(1.5, 1.0));
        assert!((t.scale - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_edits_do_not_touch_vertices() {
        let mut shape = unit_square();
        let before: Vec<Vector2> = shape.vertices().iter().map(Vertex::position).collect();
        shape.rotate(1.0);
        shape.translate(Vector2::new(5.0, 5.0));
        shape.scale(3.0);
        let after: Vec<Vector2> = shape.vertices().iter().map(Vertex::position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_data_folds_transform_per_vertex() {
        let mut shape = unit_square();
        shape.translate(Vector2::new(2.0, 3.0));
        shape.rotate(0.5);
        let data = shape.data();
        assert_eq!(data.len(), 4 * VERTEX_SIZE);
        for record in data.chunks(VERTEX_SIZE) {
            assert_eq!(&record[5..], &[2.0, 3.0, 0.5, 1.0]);
        }
        assert_eq!(&data[0..2], &[1.0, 1.0]);
    }

    #[test]
    fn test_vertices_are_bound_to_owner() {
        let shape = unit_square();
        assert!(shape.vertices().iter().all(|v| v.parent() == Some(shape.id())));
    }

    #[test]
    fn test_flags() {
        let mut shape = unit_square();
        assert!(!shape.is_hidden());
        assert!(!shape.is_highlighted());
        shape.set_hidden(true);
        shape.set_highlighted(true);
        assert!(shape.is_hidden());
        assert!(shape.is_highlighted());
    }

    #[test]
    fn test_out_of_range_vertex() {
        let mut shape = unit_square();
        assert_eq!(
            shape.set_vertex_position(4, Vector2::zero()),
            Err(GeometryError::VertexIndexOutOfRange { index: 4, count: 4 })
        );
        assert!(shape.vertex_data(7).is_err());
        assert!(shape.vertex(4).is_none());
    }

    #[test]
    fn test_world_position() {
        let mut shape = unit_square();
        shape.translate(Vector2::new(10.0, 0.0));
        shape.rotate(FRAC_PI_2);
        shape.scale(2.0);
        // (1, 1) -> scaled (2, 2) -> rotated (-2, 2) -> translated (8, 2)
        let world = shape.world_position(0).unwrap();
        assert!((world.x - 8.0).abs() < 1e-9);
        assert!((world.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_vertex_skips_invariant() {
        let mut shape = unit_square();
        shape.scale_vertex(0, 3.0).unwrap();
        assert_eq!(shape.vertices()[0].position(), Vector2::new(3.0, 3.0));
        assert_eq!(shape.vertices()[1].position(), Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn test_set_vertex_color() {
        let mut shape = unit_square();
        shape.set_vertex_color(2, color::blue()).unwrap();
        assert_eq!(&shape.vertex_data(2).unwrap()[2..5], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_draw_modes() {
        assert_eq!(unit_square().draw_mode(), DrawMode::TriangleFan);
        let rect: Shape = Rectangle::new(Transform::origin(), 4.0, 2.0).into();
        assert_eq!(rect.draw_mode(), DrawMode::TriangleFan);
        let line: Shape = Line::new(Transform::origin(), 1.0).into();
        assert_eq!(line.draw_mode(), DrawMode::LineStrip);
    }
}
