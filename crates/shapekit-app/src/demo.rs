//! Demo scene: one of each shape, edited the way a drag session would.

use shapekit_core::{
    GeometryError, GeometryResult, Scene, ShapeId, Transform, Vector2, Vertex, color,
};
use std::f64::consts::FRAC_PI_4;

/// The demo scene and the IDs of its shapes.
pub struct DemoScene {
    pub scene: Scene,
    pub triangle: ShapeId,
    pub square: ShapeId,
    pub rectangle: ShapeId,
    pub line: ShapeId,
}

pub fn build_demo_scene() -> GeometryResult<DemoScene> {
    let mut scene = Scene::new();
    let triangle = scene.create_triangle(
        Transform::at(Vector2::new(-0.5, 0.5)),
        vec![
            Vertex::new(Vector2::new(0.0, 0.2), color::red()),
            Vertex::new(Vector2::new(-0.2, -0.2), color::green()),
            Vertex::new(Vector2::new(0.2, -0.2), color::blue()),
        ],
    )?;
    let square = scene.create_square(Transform::at(Vector2::new(0.5, 0.5)), 0.4);
    let rectangle = scene.create_rectangle(Transform::at(Vector2::new(-0.5, -0.5)), 0.6, 0.3);
    let line = scene.create_line(Transform::at(Vector2::new(0.5, -0.5)), 0.5);
    Ok(DemoScene {
        scene,
        triangle,
        square,
        rectangle,
        line,
    })
}

/// Drag a few vertices, resize, and move the shapes around.
pub fn apply_demo_edits(demo: &mut DemoScene) -> GeometryResult<()> {
    let scene = &mut demo.scene;
    scene.move_vertex(demo.square, 0, Vector2::new(0.3, 0.1))?;
    scene.move_vertex(demo.rectangle, 2, Vector2::new(-0.4, -0.1))?;
    scene.move_vertex(demo.line, 1, Vector2::new(0.2, 0.05))?;

    let rectangle = scene
        .get_shape_mut(demo.rectangle)
        .ok_or(GeometryError::ShapeNotFound(demo.rectangle))?;
    if let Some(rect) = rectangle.as_rectangle_mut() {
        rect.set_width(0.4)?;
    }

    let triangle = scene
        .get_shape_mut(demo.triangle)
        .ok_or(GeometryError::ShapeNotFound(demo.triangle))?;
    triangle.rotate(FRAC_PI_4);
    triangle.scale(1.5);

    scene.highlight_only(Some(demo.square));
    Ok(())
}
