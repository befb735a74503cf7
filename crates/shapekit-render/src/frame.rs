//! Frame planning: one draw call per visible shape, plus an outline and
//! vertex markers for highlighted shapes.

use crate::config::RenderConfig;
use crate::layout::{GpuVertex, gpu_vertices};
use crate::renderer::RenderResult;
use shapekit_core::render_data::{
    B, G, PARENT_POSITION_INDEX, PARENT_ROTATION_INDEX, PARENT_SCALE_INDEX, R,
};
use shapekit_core::{DrawMode, Scene, VERTEX_SIZE, Vector2, Vector3, VertexRecord};
use std::f64::consts::TAU;

/// Primitive topology of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Triangles,
    TriangleFan,
    LineStrip,
    /// Closed outline; only produced for highlights.
    LineLoop,
}

impl From<DrawMode> for Primitive {
    fn from(mode: DrawMode) -> Self {
        match mode {
            DrawMode::Triangles => Primitive::Triangles,
            DrawMode::TriangleFan => Primitive::TriangleFan,
            DrawMode::LineStrip => Primitive::LineStrip,
        }
    }
}

/// Vertices to upload and how to assemble them.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub vertices: Vec<GpuVertex>,
}

impl DrawCall {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Everything a backend needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 3],
    pub draw_calls: Vec<DrawCall>,
}

fn to_rgb(color: Vector3) -> [f32; 3] {
    [color.x as f32, color.y as f32, color.z as f32]
}

fn recolor(record: &mut [f64], color: Vector3) {
    record[R] = color.x;
    record[G] = color.y;
    record[B] = color.z;
}

/// Copy of a shape's records with every vertex recolored.
pub fn outline_vertices(data: &[f64], color: Vector3) -> RenderResult<Vec<GpuVertex>> {
    let mut data = data.to_vec();
    for record in data.chunks_mut(VERTEX_SIZE) {
        recolor(record, color);
    }
    gpu_vertices(&data)
}

/// Triangle fan for a vertex marker: the vertex itself as the hub, then
/// `segments + 1` rim points at `radius` around its world position.
///
/// Each rim point is `(radius, 0)` placed through a parent transform of
/// `{world, i * TAU / segments, 1}`, so the rim closes on itself.
pub fn marker_vertices(
    record: &VertexRecord,
    world: Vector2,
    color: Vector3,
    radius: f64,
    segments: usize,
) -> RenderResult<Vec<GpuVertex>> {
    let segments = segments.max(1);
    let mut data = Vec::with_capacity((segments + 2) * VERTEX_SIZE);

    let mut hub = *record;
    recolor(&mut hub, color);
    data.extend_from_slice(&hub);

    for i in 0..=segments {
        let mut rim = [0.0; VERTEX_SIZE];
        rim[0] = radius;
        recolor(&mut rim, color);
        rim[PARENT_POSITION_INDEX] = world.x;
        rim[PARENT_POSITION_INDEX + 1] = world.y;
        rim[PARENT_ROTATION_INDEX] = i as f64 * TAU / segments as f64;
        rim[PARENT_SCALE_INDEX] = 1.0;
        data.extend_from_slice(&rim);
    }
    gpu_vertices(&data)
}

/// Plan the draw calls for every visible shape of `scene`, in draw order.
pub fn plan_frame(scene: &Scene, config: &RenderConfig) -> RenderResult<Frame> {
    let mut draw_calls = Vec::new();

    for shape in scene.shapes_ordered().filter(|s| !s.is_hidden()) {
        let data = shape.data();
        draw_calls.push(DrawCall {
            primitive: shape.draw_mode().into(),
            vertices: gpu_vertices(&data)?,
        });

        if shape.is_highlighted() {
            draw_calls.push(DrawCall {
                primitive: Primitive::LineLoop,
                vertices: outline_vertices(&data, config.highlight_color)?,
            });
            for index in 0..shape.vertex_count() {
                draw_calls.push(DrawCall {
                    primitive: Primitive::TriangleFan,
                    vertices: marker_vertices(
                        &shape.vertex_data(index)?,
                        shape.world_position(index)?,
                        config.highlight_color,
                        config.point_radius,
                        config.marker_segments,
                    )?,
                });
            }
        }
    }

    log::debug!("planned frame with {} draw calls", draw_calls.len());
    Ok(Frame {
        clear_color: to_rgb(config.clear_color),
        draw_calls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Renderer;
    use shapekit_core::Transform;
    use std::f64::consts::FRAC_PI_2;

    #[derive(Default)]
    struct RecordingRenderer {
        cleared: Vec<[f32; 3]>,
        calls: Vec<(Primitive, usize)>,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, color: [f32; 3]) -> RenderResult<()> {
            self.cleared.push(color);
            Ok(())
        }

        fn draw(&mut self, call: &DrawCall) -> RenderResult<()> {
            self.calls.push((call.primitive, call.vertex_count()));
            Ok(())
        }
    }

    #[test]
    fn test_plan_plain_scene() {
        let mut scene = Scene::new();
        scene.create_square(Transform::origin(), 1.0);
        let hidden = scene.create_rectangle(Transform::origin(), 2.0, 1.0);
        scene.create_line(Transform::origin(), 1.0);
        scene.get_shape_mut(hidden).unwrap().set_hidden(true);

        let frame = plan_frame(&scene, &RenderConfig::default()).unwrap();
        let calls: Vec<(Primitive, usize)> = frame
            .draw_calls
            .iter()
            .map(|c| (c.primitive, c.vertex_count()))
            .collect();
        assert_eq!(calls, vec![(Primitive::TriangleFan, 4), (Primitive::LineStrip, 2)]);
        assert_eq!(frame.clear_color, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_highlight_adds_outline_and_markers() {
        let mut scene = Scene::new();
        let id = scene.create_rectangle(Transform::origin(), 2.0, 1.0);
        scene.highlight_only(Some(id));
        let config = RenderConfig::default();

        let frame = plan_frame(&scene, &config).unwrap();
        assert_eq!(frame.draw_calls.len(), 1 + 1 + 4);
        let outline = &frame.draw_calls[1];
        assert_eq!(outline.primitive, Primitive::LineLoop);
        assert!(outline.vertices.iter().all(|v| v.color == to_rgb(config.highlight_color)));
        for marker in &frame.draw_calls[2..] {
            assert_eq!(marker.primitive, Primitive::TriangleFan);
            assert_eq!(marker.vertex_count(), config.marker_segments + 2);
        }
    }

    #[test]
    fn test_marker_rim_surrounds_world_position() {
        let record = [1.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.0, FRAC_PI_2, 2.0];
        let world = Vector2::new(5.0, 2.0);
        let vertices =
            marker_vertices(&record, world, Vector3::new(1.0, 0.0, 0.0), 0.1, 4).unwrap();
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [1.0, 0.0]);
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0]);
        for (i, rim) in vertices[1..].iter().enumerate() {
            assert_eq!(rim.position, [0.1, 0.0]);
            assert_eq!(rim.parent_position, [5.0, 2.0]);
            assert_eq!(rim.parent_scale, 1.0);
            assert!((rim.parent_rotation as f64 - i as f64 * FRAC_PI_2).abs() < 1e-6);
        }
    }

    #[test]
    fn test_renderer_executes_frame_in_order() {
        let mut scene = Scene::new();
        let id = scene.create_line(Transform::origin(), 1.0);
        scene.create_square(Transform::origin(), 1.0);
        scene.highlight_only(Some(id));

        let frame = plan_frame(&scene, &RenderConfig::default()).unwrap();
        let mut renderer = RecordingRenderer::default();
        renderer.render(&frame).unwrap();

        assert_eq!(renderer.cleared.len(), 1);
        assert_eq!(
            renderer.calls,
            vec![
                (Primitive::LineStrip, 2),
                (Primitive::LineLoop, 2),
                (Primitive::TriangleFan, 10),
                (Primitive::TriangleFan, 10),
                (Primitive::TriangleFan, 4),
            ]
        );
    }

    #[test]
    fn test_draw_call_bytes() {
        let mut scene = Scene::new();
        scene.create_square(Transform::origin(), 1.0);
        let frame = plan_frame(&scene, &RenderConfig::default()).unwrap();
        assert_eq!(frame.draw_calls[0].as_bytes().len(), 4 * crate::layout::STRIDE);
    }
}
