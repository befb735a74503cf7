//! GPU vertex layout.

use bytemuck::{Pod, Zeroable};
use shapekit_core::VERTEX_SIZE;
use shapekit_core::render_data::{
    B, G, PARENT_POSITION_INDEX, PARENT_ROTATION_INDEX, PARENT_SCALE_INDEX, R,
};

use crate::renderer::{RenderResult, RendererError};

/// Bytes per float attribute component.
pub const FLOAT_SIZE: usize = 4;

/// Bytes between consecutive vertices.
pub const STRIDE: usize = VERTEX_SIZE * FLOAT_SIZE;

/// One vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
    pub parent_position: [f32; 2],
    pub parent_rotation: f32,
    pub parent_scale: f32,
}

const _: () = assert!(std::mem::size_of::<GpuVertex>() == STRIDE);

impl GpuVertex {
    /// Narrow one record of exactly [`VERTEX_SIZE`] floats.
    pub fn from_record(record: &[f64]) -> RenderResult<Self> {
        if record.len() != VERTEX_SIZE {
            return Err(RendererError::InvalidSequence { len: record.len() });
        }
        Ok(Self {
            position: [record[0] as f32, record[1] as f32],
            color: [record[R] as f32, record[G] as f32, record[B] as f32],
            parent_position: [
                record[PARENT_POSITION_INDEX] as f32,
                record[PARENT_POSITION_INDEX + 1] as f32,
            ],
            parent_rotation: record[PARENT_ROTATION_INDEX] as f32,
            parent_scale: record[PARENT_SCALE_INDEX] as f32,
        })
    }
}

/// Narrow a whole render sequence.
pub fn gpu_vertices(sequence: &[f64]) -> RenderResult<Vec<GpuVertex>> {
    if sequence.len() % VERTEX_SIZE != 0 {
        return Err(RendererError::InvalidSequence {
            len: sequence.len(),
        });
    }
    sequence
        .chunks_exact(VERTEX_SIZE)
        .map(GpuVertex::from_record)
        .collect()
}

/// A named vertex attribute within [`GpuVertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input name.
    pub name: &'static str,
    /// Float components.
    pub components: usize,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
}

/// Attribute table for binding [`GpuVertex`] buffers.
pub const ATTRIBUTES: [VertexAttribute; 5] = [
    VertexAttribute {
        name: "vPosition",
        components: 2,
        offset: 0,
    },
    VertexAttribute {
        name: "vColor",
        components: 3,
        offset: R * FLOAT_SIZE,
    },
    VertexAttribute {
        name: "vParentPosition",
        components: 2,
        offset: PARENT_POSITION_INDEX * FLOAT_SIZE,
    },
    VertexAttribute {
        name: "vParentRotation",
        components: 1,
        offset: PARENT_ROTATION_INDEX * FLOAT_SIZE,
    },
    VertexAttribute {
        name: "vParentScale",
        components: 1,
        offset: PARENT_SCALE_INDEX * FLOAT_SIZE,
    },
];
