//! Shapekit Render Library
//!
//! Turns a [`shapekit_core::Scene`] into backend-agnostic draw calls over a
//! fixed 36-byte vertex layout. GPU setup, shader compilation and frame
//! pacing belong to the [`Renderer`] implementation.

mod config;
mod frame;
mod layout;
mod renderer;

pub use config::RenderConfig;
pub use frame::{DrawCall, Frame, Primitive, marker_vertices, outline_vertices, plan_frame};
pub use layout::{ATTRIBUTES, FLOAT_SIZE, GpuVertex, STRIDE, VertexAttribute, gpu_vertices};
pub use renderer::{RenderResult, Renderer, RendererError};
