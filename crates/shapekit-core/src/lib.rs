//! Shapekit Core Library
//!
//! Hierarchical 2D geometry model: vectors and rotation, shape transforms,
//! vertex-editable shapes that keep their geometric invariant under
//! single-vertex edits, and the flattened per-vertex layout handed to a
//! rendering backend.

pub mod color;
pub mod error;
pub mod mathx;
pub mod render_data;
pub mod scene;
pub mod shapes;
pub mod transform;
pub mod vector;
pub mod vertex;

pub use error::{GeometryError, GeometryResult};
pub use render_data::{VERTEX_SIZE, VertexRecord};
pub use scene::Scene;
pub use shapes::{DrawMode, Line, Rectangle, Shape, ShapeId, ShapeTrait, Square, Triangle};
pub use transform::Transform;
pub use vector::{Vector2, Vector3};
pub use vertex::Vertex;
