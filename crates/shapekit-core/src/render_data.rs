//! Flattened per-vertex attribute layout consumed by the rendering backend.
//!
//! Each vertex contributes [`VERTEX_SIZE`] floats in the order
//! `[posX, posY, colorR, colorG, colorB, parentPosX, parentPosY,
//! parentRotation, parentScale]`. Changing this order or width breaks every
//! backend built against it.

use crate::shapes::Shape;

/// Components in a position attribute.
pub const POSITION_SIZE: usize = 2;
/// Components in a color attribute.
pub const COLOR_SIZE: usize = 3;
/// Components in a scalar factor attribute (rotation, scale).
pub const FACTOR_SIZE: usize = 1;

/// Offset of the red channel within a record.
pub const R: usize = POSITION_SIZE;
/// Offset of the green channel within a record.
pub const G: usize = POSITION_SIZE + 1;
/// Offset of the blue channel within a record.
pub const B: usize = POSITION_SIZE + 2;
pub const PARENT_POSITION_INDEX: usize = POSITION_SIZE + COLOR_SIZE;
pub const PARENT_ROTATION_INDEX: usize = PARENT_POSITION_INDEX + POSITION_SIZE;
pub const PARENT_SCALE_INDEX: usize = PARENT_ROTATION_INDEX + FACTOR_SIZE;

/// Floats per vertex record.
pub const VERTEX_SIZE: usize = PARENT_SCALE_INDEX + FACTOR_SIZE;

/// One vertex's attribute record.
pub type VertexRecord = [f64; VERTEX_SIZE];

/// Concatenate the records of every visible shape, in list order.
pub fn project<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Vec<f64> {
    let mut sequence = Vec::new();
    for shape in shapes.into_iter().filter(|s| !s.is_hidden()) {
        sequence.extend(shape.data());
    }
    sequence
}

/// Number of vertex records in a render sequence.
pub fn vertex_count(sequence: &[f64]) -> usize {
    sequence.len() / VERTEX_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Rectangle, Square};
    use crate::transform::Transform;

    #[test]
    fn test_layout_constants() {
        assert_eq!(VERTEX_SIZE, 9);
        assert_eq!((R, G, B), (2, 3, 4));
        assert_eq!(PARENT_POSITION_INDEX, 5);
        assert_eq!(PARENT_ROTATION_INDEX, 7);
        assert_eq!(PARENT_SCALE_INDEX, 8);
    }

    #[test]
    fn test_project_skips_hidden() {
        let square: Shape = Square::new(Transform::origin(), 1.0).into();
        let mut rect: Shape = Rectangle::new(Transform::origin(), 2.0, 1.0).into();
        let line: Shape = Line::new(Transform::origin(), 1.0).into();

        let shapes = vec![square, rect.clone(), line];
        let sequence = project(&shapes);
        assert_eq!(sequence.len(), 9 * (4 + 4 + 2));
        assert_eq!(vertex_count(&sequence), 10);

        rect.set_hidden(true);
        let shapes = vec![shapes[0].clone(), rect, shapes[2].clone()];
        let sequence = project(&shapes);
        assert_eq!(sequence.len(), 9 * (4 + 2));
        assert_eq!(&sequence[..9], &shapes[0].data()[..9]);
        assert_eq!(&sequence[36..], shapes[2].data().as_slice());
    }

    #[test]
    fn test_project_empty() {
        assert!(project(&Vec::<Shape>::new()).is_empty());
    }
}
