//! Rigid placement of a shape in its parent space.

use crate::vector::Vector2;
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// Position, rotation (radians) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector2,
    pub rotation: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::origin()
    }
}

impl Transform {
    pub fn new(position: Vector2, rotation: f64, scale: f64) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// The identity transform `{(0, 0), 0, 1}`.
    pub const fn origin() -> Self {
        Self {
            position: Vector2::zero(),
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Translation only.
    pub fn at(position: Vector2) -> Self {
        Self {
            position,
            ..Self::origin()
        }
    }

    /// The affine map from local to parent space: scale, then rotate about
    /// the local origin, then translate.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(kurbo::Vec2::from(self.position))
            * Affine::rotate(self.rotation)
            * Affine::scale(self.scale)
    }

    /// Map a local point into parent space.
    pub fn apply(&self, local: Vector2) -> Vector2 {
        (self.to_affine() * Point::from(local)).into()
    }
}
