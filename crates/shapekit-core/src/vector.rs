//! Two- and three-component vectors.
//!
//! [`Vector2`] is a plain value: change notification for vertex positions
//! is dispatched by the owning shape (see [`crate::shapes::Shape::set_vertex_position`]),
//! not by the vector itself.

use crate::mathx;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector or point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// First quadrant multiplier `(1, 1)`.
    pub const Q1: Vector2 = Vector2::new(1.0, 1.0);
    /// Second quadrant multiplier `(-1, 1)`.
    pub const Q2: Vector2 = Vector2::new(-1.0, 1.0);
    /// Third quadrant multiplier `(-1, -1)`.
    pub const Q3: Vector2 = Vector2::new(-1.0, -1.0);
    /// Fourth quadrant multiplier `(1, -1)`.
    pub const Q4: Vector2 = Vector2::new(1.0, -1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Set both components.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Flatten to `[x, y]`.
    pub fn data(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Rotate in place by `angle` radians about `origin`.
    pub fn rotate(&mut self, angle: f64, origin: Vector2) {
        *self = mathx::rotate2(*self, angle, origin);
    }

    /// Scale both components in place.
    pub fn scale(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }

    pub fn scale_x(&mut self, factor: f64) {
        self.x *= factor;
    }

    pub fn scale_y(&mut self, factor: f64) {
        self.y *= factor;
    }

    /// Component-wise product.
    pub fn mul_components(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    /// Euclidean distance from the origin.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive X axis, in radians.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Extend with `z = 0`.
    pub fn as3(&self) -> Vector3 {
        Vector3::new(self.x, self.y, 0.0)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// A 3D vector, also used for RGB colors with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Flatten to `[x, y, z]`.
    pub fn data(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Drop the Z component.
    pub fn as2(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_add_and_sub_are_pure() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_scale_per_axis() {
        let mut v = Vector2::new(2.0, 3.0);
        v.scale_x(2.0);
        assert_eq!(v, Vector2::new(4.0, 3.0));
        v.scale_y(-1.0);
        assert_eq!(v, Vector2::new(4.0, -3.0));
        v.scale(0.5);
        assert_eq!(v, Vector2::new(2.0, -1.5));
    }

    #[test]
    fn test_rotate_in_place() {
        let mut v = Vector2::new(2.0, 1.0);
        v.rotate(PI, Vector2::new(1.0, 1.0));
        assert!((v.x - 0.0).abs() < TOLERANCE);
        assert!((v.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_quadrant_multipliers() {
        let v = Vector2::new(3.0, 2.0);
        assert_eq!(v.mul_components(Vector2::Q2), Vector2::new(-3.0, 2.0));
        assert_eq!(v.mul_components(Vector2::Q3), Vector2::new(-3.0, -2.0));
        assert_eq!(v.mul_components(Vector2::Q4), Vector2::new(3.0, -2.0));
    }

    #[test]
    fn test_conversions() {
        let v = Vector2::new(1.5, -2.0);
        assert_eq!(v.as3(), Vector3::new(1.5, -2.0, 0.0));
        assert_eq!(v.as3().as2(), v);
        let p: Point = v.into();
        assert_eq!(Vector2::from(p), v);
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).data(), [1.0, 2.0, 3.0]);
    }
}
