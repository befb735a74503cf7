//! Rotation primitive.

use crate::vector::Vector2;

/// A row-major 2x2 matrix `[[a, b], [c, d]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Matrix2 {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    pub fn is_identity(&self) -> bool {
        self.a == 1.0 && self.b == 0.0 && self.c == 0.0 && self.d == 1.0
    }

    pub fn times_vector2(&self, v: Vector2) -> Vector2 {
        Vector2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }
}

/// Rotate `point` by `angle` radians about `origin`.
///
/// An identity rotation returns `point` bit-for-bit; translating into and
/// out of origin-relative space would otherwise round it.
pub fn rotate2(point: Vector2, angle: f64, origin: Vector2) -> Vector2 {
    let rotation = Matrix2::rotation(angle);
    if rotation.is_identity() {
        return point;
    }
    origin + rotation.times_vector2(point - origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(a: Vector2, b: Vector2) {
        assert!(
            (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let points = [
            Vector2::new(1.0, 2.0),
            Vector2::new(-3.5, 0.25),
            Vector2::new(1e6, -1e-6),
        ];
        let origins = [Vector2::zero(), Vector2::new(4.0, -2.0)];
        for p in points {
            for o in origins {
                assert_eq!(rotate2(p, 0.0, o), p);
            }
        }
    }

    #[test]
    fn test_full_turns_return_to_start() {
        let p = Vector2::new(2.0, -7.0);
        let o = Vector2::new(0.5, 0.5);
        for k in 1..4 {
            assert_close(rotate2(p, TAU * k as f64, o), p);
        }
    }

    #[test]
    fn test_inverse_rotation() {
        let p = Vector2::new(-1.25, 3.0);
        let o = Vector2::new(2.0, 1.0);
        for theta in [0.1, 1.0, PI, -2.5, 10.0] {
            assert_close(rotate2(rotate2(p, theta, o), -theta, o), p);
        }
    }

    #[test]
    fn test_quarter_turn_is_counter_clockwise() {
        assert_close(
            rotate2(Vector2::new(1.0, 0.0), FRAC_PI_2, Vector2::zero()),
            Vector2::new(0.0, 1.0),
        );
        assert_close(
            rotate2(Vector2::new(3.0, 1.0), FRAC_PI_2, Vector2::new(1.0, 1.0)),
            Vector2::new(1.0, 3.0),
        );
    }

    #[test]
    fn test_zero_angle_is_exact_far_from_origin() {
        let p = Vector2::new(1e6, -1e-6);
        let o = Vector2::new(4.0, -2.0);
        assert_eq!(rotate2(p, 0.0, o), p);
        assert_eq!(rotate2(p, -0.0, o), p);
        assert!(Matrix2::rotation(0.0).is_identity());
        assert!(!Matrix2::rotation(FRAC_PI_2).is_identity());
    }

    #[test]
    fn test_matrix_times_vector() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.times_vector2(Vector2::new(1.0, 1.0)), Vector2::new(3.0, 7.0));
    }
}
