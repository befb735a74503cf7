//! Named RGB colors as [`Vector3`] channels in `0.0..=1.0`.

use crate::vector::Vector3;
use peniko::Color;

pub fn black() -> Vector3 {
    Vector3::new(0.0, 0.0, 0.0)
}

pub fn red() -> Vector3 {
    Vector3::new(1.0, 0.0, 0.0)
}

pub fn green() -> Vector3 {
    Vector3::new(0.0, 1.0, 0.0)
}

pub fn blue() -> Vector3 {
    Vector3::new(0.0, 0.0, 1.0)
}

pub fn white() -> Vector3 {
    Vector3::new(1.0, 1.0, 1.0)
}

/// Color from 8-bit channels.
pub fn rgb(r: u8, g: u8, b: u8) -> Vector3 {
    Vector3::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

impl From<Color> for Vector3 {
    /// Alpha is dropped.
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        rgb(rgba.r, rgba.g, rgba.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_normalizes() {
        let c = rgb(255, 0, 51);
        assert!((c.x - 1.0).abs() < f64::EPSILON);
        assert!(c.y.abs() < f64::EPSILON);
        assert!((c.z - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_from_peniko_color() {
        let c: Vector3 = Color::from_rgba8(0, 255, 0, 128).into();
        assert_eq!(c, green());
    }
}
