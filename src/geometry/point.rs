//! Vector helpers for glyph geometry
//!
//! kurbo's `Vec2` already covers arithmetic, dot and cross products and
//! interpolation. The helpers here add the degenerate-safe variants the
//! stroke pipeline relies on.

use kurbo::Vec2;

/// Lengths below this are treated as zero
pub const EPSILON: f64 = 1e-12;

/// Extra vector operations used by the skeleton and expansion code
pub trait VectorExt {
    /// Unit vector in the same direction, or `Vec2::ZERO` for a zero vector
    fn normalized(self) -> Vec2;

    /// Unit vector in the same direction, or `fallback` for a zero vector
    fn normalized_or(self, fallback: Vec2) -> Vec2;

    /// 90-degree counter-clockwise rotation
    fn perpendicular(self) -> Vec2;

    /// Rotate by `angle` radians (counter-clockwise)
    fn rotated(self, angle: f64) -> Vec2;
}

impl VectorExt for Vec2 {
    fn normalized(self) -> Vec2 {
        self.normalized_or(Vec2::ZERO)
    }

    fn normalized_or(self, fallback: Vec2) -> Vec2 {
        let len = self.hypot();
        if len < EPSILON {
            fallback
        } else {
            self / len
        }
    }

    fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    fn rotated(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_normalized_zero_vector() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        assert_eq!(
            Vec2::new(0.0, 1e-14).normalized_or(Vec2::new(0.0, 1.0)),
            Vec2::new(0.0, 1.0)
        );
    }

    #[test]
    fn test_normalized_length() {
        let v = Vec2::new(3.0, 4.0).normalized();
        assert!((v.hypot() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_perpendicular_is_left_turn() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(v.perpendicular(), Vec2::new(0.0, 1.0));
        assert_eq!(v.dot(v.perpendicular()), 0.0);
        assert!(v.cross(v.perpendicular()) > 0.0);
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let r = Vec2::new(2.0, 0.0).rotated(FRAC_PI_2);
        assert!(r.x.abs() < 1e-12);
        assert!((r.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_arithmetic_from_kurbo() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!((b - a).hypot(), 5.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(2.5, 4.0));
        assert_eq!(a + Vec2::new(1.0, 1.0), Point::new(2.0, 3.0));
    }
}
