//! Curve constructors used by the skeleton generator and component library

use kurbo::{CubicBez, Point, Vec2};

/// Straight segment with control points at 1/3 and 2/3
pub fn make_line(p0: Point, p1: Point) -> CubicBez {
    CubicBez::new(p0, p0.lerp(p1, 1.0 / 3.0), p0.lerp(p1, 2.0 / 3.0), p1)
}

/// Left-hand perpendicular of the chord, same length as the chord
fn chord_perp(start: Point, end: Point) -> Vec2 {
    let chord = end - start;
    Vec2::new(-chord.y, chord.x)
}

/// Single-bow arc from `start` to `end`.
///
/// Positive `bulge` bows left of the direction of travel, negative bows
/// right, zero is a straight line. The control points sit at 1/3 and 2/3
/// of the chord, pushed sideways by `0.8 * bulge` chord lengths.
pub fn make_arc(start: Point, end: Point, bulge: f64) -> CubicBez {
    let offset = chord_perp(start, end) * (bulge * 0.8);
    CubicBez::new(
        start,
        start.lerp(end, 1.0 / 3.0) + offset,
        start.lerp(end, 2.0 / 3.0) + offset,
        end,
    )
}

/// S-shaped segment: control points pushed to opposite sides of the chord
pub fn make_s_curve(start: Point, end: Point, amplitude: f64) -> CubicBez {
    let offset = chord_perp(start, end) * amplitude;
    CubicBez::new(
        start,
        start.lerp(end, 1.0 / 3.0) + offset,
        start.lerp(end, 2.0 / 3.0) - offset,
        end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::{evaluate, flatness};

    #[test]
    fn test_zero_bulge_is_straight() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(make_arc(a, b, 0.0), make_line(a, b));
        assert!(flatness(&make_arc(a, b, 0.0)) < 1e-12);
    }

    #[test]
    fn test_positive_bulge_bows_left() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert!(evaluate(&make_arc(a, b, 0.3), 0.5).y > 0.0);
        assert!(evaluate(&make_arc(a, b, -0.3), 0.5).y < 0.0);
    }

    #[test]
    fn test_arc_control_offset() {
        let arc = make_arc(Point::new(0.0, 0.0), Point::new(3.0, 0.0), 0.5);
        // chord length 3, offset 3 * 0.5 * 0.8
        assert!((arc.p1.y - 1.2).abs() < 1e-12);
        assert!((arc.p2.y - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_s_curve_is_antisymmetric() {
        let s = make_s_curve(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.2);
        assert!((s.p1.y + s.p2.y).abs() < 1e-12);
        assert!(s.p1.y > 0.0);
        let mid = evaluate(&s, 0.5);
        assert!(mid.y.abs() < 1e-12);
    }
}
