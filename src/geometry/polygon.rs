//! Closed polygon helpers
//!
//! A polygon is an ordered list of vertices with an implied closing edge.
//! Orientation follows the usual math convention: positive signed area is
//! counter-clockwise with y pointing up.

use kurbo::Point;
use std::f64::consts::TAU;

pub type Polygon = Vec<Point>;

/// Signed area via the shoelace formula (CCW > 0)
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        area += p.x * q.y - q.x * p.y;
    }
    area / 2.0
}

pub fn is_ccw(points: &[Point]) -> bool {
    signed_area(points) > 0.0
}

/// Reverse the vertex order of a clockwise polygon
pub fn ensure_ccw(mut points: Polygon) -> Polygon {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}

/// Reverse the vertex order of a counter-clockwise polygon
pub fn ensure_cw(mut points: Polygon) -> Polygon {
    if signed_area(&points) > 0.0 {
        points.reverse();
    }
    points
}

/// Regular polygon approximating a circle, first vertex at `phase` radians
pub fn regular_polygon(center: Point, radius: f64, segments: usize, phase: f64) -> Polygon {
    (0..segments)
        .map(|i| {
            let angle = phase + TAU * i as f64 / segments as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Winding number of the closed polygon around `point`.
///
/// Counter-clockwise polygons give +1 inside, clockwise ones -1, and 0
/// outside. Points exactly on an edge may count either way.
pub fn winding_number(points: &[Point], point: Point) -> i32 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut winding = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let side = (b.x - a.x) * (point.y - a.y) - (point.x - a.x) * (b.y - a.y);
        if a.y <= point.y {
            if b.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Mean of the vertices
pub fn vertex_centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Some(Point::new(sum_x / n, sum_y / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_signed_area_orientation() {
        let square = unit_square();
        assert_eq!(signed_area(&square), 1.0);
        let mut reversed = square.clone();
        reversed.reverse();
        assert_eq!(signed_area(&reversed), -1.0);
    }

    #[test]
    fn test_degenerate_area_is_zero() {
        assert_eq!(signed_area(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_ensure_orientation() {
        let mut cw = unit_square();
        cw.reverse();
        assert!(is_ccw(&ensure_ccw(cw.clone())));
        assert!(!is_ccw(&ensure_cw(unit_square())));
    }

    #[test]
    fn test_regular_polygon_approximates_circle() {
        let circle = regular_polygon(Point::new(1.0, 1.0), 2.0, 12, 0.0);
        assert_eq!(circle.len(), 12);
        assert!(is_ccw(&circle));
        for p in &circle {
            assert!((p.distance(Point::new(1.0, 1.0)) - 2.0).abs() < 1e-12);
        }
        // Inscribed 12-gon area is 3 r^2
        assert!((signed_area(&circle) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_winding_number_follows_orientation() {
        let square = unit_square();
        let inside = Point::new(0.5, 0.5);
        assert_eq!(winding_number(&square, inside), 1);
        assert_eq!(winding_number(&square, Point::new(1.5, 0.5)), 0);
        let mut cw = square.clone();
        cw.reverse();
        assert_eq!(winding_number(&cw, inside), -1);
        assert_eq!(winding_number(&square[..2], inside), 0);
    }

    #[test]
    fn test_vertex_centroid() {
        assert_eq!(vertex_centroid(&unit_square()), Some(Point::new(0.5, 0.5)));
        assert_eq!(vertex_centroid(&[]), None);
    }
}
