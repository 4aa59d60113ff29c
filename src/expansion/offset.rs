//! Polyline offsetting
//!
//! The offset outline is assembled from convex pieces: one quad per
//! segment, one join piece per interior vertex and one cap piece per end.
//! Every piece is counter-clockwise and simple, so where a stroke crosses
//! or folds over itself the overlapping pieces stay ink once the
//! expander's union fuses them with the other strokes.
//!
//! The width may vary along the stroke. Each segment quad then becomes a
//! trapezoid, and joins and caps take the half width at their vertex.

use super::rails::cumulative_lengths;
use crate::geometry::{ensure_ccw, regular_polygon, Polygon, VectorExt, EPSILON};
use crate::style::{CapStyle, JoinStyle};
use kurbo::{Point, Vec2};

/// Miter joins longer than this many half-widths become bevels
pub const MITER_LIMIT: f64 = 4.0;

/// Segments used for round joins and caps
const ROUND_SEGMENTS: usize = 16;

/// Turns below this angle (radians) are closed with a bevel whatever the
/// join style; the difference is far below the flattening tolerance.
const SMOOTH_TURN: f64 = 0.35;

/// Drop consecutive points closer than `EPSILON`
fn dedup(polyline: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(polyline.len());
    for &p in polyline {
        if out.last().is_none_or(|last| last.distance(p) >= EPSILON) {
            out.push(p);
        }
    }
    out
}

/// `[a_right, b_right, b_left, a_left]`
fn segment_quad(a: Point, b: Point, dir: Vec2, half_a: f64, half_b: f64) -> Polygon {
    let n = dir.perpendicular();
    vec![a - n * half_a, b - n * half_b, b + n * half_b, a + n * half_a]
}

fn disc(center: Point, half: f64) -> Polygon {
    regular_polygon(center, half, ROUND_SEGMENTS, 0.0)
}

/// Piece covering the gap on the outside of the turn at `v`
fn join_piece(v: Point, d0: Vec2, d1: Vec2, half: f64, join: JoinStyle) -> Option<Polygon> {
    let cross = d0.cross(d1);
    let turn = cross.atan2(d0.dot(d1)).abs();
    if turn < EPSILON {
        return None;
    }

    // Outer side is the right side on a left turn and vice versa
    let side = if cross > 0.0 { -1.0 } else { 1.0 };
    let n0 = d0.perpendicular() * side;
    let n1 = d1.perpendicular() * side;
    let p0 = v + n0 * half;
    let p1 = v + n1 * half;
    let bevel = || ensure_ccw(vec![v, p0, p1]);

    if turn < SMOOTH_TURN {
        return Some(bevel());
    }

    let piece = match join {
        JoinStyle::Round => disc(v, half),
        JoinStyle::Bevel => bevel(),
        JoinStyle::Miter => {
            let bisector = (n0 + n1).normalized();
            let cos_half = bisector.dot(n0);
            if cos_half < 1.0 / MITER_LIMIT {
                bevel()
            } else {
                let tip = v + bisector * (half / cos_half);
                ensure_ccw(vec![v, p0, tip, p1])
            }
        }
    };
    Some(piece)
}

/// Offset `polyline` to a stroke of full width `width`.
///
/// Returns `None` when there is nothing to offset: fewer than two distinct
/// points, a zero total length, or a non-positive width.
pub fn offset_polyline(
    polyline: &[Point],
    width: f64,
    cap: CapStyle,
    join: JoinStyle,
) -> Option<Vec<Polygon>> {
    offset_variable(polyline, |_| width, cap, join)
}

/// Offset with the full width tapering linearly from `start_width` at the
/// first point to `end_width` at the last, by arc length. Ends are flat.
pub fn offset_tapered(
    polyline: &[Point],
    start_width: f64,
    end_width: f64,
    join: JoinStyle,
) -> Option<Vec<Polygon>> {
    offset_variable(
        polyline,
        |t| start_width + (end_width - start_width) * t,
        CapStyle::Flat,
        join,
    )
}

/// Offset with full width `width_at(t)` at arc-length fraction `t`.
///
/// `None` under the same conditions as [`offset_polyline`], where the
/// width counts as non-positive when it is nowhere above zero.
pub fn offset_variable(
    polyline: &[Point],
    width_at: impl Fn(f64) -> f64,
    cap: CapStyle,
    join: JoinStyle,
) -> Option<Vec<Polygon>> {
    let points = dedup(polyline);
    if points.len() < 2 {
        return None;
    }
    let lengths = cumulative_lengths(&points);
    let total = lengths.last().copied().unwrap_or(0.0);
    if !(total > EPSILON) {
        return None;
    }
    let halves: Vec<f64> = lengths
        .iter()
        .map(|len| width_at(len / total).max(0.0) / 2.0)
        .collect();
    if !halves.iter().any(|&h| h > EPSILON) {
        return None;
    }

    let directions: Vec<Vec2> = points
        .windows(2)
        .map(|w| (w[1] - w[0]).normalized())
        .collect();

    let mut pieces: Vec<Polygon> = points
        .windows(2)
        .zip(halves.windows(2))
        .zip(&directions)
        .map(|((w, h), dir)| segment_quad(w[0], w[1], *dir, h[0], h[1]))
        .collect();

    for (i, pair) in directions.windows(2).enumerate() {
        if let Some(piece) = join_piece(points[i + 1], pair[0], pair[1], halves[i + 1], join) {
            pieces.push(piece);
        }
    }

    if cap == CapStyle::Round {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            pieces.push(disc(first, halves[0]));
            pieces.push(disc(last, halves[halves.len() - 1]));
        }
    }

    Some(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::signed_area;

    #[test]
    fn test_flat_straight_line_is_one_rectangle() {
        let line = [Point::new(0.0, 0.0), Point::new(4.0, 0.0)];
        let pieces = offset_polyline(&line, 1.0, CapStyle::Flat, JoinStyle::Miter).unwrap();
        assert_eq!(pieces.len(), 1);
        let quad = &pieces[0];
        assert_eq!(quad.len(), 4);
        assert!((signed_area(quad) - 4.0).abs() < 1e-12);
        let ys: Vec<f64> = quad.iter().map(|p| p.y).collect();
        assert!(ys.iter().all(|y| (y.abs() - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_round_caps_add_discs() {
        let line = [Point::new(0.0, 0.0), Point::new(4.0, 0.0)];
        let pieces = offset_polyline(&line, 1.0, CapStyle::Round, JoinStyle::Round).unwrap();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[1].len(), ROUND_SEGMENTS);
    }

    #[test]
    fn test_every_piece_is_ccw() {
        let zigzag = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.0),
        ];
        for join in [JoinStyle::Round, JoinStyle::Miter, JoinStyle::Bevel] {
            let pieces = offset_polyline(&zigzag, 0.2, CapStyle::Round, join).unwrap();
            for piece in &pieces {
                assert!(signed_area(piece) > 0.0, "{join:?}");
            }
        }
    }

    #[test]
    fn test_right_angle_miter_tip() {
        let corner = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0)];
        let pieces = offset_polyline(&corner, 1.0, CapStyle::Flat, JoinStyle::Miter).unwrap();
        assert_eq!(pieces.len(), 3);
        // Left turn: the miter sits on the right, at (2.5, -0.5)
        let join = &pieces[2];
        assert!(join.iter().any(|p| p.distance(Point::new(2.5, -0.5)) < 1e-9));
    }

    #[test]
    fn test_sharp_miter_falls_back_to_bevel() {
        let spike = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 0.1)];
        let pieces = offset_polyline(&spike, 1.0, CapStyle::Flat, JoinStyle::Miter).unwrap();
        assert_eq!(pieces[2].len(), 3);
    }

    #[test]
    fn test_degenerate_inputs() {
        let p = Point::new(1.0, 1.0);
        assert!(offset_polyline(&[p, p, p], 1.0, CapStyle::Round, JoinStyle::Round).is_none());
        assert!(offset_polyline(&[p], 1.0, CapStyle::Round, JoinStyle::Round).is_none());
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert!(offset_polyline(&line, 0.0, CapStyle::Flat, JoinStyle::Bevel).is_none());
    }

    #[test]
    fn test_taper_builds_trapezoids() {
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let pieces = offset_tapered(&line, 1.0, 0.5, JoinStyle::Round).unwrap();
        assert_eq!(pieces.len(), 2);
        // half widths 0.5, 0.375, 0.25 along the line
        assert!((pieces[0][0].y + 0.5).abs() < 1e-12);
        assert!((pieces[0][2].y - 0.375).abs() < 1e-12);
        assert!((pieces[1][2].y - 0.25).abs() < 1e-12);
        let area: f64 = pieces.iter().map(|p| signed_area(p)).sum();
        assert!((area - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_tapered_hairpin_keeps_both_legs() {
        // A turn tighter than the stroke: the legs overlap, and every piece
        // stays a simple counter-clockwise polygon
        let hairpin = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 0.2),
            Point::new(0.0, 0.2),
        ];
        let pieces = offset_tapered(&hairpin, 1.0, 0.8, JoinStyle::Miter).unwrap();
        assert_eq!(pieces.len(), 5);
        assert!(pieces.iter().all(|p| signed_area(p) > 0.0));
        assert!(signed_area(&pieces[0]) > 1.8);
        assert!(signed_area(&pieces[2]) > 1.6);
    }

    #[test]
    fn test_taper_to_nothing_is_rejected() {
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert!(offset_tapered(&line, 0.0, 0.0, JoinStyle::Bevel).is_none());
        assert!(offset_tapered(&line, 0.4, 0.0, JoinStyle::Bevel).is_some());
    }

    #[test]
    fn test_collinear_vertices_need_no_join() {
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let pieces = offset_polyline(&line, 1.0, CapStyle::Flat, JoinStyle::Round).unwrap();
        assert_eq!(pieces.len(), 2);
    }
}
