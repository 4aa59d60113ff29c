//! Cubic Bezier Math
//!
//! Evaluation, subdivision and adaptive flattening for the glyph pipeline.
//! Curves are kurbo's `CubicBez`; the functions here spell out the exact
//! flattening and normal conventions the stroke expander depends on, so
//! output stays identical regardless of kurbo's own approximations.

mod construct;

pub use construct::{make_arc, make_line, make_s_curve};

use crate::geometry::EPSILON;
use kurbo::{CubicBez, Point, Vec2};

/// Subdivision stops at this depth even if the flatness test still fails
const MAX_FLATTEN_DEPTH: u32 = 16;

/// Default sample count for [`arc_length`]
pub const ARC_LENGTH_STEPS: usize = 32;

/// Evaluate the curve at `t` in `[0, 1]` (Bernstein form)
pub fn evaluate(curve: &CubicBez, t: f64) -> Point {
    let u = 1.0 - t;
    let p = curve.p0.to_vec2() * (u * u * u)
        + curve.p1.to_vec2() * (3.0 * u * u * t)
        + curve.p2.to_vec2() * (3.0 * u * t * t)
        + curve.p3.to_vec2() * (t * t * t);
    p.to_point()
}

/// First derivative at `t`, not normalized
pub fn tangent(curve: &CubicBez, t: f64) -> Vec2 {
    let u = 1.0 - t;
    (curve.p1 - curve.p0) * (3.0 * u * u)
        + (curve.p2 - curve.p1) * (6.0 * u * t)
        + (curve.p3 - curve.p2) * (3.0 * t * t)
}

/// Unit normal on the left of the direction of travel.
///
/// Falls back to `(0, 1)` where the tangent vanishes.
pub fn normal(curve: &CubicBez, t: f64) -> Vec2 {
    let tan = tangent(curve, t);
    let perp = Vec2::new(-tan.y, tan.x);
    let len = perp.hypot();
    if len < EPSILON {
        Vec2::new(0.0, 1.0)
    } else {
        perp / len
    }
}

/// De Casteljau subdivision at `t`
pub fn split(curve: &CubicBez, t: f64) -> (CubicBez, CubicBez) {
    let p01 = curve.p0.lerp(curve.p1, t);
    let p12 = curve.p1.lerp(curve.p2, t);
    let p23 = curve.p2.lerp(curve.p3, t);
    let p012 = p01.lerp(p12, t);
    let p123 = p12.lerp(p23, t);
    let mid = p012.lerp(p123, t);

    (
        CubicBez::new(curve.p0, p01, p012, mid),
        CubicBez::new(mid, p123, p23, curve.p3),
    )
}

/// Largest distance of `p1`/`p2` from the chord `p0 -> p3`
pub fn flatness(curve: &CubicBez) -> f64 {
    let chord = curve.p3 - curve.p0;
    let chord_len = chord.hypot();
    if chord_len < EPSILON {
        return (curve.p1 - curve.p0).hypot().max((curve.p2 - curve.p0).hypot());
    }
    let n = Vec2::new(-chord.y, chord.x) / chord_len;
    let d1 = (curve.p1 - curve.p0).dot(n).abs();
    let d2 = (curve.p2 - curve.p0).dot(n).abs();
    d1.max(d2)
}

/// Approximate the curve by a polyline.
///
/// Splits at `t = 0.5` until every piece passes the flatness test. The
/// result always starts at `p0` and ends at `p3`; a straight curve gives
/// exactly those two points.
pub fn flatten(curve: &CubicBez, tolerance: f64) -> Vec<Point> {
    let mut out = vec![curve.p0];
    flatten_into(curve, tolerance, 0, &mut out);
    out
}

fn flatten_into(curve: &CubicBez, tolerance: f64, depth: u32, out: &mut Vec<Point>) {
    // NaN flatness compares false and falls through to the depth limit
    if flatness(curve) <= tolerance || depth >= MAX_FLATTEN_DEPTH {
        out.push(curve.p3);
        return;
    }
    let (left, right) = split(curve, 0.5);
    flatten_into(&left, tolerance, depth + 1, out);
    flatten_into(&right, tolerance, depth + 1, out);
}

/// Polyline-sum length estimate over `steps` uniform samples
pub fn arc_length(curve: &CubicBez, steps: usize) -> f64 {
    let steps = steps.max(1);
    let mut total = 0.0;
    let mut prev = curve.p0;
    for i in 1..=steps {
        let cur = evaluate(curve, i as f64 / steps as f64);
        total += prev.distance(cur);
        prev = cur;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curve() -> CubicBez {
        CubicBez::new((0.0, 0.0), (0.2, 0.9), (0.8, -0.4), (1.0, 0.3))
    }

    fn close(a: Point, b: Point, tol: f64) -> bool {
        a.distance(b) < tol
    }

    #[test]
    fn test_evaluate_endpoints() {
        let c = sample_curve();
        assert_eq!(evaluate(&c, 0.0), c.p0);
        assert!(close(evaluate(&c, 1.0), c.p3, 1e-12));
    }

    #[test]
    fn test_evaluate_matches_kurbo() {
        use kurbo::ParamCurve;
        let c = sample_curve();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!(close(evaluate(&c, t), c.eval(t), 1e-12));
        }
    }

    #[test]
    fn test_split_halves_reproduce_curve() {
        let c = sample_curve();
        for &t in &[0.1, 0.25, 0.5, 0.6, 0.9] {
            let (left, right) = split(&c, t);
            assert_eq!(left.p0, c.p0);
            assert_eq!(right.p3, c.p3);
            assert_eq!(left.p3, right.p0);
            assert!(close(left.p3, evaluate(&c, t), 1e-12));

            for i in 0..=8 {
                let s = i as f64 / 8.0;
                assert!(close(evaluate(&left, s), evaluate(&c, s * t), 1e-4));
                assert!(close(
                    evaluate(&right, s),
                    evaluate(&c, t + s * (1.0 - t)),
                    1e-4
                ));
            }
        }
    }

    #[test]
    fn test_normal_is_unit_and_left() {
        let line = make_line(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        let n = normal(&line, 0.5);
        assert!((n.x).abs() < 1e-12);
        assert!((n.y - 1.0).abs() < 1e-12);

        let c = sample_curve();
        for i in 0..=4 {
            let n = normal(&c, i as f64 / 4.0);
            assert!((n.hypot() - 1.0).abs() < 1e-9);
            assert!(n.dot(tangent(&c, i as f64 / 4.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normal_degenerate_fallback() {
        let p = Point::new(1.0, 1.0);
        let dot = CubicBez::new(p, p, p, p);
        assert_eq!(normal(&dot, 0.3), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_flatten_straight_line_is_two_points() {
        let line = make_line(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        for &tol in &[0.001, 0.01, 0.5] {
            let pts = flatten(&line, tol);
            assert_eq!(pts, vec![line.p0, line.p3]);
        }
    }

    #[test]
    fn test_flatten_endpoints_and_tolerance() {
        let c = sample_curve();
        let coarse = flatten(&c, 0.1);
        let fine = flatten(&c, 0.001);
        assert_eq!(coarse.first(), Some(&c.p0));
        assert_eq!(fine.last(), Some(&c.p3));
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn test_flatten_zero_tolerance_terminates() {
        let c = sample_curve();
        let pts = flatten(&c, 0.0);
        assert!(pts.len() <= (1 << MAX_FLATTEN_DEPTH) + 1);
        assert_eq!(pts.last(), Some(&c.p3));
    }

    #[test]
    fn test_arc_length_of_line() {
        let line = make_line(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((arc_length(&line, ARC_LENGTH_STEPS) - 5.0).abs() < 1e-9);
    }
}
