//! Parallel-rail outlines
//!
//! A rail outline walks the polyline once on the left (`+normal * w/2`)
//! and back on the right, as a single closed polygon. It is the fallback
//! when offsetting has nothing to work with, and it always yields a shape
//! for two or more points.

use crate::geometry::{Polygon, VectorExt};
use kurbo::{Point, Vec2};

const DEFAULT_NORMAL: Vec2 = Vec2::new(0.0, 1.0);

/// Unit normal at every vertex.
///
/// The direction is next - current at the first vertex, current - previous
/// at the last, and next - previous in between, rotated 90 degrees
/// counter-clockwise. Zero-length directions fall back to `(0, 1)`.
pub fn vertex_normals(polyline: &[Point]) -> Vec<Vec2> {
    let n = polyline.len();
    if n < 2 {
        return vec![DEFAULT_NORMAL; n];
    }
    (0..n)
        .map(|i| {
            let direction = if i == 0 {
                polyline[1] - polyline[0]
            } else if i == n - 1 {
                polyline[n - 1] - polyline[n - 2]
            } else {
                polyline[i + 1] - polyline[i - 1]
            };
            direction.perpendicular().normalized_or(DEFAULT_NORMAL)
        })
        .collect()
}

/// Running arc length at every vertex, starting at 0
pub fn cumulative_lengths(polyline: &[Point]) -> Vec<f64> {
    let mut total = 0.0;
    let mut out = Vec::with_capacity(polyline.len());
    for (i, p) in polyline.iter().enumerate() {
        if i > 0 {
            total += polyline[i - 1].distance(*p);
        }
        out.push(total);
    }
    out
}

/// Closed outline with full width `width_at(t)` at arc-length fraction `t`.
///
/// A zero-length polyline uses `t = 0` everywhere. Returns `None` for
/// fewer than two points.
pub fn rail_outline(polyline: &[Point], width_at: impl Fn(f64) -> f64) -> Option<Polygon> {
    if polyline.len() < 2 {
        return None;
    }
    let lengths = cumulative_lengths(polyline);
    let total = lengths.last().copied().unwrap_or(0.0);
    let normals = vertex_normals(polyline);

    let mut left = Vec::with_capacity(polyline.len());
    let mut right = Vec::with_capacity(polyline.len());
    for ((p, n), len) in polyline.iter().zip(&normals).zip(&lengths) {
        let t = if total > 0.0 { len / total } else { 0.0 };
        let half = width_at(t).max(0.0) / 2.0;
        left.push(*p + *n * half);
        right.push(*p - *n * half);
    }

    right.reverse();
    left.extend(right);
    Some(left)
}

/// Constant-width rail outline
pub fn constant_rails(polyline: &[Point], width: f64) -> Option<Polygon> {
    rail_outline(polyline, |_| width)
}

/// Linear taper from `start_width` at `t = 0` to `end_width` at `t = 1`
pub fn tapered_rails(polyline: &[Point], start_width: f64, end_width: f64) -> Option<Polygon> {
    rail_outline(polyline, |t| start_width + (end_width - start_width) * t)
}
