//! Boolean union of expanded pieces
//!
//! The expander only needs "union these polygons and tell me which result
//! contours are outers and which are holes". [`PolygonUnion`] is that seam;
//! [`GeoUnion`] fills it with `geo`'s boolean operations.

use crate::geometry::{signed_area, Polygon, EPSILON};
use geo::orient::Direction;
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Orient, Polygon as GeoPolygon};
use kurbo::Point;
use thiserror::Error;

/// Whether a contour adds ink or removes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourRole {
    /// Positive signed area
    Outer,
    /// Negative signed area
    Hole,
}

/// One closed result contour; the closing edge is implicit
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Polygon,
    pub role: ContourRole,
}

#[derive(Debug, Error, PartialEq)]
pub enum UnionError {
    #[error("polygon {0} has non-finite coordinates")]
    NonFinite(usize),
    #[error("no polygon with usable area")]
    NoUsableInput,
    #[error("union produced no contours")]
    EmptyResult,
}

/// Union of a set of closed polygons under the nonzero rule.
///
/// Implementations return a flat list of contours with outers wound
/// counter-clockwise and holes clockwise (shoelace sign, y-up).
pub trait PolygonUnion {
    fn union(&self, polygons: &[Polygon]) -> Result<Vec<Contour>, UnionError>;
}

/// `geo` boolean-ops backed union.
///
/// `geo` reads each operand under the even-odd rule, so every input
/// polygon must be simple for the result to match the nonzero union.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoUnion;

/// Input coordinates are rounded to this grid so that edges shared by
/// neighbouring pieces coincide exactly
const SNAP_GRID: f64 = 1e-9;

fn snap(v: f64) -> f64 {
    (v / SNAP_GRID).round() * SNAP_GRID
}

fn to_geo(points: &[Point]) -> GeoPolygon<f64> {
    let coords: Vec<Coord<f64>> = points
        .iter()
        .map(|p| Coord {
            x: snap(p.x),
            y: snap(p.y),
        })
        .collect();
    GeoPolygon::new(LineString::new(coords), vec![]).orient(Direction::Default)
}

/// Ring coordinates without the repeated closing point
fn ring_points(ring: &LineString<f64>) -> Polygon {
    let mut points: Polygon = ring.coords().map(|c| Point::new(c.x, c.y)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Union pieces pairwise, level by level, so operands stay similar in size
fn balanced_union(mut layer: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64> {
    while layer.len() > 1 {
        let mut next = Vec::with_capacity(layer.len().div_ceil(2));
        let mut iter = layer.into_iter();
        while let Some(a) = iter.next() {
            match iter.next() {
                Some(b) => next.push(a.union(&b)),
                None => next.push(a),
            }
        }
        layer = next;
    }
    layer.pop().unwrap_or_else(|| MultiPolygon::new(vec![]))
}

impl PolygonUnion for GeoUnion {
    fn union(&self, polygons: &[Polygon]) -> Result<Vec<Contour>, UnionError> {
        let mut pieces = Vec::with_capacity(polygons.len());
        for (i, poly) in polygons.iter().enumerate() {
            if poly.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(UnionError::NonFinite(i));
            }
            if poly.len() < 3 || signed_area(poly).abs() < EPSILON {
                continue;
            }
            pieces.push(MultiPolygon::new(vec![to_geo(poly)]));
        }
        if pieces.is_empty() {
            return Err(UnionError::NoUsableInput);
        }

        let merged = balanced_union(pieces).orient(Direction::Default);

        let mut contours = Vec::new();
        for poly in merged.iter() {
            let outer = ring_points(poly.exterior());
            if outer.len() >= 3 {
                contours.push(Contour {
                    points: outer,
                    role: ContourRole::Outer,
                });
            }
            for interior in poly.interiors() {
                let hole = ring_points(interior);
                if hole.len() >= 3 {
                    contours.push(Contour {
                        points: hole,
                        role: ContourRole::Hole,
                    });
                }
            }
        }

        if contours.is_empty() {
            return Err(UnionError::EmptyResult);
        }
        Ok(contours)
    }
}
