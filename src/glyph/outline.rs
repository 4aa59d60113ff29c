//! Filled glyph outlines

use crate::geometry::{signed_area, winding_number, BoundingBox, Polygon};
use kurbo::Point;
use serde::Serialize;

/// Closed polygons under the nonzero fill rule.
///
/// Outer contours wind counter-clockwise (positive signed area, y-up) and
/// holes wind clockwise. The closing edge is implicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outline {
    pub polygons: Vec<Polygon>,
}

impl Outline {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(Vec::len).sum()
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.polygons.iter().flatten().copied())
    }

    /// Sum of absolute polygon areas
    pub fn total_area(&self) -> f64 {
        self.polygons.iter().map(|p| signed_area(p).abs()).sum()
    }

    /// Counter-clockwise polygons
    pub fn outers(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.polygons.iter().filter(|p| signed_area(p) > 0.0)
    }

    /// Clockwise polygons
    pub fn holes(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.polygons.iter().filter(|p| signed_area(p) < 0.0)
    }

    /// Total winding of all polygons around `point`
    pub fn winding_at(&self, point: Point) -> i32 {
        self.polygons.iter().map(|p| winding_number(p, point)).sum()
    }

    /// Whether `point` is inked under the nonzero rule
    pub fn contains(&self, point: Point) -> bool {
        self.winding_at(point) != 0
    }

    pub fn outer_count(&self) -> usize {
        self.outers().count()
    }

    pub fn hole_count(&self) -> usize {
        self.holes().count()
    }
}
