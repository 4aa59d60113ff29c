//! Stroke Expansion
//!
//! Turns a centre-line [`Skeleton`] into a filled [`Outline`]:
//!
//! 1. Flatten each stroke's segments into one polyline.
//! 2. Widen the polyline into simple convex pieces: constant width with
//!    caps and joins, or a linear taper with flat ends.
//! 3. Add decoration shapes.
//! 4. Union every piece so overlaps merge and enclosed counters become
//!    holes, then drop the sliver contours the union leaves along shared
//!    piece edges.
//!
//! Nothing here fails. Offsetting that has nothing to work with falls back
//! to a closed rail outline, and a union that cannot run leaves the pieces as they
//! are (all wound counter-clockwise, so they still fill under nonzero).

pub mod decorations;
pub mod offset;
pub mod rails;
pub mod union;

pub use union::{Contour, ContourRole, GeoUnion, PolygonUnion, UnionError};

use crate::bezier::flatten;
use crate::geometry::{ensure_ccw, signed_area, Polygon};
use crate::glyph::{Decoration, Outline, Skeleton, Stroke};
use crate::style::{AlphabetStyle, WidthMode};
use kurbo::Point;
use tracing::debug;

/// Lower bound on the flattening tolerance
const MIN_TOLERANCE: f64 = 0.01;

/// Flattening tolerance as a fraction of stroke width
const TOLERANCE_PER_WIDTH: f64 = 0.15;

/// Smallest kept union contour, in units of `stroke_width²`
const MIN_CONTOUR_AREA_PER_WIDTH_SQ: f64 = 1e-3;

/// Expands skeletons into outlines for one style
#[derive(Debug, Clone)]
pub struct StrokeExpander<'a, U = GeoUnion> {
    style: &'a AlphabetStyle,
    union: U,
}

impl<'a> StrokeExpander<'a, GeoUnion> {
    pub fn new(style: &'a AlphabetStyle) -> Self {
        Self::with_union(style, GeoUnion)
    }
}

impl<'a, U: PolygonUnion> StrokeExpander<'a, U> {
    /// Expander using a custom union implementation
    pub fn with_union(style: &'a AlphabetStyle, union: U) -> Self {
        Self { style, union }
    }

    pub fn style(&self) -> &AlphabetStyle {
        self.style
    }

    /// Curve flattening tolerance: `max(0.01, stroke_width * 0.15)`
    pub fn flatten_tolerance(&self) -> f64 {
        MIN_TOLERANCE.max(self.style.stroke_width * TOLERANCE_PER_WIDTH)
    }

    /// Union contours with a smaller absolute area are dropped as slivers
    pub fn min_contour_area(&self) -> f64 {
        MIN_CONTOUR_AREA_PER_WIDTH_SQ * self.style.stroke_width.powi(2)
    }

    /// Expand all strokes and decorations into a single outline
    pub fn expand_skeleton(&self, skeleton: &Skeleton) -> Outline {
        let mut pieces: Vec<Polygon> = skeleton
            .strokes
            .iter()
            .flat_map(|s| self.expand_stroke(s))
            .collect();
        pieces.extend(
            skeleton
                .decorations
                .iter()
                .flat_map(|d| self.expand_decoration(d)),
        );
        let pieces: Vec<Polygon> = pieces.into_iter().map(ensure_ccw).collect();

        if pieces.len() < 2 {
            return Outline::new(pieces);
        }

        match self.union.union(&pieces) {
            Ok(contours) => {
                let min_area = self.min_contour_area();
                let total = contours.len();
                let kept: Vec<Polygon> = contours
                    .into_iter()
                    .map(|c| c.points)
                    .filter(|p| signed_area(p).abs() >= min_area)
                    .collect();
                if kept.len() < total {
                    debug!("Dropped {} sliver contours", total - kept.len());
                }
                if kept.is_empty() {
                    debug!("Union left only slivers, keeping the pieces");
                    return Outline::new(pieces);
                }
                Outline::new(kept)
            }
            Err(e) => {
                debug!(
                    "Union of {} pieces failed ({}), keeping them separate",
                    pieces.len(),
                    e
                );
                Outline::new(pieces)
            }
        }
    }

    /// Flatten a stroke into one polyline, dropping each later segment's
    /// duplicated first point
    pub fn stroke_polyline(&self, stroke: &Stroke) -> Vec<Point> {
        let tolerance = self.flatten_tolerance();
        let mut polyline = Vec::new();
        for (i, seg) in stroke.segments.iter().enumerate() {
            let points = flatten(seg, tolerance);
            let skip = usize::from(i > 0);
            polyline.extend(points.into_iter().skip(skip));
        }
        polyline
    }

    /// Pieces for one stroke; empty when the stroke has under two points
    pub fn expand_stroke(&self, stroke: &Stroke) -> Vec<Polygon> {
        let polyline = self.stroke_polyline(stroke);
        if polyline.len() < 2 {
            return Vec::new();
        }
        self.expand_polyline(&polyline)
    }

    /// Widen a polyline according to the style's width mode
    pub fn expand_polyline(&self, polyline: &[Point]) -> Vec<Polygon> {
        let s = self.style;
        match s.width_mode {
            WidthMode::Gradient => {
                let end = s.stroke_width * s.stroke_taper_ratio;
                offset::offset_tapered(polyline, s.stroke_width, end, s.join_style)
                    .unwrap_or_else(|| {
                        debug!(
                            "Tapered offset of {}-point polyline failed, using rails",
                            polyline.len()
                        );
                        rails::tapered_rails(polyline, s.stroke_width, end)
                            .into_iter()
                            .collect()
                    })
            }
            WidthMode::Static => {
                offset::offset_polyline(polyline, s.stroke_width, s.cap_style, s.join_style)
                    .unwrap_or_else(|| {
                        debug!(
                            "Offset of {}-point polyline failed, using rails",
                            polyline.len()
                        );
                        rails::constant_rails(polyline, s.stroke_width)
                            .into_iter()
                            .collect()
                    })
            }
        }
    }

    pub fn expand_decoration(&self, decoration: &Decoration) -> Vec<Polygon> {
        decorations::expand_decoration(decoration, self.style)
    }
}
