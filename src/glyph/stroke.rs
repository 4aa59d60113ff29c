//! Pen strokes: chains of cubic bezier segments

use kurbo::{Affine, CubicBez, Point};
use serde::Serialize;

/// A single cubic segment, P0 -> P1 -> P2 -> P3
pub type CubicBezier = CubicBez;

/// One continuous pen path.
///
/// Consecutive segments share endpoints (`segments[i].p3 ==
/// segments[i + 1].p0`). Every constructor in the crate builds strokes that
/// way; it is not re-checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stroke {
    pub segments: Vec<CubicBezier>,
}

impl Stroke {
    pub fn new(segments: Vec<CubicBezier>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|s| s.p0)
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|s| s.p3)
    }

    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.start()?, self.end()?))
    }

    /// Every endpoint and control point, segment by segment
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments
            .iter()
            .flat_map(|seg| [seg.p0, seg.p1, seg.p2, seg.p3])
    }

    pub fn transformed(&self, transform: Affine) -> Stroke {
        Stroke {
            segments: self.segments.iter().map(|seg| transform * *seg).collect(),
        }
    }
}
