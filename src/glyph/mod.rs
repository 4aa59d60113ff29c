//! Glyph data model
//!
//! A glyph is produced once per generation run and never edited afterwards:
//! the skeleton generator builds a [`Skeleton`], the expander turns it into
//! an [`Outline`], and the orchestrator wraps both in a [`Glyph`].

pub mod decoration;
pub mod outline;
pub mod stroke;

pub use decoration::{Decoration, DecorationKind};
pub use outline::Outline;
pub use stroke::{CubicBezier, Stroke};

use crate::geometry::BoundingBox;
use kurbo::{Affine, Point};
use serde::Serialize;

/// Centre-line representation of a glyph before stroke expansion
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skeleton {
    pub strokes: Vec<Stroke>,
    pub decorations: Vec<Decoration>,
    /// Provenance only; expansion never looks at it
    pub template_name: String,
}

impl Skeleton {
    pub fn new(strokes: Vec<Stroke>, decorations: Vec<Decoration>) -> Self {
        Self {
            strokes,
            decorations,
            template_name: String::new(),
        }
    }

    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    /// Bounds of every stroke control point and decoration position
    pub fn bounds(&self) -> BoundingBox {
        let stroke_points = self.strokes.iter().flat_map(|s| s.points());
        let decoration_points = self.decorations.iter().map(|d| d.position());
        BoundingBox::from_points(stroke_points.chain(decoration_points))
    }

    /// Apply one affine transform to every stroke and decoration
    pub fn transformed(&self, transform: Affine) -> Skeleton {
        Skeleton {
            strokes: self.strokes.iter().map(|s| s.transformed(transform)).collect(),
            decorations: self
                .decorations
                .iter()
                .map(|d| d.transformed(transform))
                .collect(),
            template_name: self.template_name.clone(),
        }
    }

    /// Start and end points of every stroke, in stroke order
    pub fn endpoints(&self) -> Vec<Point> {
        self.strokes
            .iter()
            .filter_map(|s| s.endpoints())
            .flat_map(|(a, b)| [a, b])
            .collect()
    }
}

/// A single generated glyph: label, skeleton and expanded outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glyph {
    /// `'A'..='Z'`
    pub label: char,
    /// 0..26, matching the label's position in the alphabet
    pub index: usize,
    pub skeleton: Skeleton,
    pub outline: Outline,
    pub template_name: String,
}

impl Glyph {
    pub fn bounds(&self) -> BoundingBox {
        self.outline.bounds()
    }
}
