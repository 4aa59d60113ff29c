//! Glyph validation
//!
//! Advisory checks over finished glyphs: ink coverage, component count,
//! empty outlines and near-duplicate pairs. Findings are reported, never
//! acted on; generation does not retry or reject glyphs.

use crate::core::settings::ValidationSettings;
use crate::geometry::{vertex_centroid, BoundingBox, EPSILON};
use crate::glyph::{Glyph, Outline};
use serde::Serialize;
use std::fmt;

/// Length of [`feature_vector`]'s output
pub const FEATURE_COUNT: usize = 8;

/// One advisory finding for a glyph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum ValidationIssue {
    InkTooLow { coverage: f64, min: f64 },
    InkTooHigh { coverage: f64, max: f64 },
    TooManyComponents { count: usize, max: usize },
    EmptyOutline,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::InkTooLow { coverage, min } => write!(
                f,
                "ink coverage too low: {:.2}% < {:.0}%",
                coverage * 100.0,
                min * 100.0
            ),
            ValidationIssue::InkTooHigh { coverage, max } => write!(
                f,
                "ink coverage too high: {:.2}% > {:.0}%",
                coverage * 100.0,
                max * 100.0
            ),
            ValidationIssue::TooManyComponents { count, max } => {
                write!(f, "too many components: {count} > {max}")
            }
            ValidationIssue::EmptyOutline => write!(f, "glyph has no outline polygons"),
        }
    }
}

/// Result of validating one glyph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub label: char,
    pub index: usize,
    pub ink_coverage: f64,
    pub components: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Two glyphs whose feature vectors are closer than the threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarPair {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
}

/// Fraction of `reference` covered by the outline's polygons, capped at 1
pub fn estimate_ink_coverage(outline: &Outline, reference: &BoundingBox) -> f64 {
    let area = reference.area();
    if area < EPSILON {
        return 0.0;
    }
    (outline.total_area() / area).min(1.0)
}

/// Describe a glyph by eight numbers for similarity checks.
///
/// Ink coverage of its own bounds, aspect ratio, polygon count, vertex
/// centroid normalized to the bounds, stroke count, decoration count and
/// stroke count again. All zeros for an outline with no area.
pub fn feature_vector(glyph: &Glyph) -> [f64; FEATURE_COUNT] {
    let outline = &glyph.outline;
    let bounds = outline.bounds();
    if bounds.area() < EPSILON {
        return [0.0; FEATURE_COUNT];
    }

    let width = bounds.width().max(EPSILON);
    let height = bounds.height().max(EPSILON);
    let points: Vec<_> = outline.polygons.iter().flatten().copied().collect();
    let (cx, cy) = match vertex_centroid(&points) {
        Some(c) => ((c.x - bounds.x_min) / width, (c.y - bounds.y_min) / height),
        None => (0.5, 0.5),
    };
    let strokes = glyph.skeleton.strokes.len() as f64;

    [
        estimate_ink_coverage(outline, &bounds),
        width / height,
        outline.len() as f64,
        cx,
        cy,
        strokes,
        glyph.skeleton.decorations.len() as f64,
        strokes,
    ]
}

/// Euclidean distance between feature vectors
pub fn feature_distance(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Check one glyph against the coverage and complexity thresholds
pub fn validate_glyph(
    glyph: &Glyph,
    reference: &BoundingBox,
    thresholds: &ValidationSettings,
) -> ValidationReport {
    let outline = &glyph.outline;
    let ink = estimate_ink_coverage(outline, reference);
    let mut issues = Vec::new();

    if ink < thresholds.min_ink_coverage {
        issues.push(ValidationIssue::InkTooLow {
            coverage: ink,
            min: thresholds.min_ink_coverage,
        });
    }
    if ink > thresholds.max_ink_coverage {
        issues.push(ValidationIssue::InkTooHigh {
            coverage: ink,
            max: thresholds.max_ink_coverage,
        });
    }
    if outline.len() > thresholds.max_components {
        issues.push(ValidationIssue::TooManyComponents {
            count: outline.len(),
            max: thresholds.max_components,
        });
    }
    if outline.is_empty() {
        issues.push(ValidationIssue::EmptyOutline);
    }

    ValidationReport {
        label: glyph.label,
        index: glyph.index,
        ink_coverage: ink,
        components: outline.len(),
        issues,
    }
}

/// Every pair of glyphs whose feature distance is below `threshold`
pub fn check_distinctiveness(glyphs: &[Glyph], threshold: f64) -> Vec<SimilarPair> {
    let vectors: Vec<_> = glyphs.iter().map(feature_vector).collect();
    let mut similar = Vec::new();
    for (i, a) in vectors.iter().enumerate() {
        for (j, b) in vectors.iter().enumerate().skip(i + 1) {
            let distance = feature_distance(a, b);
            if distance < threshold {
                similar.push(SimilarPair {
                    first: i,
                    second: j,
                    distance,
                });
            }
        }
    }
    similar
}
