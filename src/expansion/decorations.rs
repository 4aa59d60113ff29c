//! Decoration shapes
//!
//! Dots, bars, serifs and flourishes become small polygons that join the
//! stroke pieces in the global union.

use super::offset::offset_tapered;
use crate::geometry::{regular_polygon, Polygon, VectorExt};
use crate::glyph::Decoration;
use crate::style::{AlphabetStyle, JoinStyle, SerifStyle, WidthMode};
use kurbo::{Point, Vec2};
use std::f64::consts::PI;

const DOT_SEGMENTS: usize = 12;
const FLARE_SEGMENTS: usize = 8;
const FLOURISH_STEPS: usize = 8;

/// Smallest end width of a calligraphic dot, relative to its start width
const MIN_TAPER: f64 = 0.15;

/// Polygons for one decoration under `style`
pub fn expand_decoration(decoration: &Decoration, style: &AlphabetStyle) -> Vec<Polygon> {
    match *decoration {
        Decoration::Dot { center, radius } => dot(center, radius, style),
        Decoration::Bar {
            center,
            length,
            angle,
        } => vec![bar(center, length, style.stroke_width, angle)],
        Decoration::Serif {
            position,
            size,
            angle,
        } => serif(position, size, angle, style),
        Decoration::Flourish {
            origin,
            size,
            angle,
        } => flourish(origin, size, angle, style),
    }
}

/// Circle, or a short tapered pen mark in gradient mode
fn dot(center: Point, radius: f64, style: &AlphabetStyle) -> Vec<Polygon> {
    let circle = || vec![regular_polygon(center, radius, DOT_SEGMENTS, 0.0)];
    if style.width_mode == WidthMode::Static {
        return circle();
    }

    let dir = Vec2::new(1.0, 0.0).rotated(style.stroke_angle);
    let mark: Vec<Point> = (0..5)
        .map(|i| center + dir * (radius * (i as f64 / 2.0 - 1.0)))
        .collect();
    let start = radius * 2.0;
    let end = (start * style.stroke_taper_ratio).max(start * MIN_TAPER);
    offset_tapered(&mark, start, end, JoinStyle::Bevel).unwrap_or_else(circle)
}

/// Rectangle `length` by `thickness`, centred and rotated by `angle`
fn bar(center: Point, length: f64, thickness: f64, angle: f64) -> Polygon {
    let half_len = length / 2.0;
    let half_w = thickness / 2.0;
    [
        Vec2::new(-half_len, -half_w),
        Vec2::new(half_len, -half_w),
        Vec2::new(half_len, half_w),
        Vec2::new(-half_len, half_w),
    ]
    .into_iter()
    .map(|corner| center + corner.rotated(angle))
    .collect()
}

fn serif(position: Point, size: f64, angle: f64, style: &AlphabetStyle) -> Vec<Polygon> {
    match style.serif_style {
        SerifStyle::None => Vec::new(),
        SerifStyle::Slab => vec![bar(position, size * 2.0, style.stroke_width, angle)],
        SerifStyle::Wedge => {
            let wedge = [
                Vec2::new(0.0, -size * 0.3),
                Vec2::new(size, 0.0),
                Vec2::new(-size, 0.0),
            ];
            vec![wedge
                .into_iter()
                .map(|v| position + v.rotated(angle))
                .collect()]
        }
        SerifStyle::Flare => vec![regular_polygon(position, size * 1.2, FLARE_SEGMENTS, 0.0)],
    }
}

/// Inward spiral `r = size * (1 - t/2)` sweeping 0.7 pi, as a thin ribbon
fn flourish(origin: Point, size: f64, angle: f64, style: &AlphabetStyle) -> Vec<Polygon> {
    let path: Vec<Point> = (0..=FLOURISH_STEPS)
        .map(|i| {
            let t = i as f64 / FLOURISH_STEPS as f64;
            let r = size * (1.0 - t * 0.5);
            let a = angle + t * PI * 0.7;
            origin + Vec2::new(r * a.cos(), r * a.sin())
        })
        .collect();
    let (start, end) = (style.stroke_width * 0.6, style.stroke_width * 0.15);
    offset_tapered(&path, start, end, JoinStyle::Bevel).unwrap_or_default()
}
