//! Decorative marks attached to a glyph skeleton

use crate::geometry::transform::apply_to_vector;
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four kinds of decoration a template or style can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Dot,
    Bar,
    Serif,
    Flourish,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 4] = [
        DecorationKind::Dot,
        DecorationKind::Bar,
        DecorationKind::Serif,
        DecorationKind::Flourish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecorationKind::Dot => "dot",
            DecorationKind::Bar => "bar",
            DecorationKind::Serif => "serif",
            DecorationKind::Flourish => "flourish",
        }
    }
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecorationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown decoration kind '{s}'"))
    }
}

/// A positioned decoration.
///
/// Each variant carries only the parameters its geometry uses. Angles are
/// radians, measured counter-clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Decoration {
    /// Filled circle
    Dot { center: Point, radius: f64 },
    /// Rectangle `length` long, centred on `center`, oriented by `angle`
    Bar { center: Point, length: f64, angle: f64 },
    /// Terminal mark; its shape depends on the style's serif style
    Serif { position: Point, size: f64, angle: f64 },
    /// Short inward spiral starting at `origin`
    Flourish { origin: Point, size: f64, angle: f64 },
}

impl Decoration {
    pub fn kind(&self) -> DecorationKind {
        match self {
            Decoration::Dot { .. } => DecorationKind::Dot,
            Decoration::Bar { .. } => DecorationKind::Bar,
            Decoration::Serif { .. } => DecorationKind::Serif,
            Decoration::Flourish { .. } => DecorationKind::Flourish,
        }
    }

    /// Build a decoration of `kind` from generic position/size/angle values
    pub fn from_parts(kind: DecorationKind, position: Point, size: f64, angle: f64) -> Self {
        match kind {
            DecorationKind::Dot => Decoration::Dot {
                center: position,
                radius: size,
            },
            DecorationKind::Bar => Decoration::Bar {
                center: position,
                length: size,
                angle,
            },
            DecorationKind::Serif => Decoration::Serif {
                position,
                size,
                angle,
            },
            DecorationKind::Flourish => Decoration::Flourish {
                origin: position,
                size,
                angle,
            },
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            Decoration::Dot { center, .. } | Decoration::Bar { center, .. } => center,
            Decoration::Serif { position, .. } => position,
            Decoration::Flourish { origin, .. } => origin,
        }
    }

    pub fn size(&self) -> f64 {
        match *self {
            Decoration::Dot { radius, .. } => radius,
            Decoration::Bar { length, .. } => length,
            Decoration::Serif { size, .. } | Decoration::Flourish { size, .. } => size,
        }
    }

    pub fn angle(&self) -> f64 {
        match *self {
            Decoration::Dot { .. } => 0.0,
            Decoration::Bar { angle, .. }
            | Decoration::Serif { angle, .. }
            | Decoration::Flourish { angle, .. } => angle,
        }
    }

    /// Map the decoration through `transform`.
    ///
    /// The position is transformed as a point. Size and angle follow the
    /// image of the decoration's unit direction under the linear part.
    pub fn transformed(&self, transform: Affine) -> Decoration {
        let position = transform * self.position();
        let direction = Vec2::new(self.angle().cos(), self.angle().sin());
        let mapped = apply_to_vector(transform, direction);
        let stretch = mapped.hypot();
        let (size, angle) = if stretch > crate::geometry::EPSILON {
            (self.size() * stretch, mapped.y.atan2(mapped.x))
        } else {
            (self.size(), self.angle())
        };
        Decoration::from_parts(self.kind(), position, size, angle)
    }
}
