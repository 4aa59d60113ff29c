//! Alphabet style parameters
//!
//! One [`AlphabetStyle`] is shared read-only by all 26 glyphs of a run,
//! which is what makes the generated glyphs look like one script. Values
//! are normalized to a 1.0-unit em square; probabilities lie in `[0, 1]`.

mod generate;
mod overrides;
pub mod presets;

pub use generate::generate_style;
pub use overrides::{
    apply_overrides, get_numeric, parse_override, OverrideValue, ENUM_FIELDS, NUMERIC_FIELDS,
};
pub use presets::{canonical_preset_name, get_preset, list_presets};
pub(crate) use overrides::{set_enum, set_numeric};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implements `as_str`, `Display`, `FromStr` and `ALL` for a unit enum
/// whose variants map one-to-one onto lowercase names.
macro_rules! named_enum {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(format!(
                        "one of {}",
                        [$($name),+].join(", ")
                    )),
                }
            }
        }
    };
}

/// Shape of open stroke ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    #[default]
    Round,
    Flat,
}

named_enum!(CapStyle { Round => "round", Flat => "flat" });

/// Shape at interior polyline vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStyle {
    #[default]
    Round,
    Miter,
    Bevel,
}

named_enum!(JoinStyle { Round => "round", Miter => "miter", Bevel => "bevel" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerifStyle {
    #[default]
    None,
    Slab,
    Wedge,
    Flare,
}

named_enum!(SerifStyle {
    None => "none",
    Slab => "slab",
    Wedge => "wedge",
    Flare => "flare",
});

/// How stroke width varies along a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    /// Constant `stroke_width`, offset with the style's caps and joins
    #[default]
    Static,
    /// Linear taper from `stroke_width` to `stroke_width * stroke_taper_ratio`
    Gradient,
}

named_enum!(WidthMode { Static => "static", Gradient => "gradient" });

/// Every parameter that shapes a writing system's look
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetStyle {
    // Metrics
    pub x_height: f64,
    pub cap_height: f64,
    pub descender_depth: f64,
    pub glyph_width: f64,

    // Stroke
    pub stroke_width: f64,
    pub stroke_width_variance: f64,
    /// Global pen angle in radians
    pub stroke_angle: f64,
    /// End width as a fraction of start width in gradient mode
    pub stroke_taper_ratio: f64,
    pub width_mode: WidthMode,
    pub cap_style: CapStyle,
    pub join_style: JoinStyle,

    // Curvature
    /// 0 = angular, 1 = fully curved
    pub curvature_bias: f64,
    pub loop_probability: f64,
    pub inflection_frequency: f64,

    // Structure
    pub stroke_count_mean: f64,
    pub stroke_count_sigma: f64,
    pub component_reuse: f64,
    pub connectivity: f64,
    pub symmetry_bias: f64,

    // Decorative
    pub serif_style: SerifStyle,
    pub serif_size: f64,
    pub dot_frequency: f64,
    pub bar_frequency: f64,
    pub flourish_probability: f64,

    // Direction
    pub entry_zone: f64,
    pub exit_zone: f64,
    pub horizontal_bias: f64,

    // Global modifiers
    pub baseline_jitter: f64,
    pub scale_jitter: f64,
    pub rotation_jitter: f64,
    pub aspect_ratio_variance: f64,

    // Control points
    pub control_point_jitter: f64,
    pub anchor_jitter: f64,
}

impl Default for AlphabetStyle {
    fn default() -> Self {
        Self {
            x_height: 0.55,
            cap_height: 0.75,
            descender_depth: 0.25,
            glyph_width: 0.6,

            stroke_width: 0.08,
            stroke_width_variance: 0.02,
            stroke_angle: 0.0,
            stroke_taper_ratio: 1.0,
            width_mode: WidthMode::Static,
            cap_style: CapStyle::Round,
            join_style: JoinStyle::Round,

            curvature_bias: 0.5,
            loop_probability: 0.1,
            inflection_frequency: 0.3,

            stroke_count_mean: 2.5,
            stroke_count_sigma: 0.8,
            component_reuse: 0.3,
            connectivity: 0.5,
            symmetry_bias: 0.2,

            serif_style: SerifStyle::None,
            serif_size: 0.04,
            dot_frequency: 0.1,
            bar_frequency: 0.05,
            flourish_probability: 0.05,

            entry_zone: 0.3,
            exit_zone: 0.7,
            horizontal_bias: 0.0,

            baseline_jitter: 0.02,
            scale_jitter: 0.03,
            rotation_jitter: 0.02,
            aspect_ratio_variance: 0.05,

            control_point_jitter: 0.05,
            anchor_jitter: 0.03,
        }
    }
}

impl AlphabetStyle {
    /// Full glyph box height: cap height plus descender
    pub fn glyph_height(&self) -> f64 {
        self.cap_height + self.descender_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_names_round_trip() {
        for cap in CapStyle::ALL {
            assert_eq!(cap.as_str().parse::<CapStyle>(), Ok(*cap));
        }
        for join in JoinStyle::ALL {
            assert_eq!(join.to_string().parse::<JoinStyle>(), Ok(*join));
        }
        assert_eq!("SLAB".parse::<SerifStyle>(), Ok(SerifStyle::Slab));
        assert_eq!("gradient".parse::<WidthMode>(), Ok(WidthMode::Gradient));
    }

    #[test]
    fn test_enum_parse_error_lists_choices() {
        let err = "tapered".parse::<CapStyle>().unwrap_err();
        assert_eq!(err, "one of round, flat");
    }

    #[test]
    fn test_default_style() {
        let style = AlphabetStyle::default();
        assert_eq!(style.stroke_width, 0.08);
        assert_eq!(style.width_mode, WidthMode::Static);
        assert!((style.glyph_height() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_style_json_uses_lowercase_enums() {
        let json = serde_json::to_value(AlphabetStyle::default()).unwrap();
        assert_eq!(json["cap_style"], "round");
        assert_eq!(json["serif_style"], "none");
        let partial: AlphabetStyle =
            serde_json::from_str(r#"{"stroke_width": 0.1, "join_style": "bevel"}"#).unwrap();
        assert_eq!(partial.stroke_width, 0.1);
        assert_eq!(partial.join_style, JoinStyle::Bevel);
        assert_eq!(partial.cap_height, 0.75);
    }
}
