//! Field-level style overrides
//!
//! Overrides come from the command line (`--set stroke_width=0.2`) or from
//! library callers. Every field is reachable through an explicit table, so
//! an unknown name or a value of the wrong shape is reported instead of
//! silently ignored.

use super::{AlphabetStyle, CapStyle, JoinStyle, SerifStyle, WidthMode};
use crate::error::StyleError;

/// A raw override value before it is matched to its field's type
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideValue {
    Number(f64),
    Text(String),
}

impl From<f64> for OverrideValue {
    fn from(v: f64) -> Self {
        OverrideValue::Number(v)
    }
}

impl From<&str> for OverrideValue {
    fn from(v: &str) -> Self {
        OverrideValue::Text(v.to_string())
    }
}

impl From<String> for OverrideValue {
    fn from(v: String) -> Self {
        OverrideValue::Text(v)
    }
}

impl std::fmt::Display for OverrideValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverrideValue::Number(n) => write!(f, "{n}"),
            OverrideValue::Text(t) => f.write_str(t),
        }
    }
}

/// Generates the numeric field table: names in declaration order plus
/// getter/setter by name.
macro_rules! numeric_fields {
    ($($field:ident),+ $(,)?) => {
        /// Numeric style fields in declaration order
        pub const NUMERIC_FIELDS: &[&str] = &[$(stringify!($field)),+];

        pub(crate) fn set_numeric(style: &mut AlphabetStyle, name: &str, value: f64) -> bool {
            match name {
                $(stringify!($field) => {
                    style.$field = value;
                    true
                })+
                _ => false,
            }
        }

        /// Read a numeric field by name
        pub fn get_numeric(style: &AlphabetStyle, name: &str) -> Option<f64> {
            match name {
                $(stringify!($field) => Some(style.$field),)+
                _ => None,
            }
        }
    };
}

numeric_fields!(
    x_height,
    cap_height,
    descender_depth,
    glyph_width,
    stroke_width,
    stroke_width_variance,
    stroke_angle,
    stroke_taper_ratio,
    curvature_bias,
    loop_probability,
    inflection_frequency,
    stroke_count_mean,
    stroke_count_sigma,
    component_reuse,
    connectivity,
    symmetry_bias,
    serif_size,
    dot_frequency,
    bar_frequency,
    flourish_probability,
    entry_zone,
    exit_zone,
    horizontal_bias,
    baseline_jitter,
    scale_jitter,
    rotation_jitter,
    aspect_ratio_variance,
    control_point_jitter,
    anchor_jitter,
);

/// Enum style fields, in the order style generation draws them
pub const ENUM_FIELDS: &[&str] = &["cap_style", "join_style", "serif_style", "width_mode"];

fn invalid(field: &str, value: &OverrideValue, expected: impl Into<String>) -> StyleError {
    StyleError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.into(),
    }
}

/// Set an enum field from its lowercase name
pub(crate) fn set_enum(style: &mut AlphabetStyle, field: &str, text: &str) -> Result<(), StyleError> {
    let value = OverrideValue::Text(text.to_string());
    match field {
        "cap_style" => style.cap_style = text.parse::<CapStyle>().map_err(|e| invalid(field, &value, e))?,
        "join_style" => style.join_style = text.parse::<JoinStyle>().map_err(|e| invalid(field, &value, e))?,
        "serif_style" => style.serif_style = text.parse::<SerifStyle>().map_err(|e| invalid(field, &value, e))?,
        "width_mode" => style.width_mode = text.parse::<WidthMode>().map_err(|e| invalid(field, &value, e))?,
        _ => return Err(StyleError::UnknownField(field.to_string())),
    }
    Ok(())
}

pub fn is_known_field(name: &str) -> bool {
    NUMERIC_FIELDS.contains(&name) || ENUM_FIELDS.contains(&name)
}

fn apply_one(style: &mut AlphabetStyle, field: &str, value: &OverrideValue) -> Result<(), StyleError> {
    if ENUM_FIELDS.contains(&field) {
        return match value {
            OverrideValue::Text(text) => set_enum(style, field, text),
            OverrideValue::Number(_) => Err(invalid(field, value, "a name, not a number")),
        };
    }

    let number = match value {
        OverrideValue::Number(n) => *n,
        OverrideValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(field, value, "a number"))?,
    };
    if !number.is_finite() {
        return Err(invalid(field, value, "a finite number"));
    }
    set_numeric(style, field, number);
    Ok(())
}

/// Return a copy of `style` with `overrides` applied in order.
///
/// All names are checked before any value is converted.
pub fn apply_overrides(
    style: &AlphabetStyle,
    overrides: &[(String, OverrideValue)],
) -> Result<AlphabetStyle, StyleError> {
    if let Some((name, _)) = overrides.iter().find(|(name, _)| !is_known_field(name)) {
        return Err(StyleError::UnknownField(name.clone()));
    }

    let mut out = style.clone();
    for (name, value) in overrides {
        apply_one(&mut out, name, value)?;
    }
    Ok(out)
}

/// Parse a `key=value` pair as given on the command line
pub fn parse_override(pair: &str) -> Result<(String, OverrideValue), StyleError> {
    let (key, value) = pair.split_once('=').ok_or_else(|| StyleError::InvalidValue {
        field: pair.to_string(),
        value: String::new(),
        expected: "key=value".to_string(),
    })?;
    Ok((key.trim().to_string(), OverrideValue::Text(value.trim().to_string())))
}
