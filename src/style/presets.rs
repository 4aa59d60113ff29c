//! Named style presets: curated starting points for common script looks

use super::{AlphabetStyle, CapStyle, JoinStyle, SerifStyle, WidthMode};
use crate::error::StyleError;

const PRESET_NAMES: &[&str] = &["angular", "blocky", "flowing", "geometric", "ornate", "runic"];

fn angular() -> AlphabetStyle {
    AlphabetStyle {
        curvature_bias: 0.1,
        loop_probability: 0.02,
        inflection_frequency: 0.1,
        stroke_width: 0.07,
        stroke_taper_ratio: 0.9,
        cap_style: CapStyle::Flat,
        join_style: JoinStyle::Miter,
        serif_style: SerifStyle::Slab,
        serif_size: 0.04,
        symmetry_bias: 0.3,
        dot_frequency: 0.05,
        bar_frequency: 0.15,
        connectivity: 0.3,
        control_point_jitter: 0.02,
        ..AlphabetStyle::default()
    }
}

fn flowing() -> AlphabetStyle {
    AlphabetStyle {
        curvature_bias: 0.9,
        loop_probability: 0.25,
        inflection_frequency: 0.5,
        stroke_width: 0.06,
        stroke_width_variance: 0.03,
        stroke_taper_ratio: 0.65,
        width_mode: WidthMode::Gradient,
        cap_style: CapStyle::Round,
        join_style: JoinStyle::Round,
        serif_style: SerifStyle::None,
        connectivity: 0.8,
        symmetry_bias: 0.1,
        dot_frequency: 0.15,
        flourish_probability: 0.12,
        control_point_jitter: 0.08,
        ..AlphabetStyle::default()
    }
}

fn geometric() -> AlphabetStyle {
    AlphabetStyle {
        curvature_bias: 0.4,
        loop_probability: 0.15,
        inflection_frequency: 0.2,
        stroke_width: 0.08,
        stroke_width_variance: 0.0,
        stroke_taper_ratio: 1.0,
        cap_style: CapStyle::Flat,
        join_style: JoinStyle::Miter,
        serif_style: SerifStyle::None,
        symmetry_bias: 0.45,
        connectivity: 0.5,
        dot_frequency: 0.1,
        bar_frequency: 0.1,
        control_point_jitter: 0.02,
        anchor_jitter: 0.01,
        ..AlphabetStyle::default()
    }
}

fn blocky() -> AlphabetStyle {
    AlphabetStyle {
        curvature_bias: 0.05,
        loop_probability: 0.0,
        inflection_frequency: 0.05,
        stroke_width: 0.12,
        stroke_width_variance: 0.01,
        stroke_taper_ratio: 1.0,
        cap_style: CapStyle::Flat,
        join_style: JoinStyle::Miter,
        serif_style: SerifStyle::Slab,
        serif_size: 0.06,
        symmetry_bias: 0.4,
        connectivity: 0.2,
        dot_frequency: 0.0,
        bar_frequency: 0.1,
        control_point_jitter: 0.01,
        anchor_jitter: 0.01,
        ..AlphabetStyle::default()
    }
}

fn ornate() -> AlphabetStyle {
    AlphabetStyle {
        curvature_bias: 0.7,
        loop_probability: 0.2,
        inflection_frequency: 0.4,
        stroke_width: 0.05,
        stroke_width_variance: 0.03,
        stroke_taper_ratio: 0.7,
        width_mode: WidthMode::Gradient,
        cap_style: CapStyle::Round,
        join_style: JoinStyle::Round,
        serif_style: SerifStyle::Flare,
        serif_size: 0.05,
        symmetry_bias: 0.15,
        dot_frequency: 0.2,
        bar_frequency: 0.1,
        flourish_probability: 0.15,
        connectivity: 0.6,
        control_point_jitter: 0.07,
        ..AlphabetStyle::default()
    }
}

fn runic() -> AlphabetStyle {
    AlphabetStyle {
        curvature_bias: 0.0,
        loop_probability: 0.0,
        inflection_frequency: 0.0,
        stroke_width: 0.07,
        stroke_width_variance: 0.01,
        stroke_taper_ratio: 0.95,
        cap_style: CapStyle::Flat,
        join_style: JoinStyle::Miter,
        serif_style: SerifStyle::Wedge,
        serif_size: 0.03,
        symmetry_bias: 0.35,
        connectivity: 0.4,
        dot_frequency: 0.0,
        bar_frequency: 0.0,
        flourish_probability: 0.0,
        stroke_count_mean: 2.0,
        stroke_count_sigma: 0.5,
        control_point_jitter: 0.01,
        anchor_jitter: 0.01,
        ..AlphabetStyle::default()
    }
}

/// Look up a preset by name, ignoring case
pub fn get_preset(name: &str) -> Result<AlphabetStyle, StyleError> {
    match name.to_ascii_lowercase().as_str() {
        "angular" => Ok(angular()),
        "blocky" => Ok(blocky()),
        "flowing" => Ok(flowing()),
        "geometric" => Ok(geometric()),
        "ornate" => Ok(ornate()),
        "runic" => Ok(runic()),
        _ => Err(StyleError::UnknownPreset {
            name: name.to_string(),
            available: list_presets(),
        }),
    }
}

/// Preset names, sorted
/// Lowercase catalog spelling of a preset name, if it is one
pub fn canonical_preset_name(name: &str) -> Option<&'static str> {
    PRESET_NAMES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(name))
}

pub fn list_presets() -> Vec<String> {
    PRESET_NAMES.iter().map(|s| s.to_string()).collect()
}
