//! Random style sampling

use super::{set_enum, set_numeric, AlphabetStyle, ENUM_FIELDS, NUMERIC_FIELDS};
use crate::core::settings::Settings;
use crate::error::ConfigError;
use crate::rng::SeededRng;

/// Sample a complete style from the `"style"` fork of `rng`.
///
/// Enum choices are drawn first, then every numeric field in declaration
/// order from its configured range.
pub fn generate_style(rng: &SeededRng, settings: &Settings) -> Result<AlphabetStyle, ConfigError> {
    let mut r = rng.fork("style");
    let mut style = AlphabetStyle::default();

    for field in ENUM_FIELDS {
        let allowed = settings.allowed(field)?;
        let choice = r
            .choose(allowed)
            .ok_or_else(|| ConfigError::MissingAllowed(field.to_string()))?;
        set_enum(&mut style, field, choice).map_err(|e| ConfigError::InvalidAllowed {
            name: field.to_string(),
            reason: e.to_string(),
        })?;
    }

    for field in NUMERIC_FIELDS {
        let (lo, hi) = settings.range(field)?;
        set_numeric(&mut style, field, r.uniform(lo, hi));
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::get_numeric;

    #[test]
    fn test_same_seed_same_style() {
        let settings = Settings::default();
        let a = generate_style(&SeededRng::root(42), &settings).unwrap();
        let b = generate_style(&SeededRng::root(42), &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let settings = Settings::default();
        let a = generate_style(&SeededRng::root(1), &settings).unwrap();
        let b = generate_style(&SeededRng::root(2), &settings).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_within_ranges() {
        let settings = Settings::default();
        for seed in 0..20 {
            let style = generate_style(&SeededRng::root(seed), &settings).unwrap();
            for field in NUMERIC_FIELDS {
                let (lo, hi) = settings.range(field).unwrap();
                let v = get_numeric(&style, field).unwrap();
                assert!(v >= lo && v <= hi, "{field} = {v} outside [{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn test_does_not_consume_parent() {
        let settings = Settings::default();
        let mut rng = SeededRng::root(9);
        let before = rng.clone().random();
        generate_style(&rng, &settings).unwrap();
        assert_eq!(rng.random(), before);
    }

    #[test]
    fn test_single_allowed_value_is_always_chosen() {
        let mut settings = Settings::default();
        settings
            .allowed_values
            .insert("serif_style".to_string(), vec!["wedge".to_string()]);
        let style = generate_style(&SeededRng::root(3), &settings).unwrap();
        assert_eq!(style.serif_style, crate::style::SerifStyle::Wedge);
    }

    #[test]
    fn test_missing_range_is_error() {
        let mut settings = Settings::default();
        settings.parameter_ranges.remove("anchor_jitter");
        assert!(matches!(
            generate_style(&SeededRng::root(3), &settings),
            Err(ConfigError::MissingRange(name)) if name == "anchor_jitter"
        ));
    }
}
