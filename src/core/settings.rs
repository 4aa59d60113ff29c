//! Tunable settings
//!
//! Parameter ranges for style sampling, validation thresholds and export
//! layout. Loaded once at startup from `~/.config/glyphforge/settings.json`
//! (or an explicit `--settings` file) and passed by reference to whatever
//! needs it. A file may be partial; its entries override the built-in
//! defaults key by key.

use crate::error::ConfigError;
use crate::style::{set_enum, AlphabetStyle, ENUM_FIELDS, NUMERIC_FIELDS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "glyphforge";
const SETTINGS_FILE: &str = "settings.json";

/// Sampling ranges for every numeric style parameter
const DEFAULT_RANGES: &[(&str, f64, f64)] = &[
    ("x_height", 0.45, 0.65),
    ("cap_height", 0.65, 0.85),
    ("descender_depth", 0.15, 0.35),
    ("glyph_width", 0.45, 0.75),
    ("stroke_width", 0.04, 0.14),
    ("stroke_width_variance", 0.0, 0.04),
    ("stroke_angle", -0.6, 0.6),
    ("stroke_taper_ratio", 0.5, 1.0),
    ("curvature_bias", 0.0, 1.0),
    ("loop_probability", 0.0, 0.3),
    ("inflection_frequency", 0.0, 0.6),
    ("stroke_count_mean", 1.5, 3.5),
    ("stroke_count_sigma", 0.3, 1.2),
    ("component_reuse", 0.0, 0.6),
    ("connectivity", 0.1, 0.9),
    ("symmetry_bias", 0.0, 0.5),
    ("serif_size", 0.02, 0.08),
    ("dot_frequency", 0.0, 0.3),
    ("bar_frequency", 0.0, 0.2),
    ("flourish_probability", 0.0, 0.15),
    ("entry_zone", 0.1, 0.5),
    ("exit_zone", 0.5, 0.9),
    ("horizontal_bias", -0.5, 0.5),
    ("baseline_jitter", 0.0, 0.04),
    ("scale_jitter", 0.0, 0.06),
    ("rotation_jitter", 0.0, 0.04),
    ("aspect_ratio_variance", 0.0, 0.1),
    ("control_point_jitter", 0.02, 0.10),
    ("anchor_jitter", 0.01, 0.06),
];

const DEFAULT_ALLOWED: &[(&str, &[&str])] = &[
    ("cap_style", &["round", "flat"]),
    ("join_style", &["round", "miter", "bevel"]),
    ("serif_style", &["none", "slab", "wedge", "flare"]),
    ("width_mode", &["static", "gradient"]),
];

/// Advisory validation thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub min_ink_coverage: f64,
    pub max_ink_coverage: f64,
    pub max_components: usize,
    /// Feature-vector distance below which two glyphs count as similar
    pub min_distinctiveness: f64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            min_ink_coverage: 0.05,
            max_ink_coverage: 0.85,
            max_components: 8,
            min_distinctiveness: 0.15,
        }
    }
}

/// SVG layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub cell_size: f64,
    pub padding: f64,
    pub columns: usize,
    pub label_font_size: f64,
    pub individual_size: f64,
    pub sheet_margin: f64,
    pub individual_margin: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            padding: 10.0,
            columns: 6,
            label_font_size: 12.0,
            individual_size: 200.0,
            sheet_margin: 0.05,
            individual_margin: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub default_seed: u64,
    pub default_preset: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            default_seed: 42,
            default_preset: None,
        }
    }
}

/// Complete settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub parameter_ranges: BTreeMap<String, (f64, f64)>,
    pub allowed_values: BTreeMap<String, Vec<String>>,
    pub validation: ValidationSettings,
    pub export: ExportSettings,
    pub generation: GenerationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parameter_ranges: DEFAULT_RANGES
                .iter()
                .map(|(name, lo, hi)| (name.to_string(), (*lo, *hi)))
                .collect(),
            allowed_values: DEFAULT_ALLOWED
                .iter()
                .map(|(name, values)| {
                    (name.to_string(), values.iter().map(|v| v.to_string()).collect())
                })
                .collect(),
            validation: ValidationSettings::default(),
            export: ExportSettings::default(),
            generation: GenerationSettings::default(),
        }
    }
}

/// On-disk form: every section optional, maps merged over the defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    parameter_ranges: BTreeMap<String, (f64, f64)>,
    allowed_values: BTreeMap<String, Vec<String>>,
    validation: Option<ValidationSettings>,
    export: Option<ExportSettings>,
    generation: Option<GenerationSettings>,
}

impl Settings {
    /// Path to the glyphforge config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_DIR)
    }

    /// Path to the user settings file
    pub fn user_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE)
    }

    /// Path to the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Resolve settings for a run.
    ///
    /// An explicit path must exist. Without one, the user file is used when
    /// present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::user_path();
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("No settings file at {:?}, using defaults", path);
                    Ok(Settings::default())
                }
            }
        }
    }

    /// Load a settings file and merge it over the defaults
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Parse settings JSON and merge it over the defaults
    pub fn from_json(contents: &str) -> Result<Settings, ConfigError> {
        let file: SettingsFile =
            serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;

        let mut settings = Settings::default();
        for (name, range) in file.parameter_ranges {
            if !NUMERIC_FIELDS.contains(&name.as_str()) {
                return Err(ConfigError::UnknownParameter(name));
            }
            settings.parameter_ranges.insert(name, range);
        }
        for (name, values) in file.allowed_values {
            if !ENUM_FIELDS.contains(&name.as_str()) {
                return Err(ConfigError::UnknownParameter(name));
            }
            settings.allowed_values.insert(name, values);
        }
        if let Some(validation) = file.validation {
            settings.validation = validation;
        }
        if let Some(export) = file.export {
            settings.export = export;
        }
        if let Some(generation) = file.generation {
            settings.generation = generation;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Check ranges and allowed-value lists
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in NUMERIC_FIELDS {
            self.range(name)?;
        }
        for name in ENUM_FIELDS {
            for value in self.allowed(name)? {
                let mut probe = AlphabetStyle::default();
                set_enum(&mut probe, name, value).map_err(|e| ConfigError::InvalidAllowed {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
            }
        }
        Ok(())
    }

    /// `(lo, hi)` sampling range for a numeric style parameter
    pub fn range(&self, name: &str) -> Result<(f64, f64), ConfigError> {
        let &(lo, hi) = self
            .parameter_ranges
            .get(name)
            .ok_or_else(|| ConfigError::MissingRange(name.to_string()))?;
        if !(lo.is_finite() && hi.is_finite()) || lo > hi {
            return Err(ConfigError::InvalidRange {
                name: name.to_string(),
                lo,
                hi,
            });
        }
        Ok((lo, hi))
    }

    /// Allowed names for an enum style parameter, never empty
    pub fn allowed(&self, name: &str) -> Result<&[String], ConfigError> {
        let values = self
            .allowed_values
            .get(name)
            .ok_or_else(|| ConfigError::MissingAllowed(name.to_string()))?;
        if values.is_empty() {
            return Err(ConfigError::InvalidAllowed {
                name: name.to_string(),
                reason: "list is empty".to_string(),
            });
        }
        Ok(values)
    }

    /// Write the defaults to `path` unless a file is already there.
    ///
    /// Returns whether a file was written.
    pub fn write_defaults(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = serde_json::to_string_pretty(&Settings::default()).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, contents).map_err(io_err)?;
        debug!("Saved default settings to {:?}", path);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_parameter() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.parameter_ranges.len(), NUMERIC_FIELDS.len());
        assert_eq!(settings.range("stroke_width").unwrap(), (0.04, 0.14));
        assert_eq!(settings.allowed("serif_style").unwrap().len(), 4);
    }

    #[test]
    fn test_partial_file_overrides_only_named_keys() {
        let json = r#"{
            "parameter_ranges": { "stroke_width": [0.1, 0.2] },
            "validation": { "max_components": 12 }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        let defaults = Settings::default();
        assert_eq!(settings.range("stroke_width").unwrap(), (0.1, 0.2));
        assert_eq!(settings.range("x_height").unwrap(), defaults.range("x_height").unwrap());
        assert_eq!(settings.validation.max_components, 12);
        assert_eq!(settings.validation.min_ink_coverage, 0.05);
        assert_eq!(settings.export, defaults.export);
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let json = r#"{ "parameter_ranges": { "wobble": [0.0, 1.0] } }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(ConfigError::UnknownParameter(name)) if name == "wobble"
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let json = r#"{ "parameter_ranges": { "glyph_width": [0.8, 0.2] } }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_empty_allowed_rejected() {
        let json = r#"{ "allowed_values": { "cap_style": [] } }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(ConfigError::InvalidAllowed { .. })
        ));
    }

    #[test]
    fn test_unparseable_allowed_value_rejected() {
        let json = r#"{ "allowed_values": { "join_style": ["round", "wavy"] } }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(ConfigError::InvalidAllowed { name, .. }) if name == "join_style"
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Settings::resolve(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_write_defaults_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        assert!(Settings::write_defaults(&path).unwrap());
        assert!(!Settings::write_defaults(&path).unwrap());
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }
}
