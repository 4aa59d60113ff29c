//! Command line interface for glyphforge
//!
//! Handles parsing command line arguments and validating them before a
//! run starts.

use crate::core::settings::Settings;
use crate::style::{get_preset, parse_override, OverrideValue};
use clap::Parser;
use std::path::PathBuf;

/// glyphforge CLI arguments
///
/// Examples:
///   glyphforge --seed 42 --sheet specimen.svg        # Sampled style, one sheet
///   glyphforge --preset flowing --output glyphs/     # Preset, 26 SVG files
///   glyphforge --seed 7 --set stroke_width=0.12      # Override one parameter
///   glyphforge --seed 7 --set cap_style=flat --json alphabet.json
///   glyphforge --list-presets
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "glyphforge",
    version,
    about = "Procedural alphabet generator",
    long_about = "glyphforge builds a complete 26-glyph writing system from a seed. A style is sampled (or taken from a preset), skeletons are drawn from a template catalog and expanded into filled vector outlines, then written out as SVG or JSON."
)]
pub struct CliArgs {
    /// Random seed; falls back to the settings file's default_seed
    #[clap(long = "seed", short = 's', help = "Random seed")]
    pub seed: Option<u64>,

    /// Named style preset instead of a sampled style
    #[clap(
        long = "preset",
        short = 'p',
        help = "Style preset to use",
        long_help = "Use a hand-tuned style preset instead of sampling one from the seed. Run with --list-presets to see the available names."
    )]
    pub preset: Option<String>,

    /// Style overrides as key=value, applied after the preset or sampling
    #[clap(
        long = "set",
        value_name = "KEY=VALUE",
        help = "Override a style parameter (repeatable)",
        long_help = "Override one style parameter, e.g. --set stroke_width=0.1 or --set join_style=bevel. May be given several times; later values win."
    )]
    pub overrides: Vec<String>,

    /// Directory for one SVG per glyph
    #[clap(long = "output", short = 'o', help = "Write glyph_<label>.svg files into this directory")]
    pub output: Option<PathBuf>,

    /// Specimen sheet file
    #[clap(long = "sheet", help = "Write a specimen sheet SVG to this file")]
    pub sheet: Option<PathBuf>,

    /// JSON dump file
    #[clap(long = "json", help = "Write the alphabet as JSON to this file")]
    pub json: Option<PathBuf>,

    /// Settings file to use instead of the user settings
    #[clap(
        long = "settings",
        help = "Settings file to load",
        long_help = "Load parameter ranges, validation thresholds and export layout from this JSON file. Without it, ~/.config/glyphforge/settings.json is used when present, otherwise the built-in defaults."
    )]
    pub settings: Option<PathBuf>,

    /// Print the preset names and exit
    #[clap(long = "list-presets", help = "List available style presets")]
    pub list_presets: bool,

    /// Write the default settings file
    #[clap(
        long = "new-config",
        help = "Initialize the user settings file",
        long_help = "Write the built-in defaults to ~/.config/glyphforge/settings.json so they can be edited. An existing file is left untouched."
    )]
    pub new_config: bool,

    /// Debug-level logging
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,

    /// Also log to ~/.config/glyphforge/logs/
    #[clap(long = "log-file", help = "Also write logs to a dated file in the config directory")]
    pub log_file: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Catches bad presets, malformed overrides and missing settings files
    /// before any generation work starts.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.settings {
            if !path.is_file() {
                return Err(format!(
                    "Settings file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        if let Some(name) = &self.preset {
            get_preset(name).map_err(|e| e.to_string())?;
        }

        self.parsed_overrides().map_err(|e| e.to_string())?;

        for (flag, path) in [("--sheet", &self.sheet), ("--json", &self.json)] {
            if let Some(path) = path.as_ref().filter(|p| p.is_dir()) {
                return Err(format!(
                    "{flag} expects a file but {} is a directory",
                    path.display()
                ));
            }
        }
        Ok(())
    }

    /// `--set` pairs as style overrides, in the order given
    pub fn parsed_overrides(&self) -> Result<Vec<(String, OverrideValue)>, crate::error::StyleError> {
        self.overrides.iter().map(|pair| parse_override(pair)).collect()
    }

    /// Seed from the CLI, else the settings default
    pub fn seed_or_default(&self, settings: &Settings) -> u64 {
        self.seed.unwrap_or(settings.generation.default_seed)
    }

    /// Preset from the CLI, else the settings default
    pub fn preset_or_default(&self, settings: &Settings) -> Option<String> {
        self.preset
            .clone()
            .or_else(|| settings.generation.default_preset.clone())
    }

    /// Whether any output file was requested
    pub fn has_outputs(&self) -> bool {
        self.output.is_some() || self.sheet.is_some() || self.json.is_some()
    }
}
