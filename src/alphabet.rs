//! Alphabet generation
//!
//! Wires the seeded RNG, style, skeleton generator, stroke expander and
//! validation together into one 26-glyph [`Alphabet`].

use crate::core::settings::Settings;
use crate::error::GenerateError;
use crate::expansion::StrokeExpander;
use crate::geometry::BoundingBox;
use crate::glyph::Glyph;
use crate::rng::SeededRng;
use crate::skeleton::{ComponentLibrary, SkeletonGenerator, GLYPH_COUNT};
use crate::style::{
    apply_overrides, canonical_preset_name, generate_style, get_preset, AlphabetStyle,
    OverrideValue,
};
use crate::validation::{check_distinctiveness, validate_glyph, SimilarPair, ValidationReport};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Glyph label for an alphabet position
pub fn label_for(index: usize) -> char {
    (b'A' + (index % GLYPH_COUNT) as u8) as char
}

/// A complete generated alphabet with its style and diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alphabet {
    pub style: AlphabetStyle,
    pub seed: u64,
    pub preset_name: Option<String>,
    pub glyphs: Vec<Glyph>,
    /// One report per glyph, in glyph order
    pub reports: Vec<ValidationReport>,
    pub similar_pairs: Vec<SimilarPair>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    /// Glyph by letter, ignoring case
    pub fn by_label(&self, label: char) -> Option<&Glyph> {
        let label = label.to_ascii_uppercase();
        self.glyphs.iter().find(|g| g.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    /// Number of advisory findings across all glyphs
    pub fn issue_count(&self) -> usize {
        self.reports.iter().map(|r| r.issues.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

/// Builds an alphabet from a seed, an optional preset and overrides
#[derive(Debug, Clone)]
pub struct AlphabetGenerator<'a> {
    seed: u64,
    preset: Option<String>,
    overrides: Vec<(String, OverrideValue)>,
    settings: &'a Settings,
}

impl<'a> AlphabetGenerator<'a> {
    pub fn new(seed: u64, settings: &'a Settings) -> Self {
        Self {
            seed,
            preset: None,
            overrides: Vec::new(),
            settings,
        }
    }

    pub fn with_preset(mut self, preset: Option<impl Into<String>>) -> Self {
        self.preset = preset.map(Into::into);
        self
    }

    pub fn with_overrides(mut self, overrides: Vec<(String, OverrideValue)>) -> Self {
        self.overrides = overrides;
        self
    }

    /// The style this generator will use: preset or sampled, then overrides
    pub fn build_style(&self, rng: &SeededRng) -> Result<AlphabetStyle, GenerateError> {
        let style = match &self.preset {
            Some(name) => get_preset(name)?,
            None => generate_style(rng, self.settings)?,
        };
        if self.overrides.is_empty() {
            return Ok(style);
        }
        Ok(apply_overrides(&style, &self.overrides)?)
    }

    pub fn generate(&self) -> Result<Alphabet, GenerateError> {
        let rng = SeededRng::root(self.seed);
        let style = self.build_style(&rng)?;
        let preset_name = self
            .preset
            .as_deref()
            .and_then(canonical_preset_name)
            .map(str::to_string);

        let components = ComponentLibrary::new(&rng, &style);
        let skeletons = SkeletonGenerator::new(&rng, &style, &components).generate_all();
        info!(
            "Generating alphabet: seed {}, preset {}, {} templates",
            self.seed,
            preset_name.as_deref().unwrap_or("none"),
            skeletons.len()
        );

        let expander = StrokeExpander::new(&style);
        let reference = BoundingBox::new(0.0, 0.0, style.glyph_width, style.glyph_height());
        let thresholds = &self.settings.validation;

        let mut glyphs = Vec::with_capacity(skeletons.len());
        let mut reports = Vec::with_capacity(skeletons.len());
        for (index, skeleton) in skeletons.into_iter().enumerate() {
            let outline = expander.expand_skeleton(&skeleton);
            let glyph = Glyph {
                label: label_for(index),
                index,
                template_name: skeleton.template_name.clone(),
                skeleton,
                outline,
            };
            debug!(
                "Glyph {} ({}): {} strokes, {} decorations, {} polygons",
                glyph.label,
                glyph.template_name,
                glyph.skeleton.strokes.len(),
                glyph.skeleton.decorations.len(),
                glyph.outline.len()
            );

            let report = validate_glyph(&glyph, &reference, thresholds);
            for issue in &report.issues {
                warn!("Glyph {}: {}", glyph.label, issue);
            }
            reports.push(report);
            glyphs.push(glyph);
        }

        let similar_pairs = check_distinctiveness(&glyphs, thresholds.min_distinctiveness);
        for pair in &similar_pairs {
            warn!(
                "Glyphs {} and {} look alike (distance {:.3})",
                label_for(pair.first),
                label_for(pair.second),
                pair.distance
            );
        }

        Ok(Alphabet {
            style,
            seed: self.seed,
            preset_name,
            glyphs,
            reports,
            similar_pairs,
        })
    }
}

/// Generate an alphabet from `seed` with the built-in settings
pub fn generate(seed: u64) -> Result<Alphabet, GenerateError> {
    AlphabetGenerator::new(seed, &Settings::default()).generate()
}
