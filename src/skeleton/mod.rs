//! Skeleton Generation
//!
//! Fills template blueprints with bezier curves shaped by the style:
//! anchor jitter, curvature bias, S-curve inflections, control-point noise,
//! style-driven decorations, shared components and a small per-glyph
//! affine wobble. Every glyph draws from its own RNG fork, so regenerating
//! one glyph never changes another.

pub mod components;
pub mod templates;

pub use components::{Component, ComponentLibrary};
pub use templates::{
    base_name, lookup, select_templates, AnchorPoint, DecorationSpec, StrokeSpec, TemplateSpec,
    TEMPLATES,
};

use crate::bezier::{make_arc, make_s_curve};
use crate::geometry::transform::{rotate_about, scale_about};
use crate::glyph::{CubicBezier, Decoration, DecorationKind, Skeleton, Stroke};
use crate::rng::SeededRng;
use crate::style::{AlphabetStyle, SerifStyle};
use kurbo::{Affine, Point, Vec2};
use std::f64::consts::PI;
use tracing::warn;

/// Number of glyphs in an alphabet
pub const GLYPH_COUNT: usize = 26;

/// Effective bulges below this are treated as straight
const STRAIGHT_BULGE: f64 = 0.01;

/// Chance that each stroke endpoint gets a serif
const SERIF_PROBABILITY: f64 = 0.6;

/// Builds glyph skeletons for one alphabet
#[derive(Debug, Clone)]
pub struct SkeletonGenerator<'a> {
    rng: SeededRng,
    style: &'a AlphabetStyle,
    components: &'a ComponentLibrary,
}

impl<'a> SkeletonGenerator<'a> {
    /// Generator on the `"skeleton"` fork of `rng`
    pub fn new(rng: &SeededRng, style: &'a AlphabetStyle, components: &'a ComponentLibrary) -> Self {
        Self {
            rng: rng.fork("skeleton"),
            style,
            components,
        }
    }

    /// Template names for all 26 glyphs, in glyph order
    pub fn template_names(&self) -> Vec<String> {
        select_templates(&self.rng, GLYPH_COUNT)
    }

    /// Generate all 26 skeletons
    pub fn generate_all(&self) -> Vec<Skeleton> {
        self.template_names()
            .iter()
            .enumerate()
            .map(|(i, name)| self.generate_glyph(i, name))
            .collect()
    }

    /// Generate the skeleton for glyph `index` from template `template_name`.
    ///
    /// Depends only on the seed, style, index and name.
    pub fn generate_glyph(&self, index: usize, template_name: &str) -> Skeleton {
        let mut rng = self.rng.fork(&format!("glyph_{index:02}"));
        let base = base_name(template_name);

        let Some(template) = lookup(template_name) else {
            warn!("Unknown template '{}', glyph {} left empty", template_name, index);
            return Skeleton::default().with_template_name(base);
        };
        let spec = template(&mut rng, self.style);

        let mut strokes: Vec<Stroke> = spec
            .strokes
            .iter()
            .map(|s| self.build_stroke(s, &mut rng))
            .filter(|s| !s.is_empty())
            .collect();
        let mut decorations: Vec<Decoration> = spec
            .decorations
            .iter()
            .map(|d| self.build_decoration(d, &mut rng))
            .collect();

        self.add_style_decorations(&strokes, &mut decorations, &mut rng);

        if !strokes.is_empty() && rng.coin(self.style.component_reuse) {
            if let Some(placed) = self.place_component(&strokes, &mut rng) {
                strokes.push(placed);
            }
        }

        let modifier = self.global_modifier(&mut rng);
        Skeleton::new(strokes, decorations)
            .transformed(modifier)
            .with_template_name(base)
    }

    /// Map normalized template space onto the glyph box
    fn to_metrics(&self, x: f64, y: f64) -> Point {
        Point::new(x * self.style.glyph_width, y * self.style.glyph_height())
    }

    fn build_stroke(&self, spec: &StrokeSpec, rng: &mut SeededRng) -> Stroke {
        let s = self.style;

        let scaled: Vec<Point> = spec
            .anchors
            .iter()
            .map(|ap| {
                let jx = (ap.x + rng.gauss(0.0, s.anchor_jitter)).clamp(0.0, 1.0);
                let jy = (ap.y + rng.gauss(0.0, s.anchor_jitter)).clamp(0.0, 1.0);
                self.to_metrics(jx, jy)
            })
            .collect();

        let segments = scaled
            .windows(2)
            .zip(&spec.anchors)
            .map(|(pair, anchor)| {
                let (p0, p1) = (pair[0], pair[1]);
                let bulge = anchor.bulge * (0.3 + 0.7 * s.curvature_bias);

                let seg = if bulge.abs() < STRAIGHT_BULGE {
                    let slight = rng.gauss(0.0, s.control_point_jitter * 0.5) * s.curvature_bias;
                    make_arc(p0, p1, slight)
                } else if s.curvature_bias > 0.5 && rng.coin(s.inflection_frequency * 0.3) {
                    make_s_curve(p0, p1, bulge * 0.7)
                } else {
                    make_arc(p0, p1, bulge)
                };
                jitter_controls(seg, s.control_point_jitter, rng)
            })
            .collect();

        Stroke::new(segments)
    }

    fn build_decoration(&self, spec: &DecorationSpec, rng: &mut SeededRng) -> Decoration {
        let position = self.to_metrics(spec.x, spec.y);
        let size = self.style.stroke_width * spec.size * 1.5;
        let angle = spec.angle + rng.gauss(0.0, 0.1);
        Decoration::from_parts(spec.kind, position, size, angle)
    }

    fn add_style_decorations(
        &self,
        strokes: &[Stroke],
        decorations: &mut Vec<Decoration>,
        rng: &mut SeededRng,
    ) {
        let s = self.style;
        let endpoints: Vec<(Point, Point)> = strokes.iter().filter_map(Stroke::endpoints).collect();
        if endpoints.is_empty() {
            return;
        }

        if rng.coin(s.dot_frequency) {
            if let Some(&(start, end)) = rng.choose(&endpoints) {
                let reference = pick_end(start, end, rng);
                let offset = Vec2::new(rng.gauss(0.0, 0.03), rng.gauss(0.0, 0.03));
                decorations.push(Decoration::Dot {
                    center: reference + offset + Vec2::new(0.0, -s.stroke_width * 2.0),
                    radius: s.stroke_width * 1.2,
                });
            }
        }

        if rng.coin(s.bar_frequency) {
            if let Some(&(start, end)) = rng.choose(&endpoints) {
                decorations.push(Decoration::Bar {
                    center: start.lerp(end, 0.5),
                    length: s.glyph_width * rng.uniform(0.15, 0.35),
                    angle: s.stroke_angle,
                });
            }
        }

        if s.serif_style != SerifStyle::None {
            for &(start, end) in &endpoints {
                for position in [start, end] {
                    if rng.coin(SERIF_PROBABILITY) {
                        decorations.push(Decoration::Serif {
                            position,
                            size: s.serif_size,
                            angle: rng.uniform(-0.2, 0.2),
                        });
                    }
                }
            }
        }

        if rng.coin(s.flourish_probability) {
            if let Some(&(_, end)) = rng.choose(&endpoints) {
                decorations.push(Decoration::Flourish {
                    origin: end,
                    size: s.stroke_width * 3.0,
                    angle: rng.uniform(0.0, PI),
                });
            }
        }
    }

    /// Translate a random library component onto a random stroke end
    fn place_component(&self, existing: &[Stroke], rng: &mut SeededRng) -> Option<Stroke> {
        let component = self.components.random_component(rng)?;
        let (start, end) = rng.choose(existing)?.endpoints()?;
        let anchor = pick_end(start, end, rng);
        let origin = component.stroke.start()?;
        Some(component.stroke.transformed(Affine::translate(anchor - origin)))
    }

    /// Per-glyph rotation, scale, aspect and baseline wobble
    fn global_modifier(&self, rng: &mut SeededRng) -> Affine {
        let s = self.style;
        let rotation = rng.gauss(0.0, s.rotation_jitter);
        let scale = 1.0 + rng.gauss(0.0, s.scale_jitter);
        let aspect = 1.0 + rng.gauss(0.0, s.aspect_ratio_variance);
        let baseline = rng.gauss(0.0, s.baseline_jitter);

        let center = self.to_metrics(0.5, 0.5);
        Affine::translate((0.0, baseline))
            * rotate_about(center, rotation)
            * scale_about(center, scale * aspect, scale)
    }
}

fn pick_end(start: Point, end: Point, rng: &mut SeededRng) -> Point {
    if rng.coin(0.5) {
        start
    } else {
        end
    }
}

/// Perturb the two interior control points; endpoints stay put
fn jitter_controls(seg: CubicBezier, amount: f64, rng: &mut SeededRng) -> CubicBezier {
    let j1 = Vec2::new(rng.gauss(0.0, amount), rng.gauss(0.0, amount));
    let j2 = Vec2::new(rng.gauss(0.0, amount), rng.gauss(0.0, amount));
    CubicBezier::new(seg.p0, seg.p1 + j1, seg.p2 + j2, seg.p3)
}

/// Counts of decorations by kind, for diagnostics
pub fn decoration_counts(skeleton: &Skeleton) -> [(DecorationKind, usize); 4] {
    DecorationKind::ALL.map(|kind| {
        let n = skeleton.decorations.iter().filter(|d| d.kind() == kind).count();
        (kind, n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_style() -> AlphabetStyle {
        AlphabetStyle {
            anchor_jitter: 0.0,
            control_point_jitter: 0.0,
            dot_frequency: 0.0,
            bar_frequency: 0.0,
            flourish_probability: 0.0,
            component_reuse: 0.0,
            serif_style: SerifStyle::None,
            baseline_jitter: 0.0,
            scale_jitter: 0.0,
            rotation_jitter: 0.0,
            aspect_ratio_variance: 0.0,
            ..AlphabetStyle::default()
        }
    }

    #[test]
    fn test_generates_26_skeletons() {
        let rng = SeededRng::root(42);
        let style = AlphabetStyle::default();
        let lib = ComponentLibrary::new(&rng, &style);
        let skeletons = SkeletonGenerator::new(&rng, &style, &lib).generate_all();
        assert_eq!(skeletons.len(), GLYPH_COUNT);
        for sk in &skeletons {
            assert!(!sk.strokes.is_empty(), "{}", sk.template_name);
            assert!(lookup(&sk.template_name).is_some());
        }
    }

    #[test]
    fn test_strokes_are_chained() {
        let rng = SeededRng::root(7);
        let style = AlphabetStyle::default();
        let lib = ComponentLibrary::new(&rng, &style);
        for sk in SkeletonGenerator::new(&rng, &style, &lib).generate_all() {
            for stroke in &sk.strokes {
                for pair in stroke.segments.windows(2) {
                    assert!(pair[0].p3.distance(pair[1].p0) < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_quiet_style_reproduces_template_exactly() {
        let rng = SeededRng::root(1);
        let style = quiet_style();
        let lib = ComponentLibrary::new(&rng, &style);
        let sk = SkeletonGenerator::new(&rng, &style, &lib).generate_glyph(0, "cross");
        assert_eq!(sk.template_name, "cross");
        assert_eq!(sk.strokes.len(), 2);
        assert!(sk.decorations.is_empty());

        let (start, end) = sk.strokes[0].endpoints().unwrap();
        let h = style.glyph_height();
        assert!(start.distance(Point::new(0.5 * style.glyph_width, 0.0)) < 1e-9);
        assert!(end.distance(Point::new(0.5 * style.glyph_width, h)) < 1e-9);
    }

    #[test]
    fn test_glyph_independent_of_siblings() {
        let rng = SeededRng::root(3);
        let style = AlphabetStyle::default();
        let lib = ComponentLibrary::new(&rng, &style);
        let generator = SkeletonGenerator::new(&rng, &style, &lib);
        let all = generator.generate_all();
        let names = generator.template_names();
        assert_eq!(generator.generate_glyph(12, &names[12]), all[12]);
    }

    #[test]
    fn test_variant_name_resolves_to_base() {
        let rng = SeededRng::root(3);
        let style = quiet_style();
        let lib = ComponentLibrary::new(&rng, &style);
        let sk = SkeletonGenerator::new(&rng, &style, &lib).generate_glyph(30, "ladder_v2");
        assert_eq!(sk.template_name, "ladder");
        assert_eq!(sk.strokes.len(), 4);
    }

    #[test]
    fn test_serifs_added_when_styled() {
        let rng = SeededRng::root(11);
        let style = AlphabetStyle {
            serif_style: SerifStyle::Slab,
            ..quiet_style()
        };
        let lib = ComponentLibrary::new(&rng, &style);
        let generator = SkeletonGenerator::new(&rng, &style, &lib);
        let serifs: usize = generator
            .generate_all()
            .iter()
            .map(|sk| decoration_counts(sk)[2].1)
            .sum();
        assert!(serifs > 0);
    }

    #[test]
    fn test_full_reuse_adds_component_stroke() {
        let rng = SeededRng::root(5);
        let style = AlphabetStyle {
            component_reuse: 1.0,
            ..quiet_style()
        };
        let lib = ComponentLibrary::new(&rng, &style);
        let sk = SkeletonGenerator::new(&rng, &style, &lib).generate_glyph(0, "vertical");
        assert_eq!(sk.strokes.len(), 2);
        let ends = sk.strokes[0].endpoints().unwrap();
        let grafted = sk.strokes[1].start().unwrap();
        assert!(grafted.distance(ends.0) < 1e-9 || grafted.distance(ends.1) < 1e-9);
    }

    #[test]
    fn test_unknown_template_gives_empty_skeleton() {
        let rng = SeededRng::root(5);
        let style = AlphabetStyle::default();
        let lib = ComponentLibrary::new(&rng, &style);
        let sk = SkeletonGenerator::new(&rng, &style, &lib).generate_glyph(0, "nonexistent");
        assert!(sk.strokes.is_empty());
    }
}
