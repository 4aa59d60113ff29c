//! Template catalog
//!
//! Each template is a topological blueprint: anchor points in normalized
//! `[0, 1]^2` glyph space (x to the right, y from the top of the cap
//! height down to the bottom of the descender) plus curvature hints. The
//! skeleton generator fills them with style-shaped bezier curves.

use crate::glyph::DecorationKind;
use crate::rng::SeededRng;
use crate::style::AlphabetStyle;

/// A point in normalized glyph space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
    /// Curvature of the segment to the next anchor
    pub bulge: f64,
}

/// Ordered anchors of one stroke
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeSpec {
    pub anchors: Vec<AnchorPoint>,
}

/// Abstract decoration, positioned in normalized space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationSpec {
    pub kind: DecorationKind,
    pub x: f64,
    pub y: f64,
    /// Relative to the style's stroke width
    pub size: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSpec {
    pub strokes: Vec<StrokeSpec>,
    pub decorations: Vec<DecorationSpec>,
}

pub type TemplateFn = fn(&mut SeededRng, &AlphabetStyle) -> TemplateSpec;

fn a(x: f64, y: f64) -> AnchorPoint {
    AnchorPoint { x, y, bulge: 0.0 }
}

fn ab(x: f64, y: f64, bulge: f64) -> AnchorPoint {
    AnchorPoint { x, y, bulge }
}

fn path(anchors: Vec<AnchorPoint>) -> StrokeSpec {
    StrokeSpec { anchors }
}

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> StrokeSpec {
    path(vec![a(x0, y0), a(x1, y1)])
}

fn strokes(strokes: Vec<StrokeSpec>) -> TemplateSpec {
    TemplateSpec {
        strokes,
        decorations: Vec::new(),
    }
}

fn decoration(kind: DecorationKind, x: f64, y: f64) -> DecorationSpec {
    DecorationSpec {
        kind,
        x,
        y,
        size: 1.0,
        angle: 0.0,
    }
}

impl TemplateSpec {
    fn with_decorations(mut self, decorations: Vec<DecorationSpec>) -> Self {
        self.decorations = decorations;
        self
    }
}

// One stroke

fn vertical(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.5, 0.0, 0.5, 1.0)])
}

fn horizontal(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.0, 0.5, 1.0, 0.5)])
}

fn diagonal_down(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.1, 0.0, 0.9, 1.0)])
}

fn diagonal_up(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.1, 1.0, 0.9, 0.0)])
}

fn arc_left(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![a(0.8, 0.0), ab(0.2, 0.5, 0.4), a(0.8, 1.0)])])
}

fn arc_right(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![a(0.2, 0.0), ab(0.8, 0.5, -0.4), a(0.2, 1.0)])])
}

fn s_curve(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![
        a(0.3, 0.0),
        ab(0.7, 0.33, 0.3),
        ab(0.3, 0.67, -0.3),
        a(0.7, 1.0),
    ])])
}

fn closed_loop(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![
        a(0.5, 0.1),
        ab(0.85, 0.35, 0.4),
        ab(0.5, 0.65, 0.4),
        ab(0.15, 0.35, 0.4),
        ab(0.5, 0.1, 0.4),
    ])])
}

fn spiral(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![
        a(0.5, 0.0),
        ab(0.85, 0.3, 0.35),
        ab(0.5, 0.6, 0.35),
        ab(0.25, 0.4, 0.35),
        ab(0.4, 0.3, 0.25),
        a(0.5, 0.35),
    ])])
}

fn hook_down(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![
        a(0.5, 0.0),
        a(0.5, 0.7),
        ab(0.7, 0.9, 0.3),
        a(0.9, 0.75),
    ])])
}

fn hook_up(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![
        a(0.5, 1.0),
        a(0.5, 0.3),
        ab(0.3, 0.1, -0.3),
        a(0.1, 0.25),
    ])])
}

fn wave(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![
        a(0.0, 0.5),
        ab(0.25, 0.2, 0.3),
        ab(0.5, 0.5, -0.3),
        ab(0.75, 0.8, 0.3),
        a(1.0, 0.5),
    ])])
}

// Two strokes

fn cross(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.5, 0.0, 0.5, 1.0), line(0.1, 0.45, 0.9, 0.45)])
}

fn t_junction(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.1, 0.0, 0.9, 0.0), line(0.5, 0.0, 0.5, 1.0)])
}

fn parallel_vert(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.3, 0.0, 0.3, 1.0), line(0.7, 0.0, 0.7, 1.0)])
}

fn parallel_horiz(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.1, 0.3, 0.9, 0.3), line(0.1, 0.7, 0.9, 0.7)])
}

fn v_shape(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.1, 0.0, 0.5, 1.0), line(0.9, 0.0, 0.5, 1.0)])
}

fn angle_shape(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.2, 0.0, 0.2, 0.7), line(0.2, 0.7, 0.8, 0.7)])
}

fn hook_bar(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        path(vec![a(0.3, 0.0), a(0.3, 0.6), ab(0.6, 0.85, 0.3), a(0.8, 0.65)]),
        line(0.1, 0.35, 0.6, 0.35),
    ])
}

fn loop_tail(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        path(vec![
            a(0.5, 0.1),
            ab(0.8, 0.25, 0.35),
            ab(0.5, 0.5, 0.35),
            ab(0.2, 0.25, 0.35),
            ab(0.5, 0.1, 0.35),
        ]),
        line(0.5, 0.5, 0.5, 1.0),
    ])
}

fn arc_dot(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![path(vec![a(0.2, 0.2), ab(0.8, 0.5, -0.35), a(0.2, 0.8)])])
        .with_decorations(vec![decoration(DecorationKind::Dot, 0.5, 0.15)])
}

fn y_shape(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.15, 0.0, 0.5, 0.45),
        path(vec![a(0.85, 0.0), a(0.5, 0.45), a(0.5, 1.0)]),
    ])
}

fn crescent(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        path(vec![a(0.7, 0.1), ab(0.2, 0.5, 0.45), a(0.7, 0.9)]),
        path(vec![a(0.7, 0.1), ab(0.4, 0.5, 0.25), a(0.7, 0.9)]),
    ])
}

// Three strokes

fn triple_parallel(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.2, 0.0, 0.2, 1.0),
        line(0.5, 0.0, 0.5, 1.0),
        line(0.8, 0.0, 0.8, 1.0),
    ])
}

fn open_box(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.2, 0.1, 0.2, 0.9),
        line(0.2, 0.9, 0.8, 0.9),
        line(0.8, 0.9, 0.8, 0.1),
    ])
}

fn zigzag(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.1, 0.0, 0.5, 0.35),
        line(0.5, 0.35, 0.1, 0.65),
        line(0.1, 0.65, 0.5, 1.0),
    ])
}

fn trident(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.2, 0.0, 0.2, 0.6),
        line(0.5, 0.0, 0.5, 0.6),
        line(0.8, 0.0, 0.8, 0.6),
    ])
    .with_decorations(vec![decoration(DecorationKind::Bar, 0.5, 0.6)])
}

fn enclosed_dot(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.2, 0.15, 0.8, 0.15),
        path(vec![a(0.2, 0.15), a(0.2, 0.85), a(0.8, 0.85), a(0.8, 0.15)]),
    ])
    .with_decorations(vec![decoration(DecorationKind::Dot, 0.5, 0.5)])
}

fn stacked_arcs(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        path(vec![a(0.2, 0.15), ab(0.5, 0.0, -0.3), a(0.8, 0.15)]),
        path(vec![a(0.2, 0.5), ab(0.5, 0.35, -0.3), a(0.8, 0.5)]),
        path(vec![a(0.2, 0.85), ab(0.5, 0.7, -0.3), a(0.8, 0.85)]),
    ])
}

fn fork_shape(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.5, 1.0, 0.5, 0.4),
        line(0.5, 0.4, 0.2, 0.0),
        line(0.5, 0.4, 0.8, 0.0),
    ])
}

fn bridge(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.15, 0.9, 0.15, 0.2),
        path(vec![a(0.15, 0.2), ab(0.5, 0.0, -0.3), a(0.85, 0.2)]),
        line(0.85, 0.2, 0.85, 0.9),
    ])
}

fn arrow_up(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.5, 1.0, 0.5, 0.15),
        line(0.2, 0.35, 0.5, 0.15),
        line(0.8, 0.35, 0.5, 0.15),
    ])
}

// Four strokes

fn grid(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.3, 0.1, 0.3, 0.9),
        line(0.7, 0.1, 0.7, 0.9),
        line(0.1, 0.35, 0.9, 0.35),
        line(0.1, 0.65, 0.9, 0.65),
    ])
}

fn diamond(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.5, 0.0, 0.9, 0.5),
        line(0.9, 0.5, 0.5, 1.0),
        line(0.5, 1.0, 0.1, 0.5),
        line(0.1, 0.5, 0.5, 0.0),
    ])
}

fn double_loop(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        path(vec![
            a(0.5, 0.05),
            ab(0.8, 0.15, 0.35),
            ab(0.5, 0.35, 0.35),
            ab(0.2, 0.15, 0.35),
            ab(0.5, 0.05, 0.35),
        ]),
        path(vec![
            a(0.5, 0.5),
            ab(0.8, 0.6, 0.35),
            ab(0.5, 0.8, 0.35),
            ab(0.2, 0.6, 0.35),
            ab(0.5, 0.5, 0.35),
        ]),
        line(0.5, 0.35, 0.5, 0.5),
    ])
}

fn nested_arcs(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        path(vec![a(0.15, 0.2), ab(0.5, 0.0, -0.4), a(0.85, 0.2)]),
        path(vec![a(0.25, 0.3), ab(0.5, 0.15, -0.3), a(0.75, 0.3)]),
        line(0.15, 0.2, 0.15, 0.9),
        line(0.85, 0.2, 0.85, 0.9),
    ])
}

fn cross_dots(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![line(0.5, 0.1, 0.5, 0.9), line(0.15, 0.5, 0.85, 0.5)]).with_decorations(vec![
        decoration(DecorationKind::Dot, 0.25, 0.25),
        decoration(DecorationKind::Dot, 0.75, 0.25),
        decoration(DecorationKind::Dot, 0.25, 0.75),
        decoration(DecorationKind::Dot, 0.75, 0.75),
    ])
}

fn ladder(_: &mut SeededRng, _: &AlphabetStyle) -> TemplateSpec {
    strokes(vec![
        line(0.25, 0.0, 0.25, 1.0),
        line(0.75, 0.0, 0.75, 1.0),
        line(0.25, 0.35, 0.75, 0.35),
        line(0.25, 0.65, 0.75, 0.65),
    ])
}

/// Every template, in registry order
pub const TEMPLATES: &[(&str, TemplateFn)] = &[
    ("vertical", vertical),
    ("horizontal", horizontal),
    ("diagonal_down", diagonal_down),
    ("diagonal_up", diagonal_up),
    ("arc_left", arc_left),
    ("arc_right", arc_right),
    ("s_curve", s_curve),
    ("loop", closed_loop),
    ("spiral", spiral),
    ("hook_down", hook_down),
    ("hook_up", hook_up),
    ("wave", wave),
    ("cross", cross),
    ("t_junction", t_junction),
    ("parallel_vert", parallel_vert),
    ("parallel_horiz", parallel_horiz),
    ("v_shape", v_shape),
    ("angle_shape", angle_shape),
    ("hook_bar", hook_bar),
    ("loop_tail", loop_tail),
    ("arc_dot", arc_dot),
    ("y_shape", y_shape),
    ("crescent", crescent),
    ("triple_parallel", triple_parallel),
    ("open_box", open_box),
    ("zigzag", zigzag),
    ("trident", trident),
    ("enclosed_dot", enclosed_dot),
    ("stacked_arcs", stacked_arcs),
    ("fork_shape", fork_shape),
    ("bridge", bridge),
    ("arrow_up", arrow_up),
    ("grid", grid),
    ("diamond", diamond),
    ("double_loop", double_loop),
    ("nested_arcs", nested_arcs),
    ("cross_dots", cross_dots),
    ("ladder", ladder),
];

/// Strip a trailing `_v<digits>` variant suffix
pub fn base_name(name: &str) -> &str {
    match name.rfind("_v") {
        Some(idx)
            if idx + 2 < name.len() && name[idx + 2..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &name[..idx]
        }
        _ => name,
    }
}

/// Find a template by name; variant names resolve to their base template
pub fn lookup(name: &str) -> Option<TemplateFn> {
    let base = base_name(name);
    TEMPLATES
        .iter()
        .find(|(n, _)| *n == base)
        .map(|(_, f)| *f)
}

/// Pick `count` template names in shuffled order.
///
/// Uses the `"template_selection"` fork. When the catalog is smaller than
/// `count`, names repeat as `"{name}_v{k}"` variants.
pub fn select_templates(rng: &SeededRng, count: usize) -> Vec<String> {
    let mut names: Vec<String> = TEMPLATES.iter().map(|(n, _)| n.to_string()).collect();
    let mut selection = rng.fork("template_selection");
    selection.shuffle(&mut names);

    if names.len() >= count {
        names.truncate(count);
        return names;
    }

    let catalog = names.len();
    let mut selected = names.clone();
    let mut i = 0;
    while selected.len() < count {
        selected.push(format!("{}_v{}", names[i % catalog], i / catalog + 2));
        i += 1;
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<_> = TEMPLATES.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), TEMPLATES.len());
        assert!(TEMPLATES.len() >= 26);
    }

    #[test]
    fn test_anchors_normalized() {
        let mut rng = SeededRng::root(0);
        let style = AlphabetStyle::default();
        for (name, build) in TEMPLATES {
            let spec = build(&mut rng, &style);
            assert!(!spec.strokes.is_empty(), "{name}");
            for stroke in &spec.strokes {
                assert!(stroke.anchors.len() >= 2, "{name}");
                for p in &stroke.anchors {
                    assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y), "{name}");
                }
            }
        }
    }

    #[test]
    fn test_base_name_strips_only_variant_suffix() {
        assert_eq!(base_name("cross_v2"), "cross");
        assert_eq!(base_name("loop_tail_v13"), "loop_tail");
        assert_eq!(base_name("parallel_vert"), "parallel_vert");
        assert_eq!(base_name("parallel_vert_v3"), "parallel_vert");
        assert_eq!(base_name("wave_v"), "wave_v");
    }

    #[test]
    fn test_lookup() {
        assert!(lookup("parallel_vert").is_some());
        assert!(lookup("diamond_v2").is_some());
        assert!(lookup("nonexistent").is_none());
    }

    #[test]
    fn test_select_is_deterministic_and_unique() {
        let a = select_templates(&SeededRng::root(5), 26);
        let b = select_templates(&SeededRng::root(5), 26);
        assert_eq!(a, b);
        assert_eq!(a.len(), 26);
        let unique: HashSet<_> = a.iter().collect();
        assert_eq!(unique.len(), 26);
    }

    #[test]
    fn test_select_more_than_catalog_uses_variants() {
        let names = select_templates(&SeededRng::root(5), TEMPLATES.len() + 3);
        assert_eq!(names.len(), TEMPLATES.len() + 3);
        let variants: Vec<_> = names.iter().filter(|n| n.ends_with("_v2")).collect();
        assert_eq!(variants.len(), 3);
        for name in &names {
            assert!(lookup(name).is_some(), "{name}");
        }
    }
}
