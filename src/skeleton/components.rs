//! Shared stroke primitives
//!
//! A small library of reusable sub-strokes built once per alphabet from the
//! style. Glyphs occasionally graft one onto an existing stroke end, which
//! gives the script shared "radicals" the way CJK characters share parts.

use crate::bezier::{make_arc, make_line, make_s_curve};
use crate::glyph::Stroke;
use crate::rng::SeededRng;
use crate::style::AlphabetStyle;
use kurbo::Point;

/// A named reusable stroke, starting at the origin
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub stroke: Stroke,
}

type Builder = fn(&mut SeededRng) -> Stroke;

const BUILDERS: [Builder; 8] = [
    tick,
    hook,
    arc_segment,
    crossbar,
    descender,
    ascender,
    curve_connector,
    dot_stroke,
];

fn random_sign(rng: &mut SeededRng) -> f64 {
    if rng.coin(0.5) {
        1.0
    } else {
        -1.0
    }
}

fn tick(rng: &mut SeededRng) -> Stroke {
    let length = rng.uniform(0.1, 0.25);
    let lean = rng.uniform(-0.5, 0.5);
    let end = Point::new(length * 0.3 + lean * 0.1, length);
    Stroke::new(vec![make_line(Point::ORIGIN, end)])
}

fn hook(rng: &mut SeededRng) -> Stroke {
    let bulge = rng.uniform(0.15, 0.4) * random_sign(rng);
    let mid = Point::new(0.0, 0.3);
    let end = Point::new(0.15, 0.4);
    Stroke::new(vec![
        make_arc(Point::ORIGIN, mid, bulge * 0.3),
        make_arc(mid, end, bulge),
    ])
}

fn arc_segment(rng: &mut SeededRng) -> Stroke {
    let bulge = rng.uniform(0.2, 0.5) * random_sign(rng);
    let end = Point::new(rng.uniform(0.15, 0.3), rng.uniform(0.2, 0.4));
    Stroke::new(vec![make_arc(Point::ORIGIN, end, bulge)])
}

fn crossbar(rng: &mut SeededRng) -> Stroke {
    let width = rng.uniform(0.2, 0.5);
    let curve = rng.uniform(-0.05, 0.05);
    Stroke::new(vec![make_arc(Point::ORIGIN, Point::new(width, curve), curve)])
}

fn descender(rng: &mut SeededRng) -> Stroke {
    let depth = rng.uniform(0.15, 0.3);
    let bulge = rng.uniform(-0.2, 0.2);
    let end = Point::new(rng.uniform(-0.05, 0.1), depth);
    Stroke::new(vec![make_arc(Point::ORIGIN, end, bulge)])
}

fn ascender(rng: &mut SeededRng) -> Stroke {
    let height = rng.uniform(0.15, 0.3);
    let bulge = rng.uniform(-0.2, 0.2);
    let end = Point::new(rng.uniform(-0.05, 0.1), -height);
    Stroke::new(vec![make_arc(Point::ORIGIN, end, bulge)])
}

fn curve_connector(rng: &mut SeededRng) -> Stroke {
    let amplitude = rng.uniform(0.05, 0.15);
    Stroke::new(vec![make_s_curve(Point::ORIGIN, Point::new(0.25, 0.25), amplitude)])
}

/// Tiny stroke that reads as a dot at normal scale
fn dot_stroke(rng: &mut SeededRng) -> Stroke {
    let size = rng.uniform(0.02, 0.05);
    Stroke::new(vec![make_arc(Point::ORIGIN, Point::new(size, size * 0.5), 0.3)])
}

/// The per-alphabet primitive library
#[derive(Debug, Clone)]
pub struct ComponentLibrary {
    components: Vec<Component>,
}

impl ComponentLibrary {
    /// Build `max(6, floor(8 + component_reuse * 10))` primitives on the
    /// `"components"` fork, cycling through the eight builders.
    pub fn new(rng: &SeededRng, style: &AlphabetStyle) -> Self {
        let root = rng.fork("components");
        let count = ((8.0 + style.component_reuse * 10.0).floor().max(6.0)) as usize;
        let components = (0..count)
            .map(|i| {
                let name = format!("comp_{i}");
                let mut r = root.fork(&name);
                let stroke = BUILDERS[i % BUILDERS.len()](&mut r);
                Component { name, stroke }
            })
            .collect();
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component by index, wrapping around
    pub fn get(&self, index: usize) -> Option<&Component> {
        if self.components.is_empty() {
            return None;
        }
        self.components.get(index % self.components.len())
    }

    pub fn random_component(&self, rng: &mut SeededRng) -> Option<&Component> {
        rng.choose(&self.components)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}
