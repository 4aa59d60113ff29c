//! SVG rendering
//!
//! Glyph space and SVG space both grow downwards, so mapping an outline
//! into a viewbox is a uniform scale plus a translation. All polygons of a
//! glyph share one `<path>` under the nonzero fill rule; the expander's
//! winding normalization keeps holes open.

use crate::alphabet::Alphabet;
use crate::core::settings::ExportSettings;
use crate::geometry::{BoundingBox, EPSILON};
use crate::glyph::{Glyph, Outline};
use anyhow::{Context, Result};
use kurbo::{Affine, BezPath, Point};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Height reserved above the sheet grid for the seed and preset lines
const SHEET_HEADER: f64 = 40.0;

/// Space between a cell's bottom edge and the baseline of its label
const LABEL_GAP: f64 = 4.0;

/// Affine map fitting `source` inside `target` with a margin fraction.
///
/// Aspect ratio is preserved and the result is centred in the target.
/// `None` when the source has no extent in either direction.
pub fn fit_transform(source: &BoundingBox, target: &BoundingBox, margin: f64) -> Option<Affine> {
    if source.width() < EPSILON || source.height() < EPSILON {
        return None;
    }
    let inner_w = target.width() * (1.0 - 2.0 * margin);
    let inner_h = target.height() * (1.0 - 2.0 * margin);
    let scale = (inner_w / source.width()).min(inner_h / source.height());

    let ox = target.x_min + target.width() * margin + (inner_w - source.width() * scale) / 2.0;
    let oy = target.y_min + target.height() * margin + (inner_h - source.height() * scale) / 2.0;

    Some(
        Affine::translate((ox, oy))
            * Affine::scale(scale)
            * Affine::translate((-source.x_min, -source.y_min)),
    )
}

fn round2(p: Point) -> Point {
    Point::new((p.x * 100.0).round() / 100.0, (p.y * 100.0).round() / 100.0)
}

/// Compound path for an outline fitted into `target`.
///
/// Every polygon with at least three points becomes one closed subpath.
pub fn outline_path(outline: &Outline, target: &BoundingBox, margin: f64) -> BezPath {
    let mut path = BezPath::new();
    let Some(transform) = fit_transform(&outline.bounds(), target, margin) else {
        return path;
    };
    for polygon in outline.polygons.iter().filter(|p| p.len() >= 3) {
        let mut points = polygon.iter().map(|&p| round2(transform * p));
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
            path.close_path();
        }
    }
    path
}

fn push_line(svg: &mut String, line: &str) {
    svg.push_str(line);
    svg.push('\n');
}

fn push_glyph_path(svg: &mut String, path: &BezPath) {
    if path.elements().is_empty() {
        return;
    }
    push_line(
        svg,
        &format!(
            r#"<path d="{}" fill="black" stroke="none" fill-rule="nonzero"/>"#,
            path.to_svg()
        ),
    );
}

/// Render one glyph as a standalone square SVG document
pub fn glyph_to_svg(glyph: &Glyph, size: f64, margin: f64) -> String {
    let mut svg = String::new();
    push_line(
        &mut svg,
        &format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}px" height="{size}px" viewBox="0 0 {size} {size}">"#
        ),
    );
    push_line(
        &mut svg,
        &format!(r#"<rect x="0" y="0" width="{size}" height="{size}" fill="white"/>"#),
    );
    let target = BoundingBox::new(0.0, 0.0, size, size);
    push_glyph_path(&mut svg, &outline_path(&glyph.outline, &target, margin));
    svg.push_str("</svg>\n");
    svg
}

/// Write `glyph_<label>.svg` for every glyph into `dir`, returning the paths
pub fn export_individual(
    alphabet: &Alphabet,
    dir: &Path,
    settings: &ExportSettings,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut paths = Vec::with_capacity(alphabet.len());
    for glyph in alphabet {
        let path = dir.join(format!("glyph_{}.svg", glyph.label.to_ascii_lowercase()));
        let svg = glyph_to_svg(glyph, settings.individual_size, settings.individual_margin);
        fs::write(&path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
        paths.push(path);
    }
    debug!("Wrote {} glyph files to {}", paths.len(), dir.display());
    Ok(paths)
}

/// Render the grid specimen sheet as an SVG document
pub fn sheet_to_svg(alphabet: &Alphabet, settings: &ExportSettings) -> String {
    let columns = settings.columns.max(1);
    let rows = alphabet.len().div_ceil(columns);
    let cell = settings.cell_size;
    let pad = settings.padding;
    let label_h = settings.label_font_size + LABEL_GAP;

    let total_w = columns as f64 * cell;
    let total_h = rows as f64 * (cell + label_h) + SHEET_HEADER;

    let mut svg = String::new();
    push_line(
        &mut svg,
        &format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_w}px" height="{total_h}px" viewBox="0 0 {total_w} {total_h}">"#
        ),
    );
    push_line(
        &mut svg,
        &format!(r#"<rect x="0" y="0" width="{total_w}" height="{total_h}" fill="white"/>"#),
    );
    push_line(
        &mut svg,
        &format!(
            r##"<text x="10" y="20" font-size="14px" font-family="monospace" fill="#666">Seed: {}</text>"##,
            alphabet.seed
        ),
    );
    if let Some(preset) = &alphabet.preset_name {
        push_line(
            &mut svg,
            &format!(
                r##"<text x="10" y="36" font-size="12px" font-family="monospace" fill="#999">Preset: {}</text>"##,
                escape_text(preset)
            ),
        );
    }

    for (i, glyph) in alphabet.iter().enumerate() {
        let x0 = (i % columns) as f64 * cell;
        let y0 = SHEET_HEADER + (i / columns) as f64 * (cell + label_h);

        push_line(
            &mut svg,
            &format!(
                r##"<rect x="{x0}" y="{y0}" width="{cell}" height="{cell}" fill="none" stroke="#eee" stroke-width="0.5"/>"##
            ),
        );
        let target = BoundingBox::new(x0 + pad, y0 + pad, x0 + cell - pad, y0 + cell - pad);
        push_glyph_path(
            &mut svg,
            &outline_path(&glyph.outline, &target, settings.sheet_margin),
        );
        push_line(
            &mut svg,
            &format!(
                r##"<text x="{}" y="{}" text-anchor="middle" font-size="{}px" font-family="monospace" fill="#888">{}</text>"##,
                x0 + cell / 2.0,
                y0 + cell + label_h - 2.0,
                settings.label_font_size,
                glyph.label
            ),
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Write the specimen sheet to `path`
pub fn export_sheet(alphabet: &Alphabet, path: &Path, settings: &ExportSettings) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, sheet_to_svg(alphabet, settings))
        .with_context(|| format!("Failed to write specimen sheet {}", path.display()))?;
    debug!("Wrote specimen sheet to {}", path.display());
    Ok(())
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Skeleton;

    fn square_glyph() -> Glyph {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        Glyph {
            label: 'Q',
            index: 16,
            skeleton: Skeleton::default(),
            outline: Outline::new(vec![square]),
            template_name: "test".to_string(),
        }
    }

    #[test]
    fn test_fit_preserves_aspect_and_centres() {
        let source = BoundingBox::new(0.0, 0.0, 2.0, 1.0);
        let target = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let t = fit_transform(&source, &target, 0.1).unwrap();
        // 80 px of room, width-limited: scale 40
        let a = t * Point::new(0.0, 0.0);
        let b = t * Point::new(2.0, 1.0);
        assert!(a.distance(Point::new(10.0, 30.0)) < 1e-9, "{a:?}");
        assert!(b.distance(Point::new(90.0, 70.0)) < 1e-9, "{b:?}");
    }

    #[test]
    fn test_flat_outline_has_no_transform() {
        let line = BoundingBox::new(0.0, 0.0, 1.0, 0.0);
        assert!(fit_transform(&line, &BoundingBox::new(0.0, 0.0, 1.0, 1.0), 0.0).is_none());
    }

    #[test]
    fn test_glyph_svg_has_one_nonzero_path() {
        let svg = glyph_to_svg(&square_glyph(), 200.0, 0.1);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains(r#"fill-rule="nonzero""#));
        assert!(svg.contains(r#"fill="white""#));
        assert!(svg.contains('Z'));
    }

    #[test]
    fn test_glyph_svg_writes_one_element_per_line() {
        let svg = glyph_to_svg(&square_glyph(), 100.0, 0.1);
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("<svg "));
        assert!(lines[1].starts_with("<rect "));
        assert!(lines[2].starts_with("<path "));
        assert_eq!(lines[3], "</svg>");
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_empty_glyph_has_no_path() {
        let mut glyph = square_glyph();
        glyph.outline = Outline::default();
        assert!(!glyph_to_svg(&glyph, 100.0, 0.1).contains("<path"));
    }
}
