//! Output surfaces: SVG files, specimen sheets and JSON dumps

pub mod json;
pub mod svg;

pub use json::{alphabet_to_json, export_json};
pub use svg::{export_individual, export_sheet, fit_transform, glyph_to_svg, outline_path, sheet_to_svg};
