//! Geometric Primitives and Operations
//!
//! Points and vectors are kurbo's `Point` and `Vec2`; this module adds the
//! pieces the glyph pipeline needs on top of them: bounding boxes, affine
//! helpers and plain polygon math.

pub mod bounds;
pub mod point;
pub mod polygon;
pub mod transform;

// Re-export commonly used items
pub use bounds::BoundingBox;
pub use point::{VectorExt, EPSILON};
pub use polygon::{
    ensure_ccw, ensure_cw, is_ccw, regular_polygon, signed_area, vertex_centroid, winding_number,
    Polygon,
};
pub use transform::AffineTransform;
