//! Affine transforms
//!
//! kurbo's `Affine` is the 2x3 matrix; `a * b` applies `b` first. The
//! constructors here name the operations the skeleton generator uses.

use kurbo::{Affine, Point, Vec2};

pub type AffineTransform = Affine;

/// Rotate by `angle` radians around `center`
pub fn rotate_about(center: Point, angle: f64) -> Affine {
    Affine::translate(center.to_vec2()) * Affine::rotate(angle) * Affine::translate(-center.to_vec2())
}

/// Non-uniform scale around `center`
pub fn scale_about(center: Point, sx: f64, sy: f64) -> Affine {
    Affine::translate(center.to_vec2())
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate(-center.to_vec2())
}

/// Mirror across the vertical axis (x -> -x)
pub fn mirror_x() -> Affine {
    Affine::FLIP_X
}

/// Mirror across the horizontal axis (y -> -y)
pub fn mirror_y() -> Affine {
    Affine::FLIP_Y
}

/// Translation moving `from` onto `to`
pub fn translate_onto(from: Point, to: Point) -> Affine {
    Affine::translate(to - from)
}

/// Apply the linear part only, for direction vectors
pub fn apply_to_vector(transform: Affine, v: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = transform.as_coeffs();
    Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
}
