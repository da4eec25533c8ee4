//! Linear mappings for the rectangular parts of a classic picker: a saturation/value square, a
//! vertical hue bar, and a horizontal alpha bar. Unlike the wheel, points outside a bar are clamped
//! to its edge, so dragging past the end of a bar pins the component at its limit.

use geo::Point;

use crate::bound::{clamp_unit, HUE_DEGREES};
use crate::polar::SurfaceSize;

// position along an axis as a fraction of its length, clamped to the axis
fn fraction(offset: f64, length: f64) -> f64 {
    if length > 0.0 {
        clamp_unit(offset / length)
    } else {
        0.0
    }
}

/// Saturation grows to the right and value grows upwards: the top right corner is the fully
/// saturated, fully bright color. Returns `(saturation, value)`.
pub fn saturation_value_for_position(position: Point<f64>, size: SurfaceSize) -> (f64, f64) {
    let saturation = fraction(position.x(), size.width);
    let value = 1.0 - fraction(position.y(), size.height);
    (saturation, value)
}

/// Inverse of [`saturation_value_for_position`].
pub fn position_for_saturation_value(saturation: f64, value: f64, size: SurfaceSize) -> Point<f64> {
    Point::new(
        clamp_unit(saturation) * size.width,
        (1.0 - clamp_unit(value)) * size.height,
    )
}

/// Hue grows downwards along a vertical bar. The bottom edge is a full turn, which wraps back to 0
/// once it is stored in a color.
pub fn hue_for_position(position: Point<f64>, size: SurfaceSize) -> f64 {
    fraction(position.y(), size.height) * HUE_DEGREES
}

/// The marker position on a hue bar, horizontally centered.
pub fn position_for_hue(hue: f64, size: SurfaceSize) -> Point<f64> {
    let y = num::clamp(hue / HUE_DEGREES, 0.0, 1.0) * size.height;
    Point::new(size.width / 2.0, y)
}

/// Alpha grows to the right along a horizontal bar.
pub fn alpha_for_position(position: Point<f64>, size: SurfaceSize) -> f64 {
    fraction(position.x(), size.width)
}

/// The marker position on an alpha bar, vertically centered.
pub fn position_for_alpha(alpha: f64, size: SurfaceSize) -> Point<f64> {
    Point::new(clamp_unit(alpha) * size.width, size.height / 2.0)
}
