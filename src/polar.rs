//! This module maps between points on a color wheel and colors. The wheel is the largest disc that
//! fits in the middle of a drawing surface: the angle of a point around the center is the hue, and
//! its distance from the center (as a fraction of the radius) is the saturation. Value can't be
//! picked on a flat wheel, so it is supplied by the caller.
//!
//! Screen coordinates are assumed, with y growing downwards: hue therefore increases clockwise on
//! screen. Both directions of the mapping use the same convention, so markers land exactly where
//! the colors were picked.

use geo::Point;

use crate::bound::{wrap_hue, HUE_DEGREES};
use crate::colors::HsvColor;
use crate::harmony::ColorHarmonyMode;

/// The width and height of a drawing surface, in the same units as the points drawn on it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// The horizontal extent.
    pub width: f64,
    /// The vertical extent.
    pub height: f64,
}

impl SurfaceSize {
    /// A surface of the given width and height.
    pub fn new(width: f64, height: f64) -> SurfaceSize {
        SurfaceSize { width, height }
    }

    /// A square surface, which is what a color wheel is normally drawn on.
    pub fn square(side: f64) -> SurfaceSize {
        SurfaceSize::new(side, side)
    }

    /// The middle of the surface.
    pub fn center(&self) -> Point<f64> {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// The radius of the largest disc centered on the surface.
    pub fn radius(&self) -> f64 {
        (self.width / 2.0).min(self.height / 2.0)
    }
}

/// Returns the color under `position`, or `None` if the point is off the wheel. Points outside the
/// disc don't snap to the rim: a drag that wanders off the wheel simply stops changing the color.
/// The result has the given `value` and is fully opaque.
///
/// # Example
/// ```
/// # use geo::Point;
/// # use huewheel::polar::{color_for_position, SurfaceSize};
/// let size = SurfaceSize::square(100.0);
/// let rim = color_for_position(Point::new(100.0, 50.0), size, 1.0).unwrap();
/// assert!(rim.hue() < 1e-9 && (rim.saturation() - 1.0).abs() < 1e-9);
/// // the corner is further from the center than the rim
/// assert!(color_for_position(Point::new(0.0, 0.0), size, 1.0).is_none());
/// ```
pub fn color_for_position(position: Point<f64>, size: SurfaceSize, value: f64) -> Option<HsvColor> {
    let radius = size.radius();
    // a surface with no room for a disc has nothing to pick
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let offset = position - size.center();
    let distance = offset.x().hypot(offset.y());
    // written so that a NaN distance is off the wheel too
    if !(distance <= radius) {
        return None;
    }
    let angle = offset.y().atan2(offset.x()).to_degrees();
    let hue = (angle + HUE_DEGREES) % HUE_DEGREES;
    Some(HsvColor::new(hue, distance / radius, value, 1.0))
}

/// Returns the point on the wheel for a hue and saturation: the inverse of
/// [`color_for_position`]. Saturation 0 is the center, saturation 1 is on the rim.
pub fn position_for(hue: f64, saturation: f64, size: SurfaceSize) -> Point<f64> {
    let distance = saturation * size.radius();
    let angle = wrap_hue(hue).to_radians();
    let center = size.center();
    let (dx, dy) = (distance * angle.cos(), distance * angle.sin());
    let mut point = center + Point::new(dx, dy);
    // rounding can leave a rim point a hair outside the disc, where it could no longer be picked:
    // pull it in until it measures no further out than asked for
    let mut shrink = f64::EPSILON;
    for _ in 0..64 {
        let offset = point - center;
        if offset.x().hypot(offset.y()) <= distance {
            break;
        }
        let scale = 1.0 - shrink;
        point = center + Point::new(dx * scale, dy * scale);
        shrink *= 2.0;
    }
    point
}

/// The point on the wheel where `color` would be picked.
pub fn position_for_color(color: &HsvColor, size: SurfaceSize) -> Point<f64> {
    position_for(color.hue(), color.saturation(), size)
}

/// The marker positions for every color of a harmony, in the same order as
/// [`HsvColor::get_colors`].
pub fn harmony_positions(base: &HsvColor, mode: ColorHarmonyMode, size: SurfaceSize) -> Vec<Point<f64>> {
    base.get_colors(mode)
        .iter()
        .map(|color| position_for_color(color, size))
        .collect()
}
