//! This module describes how components of an [`HsvColor`] are kept inside their bounds. There are
//! two very different policies in play, and confusing them is the easiest way to get a color
//! harmony subtly wrong:
//!
//! - **clamping** saturates at a bound: 1.3 becomes 1, -0.2 becomes 0.
//! - **wrapping** treats the range as a circle: 1.3 becomes 0.3, -0.2 becomes 0.8. Hue is always
//!   wrapped, because 370 degrees is the same direction as 10 degrees.
//!
//! Wrapping can additionally be *floored*: the wrapped value is raised to a minimum afterwards. The
//! floor is applied after the wrap, never before, which is not the same thing at all.
//!
//! [`HsvColor`]: ../colors/hsvcolor/struct.HsvColor.html

/// The size of the hue circle, in degrees.
pub const HUE_DEGREES: f64 = 360.0;

/// Wraps a hue in degrees into the half-open range [0, 360). NaN has no direction, so it is
/// treated as 0: this is what makes grays come out with a hue of 0.
pub fn wrap_hue(hue: f64) -> f64 {
    if hue.is_nan() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(HUE_DEGREES);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped >= HUE_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Clamps a component into [0, 1]. NaN becomes 0.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        num::clamp(x, 0.0, 1.0)
    }
}

/// Clamps only from above: anything larger than `max` becomes `max`, anything else is left alone.
pub fn at_most(x: f64, max: f64) -> f64 {
    x.min(max)
}

/// Wraps a component into [0, 1) using a floored modulus, so negative values come back in from
/// the top.
pub fn wrap_unit(x: f64) -> f64 {
    x.rem_euclid(1.0)
}

/// Wraps a component into [0, 1) and then raises it to at least `floor`.
pub fn wrap_unit_at_least(x: f64, floor: f64) -> f64 {
    wrap_unit(x).max(floor)
}
