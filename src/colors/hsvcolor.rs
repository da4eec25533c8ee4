//! This module implements the HSV color space, the natural coordinates of a color wheel: hue is the
//! angle around the wheel, saturation is the distance from the gray center, and value is how far
//! the color is from black. Value is a poor analog of luminance (pure blue and white have the same
//! value), but HSV maps directly onto the shapes a picker draws, which is the whole point here.
//!
//! RGB channels are always exchanged as 0-255 integers, alpha included.

use float_cmp::{ApproxEq, F64Margin};

use crate::bound::{clamp_unit, wrap_hue};

/// An HSV color with alpha. Hue is kept in [0, 360) degrees, and saturation, value, and alpha are
/// kept in [0, 1]: every way of building one enforces this, so the fields are read-only and any
/// change produces a new color.
///
/// # Example
/// ```
/// # use huewheel::colors::HsvColor;
/// let orange = HsvColor::from_rgb(255, 128, 0, 255);
/// assert!((orange.hue() - 30.1).abs() < 0.1);
/// assert_eq!(orange.to_rgb(), (255, 128, 0, 255));
/// // out-of-range input is brought back into bounds
/// let wrapped = HsvColor::new(400.0, 1.5, -0.5, 1.0);
/// assert_eq!(wrapped.hue(), 40.0);
/// assert_eq!(wrapped.saturation(), 1.0);
/// assert_eq!(wrapped.value(), 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct HsvColor {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: f64,
}

impl HsvColor {
    /// Fully saturated, fully bright red.
    pub const DEFAULT: HsvColor = HsvColor {
        hue: 0.0,
        saturation: 1.0,
        value: 1.0,
        alpha: 1.0,
    };

    /// Opaque black.
    pub const BLACK: HsvColor = HsvColor {
        hue: 0.0,
        saturation: 0.0,
        value: 0.0,
        alpha: 1.0,
    };

    /// Builds a color, wrapping the hue modulo 360 and clamping the other components into [0, 1].
    /// A NaN hue becomes 0.
    pub fn new(hue: f64, saturation: f64, value: f64, alpha: f64) -> HsvColor {
        HsvColor {
            hue: wrap_hue(hue),
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
            alpha: clamp_unit(alpha),
        }
    }

    /// The hue, in degrees, in [0, 360).
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// The saturation, in [0, 1]. 0 is gray.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// The value, in [0, 1]. 0 is black.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The alpha, in [0, 1]. 0 is fully transparent.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// A copy of this color with a different hue.
    pub fn with_hue(&self, hue: f64) -> HsvColor {
        HsvColor::new(hue, self.saturation, self.value, self.alpha)
    }

    /// A copy of this color with a different saturation.
    pub fn with_saturation(&self, saturation: f64) -> HsvColor {
        HsvColor::new(self.hue, saturation, self.value, self.alpha)
    }

    /// A copy of this color with a different value.
    pub fn with_value(&self, value: f64) -> HsvColor {
        HsvColor::new(self.hue, self.saturation, value, self.alpha)
    }

    /// A copy of this color with a different alpha.
    pub fn with_alpha(&self, alpha: f64) -> HsvColor {
        HsvColor::new(self.hue, self.saturation, self.value, alpha)
    }

    /// A copy of this color with both saturation and value replaced, as a saturation/value square
    /// picks them together.
    pub fn with_saturation_value(&self, saturation: f64, value: f64) -> HsvColor {
        HsvColor::new(self.hue, saturation, value, self.alpha)
    }

    /// Converts from RGB, with every channel (alpha included) given as 0-255.
    ///
    /// Grays have no hue: the formula produces NaN for them, and they come out with a hue of 0.
    pub fn from_rgb(r: u8, g: u8, b: u8, a: u8) -> HsvColor {
        let (r, g, b) = (from_byte(r), from_byte(g), from_byte(b));

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;

        // which sector of the hexagon we're in depends on the largest channel: within it, the
        // difference of the other two moves us linearly along the edge
        let hue = if max_c == r {
            ((g - b) / chroma).rem_euclid(6.0) * 60.0
        } else if max_c == g {
            ((b - r) / chroma) * 60.0 + 120.0
        } else {
            ((r - g) / chroma) * 60.0 + 240.0
        };

        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };

        // new() turns the NaN hue of a gray into 0
        HsvColor::new(hue, saturation, max_c, from_byte(a))
    }

    /// Converts to RGB, returning `(r, g, b, a)` with every channel as 0-255.
    pub fn to_rgb(&self) -> (u8, u8, u8, u8) {
        let chroma = self.value * self.saturation;
        let sector = self.hue / 60.0;
        // the second-largest channel, when the smallest is 0
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match sector.floor() as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let offset = self.value - chroma;
        (
            to_byte(r1 + offset),
            to_byte(g1 + offset),
            to_byte(b1 + offset),
            to_byte(self.alpha),
        )
    }

    /// Converts from a packed `0xAARRGGBB` integer.
    pub fn from_argb(argb: u32) -> HsvColor {
        let [a, r, g, b] = argb.to_be_bytes();
        HsvColor::from_rgb(r, g, b, a)
    }

    /// Packs this color as a `0xAARRGGBB` integer.
    pub fn to_argb(&self) -> u32 {
        let (r, g, b, a) = self.to_rgb();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Formats this color as `#RRGGBBAA`, with uppercase hex digits.
    pub fn to_hex_code(&self) -> String {
        let (r, g, b, a) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

fn from_byte(c: u8) -> f64 {
    f64::from(c) / 255.0
}

fn to_byte(c: f64) -> u8 {
    (clamp_unit(c) * 255.0).round() as u8
}

impl Default for HsvColor {
    fn default() -> HsvColor {
        HsvColor::DEFAULT
    }
}

impl From<[f64; 4]> for HsvColor {
    fn from(components: [f64; 4]) -> HsvColor {
        let [h, s, v, a] = components;
        HsvColor::new(h, s, v, a)
    }
}

impl From<HsvColor> for [f64; 4] {
    fn from(color: HsvColor) -> [f64; 4] {
        [color.hue, color.saturation, color.value, color.alpha]
    }
}

/// Component-wise comparison: every component, hue included, must be within the margin. Hues of
/// 0 and 359.9999 are close on the wheel but not here.
impl ApproxEq for HsvColor {
    type Margin = F64Margin;

    fn approx_eq<M: Into<F64Margin>>(self, other: HsvColor, margin: M) -> bool {
        let margin = margin.into();
        self.hue.approx_eq(other.hue, margin)
            && self.saturation.approx_eq(other.saturation, margin)
            && self.value.approx_eq(other.value, margin)
            && self.alpha.approx_eq(other.alpha, margin)
    }
}
