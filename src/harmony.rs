//! This module implements color harmonies: named rules that derive a small palette of related colors
//! from a single base color. Every harmony produces exactly four colors in a fixed order, because
//! pickers place a marker for each one by position: the first color always gets the first marker.
//!
//! Most harmonies rotate the hue around the wheel, sometimes also darkening or desaturating a copy
//! so that the palette has some contrast. Monochromatic and shade harmonies leave the hue alone and
//! walk saturation or value instead, wrapping around rather than piling up at the bounds.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::bound::{at_most, clamp_unit, wrap_unit, wrap_unit_at_least};
use crate::colors::HsvColor;
use crate::error::DecodeError;

/// A rule for deriving a palette from a base color. The textual name of each mode (used by
/// `Display`, `FromStr`, and serde) is its name in upper snake case, e.g. `SPLIT_COMPLEMENTARY`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorHarmonyMode {
    /// No harmony: no derived colors at all.
    None,
    /// The color opposite on the wheel, plus lighter and darker variants of the base.
    Complementary,
    /// Four neighbors, 30 degrees apart.
    Analogous,
    /// The two neighbors of the complement, 150 and 210 degrees away.
    SplitComplementary,
    /// The two colors a third of the wheel away.
    Triadic,
    /// The colors a quarter, a half, and three quarters of the wheel away.
    Tetradic,
    /// The same hue at different saturations.
    Monochromatic,
    /// The same hue at different values.
    Shades,
}

lazy_static! {
    static ref MODES_BY_NAME: HashMap<&'static str, ColorHarmonyMode> = hashmap! {
        "NONE" => ColorHarmonyMode::None,
        "COMPLEMENTARY" => ColorHarmonyMode::Complementary,
        "ANALOGOUS" => ColorHarmonyMode::Analogous,
        "SPLIT_COMPLEMENTARY" => ColorHarmonyMode::SplitComplementary,
        "TRIADIC" => ColorHarmonyMode::Triadic,
        "TETRADIC" => ColorHarmonyMode::Tetradic,
        "MONOCHROMATIC" => ColorHarmonyMode::Monochromatic,
        "SHADES" => ColorHarmonyMode::Shades,
    };
}

impl ColorHarmonyMode {
    /// Every mode, in declaration order.
    pub const ALL: [ColorHarmonyMode; 8] = [
        ColorHarmonyMode::None,
        ColorHarmonyMode::Complementary,
        ColorHarmonyMode::Analogous,
        ColorHarmonyMode::SplitComplementary,
        ColorHarmonyMode::Triadic,
        ColorHarmonyMode::Tetradic,
        ColorHarmonyMode::Monochromatic,
        ColorHarmonyMode::Shades,
    ];

    /// The textual name of this mode.
    pub fn name(&self) -> &'static str {
        match *self {
            ColorHarmonyMode::None => "NONE",
            ColorHarmonyMode::Complementary => "COMPLEMENTARY",
            ColorHarmonyMode::Analogous => "ANALOGOUS",
            ColorHarmonyMode::SplitComplementary => "SPLIT_COMPLEMENTARY",
            ColorHarmonyMode::Triadic => "TRIADIC",
            ColorHarmonyMode::Tetradic => "TETRADIC",
            ColorHarmonyMode::Monochromatic => "MONOCHROMATIC",
            ColorHarmonyMode::Shades => "SHADES",
        }
    }
}

impl Default for ColorHarmonyMode {
    fn default() -> ColorHarmonyMode {
        ColorHarmonyMode::None
    }
}

impl fmt::Display for ColorHarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorHarmonyMode {
    type Err = DecodeError;

    /// Parses a mode from its exact name. Case matters: `"triadic"` is rejected.
    fn from_str(s: &str) -> Result<ColorHarmonyMode, DecodeError> {
        MODES_BY_NAME
            .get(s)
            .cloned()
            .ok_or_else(|| DecodeError::UnknownMode(s.to_string()))
    }
}

impl HsvColor {
    /// Derives the palette for a harmony mode: exactly four colors, in a fixed order, or none at
    /// all for [`ColorHarmonyMode::None`]. Alpha is always carried over from `self`.
    ///
    /// # Example
    /// ```
    /// # use huewheel::colors::HsvColor;
    /// # use huewheel::harmony::ColorHarmonyMode;
    /// let red = HsvColor::new(0.0, 1.0, 1.0, 1.0);
    /// let palette = red.get_colors(ColorHarmonyMode::Complementary);
    /// assert_eq!(palette.len(), 4);
    /// assert_eq!(palette[2], HsvColor::new(180.0, 1.0, 1.0, 1.0));
    /// assert!(red.get_colors(ColorHarmonyMode::None).is_empty());
    /// ```
    pub fn get_colors(&self, mode: ColorHarmonyMode) -> Vec<HsvColor> {
        match mode {
            ColorHarmonyMode::None => Vec::new(),
            ColorHarmonyMode::Complementary => complementary(self).to_vec(),
            ColorHarmonyMode::Analogous => analogous(self).to_vec(),
            ColorHarmonyMode::SplitComplementary => split_complementary(self).to_vec(),
            ColorHarmonyMode::Triadic => triadic(self).to_vec(),
            ColorHarmonyMode::Tetradic => tetradic(self).to_vec(),
            ColorHarmonyMode::Monochromatic => monochromatic(self).to_vec(),
            ColorHarmonyMode::Shades => shades(self).to_vec(),
        }
    }

    fn rotated(&self, degrees: f64) -> HsvColor {
        self.with_hue(self.hue() + degrees)
    }

    // the muted variant used next to a rotated hue: slightly less saturated, much darker
    fn muted(&self) -> HsvColor {
        self.with_saturation_value(
            clamp_unit(self.saturation() - 0.05),
            clamp_unit(self.value() - 0.3),
        )
    }
}

fn complementary(base: &HsvColor) -> [HsvColor; 4] {
    let (s, v) = (base.saturation(), base.value());
    [
        base.with_saturation_value(at_most(s + 0.1, 1.0), clamp_unit(v + 0.3)),
        base.with_saturation_value(at_most(s - 0.1, 1.0), clamp_unit(v - 0.3)),
        base.rotated(180.0),
        base.rotated(180.0)
            .with_saturation_value(at_most(s + 0.2, 1.0), clamp_unit(v - 0.3)),
    ]
}

fn analogous(base: &HsvColor) -> [HsvColor; 4] {
    [
        base.rotated(30.0),
        base.rotated(60.0),
        base.rotated(90.0),
        base.rotated(120.0),
    ]
}

// the muted copies come first, the exact hues second
fn split_complementary(base: &HsvColor) -> [HsvColor; 4] {
    [
        base.rotated(150.0).muted(),
        base.rotated(210.0).muted(),
        base.rotated(150.0),
        base.rotated(210.0),
    ]
}

fn triadic(base: &HsvColor) -> [HsvColor; 4] {
    [
        base.rotated(120.0).muted(),
        base.rotated(120.0),
        base.rotated(240.0).muted(),
        base.rotated(240.0),
    ]
}

fn tetradic(base: &HsvColor) -> [HsvColor; 4] {
    [
        base.with_saturation(clamp_unit(base.saturation() + 0.2)),
        base.rotated(90.0),
        base.rotated(180.0),
        base.rotated(270.0),
    ]
}

fn monochromatic(base: &HsvColor) -> [HsvColor; 4] {
    let s = base.saturation();
    [
        base.with_saturation(wrap_unit(s + 0.2)),
        base.with_saturation(wrap_unit(s + 0.4)),
        base.with_saturation(wrap_unit(s + 0.6)),
        base.with_saturation(wrap_unit(s + 0.8)),
    ]
}

fn shades(base: &HsvColor) -> [HsvColor; 4] {
    let v = base.value();
    [
        base.with_value(wrap_unit_at_least(v - 0.10, 0.2)),
        base.with_value(wrap_unit_at_least(v + 0.55, 0.55)),
        base.with_value(wrap_unit_at_least(v + 0.30, 0.3)),
        base.with_value(wrap_unit_at_least(v + 0.05, 0.2)),
    ]
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::ApproxEq;

    const RED: HsvColor = HsvColor::DEFAULT;

    fn hues(colors: &[HsvColor]) -> Vec<f64> {
        colors.iter().map(|c| c.hue()).collect()
    }

    fn close(a: HsvColor, b: HsvColor) -> bool {
        a.approx_eq(b, (1e-9, 4))
    }

    #[test]
    fn test_harmony_arity() {
        let base = HsvColor::new(200.0, 0.4, 0.6, 0.8);
        for &mode in ColorHarmonyMode::ALL.iter() {
            let expected = if mode == ColorHarmonyMode::None { 0 } else { 4 };
            assert_eq!(base.get_colors(mode).len(), expected, "{}", mode);
        }
    }

    #[test]
    fn test_harmonies_are_pure() {
        let base = HsvColor::new(77.0, 0.33, 0.91, 0.5);
        for &mode in ColorHarmonyMode::ALL.iter() {
            assert_eq!(base.get_colors(mode), base.get_colors(mode));
        }
    }

    #[test]
    fn test_complementary() {
        let colors = RED.get_colors(ColorHarmonyMode::Complementary);
        assert_eq!(colors[2], HsvColor::new(180.0, 1.0, 1.0, 1.0));
        assert_eq!(colors[0], RED);
        assert!(close(colors[1], HsvColor::new(0.0, 0.9, 0.7, 1.0)));
        assert!(close(colors[3], HsvColor::new(180.0, 1.0, 0.7, 1.0)));
        // saturation is only clamped from above at the derivation site, the color itself keeps it
        // from going negative
        let pale = HsvColor::new(10.0, 0.05, 0.1, 1.0);
        let colors = pale.get_colors(ColorHarmonyMode::Complementary);
        assert_eq!(colors[1].saturation(), 0.0);
        assert_eq!(colors[1].value(), 0.0);
    }

    #[test]
    fn test_hue_rotations() {
        let base = HsvColor::new(300.0, 0.5, 0.5, 0.25);
        let analogous = base.get_colors(ColorHarmonyMode::Analogous);
        assert_eq!(hues(&analogous), vec![330.0, 0.0, 30.0, 60.0]);
        assert!(analogous.iter().all(|c| c.saturation() == 0.5 && c.value() == 0.5));
        let tetradic = base.get_colors(ColorHarmonyMode::Tetradic);
        assert_eq!(hues(&tetradic), vec![300.0, 30.0, 120.0, 210.0]);
        assert!(close(tetradic[0], base.with_saturation(0.7)));
        assert_eq!(
            RED.get_colors(ColorHarmonyMode::Tetradic)[0].saturation(),
            1.0
        );
    }

    #[test]
    fn test_split_and_triadic_ordering() {
        let base = HsvColor::new(30.0, 0.8, 0.9, 1.0);
        let split = base.get_colors(ColorHarmonyMode::SplitComplementary);
        assert_eq!(hues(&split), vec![180.0, 240.0, 180.0, 240.0]);
        assert!(close(split[0], HsvColor::new(180.0, 0.75, 0.6, 1.0)));
        assert!(close(split[1], HsvColor::new(240.0, 0.75, 0.6, 1.0)));
        assert_eq!(split[2], base.with_hue(180.0));
        assert_eq!(split[3], base.with_hue(240.0));

        let triadic = base.get_colors(ColorHarmonyMode::Triadic);
        assert_eq!(hues(&triadic), vec![150.0, 150.0, 270.0, 270.0]);
        assert!(close(triadic[0], HsvColor::new(150.0, 0.75, 0.6, 1.0)));
        assert_eq!(triadic[1], base.with_hue(150.0));
        assert!(close(triadic[2], HsvColor::new(270.0, 0.75, 0.6, 1.0)));
        assert_eq!(triadic[3], base.with_hue(270.0));
    }

    #[test]
    fn test_monochromatic_wraps() {
        let base = HsvColor::new(45.0, 0.5, 0.5, 1.0);
        let colors = base.get_colors(ColorHarmonyMode::Monochromatic);
        let expected = [0.7, 0.9, 0.1, 0.3];
        for (color, &s) in colors.iter().zip(expected.iter()) {
            assert!(close(*color, base.with_saturation(s)), "{:?} vs {}", color, s);
        }
    }

    #[test]
    fn test_shades_floor_after_wrap() {
        let colors = RED.get_colors(ColorHarmonyMode::Shades);
        let expected = [0.9, 0.55, 0.3, 0.2];
        for (color, &v) in colors.iter().zip(expected.iter()) {
            assert!(close(*color, RED.with_value(v)), "{:?} vs {}", color, v);
        }
        // 0.05 - 0.1 wraps to 0.95, far above the floor
        let dark = RED.with_value(0.05);
        let colors = dark.get_colors(ColorHarmonyMode::Shades);
        assert!(close(colors[0], RED.with_value(0.95)));
        assert!(close(colors[1], RED.with_value(0.6)));
        assert!(close(colors[2], RED.with_value(0.35)));
        assert!(close(colors[3], RED.with_value(0.2)));
    }

    #[test]
    fn test_derived_colors_in_bounds() {
        let mut bases = Vec::new();
        for i in 0..12 {
            for j in 0..=5 {
                let x = j as f64 / 5.0;
                bases.push(HsvColor::new(i as f64 * 30.0, x, 1.0 - x, x));
            }
        }
        for base in bases.iter() {
            for &mode in ColorHarmonyMode::ALL.iter() {
                for c in base.get_colors(mode) {
                    assert!(c.hue() >= 0.0 && c.hue() < 360.0);
                    assert!(c.saturation() >= 0.0 && c.saturation() <= 1.0);
                    assert!(c.value() >= 0.0 && c.value() <= 1.0);
                    assert_eq!(c.alpha(), base.alpha());
                }
            }
        }
    }

    #[test]
    fn test_mode_names() {
        for &mode in ColorHarmonyMode::ALL.iter() {
            assert_eq!(mode.name().parse::<ColorHarmonyMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(MODES_BY_NAME.len(), ColorHarmonyMode::ALL.len());
        assert!("triadic".parse::<ColorHarmonyMode>().is_err());
        assert!("PENTADIC".parse::<ColorHarmonyMode>().is_err());
        assert_eq!(
            serde_json::to_string(&ColorHarmonyMode::SplitComplementary).unwrap(),
            "\"SPLIT_COMPLEMENTARY\""
        );
    }
}
