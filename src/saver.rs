//! This module is the persistence format of the crate, used to save a picker's color and harmony
//! mode and restore them later. A color is saved as the ordered tuple `[hue, saturation, value,
//! alpha]`, and a harmony mode as its name. Nothing else is ever written.
//!
//! Decoding is strict: a tuple with the wrong number of components or an unknown mode name is an
//! error rather than something to guess around.

use crate::colors::HsvColor;
use crate::error::DecodeError;
use crate::harmony::ColorHarmonyMode;

/// Encodes a color as `[hue, saturation, value, alpha]`.
pub fn encode_color(color: &HsvColor) -> [f64; 4] {
    (*color).into()
}

/// Decodes a color from `[hue, saturation, value, alpha]`. Anything produced by [`encode_color`]
/// comes back exactly.
///
/// # Errors
/// Returns `DecodeError::WrongArity` unless there are exactly four components.
pub fn decode_color(components: &[f64]) -> Result<HsvColor, DecodeError> {
    match *components {
        [h, s, v, a] => Ok(HsvColor::new(h, s, v, a)),
        _ => {
            debug!("rejecting color tuple with {} components", components.len());
            Err(DecodeError::WrongArity(components.len()))
        }
    }
}

/// Encodes a harmony mode as its name.
pub fn encode_mode(mode: ColorHarmonyMode) -> &'static str {
    mode.name()
}

/// Decodes a harmony mode from its exact name.
///
/// # Errors
/// Returns `DecodeError::UnknownMode` for any other string.
pub fn decode_mode(name: &str) -> Result<ColorHarmonyMode, DecodeError> {
    name.parse::<ColorHarmonyMode>().map_err(|e| {
        debug!("rejecting harmony mode name {:?}", name);
        e
    })
}

/// Encodes a color as a JSON array.
pub fn color_to_json(color: &HsvColor) -> Result<String, DecodeError> {
    Ok(serde_json::to_string(&encode_color(color))?)
}

/// Decodes a color from a JSON array of numbers.
pub fn color_from_json(json: &str) -> Result<HsvColor, DecodeError> {
    let components: Vec<f64> = serde_json::from_str(json)?;
    decode_color(&components)
}

/// Encodes a harmony mode as a JSON string.
pub fn mode_to_json(mode: ColorHarmonyMode) -> Result<String, DecodeError> {
    Ok(serde_json::to_string(&mode)?)
}

/// Decodes a harmony mode from a JSON string.
pub fn mode_from_json(json: &str) -> Result<ColorHarmonyMode, DecodeError> {
    let name: String = serde_json::from_str(json)?;
    decode_mode(&name)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_color_tuple() {
        let color = HsvColor::new(123.25, 0.5, 0.75, 0.125);
        assert_eq!(encode_color(&color), [123.25, 0.5, 0.75, 0.125]);
        assert_eq!(decode_color(&encode_color(&color)).unwrap(), color);
        match decode_color(&[1.0, 0.5, 0.5]) {
            Err(DecodeError::WrongArity(3)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(decode_color(&[1.0, 0.5, 0.5, 1.0, 0.0]).is_err());
        assert!(decode_color(&[]).is_err());
    }

    #[test]
    fn test_derived_colors_survive_saving() {
        // derived colors carry long binary fractions, which must not be rounded on the way out
        let base = HsvColor::from_rgb(17, 200, 91, 230);
        for &mode in ColorHarmonyMode::ALL.iter() {
            for color in base.get_colors(mode) {
                let json = color_to_json(&color).unwrap();
                assert_eq!(color_from_json(&json).unwrap(), color);
            }
        }
    }

    #[test]
    fn test_mode_names() {
        for &mode in ColorHarmonyMode::ALL.iter() {
            assert_eq!(decode_mode(encode_mode(mode)).unwrap(), mode);
            assert_eq!(mode_from_json(&mode_to_json(mode).unwrap()).unwrap(), mode);
        }
        assert_eq!(mode_to_json(ColorHarmonyMode::Shades).unwrap(), "\"SHADES\"");
        match decode_mode("Shades") {
            Err(DecodeError::UnknownMode(name)) => assert_eq!(name, "Shades"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(mode_from_json("\"RAINBOW\"").is_err());
        assert!(mode_from_json("7").is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(color_from_json("[1, 2").is_err());
        assert!(color_from_json("{\"hue\": 3}").is_err());
        match color_from_json("[0.5, 0.5]") {
            Err(DecodeError::WrongArity(2)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
