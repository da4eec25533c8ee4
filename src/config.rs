//! Initial settings for a color picker, loadable from JSON. Every field has a default, so a config
//! file only needs to mention what it changes: `{}` is a valid config.

use crate::colors::HsvColor;
use crate::error::DecodeError;
use crate::harmony::ColorHarmonyMode;

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// The settings a fresh [`ColorPickerState`](../state/struct.ColorPickerState.html) starts with.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Version of the configuration format.
    pub version: u32,
    /// The color selected before the user picks anything, as `[hue, saturation, value, alpha]`.
    pub initial_color: HsvColor,
    /// Whether the alpha bar starts out shown.
    pub show_alpha_bar: bool,
    /// Whether the brightness bar starts out shown.
    pub show_brightness_bar: bool,
    /// The harmony mode the picker starts in.
    pub harmony_mode: ColorHarmonyMode,
}

impl Default for PickerConfig {
    fn default() -> PickerConfig {
        PickerConfig {
            version: CONFIG_VERSION,
            initial_color: HsvColor::BLACK,
            show_alpha_bar: false,
            show_brightness_bar: false,
            harmony_mode: ColorHarmonyMode::None,
        }
    }
}

impl PickerConfig {
    /// Parses a config from JSON, filling in defaults for missing fields.
    ///
    /// # Errors
    /// Returns `DecodeError::Json` for malformed JSON, fields of the wrong type, or an unknown
    /// harmony mode name.
    pub fn from_json(json: &str) -> Result<PickerConfig, DecodeError> {
        let config: PickerConfig = serde_json::from_str(json)?;
        if config.version != CONFIG_VERSION {
            warn!(
                "picker config version {} differs from {}, reading it anyway",
                config.version, CONFIG_VERSION
            );
        }
        Ok(config)
    }

    /// Writes this config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        assert_eq!(PickerConfig::from_json("{}").unwrap(), PickerConfig::default());
        let config = PickerConfig::from_json(
            "{\"harmonyMode\": \"TRIADIC\", \"initialColor\": [90, 0.5, 1, 1]}",
        )
        .unwrap();
        assert_eq!(config.harmony_mode, ColorHarmonyMode::Triadic);
        assert_eq!(config.initial_color, HsvColor::new(90.0, 0.5, 1.0, 1.0));
        assert!(!config.show_alpha_bar);
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_config_round_trip() {
        let config = PickerConfig {
            initial_color: HsvColor::DEFAULT,
            show_brightness_bar: true,
            harmony_mode: ColorHarmonyMode::Monochromatic,
            ..PickerConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(PickerConfig::from_json("{\"harmonyMode\": \"GOLDEN\"}").is_err());
        assert!(PickerConfig::from_json("{\"initialColor\": [1, 2]}").is_err());
        assert!(PickerConfig::from_json("\"dark\"").is_err());
        assert!(PickerConfig::from_json("{\"showAlphaBar\": 1}").is_err());
    }

    #[test]
    fn test_state_from_config() {
        use crate::state::ColorPickerState;
        let config = PickerConfig {
            show_alpha_bar: true,
            harmony_mode: ColorHarmonyMode::Analogous,
            ..PickerConfig::default()
        };
        let state = ColorPickerState::from_config(&config);
        assert!(state.shows_alpha_bar());
        assert_eq!(state.harmony_mode(), ColorHarmonyMode::Analogous);
        assert_eq!(state.color(), HsvColor::BLACK);
    }
}
