//! This module holds the live state of a color picker: the selected color, the harmony mode, and
//! which optional bars are shown. The state is a plain owned struct. Every change that actually
//! alters a field bumps a version counter and is reported to the registered observers, so a UI
//! layer can either poll [`ColorPickerState::version`] or subscribe.
//!
//! The state can be saved as a [`StateSnapshot`] (JSON through the formats in
//! [`saver`](../saver/index.html)) and restored later.

use std::fmt;

use geo::Point;

use crate::colors::HsvColor;
use crate::config::PickerConfig;
use crate::error::DecodeError;
use crate::harmony::ColorHarmonyMode;
use crate::polar::{self, SurfaceSize};

/// A single change to a [`ColorPickerState`], carrying the new value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StateChange {
    /// A new color was selected.
    Color(HsvColor),
    /// The alpha bar was shown or hidden.
    AlphaBar(bool),
    /// The brightness bar was shown or hidden.
    BrightnessBar(bool),
    /// A new harmony mode was chosen.
    HarmonyMode(ColorHarmonyMode),
}

/// Identifies a subscription, so it can be removed again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&StateChange) + Send>;

/// Everything a picker needs to remember between frames.
pub struct ColorPickerState {
    color: HsvColor,
    show_alpha_bar: bool,
    show_brightness_bar: bool,
    harmony_mode: ColorHarmonyMode,
    version: u64,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

/// The saved form of a [`ColorPickerState`]. Observers and the version counter are not part of it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// The selected color, as `[hue, saturation, value, alpha]`.
    pub color: HsvColor,
    /// Whether the alpha bar is shown.
    pub show_alpha_bar: bool,
    /// Whether the brightness bar is shown.
    pub show_brightness_bar: bool,
    /// The harmony mode, by name.
    pub color_harmony_mode: ColorHarmonyMode,
}

impl ColorPickerState {
    /// A fresh state with the default configuration: black, no bars, no harmony.
    pub fn new() -> ColorPickerState {
        ColorPickerState::from_config(&PickerConfig::default())
    }

    /// A fresh state with the initial settings of `config`.
    pub fn from_config(config: &PickerConfig) -> ColorPickerState {
        ColorPickerState {
            color: config.initial_color,
            show_alpha_bar: config.show_alpha_bar,
            show_brightness_bar: config.show_brightness_bar,
            harmony_mode: config.harmony_mode,
            version: 0,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// A fresh state with the saved settings of `snapshot`.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> ColorPickerState {
        let mut state = ColorPickerState::new();
        state.color = snapshot.color;
        state.show_alpha_bar = snapshot.show_alpha_bar;
        state.show_brightness_bar = snapshot.show_brightness_bar;
        state.harmony_mode = snapshot.color_harmony_mode;
        state
    }

    /// The selected color.
    pub fn color(&self) -> HsvColor {
        self.color
    }

    /// Whether the alpha bar is shown.
    pub fn shows_alpha_bar(&self) -> bool {
        self.show_alpha_bar
    }

    /// Whether the brightness bar is shown.
    pub fn shows_brightness_bar(&self) -> bool {
        self.show_brightness_bar
    }

    /// The harmony mode.
    pub fn harmony_mode(&self) -> ColorHarmonyMode {
        self.harmony_mode
    }

    /// How many changes this state has seen. Setting a field to the value it already has is not a
    /// change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registers a callback for every future change.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    /// Selects a color. Returns whether anything changed.
    pub fn select_color(&mut self, color: HsvColor) -> bool {
        self.apply(StateChange::Color(color))
    }

    /// Shows or hides the alpha bar. Returns whether anything changed.
    pub fn set_show_alpha_bar(&mut self, show: bool) -> bool {
        self.apply(StateChange::AlphaBar(show))
    }

    /// Shows or hides the brightness bar. Returns whether anything changed.
    pub fn set_show_brightness_bar(&mut self, show: bool) -> bool {
        self.apply(StateChange::BrightnessBar(show))
    }

    /// Chooses a harmony mode. Returns whether anything changed.
    pub fn set_harmony_mode(&mut self, mode: ColorHarmonyMode) -> bool {
        self.apply(StateChange::HarmonyMode(mode))
    }

    /// Changes only the hue of the selected color.
    pub fn set_hue(&mut self, hue: f64) -> bool {
        self.select_color(self.color.with_hue(hue))
    }

    /// Changes only the saturation and value of the selected color.
    pub fn set_saturation_value(&mut self, saturation: f64, value: f64) -> bool {
        self.select_color(self.color.with_saturation_value(saturation, value))
    }

    /// Changes only the value of the selected color, as a brightness bar does.
    pub fn set_brightness(&mut self, value: f64) -> bool {
        self.select_color(self.color.with_value(value))
    }

    /// Changes only the alpha of the selected color.
    pub fn set_alpha(&mut self, alpha: f64) -> bool {
        self.select_color(self.color.with_alpha(alpha))
    }

    /// Picks the color under `position` on a color wheel drawn on a surface of `size`, keeping the
    /// current value. Points off the wheel are ignored and leave the state alone.
    ///
    /// Returns the picked color, if there was one.
    pub fn select_position(&mut self, position: Point<f64>, size: SurfaceSize) -> Option<HsvColor> {
        let picked = polar::color_for_position(position, size, self.color.value())?;
        self.select_color(picked);
        Some(picked)
    }

    /// The harmony colors of the selected color, in marker order.
    pub fn harmony_colors(&self) -> Vec<HsvColor> {
        self.color.get_colors(self.harmony_mode)
    }

    /// Where to draw the selection marker on a color wheel of `size`.
    pub fn selection_position(&self, size: SurfaceSize) -> Point<f64> {
        polar::position_for_color(&self.color, size)
    }

    /// Where to draw the harmony markers on a color wheel of `size`.
    pub fn harmony_positions(&self, size: SurfaceSize) -> Vec<Point<f64>> {
        polar::harmony_positions(&self.color, self.harmony_mode, size)
    }

    /// The saved form of this state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            color: self.color,
            show_alpha_bar: self.show_alpha_bar,
            show_brightness_bar: self.show_brightness_bar,
            color_harmony_mode: self.harmony_mode,
        }
    }

    /// Brings this state back to a saved one. Observers hear about every field that changes.
    pub fn restore(&mut self, snapshot: &StateSnapshot) {
        self.select_color(snapshot.color);
        self.set_show_alpha_bar(snapshot.show_alpha_bar);
        self.set_show_brightness_bar(snapshot.show_brightness_bar);
        self.set_harmony_mode(snapshot.color_harmony_mode);
    }

    /// Saves this state as JSON.
    pub fn to_json(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Builds a fresh state from JSON written by [`ColorPickerState::to_json`].
    ///
    /// # Errors
    /// Returns `DecodeError::Json` for malformed JSON, a color tuple of the wrong size, or an
    /// unknown harmony mode name.
    pub fn from_json(json: &str) -> Result<ColorPickerState, DecodeError> {
        let snapshot: StateSnapshot = serde_json::from_str(json).map_err(|e| {
            debug!("rejecting saved picker state: {}", e);
            e
        })?;
        Ok(ColorPickerState::from_snapshot(&snapshot))
    }

    fn apply(&mut self, change: StateChange) -> bool {
        let changed = match change {
            StateChange::Color(color) => replace(&mut self.color, color),
            StateChange::AlphaBar(show) => replace(&mut self.show_alpha_bar, show),
            StateChange::BrightnessBar(show) => replace(&mut self.show_brightness_bar, show),
            StateChange::HarmonyMode(mode) => replace(&mut self.harmony_mode, mode),
        };
        if changed {
            self.version += 1;
            trace!("picker state v{}: {:?}", self.version, change);
            for (_, observer) in self.observers.iter_mut() {
                observer(&change);
            }
        }
        changed
    }
}

// stores `new` in `slot` and reports whether that was a change
fn replace<T: PartialEq>(slot: &mut T, new: T) -> bool {
    if *slot == new {
        false
    } else {
        *slot = new;
        true
    }
}

impl Default for ColorPickerState {
    fn default() -> ColorPickerState {
        ColorPickerState::new()
    }
}

impl fmt::Debug for ColorPickerState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ColorPickerState")
            .field("color", &self.color)
            .field("show_alpha_bar", &self.show_alpha_bar)
            .field("show_brightness_bar", &self.show_brightness_bar)
            .field("harmony_mode", &self.harmony_mode)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}
