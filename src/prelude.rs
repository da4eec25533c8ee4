//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the color type, the harmony modes, the wheel mapping, the picker state, and
//! the decoding error. The rectangular mappings in [`area`](../area/index.html) and the codec
//! functions in [`saver`](../saver/index.html) are not included.

pub use crate::colors::HsvColor;
pub use crate::config::PickerConfig;
pub use crate::error::DecodeError;
pub use crate::harmony::ColorHarmonyMode;
pub use crate::polar::{color_for_position, position_for, SurfaceSize};
pub use crate::state::{ColorPickerState, StateChange, StateSnapshot};
