//! huewheel is the color math behind a color picker: an HSV color type that converts exactly to and
//! from RGB, color harmonies that derive a small palette from one color, and the geometry that turns
//! a point on a color wheel into a color and back. Drawing the picker and tracking the pointer are
//! left to whatever UI toolkit is in use. Everything here is plain values in, plain values out,
//! except [`ColorPickerState`](state/struct.ColorPickerState.html), which holds a picker's current
//! selection between events.

// we don't mess around with documentation
#![deny(missing_docs)]

extern crate geo;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod area;
pub mod bound;
pub mod colors;
pub mod config;
pub mod error;
pub mod harmony;
pub mod polar;
pub mod prelude;
pub mod saver;
pub mod state;
