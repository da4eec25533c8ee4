//! This module contains the color types of the crate. For convenience, each main type is imported
//! into this module's namespace directly.
pub mod hsvcolor;

// for convenience, use this namespace for the color objects
pub use self::hsvcolor::HsvColor;
