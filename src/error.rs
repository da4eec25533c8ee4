//! The error type for everything that reads persisted picker data back in. The color math itself
//! never fails: only decoding can.

use thiserror::Error;

/// Errors that can occur when decoding a persisted color, harmony mode, picker state, or
/// configuration.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A color tuple did not have exactly four components.
    #[error("expected 4 color components (hue, saturation, value, alpha), found {0}")]
    WrongArity(usize),

    /// A harmony mode name outside the fixed set.
    #[error("unknown color harmony mode: {0:?}")]
    UnknownMode(String),

    /// Malformed JSON, or JSON of the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
