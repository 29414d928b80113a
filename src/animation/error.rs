use thiserror::Error;

use super::KeyColor;

/// Errors raised by [`AnimationState`](super::AnimationState).
///
/// Every variant signals a bug in the caller (usually the input mapping),
/// so none of them are recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnimationError {
    #[error("invalid {color} key index {index} (valid range 0..{bound})")]
    InvalidKeyIndex {
        index: i32,
        color: KeyColor,
        bound: usize,
    },

    #[error("invalid lamp index {index} (valid range 0..{count})")]
    InvalidLampIndex { index: i32, count: usize },

    #[error("invalid {field} = {value}: {reason}")]
    Configuration {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, AnimationError>;
