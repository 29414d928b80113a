use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{AnimationError, Result};

pub const WHITE_KEY_COUNT: usize = 36;
pub const BLACK_KEY_COUNT: usize = 25;

/// Which row of the keyboard a key index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyColor {
    White,
    Black,
}

impl KeyColor {
    /// Number of keys in this row
    pub const fn count(self) -> usize {
        match self {
            KeyColor::White => WHITE_KEY_COUNT,
            KeyColor::Black => BLACK_KEY_COUNT,
        }
    }

    pub const fn is_white(self) -> bool {
        matches!(self, KeyColor::White)
    }

    pub const fn from_is_white(is_white: bool) -> Self {
        if is_white {
            KeyColor::White
        } else {
            KeyColor::Black
        }
    }
}

impl fmt::Display for KeyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyColor::White => write!(f, "white"),
            KeyColor::Black => write!(f, "black"),
        }
    }
}

/// Push depth of every key, as percentages in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBank {
    white: [f32; WHITE_KEY_COUNT],
    black: [f32; BLACK_KEY_COUNT],
}

impl KeyBank {
    pub fn new() -> Self {
        Self {
            white: [0.0; WHITE_KEY_COUNT],
            black: [0.0; BLACK_KEY_COUNT],
        }
    }

    /// Validate `index` against the row bound and convert it to a slot
    pub fn slot(index: i32, color: KeyColor) -> Result<usize> {
        let bound = color.count();
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < bound)
            .ok_or(AnimationError::InvalidKeyIndex { index, color, bound })
    }

    pub fn get(&self, slot: usize, color: KeyColor) -> f32 {
        self.row(color)[slot]
    }

    /// Add `delta` to one key and clamp it back into [0, 1].
    /// Every other key is untouched, so the whole bank stays in range.
    pub fn nudge(&mut self, slot: usize, color: KeyColor, delta: f32) {
        let row = match color {
            KeyColor::White => &mut self.white[..],
            KeyColor::Black => &mut self.black[..],
        };
        row[slot] = (row[slot] + delta).clamp(0.0, 1.0);
    }

    pub fn row(&self, color: KeyColor) -> &[f32] {
        match color {
            KeyColor::White => &self.white,
            KeyColor::Black => &self.black,
        }
    }
}

impl Default for KeyBank {
    fn default() -> Self {
        Self::new()
    }
}
