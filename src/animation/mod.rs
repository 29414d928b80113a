//! Animation state for the piano scene.
//!
//! Turns per-frame input into bounded pose parameters: lid openness, push
//! depth of every key and the sweep of the stage lamps. The renderer reads
//! angles (degrees) and offsets (scene units) back once all of a frame's
//! mutations are done.

pub mod error;
pub mod keys;
pub mod lamps;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;

pub use error::{AnimationError, Result};
pub use keys::{KeyBank, KeyColor, BLACK_KEY_COUNT, WHITE_KEY_COUNT};
pub use lamps::LampRig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LidCommand {
    Open,
    Close,
}

impl LidCommand {
    const fn sign(self) -> f32 {
        match self {
            LidCommand::Open => 1.0,
            LidCommand::Close => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommand {
    Push,
    Release,
}

impl KeyCommand {
    const fn sign(self) -> f32 {
        match self {
            KeyCommand::Push => 1.0,
            KeyCommand::Release => -1.0,
        }
    }
}

/// Speeds and angle maxima applied by [`AnimationState`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub lid_speed: f32,
    pub key_speed: f32,
    pub lid_angle_max: f32,
    pub stick_angle_max: f32,
    pub key_angle_max: f32,
}

impl From<&AnimationConfig> for Limits {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            lid_speed: config.lid_speed,
            key_speed: config.key_speed,
            lid_angle_max: config.lid_angle_max,
            stick_angle_max: config.stick_angle_max,
            key_angle_max: config.key_angle_max,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    lid_percentage: f32,
    keys: KeyBank,
    lamps: LampRig,
    limits: Limits,
}

impl AnimationState {
    /// Create state with the reference speeds and angles.
    /// `lid_percentage` is clamped into [0, 1].
    pub fn new(lid_percentage: f32, lamp_count: usize) -> Result<Self> {
        Self::from_config(&AnimationConfig {
            initial_lid_percentage: lid_percentage,
            lamp_count,
            ..AnimationConfig::default()
        })
    }

    /// Fails with [`AnimationError::Configuration`] if any speed or angle
    /// maximum is negative or non-finite, or the lamp count is out of range.
    pub fn from_config(config: &AnimationConfig) -> Result<Self> {
        config.validate()?;
        let lamps = LampRig::new(
            config.lamp_count,
            config.lamp_speed,
            Vec3::from_array(config.lamp_amplitude),
        )?;

        Ok(Self {
            lid_percentage: config.initial_lid_percentage.clamp(0.0, 1.0),
            keys: KeyBank::new(),
            lamps,
            limits: Limits::from(config),
        })
    }

    pub fn set_lid(&mut self, command: LidCommand, delta: f32) {
        let velocity = self.limits.lid_speed * delta;
        self.lid_percentage = (self.lid_percentage + command.sign() * velocity).clamp(0.0, 1.0);
    }

    /// Move one key. Fails before mutating anything if the index is out of range.
    pub fn set_key(
        &mut self,
        command: KeyCommand,
        delta: f32,
        key_index: i32,
        color: KeyColor,
    ) -> Result<()> {
        let slot = KeyBank::slot(key_index, color)?;
        let velocity = self.limits.key_speed * delta;
        self.keys.nudge(slot, color, command.sign() * velocity);
        Ok(())
    }

    pub fn advance_lamps(&mut self, delta: f32) {
        self.lamps.advance(delta);
    }

    pub fn lamp_offset(&self, lamp_index: i32) -> Result<Vec3> {
        self.lamps.offset(lamp_index)
    }

    /// Phase of one lamp in degrees. Not wrapped: only the shared clock is.
    pub fn lamp_phase(&self, lamp_index: i32) -> Result<f32> {
        self.lamps.phase(lamp_index)
    }

    pub fn lid_angle(&self) -> f32 {
        self.lid_percentage * self.limits.lid_angle_max
    }

    /// The stick follows the square of the lid percentage, so it lags the
    /// lid at small openings.
    pub fn stick_angle(&self) -> f32 {
        self.lid_percentage * self.lid_percentage * self.limits.stick_angle_max
    }

    pub fn key_angle(&self, key_index: i32, color: KeyColor) -> Result<f32> {
        self.key_percentage(key_index, color)
            .map(|percentage| percentage * self.limits.key_angle_max)
    }

    pub fn key_percentage(&self, key_index: i32, color: KeyColor) -> Result<f32> {
        let slot = KeyBank::slot(key_index, color)?;
        Ok(self.keys.get(slot, color))
    }

    pub fn key_percentages(&self, color: KeyColor) -> &[f32] {
        self.keys.row(color)
    }

    pub fn lid_percentage(&self) -> f32 {
        self.lid_percentage
    }

    pub fn lamp_accumulator(&self) -> f32 {
        self.lamps.accumulator()
    }

    pub fn lamp_count(&self) -> usize {
        self.lamps.count()
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}
