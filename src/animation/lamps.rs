use glam::Vec3;

use super::error::{AnimationError, Result};

/// Stage lamps swinging on a shared sine clock.
///
/// Only the accumulator is real state. Phases and offsets are rebuilt from it
/// on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct LampRig {
    accumulator: f32,
    spacing: f32,
    speed: f32,
    amplitude: Vec3,
    phases: Vec<f32>,
    offsets: Vec<Vec3>,
}

impl LampRig {
    pub fn new(count: usize, speed: f32, amplitude: Vec3) -> Result<Self> {
        if count < 2 {
            return Err(AnimationError::Configuration {
                field: "lamp_count",
                value: count as f64,
                reason: "need at least 2 lamps",
            });
        }

        let mut rig = Self {
            accumulator: 0.0,
            spacing: 180.0 / (count - 1) as f32,
            speed,
            amplitude,
            phases: vec![0.0; count],
            offsets: vec![Vec3::ZERO; count],
        };
        rig.recompute();
        Ok(rig)
    }

    /// Advance the clock by `delta` seconds.
    /// Wraps once, so `delta * speed` must stay below 360 per call.
    pub fn advance(&mut self, delta: f32) {
        self.accumulator += delta * self.speed;
        if self.accumulator >= 360.0 {
            self.accumulator -= 360.0;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        for (i, (phase, offset)) in self.phases.iter_mut().zip(&mut self.offsets).enumerate() {
            *phase = self.accumulator + self.spacing * i as f32;
            *offset = self.amplitude * phase.to_radians().sin();
        }
    }

    fn slot(&self, index: i32) -> Result<usize> {
        let count = self.phases.len();
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < count)
            .ok_or(AnimationError::InvalidLampIndex { index, count })
    }

    pub fn offset(&self, index: i32) -> Result<Vec3> {
        self.slot(index).map(|slot| self.offsets[slot])
    }

    pub fn phase(&self, index: i32) -> Result<f32> {
        self.slot(index).map(|slot| self.phases[slot])
    }

    pub fn count(&self) -> usize {
        self.phases.len()
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }
}
