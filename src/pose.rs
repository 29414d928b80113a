use serde::{Deserialize, Serialize};

use crate::animation::{AnimationState, KeyColor, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampPose {
    /// Degrees
    pub phase: f32,
    /// Scene units
    pub offset: [f32; 3],
}

/// Everything the renderer reads from [`AnimationState`] for one frame.
///
/// Capture only after the frame's input and lamp updates have been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSnapshot {
    pub lid_angle: f32,
    pub stick_angle: f32,
    pub white_key_angles: Vec<f32>,
    pub black_key_angles: Vec<f32>,
    pub lamps: Vec<LampPose>,
}

impl PoseSnapshot {
    pub fn capture(state: &AnimationState) -> Result<Self> {
        let key_angles = |color: KeyColor| -> Result<Vec<f32>> {
            (0..color.count() as i32)
                .map(|index| state.key_angle(index, color))
                .collect()
        };

        let lamps = (0..state.lamp_count() as i32)
            .map(|index| {
                Ok(LampPose {
                    phase: state.lamp_phase(index)?,
                    offset: state.lamp_offset(index)?.to_array(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            lid_angle: state.lid_angle(),
            stick_angle: state.stick_angle(),
            white_key_angles: key_angles(KeyColor::White)?,
            black_key_angles: key_angles(KeyColor::Black)?,
            lamps,
        })
    }

    /// Indices of keys that are at least partly down
    pub fn pressed_keys(&self, color: KeyColor) -> Vec<usize> {
        let angles = match color {
            KeyColor::White => &self.white_key_angles,
            KeyColor::Black => &self.black_key_angles,
        };
        angles
            .iter()
            .enumerate()
            .filter(|(_, &angle)| angle > 0.0)
            .map(|(index, _)| index)
            .collect()
    }
}
