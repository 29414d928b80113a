//! Headless host loop.
//!
//! Each frame runs in a fixed order: apply input, advance the lamps, then read
//! the pose. Nothing reads the state between those steps.

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationError, AnimationState, KeyColor};
use crate::core::{Controller, FrameInfo, Throttled};
use crate::input::{apply_controls, KeyBindings};
use crate::pose::PoseSnapshot;
use crate::script::ScriptedController;

/// Seconds of simulated time between progress log lines
const PROGRESS_INTERVAL: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub generated_at: String,
    pub frames: u64,
    pub duration: f32,
    pub max_lid_angle: f32,
    pub max_stick_angle: f32,
    /// Frames whose input mapping raised an error
    pub input_errors: u64,
    pub final_pose: PoseSnapshot,
}

pub struct Simulation {
    state: AnimationState,
    bindings: KeyBindings,
    progress: Throttled,
    log_progress: bool,
}

impl Simulation {
    pub fn new(state: AnimationState, bindings: KeyBindings) -> Self {
        Self {
            state,
            bindings,
            progress: Throttled::new(PROGRESS_INTERVAL),
            log_progress: true,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.log_progress = !quiet;
        self
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Run one frame and return what the renderer would draw.
    ///
    /// Input errors are logged and do not abort the frame: keys with a valid
    /// binding still move and the lamps still advance.
    pub fn step(
        &mut self,
        frame: &FrameInfo,
        controller: &dyn Controller,
    ) -> Result<(PoseSnapshot, Option<AnimationError>), AnimationError> {
        let input_error = apply_controls(&mut self.state, controller, &self.bindings, frame.delta).err();
        if let Some(e) = &input_error {
            log::warn!("Frame {}: ignoring input: {}", frame.number, e);
        }

        self.state.advance_lamps(frame.delta);

        let pose = PoseSnapshot::capture(&self.state)?;

        if self.log_progress && self.progress.try_tick(frame.delta) {
            log::info!(
                "t={:.2}s lid={:.1}° stick={:.1}° keys down: white {:?} black {:?}",
                frame.time,
                pose.lid_angle,
                pose.stick_angle,
                pose.pressed_keys(KeyColor::White),
                pose.pressed_keys(KeyColor::Black),
            );
        }

        Ok((pose, input_error))
    }

    /// Replay `controller` over every frame and summarise the run
    pub fn run(
        &mut self,
        frames: impl Iterator<Item = FrameInfo>,
        controller: &mut ScriptedController,
    ) -> Result<SimulationReport, AnimationError> {
        let mut frame_count = 0;
        let mut duration = 0.0;
        let mut max_lid_angle = self.state.lid_angle();
        let mut max_stick_angle = self.state.stick_angle();
        let mut input_errors = 0;
        let mut final_pose = PoseSnapshot::capture(&self.state)?;

        for frame in frames {
            // Input is sampled at the start of the step
            controller.seek(frame.number as f32 * frame.delta);

            let (pose, input_error) = self.step(&frame, controller)?;
            if input_error.is_some() {
                input_errors += 1;
            }

            max_lid_angle = max_lid_angle.max(pose.lid_angle);
            max_stick_angle = max_stick_angle.max(pose.stick_angle);
            frame_count += 1;
            duration = frame.time;
            final_pose = pose;
        }

        log::debug!("Simulated {} frames ({:.2}s)", frame_count, duration);

        Ok(SimulationReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            frames: frame_count,
            duration,
            max_lid_angle,
            max_stick_angle,
            input_errors,
            final_pose,
        })
    }
}
