/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame, at the end of this frame's step
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Deterministic frame source stepping at a fixed rate
/// Use this in a loop: `for frame in FixedStepFrames::new(60.0, 120) { ... }`
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    delta: f32,
    frame_number: u64,
    total_frames: u64,
}

impl FixedStepFrames {
    pub fn new(fps: f32, total_frames: u64) -> Self {
        Self {
            delta: 1.0 / fps,
            frame_number: 0,
            total_frames,
        }
    }

    /// Simulated duration covered by all frames
    pub fn duration(&self) -> f32 {
        self.total_frames as f32 * self.delta
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.frame_number >= self.total_frames {
            return None;
        }

        self.frame_number += 1;
        let time = self.frame_number as f32 * self.delta;
        Some(FrameInfo::new(self.frame_number - 1, time, self.delta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_frames - self.frame_number) as usize;
        (remaining, Some(remaining))
    }
}
