//! Scripted input for running the scene without a window.
//!
//! A script is a JSON list of button holds:
//!
//! ```json
//! { "holds": [ { "button": "F1", "start": 0.0, "end": 1.5 },
//!              { "button": "KeyZ", "start": 0.5, "end": 0.6 } ] }
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Button, Controller};

/// One button held down over `[start, end)` seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hold {
    pub button: Button,
    pub start: f32,
    pub end: f32,
}

impl Hold {
    pub fn contains(&self, time: f32) -> bool {
        time >= self.start && time < self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub holds: Vec<Hold>,
}

impl InputScript {
    pub fn from_json(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json).context("Failed to parse input script")?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script: {:?}", path))?;
        let script = Self::from_json(&json).with_context(|| format!("In script {:?}", path))?;
        log::info!("Loaded {} holds from {:?}", script.holds.len(), path);
        Ok(script)
    }

    fn validate(&self) -> Result<()> {
        for (i, hold) in self.holds.iter().enumerate() {
            if !(hold.start >= 0.0 && hold.end >= hold.start) {
                bail!(
                    "Hold {} ({:?}) has invalid window {}..{}",
                    i,
                    hold.button,
                    hold.start,
                    hold.end
                );
            }
        }
        Ok(())
    }

    /// Time at which the last hold ends
    pub fn end_time(&self) -> f32 {
        self.holds.iter().map(|h| h.end).fold(0.0, f32::max)
    }
}

/// Controller replaying an [`InputScript`] at a given point in time
#[derive(Debug, Clone)]
pub struct ScriptedController {
    script: InputScript,
    pressed: Vec<Button>,
}

impl ScriptedController {
    pub fn new(script: InputScript) -> Self {
        Self {
            script,
            pressed: Vec::new(),
        }
    }

    /// Recompute held buttons for `time` (seconds since start)
    pub fn seek(&mut self, time: f32) {
        self.pressed.clear();
        for hold in self.script.holds.iter().filter(|h| h.contains(time)) {
            if !self.pressed.contains(&hold.button) {
                self.pressed.push(hold.button);
            }
        }
    }

    pub fn script(&self) -> &InputScript {
        &self.script
    }
}

impl Controller for ScriptedController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }
}
