//! Physical key → piano action mapping, applied once per frame.

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationError, AnimationState, KeyColor, KeyCommand, LidCommand};
use crate::core::{Button, Controller};

/// What a bound button does while held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PianoAction {
    Lid(LidCommand),
    Key { index: i32, color: KeyColor },
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: Vec<(Button, PianoAction)>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Bind `button`, replacing any previous action for it
    pub fn bind(&mut self, button: Button, action: PianoAction) -> &mut Self {
        match self.bindings.iter_mut().find(|(b, _)| *b == button) {
            Some(entry) => entry.1 = action,
            None => self.bindings.push((button, action)),
        }
        self
    }

    pub fn action(&self, button: Button) -> Option<PianoAction> {
        self.bindings
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, action)| *action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Button, PianoAction)> {
        self.bindings.iter()
    }
}

impl Default for KeyBindings {
    /// F1/F2 drive the lid. The bottom letter row plays white keys 0-9 and
    /// the home row keys above the gaps play black keys 0-6.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(Button::F1, PianoAction::Lid(LidCommand::Open))
            .bind(Button::F2, PianoAction::Lid(LidCommand::Close));

        for (index, button) in Button::WHITE_ROW.into_iter().enumerate() {
            bindings.bind(button, PianoAction::Key { index: index as i32, color: KeyColor::White });
        }
        for (index, button) in Button::BLACK_ROW.into_iter().enumerate() {
            bindings.bind(button, PianoAction::Key { index: index as i32, color: KeyColor::Black });
        }
        bindings
    }
}

/// Feed one frame of held-button state into the animation.
///
/// Bound keys that are held are pushed, every other bound key is released.
/// Lid buttons only act while held. A bad binding does not stop the rest of
/// the frame; the first error is returned after all bindings are applied.
pub fn apply_controls(
    state: &mut AnimationState,
    controller: &dyn Controller,
    bindings: &KeyBindings,
    delta: f32,
) -> Result<(), AnimationError> {
    let mut first_error = None;

    for &(button, action) in bindings.iter() {
        let held = controller.is_down(button);
        match action {
            PianoAction::Lid(command) => {
                if held {
                    state.set_lid(command, delta);
                }
            }
            PianoAction::Key { index, color } => {
                let command = if held { KeyCommand::Push } else { KeyCommand::Release };
                if let Err(e) = state.set_key(command, delta, index, color) {
                    first_error.get_or_insert(e);
                }
            }
        }
    }

    first_error.map_or(Ok(()), Err)
}
