use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit keyboard events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently held buttons
    pressed_keys: HashSet<Button>,
    /// Held buttons in press order (for get_down_keys)
    pressed_vec: Vec<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent, ignoring everything but keyboard input
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                self.process_key(keycode, event.state);
            }
        }
    }

    /// Update held state for a single physical key.
    /// Returns the mapped button, if the key is one we track.
    pub fn process_key(&mut self, keycode: KeyCode, state: ElementState) -> Option<Button> {
        let button = Self::keycode_to_button(keycode)?;
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
        Some(button)
    }

    /// Drop every held button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::F1 => Some(Button::F1),
            KeyCode::F2 => Some(Button::F2),
            KeyCode::KeyZ => Some(Button::KeyZ),
            KeyCode::KeyX => Some(Button::KeyX),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::KeyV => Some(Button::KeyV),
            KeyCode::KeyB => Some(Button::KeyB),
            KeyCode::KeyN => Some(Button::KeyN),
            KeyCode::KeyM => Some(Button::KeyM),
            KeyCode::Comma => Some(Button::Comma),
            KeyCode::Period => Some(Button::Period),
            KeyCode::Slash => Some(Button::Slash),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyG => Some(Button::KeyG),
            KeyCode::KeyH => Some(Button::KeyH),
            KeyCode::KeyJ => Some(Button::KeyJ),
            KeyCode::KeyL => Some(Button::KeyL),
            KeyCode::Semicolon => Some(Button::Semicolon),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyZ));
        assert_eq!(controller.get_down_keys().len(), 0);
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();

        assert_eq!(
            controller.process_key(KeyCode::KeyZ, ElementState::Pressed),
            Some(Button::KeyZ)
        );
        controller.process_key(KeyCode::Semicolon, ElementState::Pressed);
        assert!(controller.is_down(Button::KeyZ));
        assert_eq!(controller.get_down_keys(), &[Button::KeyZ, Button::Semicolon]);

        controller.process_key(KeyCode::KeyZ, ElementState::Released);
        assert!(!controller.is_down(Button::KeyZ));
        assert_eq!(controller.get_down_keys(), &[Button::Semicolon]);
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut controller = WinitController::new();
        controller.process_key(KeyCode::F1, ElementState::Pressed);
        controller.process_key(KeyCode::F1, ElementState::Pressed);
        assert_eq!(controller.get_down_keys().len(), 1);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut controller = WinitController::new();
        assert_eq!(controller.process_key(KeyCode::KeyW, ElementState::Pressed), None);
        assert_eq!(controller.get_down_keys().len(), 0);
    }

    #[test]
    fn test_release_all() {
        let mut controller = WinitController::new();
        controller.process_key(KeyCode::KeyS, ElementState::Pressed);
        controller.process_key(KeyCode::F2, ElementState::Pressed);

        controller.release_all();
        assert!(!controller.is_down(Button::KeyS));
        assert_eq!(controller.get_down_keys().len(), 0);
    }

    #[test]
    fn test_piano_rows_are_mapped() {
        let white = [
            KeyCode::KeyZ,
            KeyCode::KeyX,
            KeyCode::KeyC,
            KeyCode::KeyV,
            KeyCode::KeyB,
            KeyCode::KeyN,
            KeyCode::KeyM,
            KeyCode::Comma,
            KeyCode::Period,
            KeyCode::Slash,
        ];
        for (code, button) in white.iter().zip(Button::WHITE_ROW) {
            assert_eq!(WinitController::keycode_to_button(*code), Some(button));
        }

        let black = [
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::KeyG,
            KeyCode::KeyH,
            KeyCode::KeyJ,
            KeyCode::KeyL,
            KeyCode::Semicolon,
        ];
        for (code, button) in black.iter().zip(Button::BLACK_ROW) {
            assert_eq!(WinitController::keycode_to_button(*code), Some(button));
        }
    }
}
