use serde::{Deserialize, Serialize};

/// Input button identifier
///
/// Named after the physical key on a US layout, matching winit's `KeyCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    F1,
    F2,
    KeyZ,
    KeyX,
    KeyC,
    KeyV,
    KeyB,
    KeyN,
    KeyM,
    Comma,
    Period,
    Slash,
    KeyS,
    KeyD,
    KeyG,
    KeyH,
    KeyJ,
    KeyL,
    Semicolon,
    Escape,
}

impl Button {
    /// Bottom letter row, left to right
    pub const WHITE_ROW: [Button; 10] = [
        Button::KeyZ,
        Button::KeyX,
        Button::KeyC,
        Button::KeyV,
        Button::KeyB,
        Button::KeyN,
        Button::KeyM,
        Button::Comma,
        Button::Period,
        Button::Slash,
    ];

    /// Home row keys sitting between the white-row keys that have a black key
    pub const BLACK_ROW: [Button; 7] = [
        Button::KeyS,
        Button::KeyD,
        Button::KeyG,
        Button::KeyH,
        Button::KeyJ,
        Button::KeyL,
        Button::Semicolon,
    ];
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    #[test]
    fn test_rows_do_not_overlap() {
        let white: HashSet<_> = Button::WHITE_ROW.iter().collect();
        let black: HashSet<_> = Button::BLACK_ROW.iter().collect();

        assert_eq!(white.len(), 10);
        assert_eq!(black.len(), 7);
        assert!(white.is_disjoint(&black));
        assert!(!white.contains(&Button::F1));
        assert!(!black.contains(&Button::Escape));
    }

    #[test]
    fn test_button_serde_names() {
        let json = serde_json::to_string(&Button::Semicolon).unwrap();
        assert_eq!(json, "\"Semicolon\"");

        let parsed: Button = serde_json::from_str("\"F1\"").unwrap();
        assert_eq!(parsed, Button::F1);
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyZ, Button::F1],
        };

        assert!(controller.is_down(Button::KeyZ));
        assert!(controller.is_down(Button::F1));
        assert!(!controller.is_down(Button::KeyX));
        assert_eq!(controller.get_down_keys().len(), 2);
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        assert!(!controller.is_down(Button::F2));
        assert_eq!(controller.get_down_keys().len(), 0);
    }
}
