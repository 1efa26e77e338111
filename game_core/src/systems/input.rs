use crate::InputState;

/// Lateral direction a key or touch asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// Map a DOM key identifier to a steering direction
pub fn steer_from_key(key: &str) -> Option<Steer> {
    match key {
        "ArrowLeft" | "Left" => Some(Steer::Left),
        "ArrowRight" | "Right" => Some(Steer::Right),
        _ => None,
    }
}

/// Keys that restart a finished game
pub fn is_restart_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Handle key down event. Returns true if the key steers.
pub fn handle_key_down(input: &mut InputState, key: &str) -> bool {
    match steer_from_key(key) {
        Some(Steer::Left) => input.move_left = true,
        Some(Steer::Right) => input.move_right = true,
        None => return false,
    }
    true
}

/// Handle key up event. Returns true if the key steers.
pub fn handle_key_up(input: &mut InputState, key: &str) -> bool {
    match steer_from_key(key) {
        Some(Steer::Left) => input.move_left = false,
        Some(Steer::Right) => input.move_right = false,
        None => return false,
    }
    true
}

/// A touch steers toward the half of the field it lands on
pub fn handle_touch_start(input: &mut InputState, touch_x: f32, field_width: f32) -> Steer {
    if touch_x < field_width / 2.0 {
        input.move_left = true;
        Steer::Left
    } else {
        input.move_right = true;
        Steer::Right
    }
}

/// Any touch ending releases both directions
pub fn handle_touch_end(input: &mut InputState) {
    input.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_set_and_clear() {
        let mut input = InputState::new();
        assert!(handle_key_down(&mut input, "ArrowLeft"));
        assert!(input.move_left);
        assert!(!input.move_right);

        assert!(handle_key_down(&mut input, "ArrowRight"));
        assert!(input.move_left && input.move_right);

        assert!(handle_key_up(&mut input, "ArrowLeft"));
        assert!(!input.move_left);
        assert!(input.move_right);
    }

    #[test]
    fn test_legacy_key_names() {
        let mut input = InputState::new();
        handle_key_down(&mut input, "Left");
        handle_key_down(&mut input, "Right");
        assert!(input.move_left && input.move_right);
        handle_key_up(&mut input, "Right");
        assert!(!input.move_right);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::new();
        assert!(!handle_key_down(&mut input, "a"));
        assert!(!handle_key_down(&mut input, "ArrowUp"));
        assert_eq!(input, InputState::new());

        input.move_left = true;
        assert!(!handle_key_up(&mut input, "Escape"));
        assert!(input.move_left);
    }

    #[test]
    fn test_touch_halves() {
        let mut input = InputState::new();
        assert_eq!(handle_touch_start(&mut input, 10.0, 400.0), Steer::Left);
        assert!(input.move_left && !input.move_right);

        handle_touch_end(&mut input);
        assert_eq!(input, InputState::new());

        // The exact center counts as the right half
        assert_eq!(handle_touch_start(&mut input, 200.0, 400.0), Steer::Right);
        assert!(input.move_right && !input.move_left);
    }

    #[test]
    fn test_touch_end_clears_keyboard_flags_too() {
        let mut input = InputState::new();
        handle_key_down(&mut input, "ArrowLeft");
        handle_touch_start(&mut input, 390.0, 400.0);
        handle_touch_end(&mut input);
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_restart_keys() {
        assert!(is_restart_key("Enter"));
        assert!(is_restart_key(" "));
        assert!(!is_restart_key("ArrowLeft"));
    }
}
