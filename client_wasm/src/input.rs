//! Keyboard input handling

use game_core::Key;

/// Map a `KeyboardEvent.key` value to a game key. Unknown keys are ignored.
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "Enter" => Some(Key::Confirm),
        "ArrowUp" => Some(Key::RightUp),
        "ArrowDown" => Some(Key::RightDown),
        "w" | "W" => Some(Key::LeftUp),
        "s" | "S" => Some(Key::LeftDown),
        _ => None,
    }
}
