use raylib::consts::KeyboardKey;
use raylib::RaylibHandle;
use shared::input::PlayerIntent;

/// Polls the keyboard and the window close button once per frame.
pub fn sample_intent(handle: &RaylibHandle) -> PlayerIntent {
    let quit = handle.window_should_close() || handle.is_key_down(KeyboardKey::KEY_ESCAPE);

    let left = handle.is_key_down(KeyboardKey::KEY_A) || handle.is_key_down(KeyboardKey::KEY_LEFT);
    let right =
        handle.is_key_down(KeyboardKey::KEY_D) || handle.is_key_down(KeyboardKey::KEY_RIGHT);

    PlayerIntent::from_keys(left, right, quit)
}
