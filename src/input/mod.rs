use macroquad::prelude::*;

/// What a recognized key press asks the host to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Replace the grid with a fresh random one
    Regenerate,
    /// Leave the application
    Quit,
}

/// Map a key to its action; every other key is ignored
pub const fn action_for(key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::N => Some(KeyAction::Regenerate),
        KeyCode::Escape => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Actions for the keys pressed since the last frame.
/// `Quit` sorts first so nothing else runs on the way out.
pub fn pressed_actions() -> Vec<KeyAction> {
    actions_from(get_keys_pressed())
}

fn actions_from(keys: impl IntoIterator<Item = KeyCode>) -> Vec<KeyAction> {
    let mut actions: Vec<KeyAction> = keys.into_iter().filter_map(action_for).collect();
    actions.sort_by_key(|action| *action != KeyAction::Quit);
    actions.dedup();
    actions
}
