//! Key mapping from terminal events to driver commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Request a new heading
    Steer(Direction),
    /// Throw away the current game and start a fresh one
    NewGame,
    /// Leave the program
    Quit,
}

/// Map keyboard input to a command.
///
/// Arrow keys, WASD and hjkl steer. Letters are case-insensitive.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if should_quit(key) {
        return Some(InputCommand::Quit);
    }

    let steer = |dir| Some(InputCommand::Steer(dir));
    match key.code {
        KeyCode::Up => steer(Direction::Up),
        KeyCode::Down => steer(Direction::Down),
        KeyCode::Left => steer(Direction::Left),
        KeyCode::Right => steer(Direction::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' | 'k' => steer(Direction::Up),
            's' | 'j' => steer(Direction::Down),
            'a' | 'h' => steer(Direction::Left),
            'd' | 'l' => steer(Direction::Right),
            'n' | 'r' => Some(InputCommand::NewGame),
            _ => None,
        },
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
