use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Maps key presses to actions and remembers the latest turn until the next tick
#[derive(Debug, Default)]
pub struct InputHandler {
    pending_direction: Option<Direction>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_key(key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Turn(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => KeyAction::Turn(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => KeyAction::Turn(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => KeyAction::Turn(Direction::Right),

            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r' | 'R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }

    /// Handle a key event; turns are buffered, everything else is returned
    pub fn handle_key_event(&mut self, key: KeyEvent) -> KeyAction {
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        let action = Self::map_key(key);
        if let KeyAction::Turn(direction) = action {
            // Last press before the tick wins
            self.pending_direction = Some(direction);
        }
        action
    }

    /// Direction request for the coming tick, clearing the buffer
    pub fn take_action(&mut self) -> Action {
        Action::from(self.pending_direction.take())
    }

    pub fn clear(&mut self) {
        self.pending_direction = None;
    }
}
