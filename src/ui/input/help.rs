use crossterm::event::{KeyCode, KeyEvent};

use super::super::state::InputMode;

pub(in crate::ui) fn handle_help_key(key: KeyEvent, input_mode: &mut InputMode) {
    if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
        *input_mode = InputMode::Form;
    }
}
