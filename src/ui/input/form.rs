use crate::app::AppState;
use crate::clipboard::ClipboardHandle;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::state::InputMode;

/// Returns true when the app should quit.
pub(in crate::ui) fn handle_form_key(
    key: KeyEvent,
    app: &mut AppState,
    input_mode: &mut InputMode,
    clipboard: &ClipboardHandle,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('y') => app.request_copy(clipboard),
            KeyCode::Char('r') => app.reset(),
            KeyCode::Char('u') => app.form.clear_focused(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::F(1) => *input_mode = InputMode::Help,
        KeyCode::Enter => app.submit(),
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(ch) => app.form.push_char(ch),
        _ => {}
    }
    false
}
