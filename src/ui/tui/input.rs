use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::UiContext;

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the main loop
    Continue,
    /// Break from the main loop (exit)
    Break,
}

/// Handle a key press on the startup screen.
pub fn handle_key(key: KeyEvent, ctx: &mut UiContext) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Break;
    }

    if ctx.show_help {
        // Help overlay swallows everything but its close keys
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
            ctx.show_help = false;
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputResult::Break,
        KeyCode::F(1) | KeyCode::Char('?') => {
            ctx.show_help = true;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
