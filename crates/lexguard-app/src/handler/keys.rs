//! Key event handlers for each screen and overlay

use lexguard_core::{InputMode, ResultTab};

use crate::input_key::InputKey;
use crate::message::{Message, TextEdit};
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Library => handle_key_library(key),
        UiMode::Normal if state.shows_analysis() => handle_key_analysis(state, key),
        UiMode::Normal => handle_key_input(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}

fn handle_key_library(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('o') => Some(Message::CloseLibrary),
        InputKey::Up | InputKey::Char('k') => Some(Message::LibraryUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::LibraryDown),
        InputKey::Enter => Some(Message::LibraryOpenSelected),
        _ => None,
    }
}

/// Input screen: file path or pasted text
fn handle_key_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('q') => return Some(Message::RequestQuit),
        InputKey::CharCtrl('o') => return Some(Message::OpenLibrary),
        InputKey::Tab | InputKey::BackTab => return Some(Message::ToggleMode),
        _ => {}
    }

    match (state.workflow.mode(), &key) {
        (InputMode::Upload, InputKey::Enter) => Some(Message::Submit),
        (InputMode::Text, InputKey::F(5)) => Some(Message::Submit),
        _ => text_edit(key).map(Message::Edit),
    }
}

/// Analysis screen: editor on the left, results on the right
fn handle_key_analysis(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('s') => return Some(Message::Save),
        InputKey::CharCtrl('e') => return Some(Message::Export),
        InputKey::CharCtrl('n') => return Some(Message::Reset),
        InputKey::CharCtrl('o') => return Some(Message::OpenLibrary),
        InputKey::CharCtrl('q') => return Some(Message::RequestQuit),
        InputKey::Tab | InputKey::BackTab => return Some(Message::ToggleFocus),
        _ => {}
    }

    match state.focus {
        Focus::Editor => match key {
            InputKey::Esc => Some(Message::ToggleFocus),
            other => text_edit(other).map(Message::Edit),
        },
        Focus::Results => handle_key_results(key),
    }
}

fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('1') => Some(Message::SelectTab(ResultTab::Summary)),
        InputKey::Char('2') => Some(Message::SelectTab(ResultTab::Ask)),
        InputKey::Char('3') => Some(Message::SelectTab(ResultTab::Risks)),
        InputKey::Left | InputKey::Char('h') => Some(Message::PrevTab),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::Up | InputKey::Char('k') => Some(Message::RiskCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::RiskCursorDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleRiskAtCursor),
        InputKey::Esc | InputKey::Char('q') => Some(Message::RequestQuit),
        _ => None,
    }
}

fn text_edit(key: InputKey) -> Option<TextEdit> {
    match key {
        InputKey::Char(c) => Some(TextEdit::Insert(c)),
        InputKey::Enter => Some(TextEdit::Newline),
        InputKey::Backspace => Some(TextEdit::Backspace),
        InputKey::Delete => Some(TextEdit::Delete),
        InputKey::Left => Some(TextEdit::Left),
        InputKey::Right => Some(TextEdit::Right),
        InputKey::Up => Some(TextEdit::Up),
        InputKey::Down => Some(TextEdit::Down),
        InputKey::Home => Some(TextEdit::Home),
        InputKey::End => Some(TextEdit::End),
        InputKey::PageUp => Some(TextEdit::PageUp),
        InputKey::PageDown => Some(TextEdit::PageDown),
        _ => None,
    }
}
