//! Key event handlers for each screen

use crate::analysis_form::{AnalysisFormState, FormField};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match &state.screen {
        Screen::Analyzer(form) => handle_key_analyzer(form, key),
        Screen::Results(_) => handle_key_results(key),
        Screen::Conversation(_) => handle_key_conversation(key),
    }
}

/// Handle key events on the analyzer form
fn handle_key_analyzer(form: &AnalysisFormState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::RequestQuit),
        InputKey::Enter => Some(Message::SubmitAnalysis),

        // Field navigation
        InputKey::Tab | InputKey::Down => Some(Message::FocusNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPreviousField),

        // Question slots
        InputKey::CharCtrl('n') => Some(Message::AddQuestion),
        InputKey::CharCtrl('d') => match form.focus {
            FormField::Question(index) => Some(Message::RemoveQuestion(index)),
            FormField::Url => None,
        },

        // Text editing
        InputKey::CharCtrl('u') => Some(Message::FormClearField),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormCharInput(c)),

        _ => None,
    }
}

/// Handle key events on the results screen
fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('c') | InputKey::Enter => Some(Message::StartConversation),
        InputKey::Char('n') => Some(Message::NewAnalysis),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ => None,
    }
}

/// Handle key events on the conversation screen
fn handle_key_conversation(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::BackToResults),
        InputKey::CharCtrl('n') => Some(Message::NewAnalysis),
        InputKey::Enter => Some(Message::SubmitQuestion),

        // Transcript scrolling
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        // Text editing
        InputKey::CharCtrl('u') => Some(Message::ChatClearInput),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::Char(c) => Some(Message::ChatCharInput(c)),

        _ => None,
    }
}
