//! Main update function - handles state transitions (TEA pattern)

use siteintel_core::AppPhase;
use tracing::{debug, info, warn};

use crate::analysis_form::AnalysisFormState;
use crate::conversation::{ConversationState, PAGE_SCROLL_LINES};
use crate::message::Message;
use crate::scroll_state::ScrollState;
use crate::state::{AppState, ConversationSession, Screen};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit | Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Analyzer Form Messages
        // ─────────────────────────────────────────────────────────
        Message::SetUrl(url) => edit_form(state, |form| form.set_url(url)),
        Message::UpdateQuestion { index, text } => {
            edit_form(state, |form| form.update_question(index, text))
        }
        Message::AddQuestion => edit_form(state, |form| form.add_question()),
        Message::RemoveQuestion(index) => edit_form(state, |form| form.remove_question(index)),
        Message::FocusNextField => edit_form(state, |form| form.focus_next()),
        Message::FocusPreviousField => edit_form(state, |form| form.focus_previous()),
        Message::FormCharInput(c) => edit_form(state, |form| form.insert_char(c)),
        Message::FormBackspace => edit_form(state, |form| form.backspace()),
        Message::FormClearField => edit_form(state, |form| form.clear_field()),

        Message::SubmitAnalysis => handle_submit_analysis(state),
        Message::AnalysisCompleted { result } => {
            if state.form().is_some() {
                info!("Analysis completed for {}", result.url);
                state.show_results(*result);
            } else {
                debug!("Ignoring analysis result for {}: analyzer not shown", result.url);
            }
            UpdateResult::none()
        }
        Message::AnalysisFailed { error } => {
            if let Some(form) = state.form_mut() {
                warn!("Analysis failed: {}", error);
                form.fail(error);
            } else {
                debug!("Ignoring analysis failure: analyzer not shown");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Screen Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::StartConversation => {
            if let Screen::Results(result) = &state.screen {
                let result = result.clone();
                let id = state.next_conversation_id();
                debug!("Starting {} for {}", id, result.url);
                state.screen = Screen::Conversation(ConversationSession {
                    id,
                    result,
                    chat: ConversationState::new(),
                });
            }
            UpdateResult::none()
        }
        Message::BackToResults => {
            if let Screen::Conversation(session) = &state.screen {
                let result = session.result.clone();
                state.show_results(result);
            }
            UpdateResult::none()
        }
        Message::NewAnalysis => {
            if state.form().is_none() {
                info!("Starting a new analysis");
                state.screen = Screen::default();
                state.results_scroll = ScrollState::default();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Conversation Messages
        // ─────────────────────────────────────────────────────────
        Message::SetChatInput(text) => edit_chat(state, |chat| chat.set_input(text)),
        Message::ChatCharInput(c) => edit_chat(state, |chat| chat.insert_char(c)),
        Message::ChatBackspace => edit_chat(state, |chat| chat.backspace()),
        Message::ChatClearInput => edit_chat(state, |chat| chat.clear_input()),

        Message::SubmitQuestion => handle_submit_question(state),
        Message::ConversationReplied {
            conversation_id,
            turn_index,
            response,
        } => {
            match state.conversation_mut() {
                Some(session) if session.id == conversation_id => {
                    if !session.chat.resolve_turn(turn_index, response.agent_response) {
                        debug!("No pending turn {} in {}", turn_index, conversation_id);
                    }
                }
                _ => debug!("Dropping reply for closed {}", conversation_id),
            }
            UpdateResult::none()
        }
        Message::ConversationFailed {
            conversation_id,
            turn_index,
            error,
        } => {
            match state.conversation_mut() {
                Some(session) if session.id == conversation_id => {
                    warn!("Conversation turn {} failed: {}", turn_index, error);
                    if !session.chat.fail_turn(turn_index, error) {
                        debug!("No pending turn {} in {}", turn_index, conversation_id);
                    }
                }
                _ => debug!("Dropping failure for closed {}", conversation_id),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll(state, ScrollDirection::Up, 1),
        Message::ScrollDown => scroll(state, ScrollDirection::Down, 1),
        Message::PageUp => scroll(state, ScrollDirection::Up, PAGE_SCROLL_LINES),
        Message::PageDown => scroll(state, ScrollDirection::Down, PAGE_SCROLL_LINES),
    }
}

fn edit_form(state: &mut AppState, edit: impl FnOnce(&mut AnalysisFormState)) -> UpdateResult {
    if let Some(form) = state.form_mut() {
        edit(form);
    }
    UpdateResult::none()
}

fn edit_chat(state: &mut AppState, edit: impl FnOnce(&mut ConversationState)) -> UpdateResult {
    if let Some(session) = state.conversation_mut() {
        edit(&mut session.chat);
    }
    UpdateResult::none()
}

fn handle_submit_analysis(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.form_mut() else {
        return UpdateResult::none();
    };

    match form.prepare_submission() {
        Some(request) => {
            info!(
                "Submitting analysis for {} ({} question(s))",
                request.url,
                request.questions.len()
            );
            UpdateResult::action(UpdateAction::AnalyzeWebsite { request })
        }
        None => {
            debug!("Analysis submission refused");
            UpdateResult::none()
        }
    }
}

fn handle_submit_question(state: &mut AppState) -> UpdateResult {
    let Some(session) = state.conversation_mut() else {
        return UpdateResult::none();
    };

    let url = session.result.url.clone();
    match session.chat.begin_turn(&url) {
        Some((turn_index, request)) => UpdateResult::action(UpdateAction::SendConversation {
            conversation_id: session.id,
            turn_index,
            request,
        }),
        None => {
            debug!("Conversation submission refused");
            UpdateResult::none()
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ScrollDirection {
    Up,
    Down,
}

fn scroll(state: &mut AppState, direction: ScrollDirection, lines: u16) -> UpdateResult {
    match &mut state.screen {
        Screen::Results(_) => match direction {
            ScrollDirection::Up => state.results_scroll.scroll_back(lines),
            ScrollDirection::Down => state.results_scroll.scroll_away(lines),
        },
        Screen::Conversation(session) => match direction {
            ScrollDirection::Up => session.chat.scroll_up(lines),
            ScrollDirection::Down => session.chat.scroll_down(lines),
        },
        Screen::Analyzer(_) => {}
    }
    UpdateResult::none()
}
