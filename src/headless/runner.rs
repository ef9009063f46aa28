//! Headless mode runner - scripted event loop without TUI
//!
//! Feeds the Engine the same messages the form and chat screens would send,
//! then waits on the message channel until the state shows an outcome.

use siteintel_app::config::Settings;
use siteintel_app::{ApiBackend, AppState, Engine, FormStatus, Message, Screen};
use siteintel_core::{prelude::*, AnalysisRequest, AnalysisResult, TurnStatus};

use super::HeadlessEvent;

/// What to run: one analysis, then zero or more conversation turns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessScript {
    pub url: String,
    pub questions: Vec<String>,
    pub asks: Vec<String>,
}

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Completed,
    AnalysisFailed,
    Interrupted,
}

impl HeadlessOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            HeadlessOutcome::Completed => 0,
            HeadlessOutcome::AnalysisFailed => 1,
            HeadlessOutcome::Interrupted => 130,
        }
    }
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(
    settings: Settings,
    backend: ApiBackend,
    script: HeadlessScript,
) -> Result<HeadlessOutcome> {
    info!("═══════════════════════════════════════════════════════");
    info!("siteintel starting in HEADLESS mode");
    info!("Target: {}", script.url);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings, backend);
    let outcome = drive(&mut engine, &script).await;

    info!("siteintel headless mode exiting ({:?})", outcome);
    Ok(outcome)
}

/// Execute the script against an engine
async fn drive(engine: &mut Engine, script: &HeadlessScript) -> HeadlessOutcome {
    fill_form(engine, script);

    let Some(request) = engine
        .state
        .form()
        .map(|form| AnalysisRequest::new(form.url.trim(), form.questions.iter()))
    else {
        return HeadlessOutcome::Interrupted;
    };
    HeadlessEvent::analysis_started(&request.url, request.questions, &engine.state.backend_label)
        .emit();

    engine.process_message(Message::SubmitAnalysis);
    if !engine.state.form().is_some_and(|form| form.is_submitting()) {
        HeadlessEvent::analysis_failed(&script.url, "A website URL is required").emit();
        return HeadlessOutcome::AnalysisFailed;
    }

    match wait_for(engine, analysis_outcome).await {
        Some(Ok(result)) => HeadlessEvent::analysis_completed(result).emit(),
        Some(Err(error)) => {
            HeadlessEvent::analysis_failed(&script.url, error).emit();
            return HeadlessOutcome::AnalysisFailed;
        }
        None => return HeadlessOutcome::Interrupted,
    }

    if script.asks.is_empty() {
        return HeadlessOutcome::Completed;
    }

    engine.process_message(Message::StartConversation);
    for query in &script.asks {
        let before = turn_count(&engine.state);
        engine.process_message(Message::SetChatInput(query.clone()));
        engine.process_message(Message::SubmitQuestion);

        if turn_count(&engine.state) == before {
            warn!("Skipping blank conversation query");
            continue;
        }
        let turn_index = before;

        match wait_for(engine, |state| settled_turn(state, turn_index)).await {
            Some(TurnStatus::Answered { response }) => {
                HeadlessEvent::conversation_reply(query, &response).emit();
            }
            Some(TurnStatus::Failed { response, error }) => {
                HeadlessEvent::conversation_failed(query, &error, &response).emit();
            }
            Some(TurnStatus::Pending) | None => return HeadlessOutcome::Interrupted,
        }
    }

    HeadlessOutcome::Completed
}

/// Type the URL and questions into the analyzer form
fn fill_form(engine: &mut Engine, script: &HeadlessScript) {
    engine.process_message(Message::SetUrl(script.url.clone()));
    for (index, text) in script.questions.iter().enumerate() {
        if index > 0 {
            engine.process_message(Message::AddQuestion);
        }
        engine.process_message(Message::UpdateQuestion {
            index,
            text: text.clone(),
        });
    }
}

/// Process channel messages until `check` yields a value.
///
/// Returns `None` if a quit was requested first.
async fn wait_for<T>(
    engine: &mut Engine,
    mut check: impl FnMut(&AppState) -> Option<T>,
) -> Option<T> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            return None;
        }
        if let Some(value) = check(&engine.state) {
            return Some(value);
        }

        let msg = engine.msg_rx.recv().await?;
        engine.process_message(msg);
    }
}

fn analysis_outcome(state: &AppState) -> Option<std::result::Result<AnalysisResult, String>> {
    match &state.screen {
        Screen::Results(result) => Some(Ok(result.clone())),
        Screen::Analyzer(form) => match &form.status {
            FormStatus::Failed(error) => Some(Err(error.clone())),
            _ => None,
        },
        Screen::Conversation(_) => None,
    }
}

fn settled_turn(state: &AppState, index: usize) -> Option<TurnStatus> {
    state
        .conversation()
        .and_then(|session| session.chat.turns.get(index))
        .filter(|turn| !turn.is_pending())
        .map(|turn| turn.status.clone())
}

fn turn_count(state: &AppState) -> usize {
    state
        .conversation()
        .map_or(0, |session| session.chat.turns.len())
}
