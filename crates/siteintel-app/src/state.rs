//! Application state (Model in TEA pattern)

use std::fmt;

use siteintel_client::ApiMode;
use siteintel_core::{AnalysisResult, AppPhase};

use crate::analysis_form::AnalysisFormState;
use crate::config::Settings;
use crate::conversation::ConversationState;
use crate::scroll_state::ScrollState;

/// Identifies one conversation session so that replies arriving after the
/// user left it can be recognised and dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(pub u64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conversation-{}", self.0)
    }
}

/// A conversation about one analysis result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSession {
    pub id: ConversationId,
    pub result: AnalysisResult,
    pub chat: ConversationState,
}

/// The screen currently shown, carrying exactly the data it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Analyzer(AnalysisFormState),
    Results(AnalysisResult),
    Conversation(ConversationSession),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Analyzer(AnalysisFormState::default())
    }
}

/// Data-free discriminant of [`Screen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Analyzer,
    Results,
    Conversation,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Analyzer(_) => ScreenKind::Analyzer,
            Screen::Results(_) => ScreenKind::Results,
            Screen::Conversation(_) => ScreenKind::Conversation,
        }
    }

    /// The analysis result behind the Results and Conversation screens
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Screen::Analyzer(_) => None,
            Screen::Results(result) => Some(result),
            Screen::Conversation(session) => Some(&session.result),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,

    /// Application phase; `Quitting` ends the runner loop
    pub phase: AppPhase,

    /// Scroll position of the Results screen
    pub results_scroll: ScrollState,

    /// Which backend answers requests, shown in the header
    pub api_mode: ApiMode,

    /// Human-readable backend target (base URL or "demo data")
    pub backend_label: String,

    /// Loaded configuration
    pub settings: Settings,

    next_conversation_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::default(),
            phase: AppPhase::Running,
            results_scroll: ScrollState::default(),
            api_mode: ApiMode::default(),
            backend_label: settings.api.base_url.clone(),
            settings,
            next_conversation_id: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Show the results screen for `result`, scrolled to the top
    pub fn show_results(&mut self, result: AnalysisResult) {
        self.results_scroll = ScrollState::default();
        self.screen = Screen::Results(result);
    }

    /// Allocate the id for a new conversation session
    pub fn next_conversation_id(&mut self) -> ConversationId {
        self.next_conversation_id += 1;
        ConversationId(self.next_conversation_id)
    }

    pub fn form(&self) -> Option<&AnalysisFormState> {
        match &self.screen {
            Screen::Analyzer(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut AnalysisFormState> {
        match &mut self.screen {
            Screen::Analyzer(form) => Some(form),
            _ => None,
        }
    }

    pub fn conversation(&self) -> Option<&ConversationSession> {
        match &self.screen {
            Screen::Conversation(session) => Some(session),
            _ => None,
        }
    }

    pub fn conversation_mut(&mut self) -> Option<&mut ConversationSession> {
        match &mut self.screen {
            Screen::Conversation(session) => Some(session),
            _ => None,
        }
    }
}
