//! Message types for the application (TEA pattern)

use siteintel_core::{AnalysisResult, ConversationResponse};

use crate::input_key::InputKey;
use crate::state::ConversationId;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit from a key binding
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Analyzer Form Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the URL field
    SetUrl(String),
    /// Replace the text of one question slot
    UpdateQuestion { index: usize, text: String },
    /// Append a blank question slot
    AddQuestion,
    /// Remove the question slot at an index
    RemoveQuestion(usize),
    FocusNextField,
    FocusPreviousField,
    /// Type a character into the focused form field
    FormCharInput(char),
    FormBackspace,
    FormClearField,
    /// Submit the form
    SubmitAnalysis,

    /// Analysis request finished successfully
    AnalysisCompleted { result: Box<AnalysisResult> },
    /// Analysis request failed with a user-facing message
    AnalysisFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Screen Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Results -> Conversation
    StartConversation,
    /// Conversation -> Results
    BackToResults,
    /// Results/Conversation -> blank Analyzer
    NewAnalysis,

    // ─────────────────────────────────────────────────────────
    // Conversation Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the chat input
    SetChatInput(String),
    ChatCharInput(char),
    ChatBackspace,
    ChatClearInput,
    /// Send the chat input as a new turn
    SubmitQuestion,

    /// The service answered a conversation turn
    ConversationReplied {
        conversation_id: ConversationId,
        turn_index: usize,
        response: Box<ConversationResponse>,
    },
    /// A conversation turn request failed
    ConversationFailed {
        conversation_id: ConversationId,
        turn_index: usize,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll one line towards the top of the content
    ScrollUp,
    /// Scroll one line towards the bottom of the content
    ScrollDown,
    PageUp,
    PageDown,
}
