//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen

pub(crate) mod keys;
pub(crate) mod update;


use siteintel_core::{AnalysisRequest, ConversationRequest};

use crate::message::Message;
use crate::state::ConversationId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Call the analysis service; completes with `AnalysisCompleted` or
    /// `AnalysisFailed`
    AnalyzeWebsite { request: AnalysisRequest },

    /// Send one conversation turn; completes with `ConversationReplied` or
    /// `ConversationFailed` carrying the same id and index
    SendConversation {
        conversation_id: ConversationId,
        turn_index: usize,
        request: ConversationRequest,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
