//! Follow-up conversation data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response text substituted into a turn whose request failed
pub const FALLBACK_RESPONSE: &str =
    "Sorry, I encountered an error processing your question. Please try again.";

/// One prior exchange sent as context with a conversation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub user: String,
    pub agent: String,
}

/// Body of a `POST /conversations` (and `/ask-question`) request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRequest {
    pub url: String,
    pub query: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversation_history: Vec<HistoryEntry>,
}

/// Response of `POST /conversations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub url: String,
    pub user_query: String,
    pub agent_response: String,
    #[serde(default)]
    pub context_sources: Vec<String>,
}

/// Response of the legacy `POST /ask-question` route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub url: String,
    pub query: String,
    pub response: String,
    pub timestamp: String,
    pub conversation_id: String,
}

/// Resolution state of a conversation turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStatus {
    /// Inserted optimistically, waiting for the service
    Pending,
    /// The service replied
    Answered { response: String },
    /// The request failed; `response` holds the fallback text shown instead
    Failed { response: String, error: String },
}

/// One user question paired with its (possibly pending) agent answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub user_query: String,
    pub status: TurnStatus,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    /// Create a turn awaiting its answer
    pub fn pending(user_query: impl Into<String>) -> Self {
        Self {
            user_query: user_query.into(),
            status: TurnStatus::Pending,
            timestamp: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, TurnStatus::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, TurnStatus::Failed { .. })
    }

    /// The agent text for this turn; empty while pending
    pub fn agent_response(&self) -> &str {
        match &self.status {
            TurnStatus::Pending => "",
            TurnStatus::Answered { response } | TurnStatus::Failed { response, .. } => response,
        }
    }

    /// Map to the `{user, agent}` pair sent as history
    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            user: self.user_query.clone(),
            agent: self.agent_response().to_string(),
        }
    }
}
