//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action spawns exactly one task that reports back with exactly one
//! completion message. Requests are never cancelled; a result that arrives
//! after the user moved on is filtered out by the update function.

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use siteintel_client::{AnalysisService, ApiBackend};
use siteintel_core::{AnalysisRequest, ConversationRequest, Error};

use crate::message::Message;
use crate::state::ConversationId;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: &ApiBackend) {
    match action {
        UpdateAction::AnalyzeWebsite { request } => {
            spawn_analysis(request, msg_tx, backend.clone());
        }

        UpdateAction::SendConversation {
            conversation_id,
            turn_index,
            request,
        } => {
            spawn_conversation_turn(
                conversation_id,
                turn_index,
                request,
                msg_tx,
                backend.clone(),
            );
        }
    }
}

fn spawn_analysis(request: AnalysisRequest, msg_tx: mpsc::Sender<Message>, backend: ApiBackend) {
    tokio::spawn(async move {
        let msg = match backend.analyze_website(&request).await {
            Ok(result) => Message::AnalysisCompleted {
                result: Box::new(result),
            },
            Err(e) => {
                log_request_failure("Analysis", &e);
                Message::AnalysisFailed {
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Analysis finished after the message channel closed");
        }
    });
}

fn spawn_conversation_turn(
    conversation_id: ConversationId,
    turn_index: usize,
    request: ConversationRequest,
    msg_tx: mpsc::Sender<Message>,
    backend: ApiBackend,
) {
    tokio::spawn(async move {
        let msg = match backend.converse(&request).await {
            Ok(response) => Message::ConversationReplied {
                conversation_id,
                turn_index,
                response: Box::new(response),
            },
            Err(e) => {
                log_request_failure("Conversation", &e);
                Message::ConversationFailed {
                    conversation_id,
                    turn_index,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Conversation reply arrived after the message channel closed");
        }
    });
}

/// Service-side failures are expected and retried by the user; anything
/// else means the local setup is broken.
fn log_request_failure(kind: &str, err: &Error) {
    if err.is_recoverable() {
        warn!(status = ?err.status(), "{} request failed: {}", kind, err);
    } else {
        error!("{} request failed: {:?}", kind, err);
    }
}
