//! Message processing
//!
//! Runs the TEA update loop for one incoming message, following up with any
//! chained messages and dispatching resulting actions.

use tokio::sync::mpsc;

use siteintel_client::ApiBackend;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &ApiBackend,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), backend);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
