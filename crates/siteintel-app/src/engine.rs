//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the selected backend
//! and the settings. Frontends feed it messages and render its state.

use tokio::sync::mpsc;
use tracing::info;

use siteintel_client::ApiBackend;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for siteintel.
///
/// Encapsulates all state shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - The analysis backend
/// - Settings
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, request tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    backend: ApiBackend,
}

impl Engine {
    /// Create a new Engine.
    ///
    /// Must be called from within a tokio runtime: it spawns the OS signal
    /// handler, which sends `Message::Quit` on SIGINT/SIGTERM.
    pub fn new(settings: Settings, backend: ApiBackend) -> Self {
        let engine = Self::without_signals(settings, backend);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        engine
    }

    /// Create an Engine without installing the signal handler
    pub fn without_signals(settings: Settings, backend: ApiBackend) -> Self {
        let mut state = AppState::with_settings(settings.clone());
        state.api_mode = backend.mode();
        state.backend_label = backend.describe();

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        info!("Engine ready ({} backend: {})", backend.mode(), backend.describe());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            backend,
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.backend);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn backend(&self) -> &ApiBackend {
        &self.backend
    }
}
