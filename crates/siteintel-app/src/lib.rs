//! siteintel-app - Application state and orchestration for siteintel
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the three
//! screens (analyzer form, results, conversation), the Engine abstraction shared
//! by the TUI and headless runners, and configuration loading.

pub mod actions;
pub mod analysis_form;
pub mod config;
pub mod conversation;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod scroll_state;
pub mod signals;
pub mod state;

// Re-export primary types
pub use analysis_form::{AnalysisFormState, FormField, FormStatus};
pub use conversation::ConversationState;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use scroll_state::ScrollState;
pub use state::{AppState, ConversationId, ConversationSession, Screen, ScreenKind};

// Re-export client types for the runners
pub use siteintel_client::{ApiBackend, ApiMode};
