//! # siteintel-core - Core Domain Types
//!
//! Foundation crate for siteintel. Provides the analysis and conversation data
//! model exchanged with the remote analysis service, the error taxonomy, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Analysis (`analysis`)
//! - [`AnalysisRequest`] - URL plus custom questions (blank entries discarded)
//! - [`AnalysisResult`] - Company profile and extracted answers for one site
//! - [`CompanyInfo`], [`ContactInfo`], [`SocialLinks`], [`ExtractedAnswer`]
//!
//! ### Conversation (`conversation`)
//! - [`ConversationTurn`] - One user query and its (possibly pending) answer
//! - [`TurnStatus`] - Pending / Answered / Failed
//! - [`ConversationRequest`], [`ConversationResponse`], [`HistoryEntry`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; request failures are `recoverable`
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use siteintel_core::prelude::*;
//! ```

pub mod analysis;
pub mod conversation;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all siteintel crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{
    display_host, AnalysisRequest, AnalysisResult, CompanyInfo, ContactInfo, ExtractedAnswer,
    SocialLinks,
};
pub use conversation::{
    ConversationRequest, ConversationResponse, ConversationTurn, HistoryEntry, QuestionResponse,
    TurnStatus, FALLBACK_RESPONSE,
};
pub use error::{Error, Result};
pub use types::AppPhase;
