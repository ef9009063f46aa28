//! Headless mode - NDJSON event output for scripting
//!
//! Drives the same Engine as the TUI without a terminal: one analysis,
//! optionally followed by conversation turns, with every outcome printed to
//! stdout as one JSON object per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_started","url":"https://acme.io","questions":[],"backend":"demo data","timestamp":1704700001000}
//! {"event":"analysis_completed","url":"https://acme.io","result":{...},"timestamp":1704700003000}
//! {"event":"conversation_reply","query":"Pricing?","response":"...","timestamp":1704700004000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use siteintel_core::AnalysisResult;

pub use runner::{run_headless, HeadlessScript};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The analysis request was sent
    AnalysisStarted {
        url: String,
        questions: Vec<String>,
        backend: String,
        timestamp: i64,
    },

    /// The analysis service returned a company profile
    AnalysisCompleted {
        url: String,
        result: Box<AnalysisResult>,
        timestamp: i64,
    },

    /// The analysis request failed or was refused
    AnalysisFailed {
        url: String,
        error: String,
        timestamp: i64,
    },

    /// A conversation turn was answered
    ConversationReply {
        query: String,
        response: String,
        timestamp: i64,
    },

    /// A conversation turn failed; `response` is the fallback shown instead
    ConversationFailed {
        query: String,
        error: String,
        response: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn analysis_started(url: &str, questions: Vec<String>, backend: &str) -> Self {
        Self::AnalysisStarted {
            url: url.to_string(),
            questions,
            backend: backend.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(result: AnalysisResult) -> Self {
        Self::AnalysisCompleted {
            url: result.url.clone(),
            result: Box::new(result),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(url: &str, error: impl Into<String>) -> Self {
        Self::AnalysisFailed {
            url: url.to_string(),
            error: error.into(),
            timestamp: Self::now(),
        }
    }

    pub fn conversation_reply(query: &str, response: &str) -> Self {
        Self::ConversationReply {
            query: query.to_string(),
            response: response.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn conversation_failed(query: &str, error: &str, response: &str) -> Self {
        Self::ConversationFailed {
            query: query.to_string(),
            error: error.to_string(),
            response: response.to_string(),
            timestamp: Self::now(),
        }
    }
}
