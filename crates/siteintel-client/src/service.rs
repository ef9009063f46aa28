//! Service trait shared by the live and demo backends

use siteintel_core::prelude::*;
use siteintel_core::{AnalysisRequest, AnalysisResult, ConversationRequest, ConversationResponse};

/// Operations the UI flow performs against the analysis service.
///
/// Both the TUI and headless runners drive this trait through spawned tasks,
/// so the `AnalysisService` variant returns `Send` futures.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Submit a URL (and custom questions) for analysis
    async fn analyze_website(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;

    /// Ask a follow-up question with the accumulated transcript as context
    async fn converse(&self, request: &ConversationRequest) -> Result<ConversationResponse>;
}
