//! Live HTTP client for the analysis service
//!
//! All routes are `POST` with JSON bodies and an `Authorization: Bearer`
//! header. Non-success statuses are normalized into [`Error::Api`] carrying the
//! server's `detail` field, or `HTTP <status>` when the body has none.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use siteintel_core::prelude::*;
use siteintel_core::{
    AnalysisRequest, AnalysisResult, ConversationRequest, ConversationResponse, QuestionResponse,
};

use crate::service::AnalysisService;

const ANALYZE_ENDPOINT: &str = "/analyze-website";
const CONVERSATIONS_ENDPOINT: &str = "/conversations";
const ASK_QUESTION_ENDPOINT: &str = "/ask-question";

/// reqwest-backed client for the analysis service
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    secret: String,
    http: reqwest::Client,
}

impl HttpApiClient {
    /// Create a client for `base_url` authenticating with `secret`.
    ///
    /// `timeout` bounds each whole request; there is no retry.
    pub fn new(
        base_url: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::config_invalid("API base URL cannot be empty"));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            secret: secret.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call the `/ask-question` route.
    ///
    /// The route is declared by the service but no screen invokes it; it is
    /// exposed for completeness and decodes the documented response shape.
    pub async fn ask_question(&self, request: &ConversationRequest) -> Result<QuestionResponse> {
        self.post(ASK_QUESTION_ENDPOINT, request).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.secret)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message =
                error_detail(&text).unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!("POST {} failed with {}: {}", endpoint, status, message);
            return Err(Error::api_status(status.as_u16(), message));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("POST {} returned an undecodable body: {}", endpoint, e);
            Error::decode(e.to_string())
        })
    }
}

impl AnalysisService for HttpApiClient {
    async fn analyze_website(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        info!(
            "Analyzing {} with {} custom question(s)",
            request.url,
            request.questions.len()
        );
        self.post(ANALYZE_ENDPOINT, request).await
    }

    async fn converse(&self, request: &ConversationRequest) -> Result<ConversationResponse> {
        debug!(
            "Conversation turn for {} ({} history entries)",
            request.url,
            request.conversation_history.len()
        );
        self.post(CONVERSATIONS_ENDPOINT, request).await
    }
}

/// Pull the human-readable `detail` out of an error body.
///
/// String details are used verbatim; structured details (validation error
/// lists) are rendered as compact JSON. Empty or missing details yield `None`.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
