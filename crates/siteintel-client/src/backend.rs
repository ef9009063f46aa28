//! Explicit live/demo switch
//!
//! The UI awaits the same two operations in both modes; which implementation
//! answers is decided once, from configuration, and shown in the header.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use siteintel_core::prelude::*;
use siteintel_core::{AnalysisRequest, AnalysisResult, ConversationRequest, ConversationResponse};

use crate::demo::DemoApiClient;
use crate::http::HttpApiClient;
use crate::service::AnalysisService;

/// Which backend answers analysis and conversation requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    /// Call the configured analysis service over HTTP
    #[default]
    Live,
    /// Return fabricated responses without touching the network
    Demo,
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMode::Live => write!(f, "live"),
            ApiMode::Demo => write!(f, "demo"),
        }
    }
}

impl FromStr for ApiMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(ApiMode::Live),
            "demo" => Ok(ApiMode::Demo),
            other => Err(Error::config_invalid(format!(
                "Unknown API mode '{}' (expected 'live' or 'demo')",
                other
            ))),
        }
    }
}

/// The backend selected for this run
#[derive(Debug, Clone)]
pub enum ApiBackend {
    Live(HttpApiClient),
    Demo(DemoApiClient),
}

impl ApiBackend {
    pub fn mode(&self) -> ApiMode {
        match self {
            ApiBackend::Live(_) => ApiMode::Live,
            ApiBackend::Demo(_) => ApiMode::Demo,
        }
    }

    /// Short description for the header and logs
    pub fn describe(&self) -> String {
        match self {
            ApiBackend::Live(client) => client.base_url().to_string(),
            ApiBackend::Demo(_) => "demo data".to_string(),
        }
    }
}

impl From<HttpApiClient> for ApiBackend {
    fn from(client: HttpApiClient) -> Self {
        ApiBackend::Live(client)
    }
}

impl From<DemoApiClient> for ApiBackend {
    fn from(client: DemoApiClient) -> Self {
        ApiBackend::Demo(client)
    }
}

impl AnalysisService for ApiBackend {
    async fn analyze_website(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        match self {
            ApiBackend::Live(client) => client.analyze_website(request).await,
            ApiBackend::Demo(client) => client.analyze_website(request).await,
        }
    }

    async fn converse(&self, request: &ConversationRequest) -> Result<ConversationResponse> {
        match self {
            ApiBackend::Live(client) => client.converse(request).await,
            ApiBackend::Demo(client) => client.converse(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("live".parse::<ApiMode>().unwrap(), ApiMode::Live);
        assert_eq!(" DEMO ".parse::<ApiMode>().unwrap(), ApiMode::Demo);
        assert!("mock".parse::<ApiMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trips_through_from_str() {
        for mode in [ApiMode::Live, ApiMode::Demo] {
            assert_eq!(mode.to_string().parse::<ApiMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_backend_mode_and_description() {
        let live: ApiBackend =
            HttpApiClient::new("http://localhost:8000", "s", Duration::from_secs(1))
                .unwrap()
                .into();
        assert_eq!(live.mode(), ApiMode::Live);
        assert_eq!(live.describe(), "http://localhost:8000");

        let demo: ApiBackend = DemoApiClient::new(Duration::ZERO).into();
        assert_eq!(demo.mode(), ApiMode::Demo);
        assert_eq!(demo.describe(), "demo data");
    }

    #[tokio::test]
    async fn test_demo_backend_delegates() {
        let backend = ApiBackend::Demo(DemoApiClient::new(Duration::ZERO));
        let request = AnalysisRequest::new("https://acme.io", ["Pricing?"]);
        let result = backend.analyze_website(&request).await.unwrap();
        assert_eq!(result.extracted_answers.len(), 1);
    }
}
