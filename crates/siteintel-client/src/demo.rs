//! Offline demo backend
//!
//! Returns a fabricated analysis after a simulated delay so the UI flow can be
//! exercised without a running service.

use std::time::Duration;

use chrono::{SecondsFormat, Utc};

use siteintel_core::prelude::*;
use siteintel_core::{
    AnalysisRequest, AnalysisResult, CompanyInfo, ContactInfo, ConversationRequest,
    ConversationResponse, ExtractedAnswer, SocialLinks,
};

use crate::service::AnalysisService;

/// Default simulated latency, matching what the demo UI has always shown
pub const DEFAULT_DEMO_DELAY: Duration = Duration::from_millis(2000);

/// In-memory stand-in for the analysis service
#[derive(Debug, Clone)]
pub struct DemoApiClient {
    delay: Duration,
}

impl Default for DemoApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_DEMO_DELAY)
    }
}

impl DemoApiClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// The canned company profile every demo analysis returns
pub fn demo_company_info() -> CompanyInfo {
    CompanyInfo {
        industry: "Software Development".to_string(),
        company_size: "Medium (50-200 employees)".to_string(),
        location: "San Francisco, CA, USA".to_string(),
        core_products_services: vec![
            "Cloud CRM".to_string(),
            "Customer Support Software".to_string(),
        ],
        unique_selling_proposition:
            "AI-powered CRM that predicts customer churn with 95% accuracy".to_string(),
        target_audience: "Small to Medium Businesses (SMBs)".to_string(),
        contact_info: ContactInfo {
            email: Some("info@example.com".to_string()),
            phone: Some("+1-555-123-4567".to_string()),
            social_media: SocialLinks {
                linkedin: Some("https://linkedin.com/company/example".to_string()),
                twitter: Some("https://twitter.com/example".to_string()),
                facebook: None,
            },
        },
    }
}

impl AnalysisService for DemoApiClient {
    async fn analyze_website(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        info!("Demo analysis for {}", request.url);
        self.simulate_latency().await;

        let extracted_answers = request
            .questions
            .iter()
            .filter(|q| !q.trim().is_empty())
            .map(|question| ExtractedAnswer {
                question: question.clone(),
                answer: format!("AI-generated answer for: {}", question),
            })
            .collect();

        Ok(AnalysisResult {
            url: request.url.clone(),
            analysis_timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            company_info: demo_company_info(),
            extracted_answers,
        })
    }

    async fn converse(&self, request: &ConversationRequest) -> Result<ConversationResponse> {
        debug!("Demo conversation turn for {}", request.url);
        self.simulate_latency().await;

        Ok(ConversationResponse {
            url: request.url.clone(),
            user_query: request.query.clone(),
            agent_response: format!(
                "Demo mode is active, so no analysis service was consulted for: {}",
                request.query
            ),
            context_sources: Vec::new(),
        })
    }
}
