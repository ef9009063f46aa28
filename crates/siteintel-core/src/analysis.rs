//! Website analysis data model
//!
//! Mirrors the JSON shapes exchanged with the `/analyze-website` endpoint.
//! All company fields are opaque display strings; nothing is validated beyond
//! presence.

use serde::{Deserialize, Serialize};

/// Body of a `POST /analyze-website` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,

    /// Custom questions, in the order the user entered them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<String>,
}

impl AnalysisRequest {
    /// Build a request, discarding blank questions while preserving order
    pub fn new<I, S>(url: impl Into<String>, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = questions
            .into_iter()
            .map(Into::into)
            .filter(|q: &String| !q.trim().is_empty())
            .collect();

        Self {
            url: url.into(),
            questions,
        }
    }
}

/// Social profile links discovered on the site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Labeled links that have a non-blank value
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        present([
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("Facebook", &self.facebook),
        ])
    }
}

/// Contact block of a company profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub social_media: SocialLinks,
}

impl ContactInfo {
    /// True when there is nothing to show in the contact block
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Labeled contact lines in display order.
    ///
    /// Blank strings count as absent, the same as a missing field.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = present([("Email", &self.email), ("Phone", &self.phone)]);
        entries.extend(self.social_media.entries());
        entries
    }
}

fn present<'a, const N: usize>(
    fields: [(&'static str, &'a Option<String>); N],
) -> Vec<(&'static str, &'a str)> {
    fields
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (label, v))
        })
        .collect()
}

/// Structured company profile extracted from a website
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub industry: String,
    pub company_size: String,
    pub location: String,
    #[serde(default)]
    pub core_products_services: Vec<String>,
    pub unique_selling_proposition: String,
    pub target_audience: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

/// Answer to one custom question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAnswer {
    pub question: String,
    pub answer: String,
}

/// Response of `POST /analyze-website`
///
/// Immutable once received: the screen controller moves it between the
/// results and conversation screens and drops it on a new analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: String,
    pub analysis_timestamp: String,
    pub company_info: CompanyInfo,
    #[serde(default)]
    pub extracted_answers: Vec<ExtractedAnswer>,
}

impl AnalysisResult {
    /// Hostname of the analyzed site, for headings
    pub fn hostname(&self) -> String {
        display_host(&self.url)
    }
}

/// Extract the host portion of a URL for display.
///
/// Falls back to the raw input when it does not parse as an absolute URL.
pub fn display_host(raw: &str) -> String {
    url::Url::parse(raw.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_discards_blank_questions_in_order() {
        let req = AnalysisRequest::new("https://acme.io", ["", "What is your pricing?", ""]);
        assert_eq!(req.questions, vec!["What is your pricing?".to_string()]);
    }

    #[test]
    fn test_request_keeps_question_text_untrimmed() {
        let req = AnalysisRequest::new("https://acme.io", ["  Who? ", "   ", "Where?"]);
        assert_eq!(req.questions, vec!["  Who? ".to_string(), "Where?".to_string()]);
    }

    #[test]
    fn test_request_omits_empty_questions_on_the_wire() {
        let req = AnalysisRequest::new("https://acme.io", Vec::<String>::new());
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, json!({ "url": "https://acme.io" }));
    }

    #[test]
    fn test_result_decodes_service_payload() {
        let payload = json!({
            "url": "https://acme.io",
            "analysis_timestamp": "2024-05-01T10:00:00Z",
            "company_info": {
                "industry": "Retail software",
                "company_size": "Small (10-50)",
                "location": "Berlin, DE",
                "core_products_services": ["POS", "Inventory"],
                "unique_selling_proposition": "Offline-first checkout",
                "target_audience": "Independent shops",
                "contact_info": {
                    "email": "hello@acme.io",
                    "phone": null,
                    "social_media": { "linkedin": "https://linkedin.com/company/acme" }
                }
            },
            "extracted_answers": [
                { "question": "What is your pricing?", "answer": "From 29 EUR/month." }
            ]
        });

        let result: AnalysisResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.company_info.core_products_services.len(), 2);
        assert_eq!(result.company_info.contact_info.phone, None);
        assert_eq!(
            result.company_info.contact_info.social_media.linkedin.as_deref(),
            Some("https://linkedin.com/company/acme")
        );
        assert_eq!(result.extracted_answers[0].answer, "From 29 EUR/month.");
    }

    #[test]
    fn test_contact_info_defaults_when_missing() {
        let payload = json!({
            "industry": "x", "company_size": "x", "location": "x",
            "unique_selling_proposition": "x", "target_audience": "x"
        });
        let info: CompanyInfo = serde_json::from_value(payload).unwrap();
        assert!(info.contact_info.is_empty());
        assert!(info.core_products_services.is_empty());
    }

    #[test]
    fn test_contact_info_is_empty() {
        let mut contact = ContactInfo::default();
        assert!(contact.is_empty());
        contact.social_media.twitter = Some("https://twitter.com/acme".into());
        assert!(!contact.is_empty());
    }

    #[test]
    fn test_blank_contact_fields_count_as_absent() {
        let mut contact = ContactInfo {
            email: Some(String::new()),
            phone: Some("   ".into()),
            ..Default::default()
        };
        contact.social_media.facebook = Some(String::new());
        assert!(contact.is_empty());
        assert!(contact.entries().is_empty());

        contact.phone = Some("+1-555-0100".into());
        assert_eq!(contact.entries(), vec![("Phone", "+1-555-0100")]);
    }

    #[test]
    fn test_display_host() {
        assert_eq!(display_host("https://www.acme.io/about?x=1"), "www.acme.io");
        assert_eq!(display_host("acme.io"), "acme.io");
        assert_eq!(display_host("  http://acme.io  "), "acme.io");
    }
}
