//! Test utilities for analysis types
//!
//! Provides helper functions for creating test AnalysisResult objects.

use siteintel_core::{AnalysisResult, CompanyInfo, ContactInfo, ExtractedAnswer};

use crate::demo::demo_company_info;

/// Creates a test analysis result with the demo company profile and no
/// custom answers.
///
/// # Arguments
/// * `url` - The analyzed site URL
pub fn test_result(url: &str) -> AnalysisResult {
    test_result_with_answers(url, &[])
}

/// Creates a test analysis result with the given question/answer pairs.
///
/// # Arguments
/// * `url` - The analyzed site URL
/// * `answers` - `(question, answer)` pairs, in order
pub fn test_result_with_answers(url: &str, answers: &[(&str, &str)]) -> AnalysisResult {
    AnalysisResult {
        url: url.to_string(),
        analysis_timestamp: "2024-05-01T10:00:00.000Z".to_string(),
        company_info: demo_company_info(),
        extracted_answers: answers
            .iter()
            .map(|(q, a)| ExtractedAnswer {
                question: q.to_string(),
                answer: a.to_string(),
            })
            .collect(),
    }
}

/// Creates a test analysis result whose contact block is entirely empty.
pub fn test_result_without_contact(url: &str) -> AnalysisResult {
    AnalysisResult {
        company_info: CompanyInfo {
            contact_info: ContactInfo::default(),
            ..demo_company_info()
        },
        ..test_result(url)
    }
}
