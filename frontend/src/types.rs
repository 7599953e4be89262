//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Analysis Types** - Response of the analysis service
//! - **Service Types** - Health probe payloads
//! - **Error Types** - Validation and transport failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SERVICE_UNREACHABLE_MESSAGE;

// =============================================================================
// Analysis Types
// =============================================================================

/// Urgency assigned by the service to a question group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Recurs in most papers
    High,
    /// Recurs regularly
    Medium,
    /// Seen once or twice
    Low,
}

impl Priority {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::High => "priority-high",
            Priority::Medium => "priority-medium",
            Priority::Low => "priority-low",
        }
    }

    /// Get emoji prefix for display.
    pub fn icon(&self) -> &'static str {
        match self {
            Priority::High => "🔥",
            Priority::Medium => "⚡",
            Priority::Low => "💡",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Badge text, e.g. `🔥 HIGH PRIORITY`.
    pub fn badge_text(&self) -> String {
        format!("{} {} PRIORITY", self.icon(), self.label().to_uppercase())
    }
}

/// One raw occurrence of a question in a paper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Paper the question was found in (file name)
    pub source: String,
    /// Question text as extracted
    pub text: String,
}

/// A deduplicated question group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedQuestion {
    /// Database id assigned by the service, when present
    #[serde(default)]
    pub id: Option<u64>,
    /// Text chosen to stand for the whole group
    pub representative: String,
    pub priority: Priority,
    /// Number of occurrences across all papers
    pub count: usize,
    /// Raw occurrences in the order the service returned them
    pub variants: Vec<Variant>,
}

/// Response from the analysis endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// File names of the analyzed papers
    pub papers_analyzed: Vec<String>,
    pub total_questions_extracted: usize,
    pub total_groups: usize,
    /// Groups, most frequent first
    pub ranked_questions: Vec<RankedQuestion>,
}

// =============================================================================
// Service Types
// =============================================================================

/// Body of `GET /api/health/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Failure body returned by the service.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// User input failed a precondition. Always recoverable in place.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The picked files contained no PDF.
    #[error("Please select only PDF files")]
    NoPdfSelected,

    /// Submit was pressed with an empty selection.
    #[error("Please upload at least one PDF file")]
    EmptySelection,

    /// Submit was pressed while a request was still pending.
    #[error("An analysis is already in progress")]
    AnalysisInProgress,
}

/// The analysis request failed.
///
/// `Display` is the text shown to the user; diagnostic details are kept
/// in the variant for logging only.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The service answered with a non-success status and an error message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never got a usable answer.
    #[error("{}", SERVICE_UNREACHABLE_MESSAGE)]
    Unreachable(String),

    /// The service answered but the body could not be understood.
    #[error("{}", SERVICE_UNREACHABLE_MESSAGE)]
    Malformed(String),
}

impl TransportError {
    /// Interpret a non-success response.
    ///
    /// Uses the `error` field of a JSON body when it is a non-empty string,
    /// otherwise falls back to the generic message.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());

        match message {
            Some(message) => TransportError::Rejected { status, message },
            None => TransportError::Unreachable(format!("HTTP {} without error message", status)),
        }
    }

    /// Diagnostic text for the console.
    pub fn detail(&self) -> String {
        match self {
            TransportError::Rejected { status, message } => format!("HTTP {}: {}", status, message),
            TransportError::Unreachable(detail) => format!("unreachable: {}", detail),
            TransportError::Malformed(detail) => format!("malformed response: {}", detail),
        }
    }
}

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

/// Parse a success body into an [`AnalysisResult`].
pub fn parse_analysis(body: &str) -> Result<AnalysisResult, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "total_questions_extracted": 3,
            "total_groups": 2,
            "papers_analyzed": ["2022.pdf", "2023.pdf"],
            "ranked_questions": [
                {
                    "id": 7,
                    "representative": "Explain the OSI model",
                    "priority": "High",
                    "count": 2,
                    "variants": [
                        {"text": "Explain the OSI model", "source": "2022.pdf"},
                        {"text": "Describe the OSI layers", "source": "2023.pdf"}
                    ]
                },
                {
                    "representative": "What is a deadlock?",
                    "priority": "Low",
                    "count": 1,
                    "variants": [{"text": "What is a deadlock?", "source": "2023.pdf"}]
                }
            ]
        }"#;

        let result = parse_analysis(json).unwrap();
        assert_eq!(result.papers_analyzed.len(), 2);
        assert_eq!(result.total_questions_extracted, 3);
        assert_eq!(result.total_groups, 2);
        assert_eq!(result.ranked_questions[0].id, Some(7));
        assert_eq!(result.ranked_questions[0].priority, Priority::High);
        assert_eq!(result.ranked_questions[0].variants[1].source, "2023.pdf");
        assert_eq!(result.ranked_questions[1].id, None);
    }

    #[test]
    fn test_unknown_priority_is_malformed() {
        let json = r#"{
            "total_questions_extracted": 1,
            "total_groups": 1,
            "papers_analyzed": ["a.pdf"],
            "ranked_questions": [
                {"representative": "Q", "priority": "Urgent", "count": 1,
                 "variants": [{"text": "Q", "source": "a.pdf"}]}
            ]
        }"#;

        let err = parse_analysis(json).unwrap_err();
        assert!(matches!(err, TransportError::Malformed(_)));
        assert_eq!(err.to_string(), SERVICE_UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_error_body_message_is_surfaced() {
        let err = TransportError::from_error_body(400, r#"{"error": "bad file"}"#);
        assert_eq!(err.to_string(), "bad file");
        assert_eq!(
            err,
            TransportError::Rejected { status: 400, message: "bad file".into() }
        );
    }

    #[test]
    fn test_unusable_error_body_falls_back() {
        for body in ["", "<html>Bad Gateway</html>", "{}", r#"{"error": ""}"#, r#"{"error": 42}"#] {
            let err = TransportError::from_error_body(502, body);
            assert_eq!(err.to_string(), SERVICE_UNREACHABLE_MESSAGE, "body: {:?}", body);
        }
    }

    #[test]
    fn test_app_error_display_is_transparent() {
        let err: AppError = ValidationError::EmptySelection.into();
        assert_eq!(err.to_string(), "Please upload at least one PDF file");

        let err: AppError = ValidationError::NoPdfSelected.into();
        assert_eq!(err.to_string(), "Please select only PDF files");
    }

    #[test]
    fn test_priority_badge_text() {
        assert_eq!(Priority::High.badge_text(), "🔥 HIGH PRIORITY");
        assert_eq!(Priority::Medium.badge_text(), "⚡ MEDIUM PRIORITY");
        assert_eq!(Priority::Low.css_class(), "priority-low");
    }

    #[test]
    fn test_health_status() {
        let status: HealthStatus = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(status.is_ok());
    }
}
