//! Application configuration.
//!
//! Centralized configuration for the PYQ Analyzer frontend.
//! Everything is compiled in; the analysis service is expected to run
//! locally next to the browser.

/// Analysis service base URL.
pub const ANALYSIS_SERVICE_URL: &str = "http://localhost:8000";

/// Path of the multipart analysis endpoint.
pub const ANALYZE_PATH: &str = "/api/analyze/";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/api/health/";

/// Application name shown in the hero section.
pub const APP_NAME: &str = "PYQ Analyzer";

/// The only MIME type accepted by the file picker.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Multipart field name, repeated once per uploaded paper.
pub const PAPERS_FIELD: &str = "papers";

/// Shown when the service gave no usable error message.
pub const SERVICE_UNREACHABLE_MESSAGE: &str =
    "Failed to analyze papers. Is the analysis service running?";

/// Shown under the submit button while a request is in flight.
pub const LOADING_NOTE: &str = "This may take 20-40 seconds on first run (AI model loading)";

/// Full URL of the analysis endpoint.
pub fn analyze_url() -> String {
    format!("{}{}", ANALYSIS_SERVICE_URL, ANALYZE_PATH)
}

/// Full URL of the health endpoint.
pub fn health_url() -> String {
    format!("{}{}", ANALYSIS_SERVICE_URL, HEALTH_PATH)
}
