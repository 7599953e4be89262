//! HTTP transport to the PYQ analysis service.
//!
//! Papers are posted as `multipart/form-data`, one `papers` field per file.
//! The browser sets the multipart boundary itself, so no content type is
//! given explicitly.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::analyze_url;
use crate::controller::{AnalysisRequest, PaperFile};
use crate::types::{parse_analysis, AnalysisResult, TransportError};

/// Something that can run an analysis request.
///
/// Implemented by [`HttpAnalyzer`] in the browser and by mocks in tests.
#[allow(async_fn_in_trait)]
pub trait AnalysisTransport {
    type Paper: PaperFile;

    async fn analyze(
        &self,
        request: &AnalysisRequest<Self::Paper>,
    ) -> Result<AnalysisResult, TransportError>;
}

/// Analysis over HTTP with `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpAnalyzer {
    endpoint: String,
}

impl Default for HttpAnalyzer {
    fn default() -> Self {
        Self::new(analyze_url())
    }
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(request: &AnalysisRequest<File>) -> Result<FormData, TransportError> {
        let form_data = FormData::new()
            .map_err(|e| TransportError::Unreachable(format!("Failed to create FormData: {:?}", e)))?;

        for (field, paper) in request.multipart_parts() {
            form_data
                .append_with_blob_and_filename(field, paper, &paper.name())
                .map_err(|e| {
                    TransportError::Unreachable(format!("Failed to append {}: {:?}", paper.name(), e))
                })?;
        }

        Ok(form_data)
    }
}

impl AnalysisTransport for HttpAnalyzer {
    type Paper = File;

    async fn analyze(&self, request: &AnalysisRequest<File>) -> Result<AnalysisResult, TransportError> {
        let form_data = Self::build_form(request)?;

        log::debug!("POST {} ({:?})", self.endpoint, request.paper_names());
        let response = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| TransportError::Unreachable(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Unreachable(format!("Failed to read body: {}", e)))?;

        if !response.ok() {
            return Err(TransportError::from_error_body(status, &body));
        }

        parse_analysis(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SERVICE_UNREACHABLE_MESSAGE;
    use crate::controller::UploadController;
    use crate::test_support::{sample_result, FakePaper, MockTransport};
    use futures::executor::block_on;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            HttpAnalyzer::default().endpoint(),
            "http://localhost:8000/api/analyze/"
        );
    }

    #[test]
    fn test_empty_selection_never_reaches_transport() {
        let transport = MockTransport::new(Ok(sample_result()));
        let mut ctrl = UploadController::<FakePaper>::new();

        if let Ok(request) = ctrl.begin_submit() {
            let outcome = block_on(transport.analyze(&request));
            ctrl.complete_submit(outcome);
        }

        assert_eq!(transport.calls.get(), 0);
        assert_eq!(
            ctrl.error().map(|e| e.to_string()).as_deref(),
            Some("Please upload at least one PDF file")
        );
    }

    #[test]
    fn test_successful_round_trip_through_mock() {
        let transport = MockTransport::new(Ok(sample_result()));
        let mut ctrl = UploadController::new();
        ctrl.select_files(vec![FakePaper::pdf("2022.pdf"), FakePaper::pdf("2023.pdf")])
            .unwrap();

        let request = ctrl.begin_submit().unwrap();
        assert!(ctrl.is_submitting());
        let outcome = block_on(transport.analyze(&request));
        ctrl.complete_submit(outcome);

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(
            *transport.sent.borrow(),
            vec![
                ("papers".to_string(), "2022.pdf".to_string()),
                ("papers".to_string(), "2023.pdf".to_string()),
            ]
        );
        assert!(!ctrl.is_submitting());
        assert_eq!(ctrl.result(), Some(&sample_result()));
    }

    #[test]
    fn test_service_error_message_is_surfaced() {
        let transport = MockTransport::new(Err(TransportError::from_error_body(
            400,
            r#"{"error": "bad file"}"#,
        )));
        let mut ctrl = UploadController::new();
        ctrl.select_files(vec![FakePaper::pdf("a.pdf")]).unwrap();

        let request = ctrl.begin_submit().unwrap();
        ctrl.complete_submit(block_on(transport.analyze(&request)));

        assert_eq!(ctrl.error().map(|e| e.to_string()).as_deref(), Some("bad file"));
        assert!(!ctrl.is_submitting());
        assert_eq!(ctrl.files().len(), 1);
    }

    #[test]
    fn test_unreachable_service_uses_fallback() {
        let transport = MockTransport::new(Err(TransportError::Unreachable(
            "connection refused".into(),
        )));
        let mut ctrl = UploadController::new();
        ctrl.select_files(vec![FakePaper::pdf("a.pdf")]).unwrap();

        let request = ctrl.begin_submit().unwrap();
        ctrl.complete_submit(block_on(transport.analyze(&request)));

        assert_eq!(
            ctrl.error().map(|e| e.to_string()).as_deref(),
            Some(SERVICE_UNREACHABLE_MESSAGE)
        );
        assert!(ctrl.can_submit());
    }
}
