//! Fixtures shared by unit tests.

use std::cell::{Cell, RefCell};

use crate::config::PDF_MIME_TYPE;
use crate::controller::{AnalysisRequest, PaperFile};
use crate::services::AnalysisTransport;
use crate::types::{AnalysisResult, Priority, RankedQuestion, TransportError, Variant};

/// In-memory stand-in for a browser `File`.
#[derive(Clone, Debug, PartialEq)]
pub struct FakePaper {
    name: String,
    mime: String,
}

impl FakePaper {
    pub fn pdf(name: &str) -> Self {
        Self::other(name, PDF_MIME_TYPE)
    }

    pub fn other(name: &str, mime: &str) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
        }
    }
}

impl PaperFile for FakePaper {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

/// Transport returning a canned outcome and recording what it was sent.
pub struct MockTransport {
    outcome: Result<AnalysisResult, TransportError>,
    pub calls: Cell<usize>,
    pub sent: RefCell<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new(outcome: Result<AnalysisResult, TransportError>) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl AnalysisTransport for MockTransport {
    type Paper = FakePaper;

    async fn analyze(
        &self,
        request: &AnalysisRequest<FakePaper>,
    ) -> Result<AnalysisResult, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.sent.borrow_mut().extend(
            request
                .multipart_parts()
                .map(|(field, paper)| (field.to_string(), paper.file_name())),
        );
        self.outcome.clone()
    }
}

/// A group with `variants` variants spread over numbered papers.
pub fn question(text: &str, priority: Priority, count: usize, variants: usize) -> RankedQuestion {
    RankedQuestion {
        id: None,
        representative: text.to_string(),
        priority,
        count,
        variants: (0..variants)
            .map(|i| Variant {
                source: format!("{}.pdf", 2020 + i),
                text: format!("{} ({})", text, i + 1),
            })
            .collect(),
    }
}

pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        papers_analyzed: vec!["2020.pdf".into(), "2021.pdf".into(), "2022.pdf".into()],
        total_questions_extracted: 9,
        total_groups: 4,
        ranked_questions: vec![
            question("Explain the OSI model", Priority::High, 3, 3),
            question("Define normalization", Priority::Medium, 2, 2),
            question("What is paging?", Priority::Low, 1, 1),
            question("Describe TCP handshake", Priority::High, 3, 3),
        ],
    }
}
