//! Upload controller.
//!
//! Holds the selected papers, the pending request flag, the last result and
//! the visible error. All state lives in Rust; components only forward DOM
//! events and render what the controller exposes.
//!
//! ```text
//! Idle ──select──▶ FilesSelected ──begin_submit──▶ Submitting
//!  ▲                     ▲                              │
//!  │                     └──────── failure ─────────────┤
//!  └────────── reset ──── ResultsReady ◀──── success ───┘
//! ```

use crate::config::{PAPERS_FIELD, PDF_MIME_TYPE};
use crate::types::{AnalysisResult, AppError, TransportError, ValidationError};

/// A file picked by the user.
///
/// Implemented for `web_sys::File` in the browser and for plain structs in tests.
pub trait PaperFile: Clone {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;

    fn is_pdf(&self) -> bool {
        self.mime_type() == PDF_MIME_TYPE
    }
}

impl PaperFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Observable state of the upload workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    /// Nothing selected
    Idle,
    /// Papers selected, ready to submit (possibly after a failure)
    FilesSelected,
    /// One request in flight
    Submitting,
    /// Result available, results view shown
    ResultsReady,
}

/// Snapshot of the selection handed to a transport.
#[derive(Clone, Debug)]
pub struct AnalysisRequest<F> {
    papers: Vec<F>,
}

impl<F: PaperFile> AnalysisRequest<F> {
    /// Multipart parts in upload order: one `papers` field per file.
    pub fn multipart_parts(&self) -> impl Iterator<Item = (&'static str, &F)> {
        self.papers.iter().map(|paper| (PAPERS_FIELD, paper))
    }

    pub fn paper_names(&self) -> Vec<String> {
        self.papers.iter().map(|p| p.file_name()).collect()
    }
}

/// State machine behind the upload view.
#[derive(Clone, Debug)]
pub struct UploadController<F> {
    files: Vec<F>,
    submitting: bool,
    result: Option<AnalysisResult>,
    error: Option<AppError>,
}

impl<F: PaperFile> Default for UploadController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PaperFile> UploadController<F> {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            submitting: false,
            result: None,
            error: None,
        }
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn phase(&self) -> UploadPhase {
        if self.submitting {
            UploadPhase::Submitting
        } else if self.result.is_some() {
            UploadPhase::ResultsReady
        } else if self.files.is_empty() {
            UploadPhase::Idle
        } else {
            UploadPhase::FilesSelected
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.files.is_empty()
    }

    /// Submit button text.
    pub fn submit_label(&self) -> String {
        if self.submitting {
            return "Analyzing...".to_string();
        }
        let count = self.files.len();
        format!("Analyze {} Paper{}", count, if count == 1 { "" } else { "s" })
    }

    /// Replace the selection with the PDFs among `raw`.
    ///
    /// When `raw` holds no PDF the previous selection is kept and a
    /// validation error is recorded. Returns the number of retained files.
    pub fn select_files<I>(&mut self, raw: I) -> Result<usize, ValidationError>
    where
        I: IntoIterator<Item = F>,
    {
        let mut skipped = 0usize;
        let pdfs: Vec<F> = raw
            .into_iter()
            .filter(|f| {
                let keep = f.is_pdf();
                if !keep {
                    skipped += 1;
                }
                keep
            })
            .collect();

        if pdfs.is_empty() {
            log::warn!("Rejected selection of {} non-PDF file(s)", skipped);
            return Err(self.fail(ValidationError::NoPdfSelected));
        }

        if skipped > 0 {
            log::info!("Ignored {} non-PDF file(s)", skipped);
        }
        log::info!("📄 {} paper(s) selected", pdfs.len());

        self.files = pdfs;
        self.error = None;
        Ok(self.files.len())
    }

    /// Drop the file at `index`, keeping the order of the others.
    pub fn remove_file(&mut self, index: usize) -> Option<F> {
        if index >= self.files.len() {
            log::warn!("remove_file: index {} out of range", index);
            return None;
        }
        let removed = self.files.remove(index);
        log::debug!("Removed {}", removed.file_name());
        Some(removed)
    }

    /// Enter `Submitting` and hand out the request to send.
    ///
    /// Fails without side effects on the selection when nothing is selected
    /// or a request is already pending.
    pub fn begin_submit(&mut self) -> Result<AnalysisRequest<F>, ValidationError> {
        if self.submitting {
            return Err(self.fail(ValidationError::AnalysisInProgress));
        }
        if self.files.is_empty() {
            return Err(self.fail(ValidationError::EmptySelection));
        }

        self.submitting = true;
        self.error = None;
        log::info!("📤 Submitting {} paper(s) for analysis", self.files.len());

        Ok(AnalysisRequest {
            papers: self.files.clone(),
        })
    }

    /// Leave `Submitting` with the outcome of the request.
    ///
    /// Success stores the result and discards the selection. Failure keeps
    /// the selection so the user can retry.
    pub fn complete_submit(&mut self, outcome: Result<AnalysisResult, TransportError>) {
        self.submitting = false;
        match outcome {
            Ok(result) => {
                log::info!(
                    "✅ Analysis done: {} groups from {} paper(s)",
                    result.total_groups,
                    result.papers_analyzed.len()
                );
                self.files.clear();
                self.error = None;
                self.result = Some(result);
            }
            Err(e) => {
                log::error!("❌ Analysis failed: {}", e.detail());
                self.error = Some(e.into());
            }
        }
    }

    /// Back to an empty upload view.
    pub fn reset(&mut self) {
        self.files.clear();
        self.result = None;
        self.error = None;
    }

    fn fail(&mut self, err: ValidationError) -> ValidationError {
        self.error = Some(err.clone().into());
        err
    }
}
