use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use intake_core::locale::Language;
use intake_core::models::record::{IntakeDraft, IntakeRecord};
use intake_core::models::report::AssessmentReport;

/// Where a session is in its lifecycle. There is deliberately nothing
/// between these two: a failed validation or generation leaves the
/// session exactly where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Editing,
    Submitted,
}

/// A completed submission: the finalized record and its report, kept
/// together until the operator starts a new client.
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: IntakeRecord,
    pub report: AssessmentReport,
}

/// Explicit per-session context, passed to handlers instead of living in
/// ambient page-global state. Created fresh per client; holds the current
/// UI language, the editable draft, and (after a successful submit) the
/// finalized record and report.
pub struct Session {
    pub language: Language,
    pub draft: IntakeDraft,
    pub(crate) state: SessionState,
    pub(crate) submission: Option<Submission>,
    pub(crate) last_append_error: Option<String>,
    pub(crate) log_path: Option<PathBuf>,
}

impl Session {
    /// A fresh session in `Editing`. `log_path` is the optional flat-file
    /// log; `None` disables persistence entirely.
    pub fn new(language: Language, log_path: Option<PathBuf>) -> Self {
        Self {
            language,
            draft: IntakeDraft::default(),
            state: SessionState::Editing,
            submission: None,
            last_append_error: None,
            log_path,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn report(&self) -> Option<&AssessmentReport> {
        self.submission.as_ref().map(|s| &s.report)
    }

    pub fn record(&self) -> Option<&IntakeRecord> {
        self.submission.as_ref().map(|s| &s.record)
    }

    /// Why the last log append failed, if it did. The report was still
    /// shown; this exists so the surface can raise an operator warning.
    pub fn last_append_error(&self) -> Option<&str> {
        self.last_append_error.as_deref()
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// "New client": back to `Editing` with a blank draft. The in-memory
    /// record and report are discarded; rows already in the log stay.
    pub fn reset(&mut self) {
        self.draft = IntakeDraft::default();
        self.state = SessionState::Editing;
        self.submission = None;
        self.last_append_error = None;
    }
}
