//! The submit pipeline: collect → generate → (best-effort) append.

use thiserror::Error;

use intake_bedrock::endpoint::GenerativeEndpoint;
use intake_bedrock::error::GenerateError;
use intake_bedrock::generate::generate_report;
use intake_core::error::ValidationError;
use intake_core::models::log_entry::IntakeLogEntry;
use intake_core::models::report::AssessmentReport;

use crate::events::OperatorEvent;
use crate::state::{Session, SessionState, Submission};

/// Why a submission did not complete. Either way the session stays in
/// `Editing` with its draft intact.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerateError),
}

impl Session {
    /// Run one submission end to end.
    ///
    /// Validation failure or endpoint failure aborts before any state
    /// changes. On success the session transitions to `Submitted` and the
    /// entry is appended to the log; an append failure is reported as an
    /// operator warning and recorded on the session, but never hides the
    /// report from the user.
    ///
    /// Calling again while `Submitted` returns the cached report for the
    /// same idempotency key — no second endpoint call, no duplicate row.
    pub async fn submit(
        &mut self,
        endpoint: &dyn GenerativeEndpoint,
    ) -> Result<&AssessmentReport, SubmitError> {
        if self.state == SessionState::Submitted && self.submission.is_some() {
            let submission = self.submission.as_ref().unwrap();
            return Ok(&submission.report);
        }

        let mut draft = self.draft.clone();
        draft.language = self.language;
        let record = draft.finalize()?;

        let report = generate_report(endpoint, &record).await?;

        self.state = SessionState::Submitted;
        self.last_append_error = None;

        if let Some(path) = &self.log_path {
            let entry = IntakeLogEntry::from_submission(&record, &report);
            match intake_log::append(path, &entry) {
                Ok(()) => {
                    OperatorEvent::new("log_append", path.display().to_string()).emit();
                }
                Err(e) => {
                    OperatorEvent::new("log_append_failed", path.display().to_string())
                        .with_detail(e.to_string())
                        .emit_warn();
                    self.last_append_error = Some(e.to_string());
                }
            }
        }

        let submission = self.submission.insert(Submission { record, report });
        Ok(&submission.report)
    }
}
