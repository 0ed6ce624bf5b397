use serde::Serialize;
use tracing::{info, warn};

/// A structured operator-visible event, emitted via `tracing` so it lands
/// wherever the deployment routes its logs. The user-facing flow never
/// depends on these.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorEvent {
    pub action: String,
    pub subject: String,
    pub detail: Option<String>,
}

impl OperatorEvent {
    pub fn new(action: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            subject: subject.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn emit(&self) {
        info!(
            event.action = %self.action,
            event.subject = %self.subject,
            event.detail = self.detail.as_deref().unwrap_or(""),
            "operator event"
        );
    }

    pub fn emit_warn(&self) {
        warn!(
            event.action = %self.action,
            event.subject = %self.subject,
            event.detail = self.detail.as_deref().unwrap_or(""),
            "operator warning"
        );
    }
}
