use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The text returned by the generation endpoint, held verbatim.
///
/// The endpoint's output is untrusted: nothing here parses or validates
/// it, and any rendering surface must go through [`sanitized_html`]
/// rather than interpolating `text` directly.
///
/// [`sanitized_html`]: AssessmentReport::sanitized_html
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub text: String,
    pub model_id: String,
    /// Operator-facing stamp, e.g. `MP-2026-142833`.
    pub reference_id: String,
    pub generated_at: jiff::Timestamp,
}

impl AssessmentReport {
    pub fn new(text: String, model_id: String) -> Self {
        let now = jiff::Zoned::now();
        Self {
            text,
            model_id,
            reference_id: format!("MP-{}", now.strftime("%Y-%H%M%S")),
            generated_at: now.timestamp(),
        }
    }

    /// The report text with HTML-significant characters escaped, safe to
    /// drop into an HTML rendering surface.
    pub fn sanitized_html(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for c in self.text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }
}
