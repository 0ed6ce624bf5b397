//! Pipeline-facing generation tests against a deterministic stub endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};

use intake_bedrock::endpoint::{BoxFuture, GenerativeEndpoint};
use intake_bedrock::error::GenerateError;
use intake_bedrock::generate::generate_report;
use intake_core::models::record::{IntakeDraft, PainLevel};
use intake_core::options::PainArea;

struct StubEndpoint {
    reply: &'static str,
    calls: AtomicUsize,
}

impl StubEndpoint {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

impl GenerativeEndpoint for StubEndpoint {
    fn model_id(&self) -> &str {
        "stub"
    }

    fn generate<'a>(
        &'a self,
        _system_prompt: &'a str,
        _user_message: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerateError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move { Ok(self.reply.to_string()) })
    }
}

struct FailingEndpoint;

impl GenerativeEndpoint for FailingEndpoint {
    fn model_id(&self) -> &str {
        "stub"
    }

    fn generate<'a>(
        &'a self,
        _system_prompt: &'a str,
        _user_message: &'a str,
    ) -> BoxFuture<'a, Result<String, GenerateError>> {
        Box::pin(async move { Err(GenerateError::Unreachable("connection refused".to_string())) })
    }
}

fn sample_record() -> intake_core::models::record::IntakeRecord {
    IntakeDraft {
        name: "Jane Doe".to_string(),
        pain_area: vec![PainArea::Neck],
        pain_level: PainLevel::new(7),
        consent: true,
        ..IntakeDraft::default()
    }
    .finalize()
    .unwrap()
}

#[tokio::test]
async fn returns_endpoint_text_verbatim() {
    let endpoint = StubEndpoint::new("REPORT_X");
    let record = sample_record();

    let report = generate_report(&endpoint, &record).await.unwrap();
    assert_eq!(report.text, "REPORT_X");
    assert_eq!(report.model_id, "stub");
    assert_eq!(endpoint.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn identical_record_and_stub_yield_identical_text() {
    let endpoint = StubEndpoint::new("REPORT_X");
    let record = sample_record();

    let first = generate_report(&endpoint, &record).await.unwrap();
    let second = generate_report(&endpoint, &record).await.unwrap();
    assert_eq!(first.text, second.text);
}

#[tokio::test]
async fn endpoint_failure_propagates() {
    let record = sample_record();
    let err = generate_report(&FailingEndpoint, &record).await.unwrap_err();
    assert!(matches!(err, GenerateError::Unreachable(_)));
}
