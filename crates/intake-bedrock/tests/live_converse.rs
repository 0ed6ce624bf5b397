//! Live integration test against the real Bedrock Converse API.
//!
//! Requires valid credentials in the environment (e.g. `AWS_ACCESS_KEY_ID`
//! / `AWS_SECRET_ACCESS_KEY`).
//!
//! Run with: `cargo test -p intake-bedrock --test live_converse -- --ignored`

use intake_bedrock::endpoint::BedrockEndpoint;
use intake_bedrock::generate::generate_report;
use intake_core::models::record::{IntakeDraft, PainLevel};
use intake_core::options::PainArea;

const MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

#[tokio::test]
#[ignore]
async fn live_generation_returns_nonempty_report() {
    let config = build_config().await;
    let endpoint = BedrockEndpoint::new(&config, MODEL_ID);

    let record = IntakeDraft {
        name: "Test Client".to_string(),
        pain_area: vec![PainArea::Neck],
        pain_level: PainLevel::new(6),
        consent: true,
        ..IntakeDraft::default()
    }
    .finalize()
    .unwrap();

    let report = generate_report(&endpoint, &record).await.unwrap();
    println!("reference: {}\n{}", report.reference_id, report.text);
    assert!(!report.text.is_empty());
}
