use tracing::info;
use uuid::Uuid;

use intake_core::models::record::IntakeRecord;
use intake_core::models::report::AssessmentReport;

use crate::endpoint::GenerativeEndpoint;
use crate::error::GenerateError;
use crate::prompt;

/// Generate an assessment report for a finalized intake record.
///
/// Builds the instruction block, performs one endpoint call, and wraps the
/// returned text verbatim — no post-processing and no schema validation of
/// the model's output. On failure the caller's prior state (record,
/// previous report) is untouched.
pub async fn generate_report(
    endpoint: &dyn GenerativeEndpoint,
    record: &IntakeRecord,
) -> Result<AssessmentReport, GenerateError> {
    let transaction_id = Uuid::new_v4();
    info!(
        transaction_id = %transaction_id,
        model = endpoint.model_id(),
        idempotency_key = %record.idempotency_key,
        "starting report generation"
    );

    let user_message = prompt::build_user_message(record);
    let text = endpoint.generate(prompt::SYSTEM_PROMPT, &user_message).await?;

    info!(transaction_id = %transaction_id, "report generation complete");

    Ok(AssessmentReport::new(text, endpoint.model_id().to_string()))
}
