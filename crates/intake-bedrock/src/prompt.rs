//! Instruction assembly for report generation.
//!
//! Builds the fixed system prompt and the per-submission data block sent
//! as the sole user message. The data block embeds every intake field;
//! optional fields that the client left blank are rendered as
//! "not provided" so the model never invents them.

use intake_core::locale::Language;
use intake_core::models::record::IntakeRecord;
use intake_core::options::{
    Activity, Duration, Goal, PainArea, PainDescriptor, PainSide,
};

/// Role description and output-structure directive. The admin summary is
/// written in the working language of the practice (English); the client
/// handout is bilingual; the disclaimer is always appended.
pub const SYSTEM_PROMPT: &str = "\
Role: Massage Philosophy AI Backend System.
Task: Analyze the client intake data in the user message and generate a \
clinical plan for a massage-therapy session.

Output a concise, professional report structured exactly as:
1. [Admin Summary] (for reception/therapist, in English)
   - Risk Factors (e.g. sedentary lifestyle)
   - Recommended Session: 60 or 90 minutes
2. [Client Handout] (bilingual, English and Chinese)
   - Explain why it hurts.
   - Treatment plan.
3. [Disclaimer]
   - State that this is not medical advice and that a physician should be \
consulted for persistent or severe symptoms, in both languages.";

/// Render the intake record as the user data block.
pub fn build_user_message(record: &IntakeRecord) -> String {
    let mut block = String::from("<intake>\n");

    push_field(&mut block, "Name", &record.name);
    push_field(&mut block, "Email", record.email.as_deref().unwrap_or("not provided"));
    push_field(
        &mut block,
        "Insurance",
        record.insurance.as_deref().unwrap_or("not provided"),
    );
    push_field(&mut block, "Pain areas", &join_labels(&record.pain_area, PainArea::label));
    push_field(
        &mut block,
        "Pain side",
        record
            .pain_side
            .map(|s| s.label(Language::En))
            .unwrap_or("not provided"),
    );
    push_field(&mut block, "Pain level", &format!("{}/10", record.pain_level.value()));
    push_field(
        &mut block,
        "Pain feels",
        &join_labels(&record.pain_descriptors, PainDescriptor::label),
    );
    push_field(
        &mut block,
        "History",
        record
            .duration
            .map(|d| d.label(Language::En))
            .unwrap_or("not provided"),
    );
    push_field(
        &mut block,
        "Daily activity",
        record
            .activity
            .map(|a| a.label(Language::En))
            .unwrap_or("not provided"),
    );
    push_field(
        &mut block,
        "Sitting per day",
        record.sitting_hours.label(Language::En),
    );
    push_field(&mut block, "Goals", &join_labels(&record.goals, Goal::label));
    push_field(&mut block, "Notes", record.notes.as_deref().unwrap_or("none"));
    push_field(&mut block, "Preferred language", record.language.token());

    block.push_str("</intake>");
    block
}

fn push_field(block: &mut String, key: &str, value: &str) {
    block.push_str(key);
    block.push_str(": ");
    block.push_str(value);
    block.push('\n');
}

fn join_labels<O: Copy>(options: &[O], label: fn(O, Language) -> &'static str) -> String {
    if options.is_empty() {
        return "not provided".to_string();
    }
    options
        .iter()
        .map(|&o| label(o, Language::En))
        .collect::<Vec<_>>()
        .join(", ")
}
