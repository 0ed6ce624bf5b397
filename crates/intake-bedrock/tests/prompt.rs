use intake_bedrock::prompt::{build_user_message, SYSTEM_PROMPT};
use intake_core::models::record::{IntakeDraft, PainLevel};
use intake_core::options::{Activity, Duration, Goal, PainArea, PainDescriptor, PainSide};

fn sample_record() -> intake_core::models::record::IntakeRecord {
    IntakeDraft {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        insurance: "Acme Health".to_string(),
        pain_area: vec![PainArea::Neck, PainArea::LowerBack],
        pain_side: Some(PainSide::Left),
        duration: Some(Duration::OverThreeMonths),
        pain_descriptors: vec![PainDescriptor::Stiff, PainDescriptor::Dull],
        pain_level: PainLevel::new(7),
        activity: Some(Activity::DeskJob),
        goals: vec![Goal::PainRelief],
        notes: "worse in the morning".to_string(),
        consent: true,
        ..IntakeDraft::default()
    }
    .finalize()
    .unwrap()
}

#[test]
fn system_prompt_fixes_role_and_bilingual_structure() {
    assert!(SYSTEM_PROMPT.contains("Massage Philosophy AI Backend System"));
    assert!(SYSTEM_PROMPT.contains("[Admin Summary]"));
    assert!(SYSTEM_PROMPT.contains("[Client Handout]"));
    assert!(SYSTEM_PROMPT.contains("bilingual"));
    assert!(SYSTEM_PROMPT.contains("[Disclaimer]"));
}

#[test]
fn user_message_embeds_every_field() {
    let message = build_user_message(&sample_record());

    assert!(message.starts_with("<intake>"));
    assert!(message.ends_with("</intake>"));
    assert!(message.contains("Name: Jane Doe"));
    assert!(message.contains("Email: jane@example.com"));
    assert!(message.contains("Insurance: Acme Health"));
    assert!(message.contains("Pain areas: Neck, Lower Back"));
    assert!(message.contains("Pain side: Left"));
    assert!(message.contains("Pain level: 7/10"));
    assert!(message.contains("Pain feels: Stiff, Dull"));
    assert!(message.contains("History: >3 months (chronic)"));
    assert!(message.contains("Daily activity: Desk Job"));
    assert!(message.contains("Sitting per day: <2h"));
    assert!(message.contains("Goals: Pain Relief"));
    assert!(message.contains("Notes: worse in the morning"));
    assert!(message.contains("Preferred language: en"));
}

#[test]
fn blank_optionals_are_marked_not_provided() {
    let record = IntakeDraft {
        name: "Jane Doe".to_string(),
        pain_area: vec![PainArea::Neck],
        consent: true,
        ..IntakeDraft::default()
    }
    .finalize()
    .unwrap();

    let message = build_user_message(&record);
    assert!(message.contains("Email: not provided"));
    assert!(message.contains("Pain side: not provided"));
    assert!(message.contains("Goals: not provided"));
    assert!(message.contains("Notes: none"));
}

#[test]
fn identical_records_build_identical_messages() {
    let record = sample_record();
    assert_eq!(build_user_message(&record), build_user_message(&record));
}
