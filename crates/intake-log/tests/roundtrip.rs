use intake_core::models::log_entry::IntakeLogEntry;
use intake_core::models::record::{IntakeDraft, PainLevel};
use intake_core::models::report::AssessmentReport;
use intake_core::options::{Activity, Duration, Goal, PainArea, PainDescriptor, PainSide};
use intake_log::{append, read_entries};

fn sample_entry(report_text: &str) -> IntakeLogEntry {
    let record = IntakeDraft {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        insurance: "Acme Health".to_string(),
        pain_area: vec![PainArea::Neck, PainArea::LowerBack],
        pain_side: Some(PainSide::Both),
        duration: Some(Duration::OneMonth),
        pain_descriptors: vec![PainDescriptor::Sharp, PainDescriptor::Numb],
        pain_level: PainLevel::new(7),
        activity: Some(Activity::DeskJob),
        goals: vec![Goal::PainRelief, Goal::Sleep],
        notes: "worse after long drives".to_string(),
        consent: true,
        ..IntakeDraft::default()
    }
    .finalize()
    .unwrap();

    let report = AssessmentReport::new(report_text.to_string(), "stub".to_string());
    IntakeLogEntry::from_submission(&record, &report)
}

#[test]
fn first_append_creates_file_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake_log.csv");

    append(&path, &sample_entry("REPORT_X")).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(
        header,
        "Timestamp,Name,Email,Insurance,Pain_Area,Pain_Side,Pain_Level,Duration,\
Pain_Type,Job,Sitting_Hours,Goals,Notes,AI_Report"
    );
}

#[test]
fn appended_entry_reads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake_log.csv");

    let entry = sample_entry("1. [Admin Summary]\nRisk: sedentary");
    append(&path, &entry).unwrap();

    let read = read_entries(&path).unwrap();
    assert_eq!(read, vec![entry]);
}

#[test]
fn multi_valued_fields_recombine_under_comma_split() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake_log.csv");

    let entry = sample_entry("REPORT_X");
    append(&path, &entry).unwrap();

    let read = read_entries(&path).unwrap();
    assert_eq!(read[0].pain_area, vec![PainArea::Neck, PainArea::LowerBack]);
    assert_eq!(read[0].goals, vec![Goal::PainRelief, Goal::Sleep]);
}

#[test]
fn report_text_with_quotes_commas_and_newlines_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake_log.csv");

    let entry = sample_entry("Plan: \"deep tissue\", 60min\nThen reassess.");
    append(&path, &entry).unwrap();

    let read = read_entries(&path).unwrap();
    assert_eq!(
        read[0].report_text,
        "Plan: \"deep tissue\", 60min\nThen reassess."
    );
}

#[test]
fn second_append_does_not_duplicate_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake_log.csv");

    append(&path, &sample_entry("first")).unwrap();
    append(&path, &sample_entry("second")).unwrap();

    let read = read_entries(&path).unwrap();
    assert_eq!(read.len(), 2);
    assert_eq!(read[0].report_text, "first");
    assert_eq!(read[1].report_text, "second");
}

#[test]
fn append_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("2026").join("intake_log.csv");

    append(&path, &sample_entry("REPORT_X")).unwrap();
    assert_eq!(read_entries(&path).unwrap().len(), 1);
}

#[test]
fn missing_file_reads_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(matches!(
        read_entries(&path),
        Err(intake_log::error::LogError::Io(_))
    ));
}

#[test]
fn wrong_header_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake_log.csv");
    std::fs::write(&path, "Name,Email\n").unwrap();

    assert!(matches!(
        read_entries(&path),
        Err(intake_log::error::LogError::MalformedHeader { .. })
    ));
}

#[test]
fn stale_lock_file_blocks_append() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake_log.csv");
    std::fs::write(dir.path().join("intake_log.csv.lock"), "").unwrap();

    assert!(matches!(
        append(&path, &sample_entry("REPORT_X")),
        Err(intake_log::error::LogError::Locked { .. })
    ));
}
