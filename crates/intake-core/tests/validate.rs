use intake_core::error::ValidationError;
use intake_core::models::record::{IntakeDraft, PainLevel, MAX_PAIN_AREAS};
use intake_core::options::PainArea;

fn valid_draft() -> IntakeDraft {
    IntakeDraft {
        name: "Jane Doe".to_string(),
        pain_area: vec![PainArea::Neck],
        pain_level: PainLevel::new(7),
        consent: true,
        ..IntakeDraft::default()
    }
}

#[test]
fn empty_name_fails() {
    let draft = IntakeDraft {
        name: String::new(),
        ..valid_draft()
    };
    assert_eq!(draft.finalize().unwrap_err(), ValidationError::MissingName);
}

#[test]
fn whitespace_name_fails() {
    let draft = IntakeDraft {
        name: "   ".to_string(),
        ..valid_draft()
    };
    assert_eq!(draft.finalize().unwrap_err(), ValidationError::MissingName);
}

#[test]
fn empty_pain_area_fails() {
    let draft = IntakeDraft {
        pain_area: Vec::new(),
        ..valid_draft()
    };
    assert_eq!(
        draft.finalize().unwrap_err(),
        ValidationError::MissingPainArea
    );
}

#[test]
fn more_than_three_pain_areas_fails() {
    let draft = IntakeDraft {
        pain_area: vec![
            PainArea::Neck,
            PainArea::Shoulders,
            PainArea::UpperBack,
            PainArea::LowerBack,
        ],
        ..valid_draft()
    };
    assert_eq!(
        draft.finalize().unwrap_err(),
        ValidationError::TooManyPainAreas {
            max: MAX_PAIN_AREAS,
            got: 4
        }
    );
}

#[test]
fn missing_consent_fails() {
    let draft = IntakeDraft {
        consent: false,
        ..valid_draft()
    };
    assert_eq!(
        draft.finalize().unwrap_err(),
        ValidationError::ConsentRequired
    );
}

#[test]
fn valid_draft_finalizes() {
    let record = valid_draft().finalize().unwrap();
    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.pain_area, vec![PainArea::Neck]);
    assert_eq!(record.pain_level.value(), 7);
    assert!(record.consent);
}

#[test]
fn finalize_trims_and_drops_empty_optionals() {
    let draft = IntakeDraft {
        name: "  Jane Doe  ".to_string(),
        email: "  ".to_string(),
        notes: "follow-up in two weeks".to_string(),
        ..valid_draft()
    };
    let record = draft.finalize().unwrap();
    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.email, None);
    assert_eq!(record.notes.as_deref(), Some("follow-up in two weeks"));
}

#[test]
fn distinct_finalizations_get_distinct_idempotency_keys() {
    let draft = valid_draft();
    let a = draft.finalize().unwrap();
    let b = draft.finalize().unwrap();
    assert_ne!(a.idempotency_key, b.idempotency_key);
}

#[test]
fn pain_level_clamps_to_scale() {
    assert_eq!(PainLevel::new(14).value(), 10);
    assert_eq!(PainLevel::new(0).value(), 0);
}
