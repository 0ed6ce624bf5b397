use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::locale::Language;
use crate::options::{
    Activity, Duration, Goal, PainArea, PainDescriptor, PainSide, SittingHours,
};

/// Most selections the form accepts for the pain-area multiselect.
pub const MAX_PAIN_AREAS: usize = 3;

/// Pain intensity on the 0–10 scale. Construction clamps, so a value of
/// this type is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
pub struct PainLevel(u8);

impl PainLevel {
    pub fn new(level: u8) -> Self {
        Self(level.min(10))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for PainLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::new(u8::deserialize(deserializer)?))
    }
}

/// Mutable form state, created fresh per session and mutated only by user
/// input. `finalize` is the validation gate that turns it into an
/// [`IntakeRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct IntakeDraft {
    pub name: String,
    pub email: String,
    pub insurance: String,
    pub pain_area: Vec<PainArea>,
    pub pain_side: Option<PainSide>,
    pub duration: Option<Duration>,
    pub pain_descriptors: Vec<PainDescriptor>,
    pub pain_level: PainLevel,
    pub activity: Option<Activity>,
    pub sitting_hours: SittingHours,
    pub goals: Vec<Goal>,
    pub notes: String,
    pub consent: bool,
    pub language: Language,
}

impl Default for IntakeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            insurance: String::new(),
            pain_area: Vec::new(),
            pain_side: None,
            duration: None,
            pain_descriptors: Vec::new(),
            // The form's slider starts in the middle of the scale.
            pain_level: PainLevel::new(5),
            activity: None,
            sitting_hours: SittingHours::Under2,
            goals: Vec::new(),
            notes: String::new(),
            consent: false,
            language: Language::En,
        }
    }
}

impl IntakeDraft {
    /// The submission gate: validates the required fields and returns the
    /// finalized, read-only record. No side effects — a failed draft can
    /// keep being edited.
    pub fn finalize(&self) -> Result<IntakeRecord, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.pain_area.is_empty() {
            return Err(ValidationError::MissingPainArea);
        }
        if self.pain_area.len() > MAX_PAIN_AREAS {
            return Err(ValidationError::TooManyPainAreas {
                max: MAX_PAIN_AREAS,
                got: self.pain_area.len(),
            });
        }
        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }

        Ok(IntakeRecord {
            name: name.to_string(),
            email: non_empty(&self.email),
            insurance: non_empty(&self.insurance),
            pain_area: self.pain_area.clone(),
            pain_side: self.pain_side,
            duration: self.duration,
            pain_descriptors: self.pain_descriptors.clone(),
            pain_level: self.pain_level,
            activity: self.activity,
            sitting_hours: self.sitting_hours,
            goals: self.goals.clone(),
            notes: non_empty(&self.notes),
            consent: true,
            language: self.language,
            idempotency_key: Uuid::new_v4(),
            finalized_at: jiff::Timestamp::now(),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A finalized submission. Produced only by [`IntakeDraft::finalize`], so
/// its invariants (non-empty name, 1–3 pain areas, consent given) hold by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeRecord {
    pub name: String,
    pub email: Option<String>,
    pub insurance: Option<String>,
    pub pain_area: Vec<PainArea>,
    pub pain_side: Option<PainSide>,
    pub duration: Option<Duration>,
    pub pain_descriptors: Vec<PainDescriptor>,
    pub pain_level: PainLevel,
    pub activity: Option<Activity>,
    pub sitting_hours: SittingHours,
    pub goals: Vec<Goal>,
    pub notes: Option<String>,
    pub consent: bool,
    pub language: Language,
    /// Distinguishes duplicate submissions of the same finalized record
    /// from a new submission with identical field values.
    pub idempotency_key: Uuid,
    pub finalized_at: jiff::Timestamp,
}
