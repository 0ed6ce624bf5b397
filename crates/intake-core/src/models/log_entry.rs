use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::record::{IntakeRecord, PainLevel};
use crate::models::report::AssessmentReport;
use crate::options::{
    self, Activity, Duration, Goal, PainArea, PainDescriptor, PainSide, SittingHours,
};
use crate::schema::COLUMNS;

/// One persisted row of the append-only intake log: the record fields plus
/// the submission timestamp and the generated report text.
///
/// The timestamp is kept as the already-formatted local-time string
/// (`%Y-%m-%d %H:%M:%S`) — the file format carries no zone offset, so a
/// parsed-back value would be lossy anyway, and keeping the string makes
/// the file round-trip exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeLogEntry {
    pub timestamp: String,
    pub name: String,
    pub email: Option<String>,
    pub insurance: Option<String>,
    pub pain_area: Vec<PainArea>,
    pub pain_side: Option<PainSide>,
    pub pain_level: PainLevel,
    pub duration: Option<Duration>,
    pub pain_descriptors: Vec<PainDescriptor>,
    pub activity: Option<Activity>,
    pub sitting_hours: SittingHours,
    pub goals: Vec<Goal>,
    pub notes: Option<String>,
    pub report_text: String,
}

impl IntakeLogEntry {
    /// Build the row for a completed submission, stamped with the current
    /// local time at seconds precision.
    pub fn from_submission(record: &IntakeRecord, report: &AssessmentReport) -> Self {
        Self {
            timestamp: jiff::Zoned::now()
                .strftime("%Y-%m-%d %H:%M:%S")
                .to_string(),
            name: record.name.clone(),
            email: record.email.clone(),
            insurance: record.insurance.clone(),
            pain_area: record.pain_area.clone(),
            pain_side: record.pain_side,
            pain_level: record.pain_level,
            duration: record.duration,
            pain_descriptors: record.pain_descriptors.clone(),
            activity: record.activity,
            sitting_hours: record.sitting_hours,
            goals: record.goals.clone(),
            notes: record.notes.clone(),
            report_text: report.text.clone(),
        }
    }

    /// Field values in the fixed column order of [`COLUMNS`]. Multi-valued
    /// fields are comma-joined machine tokens; absent optional fields are
    /// empty strings.
    pub fn to_fields(&self) -> [String; COLUMNS.len()] {
        [
            self.timestamp.clone(),
            self.name.clone(),
            self.email.clone().unwrap_or_default(),
            self.insurance.clone().unwrap_or_default(),
            options::join_tokens(&self.pain_area, PainArea::token),
            self.pain_side.map(PainSide::token).unwrap_or_default().to_string(),
            self.pain_level.value().to_string(),
            self.duration.map(Duration::token).unwrap_or_default().to_string(),
            options::join_tokens(&self.pain_descriptors, PainDescriptor::token),
            self.activity.map(Activity::token).unwrap_or_default().to_string(),
            self.sitting_hours.token().to_string(),
            options::join_tokens(&self.goals, Goal::token),
            self.notes.clone().unwrap_or_default(),
            self.report_text.clone(),
        ]
    }

    /// Rebuild an entry from a decoded row. The caller has already checked
    /// the field count against [`COLUMNS`].
    pub fn from_fields(fields: &[String; COLUMNS.len()]) -> Result<Self, CoreError> {
        let [timestamp, name, email, insurance, pain_area, pain_side, pain_level, duration, pain_type, job, sitting_hours, goals, notes, report_text] =
            fields;

        Ok(Self {
            timestamp: timestamp.clone(),
            name: name.clone(),
            email: optional(email),
            insurance: optional(insurance),
            pain_area: options::split_tokens(pain_area, PainArea::parse_token)?,
            pain_side: parse_optional(pain_side, PainSide::parse_token)?,
            pain_level: parse_pain_level(pain_level)?,
            duration: parse_optional(duration, Duration::parse_token)?,
            pain_descriptors: options::split_tokens(pain_type, PainDescriptor::parse_token)?,
            activity: parse_optional(job, Activity::parse_token)?,
            sitting_hours: SittingHours::parse_token(sitting_hours)?,
            goals: options::split_tokens(goals, Goal::parse_token)?,
            notes: optional(notes),
            report_text: report_text.clone(),
        })
    }
}

fn optional(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

fn parse_optional<O>(
    field: &str,
    parse: fn(&str) -> Result<O, CoreError>,
) -> Result<Option<O>, CoreError> {
    if field.is_empty() {
        Ok(None)
    } else {
        parse(field).map(Some)
    }
}

fn parse_pain_level(field: &str) -> Result<PainLevel, CoreError> {
    let value: u8 = field
        .parse()
        .map_err(|_| CoreError::UnknownOption(format!("Pain_Level: {field}")))?;
    Ok(PainLevel::new(value))
}
