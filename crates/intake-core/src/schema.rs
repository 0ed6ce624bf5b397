//! Column layout of the append-only intake log file.

/// Column names, in file order.
pub mod column {
    pub const TIMESTAMP: &str = "Timestamp";
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const INSURANCE: &str = "Insurance";
    pub const PAIN_AREA: &str = "Pain_Area";
    pub const PAIN_SIDE: &str = "Pain_Side";
    pub const PAIN_LEVEL: &str = "Pain_Level";
    pub const DURATION: &str = "Duration";
    pub const PAIN_TYPE: &str = "Pain_Type";
    pub const JOB: &str = "Job";
    pub const SITTING_HOURS: &str = "Sitting_Hours";
    pub const GOALS: &str = "Goals";
    pub const NOTES: &str = "Notes";
    pub const AI_REPORT: &str = "AI_Report";
}

/// The header row, in the fixed column order. The log file is append-only;
/// this order never changes in place.
pub const COLUMNS: [&str; 14] = [
    column::TIMESTAMP,
    column::NAME,
    column::EMAIL,
    column::INSURANCE,
    column::PAIN_AREA,
    column::PAIN_SIDE,
    column::PAIN_LEVEL,
    column::DURATION,
    column::PAIN_TYPE,
    column::JOB,
    column::SITTING_HOURS,
    column::GOALS,
    column::NOTES,
    column::AI_REPORT,
];
