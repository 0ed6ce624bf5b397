pub mod log_entry;
pub mod record;
pub mod report;
