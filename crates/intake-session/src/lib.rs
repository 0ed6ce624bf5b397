//! intake-session
//!
//! The per-session context object and the submit pipeline: validate the
//! draft, call the generation endpoint, show the report, and best-effort
//! append to the flat-file log. One session serves one client at the
//! front desk; sessions share nothing but the log file.

pub mod config;
pub mod events;
pub mod state;
pub mod submit;
