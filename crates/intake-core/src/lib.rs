//! intake-core
//!
//! Pure domain types, form option tables, and the flat-file column schema.
//! No AWS SDK dependency — this is the shared vocabulary of the intake system.

pub mod error;
pub mod locale;
pub mod models;
pub mod options;
pub mod schema;
