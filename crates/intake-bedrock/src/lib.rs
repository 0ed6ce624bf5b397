//! intake-bedrock
//!
//! Prompt assembly and model invocation for report generation.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod generate;
pub mod prompt;
