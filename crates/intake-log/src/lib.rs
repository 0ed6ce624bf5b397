//! intake-log
//!
//! The append-only flat-file submission log. One row per completed
//! submission; the file is created with a header row on first write and
//! never rewritten in place.

pub mod appender;
pub mod encode;
pub mod error;
pub mod reader;

pub use appender::append;
pub use reader::read_entries;
