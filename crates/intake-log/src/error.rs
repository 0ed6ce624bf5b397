use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("log file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("log file is locked by another writer: {path}")]
    Locked { path: PathBuf },

    #[error("log file header does not match the expected schema: {found}")]
    MalformedHeader { found: String },

    #[error("malformed log row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}
