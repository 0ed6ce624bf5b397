//! Concurrent-safe append to the flat-file log.
//!
//! Sessions are independent except for this file, so the append takes an
//! exclusive advisory lock: a `<path>.lock` sentinel created with
//! `create_new`, which is atomic on every platform we run on. The row
//! itself goes out in a single `write_all` on a file opened in append
//! mode.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use intake_core::models::log_entry::IntakeLogEntry;
use intake_core::schema::COLUMNS;

use crate::encode::encode_row;
use crate::error::LogError;

const LOCK_RETRIES: u32 = 50;
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(10);

/// Append one submission row, creating the file with its header row first
/// if it does not exist yet.
pub fn append(path: &Path, entry: &IntakeLogEntry) -> Result<(), LogError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let _lock = LockGuard::acquire(path)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut payload = String::new();
    if file.metadata()?.len() == 0 {
        payload.push_str(&encode_row(
            &COLUMNS.map(|c| c.to_string()),
        ));
    }
    payload.push_str(&encode_row(&entry.to_fields()));

    file.write_all(payload.as_bytes())?;
    file.flush()?;

    info!(path = %path.display(), client = %entry.name, "intake log row appended");

    Ok(())
}

/// Exclusive advisory lock on the log file, held for the duration of one
/// append. Removed on drop; a stale sentinel from a crashed writer shows
/// up as `LogError::Locked` after the retry budget.
struct LockGuard {
    lock_path: PathBuf,
}

impl LockGuard {
    fn acquire(path: &Path) -> Result<Self, LogError> {
        let mut lock_path = path.as_os_str().to_owned();
        lock_path.push(".lock");
        let lock_path = PathBuf::from(lock_path);

        for _ in 0..LOCK_RETRIES {
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&lock_path)
            {
                Ok(_) => return Ok(Self { lock_path }),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    std::thread::sleep(LOCK_RETRY_DELAY);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(LogError::Locked { path: lock_path })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}
