//! JSON roster file.
//!
//! # File format
//!
//! ```text
//! [
//!   { "FirstName": "Ann", "LastName": "Lee", "CourseName": "Calculus" },
//!   ...
//! ]
//! ```
//!
//! # API pattern
//!
//! - [`load_roster_at`] — strict: any failure is an error, except a missing
//!   file which is an empty roster.
//! - [`load_roster_partial_at`] — never fails; returns the records that were
//!   valid up to the first failure plus the error, for callers that must keep
//!   running.
//! - [`save_roster_at`] — whole-file overwrite via a `.tmp` sibling + rename.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{write_err, RosterError};
use crate::types::{Roster, StudentEntry, StudentRecord};

/// File used when no path is configured, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<dir>/<file>.tmp` — pure, no I/O.
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_owned());
    path.with_file_name(format!("{name}.tmp"))
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Result of a best-effort load.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Records validated before the first failure (all of them on success).
    pub roster: Roster,
    /// Why loading stopped early, if it did.
    pub error: Option<RosterError>,
}

/// Read the array elements, undecoded. `Ok(None)` means the file does not exist.
fn read_elements(path: &Path) -> Result<Option<Vec<Value>>, RosterError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "roster file not found, starting empty");
            return Ok(None);
        }
        Err(source) => {
            return Err(RosterError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| RosterError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load every record from `path`.
///
/// Returns an empty roster if the file does not exist,
/// `RosterError::Read` / `RosterError::Parse` if it cannot be read or decoded,
/// and `RosterError::MalformedRecord` / `RosterError::InvalidRecord` for the
/// first element that is not a student object or fails validation.
pub fn load_roster_at(path: &Path) -> Result<Roster, RosterError> {
    let outcome = load_roster_partial_at(path);
    match outcome.error {
        Some(err) => Err(err),
        None => Ok(outcome.roster),
    }
}

/// Best-effort load: never fails.
///
/// Read and parse failures produce an empty roster. The first element that is
/// malformed or fails validation stops the load; the records before it are
/// kept.
pub fn load_roster_partial_at(path: &Path) -> LoadOutcome {
    let elements = match read_elements(path) {
        Ok(Some(elements)) => elements,
        Ok(None) => {
            return LoadOutcome {
                roster: Roster::new(),
                error: None,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "roster load failed");
            return LoadOutcome {
                roster: Roster::new(),
                error: Some(err),
            };
        }
    };

    let mut roster = Roster::new();
    for (index, element) in elements.into_iter().enumerate() {
        match decode_record(path, index, element) {
            Ok(record) => roster.push(record),
            Err(err) => {
                tracing::warn!(error = %err, kept = roster.len(), "roster load stopped early");
                return LoadOutcome {
                    roster,
                    error: Some(err),
                };
            }
        }
    }

    tracing::debug!(path = %path.display(), count = roster.len(), "roster loaded");
    LoadOutcome {
        roster,
        error: None,
    }
}

fn decode_record(path: &Path, index: usize, element: Value) -> Result<StudentRecord, RosterError> {
    let entry: StudentEntry =
        serde_json::from_value(element).map_err(|source| RosterError::MalformedRecord {
            path: path.to_path_buf(),
            index,
            source,
        })?;
    StudentRecord::try_from(entry).map_err(|source| RosterError::InvalidRecord {
        path: path.to_path_buf(),
        index,
        source,
    })
}

// ---------------------------------------------------------------------------
// 3. Save
// ---------------------------------------------------------------------------

/// Overwrite `path` with every record in `roster`.
///
/// Write flow: serialize → `<file>.tmp` sibling → `rename`. The sibling keeps
/// the rename on the same filesystem. A stale `.tmp` is removed on failure.
pub fn save_roster_at(path: &Path, roster: &Roster) -> Result<(), RosterError> {
    let json = serde_json::to_vec_pretty(roster)?;

    let tmp = tmp_path_for(path);
    if let Err(e) = std::fs::write(&tmp, &json) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(&tmp, e));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(path, e));
    }

    tracing::debug!(path = %path.display(), count = roster.len(), "roster saved");
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
