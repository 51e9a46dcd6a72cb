//! Error types for enroll-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::NameField;

/// A value was rejected while building or mutating a [`crate::StudentRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A name was empty or contained something other than letters.
    #[error("{field} must only contain letters (got {value:?})")]
    InvalidName { field: NameField, value: String },

    /// The course name was empty after trimming.
    #[error("course name cannot be empty")]
    EmptyCourse,
}

/// All errors that can arise from roster load/save operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file exists but could not be read.
    #[error("failed to read roster at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array.
    #[error("failed to parse roster at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// One element is not an object with the three string fields.
    #[error("malformed record #{index} in {path}: {source}")]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// One element parsed but failed record validation.
    #[error("invalid record #{index} in {path}: {source}")]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The roster file (or its temporary sibling) could not be written.
    #[error("failed to write roster to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RosterError {
    /// `true` when the file could not be read or decoded at all, as opposed
    /// to a JSON array holding a bad element, or a failed save.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, RosterError::Read { .. } | RosterError::Parse { .. })
    }
}

pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> RosterError {
    RosterError::Write {
        path: path.into(),
        source,
    }
}
