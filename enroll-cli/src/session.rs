//! Application state passed to every menu action.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use enroll_core::{roster, Roster, RosterError};

use crate::console::Console;

pub struct Session<R, W> {
    pub roster: Roster,
    pub path: PathBuf,
    pub console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the roster from `path`, reporting (not propagating) load failures.
    ///
    /// A missing file starts an empty roster. Only console I/O errors are
    /// returned.
    pub fn open(path: PathBuf, mut console: Console<R, W>) -> io::Result<Self> {
        let outcome = roster::load_roster_partial_at(&path);
        if let Some(err) = &outcome.error {
            console.error(&load_failure_message(err, outcome.roster.len()), Some(err))?;
        }
        tracing::debug!(path = %path.display(), records = outcome.roster.len(), "session opened");
        Ok(Self {
            roster: outcome.roster,
            path,
            console,
        })
    }
}

fn load_failure_message(err: &RosterError, kept: usize) -> String {
    if err.is_unreadable() {
        "Error reading from file.".to_owned()
    } else {
        format!("Error: the file contains an invalid record; kept {kept} earlier record(s).")
    }
}
