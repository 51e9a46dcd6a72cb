//! Menu item 3: overwrite the roster file and echo what was written.

use std::io::{self, BufRead, Write};

use enroll_core::roster;

use super::Flow;
use crate::session::Session;

/// On failure the error is reported and the in-memory roster is kept as-is;
/// the file on disk should not be trusted until a later save succeeds.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<Flow> {
    match roster::save_roster_at(&session.path, &session.roster) {
        Ok(()) => session.console.roster(&session.roster)?,
        Err(err) => {
            tracing::warn!(error = %err, "save failed");
            session
                .console
                .error("Error: There was a problem writing to the file.", Some(&err))?;
        }
    }
    Ok(Flow::Continue)
}
