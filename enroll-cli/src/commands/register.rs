//! Menu item 1: register a student for a course.

use std::io::{self, BufRead, Write};

use enroll_core::StudentRecord;

use super::Flow;
use crate::session::Session;

/// Prompt for the three fields and append the record if it validates.
///
/// Invalid input is reported and discarded; the roster is left unchanged.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<Flow> {
    let console = &mut session.console;
    let first = console.prompt("Enter the student's first name: ")?.unwrap_or_default();
    let last = console.prompt("Enter the student's last name: ")?.unwrap_or_default();
    let course = console.prompt("Please enter the name of the course: ")?.unwrap_or_default();

    match StudentRecord::new(&first, &last, &course) {
        Ok(record) => {
            console.line(&format!(
                "You have registered {} for {}.",
                record.full_name(),
                record.course_name()
            ))?;
            tracing::debug!(student = %record.full_name(), course = record.course_name(), "registered");
            session.roster.push(record);
        }
        Err(err) => {
            tracing::warn!(error = %err, "registration rejected");
            console.error("One of the values was invalid.", Some(&err))?;
        }
    }
    Ok(Flow::Continue)
}
