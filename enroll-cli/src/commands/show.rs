//! Menu item 2: print the current roster.

use std::io::{self, BufRead, Write};

use super::Flow;
use crate::session::Session;

pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> io::Result<Flow> {
    session.console.roster(&session.roster)?;
    Ok(Flow::Continue)
}
