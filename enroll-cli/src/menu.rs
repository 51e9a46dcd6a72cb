//! The menu loop: print the menu, read a choice, dispatch, repeat.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::commands::{self, Flow};
use crate::session::Session;

/// A recognised menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
}

/// Shown for any input other than the four menu tokens.
pub const INVALID_CHOICE: &str = "Please, choose only 1, 2, 3, or 4";

impl FromStr for MenuChoice {
    type Err = String;

    /// Exact match only: `prompt` already strips the line terminator, and
    /// padded tokens such as `" 2 "` are rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Register),
            "2" => Ok(Self::Show),
            "3" => Ok(Self::Save),
            "4" => Ok(Self::Exit),
            _ => Err(INVALID_CHOICE.to_owned()),
        }
    }
}

impl MenuChoice {
    fn dispatch<R: BufRead, W: Write>(self, session: &mut Session<R, W>) -> Result<Flow> {
        let flow = match self {
            MenuChoice::Register => commands::register::run(session),
            MenuChoice::Show => commands::show::run(session),
            MenuChoice::Save => commands::save::run(session),
            MenuChoice::Exit => Ok(Flow::Exit),
        };
        flow.with_context(|| format!("console I/O failed during {self:?}"))
    }
}

/// Run until the user picks Exit or input ends. Unsaved changes are dropped.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        session.console.menu()?;
        let Some(input) = session.console.prompt("Enter your menu choice number: ")? else {
            tracing::debug!("input closed, leaving menu loop");
            break;
        };
        match input.parse::<MenuChoice>() {
            Ok(choice) => {
                if choice.dispatch(session)? == Flow::Exit {
                    break;
                }
            }
            Err(message) => {
                tracing::debug!(%input, "invalid menu choice");
                session.console.error(&message, None)?;
            }
        }
    }
    session.console.line("Program Ended")?;
    Ok(())
}
