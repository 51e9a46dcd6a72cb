//! Enroll — interactive course registration.
//!
//! # Usage
//!
//! ```text
//! enroll [--file <PATH>]
//! ```
//!
//! Loads the roster from `--file` (default `Enrollments.json`), then loops
//! over a four-item menu until the user picks Exit. Exit does not save.

mod commands;
mod console;
mod menu;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use enroll_core::roster::DEFAULT_FILE_NAME;

use console::Console;
use session::Session;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "enroll",
    version,
    about = "Register students for courses and keep the roster in a JSON file",
    long_about = None,
)]
struct Cli {
    /// Roster file to load at startup and write on Save.
    #[arg(long, short = 'f', value_name = "PATH", default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::open(cli.file, console)?;
    menu::run(&mut session)
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_defaults_to_enrollments_json() {
        let cli = Cli::try_parse_from(["enroll"]).expect("parse");
        assert_eq!(cli.file, PathBuf::from("Enrollments.json"));
    }

    #[test]
    fn file_flag_overrides_default() {
        let cli = Cli::try_parse_from(["enroll", "--file", "/tmp/x.json"]).expect("parse");
        assert_eq!(cli.file, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["enroll", "extra"]).is_err());
    }
}
