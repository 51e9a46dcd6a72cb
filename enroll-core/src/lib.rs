//! Enroll core library — student records, validation, roster persistence, errors.
//!
//! Public API surface:
//! - [`types`] — [`StudentRecord`] and [`Roster`]
//! - [`error`] — [`ValidationError`] and [`RosterError`]
//! - [`roster`] — load / save against a JSON file

pub mod error;
pub mod roster;
pub mod types;

pub use error::{RosterError, ValidationError};
pub use roster::LoadOutcome;
pub use types::{NameField, Roster, StudentRecord};
