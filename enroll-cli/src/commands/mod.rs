//! Menu actions. Each takes the session and reports what the loop does next.

pub mod register;
pub mod save;
pub mod show;

/// What the menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
