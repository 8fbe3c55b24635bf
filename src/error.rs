use thiserror::Error;

use crate::state::TurnPhase;

/// Errors raised when a command is issued that the current state does not permit.
///
/// These are caller bugs: every command has a matching `can_*` predicate that
/// must be checked first. Ordinary illegal moves are reported through
/// [`StatusCode`](crate::action::StatusCode) instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("command not accepted during {phase:?}")]
    IllegalPhase { phase: TurnPhase },
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of malformed command arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("row index {0} is out of range")]
    RowIndex(usize),
    #[error("column index {0} is out of range")]
    ColumnIndex(usize),
    #[error("die value {0} is outside 1..=6")]
    DieOutOfRange(u8),
}
