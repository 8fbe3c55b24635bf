use std::fmt;

use serde::{Deserialize, Serialize};

/// Command a player (or bot) can issue.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Roll all six dice at random.
    Roll,
    /// Cross out the box at `column` (a position, not a label) in `row`.
    Mark { row: usize, column: usize },
    /// Decline to use the white sum.
    PassWhite,
    /// Decline to use a colored sum; costs a penalty.
    PassColor,
}

impl Action {
    /// Returns the `(row, column)` pair if the action is a mark.
    pub fn target(&self) -> Option<(usize, usize)> {
        match self {
            Action::Mark { row, column } => Some((*row, *column)),
            _ => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Action::PassWhite | Action::PassColor)
    }
}

/// Outcome of an attempt to cross out a box.
///
/// Only [`StatusCode::Valid`] changes the sheet; every other code leaves the
/// game untouched and exists so the caller can explain the refusal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// The box was crossed out.
    Valid,
    /// The box label is not a sum the dice allow in this phase.
    DiceDontMatch,
    /// A box to the right has already been crossed out.
    Excluded,
    /// The lock box needs five other crosses in the row first.
    Need5,
    /// The dice have not been rolled this turn.
    MustRoll,
}

impl StatusCode {
    #[inline]
    pub fn is_valid(self) -> bool {
        matches!(self, StatusCode::Valid)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusCode::Valid => "Box crossed out.",
            StatusCode::DiceDontMatch => "The dice don't add up to that number.",
            StatusCode::Excluded => "A box to the right has already been crossed out.",
            StatusCode::Need5 => "Cross out at least five boxes in this row before locking it.",
            StatusCode::MustRoll => "Roll the dice first.",
        };
        f.write_str(text)
    }
}
