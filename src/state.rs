use serde::{Deserialize, Serialize};

use crate::dice::{
    Color, DEFAULT_NUM_COLUMNS, Dice, LOCK_THRESHOLD, MAX_PENALTIES, MIN_COLUMN, NUM_ROWS,
    NUM_WHITE_DICE, PENALTY_POINTS,
};
use crate::error::GameError;
use crate::score::ScoreSheet;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_rows: usize,
    pub num_columns: usize,
    pub min_column: u8,
    pub num_white_dice: usize,
    pub max_penalties: u8,
    pub penalty_points: i32,
    /// `Some(n)` when the lock box requires `n` other crosses in its row.
    pub lock_threshold: Option<usize>,
}

impl GameSettings {
    /// The standard single-player sheet with the lock threshold disabled.
    pub fn standard() -> Self {
        Self {
            num_rows: NUM_ROWS,
            num_columns: DEFAULT_NUM_COLUMNS,
            min_column: MIN_COLUMN,
            num_white_dice: NUM_WHITE_DICE,
            max_penalties: MAX_PENALTIES,
            penalty_points: PENALTY_POINTS,
            lock_threshold: None,
        }
    }

    pub fn new(num_columns: usize, enforce_lock_threshold: bool) -> Result<Self, GameError> {
        // Labels past 12 could never be rolled with two dice.
        if !(2..=11).contains(&num_columns) {
            return Err(GameError::InvalidConfiguration(
                "columns must be between 2 and 11",
            ));
        }
        Ok(Self {
            num_columns,
            lock_threshold: enforce_lock_threshold.then_some(LOCK_THRESHOLD),
            ..Self::standard()
        })
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EndReason {
    PenaltyLimit,
    RowsLocked,
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { reason: EndReason },
}

/// Current phase of the active turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingRoll,
    WhiteSelection,
    ColorSelection,
    GameOver,
}

/// Public information regarding one row of the score sheet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowView {
    pub color: Color,
    pub labels: Vec<u8>,
    pub marked: Vec<bool>,
    pub locked: bool,
}

impl RowView {
    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|marked| **marked).count()
    }

    pub fn last_marked(&self) -> Option<usize> {
        self.marked.iter().rposition(|marked| *marked)
    }
}

/// Owned snapshot of a game, safe to hand to presentation code and bots.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub dice: Dice,
    pub rows: Vec<RowView>,
    pub penalties: u8,
    pub score: ScoreSheet,
}
