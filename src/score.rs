//! Scoring utilities for Qwixx score sheets.
//!
//! Scoring rule:
//!   row points    = k * (k + 1) / 2 where k counts crossed boxes (+1 for a locked row)
//!   penalty total = -5 * penalties taken
//!   grand total   = sum of row points + penalty total
//! Totals may go negative; formatting is left to the caller.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::dice::{NUM_ROWS, PENALTY_POINTS};

/// Points earned by a row with `marks` crossed boxes (lock bonus included).
#[inline]
pub fn row_points(marks: usize) -> i32 {
    let marks = marks as i32;
    marks * (marks + 1) / 2
}

/// Points deducted for the given number of penalties, as a non-positive number.
#[inline]
pub fn penalty_points(penalties: u8) -> i32 {
    -(i32::from(penalties) * PENALTY_POINTS)
}

/// Breakdown of the current score.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreSheet {
    pub rows: [i32; NUM_ROWS],
    pub penalty: i32,
    pub total: i32,
}

impl ScoreSheet {
    pub(crate) fn from_board(board: &Board, penalties: u8) -> Self {
        let rows = board.rows().each_ref().map(|row| row_points(row.scoring_marks()));
        let penalty = penalty_points(penalties);
        Self {
            rows,
            penalty,
            total: rows.iter().sum::<i32>() + penalty,
        }
    }

    /// Row scores, penalty total and grand total, in that order.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .chain([&self.penalty, &self.total])
            .map(i32::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::dice::DEFAULT_NUM_COLUMNS;

    #[test]
    fn test_row_points_match_payout_table() {
        let table = [1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78];
        for (idx, expected) in table.iter().enumerate() {
            assert_eq!(row_points(idx + 1), *expected);
        }
        assert_eq!(row_points(0), 0);
    }

    #[test]
    fn test_penalty_never_prints_negative_zero() {
        assert_eq!(penalty_points(0).to_string(), "0");
        assert_eq!(penalty_points(4), -20);
    }

    #[test]
    fn test_sheet_combines_rows_and_penalties() {
        let mut board = Board::new(DEFAULT_NUM_COLUMNS);
        board.row_mut(0).unwrap().mark(0);
        board.row_mut(0).unwrap().mark(1);
        board.row_mut(3).unwrap().mark(5);
        let sheet = ScoreSheet::from_board(&board, 1);
        assert_eq!(sheet.rows, [3, 0, 0, 1]);
        assert_eq!(sheet.penalty, -5);
        assert_eq!(sheet.total, -1);
        assert_eq!(sheet.to_strings(), vec!["3", "0", "0", "1", "-5", "-1"]);
    }

    proptest! {
        #[test]
        fn row_points_grow_by_mark_count(marks in 0usize..13) {
            prop_assert_eq!(row_points(marks + 1) - row_points(marks), marks as i32 + 1);
        }
    }
}
