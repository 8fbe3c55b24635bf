use crate::action::Action;
use crate::bot::Bot;
use crate::state::{GameStateView, TurnPhase};

/// Rule-based bot that crosses boxes when doing so wastes little of the row.
///
/// In plain English:
/// - Every box skipped over is lost for the rest of the game, so marks that skip
///   few boxes score best.
/// - Crossing a lock box is worth a lot: it ends the row with a bonus cross.
/// - Passing on the white sum is free, so it is preferred over any wasteful mark.
/// - Passing on the colored sums costs five points, so the bot tolerates more
///   skipped boxes before taking the penalty.
pub struct GreedyBot;

impl GreedyBot {
    pub fn new() -> Self {
        Self
    }

    /// Boxes in the row that become unreachable if `column` is crossed.
    fn skipped(state: &GameStateView, row: usize, column: usize) -> usize {
        state
            .rows
            .get(row)
            .map(|view| match view.last_marked() {
                Some(last) => column.saturating_sub(last + 1),
                None => column,
            })
            .unwrap_or(usize::MAX / 2)
    }

    fn score_mark(state: &GameStateView, row: usize, column: usize) -> i64 {
        let skipped = Self::skipped(state, row, column) as i64;
        // Crossing the final box locks the row.
        let lock_bonus = state
            .rows
            .get(row)
            .filter(|view| column + 1 == view.marked.len())
            .map(|view| 40 + view.marked_count() as i64 * 10)
            .unwrap_or(0);
        // Longer rows pay out more per extra cross.
        let progress = state
            .rows
            .get(row)
            .map(|view| view.marked_count() as i64 * 5)
            .unwrap_or(0);
        100 - skipped * 30 + lock_bonus + progress
    }

    fn score_action(state: &GameStateView, action: &Action) -> i64 {
        match action {
            Action::Mark { row, column } => Self::score_mark(state, *row, *column),
            Action::PassWhite => 40,
            // A penalty is worth accepting only when every mark wastes most of a row.
            Action::PassColor => -60,
            Action::Roll => 0,
        }
    }
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for GreedyBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        assert!(
            !legal_actions.is_empty(),
            "greedy bot requires at least one legal action"
        );
        if state.phase == TurnPhase::AwaitingRoll {
            return Action::Roll;
        }
        legal_actions
            .iter()
            .max_by_key(|action| Self::score_action(state, action))
            .cloned()
            .unwrap_or_else(|| legal_actions[0].clone())
    }
}
