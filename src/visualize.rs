use std::fmt::Write;

use crate::action::Action;
use crate::board::MARK;
use crate::dice::Color;
use crate::state::{EndReason, GameStateView, GameStatus, TurnPhase};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_dice: bool,
    pub show_score: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_dice: true,
            show_score: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished {
            reason: EndReason::PenaltyLimit,
        } => String::from("Finished (penalty limit)"),
        GameStatus::Finished {
            reason: EndReason::RowsLocked,
        } => String::from("Finished (rows locked)"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(out, "Phase: {:?}", state.phase);
    if options.show_dice {
        if state.dice.is_rolled() {
            let [w1, w2] = state.dice.white();
            let colored = Color::ALL
                .iter()
                .map(|color| format!("{}={}", color, state.dice.colored(*color)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "Dice: white {w1} {w2}  |  {colored}");
        } else {
            let _ = writeln!(out, "Dice: not rolled");
        }
    }
    let _ = writeln!(out, "Sheet:");
    for (idx, row) in state.rows.iter().enumerate() {
        let cells = row
            .labels
            .iter()
            .zip(&row.marked)
            .map(|(label, marked)| {
                if *marked {
                    format!("{MARK:>2}")
                } else {
                    format!("{label:>2}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let lock = if row.locked { "  [locked]" } else { "" };
        let score = if options.show_score {
            format!("  = {}", state.score.rows[idx])
        } else {
            String::new()
        };
        let _ = writeln!(out, "  [{idx}] {:<6} {cells}{lock}{score}", row.color.to_string());
    }
    let _ = writeln!(
        out,
        "Penalties: {}/{}",
        state.penalties, state.settings.max_penalties
    );
    if options.show_score {
        let _ = writeln!(
            out,
            "Score: penalty {}  |  total {}",
            state.score.penalty, state.score.total
        );
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    match action {
        Action::Roll => String::from("Roll the dice"),
        Action::Mark { row, column } => {
            let Some(view) = state.rows.get(*row) else {
                return format!("Cross row {row} column {column}");
            };
            let label = view
                .labels
                .get(*column)
                .map(u8::to_string)
                .unwrap_or_else(|| String::from("--"));
            let lock = if *column + 1 == view.labels.len() {
                " (locks the row)"
            } else {
                ""
            };
            let source = match state.phase {
                TurnPhase::WhiteSelection => "white sum",
                TurnPhase::ColorSelection => "colored sum",
                _ => "dice",
            };
            format!("Cross {} {label} using the {source}{lock}", view.color)
        }
        Action::PassWhite => String::from("Pass on the white sum"),
        Action::PassColor => String::from("Pass on the colored sum (penalty)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let mut game = Game::default();
        let text = render_state(&game.state_view());
        assert!(text.contains("Dice: not rolled"));
        assert!(text.contains("Penalties: 0/4"));

        game.roll_with([1, 1, 3, 3, 3, 3]).expect("roll accepted");
        game.mark(2, 10).expect("mark accepted");
        let view = game.state_view();
        let text = render_state(&view);
        assert!(text.contains("white 1 1"));
        assert!(text.contains("[locked]"));

        let desc = describe_action(&view, &Action::Mark { row: 0, column: 2 });
        assert!(desc.contains("Red 4"));
        assert!(describe_action(&view, &Action::PassColor).contains("penalty"));
    }
}
