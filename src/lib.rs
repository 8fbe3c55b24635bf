//! Qwixx rules engine for a single player: dice, score sheet, penalties and
//! end-of-game detection, plus a few bots for driving it.

pub mod action;
mod board;
pub mod bot;
pub mod bots;
pub mod dice;
pub mod error;
pub mod game;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, StatusCode};
pub use crate::board::MARK;
pub use crate::bot::Bot;
pub use crate::bots::{GreedyBot, HumanBot, RandomBot, create_bot_from_spec, label_for_spec};
pub use crate::dice::{Color, Dice};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::score::{ScoreSheet, row_points};
pub use crate::state::{EndReason, GameSettings, GameStateView, GameStatus, RowView, TurnPhase};
pub use crate::visualize::{VisualOptions, describe_action, render_state};
