use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::action::{Action, StatusCode};
use crate::board::Board;
use crate::dice::{Color, DEFAULT_NUM_COLUMNS, Dice, LOCKS_TO_END, NUM_DICE};
use crate::error::{GameError, InvalidAction};
use crate::score::ScoreSheet;
use crate::state::{EndReason, GameSettings, GameStateView, GameStatus, RowView, TurnPhase};

const DEFAULT_SEED: u64 = 0x5EED_D1CE_5EED_D1CE;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_columns: usize,
    pub seed: u64,
    /// Require five crosses in a row before its lock box may be crossed.
    pub enforce_lock_threshold: bool,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            num_columns: DEFAULT_NUM_COLUMNS,
            seed,
            enforce_lock_threshold: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Builder for games with a non-default seed or sheet layout.
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Override the number of numbered boxes per row (11 in the standard game).
    pub fn with_num_columns(mut self, num_columns: usize) -> Self {
        self.config.num_columns = num_columns;
        self
    }

    pub fn with_lock_threshold(mut self, enforce: bool) -> Self {
        self.config.enforce_lock_threshold = enforce;
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::new(self.config)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Core Qwixx rules engine for a single player.
///
/// Every command completes before returning; callers read a fresh snapshot
/// afterwards. All queries hand out owned data, so nothing returned from
/// here can reach back into the engine.
#[derive(Clone, Debug)]
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    turn_phase: TurnPhase,
    board: Board,
    dice: Dice,
    penalties: u8,
    rng: StdRng,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let settings = GameSettings::new(config.num_columns, config.enforce_lock_threshold)?;
        Ok(Self::with_settings(settings, config.seed))
    }

    fn with_settings(settings: GameSettings, seed: u64) -> Self {
        Self {
            settings,
            status: GameStatus::Ongoing,
            turn_phase: TurnPhase::AwaitingRoll,
            board: Board::new(settings.num_columns),
            dice: Dice::default(),
            penalties: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn_phase(&self) -> TurnPhase {
        self.turn_phase
    }

    pub fn num_rows(&self) -> usize {
        self.settings.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.settings.num_columns
    }

    pub fn min_column(&self) -> u8 {
        self.settings.min_column
    }

    pub fn num_white_dice(&self) -> usize {
        self.settings.num_white_dice
    }

    pub fn max_penalties(&self) -> u8 {
        self.settings.max_penalties
    }

    /// Number of penalties taken so far.
    pub fn times_passed(&self) -> u8 {
        self.penalties
    }

    /// Dice faces as text in the order White, White, Red, Yellow, Green, Blue.
    pub fn dice_values(&self) -> Vec<String> {
        self.dice.values().iter().map(u8::to_string).collect()
    }

    /// The sheet as text: `"X"` for crossed boxes, the box label otherwise.
    pub fn number_values(&self) -> Vec<Vec<String>> {
        self.board.labels()
    }

    pub fn score_sheet(&self) -> ScoreSheet {
        ScoreSheet::from_board(&self.board, self.penalties)
    }

    /// Row scores, penalty total and grand total as text.
    pub fn score_values(&self) -> Vec<String> {
        self.score_sheet().to_strings()
    }

    pub fn total_score(&self) -> i32 {
        self.score_sheet().total
    }

    pub fn can_roll(&self) -> bool {
        self.turn_phase == TurnPhase::AwaitingRoll
    }

    pub fn can_select(&self) -> bool {
        matches!(
            self.turn_phase,
            TurnPhase::WhiteSelection | TurnPhase::ColorSelection
        )
    }

    pub fn can_pass_white(&self) -> bool {
        self.turn_phase == TurnPhase::WhiteSelection
    }

    pub fn can_pass_color(&self) -> bool {
        self.turn_phase == TurnPhase::ColorSelection
    }

    pub fn game_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn status_message(&self) -> String {
        match (self.turn_phase, self.status) {
            (_, GameStatus::Finished { reason }) => {
                let cause = match reason {
                    EndReason::PenaltyLimit => {
                        format!("{} penalties taken", self.settings.max_penalties)
                    }
                    EndReason::RowsLocked => format!("{LOCKS_TO_END} rows locked"),
                };
                format!("Game over: {cause}. Final score: {}.", self.total_score())
            }
            (TurnPhase::AwaitingRoll, _) => String::from("Roll the dice."),
            (TurnPhase::WhiteSelection, _) => format!(
                "Cross out a {} in any row, or pass.",
                self.dice.white_sum()
            ),
            (TurnPhase::ColorSelection, _) => String::from(
                "Cross out a white die plus the matching colored die, or pass and take a penalty.",
            ),
            (TurnPhase::GameOver, GameStatus::Ongoing) => String::from("Game over."),
        }
    }

    pub fn state_view(&self) -> GameStateView {
        let rows = self
            .board
            .rows()
            .iter()
            .map(|row| RowView {
                color: row.color(),
                labels: (0..row.len()).map(|pos| row.label(pos)).collect(),
                marked: (0..row.len()).map(|pos| row.is_marked(pos)).collect(),
                locked: row.is_locked(),
            })
            .collect();

        GameStateView {
            settings: self.settings,
            phase: self.turn_phase,
            status: self.status,
            dice: self.dice,
            rows,
            penalties: self.penalties,
            score: self.score_sheet(),
        }
    }

    /// Every command that would currently be accepted and, for marks, return `Valid`.
    pub fn legal_actions(&self) -> Vec<Action> {
        let pass = match self.turn_phase {
            TurnPhase::GameOver => return Vec::new(),
            TurnPhase::AwaitingRoll => return vec![Action::Roll],
            TurnPhase::WhiteSelection => Action::PassWhite,
            TurnPhase::ColorSelection => Action::PassColor,
        };
        let mut actions = Vec::new();
        for row in 0..self.settings.num_rows {
            for column in 0..self.settings.num_columns {
                if self.evaluate(row, column) == Ok(StatusCode::Valid) {
                    actions.push(Action::Mark { row, column });
                }
            }
        }
        actions.push(pass);
        actions
    }

    /// Roll all six dice from the game's RNG.
    pub fn roll(&mut self) -> Result<(), GameError> {
        self.ensure_phase(TurnPhase::AwaitingRoll)?;
        let dice = Dice::roll(&mut self.rng);
        self.accept_roll(dice);
        Ok(())
    }

    /// Set the dice to known faces (White, White, Red, Yellow, Green, Blue).
    pub fn roll_with(&mut self, values: [u8; NUM_DICE]) -> Result<(), GameError> {
        self.ensure_phase(TurnPhase::AwaitingRoll)?;
        let dice = Dice::from_values(values)?;
        self.accept_roll(dice);
        Ok(())
    }

    /// Judge a mark at `(row, column)` without applying it.
    ///
    /// `column` is a position on the sheet, not the number printed in the box.
    pub fn evaluate(&self, row: usize, column: usize) -> Result<StatusCode, GameError> {
        if self.game_over() {
            return Err(GameError::GameOver);
        }
        let row_state = self.board.row(row).ok_or(InvalidAction::RowIndex(row))?;
        if column >= row_state.len() {
            return Err(InvalidAction::ColumnIndex(column).into());
        }
        if self.turn_phase == TurnPhase::AwaitingRoll || !self.dice.is_rolled() {
            return Ok(StatusCode::MustRoll);
        }
        if !self.sum_matches(row_state.color(), row_state.label(column)) {
            return Ok(StatusCode::DiceDontMatch);
        }
        if row_state.is_excluded(column) {
            return Ok(StatusCode::Excluded);
        }
        if row_state.is_lock_cell(column)
            && self
                .settings
                .lock_threshold
                .is_some_and(|threshold| row_state.marked_count() < threshold)
        {
            return Ok(StatusCode::Need5);
        }
        Ok(StatusCode::Valid)
    }

    /// Try to cross out a box. Only a `Valid` outcome changes the game.
    pub fn mark(&mut self, row: usize, column: usize) -> Result<StatusCode, GameError> {
        let status = self.evaluate(row, column)?;
        if !status.is_valid() {
            debug!(row, column, ?status, "mark rejected");
            return Ok(status);
        }
        let Some(row_state) = self.board.row_mut(row) else {
            return Err(InvalidAction::RowIndex(row).into());
        };
        if row_state.mark(column) {
            info!(color = %row_state.color(), "row locked");
        }
        debug!(row, column, phase = ?self.turn_phase, "box crossed out");
        let next = match self.turn_phase {
            TurnPhase::WhiteSelection => TurnPhase::ColorSelection,
            _ => TurnPhase::AwaitingRoll,
        };
        self.advance(next);
        Ok(status)
    }

    /// Skip the white sum. Never penalized.
    pub fn pass_white(&mut self) -> Result<(), GameError> {
        self.ensure_phase(TurnPhase::WhiteSelection)?;
        debug!("white sum passed");
        self.advance(TurnPhase::ColorSelection);
        Ok(())
    }

    /// Skip the colored sums and take a penalty.
    pub fn pass_color(&mut self) -> Result<(), GameError> {
        self.ensure_phase(TurnPhase::ColorSelection)?;
        self.penalties += 1;
        debug!(penalties = self.penalties, "colored sum passed");
        self.advance(TurnPhase::AwaitingRoll);
        Ok(())
    }

    /// Apply any command. Non-mark commands report `Valid` on success.
    pub fn apply_action(&mut self, action: Action) -> Result<StatusCode, GameError> {
        match action {
            Action::Roll => self.roll()?,
            Action::Mark { row, column } => return self.mark(row, column),
            Action::PassWhite => self.pass_white()?,
            Action::PassColor => self.pass_color()?,
        }
        Ok(StatusCode::Valid)
    }

    fn ensure_phase(&self, expected: TurnPhase) -> Result<(), GameError> {
        if self.game_over() {
            return Err(GameError::GameOver);
        }
        if self.turn_phase != expected {
            return Err(GameError::IllegalPhase {
                phase: self.turn_phase,
            });
        }
        Ok(())
    }

    fn accept_roll(&mut self, dice: Dice) {
        self.dice = dice;
        self.turn_phase = TurnPhase::WhiteSelection;
        debug!(dice = ?dice.values(), "dice rolled");
    }

    fn sum_matches(&self, color: Color, label: u8) -> bool {
        match self.turn_phase {
            TurnPhase::WhiteSelection => self.dice.white_sum() == label,
            TurnPhase::ColorSelection => self.dice.color_sums(color).contains(&label),
            TurnPhase::AwaitingRoll | TurnPhase::GameOver => false,
        }
    }

    fn end_reason(&self) -> Option<EndReason> {
        if self.penalties >= self.settings.max_penalties {
            Some(EndReason::PenaltyLimit)
        } else if self.board.locked_rows() >= LOCKS_TO_END {
            Some(EndReason::RowsLocked)
        } else {
            None
        }
    }

    fn advance(&mut self, next: TurnPhase) {
        if let Some(reason) = self.end_reason() {
            self.status = GameStatus::Finished { reason };
            self.turn_phase = TurnPhase::GameOver;
            info!(?reason, score = self.total_score(), "game over");
            return;
        }
        self.turn_phase = next;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_settings(GameSettings::standard(), DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cycle_through_a_turn() -> Result<(), GameError> {
        let mut game = Game::default();
        assert_eq!(game.turn_phase(), TurnPhase::AwaitingRoll);
        game.roll()?;
        assert_eq!(game.turn_phase(), TurnPhase::WhiteSelection);
        game.pass_white()?;
        assert_eq!(game.turn_phase(), TurnPhase::ColorSelection);
        game.pass_color()?;
        assert_eq!(game.turn_phase(), TurnPhase::AwaitingRoll);
        assert_eq!(game.times_passed(), 1);
        Ok(())
    }

    #[test]
    fn commands_out_of_phase_are_rejected() {
        let mut game = Game::default();
        assert_eq!(
            game.pass_white(),
            Err(GameError::IllegalPhase {
                phase: TurnPhase::AwaitingRoll
            })
        );
        assert!(game.pass_color().is_err());
        game.roll_with([1, 1, 1, 1, 1, 1]).unwrap();
        assert_eq!(
            game.roll(),
            Err(GameError::IllegalPhase {
                phase: TurnPhase::WhiteSelection
            })
        );
        assert!(game.pass_color().is_err());
    }

    #[test]
    fn same_seed_rolls_same_dice() -> Result<(), GameError> {
        let mut a = Game::builder().with_seed(42).build()?;
        let mut b = Game::builder().with_seed(42).build()?;
        a.roll()?;
        b.roll()?;
        assert_eq!(a.dice_values(), b.dice_values());
        Ok(())
    }

    #[test]
    fn rejected_roll_values_leave_phase_alone() {
        let mut game = Game::default();
        assert_eq!(
            game.roll_with([1, 2, 3, 4, 5, 9]),
            Err(GameError::InvalidAction(InvalidAction::DieOutOfRange(9)))
        );
        assert!(game.can_roll());
        assert_eq!(game.dice_values(), vec!["0"; 6]);
    }

    #[test]
    fn status_message_tracks_phase() -> Result<(), GameError> {
        let mut game = Game::default();
        assert_eq!(game.status_message(), "Roll the dice.");
        game.roll_with([3, 4, 1, 1, 1, 1])?;
        assert!(game.status_message().contains("Cross out a 7"));
        game.pass_white()?;
        assert!(game.status_message().contains("penalty"));
        Ok(())
    }

    #[test]
    fn legal_actions_depend_on_phase() -> Result<(), GameError> {
        let mut game = Game::default();
        assert_eq!(game.legal_actions(), vec![Action::Roll]);
        game.roll_with([1, 1, 6, 6, 6, 6])?;
        // White sum 2: the first red/yellow box and the last green/blue box.
        let actions = game.legal_actions();
        assert_eq!(
            actions,
            vec![
                Action::Mark { row: 0, column: 0 },
                Action::Mark { row: 1, column: 0 },
                Action::Mark { row: 2, column: 10 },
                Action::Mark { row: 3, column: 10 },
                Action::PassWhite,
            ]
        );
        Ok(())
    }
}
