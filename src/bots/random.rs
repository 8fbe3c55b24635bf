use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::bot::Bot;
use crate::state::GameStateView;

const DEFAULT_PASS_CHANCE: f64 = 0.25;

/// Baseline bot that crosses a random legal box.
///
/// Passing is always legal during selection, so a uniform pick over every
/// action would pass far more often than a person would. Instead the bot
/// passes with a fixed probability and otherwise picks a mark uniformly.
pub struct RandomBot<R: Rng> {
    rng: R,
    pass_chance: f64,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            pass_chance: DEFAULT_PASS_CHANCE,
        }
    }

    /// Probability of passing when at least one mark is available, clamped to `0.0..=1.0`.
    pub fn with_pass_chance(mut self, pass_chance: f64) -> Self {
        self.pass_chance = pass_chance.clamp(0.0, 1.0);
        self
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_action(&mut self, _state: &GameStateView, legal_actions: &[Action]) -> Action {
        let (marks, others): (Vec<&Action>, Vec<&Action>) = legal_actions
            .iter()
            .partition(|action| action.target().is_some());
        if marks.is_empty() || self.rng.gen_bool(self.pass_chance) {
            if let Some(action) = others.choose(&mut self.rng) {
                return (*action).clone();
            }
        }
        marks
            .choose(&mut self.rng)
            .map(|action| (*action).clone())
            .expect("at least one legal action must be available")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::game::Game;

    #[test]
    fn never_passes_with_zero_chance() {
        let mut game = Game::default();
        game.roll_with([3, 4, 1, 1, 1, 1]).unwrap();
        let mut bot = RandomBot::new(StdRng::seed_from_u64(3)).with_pass_chance(0.0);
        for _ in 0..50 {
            let action = bot.select_action(&game.state_view(), &game.legal_actions());
            assert!(matches!(action, Action::Mark { .. }));
        }
    }

    #[test]
    fn always_passes_with_full_chance() {
        let mut game = Game::default();
        game.roll_with([3, 4, 1, 1, 1, 1]).unwrap();
        let mut bot = RandomBot::new(StdRng::seed_from_u64(3)).with_pass_chance(1.0);
        let action = bot.select_action(&game.state_view(), &game.legal_actions());
        assert_eq!(action, Action::PassWhite);
    }
}
