use rand::SeedableRng;
use rand::rngs::StdRng;

use qwixx::{Action, Bot, Game, GameBuilder, GameError, GreedyBot, RandomBot};

fn play_out(game: &mut Game, bot: &mut dyn Bot) -> Result<usize, GameError> {
    let mut steps = 0;
    while !game.game_over() {
        assert!(steps < 1_000, "game did not finish");
        let state = game.state_view();
        let legal_actions = game.legal_actions();
        let action = bot.select_action(&state, &legal_actions);
        assert!(legal_actions.contains(&action));
        assert!(game.apply_action(action)?.is_valid());
        steps += 1;
    }
    Ok(steps)
}

#[test]
fn random_bot_finishes_games() -> Result<(), GameError> {
    for seed in 0..20 {
        let mut game = GameBuilder::new().with_seed(seed).build()?;
        let mut bot = RandomBot::new(StdRng::seed_from_u64(seed));
        play_out(&mut game, &mut bot)?;
        assert!(game.legal_actions().is_empty());
    }
    Ok(())
}

#[test]
fn greedy_bot_finishes_games() -> Result<(), GameError> {
    for seed in 0..20 {
        let mut game = GameBuilder::new().with_seed(seed).build()?;
        play_out(&mut game, &mut GreedyBot::new())?;
        assert!(game.game_over());
    }
    Ok(())
}

#[test]
fn greedy_bot_prefers_marks_that_skip_nothing() -> Result<(), GameError> {
    let mut game = Game::default();
    game.roll_with([6, 6, 1, 1, 1, 1])?;
    let chosen = GreedyBot::new().select_action(&game.state_view(), &game.legal_actions());
    match chosen {
        Action::Mark { row, column } => {
            assert!(row == 2 || row == 3, "expected a descending row, got {row}");
            assert_eq!(column, 0);
        }
        other => panic!("expected a mark, got {other:?}"),
    }
    Ok(())
}

#[test]
fn greedy_bot_passes_white_on_wasteful_sums() -> Result<(), GameError> {
    let mut game = Game::default();
    game.roll_with([1, 6, 1, 1, 1, 1])?;
    let chosen = GreedyBot::new().select_action(&game.state_view(), &game.legal_actions());
    assert_eq!(chosen, Action::PassWhite);
    Ok(())
}

#[test]
fn greedy_bot_rolls_at_turn_start() {
    let game = Game::default();
    let chosen = GreedyBot::new().select_action(&game.state_view(), &game.legal_actions());
    assert_eq!(chosen, Action::Roll);
}
