use std::collections::HashMap;
use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use qwixx::{
    Bot, EndReason, Game, GameStatus, create_bot_from_spec, describe_action, render_state,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xD1CE_5EED;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play single-player Qwixx games with a bot and report the scores."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 1)]
    games: usize,

    /// Base RNG seed (per-game dice seeds are derived from it)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Require five crosses in a row before its lock box may be crossed
    #[arg(long = "lock-threshold", action = ArgAction::SetTrue)]
    lock_threshold: bool,

    /// Show the sheet and chosen actions every step
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Safety cap on actions per game; games exceeding this are aborted
    #[arg(long = "max-steps", default_value_t = 10_000)]
    max_steps: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Bot spec: greedy, random[:seed] or human[:name]
    #[arg(default_value = "greedy")]
    bot: String,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("games must be positive".into());
    }

    let mut bot = create_bot_from_spec(&args.bot, args.seed)?;
    let mut scores: Vec<i32> = Vec::with_capacity(args.games);
    let mut reasons: HashMap<&'static str, usize> = HashMap::new();
    let mut aborted_games = 0usize;

    for game_index in 0..args.games {
        let seed = args.seed.wrapping_add(game_index as u64);
        let mut game = Game::builder()
            .with_seed(seed)
            .with_lock_threshold(args.lock_threshold)
            .build()?;

        let mut steps = 0usize;
        while !game.game_over() {
            if steps >= args.max_steps {
                warn!(game = game_index, steps, "step limit reached, aborting game");
                break;
            }
            let state = game.state_view();
            let legal_actions = game.legal_actions();
            if args.visualize {
                println!("{}", render_state(&state));
            }
            let action = bot.select_action(&state, &legal_actions);
            if args.visualize {
                println!("Chosen action: {}\n", describe_action(&state, &action));
            }
            let status = game.apply_action(action)?;
            if !status.is_valid() {
                println!("{status}");
            }
            steps += 1;
        }

        let GameStatus::Finished { reason } = game.status() else {
            aborted_games += 1;
            continue;
        };
        let label = match reason {
            EndReason::PenaltyLimit => "penalty limit",
            EndReason::RowsLocked => "rows locked",
        };
        *reasons.entry(label).or_default() += 1;
        debug!(game = game_index, score = game.total_score(), ?reason, "game finished");
        if args.visualize || args.games == 1 {
            println!("{}", render_state(&game.state_view()));
            println!("{}", game.status_message());
        }
        scores.push(game.total_score());
    }

    if scores.is_empty() {
        println!("No games finished ({aborted_games} aborted).");
        return Ok(());
    }

    let total: i64 = scores.iter().map(|score| i64::from(*score)).sum();
    let mean = total as f64 / scores.len() as f64;
    let min = scores.iter().min().copied().unwrap_or_default();
    let max = scores.iter().max().copied().unwrap_or_default();
    println!("Bot: {}", args.bot);
    println!(
        "Games finished: {}  |  aborted: {aborted_games}",
        scores.len()
    );
    println!("Score: mean {mean:.2}  |  min {min}  |  max {max}");
    let mut reasons: Vec<_> = reasons.into_iter().collect();
    reasons.sort();
    for (label, count) in reasons {
        println!("  ended by {label}: {count}");
    }
    Ok(())
}
