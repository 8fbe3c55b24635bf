use std::io::{self, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::state::GameStateView;
use crate::visualize::{describe_action, render_state};

/// Interactive bot that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

/// What a line of player input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Choose(usize),
    Pass,
    Help,
    Quit,
    Unknown,
}

fn parse_command(input: &str) -> Command {
    let trimmed = input.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "q" | "quit" => Command::Quit,
        "h" | "help" | "?" => Command::Help,
        "p" | "pass" => Command::Pass,
        other => other
            .parse::<usize>()
            .map(Command::Choose)
            .unwrap_or(Command::Unknown),
    }
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn prompt(&self, state: &GameStateView, legal_actions: &[Action]) {
        println!("\n=== {}'s sheet ===", self.name);
        println!("{}", render_state(state));
        for (index, action) in legal_actions.iter().enumerate() {
            println!("  [{index}] {}", describe_action(state, action));
        }
        print!("Choose an index, 'p' to pass, 'help' or 'q': ");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        assert!(
            !legal_actions.is_empty(),
            "at least one legal action must exist"
        );
        // Rolling is the only choice at the start of a turn.
        if let [only @ Action::Roll] = legal_actions {
            return only.clone();
        }
        loop {
            self.prompt(state, legal_actions);
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let chosen = match parse_command(&input) {
                Command::Quit => {
                    println!("Exiting game at user's request.");
                    std::process::exit(0);
                }
                Command::Help => {
                    println!("Crossing a box makes every box to its left unavailable in that row.");
                    println!("Passing the colored sum costs 5 points; four penalties end the game.");
                    continue;
                }
                Command::Pass => legal_actions.iter().find(|action| action.is_pass()),
                Command::Choose(index) => legal_actions.get(index),
                Command::Unknown => {
                    println!("Invalid input: '{}'.", input.trim());
                    continue;
                }
            };
            match chosen {
                Some(action) => return action.clone(),
                None => println!("That choice is not available."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shortcuts_and_indices() {
        assert_eq!(parse_command(" 3\n"), Command::Choose(3));
        assert_eq!(parse_command("P"), Command::Pass);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("cross red"), Command::Unknown);
    }
}
