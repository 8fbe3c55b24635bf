use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::bots::{GreedyBot, HumanBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
/// - greedy
pub fn create_bot_from_spec(spec: &str, seed: u64) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string())
                .unwrap_or_else(|| String::from("Human"));
            Ok(Box::new(HumanBot::new(name)))
        }
        "random" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.parse::<u64>().ok())
                .unwrap_or(seed ^ 0x9E37_79B9);
            Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
        }
        "greedy" => Ok(Box::new(GreedyBot::new())),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_ignore_arguments_and_case() {
        assert_eq!(label_for_spec("Random:17"), "random");
        assert_eq!(label_for_spec(" greedy "), "greedy");
    }

    #[test]
    fn unknown_spec_is_an_error() {
        assert!(create_bot_from_spec("oracle", 0).is_err());
        assert!(create_bot_from_spec("random:5", 0).is_ok());
        assert!(create_bot_from_spec("greedy", 0).is_ok());
    }
}
