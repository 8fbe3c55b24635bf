use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::InvalidAction;

pub const NUM_ROWS: usize = 4;
pub const NUM_WHITE_DICE: usize = 2;
pub const NUM_DICE: usize = NUM_WHITE_DICE + NUM_ROWS;
pub const MIN_DIE_VALUE: u8 = 1;
pub const MAX_DIE_VALUE: u8 = 6;
pub const MIN_COLUMN: u8 = 2;
pub const DEFAULT_NUM_COLUMNS: usize = 11;
pub const MAX_PENALTIES: u8 = 4;
pub const PENALTY_POINTS: i32 = 5;
pub const LOCK_THRESHOLD: usize = 5;
pub const LOCKS_TO_END: usize = 2;

/// Color of a board row and of the die that belongs to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Canonical row order.
    pub const ALL: [Color; NUM_ROWS] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Red and yellow count up from the minimum column, green and blue count down.
    #[inline]
    pub fn is_ascending(self) -> bool {
        matches!(self, Color::Red | Color::Yellow)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
        };
        f.write_str(name)
    }
}

/// Face values of the six dice in the order White, White, Red, Yellow, Green, Blue.
///
/// A zero face means the dice have not been rolled yet.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Dice {
    values: [u8; NUM_DICE],
}

impl Dice {
    pub fn from_values(values: [u8; NUM_DICE]) -> Result<Self, InvalidAction> {
        if let Some(&value) = values
            .iter()
            .find(|v| !(MIN_DIE_VALUE..=MAX_DIE_VALUE).contains(*v))
        {
            return Err(InvalidAction::DieOutOfRange(value));
        }
        Ok(Self { values })
    }

    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let mut values = [0; NUM_DICE];
        for value in values.iter_mut() {
            *value = rng.gen_range(MIN_DIE_VALUE..=MAX_DIE_VALUE);
        }
        Self { values }
    }

    #[inline]
    pub fn is_rolled(&self) -> bool {
        self.values[0] != 0
    }

    #[inline]
    pub fn values(&self) -> [u8; NUM_DICE] {
        self.values
    }

    #[inline]
    pub fn white(&self) -> [u8; NUM_WHITE_DICE] {
        [self.values[0], self.values[1]]
    }

    #[inline]
    pub fn colored(&self, color: Color) -> u8 {
        self.values[NUM_WHITE_DICE + color.index()]
    }

    pub fn white_sum(&self) -> u8 {
        self.white().iter().sum()
    }

    /// Sums usable in the given row during the colored phase: each white die plus the row's die.
    pub fn color_sums(&self, color: Color) -> [u8; NUM_WHITE_DICE] {
        let colored = self.colored(color);
        self.white().map(|white| white + colored)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rejects_faces_outside_range() {
        assert_eq!(
            Dice::from_values([1, 2, 3, 4, 5, 7]),
            Err(InvalidAction::DieOutOfRange(7))
        );
        assert_eq!(
            Dice::from_values([0, 2, 3, 4, 5, 6]),
            Err(InvalidAction::DieOutOfRange(0))
        );
    }

    #[test]
    fn sums_follow_die_order() {
        let dice = Dice::from_values([1, 2, 4, 5, 4, 6]).unwrap();
        assert_eq!(dice.white_sum(), 3);
        assert_eq!(dice.color_sums(Color::Red), [5, 6]);
        assert_eq!(dice.color_sums(Color::Blue), [7, 8]);
    }

    #[test]
    fn random_roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let dice = Dice::roll(&mut rng);
            assert!(dice.is_rolled());
            assert!(dice.values().iter().all(|v| (1..=6).contains(v)));
        }
    }

    #[test]
    fn unrolled_dice_read_zero() {
        let dice = Dice::default();
        assert!(!dice.is_rolled());
        assert_eq!(dice.values(), [0; NUM_DICE]);
    }
}
