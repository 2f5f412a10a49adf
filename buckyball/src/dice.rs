use rand::Rng;
use serde::{Deserialize, Serialize};

/// A roll of two six-sided dice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    pub fn total(&self) -> u8 {
        self.first + self.second
    }
}

pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> DiceRoll {
    DiceRoll {
        first: rng.gen_range(1..=6),
        second: rng.gen_range(1..=6),
    }
}
