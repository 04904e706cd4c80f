//! Round resolution against a random opponent

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::choice::{Choice, Outcome, decide};

/// Source of opponent choices.
///
/// Production code uses [`SeededChoices`]; tests can script exact sequences.
pub trait ChoiceSource {
    fn next_choice(&mut self) -> Choice;
}

/// Uniformly random choices from a seeded PCG32 stream
#[derive(Debug, Clone)]
pub struct SeededChoices {
    rng: Pcg32,
}

impl SeededChoices {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl ChoiceSource for SeededChoices {
    fn next_choice(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..Choice::ALL.len())]
    }
}

/// One resolved play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player: Choice,
    pub opponent: Choice,
    pub outcome: Outcome,
}

impl Round {
    /// Build a round from two known choices
    pub fn new(player: Choice, opponent: Choice) -> Self {
        Self {
            player,
            opponent,
            outcome: decide(player, opponent),
        }
    }
}

/// Draw an opponent choice and resolve the round
pub fn resolve_round(player: Choice, source: &mut impl ChoiceSource) -> Round {
    Round::new(player, source.next_choice())
}
