//! Choices, outcomes and the cyclic "beats" relation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three hand shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices in a fixed order (used for uniform sampling)
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The single choice this one defeats
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no choice
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown choice: {0:?}")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "s" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError(s.to_string())),
        }
    }
}

/// Result of a round from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

/// Decide the outcome of `a` against `b`.
///
/// Distinct pairs must match the table in exactly one direction.
pub fn decide(a: Choice, b: Choice) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.beats() == b {
        Outcome::Win
    } else if b.beats() == a {
        Outcome::Lose
    } else {
        unreachable!("beats table is not cyclic for {a} vs {b}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The same round seen from the other side
    fn reversed(outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }

    fn any_choice() -> impl Strategy<Value = Choice> {
        prop::sample::select(Choice::ALL.to_vec())
    }

    #[test]
    fn test_rock_beats_scissors() {
        assert_eq!(decide(Choice::Rock, Choice::Scissors), Outcome::Win);
        assert_eq!(decide(Choice::Scissors, Choice::Rock), Outcome::Lose);
    }

    #[test]
    fn test_paper_vs_paper_is_tie() {
        assert_eq!(decide(Choice::Paper, Choice::Paper), Outcome::Tie);
    }

    #[test]
    fn test_beats_is_a_single_cycle() {
        // Following `beats` three times from any choice returns to it
        for c in Choice::ALL {
            assert_ne!(c.beats(), c);
            assert_eq!(c.beats().beats().beats(), c);
        }
    }

    #[test]
    fn test_each_choice_wins_exactly_once() {
        for a in Choice::ALL {
            let wins = Choice::ALL
                .iter()
                .filter(|&&b| decide(a, b) == Outcome::Win)
                .count();
            assert_eq!(wins, 1, "{a} should beat exactly one choice");
        }
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("Rock".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!(" p ".parse::<Choice>(), Ok(Choice::Paper));
        assert_eq!("SCISSORS".parse::<Choice>(), Ok(Choice::Scissors));
        assert!("lizard".parse::<Choice>().is_err());
    }

    proptest! {
        #[test]
        fn decide_is_antisymmetric(a in any_choice(), b in any_choice()) {
            prop_assert_eq!(decide(b, a), reversed(decide(a, b)));
        }

        #[test]
        fn decide_same_choice_ties(a in any_choice()) {
            prop_assert_eq!(decide(a, a), Outcome::Tie);
        }
    }
}
