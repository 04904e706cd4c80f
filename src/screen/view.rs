//! Top-level views and the per-outcome result text

use serde::{Deserialize, Serialize};

use crate::engine::Outcome;

/// Which screen is showing. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Picking a hand
    #[default]
    Game,
    /// Showing both picks and the outcome
    Result,
    /// Win screen with confetti
    Celebration,
}

impl ViewState {
    /// Whether the rules overlay may be opened from here
    pub fn allows_rules(&self) -> bool {
        matches!(self, ViewState::Game | ViewState::Result)
    }
}

/// Headline shown on the result screen
pub fn headline(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "YOU WIN",
        Outcome::Lose => "YOU LOSE",
        Outcome::Tie => "IT'S A TIE",
    }
}

/// Label for the action button on the result screen.
///
/// A win advances to the celebration; tie and loss replay directly, with
/// different wording.
pub fn action_label(view: ViewState, outcome: Outcome) -> &'static str {
    match (view, outcome) {
        (ViewState::Celebration, _) => "PLAY AGAIN",
        (_, Outcome::Win) => "CELEBRATE",
        (_, Outcome::Tie) => "PLAY AGAIN",
        (_, Outcome::Lose) => "TRY AGAIN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_is_game() {
        assert_eq!(ViewState::default(), ViewState::Game);
    }

    #[test]
    fn test_labels_differ_by_outcome() {
        assert_eq!(action_label(ViewState::Result, Outcome::Win), "CELEBRATE");
        assert_eq!(action_label(ViewState::Result, Outcome::Tie), "PLAY AGAIN");
        assert_eq!(action_label(ViewState::Result, Outcome::Lose), "TRY AGAIN");
        assert_eq!(action_label(ViewState::Celebration, Outcome::Win), "PLAY AGAIN");
    }

    #[test]
    fn test_rules_not_openable_during_celebration() {
        assert!(ViewState::Game.allows_rules());
        assert!(ViewState::Result.allows_rules());
        assert!(!ViewState::Celebration.allows_rules());
    }
}
