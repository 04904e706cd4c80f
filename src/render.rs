//! Technology-neutral view model
//!
//! A [`Frame`] is everything a front end needs to draw one state of the
//! controller. The web build maps it onto DOM classes, the native build
//! prints it.

use std::fmt;

use crate::engine::{ChoiceSource, Outcome, Round, ScoreRecord};
use crate::persistence::ScoreStore;
use crate::screen::{ScreenController, ViewState, action_label, headline};

/// Result panel contents (Result and Celebration only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub round: Round,
    pub headline: &'static str,
    pub action_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub view: ViewState,
    pub rules_open: bool,
    pub score: ScoreRecord,
    pub result: Option<ResultPanel>,
}

impl Frame {
    pub fn from_controller<S: ChoiceSource, P: ScoreStore>(c: &ScreenController<S, P>) -> Self {
        let view = c.view();
        let result = match view {
            ViewState::Game => None,
            ViewState::Result | ViewState::Celebration => c.last_round().map(|&round| ResultPanel {
                round,
                headline: headline(round.outcome),
                action_label: action_label(view, round.outcome),
            }),
        };
        Self {
            view,
            rules_open: c.rules_open(),
            score: c.score(),
            result,
        }
    }

    /// Whether the section for `view` is visible
    pub fn shows(&self, view: ViewState) -> bool {
        self.view == view
    }

    /// Which side, if any, gets the winner highlight
    pub fn winner_highlight(&self) -> Option<Outcome> {
        self.result
            .as_ref()
            .map(|r| r.round.outcome)
            .filter(|o| *o != Outcome::Tie)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[ you {} : {} house ]",
            self.score.player_score, self.score.opponent_score
        )?;
        match (&self.view, &self.result) {
            (ViewState::Game, _) | (_, None) => {
                writeln!(f, "Pick one: rock / paper / scissors")?;
            }
            (ViewState::Result, Some(r)) => {
                writeln!(f, "You picked {}, the house picked {}", r.round.player, r.round.opponent)?;
                writeln!(f, "{}", r.headline)?;
                writeln!(f, "> {} (next)", r.action_label)?;
            }
            (ViewState::Celebration, Some(r)) => {
                writeln!(f, "*** {} *** your {} beat {}", r.headline, r.round.player, r.round.opponent)?;
                writeln!(f, "> {} (next)", r.action_label)?;
            }
        }
        if self.rules_open {
            writeln!(f, "RULES: rock beats scissors, scissors beats paper, paper beats rock. (close)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Choice;
    use crate::engine::round::tests::Scripted;
    use crate::persistence::MemoryStore;
    use crate::settings::Settings;

    fn controller(opponent: Choice) -> ScreenController<Scripted, MemoryStore> {
        ScreenController::new(Scripted::new(&[opponent]), MemoryStore::new(), &Settings::default(), 3)
    }

    #[test]
    fn test_game_frame_has_no_result() {
        let frame = Frame::from_controller(&controller(Choice::Rock));
        assert!(frame.shows(ViewState::Game));
        assert!(frame.result.is_none());
        assert_eq!(frame.winner_highlight(), None);
    }

    #[test]
    fn test_loss_frame_labels() {
        let mut c = controller(Choice::Paper);
        c.choose_option(Choice::Rock);
        let frame = Frame::from_controller(&c);
        let panel = frame.result.as_ref().unwrap();
        assert_eq!(panel.headline, "YOU LOSE");
        assert_eq!(panel.action_label, "TRY AGAIN");
        assert_eq!(frame.score, ScoreRecord::new(0, 1));
        assert_eq!(frame.winner_highlight(), Some(Outcome::Lose));
    }

    #[test]
    fn test_winner_highlight_per_outcome() {
        for (opponent, expected) in [
            (Choice::Scissors, Some(Outcome::Win)),
            (Choice::Paper, Some(Outcome::Lose)),
            (Choice::Rock, None),
        ] {
            let mut c = controller(opponent);
            c.choose_option(Choice::Rock);
            assert_eq!(Frame::from_controller(&c).winner_highlight(), expected);
        }
    }

    #[test]
    fn test_celebration_frame() {
        let mut c = controller(Choice::Scissors);
        c.choose_option(Choice::Rock);
        assert_eq!(Frame::from_controller(&c).result.unwrap().action_label, "CELEBRATE");
        c.advance();
        let frame = Frame::from_controller(&c);
        assert!(frame.shows(ViewState::Celebration));
        assert_eq!(frame.result.as_ref().unwrap().action_label, "PLAY AGAIN");
        assert!(frame.to_string().contains("YOU WIN"));
    }

    #[test]
    fn test_rules_text_only_when_open() {
        let mut c = controller(Choice::Rock);
        assert!(!Frame::from_controller(&c).to_string().contains("RULES"));
        c.toggle_rules(true);
        assert!(Frame::from_controller(&c).to_string().contains("RULES"));
    }
}
