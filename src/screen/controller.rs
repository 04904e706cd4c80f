//! Screen controller
//!
//! Owns all mutable game state and exposes one handler per input event.
//! Every handler runs to completion (including the storage write) before
//! returning; there is no deferred logic here, only deferred rendering in the
//! front end.

use crate::celebration::{ConfettiPiece, generate_confetti};
use crate::engine::{Choice, ChoiceSource, Outcome, Round, ScoreRecord, apply_outcome, resolve_round};
use crate::persistence::ScoreStore;
use crate::settings::Settings;

use super::view::ViewState;

pub struct ScreenController<S: ChoiceSource, P: ScoreStore> {
    source: S,
    store: P,
    view: ViewState,
    rules_open: bool,
    score: ScoreRecord,
    last_round: Option<Round>,
    confetti: Vec<ConfettiPiece>,
    confetti_pieces: usize,
    confetti_seed: u64,
}

impl<S: ChoiceSource, P: ScoreStore> ScreenController<S, P> {
    /// Start on the game screen with the score read from `store`
    pub fn new(source: S, store: P, settings: &Settings, seed: u64) -> Self {
        let score = store.load().unwrap_or_else(|| {
            log::info!("No stored score, starting at 0-0");
            ScoreRecord::default()
        });
        Self {
            source,
            store,
            view: ViewState::Game,
            rules_open: false,
            score,
            last_round: None,
            confetti: Vec::new(),
            confetti_pieces: settings.confetti_pieces,
            confetti_seed: seed,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn rules_open(&self) -> bool {
        self.rules_open
    }

    pub fn score(&self) -> ScoreRecord {
        self.score
    }

    /// The round being displayed, if any (Result and Celebration only)
    pub fn last_round(&self) -> Option<&Round> {
        self.last_round.as_ref()
    }

    /// Current confetti burst (empty outside Celebration)
    pub fn confetti(&self) -> &[ConfettiPiece] {
        &self.confetti
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Player picked a hand. Only valid on the game screen.
    pub fn choose_option(&mut self, choice: Choice) -> Option<&Round> {
        if self.view != ViewState::Game {
            log::debug!("Ignoring choice {} in {:?}", choice, self.view);
            return None;
        }

        let round = resolve_round(choice, &mut self.source);
        log::info!(
            "Round: {} vs {} -> {:?}",
            round.player,
            round.opponent,
            round.outcome
        );

        self.score = apply_outcome(self.score, round.outcome);
        self.persist();

        self.last_round = Some(round);
        self.view = ViewState::Result;
        self.last_round.as_ref()
    }

    /// Move forward from the current screen.
    ///
    /// Result after a win goes to Celebration; Result after a tie or loss and
    /// Celebration both return to Game. Ignored on the game screen.
    pub fn advance(&mut self) {
        match (self.view, self.last_round.map(|r| r.outcome)) {
            (ViewState::Result, Some(Outcome::Win)) => {
                self.confetti = generate_confetti(self.confetti_seed, self.confetti_pieces);
                self.confetti_seed = self.confetti_seed.wrapping_add(1);
                self.view = ViewState::Celebration;
                log::info!("Celebrating ({} confetti)", self.confetti.len());
            }
            (ViewState::Result, _) | (ViewState::Celebration, _) => self.replay(),
            (ViewState::Game, _) => log::debug!("Ignoring advance on game screen"),
        }
    }

    /// Open or close the rules overlay.
    ///
    /// Closing always succeeds; opening is ignored during Celebration.
    pub fn toggle_rules(&mut self, open: bool) {
        if open && !self.view.allows_rules() {
            log::debug!("Ignoring rules open in {:?}", self.view);
            return;
        }
        self.rules_open = open;
    }

    fn replay(&mut self) {
        self.last_round = None;
        self.confetti.clear();
        self.view = ViewState::Game;
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.score) {
            log::warn!("Failed to save score: {}", e);
        }
    }
}
