//! Round engine
//!
//! Pure game rules. Nothing here touches the DOM, storage or the clock:
//! - Randomness comes in through [`ChoiceSource`]
//! - Scores are plain values, updated by [`apply_outcome`]

pub mod choice;
pub mod round;
pub mod score;

pub use choice::{Choice, Outcome, ParseChoiceError, decide};
pub use round::{ChoiceSource, Round, SeededChoices, resolve_round};
pub use score::{ScoreRecord, apply_outcome};
