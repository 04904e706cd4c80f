//! Roshambo - rock, paper, scissors against the house
//!
//! Core modules:
//! - `engine`: Round rules (choices, outcomes, scoring), no side effects
//! - `screen`: Game/Result/Celebration state machine plus the rules overlay
//! - `celebration`: Seeded confetti bursts
//! - `persistence`: Score storage behind a small trait
//! - `settings`: Presentation timing and effect density
//! - `render`: View model handed to the front end

pub mod celebration;
pub mod engine;
pub mod persistence;
pub mod render;
pub mod screen;
pub mod settings;

pub use engine::{Choice, Outcome, Round, ScoreRecord};
pub use screen::{ScreenController, ViewState};
pub use settings::Settings;
