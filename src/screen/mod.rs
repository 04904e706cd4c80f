//! Screen state machine
//!
//! Game -> Result on a pick, Result -> Celebration on a win, and back to Game
//! on replay. The rules overlay is a separate flag on top of any view.

pub mod controller;
pub mod view;

pub use controller::ScreenController;
pub use view::{ViewState, action_label, headline};
