pub mod core {
	pub mod engine;
	pub mod game;
	pub mod menu;
}

pub mod cli;
pub mod error;
pub mod games;
pub mod logging;
pub mod script;

// Re-export for convenience
pub use crate::core::game::{Context, Screen, Transition};
pub use crate::games::hangman::{GuessResult, Puzzle, Round, RoundOutcome, Session};
