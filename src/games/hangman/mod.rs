/// Word & riddle guessing - engine, puzzle sources and terminal screen.
pub mod game;
pub mod renderer;
pub mod rng;
pub mod screen;
pub mod source;

pub use game::{
    compute_win_score, Difficulty, GuessKind, GuessResult, Puzzle, Round, RoundOutcome, Session,
};
pub use renderer::HangmanRenderer;
pub use rng::{RandomSource, RngSource, ScriptedRandom};
pub use screen::RoundScreen;
pub use source::{PuzzleBank, SourcePaths};
