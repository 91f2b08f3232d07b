pub mod hangman;

use serde::{Deserialize, Serialize};

/// Metadata about a game mode
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The two ways to play: guess a plain word, or answer a riddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Word,
    Riddle,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Word, GameMode::Riddle];

    pub fn info(self) -> GameInfo {
        match self {
            GameMode::Word => GameInfo {
                id: "word",
                name: "Word Guessing Game",
                description: "Guess the hidden word letter by letter",
            },
            GameMode::Riddle => GameInfo {
                id: "riddle",
                name: "Riddle Guessing Game",
                description: "Solve the riddle by spelling out its answer",
            },
        }
    }
}

/// All game modes with their metadata, in menu order.
pub fn get_all_games() -> Vec<(GameMode, GameInfo)> {
    GameMode::ALL.iter().map(|&mode| (mode, mode.info())).collect()
}
