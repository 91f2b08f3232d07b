use std::path::PathBuf;

use thiserror::Error;

/// Rejected guesses. The round is left untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("please enter a valid letter or word (got {0:?})")]
    InvalidInput(String),
    #[error("no round in progress")]
    NoActiveRound,
    #[error("the round is already over")]
    RoundOver,
}

/// A puzzle whose secret can't be played: empty, or not purely alphabetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("secret must be a non-empty alphabetic word (got {0:?})")]
pub struct InvalidSecret(pub String);

/// Failures while reading a word list or riddle file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read '{}': {err}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("riddle line {line} is not of the form `riddle|answer`")]
    MalformedRiddle { line: usize },
    #[error("no usable puzzles in {0}")]
    Empty(String),
}
