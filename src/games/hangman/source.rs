//! Word lists and riddle files.
//!
//! Word lists hold one word per line. Riddle files hold `riddle|answer` per
//! line, split on the first `|`. Answers go through the same cleanup as words:
//! trimmed, lower-cased, and dropped with a warning if they can't be played.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{InvalidSecret, SourceError};
use crate::games::hangman::game::Puzzle;
use crate::games::hangman::rng::RandomSource;
use crate::games::GameMode;

pub const DEFAULT_WORDS_PATH: &str = "words.txt";
pub const DEFAULT_RIDDLES_PATH: &str = "riddles.txt";

/// Where each game mode reads its puzzles from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub words: PathBuf,
    pub riddles: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            words: PathBuf::from(DEFAULT_WORDS_PATH),
            riddles: PathBuf::from(DEFAULT_RIDDLES_PATH),
        }
    }
}

impl SourcePaths {
    pub fn path_for(&self, mode: GameMode) -> &Path {
        match mode {
            GameMode::Word => &self.words,
            GameMode::Riddle => &self.riddles,
        }
    }
}

/// Every puzzle available to one game mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleBank {
    puzzles: Vec<Puzzle>,
}

impl PuzzleBank {
    pub fn load(mode: GameMode, paths: &SourcePaths) -> Result<Self, SourceError> {
        match mode {
            GameMode::Word => Self::load_words(&paths.words),
            GameMode::Riddle => Self::load_riddles(&paths.riddles),
        }
    }

    pub fn load_words(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = read_source(path.as_ref())?;
        Self::parse_words(&text)
    }

    pub fn load_riddles(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = read_source(path.as_ref())?;
        Self::parse_riddles(&text)
    }

    pub fn parse_words(text: &str) -> Result<Self, SourceError> {
        let puzzles: Vec<Puzzle> = text
            .lines()
            .enumerate()
            .filter_map(|(index, line)| playable(Puzzle::word(line.trim()), line, index + 1))
            .collect();
        Self::non_empty(puzzles, "word list")
    }

    pub fn parse_riddles(text: &str) -> Result<Self, SourceError> {
        let mut puzzles: Vec<Puzzle> = Vec::new();
        let mut by_prompt: HashMap<String, usize> = HashMap::new();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            let (prompt, answer) = line
                .split_once('|')
                .ok_or(SourceError::MalformedRiddle { line: line_no })?;
            let prompt = prompt.trim();
            let Some(puzzle) = playable(Puzzle::riddle(prompt, answer.trim()), answer, line_no) else {
                continue;
            };

            match by_prompt.get(prompt) {
                // A repeated riddle keeps its latest answer.
                Some(&slot) => puzzles[slot] = puzzle,
                None => {
                    by_prompt.insert(prompt.to_string(), puzzles.len());
                    puzzles.push(puzzle);
                }
            }
        }
        Self::non_empty(puzzles, "riddle list")
    }

    fn non_empty(puzzles: Vec<Puzzle>, what: &str) -> Result<Self, SourceError> {
        if puzzles.is_empty() {
            return Err(SourceError::Empty(what.to_string()));
        }
        debug!(count = puzzles.len(), what, "puzzles loaded");
        Ok(Self { puzzles })
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Uniform pick. A bank is never empty once constructed.
    pub fn choose(&self, rng: &mut impl RandomSource) -> &Puzzle {
        &self.puzzles[rng.pick_index(self.puzzles.len())]
    }
}

fn read_source(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|err| SourceError::Io {
        path: path.to_path_buf(),
        err,
    })
}

/// Blank entries vanish quietly; unplayable ones are logged and skipped.
fn playable(built: Result<Puzzle, InvalidSecret>, raw: &str, line: usize) -> Option<Puzzle> {
    match built {
        Ok(puzzle) => Some(puzzle),
        Err(_) if raw.trim().is_empty() => None,
        Err(err) => {
            warn!(line, %err, "skipping entry with non-alphabetic characters");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::rng::ScriptedRandom;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn secrets(bank: &PuzzleBank) -> Vec<&str> {
        bank.puzzles().iter().map(Puzzle::secret).collect()
    }

    #[test]
    fn words_are_trimmed_and_lowercased() {
        let bank = PuzzleBank::parse_words("  Apple\n\nbanana  \r\nCHERRY\n").unwrap();
        assert_eq!(secrets(&bank), vec!["apple", "banana", "cherry"]);
        assert!(bank.puzzles().iter().all(|p| p.prompt().is_none()));
    }

    #[test]
    #[traced_test]
    fn bad_words_are_skipped() {
        let bank = PuzzleBank::parse_words("ice cream\nr2d2\nplum\n").unwrap();
        assert_eq!(secrets(&bank), vec!["plum"]);
        assert!(logs_contain("skipping entry"));
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let err = PuzzleBank::parse_words("\n  \n").unwrap_err();
        assert!(matches!(err, SourceError::Empty(_)));
    }

    #[test]
    fn riddles_split_on_first_pipe() {
        let text = "What has keys but can't open locks? | Piano\nWhat has a neck but no head?|bottle\n";
        let bank = PuzzleBank::parse_riddles(text).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.puzzles()[0].prompt(), Some("What has keys but can't open locks?"));
        assert_eq!(bank.puzzles()[0].secret(), "piano");
        assert_eq!(bank.puzzles()[1].secret(), "bottle");
    }

    #[test]
    fn repeated_riddle_keeps_last_answer() {
        let text = "Riddle one|first\nRiddle two|second\nRiddle one|third\n";
        let bank = PuzzleBank::parse_riddles(text).unwrap();
        assert_eq!(secrets(&bank), vec!["third", "second"]);
    }

    #[test]
    fn riddle_without_separator_is_malformed() {
        let err = PuzzleBank::parse_riddles("fine|answer\n\nno separator here\n").unwrap_err();
        assert!(matches!(err, SourceError::MalformedRiddle { line: 3 }));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("wordriddle-missing-words.txt");
        let err = PuzzleBank::load_words(&path).unwrap_err();
        match err {
            SourceError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_disk_by_mode() {
        let dir = std::env::temp_dir().join(format!("wordriddle-source-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let paths = SourcePaths {
            words: dir.join("words.txt"),
            riddles: dir.join("riddles.txt"),
        };
        fs::write(&paths.words, "lantern\n").unwrap();
        fs::write(&paths.riddles, "I light the way at night|lantern\n").unwrap();

        let words = PuzzleBank::load(GameMode::Word, &paths).unwrap();
        let riddles = PuzzleBank::load(GameMode::Riddle, &paths).unwrap();
        assert_eq!(words.puzzles(), &[Puzzle::word("lantern").unwrap()]);
        assert_eq!(riddles.puzzles()[0].prompt(), Some("I light the way at night"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn choose_follows_random_source() {
        let bank = PuzzleBank::parse_words("a\nb\nc\n").unwrap();
        let mut rng = ScriptedRandom::new(vec![1, 5]);
        assert_eq!(bank.choose(&mut rng).secret(), "b");
        assert_eq!(bank.choose(&mut rng).secret(), "c");
    }
}
