use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GuessError, InvalidSecret};
use crate::games::hangman::rng::RandomSource;
use crate::games::hangman::source::PuzzleBank;

/// Symbol shown for a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '?';
/// Consecutive misses that earn a free letter.
pub const HINT_THRESHOLD: u32 = 3;
pub const POINTS_PER_LIFE: u32 = 10;

/// A secret word plus the riddle that leads to it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    secret: String,
    prompt: Option<String>,
}

impl Puzzle {
    pub fn word(secret: impl Into<String>) -> Result<Self, InvalidSecret> {
        Self::build(secret.into(), None)
    }

    pub fn riddle(
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, InvalidSecret> {
        Self::build(answer.into(), Some(prompt.into()))
    }

    /// Secrets are lower-cased; anything left that isn't a letter is refused,
    /// since a clue could never reveal it.
    fn build(secret: String, prompt: Option<String>) -> Result<Self, InvalidSecret> {
        let secret = secret.to_lowercase();
        if secret.is_empty() || !secret.chars().all(char::is_alphabetic) {
            return Err(InvalidSecret(secret));
        }
        Ok(Self { secret, prompt })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Free-text difficulty. Anything that isn't "easy" or "medium" plays as hard.
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn lives(self) -> u32 {
        match self {
            Difficulty::Easy => 12,
            Difficulty::Medium => 9,
            Difficulty::Hard => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Ongoing,
    Won,
    Lost,
}

impl RoundOutcome {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundOutcome::Ongoing)
    }
}

/// How a single accepted guess was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessKind {
    /// Letter present in the secret.
    Hit,
    /// Letter absent from the secret.
    Miss,
    /// Whole-word guess that didn't match.
    WordMiss,
    /// Whole-word guess that matched.
    Solved,
}

/// Snapshot handed back to the presentation layer after every accepted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub guess: String,
    pub kind: GuessKind,
    pub clue: String,
    pub lives_remaining: u32,
    pub wrong_guesses: Vec<char>,
    /// Letter revealed for free after too many misses in a row.
    pub hint: Option<char>,
    pub outcome: RoundOutcome,
    /// Points earned, present only when this guess won the round.
    pub points: Option<u32>,
    pub score: u32,
}

/// Points for a win. Saturates rather than overflowing on huge life counts.
pub fn compute_win_score(lives_remaining: u32) -> u32 {
    lives_remaining.saturating_mul(POINTS_PER_LIFE)
}

/// What one guess did to a round, before any scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundUpdate {
    pub kind: GuessKind,
    pub hint: Option<char>,
    pub outcome: RoundOutcome,
}

/// State of one play-through, from a fully masked clue to a win or a loss.
#[derive(Debug, Clone)]
pub struct Round {
    puzzle: Puzzle,
    secret: Vec<char>,
    clue: Vec<char>,
    lives: u32,
    wrong_guesses: Vec<char>,
    consecutive_wrong: u32,
    outcome: RoundOutcome,
}

impl Round {
    pub fn new(puzzle: Puzzle, lives: u32) -> Self {
        let secret: Vec<char> = puzzle.secret().chars().collect();
        let clue = vec![PLACEHOLDER; secret.len()];
        Self {
            puzzle,
            secret,
            clue,
            lives,
            wrong_guesses: Vec::new(),
            consecutive_wrong: 0,
            outcome: RoundOutcome::Ongoing,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn secret(&self) -> &str {
        self.puzzle.secret()
    }

    pub fn clue(&self) -> &[char] {
        &self.clue
    }

    pub fn clue_string(&self) -> String {
        self.clue.iter().collect()
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives
    }

    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong_guesses
    }

    pub fn consecutive_wrong(&self) -> u32 {
        self.consecutive_wrong
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Applies one raw guess. Input is trimmed and lower-cased first; anything
    /// empty or non-alphabetic is rejected without touching the round.
    pub fn guess(
        &mut self,
        raw: &str,
        rng: &mut impl RandomSource,
    ) -> Result<RoundUpdate, GuessError> {
        if self.outcome.is_over() {
            return Err(GuessError::RoundOver);
        }
        let guess = normalize_guess(raw)?;

        let mut letters = guess.chars();
        let kind = match (letters.next(), letters.next()) {
            (Some(letter), None) => self.guess_letter(letter),
            _ => self.guess_word(&guess),
        };

        if kind == GuessKind::Solved {
            self.outcome = RoundOutcome::Won;
            return Ok(RoundUpdate { kind, hint: None, outcome: self.outcome });
        }

        let hint = if self.consecutive_wrong == HINT_THRESHOLD {
            self.consecutive_wrong = 0;
            self.reveal_hint(rng)
        } else {
            None
        };

        self.outcome = self.evaluate();
        debug!(?kind, ?hint, lives = self.lives, clue = %self.clue_string(), "guess applied");
        Ok(RoundUpdate { kind, hint, outcome: self.outcome })
    }

    fn guess_letter(&mut self, letter: char) -> GuessKind {
        if self.reveal(letter) > 0 {
            self.consecutive_wrong = 0;
            return GuessKind::Hit;
        }
        if !self.wrong_guesses.contains(&letter) {
            self.wrong_guesses.push(letter);
        }
        self.miss();
        GuessKind::Miss
    }

    fn guess_word(&mut self, word: &str) -> GuessKind {
        if word == self.secret() {
            self.clue.clone_from(&self.secret);
            self.consecutive_wrong = 0;
            return GuessKind::Solved;
        }
        // Whole-word misses cost a life but are not listed with the wrong letters.
        self.miss();
        GuessKind::WordMiss
    }

    fn miss(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.consecutive_wrong += 1;
    }

    /// Reveals every occurrence of `letter`, returning how many positions matched.
    fn reveal(&mut self, letter: char) -> usize {
        let mut matched = 0;
        for (slot, &actual) in self.clue.iter_mut().zip(&self.secret) {
            if actual == letter {
                *slot = actual;
                matched += 1;
            }
        }
        matched
    }

    fn reveal_hint(&mut self, rng: &mut impl RandomSource) -> Option<char> {
        let hidden: Vec<usize> = self
            .clue
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == PLACEHOLDER)
            .map(|(i, _)| i)
            .collect();
        if hidden.is_empty() {
            return None;
        }
        let letter = self.secret[hidden[rng.pick_index(hidden.len())]];
        self.reveal(letter);
        info!(%letter, "hint revealed");
        Some(letter)
    }

    fn evaluate(&self) -> RoundOutcome {
        if !self.clue.contains(&PLACEHOLDER) {
            RoundOutcome::Won
        } else if self.lives == 0 {
            RoundOutcome::Lost
        } else {
            RoundOutcome::Ongoing
        }
    }
}

fn normalize_guess(raw: &str) -> Result<String, GuessError> {
    let guess = raw.trim().to_lowercase();
    if guess.is_empty() || !guess.chars().all(char::is_alphabetic) {
        return Err(GuessError::InvalidInput(raw.to_string()));
    }
    Ok(guess)
}

/// One player's sitting: the running score, the round in play and the
/// random source used for puzzles and hints.
#[derive(Debug)]
pub struct Session<R> {
    score: u32,
    round: Option<Round>,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(rng: R) -> Self {
        Self { score: 0, round: None, rng }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The current round, kept after it resolves until the next one starts.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn start_round(&mut self, puzzle: Puzzle, lives: u32) -> &Round {
        info!(
            length = puzzle.secret().len(),
            riddle = puzzle.prompt().is_some(),
            lives,
            "round started"
        );
        self.round.insert(Round::new(puzzle, lives))
    }

    /// Picks a puzzle from `bank` with the session's random source and starts it.
    pub fn start_from_bank(&mut self, bank: &PuzzleBank, difficulty: Difficulty) -> &Round {
        let puzzle = bank.choose(&mut self.rng).clone();
        self.start_round(puzzle, difficulty.lives())
    }

    /// Drops the current round without touching the score.
    pub fn abandon_round(&mut self) {
        if self.round.take().is_some_and(|r| !r.outcome().is_over()) {
            debug!("round abandoned");
        }
    }

    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult, GuessError> {
        let round = self.round.as_mut().ok_or(GuessError::NoActiveRound)?;
        let update = round.guess(raw, &mut self.rng)?;

        let points = match update.outcome {
            RoundOutcome::Won => {
                let points = compute_win_score(round.lives_remaining());
                self.score = self.score.saturating_add(points);
                info!(points, score = self.score, "round won");
                Some(points)
            }
            RoundOutcome::Lost => {
                self.score = 0;
                info!(secret = round.secret(), "round lost");
                None
            }
            RoundOutcome::Ongoing => None,
        };

        Ok(GuessResult {
            guess: raw.trim().to_lowercase(),
            kind: update.kind,
            clue: round.clue_string(),
            lives_remaining: round.lives_remaining(),
            wrong_guesses: round.wrong_guesses().to_vec(),
            hint: update.hint,
            outcome: update.outcome,
            points,
            score: self.score,
        })
    }
}
