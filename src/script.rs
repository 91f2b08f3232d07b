//! Line-oriented play: one guess per input line, one JSON object per output line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::error::GuessError;
use crate::games::hangman::{GuessResult, RandomSource, RoundOutcome, Session};
use crate::games::GameMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Start {
        mode: GameMode,
        prompt: Option<String>,
        clue: String,
        lives: u32,
    },
    Guess(GuessResult),
    Rejected {
        input: String,
        error: String,
    },
    End {
        outcome: RoundOutcome,
        secret: String,
        score: u32,
    },
}

fn emit(out: &mut impl Write, event: &ScriptEvent) -> Result<()> {
    serde_json::to_writer(&mut *out, event).context("failed to encode event")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Plays the session's current round from `input` until it resolves or the
/// input runs out.
pub fn run_script<R: RandomSource>(
    session: &mut Session<R>,
    mode: GameMode,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    let round = session.round().ok_or(GuessError::NoActiveRound)?;
    emit(&mut out, &ScriptEvent::Start {
        mode,
        prompt: round.puzzle().prompt().map(str::to_string),
        clue: round.clue_string(),
        lives: round.lives_remaining(),
    })?;

    for line in input.lines() {
        let line = line.context("failed to read guess")?;
        match session.submit_guess(&line) {
            Ok(result) => {
                let outcome = result.outcome;
                emit(&mut out, &ScriptEvent::Guess(result))?;
                if outcome.is_over() {
                    let secret = session.round().map(|r| r.secret().to_string()).unwrap_or_default();
                    emit(&mut out, &ScriptEvent::End { outcome, secret, score: session.score() })?;
                    break;
                }
            }
            Err(err) => emit(&mut out, &ScriptEvent::Rejected { input: line, error: err.to_string() })?,
        }
    }
    Ok(())
}
