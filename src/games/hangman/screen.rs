use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use tracing::warn;

use crate::core::game::{Context, Screen, Transition};
use crate::core::menu::{GameOverScreen, MenuScreen};
use crate::error::GuessError;
use crate::games::hangman::game::GuessKind;
use crate::games::hangman::renderer::{HangmanRenderer, Notice};
use crate::games::GameMode;

/// Input room beyond the secret's own length.
const INPUT_SLACK: usize = 32;

/// The screen a round is played on. Owns only the text being typed; the
/// round itself lives in the session.
pub struct RoundScreen {
    mode: GameMode,
    input: String,
    notice: Option<Notice>,
}

impl RoundScreen {
    pub fn new(mode: GameMode) -> Self {
        Self { mode, input: String::new(), notice: None }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn submit(&mut self, ctx: &mut Context) -> Result<Transition> {
        let raw = std::mem::take(&mut self.input);
        match ctx.session.submit_guess(&raw) {
            Ok(result) if result.outcome.is_over() => {
                let secret = ctx.session.round().map(|r| r.secret()).unwrap_or_default();
                Ok(Transition::Switch(Box::new(GameOverScreen::new(&result, secret))))
            }
            Ok(result) => {
                self.notice = Some(match (result.hint, result.kind) {
                    (Some(letter), _) => Notice::Hint(letter),
                    (None, GuessKind::Hit) => Notice::Feedback(format!("'{}' is in the word.", result.guess)),
                    (None, GuessKind::Miss) => Notice::Feedback(format!("'{}' is not in the word.", result.guess)),
                    (None, _) => Notice::Feedback(format!("'{}' is not the word.", result.guess)),
                });
                Ok(Transition::Stay)
            }
            Err(GuessError::InvalidInput(_)) => {
                self.notice = Some(Notice::Warning("Please enter a valid letter or word.".to_string()));
                Ok(Transition::Stay)
            }
            Err(err) => {
                warn!(%err, "guess without a live round");
                Ok(Transition::Switch(Box::new(MenuScreen::new())))
            }
        }
    }
}

impl Screen for RoundScreen {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Result<Transition> {
        match key.code {
            KeyCode::Enter => self.submit(ctx),
            KeyCode::Esc => {
                ctx.session.abandon_round();
                Ok(Transition::Switch(Box::new(MenuScreen::new())))
            }
            KeyCode::Backspace => {
                self.input.pop();
                Ok(Transition::Stay)
            }
            KeyCode::Char(c) => {
                // a whole-word guess must always fit
                let limit = ctx
                    .session
                    .round()
                    .map_or(0, |round| round.secret().chars().count())
                    + INPUT_SLACK;
                if self.input.chars().count() < limit {
                    self.input.push(c);
                }
                Ok(Transition::Stay)
            }
            _ => Ok(Transition::Stay),
        }
    }

    fn render(&self, f: &mut Frame, ctx: &Context) {
        let Some(round) = ctx.session.round() else {
            return;
        };
        HangmanRenderer {
            title: self.mode.info().name,
            input: &self.input,
            notice: self.notice.as_ref(),
        }
        .render(f, round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::testing::{key, render_lines, test_context, type_text};
    use crate::games::hangman::{Difficulty, Puzzle, PuzzleBank, RoundOutcome};
    use pretty_assertions::assert_eq;

    fn playing(secret: &str) -> (RoundScreen, Context) {
        let mut ctx = test_context("unused\n", "unused|unused\n");
        ctx.session.start_round(Puzzle::word(secret).unwrap(), 6);
        (RoundScreen::new(GameMode::Word), ctx)
    }

    #[test]
    fn typing_and_submitting_a_letter() {
        let (mut screen, mut ctx) = playing("cat");
        type_text(&mut screen, &mut ctx, "xa");
        screen.handle_key(key(KeyCode::Backspace), &mut ctx).unwrap();
        let next = screen.handle_key(key(KeyCode::Enter), &mut ctx).unwrap();

        assert!(matches!(next, Transition::Stay));
        assert!(screen.input.is_empty());
        assert_eq!(ctx.session.round().unwrap().wrong_guesses(), &['x']);
        assert_eq!(screen.notice(), Some(&Notice::Feedback("'x' is not in the word.".into())));
    }

    #[test]
    fn invalid_guess_warns() {
        let (mut screen, mut ctx) = playing("cat");
        type_text(&mut screen, &mut ctx, "12a");
        screen.handle_key(key(KeyCode::Enter), &mut ctx).unwrap();
        assert!(matches!(screen.notice(), Some(Notice::Warning(_))));
        assert_eq!(ctx.session.round().unwrap().lives_remaining(), 6);
    }

    #[test]
    fn third_miss_shows_hint() {
        let (mut screen, mut ctx) = playing("cat");
        for miss in ["x", "y", "z"] {
            type_text(&mut screen, &mut ctx, miss);
            screen.handle_key(key(KeyCode::Enter), &mut ctx).unwrap();
        }
        assert!(matches!(screen.notice(), Some(Notice::Hint(_))));
    }

    #[test]
    fn solving_opens_game_over() {
        let (mut screen, mut ctx) = playing("cat");
        type_text(&mut screen, &mut ctx, "cat");
        let next = screen.handle_key(key(KeyCode::Enter), &mut ctx).unwrap();
        assert!(matches!(next, Transition::Switch(_)));
        assert_eq!(ctx.session.score(), 60);
    }

    #[test]
    fn very_long_word_can_be_typed_in_full() {
        let secret = "pneumonoultramicroscopicsilicovolcanoconiosis";
        let (mut screen, mut ctx) = playing(secret);
        type_text(&mut screen, &mut ctx, secret);
        assert_eq!(screen.input, secret);

        let next = screen.handle_key(key(KeyCode::Enter), &mut ctx).unwrap();
        assert!(matches!(next, Transition::Switch(_)));
        let round = ctx.session.round().unwrap();
        assert_eq!(round.outcome(), RoundOutcome::Won);
        assert_eq!(round.lives_remaining(), 6);
    }

    #[test]
    fn input_stops_growing_past_the_limit() {
        let (mut screen, mut ctx) = playing("cat");
        type_text(&mut screen, &mut ctx, &"x".repeat(100));
        assert_eq!(screen.input.chars().count(), 3 + INPUT_SLACK);
    }

    #[test]
    fn escape_abandons_the_round() {
        let (mut screen, mut ctx) = playing("cat");
        screen.handle_key(key(KeyCode::Esc), &mut ctx).unwrap();
        assert!(ctx.session.round().is_none());
    }

    #[test]
    fn riddle_round_renders_prompt_and_clue() {
        let mut ctx = test_context("unused\n", "What has a neck but no head?|bottle\n");
        let bank = PuzzleBank::load(GameMode::Riddle, &ctx.sources).unwrap();
        ctx.session.start_from_bank(&bank, Difficulty::Hard);
        let mut screen = RoundScreen::new(GameMode::Riddle);
        type_text(&mut screen, &mut ctx, "q");
        screen.handle_key(key(KeyCode::Enter), &mut ctx).unwrap();

        let text = render_lines(&screen, &ctx, 70, 30).join("\n");
        assert!(text.contains("Riddle Guessing Game"));
        assert!(text.contains("Riddle: What has a neck but no head?"));
        assert!(text.contains("? ? ? ? ? ?"));
        assert!(text.contains("Incorrect Guesses: q"));
        assert!(text.contains("Lives:"));
    }
}
