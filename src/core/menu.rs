use anyhow::{Context as _, Result};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::core::game::{Context, Screen, Transition};
use crate::games::hangman::{Difficulty, GuessResult, PuzzleBank, RoundOutcome, RoundScreen};
use crate::games::{get_all_games, GameMode};

const TITLE: &str = " WORD & RIDDLE GUESSING GAME ";

fn highlight(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn move_selection(index: usize, len: usize, code: KeyCode) -> usize {
    match code {
        KeyCode::Up => index.saturating_sub(1),
        KeyCode::Down => (index + 1).min(len - 1),
        _ => index,
    }
}

/// Fixed-height box centered horizontally and vertically in `area`.
fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height), Constraint::Fill(1)])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(rows[1])[1]
}

/// Main menu: pick a game mode or leave. Shows the running score.
pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn entries() -> Vec<(Option<GameMode>, &'static str)> {
        let mut entries: Vec<_> = get_all_games()
            .into_iter()
            .map(|(mode, info)| (Some(mode), info.name))
            .collect();
        entries.push((None, "Exit"));
        entries
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Result<Transition> {
        let entries = Self::entries();
        match key.code {
            KeyCode::Enter => Ok(match entries[self.selected].0 {
                Some(mode) => Transition::Switch(Box::new(DifficultyScreen::new(mode))),
                None => Transition::Quit,
            }),
            KeyCode::Char('q') | KeyCode::Esc => Ok(Transition::Quit),
            code => {
                self.selected = move_selection(self.selected, entries.len(), code);
                Ok(Transition::Stay)
            }
        }
    }

    fn render(&self, f: &mut Frame, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(TITLE)
                .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL))
                .centered(),
            chunks[0],
        );

        let items: Vec<ListItem> = Self::entries()
            .iter()
            .enumerate()
            .map(|(i, (_, name))| {
                ListItem::new(format!(" » {}", name)).style(highlight(i == self.selected))
            })
            .collect();
        f.render_widget(
            List::new(items).block(Block::default().title(" MENU ").borders(Borders::ALL)),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new(format!("Your Score: {}", ctx.session.score()))
                .style(Style::default().fg(Color::White).bg(Color::Green).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL))
                .centered(),
            chunks[2],
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Select  [Q] Quit").centered(),
            chunks[3],
        );
    }
}

/// Asked before every round. Loading the puzzles happens here so a missing
/// file surfaces before the round screen opens.
pub struct DifficultyScreen {
    mode: GameMode,
    selected: usize,
}

impl DifficultyScreen {
    pub fn new(mode: GameMode) -> Self {
        // medium first, as the middle of the list
        Self { mode, selected: 1 }
    }
}

impl Screen for DifficultyScreen {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Result<Transition> {
        match key.code {
            KeyCode::Enter => {
                let difficulty = Difficulty::ALL[self.selected];
                let bank = PuzzleBank::load(self.mode, &ctx.sources)
                    .with_context(|| format!("failed to load puzzles for {}", self.mode.info().name))?;
                ctx.session.start_from_bank(&bank, difficulty);
                Ok(Transition::Switch(Box::new(RoundScreen::new(self.mode))))
            }
            KeyCode::Esc => Ok(Transition::Switch(Box::new(MenuScreen::new()))),
            code => {
                self.selected = move_selection(self.selected, Difficulty::ALL.len(), code);
                Ok(Transition::Stay)
            }
        }
    }

    fn render(&self, f: &mut Frame, _ctx: &Context) {
        let area = centered(f.area(), 50, Difficulty::ALL.len() as u16 + 4);
        let items: Vec<ListItem> = Difficulty::ALL
            .iter()
            .enumerate()
            .map(|(i, d)| {
                ListItem::new(format!(" » {:<7} {} lives", d.label(), d.lives()))
                    .style(highlight(i == self.selected))
            })
            .collect();

        f.render_widget(
            List::new(items).block(
                Block::default()
                    .title(format!(" {} - Difficulty ", self.mode.info().name))
                    .title_bottom(" [Enter] Start  [Esc] Back ")
                    .borders(Borders::ALL),
            ),
            area,
        );
    }
}

/// End-of-round dialog. Any key goes back to the menu.
pub struct GameOverScreen {
    message: String,
    won: bool,
}

impl GameOverScreen {
    pub fn new(result: &GuessResult, secret: &str) -> Self {
        let won = result.outcome == RoundOutcome::Won;
        let message = if won {
            format!(
                "You won! The word was '{}'.\nYou earned {} points!\nYour Score: {}",
                secret,
                result.points.unwrap_or_default(),
                result.score
            )
        } else {
            format!("You lost! The word was '{}'.", secret)
        };
        Self { message, won }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Screen for GameOverScreen {
    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut Context) -> Result<Transition> {
        Ok(Transition::Switch(Box::new(MenuScreen::new())))
    }

    fn render(&self, f: &mut Frame, _ctx: &Context) {
        let area = centered(f.area(), 60, 7);
        let color = if self.won { Color::Green } else { Color::Red };
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(self.message.as_str())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true })
                .centered()
                .block(
                    Block::default()
                        .title(" GAME OVER ")
                        .title_bottom(" press any key ")
                        .borders(Borders::ALL),
                ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::testing::{key, render_lines, test_context};
    use crate::games::hangman::GuessKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_navigation_is_clamped() {
        let mut ctx = test_context("apple\n", "riddle|answer\n");
        let mut menu = MenuScreen::new();
        menu.handle_key(key(KeyCode::Up), &mut ctx).unwrap();
        assert_eq!(menu.selected, 0);
        for _ in 0..5 {
            menu.handle_key(key(KeyCode::Down), &mut ctx).unwrap();
        }
        assert_eq!(menu.selected, 2);
        assert!(matches!(menu.handle_key(key(KeyCode::Enter), &mut ctx).unwrap(), Transition::Quit));
    }

    #[test]
    fn menu_shows_modes_and_score() {
        let ctx = test_context("apple\n", "riddle|answer\n");
        let lines = render_lines(&MenuScreen::new(), &ctx, 60, 20).join("\n");
        assert!(lines.contains("Word Guessing Game"));
        assert!(lines.contains("Riddle Guessing Game"));
        assert!(lines.contains("Your Score: 0"));
    }

    #[test]
    fn choosing_difficulty_starts_a_round() {
        let mut ctx = test_context("apple\n", "riddle|answer\n");
        let mut screen = DifficultyScreen::new(GameMode::Word);
        screen.handle_key(key(KeyCode::Up), &mut ctx).unwrap();
        let next = screen.handle_key(key(KeyCode::Enter), &mut ctx).unwrap();
        assert!(matches!(next, Transition::Switch(_)));

        let round = ctx.session.round().unwrap();
        assert_eq!(round.secret(), "apple");
        assert_eq!(round.lives_remaining(), Difficulty::Easy.lives());
    }

    #[test]
    fn missing_source_is_fatal() {
        let mut ctx = test_context("apple\n", "riddle|answer\n");
        ctx.sources.riddles = std::env::temp_dir().join("wordriddle-no-such-riddles.txt");
        let mut screen = DifficultyScreen::new(GameMode::Riddle);
        let err = screen.handle_key(key(KeyCode::Enter), &mut ctx).err().unwrap();
        assert!(format!("{err:#}").contains("Riddle Guessing Game"));
        assert!(ctx.session.round().is_none());
    }

    #[test]
    fn game_over_messages() {
        let mut result = GuessResult {
            guess: "cat".into(),
            kind: GuessKind::Solved,
            clue: "cat".into(),
            lives_remaining: 4,
            wrong_guesses: vec![],
            hint: None,
            outcome: RoundOutcome::Won,
            points: Some(40),
            score: 70,
        };
        assert_eq!(
            GameOverScreen::new(&result, "cat").message(),
            "You won! The word was 'cat'.\nYou earned 40 points!\nYour Score: 70"
        );

        result.outcome = RoundOutcome::Lost;
        result.points = None;
        assert_eq!(GameOverScreen::new(&result, "cat").message(), "You lost! The word was 'cat'.");
    }
}
