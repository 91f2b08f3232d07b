/// Round rendering - pure, reads the round and never mutates it
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::games::hangman::game::Round;

/// One-line message under the input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Hint(char),
    Feedback(String),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Warning(text) | Notice::Feedback(text) => text.clone(),
            Notice::Hint(letter) => format!("Here's a clue! The word contains the letter: '{}'.", letter),
        }
    }

    fn style(&self) -> Style {
        match self {
            Notice::Warning(_) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Notice::Hint(_) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Notice::Feedback(_) => Style::default(),
        }
    }
}

pub fn clue_text(clue: &[char]) -> String {
    clue.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
}

/// Most hearts drawn; larger counts get a number after them.
pub const MAX_HEARTS: u32 = 20;

pub fn hearts(lives: u32) -> String {
    let shown = "❤".repeat(lives.min(MAX_HEARTS) as usize);
    if lives > MAX_HEARTS {
        format!("{} ({})", shown, lives)
    } else {
        shown
    }
}

pub fn incorrect_text(wrong: &[char]) -> String {
    if wrong.is_empty() {
        return "None".to_string();
    }
    wrong.iter().map(char::to_string).collect::<Vec<_>>().join(", ")
}

/// Draws one round: riddle, clue, lives, misses and the input line.
pub struct HangmanRenderer<'a> {
    pub title: &'a str,
    pub input: &'a str,
    pub notice: Option<&'a Notice>,
}

impl HangmanRenderer<'_> {
    pub fn render(&self, f: &mut Frame, round: &Round) {
        let riddle_height = if round.puzzle().prompt().is_some() { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(riddle_height),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(self.title)
                .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL))
                .centered(),
            chunks[0],
        );

        if let Some(prompt) = round.puzzle().prompt() {
            f.render_widget(
                Paragraph::new(format!("Riddle: {}", prompt))
                    .style(Style::default().fg(Color::LightMagenta))
                    .wrap(Wrap { trim: true })
                    .centered(),
                chunks[1],
            );
        }

        f.render_widget(
            Paragraph::new(clue_text(round.clue()))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL))
                .centered(),
            chunks[2],
        );

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Lives: "),
                Span::styled(hearts(round.lives_remaining()), Style::default().fg(Color::Red)),
            ])),
            chunks[3],
        );

        f.render_widget(
            Paragraph::new(format!("Incorrect Guesses: {}", incorrect_text(round.wrong_guesses())))
                .style(Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL)),
            chunks[4],
        );

        f.render_widget(
            Paragraph::new(format!("> {}", self.input))
                .block(Block::default().title(" Your guess ").borders(Borders::ALL)),
            chunks[5],
        );

        if let Some(notice) = self.notice {
            f.render_widget(Paragraph::new(notice.text()).style(notice.style()), chunks[6]);
        }

        f.render_widget(
            Paragraph::new("[Enter] Submit Guess  [Esc] Main Menu").centered(),
            chunks[8],
        );
    }
}
