use crate::core::game::{Context, Screen, Transition};
use crate::core::menu::MenuScreen;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Engine {
    ctx: Context,
    screen: Box<dyn Screen>,
}

impl Engine {
    pub fn new(ctx: Context) -> Self {
        Self { ctx, screen: Box::new(MenuScreen::new()) }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<Context> {
        loop {
            let (screen, ctx) = (&self.screen, &self.ctx);
            terminal.draw(|f| screen.render(f, ctx))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.screen.handle_key(key, &mut self.ctx)? {
                Transition::Stay => {}
                Transition::Switch(next) => self.screen = next,
                Transition::Quit => break,
            }
        }

        tracing::info!(score = self.ctx.session.score(), "session finished");
        Ok(self.ctx)
    }
}
