/// Screen interface for the terminal front end
use anyhow::Result;
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;

use crate::games::hangman::{RngSource, Session, SourcePaths};

pub type GameSession = Session<RngSource<StdRng>>;

/// Everything the screens share: the player's session and where puzzles come from.
pub struct Context {
    pub session: GameSession,
    pub sources: SourcePaths,
}

impl Context {
    pub fn new(session: GameSession, sources: SourcePaths) -> Self {
        Self { session, sources }
    }
}

/// What the engine should do after a key press.
pub enum Transition {
    Stay,
    Switch(Box<dyn Screen>),
    Quit,
}

/// One full-window view. Screens never touch the terminal directly; the
/// engine draws them and feeds them key presses.
pub trait Screen {
    /// React to a key press. Errors end the session.
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Result<Transition>;

    /// Draw the current view into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame, ctx: &Context);
}
