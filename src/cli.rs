use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

use crate::core::engine::Engine;
use crate::core::game::{Context, GameSession};
use crate::games::get_all_games;
use crate::games::hangman::source::{DEFAULT_RIDDLES_PATH, DEFAULT_WORDS_PATH};
use crate::games::hangman::{Difficulty, PuzzleBank, RngSource, Session, SourcePaths};
use crate::games::GameMode;
use crate::logging::{self, LogTarget};
use crate::script::run_script;

#[derive(Parser, Debug)]
#[command(name = "wordriddle")]
#[command(about = "🧩 Word & riddle guessing game for the terminal")]
#[command(version)]
pub struct Cli {
    /// Word list, one word per line
    #[arg(long, global = true, default_value = DEFAULT_WORDS_PATH)]
    pub words: PathBuf,

    /// Riddle file, one `riddle|answer` per line
    #[arg(long, global = true, default_value = DEFAULT_RIDDLES_PATH)]
    pub riddles: PathBuf,

    /// Seed for puzzle and hint selection (random if omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play in the terminal UI (default)
    Play,
    /// Play one round from stdin, printing JSON events to stdout
    Script {
        /// Which game to play
        #[arg(short, long, value_enum, default_value_t = GameMode::Word)]
        mode: GameMode,

        /// easy, medium or hard; anything else plays as hard
        #[arg(short, long, default_value = "hard")]
        difficulty: String,
    },
    /// List available game modes
    Modes,
}

impl Cli {
    fn sources(&self) -> SourcePaths {
        SourcePaths {
            words: self.words.clone(),
            riddles: self.riddles.clone(),
        }
    }

    fn session(&self) -> GameSession {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Session::new(RngSource(rng))
    }

    fn log_target(&self, fallback: LogTarget) -> LogTarget {
        self.log_file.clone().map(LogTarget::File).unwrap_or(fallback)
    }
}

pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command.clone().unwrap_or(Commands::Play) {
        Commands::Play => {
            logging::init(cli.log_target(LogTarget::Off))?;
            play(Context::new(cli.session(), cli.sources()))
        }

        Commands::Script { mode, difficulty } => {
            logging::init(cli.log_target(LogTarget::Stderr))?;
            let bank = PuzzleBank::load(mode, &cli.sources())
                .with_context(|| format!("failed to load puzzles for {}", mode.info().name))?;
            let mut session = cli.session();
            session.start_from_bank(&bank, Difficulty::from_input(&difficulty));
            run_script(&mut session, mode, io::stdin().lock(), io::stdout().lock())
        }

        Commands::Modes => {
            println!("🎮 Available games:");
            println!();
            for (_, info) in get_all_games() {
                println!("📦 {} ({})", info.name, info.id);
                println!("   {}", info.description);
                println!();
            }
            Ok(())
        }
    }
}

fn play(ctx: Context) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = Engine::new(ctx).run(&mut terminal);
    ratatui::restore();

    let ctx = result?;
    println!("👋 Goodbye! Final score: {}", ctx.session.score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_play() {
        let cli = Cli::try_parse_from(["wordriddle"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.sources(), SourcePaths::default());
        assert_eq!(cli.log_target(LogTarget::Off), LogTarget::Off);
    }

    #[test]
    fn script_options() {
        let cli = Cli::try_parse_from([
            "wordriddle", "script", "--mode", "riddle", "-d", "Easy", "--riddles", "r.txt", "--seed", "3",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Script { mode: GameMode::Riddle, difficulty: "Easy".into() })
        );
        assert_eq!(cli.riddles, PathBuf::from("r.txt"));
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn seeded_sessions_agree() {
        let cli = Cli::try_parse_from(["wordriddle", "--seed", "11"]).unwrap();
        let bank = PuzzleBank::parse_words("alpha\nbravo\ncharlie\ndelta\necho\n").unwrap();
        let picks: Vec<String> = (0..3)
            .map(|_| cli.session().start_from_bank(&bank, Difficulty::Hard).secret().to_string())
            .collect();
        assert!(picks.iter().all(|p| p == &picks[0]));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["wordriddle", "script", "--mode", "pong"]).is_err());
    }
}
