//! Wordle Tiers - CLI
//!
//! Wordle with difficulty tiers in TUI and simple CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_tiers::{
    commands::{check_words, run_simple, run_stats},
    game::Difficulty,
    interactive::{App, run_tui},
    output::print_check_result,
    stats::{FileStatsStore, StatisticsTracker},
    wordlists::{DirectoryWords, EmbeddedWords, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_tiers",
    about = "Wordle with easy, medium and hard tiers of 3 to 9 letter words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of word lists laid out as <difficulty>/<length>.txt (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Statistics file (default: platform data directory)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Seed for target selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Skip the difficulty menu
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },

    /// Simple CLI mode (line-oriented game without TUI)
    Simple {
        /// Play every game on this tier instead of asking
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },

    /// Show persisted statistics
    Stats {
        /// Zero all statistics first
        #[arg(long)]
        reset: bool,
    },

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();

    let source: Box<dyn WordSource> = match &cli.words {
        Some(dir) => Box::new(DirectoryWords::new(dir)),
        None => Box::new(EmbeddedWords),
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { difficulty: None });

    match command {
        Commands::Play { difficulty } => {
            let tracker = StatisticsTracker::load(stats_store(cli.stats_file.as_ref()));
            let mut app = App::new(source.as_ref(), tracker, rng);
            if let Some(difficulty) = difficulty {
                app.start_game(difficulty);
            }
            run_tui(app)
        }
        Commands::Simple { difficulty } => {
            let mut tracker = StatisticsTracker::load(stats_store(cli.stats_file.as_ref()));
            let mut rng = rng;
            run_simple(source.as_ref(), &mut tracker, &mut rng, difficulty)
        }
        Commands::Stats { reset } => {
            let mut tracker = StatisticsTracker::load(stats_store(cli.stats_file.as_ref()));
            run_stats(&mut tracker, reset)
        }
        Commands::Check { guess, target } => {
            let result = check_words(&guess, &target)?;
            print_check_result(&result.guess, &result.target, &result.feedback);
            Ok(())
        }
    }
}

fn stats_store(path: Option<&PathBuf>) -> FileStatsStore {
    path.map_or_else(FileStatsStore::new, FileStatsStore::with_path)
}
