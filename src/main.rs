//! Wordle Tiles - CLI
//!
//! Play Wordle in the terminal, in a TUI or line by line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_tiles::{
    commands::{run_simple, score_guess},
    config::TargetSource,
    interactive::{App, run_tui},
    logging::{LogSink, init_logging},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_tiles",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fixed target word (default: random pick from the word list)
    #[arg(short, long, global = true, env = "WORDLE_TARGET")]
    target: Option<String>,

    /// File with one candidate target per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Seed for reproducible random targets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log every intent at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score one guess against one target
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        #[arg(value_name = "TARGET")]
        answer: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let owns_terminal = matches!(command, Commands::Play);
    init_logging(
        LogSink::for_mode(owns_terminal, cli.log_file.as_deref()),
        cli.verbose,
    )?;

    match command {
        Commands::Score { guess, answer } => run_score_command(&guess, &answer),
        Commands::Play | Commands::Simple => {
            let mut targets = TargetSource::resolve(
                cli.target.as_deref(),
                cli.word_list.as_deref(),
                cli.seed,
            )?;
            if owns_terminal {
                run_play_command(targets)
            } else {
                run_simple(&mut targets)
            }
        }
    }
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target)?;
    info!(guess = %result.guess, feedback = %result.feedback, "scored");
    print_score_result(&result.guess, &result.target, result.feedback);
    Ok(())
}

fn run_play_command(targets: TargetSource) -> Result<()> {
    let app = App::new(targets);
    run_tui(app)
}
