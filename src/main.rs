//! Word Arcade - CLI
//!
//! Menu-driven console games with persistent play history.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};
use word_arcade::{
    commands::{clear_history, play_and_record, run_menu, show_history},
    core::Word,
    games::{
        Game, GameKind,
        word_guess::{MaxAttempts, SecretSource, WordGuessConfig},
    },
    history::HistoryStore,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_arcade",
    about = "Console mini-games with a persistent play history",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// History file
    #[arg(
        long,
        global = true,
        env = "WORD_ARCADE_HISTORY",
        default_value = "game_history.json"
    )]
    history: PathBuf,

    /// Attempts per word guess session: 6 or 10
    #[arg(short, long, global = true, default_value = "10")]
    attempts: MaxAttempts,

    /// Use this secret instead of a random one
    #[arg(long, global = true, conflicts_with = "wordlist")]
    secret: Option<String>,

    /// Draw secrets from this file (one word per line) instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for reproducible secret draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive game menu (default)
    Menu,

    /// Play a single game and record the result
    Play {
        /// Game name: word, snake, sudoku
        game: String,
    },

    /// List available games
    List,

    /// Show play history
    History,

    /// Clear play history
    Clear,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build the word guess config from CLI flags
fn word_guess_config(cli: &Cli) -> Result<WordGuessConfig> {
    let secret = if let Some(text) = &cli.secret {
        let word = Word::new(text).with_context(|| format!("Invalid secret '{text}'"))?;
        SecretSource::Fixed(word)
    } else if let Some(path) = &cli.wordlist {
        let words = load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        if words.is_empty() {
            bail!("Word list {} has no valid 5-letter words", path.display());
        }
        SecretSource::Random {
            words,
            seed: cli.seed,
        }
    } else {
        SecretSource::embedded(cli.seed)
    };

    Ok(WordGuessConfig::new(cli.attempts, secret))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

/// Dispatch a parsed command line
///
/// Only commands that start a game read `--secret` and `--wordlist`.
fn run(cli: Cli) -> Result<()> {
    // Default to the menu if no command given
    let command = cli.command.clone().unwrap_or(Commands::Menu);

    match command {
        Commands::Menu => run_menu_command(word_guess_config(&cli)?, &cli.history),
        Commands::Play { game } => run_play_command(&game, word_guess_config(&cli)?, &cli.history),
        Commands::List => {
            list_games(word_guess_config(&cli)?);
            Ok(())
        }
        Commands::History => {
            let store = HistoryStore::load(&cli.history);
            show_history(&store, &mut io::stdout().lock())?;
            Ok(())
        }
        Commands::Clear => {
            let mut store = HistoryStore::load(&cli.history);
            clear_history(&mut store, &cli.history, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn run_menu_command(config: WordGuessConfig, history_path: &Path) -> Result<()> {
    let mut store = HistoryStore::load(history_path);
    let mut games = GameKind::all(config);

    run_menu(
        &mut games,
        &mut store,
        history_path,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )
}

fn run_play_command(name: &str, config: WordGuessConfig, history_path: &Path) -> Result<()> {
    let Some(mut game) = GameKind::from_name(name, config) else {
        bail!("Unknown game '{name}'. Run `word_arcade list` to see available games.");
    };

    let mut store = HistoryStore::load(history_path);
    play_and_record(
        &mut game,
        &mut store,
        history_path,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )
    .with_context(|| format!("{} did not finish", game.name()))?;
    Ok(())
}

fn list_games(config: WordGuessConfig) {
    println!("Available games:");
    for game in GameKind::all(config) {
        println!("  {:<10} - {}", game.name(), game.description());
    }
}
