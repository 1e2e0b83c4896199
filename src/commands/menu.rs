//! Interactive menu
//!
//! Line-based game picker. Plays the chosen game, records the result and
//! saves the history after every game.

use super::history::{clear_history, show_history};
use super::play::play_and_record;
use crate::games::{Game, GameError, GameKind};
use crate::history::HistoryStore;
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};
use std::path::Path;

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Index into the game list
    Play(usize),
    History,
    Clear,
    Quit,
}

/// Parse a menu selection
///
/// Accepts a 1-based game number, a game name, or `h`/`c`/`q`
/// (also `history`/`clear`/`quit`/`exit`), ignoring case.
#[must_use]
pub fn parse_choice(raw: &str, games: &[GameKind]) -> Option<MenuChoice> {
    let choice = raw.trim();

    match choice.to_ascii_lowercase().as_str() {
        "h" | "history" => return Some(MenuChoice::History),
        "c" | "clear" => return Some(MenuChoice::Clear),
        "q" | "quit" | "exit" => return Some(MenuChoice::Quit),
        _ => {}
    }

    if let Ok(number) = choice.parse::<usize>() {
        return (1..=games.len())
            .contains(&number)
            .then(|| MenuChoice::Play(number - 1));
    }

    games
        .iter()
        .position(|game| game.name().eq_ignore_ascii_case(choice))
        .map(MenuChoice::Play)
}

/// Run the menu until the user quits or input ends
///
/// # Errors
///
/// Returns an error on an I/O failure or a game error other than input ending.
pub fn run_menu(
    games: &mut [GameKind],
    store: &mut HistoryStore,
    history_path: &Path,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<()> {
    let mut line = String::new();

    loop {
        print_menu(games, output)?;
        write!(output, "Enter number or name: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let Some(choice) = parse_choice(&line, games) else {
            writeln!(output, "{}", "Invalid selection.".red())?;
            continue;
        };

        match choice {
            MenuChoice::Play(index) => {
                let game = &mut games[index];
                match play_and_record(game, store, history_path, input, output) {
                    Ok(report) => info!("played {} (score {:?})", report.game, report.score),
                    Err(GameError::InputClosed) => {
                        writeln!(output, "\nInput closed, leaving the menu.")?;
                        return Ok(());
                    }
                    Err(err) => {
                        return Err(err).with_context(|| format!("{} failed", game.name()));
                    }
                }
            }
            MenuChoice::History => show_history(store, output)?,
            MenuChoice::Clear => {
                clear_history(store, history_path, output)?;
            }
            MenuChoice::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

fn print_menu(games: &[GameKind], output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output, "\n{}", "Select a game:".bright_cyan().bold())?;
    for (idx, game) in games.iter().enumerate() {
        writeln!(
            output,
            "  {}. {:<10} - {}",
            idx + 1,
            game.name(),
            game.description()
        )?;
    }
    writeln!(output, "  h. Show history")?;
    writeln!(output, "  c. Clear history")?;
    writeln!(output, "  q. Quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::games::WordGuessConfig;
    use std::env;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn games() -> Vec<GameKind> {
        GameKind::all(WordGuessConfig::fixed(Word::new("APPLE").unwrap()))
    }

    fn temp_path(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "word_arcade_menu_{name}_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    fn run(lines: &str, store: &mut HistoryStore, path: &Path) -> String {
        let mut games = games();
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(&mut games, store, path, &mut input, &mut output).unwrap();
        String::from_utf8_lossy(&output).into_owned()
    }

    #[test]
    fn parse_choice_numbers_names_and_letters() {
        let games = games();
        assert_eq!(parse_choice("1\n", &games), Some(MenuChoice::Play(0)));
        assert_eq!(parse_choice("3", &games), Some(MenuChoice::Play(2)));
        assert_eq!(parse_choice("snake", &games), Some(MenuChoice::Play(1)));
        assert_eq!(parse_choice("Word Guess", &games), Some(MenuChoice::Play(0)));
        assert_eq!(parse_choice("H", &games), Some(MenuChoice::History));
        assert_eq!(parse_choice("clear", &games), Some(MenuChoice::Clear));
        assert_eq!(parse_choice(" q ", &games), Some(MenuChoice::Quit));
        assert_eq!(parse_choice("0", &games), None);
        assert_eq!(parse_choice("4", &games), None);
        assert_eq!(parse_choice("chess", &games), None);
    }

    #[test]
    fn plays_records_and_shows_history() {
        let path = temp_path("play");
        let mut store = HistoryStore::new();
        let text = run("1\nMANGO\nAPPLE\n2\nh\nq\n", &mut store, &path);
        let loaded = HistoryStore::load(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(store.get("Word Guess").unwrap().scores(), &[9]);
        assert_eq!(store.get("Snake").unwrap().times_played(), 1);
        assert_eq!(loaded, store);
        assert!(text.contains("Word Guess - Played: 1, Avg Score: 9.00, Last Score: 9"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn invalid_selection_is_reported() {
        let path = temp_path("invalid");
        let mut store = HistoryStore::new();
        let text = run("9\nq\n", &mut store, &path);
        assert!(text.contains("Invalid selection."));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_store_and_file() {
        let path = temp_path("clear");
        let mut store = HistoryStore::new();
        store.record_play_at("Word Guess", Some(5), 1);
        store.save(&path).unwrap();

        run("c\nq\n", &mut store, &path);
        let loaded = HistoryStore::load(&path);
        let _ = fs::remove_file(&path);

        assert!(store.is_empty());
        assert!(loaded.is_empty());
    }

    #[test]
    fn input_ending_mid_game_leaves_menu() {
        let path = temp_path("eof");
        let mut store = HistoryStore::new();
        let text = run("1\nMANGO\n", &mut store, &path);
        assert!(text.contains("Input closed"));
        assert!(store.is_empty());
    }

    #[test]
    fn input_ending_at_prompt_leaves_menu() {
        let path = temp_path("eof_prompt");
        let mut store = HistoryStore::new();
        run("", &mut store, &path);
        assert!(store.is_empty());
    }
}
