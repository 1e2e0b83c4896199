//! Word guess game
//!
//! Guess a secret 5-letter word. Each wrong guess shows the letters it shares
//! with the secret; the score is the number of attempts left when the word is
//! found, or 0 when the attempts run out.

mod config;
mod session;

pub use config::{MaxAttempts, SecretSource, WordGuessConfig};
pub use session::{Session, SessionState, TurnOutcome};

use super::{Game, GameError};
use crate::core::Word;
use crate::output::display::{
    write_invalid_guess, write_lose_banner, write_miss, write_win_banner, write_word_guess_intro,
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};

/// Display name, also the history key
pub const WORD_GUESS_NAME: &str = "Word Guess";

/// The word guess game
///
/// Holds its random source so repeated sessions in one run draw fresh secrets.
pub struct WordGuessGame {
    config: WordGuessConfig,
    rng: StdRng,
}

impl WordGuessGame {
    #[must_use]
    pub fn new(config: WordGuessConfig) -> Self {
        let rng = match &config.secret {
            SecretSource::Random {
                seed: Some(seed), ..
            } => StdRng::seed_from_u64(*seed),
            _ => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// Pick the secret for the next session
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if the random source has no words.
    pub fn choose_secret(&mut self) -> Result<Word, GameError> {
        match &self.config.secret {
            SecretSource::Fixed(word) => Ok(word.clone()),
            SecretSource::Random { words, .. } => words
                .choose(&mut self.rng)
                .cloned()
                .ok_or(GameError::EmptyWordList),
        }
    }

    /// Run one session over the given input and output
    ///
    /// Reads exactly one line per iteration.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` if input ends before the session is
    /// decided, or `GameError::Io` on a read/write failure.
    pub fn run_session(
        &self,
        secret: Word,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<u32, GameError> {
        let mut session = Session::new(secret, self.config.max_attempts);
        let mut line = String::new();

        loop {
            write!(output, "Guess the word: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!(
                    "input closed after {} counted guesses",
                    session.guesses_made()
                );
                return Err(GameError::InputClosed);
            }

            match session.submit(&line) {
                TurnOutcome::Invalid(err) => write_invalid_guess(output, &err)?,
                TurnOutcome::Miss {
                    common,
                    guesses_made,
                    max_attempts,
                } => write_miss(output, &common, guesses_made, max_attempts)?,
                TurnOutcome::Won { score } => {
                    info!("word guess won with {score} attempts left");
                    write_win_banner(output, score)?;
                    return Ok(score);
                }
                TurnOutcome::Lost { common } => {
                    info!("word guess lost, secret was {}", session.secret());
                    write_lose_banner(output, &common, session.secret())?;
                    return Ok(0);
                }
            }
        }
    }
}

impl Default for WordGuessGame {
    fn default() -> Self {
        Self::new(WordGuessConfig::default())
    }
}

impl Game for WordGuessGame {
    fn name(&self) -> &str {
        WORD_GUESS_NAME
    }

    fn play(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Option<u32>, GameError> {
        let secret = self.choose_secret()?;
        debug!(
            "starting word guess session ({} attempts)",
            self.config.max_attempts
        );

        write_word_guess_intro(output, self.config.max_attempts.get())?;
        self.run_session(secret, input, output).map(Some)
    }
}
