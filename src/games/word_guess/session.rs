//! Word guess session state machine
//!
//! A session starts in `AwaitingGuess` with the full attempt budget and ends in
//! `Won` or `Lost`. Invalid input never costs an attempt.

use super::MaxAttempts;
use crate::core::{CommonLetters, Word, WordError};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Won,
    Lost,
}

impl SessionState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Result of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input rejected; no attempt consumed
    Invalid(WordError),
    /// Valid wrong guess with attempts left
    Miss {
        common: CommonLetters,
        guesses_made: u32,
        max_attempts: u32,
    },
    /// Correct guess; score is the attempts left going into this round
    Won { score: u32 },
    /// Last attempt spent on a wrong guess
    Lost { common: CommonLetters },
}

/// One play session against a single secret
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    max_attempts: u32,
    attempts_remaining: u32,
    state: SessionState,
}

impl Session {
    #[must_use]
    pub const fn new(secret: Word, max_attempts: MaxAttempts) -> Self {
        Self {
            secret,
            max_attempts: max_attempts.get(),
            attempts_remaining: max_attempts.get(),
            state: SessionState::AwaitingGuess,
        }
    }

    /// Submit one raw line of input
    ///
    /// Submitting to a finished session changes nothing and repeats the final
    /// outcome.
    ///
    /// # Examples
    /// ```
    /// use word_arcade::core::Word;
    /// use word_arcade::games::word_guess::{MaxAttempts, Session, TurnOutcome};
    ///
    /// let mut session = Session::new(Word::new("apple").unwrap(), MaxAttempts::Ten);
    /// assert!(matches!(session.submit("mango"), TurnOutcome::Miss { .. }));
    /// assert_eq!(session.submit("apple"), TurnOutcome::Won { score: 9 });
    /// ```
    pub fn submit(&mut self, raw: &str) -> TurnOutcome {
        match self.state {
            SessionState::Won => {
                return TurnOutcome::Won {
                    score: self.attempts_remaining,
                };
            }
            SessionState::Lost => {
                return TurnOutcome::Lost {
                    common: CommonLetters::default(),
                };
            }
            SessionState::AwaitingGuess => {}
        }

        let guess = match Word::new(raw) {
            Ok(guess) => guess,
            Err(err) => return TurnOutcome::Invalid(err),
        };

        if guess == self.secret {
            self.state = SessionState::Won;
            return TurnOutcome::Won {
                score: self.attempts_remaining,
            };
        }

        self.attempts_remaining -= 1;
        let common = CommonLetters::calculate(&self.secret, &guess);

        if self.attempts_remaining == 0 {
            self.state = SessionState::Lost;
            return TurnOutcome::Lost { common };
        }

        TurnOutcome::Miss {
            common,
            guesses_made: self.guesses_made(),
            max_attempts: self.max_attempts,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Counted (valid, wrong) guesses so far
    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> u32 {
        self.max_attempts - self.attempts_remaining
    }

    /// Final score, once the session is over
    #[must_use]
    pub const fn score(&self) -> Option<u32> {
        match self.state {
            SessionState::AwaitingGuess => None,
            SessionState::Won => Some(self.attempts_remaining),
            SessionState::Lost => Some(0),
        }
    }
}
