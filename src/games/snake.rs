//! Snake placeholder
//!
//! Prints the rules and returns without a score.

use super::{Game, GameError};
use std::io::{BufRead, Write};

pub struct SnakeGame;

impl Game for SnakeGame {
    fn name(&self) -> &str {
        "Snake"
    }

    fn play(
        &mut self,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Option<u32>, GameError> {
        writeln!(output, "Welcome, you are now playing Snake")?;
        writeln!(output, "Collect food to grow your snake, but be careful!")?;
        writeln!(
            output,
            "If you run into yourself or the edge of the grid, you lose!"
        )?;
        writeln!(output, "(Snake is not playable yet.)")?;
        Ok(None)
    }
}
