//! Sudoku placeholder

use super::{Game, GameError};
use std::io::{BufRead, Write};

pub struct SudokuGame;

impl Game for SudokuGame {
    fn name(&self) -> &str {
        "Sudoku"
    }

    fn play(
        &mut self,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Option<u32>, GameError> {
        writeln!(output, "Welcome to Sudoku!")?;
        writeln!(
            output,
            "Fill the grid with digits 1 to 9 so that each column, row and 3x3 subgrid"
        )?;
        writeln!(output, "contains all digits without repetition.")?;
        writeln!(output, "(Sudoku is not playable yet.)")?;
        Ok(None)
    }
}
