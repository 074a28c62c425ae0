//! Human player reading 1-based positions from a line-oriented input.

use super::Player;
use crate::game::Board;
use anyhow::{Result, bail};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::debug;

/// Human player typing positions 1..=N, one per line.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a player prompting on `output` and reading from `input`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Creates a player on the process's terminal.
    pub fn stdio(name: impl Into<String>) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(name, stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board) -> Result<usize> {
        let cells = board.geometry().cell_count();
        loop {
            write!(self.output, "{}, enter your move (1-{cells}): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            match line.trim().parse::<usize>() {
                Ok(number) if number >= 1 => {
                    debug!(player = %self.name, position = number, "Human chose position");
                    return Ok(number - 1);
                }
                _ => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_based_position() {
        let mut output = Vec::new();
        let mut player = HumanPlayer::new("Alice", Cursor::new("5\n"), &mut output);
        assert_eq!(player.get_move(&Board::new()).unwrap(), 4);
        drop(player);

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Alice, enter your move (1-9): "
        );
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut output = Vec::new();
        let mut player = HumanPlayer::new("Bob", Cursor::new("abc\n0\n  3  \n"), &mut output);
        assert_eq!(player.get_move(&Board::new()).unwrap(), 2);
        drop(player);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please enter a valid number.").count(), 2);
        assert_eq!(text.matches("Bob, enter your move").count(), 3);
    }

    #[test]
    fn test_out_of_range_is_left_to_the_game_loop() {
        let mut player = HumanPlayer::new("Carol", Cursor::new("42\n"), io::sink());
        assert_eq!(player.get_move(&Board::new()).unwrap(), 41);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut player = HumanPlayer::new("Dave", Cursor::new(""), io::sink());
        assert!(player.get_move(&Board::new()).is_err());
    }
}
