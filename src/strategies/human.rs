//! Line-based human player

use std::io::{self, Stdin, Stdout, Write};

use crate::{
    Error, Result,
    ports::{LineSource, Strategy},
    tictactoe::{Board, Mark},
};

/// Reads square numbers from a [`LineSource`], prompting on `output`.
///
/// Anything that is not an integer naming a free square is answered with
/// `"Invalid square. Please try again."` and the prompt is repeated.
pub struct HumanStrategy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> HumanStrategy<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self, mark: Mark) -> Result<()> {
        write!(self.output, "{mark}'s turn. Input move (0-8): ")
            .and_then(|()| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write move prompt".to_string(),
                source,
            })
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read move".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::InputClosed {
                expected: "a move".to_string(),
            });
        }
        Ok(line)
    }
}

impl HumanStrategy<Stdin, Stdout> {
    /// Bind a human player to the terminal
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin(), io::stdout())
    }
}

impl<R, W> Strategy for HumanStrategy<R, W>
where
    R: LineSource + Send,
    W: Write + Send,
{
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        super::ensure_playable(board)?;

        loop {
            self.prompt(mark)?;
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(index) if board.is_empty(index) => return Ok(index),
                _ => writeln!(self.output, "Invalid square. Please try again.").map_err(
                    |source| Error::Io {
                        operation: "write input error".to_string(),
                        source,
                    },
                )?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
