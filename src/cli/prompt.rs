//! Terminal questions asked between games

use std::io::{self, Stdin, Stdout, Write};

use crate::{
    Error, Result,
    ports::LineSource,
    strategies::StrategyKind,
    tictactoe::Mark,
};

/// Asks questions on `output` and reads the answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<Stdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the writer, mainly for tests
    pub fn into_output(self) -> W {
        self.output
    }

    /// Strict yes/no: repeats the question until the answer is one of
    /// `yes`, `y`, `no` or `n` (any case).
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            match self.ask(question)?.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'yes' or 'no'.")?,
            }
        }
    }

    /// Lenient yes/no: `yes` or `y` confirms, anything else declines
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(matches!(self.ask(question)?.as_str(), "yes" | "y"))
    }

    /// Ask which strategy plays `mark`, repeating until the answer parses
    pub fn ask_strategy_kind(&mut self, mark: Mark) -> Result<StrategyKind> {
        let question = format!("Choose the type for Player {mark} (human/random/smart): ");
        loop {
            match self.ask(&question)?.parse() {
                Ok(kind) => return Ok(kind),
                Err(_) => self.say("Invalid choice. Please enter 'human', 'random', or 'smart'.")?,
            }
        }
    }

    /// Print `question`, return the trimmed lowercase answer
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")
            .and_then(|()| self.output.flush())
            .map_err(|source| Error::Io {
                operation: "write prompt".to_string(),
                source,
            })?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read answer".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::InputClosed {
                expected: format!("an answer to '{}'", question.trim()),
            });
        }
        Ok(line.trim().to_lowercase())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|source| Error::Io {
            operation: "write prompt".to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &'static str) -> Prompter<&'static [u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_ask_yes_no_repeats_until_valid() {
        let mut p = prompter("maybe\nY\n");
        assert!(p.ask_yes_no("Do you want to play again? (yes/no): ").unwrap());

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            output,
            "Do you want to play again? (yes/no): \
             Invalid input. Please enter 'yes' or 'no'.\n\
             Do you want to play again? (yes/no): "
        );
    }

    #[test]
    fn test_confirm_declines_anything_else() {
        assert!(prompter("yes\n").confirm("Save this game? (yes/no): ").unwrap());
        assert!(!prompter("sure\n").confirm("Save this game? (yes/no): ").unwrap());
    }

    #[test]
    fn test_ask_strategy_kind() {
        let mut p = prompter("genius\nSmart\n");
        assert_eq!(p.ask_strategy_kind(Mark::O).unwrap(), StrategyKind::Minimax);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.starts_with("Choose the type for Player O (human/random/smart): "));
        assert!(output.contains("Invalid choice. Please enter 'human', 'random', or 'smart'."));
    }

    #[test]
    fn test_closed_input() {
        let mut p = prompter("");
        assert!(matches!(
            p.ask_yes_no("Load saved game? (yes/no): "),
            Err(Error::InputClosed { .. })
        ));
    }
}
