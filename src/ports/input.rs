//! Input port - line-oriented reads for interactive play

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, StdinLock};

/// A source of input lines.
///
/// Implemented for [`Stdin`] itself, which reads through the process-wide
/// buffer. The human strategy and the CLI prompts can then share the
/// terminal without one of them buffering lines meant for the other.
pub trait LineSource {
    /// Append the next line, newline included, to `buf`.
    ///
    /// Returns the number of bytes read; `0` means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl LineSource for StdinLock<'_> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        (**self).read_line(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_in_order_then_eof() {
        let mut input: &[u8] = b"yes\nno";
        let mut line = String::new();

        assert_eq!(LineSource::read_line(&mut input, &mut line).unwrap(), 4);
        assert_eq!(line, "yes\n");
        line.clear();
        assert_eq!(LineSource::read_line(&mut input, &mut line).unwrap(), 2);
        assert_eq!(line, "no");
        line.clear();
        assert_eq!(LineSource::read_line(&mut input, &mut line).unwrap(), 0);
    }
}
