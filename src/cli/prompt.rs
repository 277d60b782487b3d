//! Line-based prompting
//!
//! One question at a time: write the prompt, flush, read one line. Works on
//! any reader/writer pair so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use crate::error::TrackerResult;

/// Answers accepted as "yes" in confirmations
const YES_ANSWERS: [&str; 3] = ["yes", "y", "да"];

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and read one line
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a yes/no question; anything other than a yes is a no
    pub fn confirm(&mut self, question: &str) -> TrackerResult<Option<bool>> {
        Ok(self
            .ask(question)?
            .map(|answer| YES_ANSWERS.contains(&answer.trim().to_lowercase().as_str())))
    }

    /// Write text followed by a newline
    pub fn say(&mut self, text: &str) -> TrackerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text as-is
    pub fn print(&mut self, text: &str) -> TrackerResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Give back the writer, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_reads_lines() {
        let mut p = prompter("first\r\nsecond\n");
        assert_eq!(p.ask("Q1: ").unwrap().as_deref(), Some("first"));
        assert_eq!(p.ask("Q2: ").unwrap().as_deref(), Some("second"));
        assert_eq!(p.ask("Q3: ").unwrap(), None);

        let transcript = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(transcript, "Q1: Q2: Q3: \n");
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("Y\nno\nда\n\n");
        assert_eq!(p.confirm("?").unwrap(), Some(true));
        assert_eq!(p.confirm("?").unwrap(), Some(false));
        assert_eq!(p.confirm("?").unwrap(), Some(true));
        assert_eq!(p.confirm("?").unwrap(), Some(false));
        assert_eq!(p.confirm("?").unwrap(), None);
    }

    #[test]
    fn test_say_and_print() {
        let mut p = prompter("");
        p.say("hello").unwrap();
        p.print("a").unwrap();
        p.print("b\n").unwrap();
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "hello\nab\n");
    }
}
