//! # Console Prompts
//!
//! Line-oriented input/output for the session, including the re-prompt
//! loops. The parsers themselves live in `tillroll_core::validation`.
//!
//! ```text
//! Quantity: abc         ──► parse_quantity ──► Err ──► "Invalid number."
//! Quantity: -2          ──► parse_quantity ──► Err ──► "Enter positive number."
//! Quantity: 2           ──► parse_quantity ──► Ok(2)
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use tillroll_core::validation::ValidationResult;
use tillroll_core::ValidationError;

use crate::error::{AppError, AppResult};

/// Operator console over any reader/writer pair.
///
/// Production uses locked stdin/stdout; tests use a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one line of input,
    /// without its line terminator.
    ///
    /// ## Errors
    /// `AppError::InputClosed` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompts until `parse` accepts the input.
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> AppResult<T>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(retry_notice(&err))?,
            }
        }
    }

    /// Consumes the console and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Message shown before re-prompting.
fn retry_notice(err: &ValidationError) -> String {
    match err {
        ValidationError::MustBePositive { .. } | ValidationError::MustNotBeNegative { .. } => {
            "Enter positive number.".to_string()
        }
        ValidationError::InvalidFormat { .. } => "Invalid number.".to_string(),
        other => format!("{}.", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tillroll_core::validation::{parse_quantity, validate_customer_name};

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut c = console("Asha\r\nnext\n");
        assert_eq!(c.read_line("Name: ").unwrap(), "Asha");
        assert_eq!(c.read_line("Again: ").unwrap(), "next");
        assert_eq!(output(c), "Name: Again: ");
    }

    #[test]
    fn test_read_line_at_end_of_input() {
        let mut c = console("");
        assert!(c.read_line("Name: ").unwrap_err().is_input_closed());
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let mut c = console("abc\n-2\n0\n3\n");
        assert_eq!(c.ask("Quantity: ", parse_quantity).unwrap(), 3);
        assert_eq!(
            output(c),
            "Quantity: Invalid number.\n\
             Quantity: Enter positive number.\n\
             Quantity: Enter positive number.\n\
             Quantity: "
        );
    }

    #[test]
    fn test_ask_uses_error_text_for_non_numeric_fields() {
        let mut c = console("\nAsha\n");
        assert_eq!(c.ask("Customer name: ", validate_customer_name).unwrap(), "Asha");
        assert_eq!(
            output(c),
            "Customer name: customer name is required.\nCustomer name: "
        );
    }

    #[test]
    fn test_ask_stops_at_end_of_input() {
        let mut c = console("abc\n");
        let err = c.ask("Quantity: ", parse_quantity).unwrap_err();
        assert!(err.is_input_closed());
    }
}
