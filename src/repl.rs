//! Read-Lex-Print Loop
//!
//! Reads input a line at a time, runs each line through the lexer and
//! prints the resulting tokens.

use std::io::{BufRead, Write};

use crate::error::MonkeyResult;
use crate::lexer::Lexer;

/// Prompt written before each line of input
pub const PROMPT: &str = ">> ";

/// Run the loop until `input` is exhausted
///
/// Lines are handled as raw bytes, so input that is not valid UTF-8 is
/// lexed like any other (its bytes come out as `ILLEGAL` tokens).
pub fn start<I: BufRead, O: Write>(input: I, output: &mut O) -> MonkeyResult<()> {
    prompt(output)?;

    for line in input.split(b'\n') {
        let line = line?;

        for token in Lexer::new(line.as_slice()) {
            match token {
                Ok(token) => writeln!(output, "{}", token)?,
                Err(err) => writeln!(output, "{}", err)?,
            }
        }

        prompt(output)?;
    }

    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn prompt<O: Write>(output: &mut O) -> MonkeyResult<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;
    Ok(())
}
