// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmation prompt before linting.

use std::io::{BufRead, IsTerminal};

use crate::error::{Error, Result};

/// Asks the user yes/no questions.
pub trait Prompter {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Prompt on the controlling terminal. Enter means yes.
///
/// Without a terminal, one line is read from stdin instead, so answers can be
/// piped in. End of input declines.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            tracing::debug!("stdin is not a terminal, reading the answer from it (see --disable-prompt)");
            eprintln!("{question} (Y/n)");
            return Ok(read_answer(stdin.lock())?);
        }
        dialoguer::Confirm::new()
            .with_prompt(question)
            .default(true)
            .interact()
            .map_err(|e| Error::Prompt { message: e.to_string() })
    }
}

/// Read one answer line. End of input counts as "no".
pub fn read_answer(mut input: impl BufRead) -> std::io::Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(parse_answer(&line))
}

/// `y`, `yes` or an empty line (case-insensitive) mean yes; anything else no.
pub fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
