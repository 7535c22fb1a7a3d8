// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive prompts: array size and sorting method.
//!
//! Input is consumed one whitespace-separated token at a time, so `5 bubble`
//! on a single line answers both prompts.
//!
//! # Selector states
//!
//! ```text
//!            ┌──── "help" (list methods) ───┐
//!            ▼                              │
//!   ┌─────────────────┐  unknown   ┌───────┴─┐
//!   │  AwaitingInput  │──────────▶│  Error   │── next token ──┐
//!   └─────────────────┘           └──────────┘                │
//!            │ method name                                     │
//!            ▼                                                 │
//!   ┌─────────────────┐◀──────────── method name ──────────────┘
//!   │   Dispatched    │
//!   └─────────────────┘
//! ```

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Result, SortlabError};
use crate::sequence::parse_size;
use crate::types::{SortMethod, METHOD_LABELS};

/// Shown after an unrecognised method name.
pub const INVALID_METHOD_MESSAGE: &str = "Please enter valid sorting method (enter HELP for list)";

/// Shown after an array size that is not a non-negative whole number.
pub const INVALID_SIZE_MESSAGE: &str = "Please enter a non-negative whole number";

/// What one token typed at the method prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Method(SortMethod),
    Help,
    Invalid(String),
}

/// Interpret a token typed at the method prompt (case-insensitive).
pub fn parse_choice(token: &str) -> Choice {
    if token.trim().eq_ignore_ascii_case("help") {
        return Choice::Help;
    }
    match token.parse::<SortMethod>() {
        Ok(method) => Choice::Method(method),
        Err(_) => Choice::Invalid(token.trim().to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    AwaitingInput,
    /// The last token was not a method name.
    Error(String),
    /// Terminal: a method was chosen.
    Dispatched(SortMethod),
}

impl SelectorState {
    /// Advance on one token. `help` leaves the selector awaiting input;
    /// `Dispatched` ignores further input.
    pub fn advance(self, choice: &Choice) -> SelectorState {
        match (self, choice) {
            (done @ SelectorState::Dispatched(_), _) => done,
            (_, Choice::Method(method)) => SelectorState::Dispatched(*method),
            (_, Choice::Help) => SelectorState::AwaitingInput,
            (_, Choice::Invalid(token)) => SelectorState::Error(token.clone()),
        }
    }
}

/// Write the method labels, one per line.
pub fn write_methods<W: Write>(out: &mut W) -> std::io::Result<()> {
    for label in METHOD_LABELS {
        writeln!(out, "{}", label)?;
    }
    Ok(())
}

/// Prompts over any buffered reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next whitespace-separated token, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so they reach the parsers as
    /// an ordinary invalid answer.
    fn next_token(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask for the array size until a valid one is given.
    pub fn prompt_size(&mut self) -> Result<usize> {
        loop {
            self.prompt("Enter array size: ")?;
            let token = self.next_token()?.ok_or(SortlabError::InputClosed {
                expected: "an array size",
            })?;
            match parse_size(&token) {
                Ok(n) => return Ok(n),
                Err(err) => {
                    debug!(%err, "rejected array size");
                    writeln!(self.output, "{}", INVALID_SIZE_MESSAGE)?;
                }
            }
        }
    }

    /// Ask for a sorting method until a valid one is given.
    pub fn prompt_method(&mut self) -> Result<SortMethod> {
        let mut state = SelectorState::AwaitingInput;
        loop {
            match &state {
                SelectorState::Dispatched(method) => return Ok(*method),
                SelectorState::Error(token) => {
                    debug!(token = %token, "unknown sorting method");
                    writeln!(self.output, "{}", INVALID_METHOD_MESSAGE)?;
                }
                SelectorState::AwaitingInput => {}
            }

            self.prompt("Sorting Method: ")?;
            let token = self.next_token()?.ok_or(SortlabError::InputClosed {
                expected: "a sorting method",
            })?;
            let choice = parse_choice(&token);
            if choice == Choice::Help {
                write_methods(&mut self.output)?;
            }
            state = state.advance(&choice);
        }
    }
}
