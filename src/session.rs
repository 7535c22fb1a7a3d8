// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One end-to-end run: size, shuffle, print, choose, sort, print.

use std::io::{BufRead, Write};

use tracing::info;

use crate::engine::sort_and_report;
use crate::error::Result;
use crate::menu::Prompter;
use crate::sequence::{clock_seed, shuffled_sequence, write_sequence};
use crate::types::{SortMethod, SortReport};

/// Answers supplied up front; each `None` is asked for interactively.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub size: Option<usize>,
    pub method: Option<SortMethod>,
    pub seed: Option<u64>,
}

/// What a finished session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub seed: u64,
    pub initial: Vec<i32>,
    pub sorted: Vec<i32>,
    pub report: SortReport,
}

/// Run a session reading answers from `input` and writing to `output`.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: &SessionOptions,
) -> Result<SessionOutcome> {
    let mut prompter = Prompter::new(input, output);

    let size = match options.size {
        Some(size) => size,
        None => prompter.prompt_size()?,
    };
    let seed = options.seed.unwrap_or_else(clock_seed);
    info!(size, seed, "generating sequence");

    let initial = shuffled_sequence(size, seed);
    write_sequence(prompter.output(), "Initial Array: ", &initial)?;

    let method = match options.method {
        Some(method) => method,
        None => prompter.prompt_method()?,
    };

    let mut sorted = initial.clone();
    let report = sort_and_report(method, &mut sorted, prompter.output())?;
    write_sequence(prompter.output(), "Sorted Array: ", &sorted)?;
    prompter.output().flush()?;

    Ok(SessionOutcome {
        seed,
        initial,
        sorted,
        report,
    })
}
