// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building and printing the sequence to sort.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Result, SortlabError};

/// Largest accepted array size: values `1..=n` must fit in `i32`.
pub const MAX_SIZE: usize = i32::MAX as usize;

/// The integers `1..=n` in an order determined by `seed`.
///
/// The same `(n, seed)` always yields the same sequence.
pub fn shuffled_sequence(n: usize, seed: u64) -> Vec<i32> {
    debug_assert!(n <= MAX_SIZE, "sequence length {} exceeds i32", n);
    let mut vals: Vec<i32> = (1..=n as i32).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    vals.shuffle(&mut rng);
    vals
}

/// Seed derived from the wall clock, for runs without `--seed`.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Parse a user-typed array size.
///
/// Accepts whole numbers in `0..=MAX_SIZE`; anything else (negative,
/// fractional, non-numeric, too large) is `InvalidSize`.
pub fn parse_size(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|&n| n <= MAX_SIZE)
        .ok_or_else(|| SortlabError::InvalidSize {
            input: trimmed.to_string(),
        })
}

/// Space-separated rendering: `"3 1 2"`.
pub fn format_sequence(vals: &[i32]) -> String {
    vals.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write `label` followed by the sequence and a newline.
pub fn write_sequence<W: Write>(out: &mut W, label: &str, vals: &[i32]) -> io::Result<()> {
    writeln!(out, "{}{}", label, format_sequence(vals))
}
