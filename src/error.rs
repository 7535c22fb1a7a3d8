// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Library error type.
//!
//! Invalid method names never surface here: the selector recovers from them
//! by re-prompting. Broken sort invariants are not errors either; they panic
//! (see [`crate::contracts`]).

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum SortlabError {
    /// Array size that is not a whole number in `0..=i32::MAX`.
    #[error("invalid array size '{input}': expected a non-negative whole number")]
    InvalidSize { input: String },

    /// Input ended while a prompt was still waiting for an answer.
    #[error("input closed while waiting for {expected}")]
    InputClosed { expected: &'static str },

    /// The cause is kept as the error source, not repeated in the message.
    #[error("I/O error")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SortlabError>;
