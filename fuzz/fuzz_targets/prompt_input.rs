// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the interactive prompts.
//!
//! Arbitrary stdin must either pick a method or end in `InputClosed`.
//! Reading from memory cannot fail, so any other error is a bug.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortlab::{Prompter, SortlabError};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut prompter = Prompter::new(Cursor::new(data), Vec::new());

    match prompter.prompt_size() {
        Ok(n) => assert!(n <= i32::MAX as usize),
        Err(SortlabError::InputClosed { .. }) => return,
        Err(e) => panic!("unexpected size error: {}", e),
    }

    match prompter.prompt_method() {
        Ok(_) | Err(SortlabError::InputClosed { .. }) => {}
        Err(e) => panic!("unexpected method error: {}", e),
    }
});
