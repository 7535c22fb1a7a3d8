// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The five sorting routines.
//!
//! Every routine sorts an `&mut [i32]` in place into non-decreasing order and
//! returns its step count. What counts as a step differs per algorithm:
//!
//! | Routine          | One step per                                   |
//! |------------------|------------------------------------------------|
//! | `bubble_sort`    | adjacent pair examined                         |
//! | `selection_sort` | outer pick, plus each inner comparison         |
//! | `insertion_sort` | outer iteration, plus each element shifted     |
//! | `merge_sort`     | element placed while merging                   |
//! | `quick_sort`     | comparison against the pivot while partitioning|
//!
//! These are plain functions with no shared state; timing and reporting live
//! in [`crate::engine`].

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
#[doc(hidden)]
pub use merge::merge_sort_by;
pub use quick::quick_sort;
pub use selection::selection_sort;

use crate::types::SortMethod;

/// Sort `vals` with `method`, returning the step count.
pub fn sort_with(method: SortMethod, vals: &mut [i32]) -> u64 {
    match method {
        SortMethod::Bubble => bubble_sort(vals),
        SortMethod::Selection => selection_sort(vals),
        SortMethod::Insertion => insertion_sort(vals),
        SortMethod::Merge => merge_sort(vals),
        SortMethod::Quick => quick_sort(vals),
    }
}

/// True when `vals` is in non-decreasing order.
#[inline]
pub fn is_sorted(vals: &[i32]) -> bool {
    vals.windows(2).all(|pair| pair[0] <= pair[1])
}
