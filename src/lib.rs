//! Classic sorting algorithms with step counting and scoped timing.
//!
//! Five in-place sorts over `i32` slices, each returning the number of basic
//! operations it performed, plus the instrumentation that times them and the
//! prompts that drive the `sortlab` binary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ sequence.rs │────▶│  engine.rs   │◀────│  timer.rs   │
//! │ (shuffle,   │     │ (run_sort,   │     │(ScopedTimer,│
//! │  print)     │     │  compare_all)│     │  measure)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        ▲                   │
//!        │                   ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ session.rs  │     │   sorts/     │────▶│contracts.rs │
//! │ (menu.rs    │     │ bubble, ...  │     │(debug-only  │
//! │  prompts)   │     │ quick        │     │ checks)     │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! # Step counts
//!
//! | Method    | Step                                 | Sorted input | Worst case       |
//! |-----------|--------------------------------------|--------------|------------------|
//! | Bubble    | adjacent pair examined               | n-1          | (n-1)^2          |
//! | Selection | outer pick + inner comparison        | n-1+n(n-1)/2 | n-1+n(n-1)/2     |
//! | Insertion | outer iteration + element shifted    | n-1          | n-1+n(n-1)/2     |
//! | Merge     | element placed while merging         | ~n log2 n    | ~n log2 n        |
//! | Quick     | pivot comparison                     | n(n-1)/2     | n(n-1)/2         |
//!
//! # Usage
//!
//! ```
//! use sortlab::{run_sort, SortMethod};
//!
//! let mut vals = vec![3, 1, 4, 5, 2];
//! let report = run_sort(SortMethod::Selection, &mut vals);
//!
//! assert_eq!(vals, [1, 2, 3, 4, 5]);
//! assert_eq!(report.steps, 14);
//! println!("{}", report.steps_line());
//! ```

pub mod contracts;
pub mod engine;
pub mod error;
pub mod menu;
pub mod sequence;
pub mod session;
pub mod sorts;
pub mod testing;
pub mod timer;
mod types;

pub use engine::{compare_all, run_sort, sort_and_report, write_report};
pub use error::{Result, SortlabError};
pub use menu::{parse_choice, Choice, Prompter, SelectorState};
pub use sequence::{format_sequence, parse_size, shuffled_sequence};
pub use session::{run_session, SessionOptions, SessionOutcome};
pub use sorts::{
    bubble_sort, insertion_sort, is_sorted, merge_sort, quick_sort, selection_sort, sort_with,
};
pub use timer::{measure, ScopedTimer};
pub use types::{
    duration_ms, SortMethod, SortReport, StepCounter, UnknownMethod, METHOD_LABELS,
};
