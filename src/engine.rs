// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Instrumented sorting.
//!
//! Wraps each routine in [`crate::sorts`] with a fresh scoped timer, runs the
//! result contracts, and produces a [`SortReport`]. Nothing is shared between
//! calls.
//!
//! The `Sorted in <ms>ms.` line is written only after a sort returns. If a
//! sort unwinds instead, the timer's release still logs the elapsed time as a
//! `warn` event, which the default log filter shows.

use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, warn};

use crate::contracts;
use crate::sorts::sort_with;
use crate::timer::ScopedTimer;
use crate::types::{duration_ms, SortMethod, SortReport};

/// Run one sort call under a fresh timer.
fn timed<T>(method: SortMethod, len: usize, sort: impl FnOnce() -> T) -> (T, Duration) {
    let mut elapsed = Duration::ZERO;
    let value = {
        let _timer = ScopedTimer::start(|d| {
            if std::thread::panicking() {
                warn!(
                    method = method.name(),
                    len,
                    elapsed_ms = duration_ms(d),
                    "sort aborted"
                );
            }
            elapsed = d;
        });
        sort()
    };
    (value, elapsed)
}

/// Sort `vals` in place with `method`, timing the call.
pub fn run_sort(method: SortMethod, vals: &mut [i32]) -> SortReport {
    let before = cfg!(debug_assertions).then(|| vals.to_vec());

    let len = vals.len();
    let (steps, elapsed) = timed(method, len, || sort_with(method, vals));

    contracts::check_sorted(vals);
    if let Some(before) = &before {
        contracts::check_permutation(before, vals);
    }
    contracts::check_steps_bound(method, vals.len(), steps);

    let report = SortReport {
        method,
        len: vals.len(),
        steps,
        elapsed,
    };
    debug!(
        method = method.name(),
        len = report.len,
        steps,
        elapsed_ms = report.elapsed_ms(),
        "sort finished"
    );
    report
}

/// Write the two report lines: step count, then timing.
pub fn write_report<W: Write>(out: &mut W, report: &SortReport) -> io::Result<()> {
    writeln!(out, "{}", report.steps_line())?;
    writeln!(out, "{}", report.timing_line())
}

/// [`run_sort`] followed by [`write_report`].
pub fn sort_and_report<W: Write>(
    method: SortMethod,
    vals: &mut [i32],
    out: &mut W,
) -> io::Result<SortReport> {
    let report = run_sort(method, vals);
    write_report(out, &report)?;
    Ok(report)
}

/// Sort a separate copy of `vals` with every method, in menu order.
///
/// `vals` itself is left untouched.
pub fn compare_all(vals: &[i32]) -> Vec<SortReport> {
    SortMethod::ALL
        .into_iter()
        .map(|method| {
            let mut copy = vals.to_vec();
            run_sort(method, &mut copy)
        })
        .collect()
}
