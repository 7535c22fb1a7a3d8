// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoped wall-clock timer.
//!
//! A [`ScopedTimer`] captures `Instant::now()` when acquired and hands the
//! elapsed duration to its reporter exactly once when it goes out of scope.
//! Because the report runs from `Drop`, it fires on normal return, on `?`
//! early exits, and while unwinding from a panic.
//!
//! ```
//! use sortlab::timer::measure;
//!
//! let (sum, elapsed) = measure(|| (1..=10).sum::<u32>());
//! assert_eq!(sum, 55);
//! assert!(elapsed < std::time::Duration::from_secs(60));
//! ```

use std::time::{Duration, Instant};

use crate::types::duration_ms;

/// Guard that reports elapsed time to `F` when dropped.
///
/// There is no way to restart a timer; acquire a new one per measured call.
#[must_use = "a timer reports when dropped; binding it to `_` drops it immediately"]
pub struct ScopedTimer<F: FnOnce(Duration)> {
    start: Instant,
    reporter: Option<F>,
}

impl<F: FnOnce(Duration)> ScopedTimer<F> {
    /// Start timing now.
    pub fn start(reporter: F) -> Self {
        Self {
            start: Instant::now(),
            reporter: Some(reporter),
        }
    }

    /// Time elapsed so far, without releasing the timer.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<F: FnOnce(Duration)> Drop for ScopedTimer<F> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if let Some(report) = self.reporter.take() {
            tracing::trace!(elapsed_ms = duration_ms(elapsed), "timer released");
            report(elapsed);
        }
    }
}

/// Run `f` under a fresh timer, returning its result and the elapsed time.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let mut elapsed = Duration::ZERO;
    let value = {
        let _timer = ScopedTimer::start(|d| elapsed = d);
        f()
    };
    (value, elapsed)
}
