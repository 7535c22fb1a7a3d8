// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types: the method enumeration, the step counter, and sort reports.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Human-readable labels, in menu order.
pub const METHOD_LABELS: [&str; 5] = ["Bubble", "Selection", "Insertion", "Merge", "Quick"];

/// One of the five classic sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortMethod {
    /// All methods, in menu order.
    pub const ALL: [SortMethod; 5] = [
        SortMethod::Bubble,
        SortMethod::Selection,
        SortMethod::Insertion,
        SortMethod::Merge,
        SortMethod::Quick,
    ];

    /// Label used in menus and report lines ("Bubble", "Selection", ...).
    pub fn label(self) -> &'static str {
        METHOD_LABELS[self as usize]
    }

    /// Lower-case name accepted by the selector.
    pub fn name(self) -> &'static str {
        match self {
            SortMethod::Bubble => "bubble",
            SortMethod::Selection => "selection",
            SortMethod::Insertion => "insertion",
            SortMethod::Merge => "merge",
            SortMethod::Quick => "quick",
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortMethod::Bubble | SortMethod::Insertion | SortMethod::Merge
        )
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a name matches none of the five methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sorting method '{0}'")]
pub struct UnknownMethod(pub String);

impl FromStr for SortMethod {
    type Err = UnknownMethod;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SortMethod::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .ok_or_else(|| UnknownMethod(s.trim().to_string()))
    }
}

/// Counts algorithm-defined basic operations for one sort call.
#[derive(Debug, Default)]
pub struct StepCounter {
    steps: u64,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tick(&mut self) {
        self.steps += 1;
    }

    #[inline]
    pub fn add(&mut self, n: u64) {
        self.steps += n;
    }

    pub fn get(&self) -> u64 {
        self.steps
    }

    /// Consume the counter, yielding the final count.
    pub fn finish(self) -> u64 {
        self.steps
    }
}

/// Outcome of one instrumented sort call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortReport {
    pub method: SortMethod,
    pub len: usize,
    pub steps: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl SortReport {
    /// Elapsed time in floating point milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }

    /// `"<Label> Sort: <count> iterations"`
    pub fn steps_line(&self) -> String {
        format!("{} Sort: {} iterations", self.method.label(), self.steps)
    }

    /// `"Sorted in <ms>ms."`
    pub fn timing_line(&self) -> String {
        format!("Sorted in {}ms.", self.elapsed_ms())
    }
}

/// Convert a duration to floating point milliseconds.
pub fn duration_ms(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(duration_ms(*d))
}
