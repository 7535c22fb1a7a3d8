//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

/// `1..=n` in ascending order.
pub fn ascending(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

/// `n..=1` in descending order.
pub fn descending(n: usize) -> Vec<i32> {
    (1..=n as i32).rev().collect()
}

/// True when `a` and `b` hold the same values with the same multiplicities.
pub fn same_multiset(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Exact selection sort cost for `n` elements.
pub fn selection_steps(n: usize) -> u64 {
    let n = n as u64;
    if n < 2 {
        0
    } else {
        (n - 1) + n * (n - 1) / 2
    }
}

/// Exact merge sort cost for `n` elements.
pub fn merge_steps(n: usize) -> u64 {
    if n <= 1 {
        return 0;
    }
    let mid = n / 2;
    n as u64 + merge_steps(mid) + merge_steps(n - mid)
}
