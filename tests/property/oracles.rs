//! Reference implementations for differential testing.
//!
//! Each oracle is the slowest obviously-correct version of the property it
//! checks. The sorts under test must agree with them on every input.

use proptest::prelude::*;
use sortlab::{sort_with, SortMethod};

/// Number of pairs `i < j` with `vals[i] > vals[j]`.
///
/// Insertion sort shifts each inversion exactly once.
pub fn oracle_inversions(vals: &[i32]) -> u64 {
    let mut count = 0;
    for i in 0..vals.len() {
        for j in i + 1..vals.len() {
            if vals[i] > vals[j] {
                count += 1;
            }
        }
    }
    count
}

/// Sorted copy from the standard library's stable sort.
pub fn oracle_sorted(vals: &[i32]) -> Vec<i32> {
    let mut out = vals.to_vec();
    out.sort();
    out
}

#[test]
fn inversions_of_known_inputs() {
    assert_eq!(oracle_inversions(&[]), 0);
    assert_eq!(oracle_inversions(&[1, 2, 3]), 0);
    assert_eq!(oracle_inversions(&[3, 2, 1]), 3);
    assert_eq!(oracle_inversions(&[3, 1, 4, 5, 2]), 4);
}

proptest! {
    /// Every method agrees with the standard library sort.
    #[test]
    fn prop_matches_std_sort(vals in prop::collection::vec(any::<i32>(), 0..150)) {
        let expected = oracle_sorted(&vals);
        for method in SortMethod::ALL {
            let mut actual = vals.clone();
            sort_with(method, &mut actual);
            prop_assert_eq!(&actual, &expected, "{} disagreed", method);
        }
    }
}
