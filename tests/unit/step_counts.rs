//! Step counting policy for each algorithm.
//!
//! Reported counts are the point of the tool, so each policy is pinned here
//! with exact values rather than bounds where the algorithm allows it.

use super::common::{ascending, descending, merge_steps, selection_steps, SAMPLE};
use sortlab::{
    bubble_sort, insertion_sort, merge_sort, quick_sort, run_sort, selection_sort, sort_with,
    SortMethod,
};

#[test]
fn worked_example_selection_sort() {
    let mut vals = SAMPLE;
    let steps = selection_sort(&mut vals);
    assert_eq!(vals, [1, 2, 3, 4, 5]);
    // 4 outer picks and 4 + 3 + 2 + 1 inner comparisons
    assert_eq!(steps, 4 + 10);
}

#[test]
fn worked_example_bubble_sort() {
    let mut vals = SAMPLE;
    let steps = bubble_sort(&mut vals);
    assert_eq!(vals, [1, 2, 3, 4, 5]);
    assert_eq!(steps, 3 * 4);
}

#[test]
fn bubble_sort_always_pays_a_verification_pass() {
    for n in 2..30 {
        let mut vals = ascending(n);
        assert_eq!(bubble_sort(&mut vals), (n - 1) as u64, "n={n}");
    }
}

#[test]
fn bubble_sort_steps_are_whole_passes() {
    for n in 2..30 {
        let mut vals = descending(n);
        let steps = bubble_sort(&mut vals);
        let per_pass = (n - 1) as u64;
        assert_eq!(steps % per_pass, 0, "n={n}");
        assert!(steps >= per_pass);
    }
}

#[test]
fn selection_sort_is_data_independent() {
    for n in 0..25 {
        let mut up = ascending(n);
        let mut down = descending(n);
        assert_eq!(selection_sort(&mut up), selection_steps(n));
        assert_eq!(selection_sort(&mut down), selection_steps(n));
    }
}

#[test]
fn insertion_sort_best_and_worst_case() {
    for n in 1..25usize {
        let mut up = ascending(n);
        assert_eq!(insertion_sort(&mut up), (n - 1) as u64);

        let mut down = descending(n);
        let n64 = n as u64;
        assert_eq!(insertion_sort(&mut down), (n64 - 1) + n64 * (n64 - 1) / 2);
    }
}

#[test]
fn merge_sort_places_every_element_per_level() {
    for n in 0..64 {
        let mut vals = descending(n);
        assert_eq!(merge_sort(&mut vals), merge_steps(n), "n={n}");
    }
}

#[test]
fn quick_sort_sorted_input_is_quadratic() {
    for n in 1..40usize {
        let mut vals = ascending(n);
        let n64 = n as u64;
        assert_eq!(quick_sort(&mut vals), n64 * (n64 - 1) / 2);
    }
}

#[test]
fn trivial_inputs_cost_nothing() {
    for method in SortMethod::ALL {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(sort_with(method, &mut empty), 0);

        let mut single = vec![-9];
        let report = run_sort(method, &mut single);
        assert_eq!(report.steps, 0);
        assert_eq!(single, [-9]);
    }
}
