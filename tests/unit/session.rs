//! End-to-end sessions over scripted input.

use super::common::{assert_sorted_permutation, transcript};
use sortlab::menu::{INVALID_METHOD_MESSAGE, INVALID_SIZE_MESSAGE};
use sortlab::{SessionOptions, SortMethod};

fn seeded() -> SessionOptions {
    SessionOptions {
        seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn mixed_case_method_is_accepted() {
    let (outcome, text) = transcript("6\nBUBBLE\n", &seeded());
    assert_eq!(outcome.report.method, SortMethod::Bubble);
    assert!(text.contains("Bubble Sort: "));
    assert!(!text.contains(INVALID_METHOD_MESSAGE));
}

#[test]
fn unknown_method_reprompts_instead_of_failing() {
    let (outcome, text) = transcript("6\nbogus\nheap\nmerge\n", &seeded());
    assert_eq!(outcome.report.method, SortMethod::Merge);
    assert_eq!(text.matches(INVALID_METHOD_MESSAGE).count(), 2);
    assert_eq!(text.matches("Sorting Method: ").count(), 3);
}

#[test]
fn help_prints_labels_then_keeps_asking() {
    let (_, text) = transcript("3\nHELP\nquick\n", &seeded());
    assert!(text.contains("Sorting Method: Bubble\nSelection\nInsertion\nMerge\nQuick\n"));
    assert!(text.contains("Quick Sort: "));
}

#[test]
fn invalid_size_is_reported_and_reprompted() {
    let (outcome, text) = transcript("-1\nmany\n4\nselection\n", &seeded());
    assert_eq!(text.matches(INVALID_SIZE_MESSAGE).count(), 2);
    assert_eq!(outcome.sorted, [1, 2, 3, 4]);
    // 3 outer picks + 3 + 2 + 1 inner comparisons
    assert!(text.contains("Selection Sort: 9 iterations\n"));
}

#[test]
fn output_order_matches_the_session_flow() {
    let options = SessionOptions {
        size: Some(8),
        method: Some(SortMethod::Insertion),
        seed: Some(5),
    };
    let (outcome, text) = transcript("", &options);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Initial Array: "));
    assert!(lines[1].starts_with("Insertion Sort: "));
    assert!(lines[1].ends_with(" iterations"));
    assert!(lines[2].starts_with("Sorted in "));
    assert_eq!(lines[3], "Sorted Array: 1 2 3 4 5 6 7 8");
    assert_sorted_permutation(&outcome.initial, &outcome.sorted);
}

#[test]
fn same_seed_reproduces_the_run() {
    let options = SessionOptions {
        size: Some(20),
        method: Some(SortMethod::Bubble),
        seed: Some(77),
    };
    let (a, _) = transcript("", &options);
    let (b, _) = transcript("", &options);
    assert_eq!(a.initial, b.initial);
    assert_eq!(a.report.steps, b.report.steps);
}
