//! Scoped timer reporting guarantees.

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use sortlab::{measure, run_sort, ScopedTimer, SortMethod};

#[test]
fn each_sort_call_is_timed_within_the_call() {
    for method in SortMethod::ALL {
        let mut vals: Vec<i32> = (0..300).rev().collect();
        let (report, outer) = measure(|| run_sort(method, &mut vals));
        assert_eq!(report.method, method);
        assert!(report.elapsed <= outer, "{method}: {:?} > {:?}", report.elapsed, outer);
    }
}

#[test]
fn back_to_back_calls_get_fresh_timers() {
    let mut slow: Vec<i32> = (0..2_000).rev().collect();
    let mut fast = vec![2, 1];
    let slow_report = run_sort(SortMethod::Bubble, &mut slow);
    let fast_report = run_sort(SortMethod::Bubble, &mut fast);
    assert!(fast_report.elapsed < slow_report.elapsed);
}

#[test]
fn report_survives_a_panicking_call() {
    let reported = RefCell::new(None);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _timer = ScopedTimer::start(|d| *reported.borrow_mut() = Some(d));
        let vals: Vec<i32> = Vec::new();
        // Out-of-bounds access is a defect and fails fast.
        vals[3]
    }));
    assert!(result.is_err());
    assert!(reported.borrow().is_some());
}

#[test]
fn measure_covers_the_whole_closure() {
    let (_, elapsed) = measure(|| std::thread::sleep(Duration::from_millis(3)));
    assert!(elapsed >= Duration::from_millis(3));
}
