// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::StepCounter;

/// Sort `vals` ascending in place by insertion into a sorted prefix.
///
/// One step per outer iteration plus one per element shifted right. Sorted
/// input costs exactly `n - 1`. Only strictly greater elements are shifted,
/// so equal elements keep their order.
pub fn insertion_sort(vals: &mut [i32]) -> u64 {
    let mut steps = StepCounter::new();

    for i in 1..vals.len() {
        steps.tick();
        let key = vals[i];
        let mut j = i;
        while j > 0 && vals[j - 1] > key {
            vals[j] = vals[j - 1];
            j -= 1;
            steps.tick();
        }
        vals[j] = key;
    }

    steps.finish()
}
