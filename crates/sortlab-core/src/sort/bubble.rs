// Dweve Sortlab - Instrumented Sorting Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Bubble sort.

use crate::metrics::OpCounter;
use crate::value::Collate;
use std::cmp::Ordering;

/// Sort `data` with bubble sort.
///
/// Pass `i` compares each adjacent pair in `data[..n - i]` once and swaps pairs
/// that are out of order. The settled tail is excluded from later passes, and
/// there is no early exit, so the comparison count is always `n(n-1)/2`.
///
/// # Examples
///
/// ```
/// use sortlab_core::{sort::bubble_sort, OpCounter};
///
/// let mut data = vec![5_i64, 3, 1];
/// let mut ops = OpCounter::new();
/// bubble_sort(&mut data, &mut ops);
///
/// assert_eq!(data, vec![1, 3, 5]);
/// assert_eq!(ops.comparisons(), 3);
/// assert_eq!(ops.swaps(), 3);
/// ```
pub fn bubble_sort<T: Collate>(data: &mut [T], ops: &mut OpCounter) {
    let n = data.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if ops.compare(&data[j], &data[j + 1]) == Ordering::Greater {
                ops.swap(data, j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::is_non_decreasing;

    #[test]
    fn test_empty_and_single() {
        let mut ops = OpCounter::new();
        let mut empty: Vec<i64> = vec![];
        bubble_sort(&mut empty, &mut ops);
        assert!(empty.is_empty());

        let mut single = vec![9_i64];
        bubble_sort(&mut single, &mut ops);
        assert_eq!(single, vec![9]);
        assert_eq!(ops.comparisons(), 0);
    }

    #[test]
    fn test_sorted_input_has_no_swaps() {
        let mut ops = OpCounter::new();
        let mut data = vec![1_i64, 2, 3, 4, 5];
        bubble_sort(&mut data, &mut ops);
        assert_eq!(ops.comparisons(), 10);
        assert_eq!(ops.swaps(), 0);
    }

    #[test]
    fn test_reverse_input_swaps_every_pair() {
        let mut ops = OpCounter::new();
        let mut data = vec![6_i64, 5, 4, 3, 2, 1];
        bubble_sort(&mut data, &mut ops);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ops.comparisons(), 15);
        assert_eq!(ops.swaps(), 15);
        assert_eq!(ops.moves(), 0);
    }

    #[test]
    fn test_equal_elements_are_not_swapped() {
        let mut ops = OpCounter::new();
        let mut data = vec![2_i64, 2, 2, 2];
        bubble_sort(&mut data, &mut ops);
        assert_eq!(ops.comparisons(), 6);
        assert_eq!(ops.swaps(), 0);
        assert!(is_non_decreasing(&data));
    }
}
