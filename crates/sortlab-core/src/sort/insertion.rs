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


//! Insertion sort.

use crate::metrics::OpCounter;
use crate::value::Collate;
use std::cmp::Ordering;

/// Sort `data` with insertion sort.
///
/// Each key from position 1 onward is shifted left past every strictly
/// greater predecessor. Every shift counts one move and placing the key in its
/// final slot counts one more, even when the key does not move.
///
/// # Examples
///
/// ```
/// use sortlab_core::{sort::insertion_sort, OpCounter};
///
/// let mut data = vec!["b", "a"];
/// let mut ops = OpCounter::new();
/// insertion_sort(&mut data, &mut ops);
///
/// assert_eq!(data, vec!["a", "b"]);
/// assert_eq!(ops.comparisons(), 1);
/// assert_eq!(ops.moves(), 2);
/// ```
pub fn insertion_sort<T: Collate>(data: &mut [T], ops: &mut OpCounter) {
    for i in 1..data.len() {
        // The key travels with the shifts, so it always sits at `j`.
        let mut j = i;
        while j > 0 && ops.compare(&data[j - 1], &data[j]) == Ordering::Greater {
            data.swap(j - 1, j);
            ops.record_move();
            j -= 1;
        }
        ops.record_move();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_input_costs_one_move_per_key() {
        let mut ops = OpCounter::new();
        let mut data = vec![1_i64, 2, 3, 4];
        insertion_sort(&mut data, &mut ops);
        assert_eq!(ops.comparisons(), 3);
        assert_eq!(ops.moves(), 3);
        assert_eq!(ops.swaps(), 0);
    }

    #[test]
    fn test_reverse_input() {
        let n = 6_u64;
        let mut ops = OpCounter::new();
        let mut data: Vec<i64> = (1..=n as i64).rev().collect();
        insertion_sort(&mut data, &mut ops);
        assert_eq!(data, (1..=n as i64).collect::<Vec<_>>());
        // every predecessor is shifted, plus one placement per key
        assert_eq!(ops.moves(), n * (n - 1) / 2 + (n - 1));
        assert_eq!(ops.comparisons(), n * (n - 1) / 2);
    }

    #[test]
    fn test_stops_at_equal_predecessor() {
        let mut ops = OpCounter::new();
        let mut data = vec![1_i64, 3, 3];
        insertion_sort(&mut data, &mut ops);
        assert_eq!(ops.comparisons(), 2);
        assert_eq!(ops.moves(), 2);
    }

    #[test]
    fn test_empty_input_costs_nothing() {
        let mut ops = OpCounter::new();
        let mut data: Vec<i64> = vec![];
        insertion_sort(&mut data, &mut ops);
        assert_eq!(ops.moves(), 0);
        assert_eq!(ops.comparisons(), 0);
    }
}
