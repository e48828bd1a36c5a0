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


//! Selection sort.

use crate::metrics::OpCounter;
use crate::value::Collate;
use std::cmp::Ordering;

/// Sort `data` with selection sort.
///
/// For each position `i` but the last, the unsorted suffix is scanned for its
/// minimum. A swap happens only when the minimum is not already at `i`.
///
/// # Examples
///
/// ```
/// use sortlab_core::{sort::selection_sort, OpCounter};
///
/// let mut data = vec![2_i64, 2, 2];
/// let mut ops = OpCounter::new();
/// selection_sort(&mut data, &mut ops);
///
/// assert_eq!(ops.comparisons(), 3);
/// assert_eq!(ops.swaps(), 0);
/// ```
pub fn selection_sort<T: Collate>(data: &mut [T], ops: &mut OpCounter) {
    let n = data.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;

        for j in i + 1..n {
            if ops.compare(&data[j], &data[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }

        if min_idx != i {
            ops.swap(data, i, min_idx);
        }
    }
}
