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


//! Top-down merge sort.

use crate::metrics::OpCounter;
use crate::value::Collate;
use std::cmp::Ordering;

/// Sort `data` with recursive merge sort.
///
/// Ranges are split at `floor((left + right) / 2)` down to single elements and
/// merged back. The merge is stable: on equal elements the left run wins.
/// Every element written into a merged range counts one move.
///
/// # Examples
///
/// ```
/// use sortlab_core::{sort::merge_sort, OpCounter};
///
/// let mut data = vec![4_i64, 1, 3, 2];
/// let mut ops = OpCounter::new();
/// merge_sort(&mut data, &mut ops);
///
/// assert_eq!(data, vec![1, 2, 3, 4]);
/// assert_eq!(ops.moves(), 8);
/// ```
pub fn merge_sort<T: Collate + Clone>(data: &mut [T], ops: &mut OpCounter) {
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1, ops);
    }
}

fn sort_range<T: Collate + Clone>(data: &mut [T], left: usize, right: usize, ops: &mut OpCounter) {
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(data, left, mid, ops);
        sort_range(data, mid + 1, right, ops);
        merge(data, left, mid, right, ops);
    }
}

fn merge<T: Collate + Clone>(
    data: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    ops: &mut OpCounter,
) {
    let left_run = data[left..=mid].to_vec();
    let right_run = data[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        if ops.compare(&left_run[i], &right_run[j]) != Ordering::Greater {
            data[k] = left_run[i].clone();
            i += 1;
        } else {
            data[k] = right_run[j].clone();
            j += 1;
        }
        k += 1;
        ops.record_move();
    }

    for item in left_run[i..].iter().chain(&right_run[j..]) {
        data[k] = item.clone();
        k += 1;
        ops.record_move();
    }
}
