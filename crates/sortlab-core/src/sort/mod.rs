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


//! The four instrumented sorting algorithms.
//!
//! Each algorithm sorts a slice in place in ascending order and reports every
//! comparison, swap and move to the supplied [`OpCounter`]. They hold no state
//! of their own; timing and result packaging live in [`crate::sorter`].

mod bubble;
mod insertion;
mod merge;
mod selection;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use selection::selection_sort;

#[cfg(test)]
pub(crate) fn is_non_decreasing<T: crate::Collate>(data: &[T]) -> bool {
    data.windows(2)
        .all(|w| w[0].collate(&w[1]) != std::cmp::Ordering::Greater)
}
