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


//! Algorithm identifiers.

use crate::error::InputError;
use crate::metrics::OpCounter;
use crate::sort;
use crate::value::Collate;
use std::fmt;
use std::str::FromStr;

/// One of the four instrumented sorting algorithms.
///
/// The declaration order is the order a [`ResultSet`](crate::ResultSet)
/// iterates in, which also decides ties in
/// [`most_efficient`](crate::most_efficient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl Algorithm {
    /// All algorithms in iteration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
    ];

    /// The short identifier (`bubble`, `selection`, `insertion`, `merge`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
        }
    }

    /// Human readable name, e.g. `Bubble Sort`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
        }
    }

    /// Sort `data` in place with this algorithm, reporting to `ops`.
    pub fn sort<T: Collate + Clone>(self, data: &mut [T], ops: &mut OpCounter) {
        match self {
            Self::Bubble => sort::bubble_sort(data, ops),
            Self::Selection => sort::selection_sort(data, ops),
            Self::Insertion => sort::insertion_sort(data, ops),
            Self::Merge => sort::merge_sort(data, ops),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    /// Parse an identifier, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "insertion" => Ok(Self::Insertion),
            "merge" => Ok(Self::Merge),
            _ => Err(InputError::UnknownAlgorithm(s.trim().to_string())),
        }
    }
}
