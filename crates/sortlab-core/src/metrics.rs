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


//! Operation counters and timing.
//!
//! [`OpCounter`] is the per-run scratch state the algorithms mutate; it is
//! created fresh for every run and frozen into a [`Metrics`] snapshot when the
//! run ends. Nothing here is shared between runs.

use crate::value::Collate;
use std::cmp::Ordering;
use std::sync::OnceLock;
use std::time::Instant;

static CLOCK_ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Milliseconds elapsed since the process-wide clock origin.
///
/// The origin is fixed on first use. The clock is monotonic and has
/// sub-millisecond resolution.
pub fn now_ms() -> f64 {
    let origin = CLOCK_ORIGIN.get_or_init(Instant::now);
    origin.elapsed().as_secs_f64() * 1000.0
}

/// Cost metrics of one algorithm run.
///
/// `start_time` and `end_time` are [`now_ms`] samples; `execution_time` is
/// their difference in milliseconds and is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Metrics {
    /// Number of ordering evaluations.
    pub comparisons: u64,
    /// In-place exchanges of two elements (bubble, selection).
    pub swaps: u64,
    /// Single element assignments into a slot (insertion, merge).
    pub moves: u64,
    /// Clock sample taken immediately before the run.
    pub start_time: f64,
    /// Clock sample taken immediately after the run.
    pub end_time: f64,
    /// Elapsed milliseconds.
    pub execution_time: f64,
}

impl Metrics {
    /// Swaps plus moves.
    pub fn data_movements(&self) -> u64 {
        self.swaps + self.moves
    }

    /// Comparisons plus swaps plus moves.
    pub fn total_operations(&self) -> u64 {
        self.comparisons + self.swaps + self.moves
    }
}

/// Scratch counters for a single run.
#[derive(Debug, Default)]
pub struct OpCounter {
    comparisons: u64,
    swaps: u64,
    moves: u64,
}

impl OpCounter {
    /// Create a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare two elements, counting one comparison whatever the outcome.
    #[inline]
    pub fn compare<T: Collate + ?Sized>(&mut self, a: &T, b: &T) -> Ordering {
        self.comparisons += 1;
        a.collate(b)
    }

    /// Exchange `data[i]` and `data[j]`, counting one swap.
    #[inline]
    pub fn swap<T>(&mut self, data: &mut [T], i: usize, j: usize) {
        self.swaps += 1;
        data.swap(i, j);
    }

    /// Count one element assignment.
    #[inline]
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Comparisons counted so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Swaps counted so far.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Moves counted so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Freeze the counters together with the run's clock samples.
    pub fn finish(self, start_time: f64, end_time: f64) -> Metrics {
        Metrics {
            comparisons: self.comparisons,
            swaps: self.swaps,
            moves: self.moves,
            start_time,
            end_time,
            execution_time: (end_time - start_time).max(0.0),
        }
    }
}
