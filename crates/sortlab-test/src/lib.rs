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


//! Shared test fixtures and utilities for Sortlab crates.
//!
//! Canonical input batches, invalid input samples and builders for
//! deterministic result sets. Real runs carry wall-clock timings, which makes
//! exported output differ between runs; [`with_fixed_timing`] pins them.
//!
//! # Quick Start
//!
//! ```rust
//! use sortlab_test::{fixtures, with_fixed_timing};
//! use sortlab_core::{run_all, Algorithm};
//!
//! let input = fixtures::reversed_three();
//! let results = with_fixed_timing(run_all(&input, &Algorithm::ALL), 0.25);
//!
//! for result in results.values() {
//!     assert_eq!(result.metrics.execution_time, 0.25);
//! }
//!
//! use sortlab_test::fixtures::builders::ResultSetBuilder;
//! use sortlab_core::Value;
//!
//! let results = ResultSetBuilder::new()
//!     .entry(Algorithm::Merge, vec![Value::Int(1)], |m| m.comparisons(3).moves(4))
//!     .build();
//! assert_eq!(results.len(), 1);
//! ```

use sortlab_core::{ResultSet, Value};

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Vec<Value>)>;

/// Canonical input batches and builders.
pub mod fixtures;

pub use fixtures::*;

/// Overwrite the timing fields of every result.
///
/// Every run gets `start_time = 0`, `end_time = execution_time = time`.
/// Counts and sorted data are left alone.
pub fn with_fixed_timing<T>(mut results: ResultSet<T>, time: f64) -> ResultSet<T> {
    for result in results.values_mut() {
        result.metrics.start_time = 0.0;
        result.metrics.end_time = time;
        result.metrics.execution_time = time;
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortlab_core::{run_all, Algorithm};

    #[test]
    fn test_fixed_timing_keeps_counts() {
        let input = fixtures::reversed_three();
        let live = run_all(&input, &Algorithm::ALL);
        let fixed = with_fixed_timing(live.clone(), 1.5);

        for (algorithm, result) in &fixed {
            let original = &live[algorithm];
            assert_eq!(result.sorted, original.sorted);
            assert_eq!(result.metrics.comparisons, original.metrics.comparisons);
            assert_eq!(result.metrics.swaps, original.metrics.swaps);
            assert_eq!(result.metrics.moves, original.metrics.moves);
            assert_eq!(result.metrics.execution_time, 1.5);
            assert_eq!(result.metrics.end_time - result.metrics.start_time, 1.5);
        }
    }

    #[test]
    fn test_all_fixtures_are_non_empty() {
        for (name, fixture) in fixtures::all() {
            assert!(!fixture().is_empty(), "fixture {} is empty", name);
        }
    }
}
