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


//! Builder pattern for hand-made metrics and result sets.
//!
//! Scorer and exporter tests need exact counts and times, which real runs
//! cannot promise.

use sortlab_core::{Algorithm, Metrics, ResultSet, SortResult};

/// Builder for [`Metrics`].
///
/// # Examples
///
/// ```
/// use sortlab_test::fixtures::builders::MetricsBuilder;
///
/// let metrics = MetricsBuilder::new()
///     .comparisons(10)
///     .swaps(2)
///     .timing(1.0, 1.5)
///     .build();
///
/// assert_eq!(metrics.comparisons, 10);
/// assert_eq!(metrics.execution_time, 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsBuilder {
    metrics: Metrics,
}

impl MetricsBuilder {
    /// Creates a builder with every field zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparisons(mut self, comparisons: u64) -> Self {
        self.metrics.comparisons = comparisons;
        self
    }

    pub fn swaps(mut self, swaps: u64) -> Self {
        self.metrics.swaps = swaps;
        self
    }

    pub fn moves(mut self, moves: u64) -> Self {
        self.metrics.moves = moves;
        self
    }

    /// Sets start and end; execution time is their difference.
    pub fn timing(mut self, start: f64, end: f64) -> Self {
        self.metrics.start_time = start;
        self.metrics.end_time = end;
        self.metrics.execution_time = end - start;
        self
    }

    /// Sets the execution time alone, starting at zero.
    pub fn execution_time(self, time: f64) -> Self {
        self.timing(0.0, time)
    }

    pub fn build(self) -> Metrics {
        self.metrics
    }
}

/// Builder for a [`ResultSet`].
#[derive(Debug, Clone)]
pub struct ResultSetBuilder<T> {
    results: ResultSet<T>,
}

impl<T> Default for ResultSetBuilder<T> {
    fn default() -> Self {
        Self {
            results: ResultSet::new(),
        }
    }
}

impl<T> ResultSetBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the entry for `algorithm`.
    pub fn entry<F>(mut self, algorithm: Algorithm, sorted: Vec<T>, metrics: F) -> Self
    where
        F: FnOnce(MetricsBuilder) -> MetricsBuilder,
    {
        self.results.insert(
            algorithm,
            SortResult {
                sorted,
                metrics: metrics(MetricsBuilder::new()).build(),
            },
        );
        self
    }

    pub fn build(self) -> ResultSet<T> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_entry_replaces_earlier() {
        let results = ResultSetBuilder::new()
            .entry(Algorithm::Bubble, vec![1_i64], |m| m.comparisons(1))
            .entry(Algorithm::Bubble, vec![2_i64], |m| m.comparisons(2))
            .build();

        assert_eq!(results.len(), 1);
        assert_eq!(results[&Algorithm::Bubble].sorted, vec![2]);
        assert_eq!(results[&Algorithm::Bubble].metrics.comparisons, 2);
    }

    #[test]
    fn test_execution_time_starts_at_zero() {
        let m = MetricsBuilder::new().execution_time(2.0).build();
        assert_eq!(m.start_time, 0.0);
        assert_eq!(m.end_time, 2.0);
    }
}
