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


//! Running algorithms and packaging their results.
//!
//! [`measure`] is the single wrapper that times a run, owns the scratch
//! counters and snapshots them into a [`SortResult`]. [`run`] and [`run_all`]
//! apply it to the algorithms. The caller's input is never mutated; every run
//! sorts its own copy.
//!
//! # Thread Safety
//!
//! All functions here are pure apart from reading the monotonic clock. Each
//! run creates its own [`OpCounter`], so they may be called from any number of
//! threads at once.

use crate::algorithm::Algorithm;
use crate::metrics::{now_ms, Metrics, OpCounter};
use crate::value::{Collate, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Outcome of one algorithm run.
///
/// `metrics` is a snapshot owned by the result; later runs cannot change it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortResult<T = Value> {
    /// Sorted copy of the input.
    pub sorted: Vec<T>,
    /// Cost of producing `sorted`.
    pub metrics: Metrics,
}

/// Results of one analysis, keyed by algorithm.
///
/// Iterates in [`Algorithm::ALL`] order.
pub type ResultSet<T = Value> = BTreeMap<Algorithm, SortResult<T>>;

/// Time `work` on a private copy of `input`.
///
/// The start sample is taken before the copy is made and the end sample right
/// after `work` returns.
///
/// # Examples
///
/// ```
/// use sortlab_core::measure;
///
/// let result = measure(&[3_i64, 1, 2], |data, ops| {
///     ops.swap(data, 0, 1);
/// });
/// assert_eq!(result.sorted, vec![1, 3, 2]);
/// assert_eq!(result.metrics.swaps, 1);
/// ```
pub fn measure<T, F>(input: &[T], work: F) -> SortResult<T>
where
    T: Clone,
    F: FnOnce(&mut [T], &mut OpCounter),
{
    let mut ops = OpCounter::new();
    let start = now_ms();

    let mut data = input.to_vec();
    work(&mut data, &mut ops);

    let end = now_ms();
    SortResult {
        sorted: data,
        metrics: ops.finish(start, end),
    }
}

/// Run one algorithm over `input`.
///
/// # Examples
///
/// ```
/// use sortlab_core::{run, Algorithm, Value};
///
/// let input = vec![Value::Int(5), Value::Int(3), Value::Int(1)];
/// let result = run(Algorithm::Bubble, &input);
///
/// assert_eq!(result.sorted, vec![Value::Int(1), Value::Int(3), Value::Int(5)]);
/// assert_eq!(result.metrics.comparisons, 3);
/// assert_eq!(result.metrics.swaps, 3);
/// ```
pub fn run<T: Collate + Clone>(algorithm: Algorithm, input: &[T]) -> SortResult<T> {
    let result = measure(input, |data, ops| algorithm.sort(data, ops));

    debug!(
        algorithm = algorithm.id(),
        len = input.len(),
        comparisons = result.metrics.comparisons,
        swaps = result.metrics.swaps,
        moves = result.metrics.moves,
        execution_time_ms = result.metrics.execution_time,
        "sort run finished"
    );

    result
}

/// Run every selected algorithm over `input`, one after another.
///
/// Duplicates in `algorithms` are collapsed and runs happen in
/// [`Algorithm::ALL`] order regardless of the order given. An empty selection
/// yields an empty set; rejecting it is the caller's job (see
/// [`require_algorithms`](crate::require_algorithms)).
///
/// # Examples
///
/// ```
/// use sortlab_core::{run_all, Algorithm, Value};
///
/// let input: Vec<Value> = vec!["b".into(), "a".into()];
/// let results = run_all(&input, &[Algorithm::Merge, Algorithm::Insertion]);
///
/// assert_eq!(results.len(), 2);
/// let insertion = &results[&Algorithm::Insertion];
/// assert_eq!(insertion.metrics.moves, 2);
/// ```
pub fn run_all<T: Collate + Clone>(input: &[T], algorithms: &[Algorithm]) -> ResultSet<T> {
    Algorithm::ALL
        .iter()
        .filter(|algorithm| algorithms.contains(algorithm))
        .map(|&algorithm| (algorithm, run(algorithm, input)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = ints(&[9, 4, 7, 1]);
        let before = input.clone();
        for algorithm in Algorithm::ALL {
            let _ = run(algorithm, &input);
        }
        assert_eq!(input, before);
    }

    #[test]
    fn test_each_run_starts_from_zero() {
        let input = ints(&[3, 2, 1]);
        let first = run(Algorithm::Bubble, &input);
        let second = run(Algorithm::Bubble, &input);
        assert_eq!(first.metrics.comparisons, second.metrics.comparisons);
        assert_eq!(first.metrics.swaps, second.metrics.swaps);
    }

    #[test]
    fn test_returned_results_are_snapshots() {
        let input = ints(&[3, 2, 1]);
        let results = run_all(&input, &Algorithm::ALL);
        let bubble = results[&Algorithm::Bubble].clone();
        let _ = run_all(&input, &Algorithm::ALL);
        assert_eq!(results[&Algorithm::Bubble], bubble);
    }

    #[test]
    fn test_timing_is_consistent() {
        let input = ints(&(0..200).rev().collect::<Vec<_>>());
        let result = run(Algorithm::Insertion, &input);
        let m = result.metrics;
        assert!(m.execution_time >= 0.0);
        assert!(m.end_time >= m.start_time);
        assert!((m.end_time - m.start_time - m.execution_time).abs() < 1e-9);
    }

    #[test]
    fn test_run_all_selects_and_dedups() {
        let input = ints(&[2, 1]);
        let results = run_all(
            &input,
            &[Algorithm::Merge, Algorithm::Bubble, Algorithm::Merge],
        );
        let keys: Vec<_> = results.keys().copied().collect();
        assert_eq!(keys, vec![Algorithm::Bubble, Algorithm::Merge]);
    }

    #[test]
    fn test_run_all_empty_selection() {
        let results = run_all(&ints(&[1, 2, 3]), &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let results = run_all::<Value>(&[], &Algorithm::ALL);
        assert_eq!(results.len(), 4);
        for result in results.values() {
            assert!(result.sorted.is_empty());
            assert_eq!(result.metrics.total_operations(), 0);
        }
    }

    #[test]
    fn test_small_known_inputs() {
        let bubble = run(Algorithm::Bubble, &ints(&[5, 3, 1]));
        assert_eq!(bubble.sorted, ints(&[1, 3, 5]));
        assert_eq!(bubble.metrics.comparisons, 3);
        assert_eq!(bubble.metrics.swaps, 3);

        let selection = run(Algorithm::Selection, &ints(&[2, 2, 2]));
        assert_eq!(selection.sorted, ints(&[2, 2, 2]));
        assert_eq!(selection.metrics.comparisons, 3);
        assert_eq!(selection.metrics.swaps, 0);

        let text: Vec<Value> = vec!["b".into(), "a".into()];
        let insertion = run(Algorithm::Insertion, &text);
        assert_eq!(insertion.sorted, vec![Value::from("a"), Value::from("b")]);
        assert_eq!(insertion.metrics.comparisons, 1);
        assert_eq!(insertion.metrics.moves, 2);
    }
}
