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


//! Property-based tests for the instrumented sorting algorithms.
//!
//! # Properties Tested
//!
//! 1. **Permutation**: every algorithm returns the same multiset it was given
//! 2. **Ordering**: every result is non-decreasing under the collation rule
//! 3. **Fixed comparison counts**: bubble and selection always compare
//!    `n(n-1)/2` times
//! 4. **Insertion moves**: moves equal the number of inversions plus `n - 1`
//! 5. **Merge bound**: comparisons never exceed `n * ceil(log2 n)`
//! 6. **Rating monotonicity**: lowering the cost never lowers the rating

use proptest::prelude::*;
use sortlab_core::{rate, run, Algorithm, Collate, Metrics, Value};
use std::cmp::Ordering;

fn as_values(ints: &[i64]) -> Vec<Value> {
    ints.iter().copied().map(Value::Int).collect()
}

fn is_non_decreasing(values: &[Value]) -> bool {
    values
        .windows(2)
        .all(|w| w[0].collate(&w[1]) != Ordering::Greater)
}

fn inversions(ints: &[i64]) -> u64 {
    let mut count = 0;
    for i in 0..ints.len() {
        for j in i + 1..ints.len() {
            if ints[i] > ints[j] {
                count += 1;
            }
        }
    }
    count
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: integer results are a sorted permutation of the input.
    #[test]
    fn prop_integer_results_are_sorted_permutations(
        ints in prop::collection::vec(-1000_i64..1000, 0..60),
        algorithm in algorithm_strategy(),
    ) {
        let input = as_values(&ints);
        let result = run(algorithm, &input);

        let mut expected = ints.clone();
        expected.sort_unstable();
        prop_assert_eq!(result.sorted, as_values(&expected));
    }

    /// Property: text results are ordered and keep the input multiset.
    #[test]
    fn prop_text_results_are_sorted_permutations(
        words in prop::collection::vec("[a-zA-Z_0-9.]{0,8}", 0..40),
        algorithm in algorithm_strategy(),
    ) {
        let input: Vec<Value> = words.iter().map(|w| Value::from(w.as_str())).collect();
        let result = run(algorithm, &input);

        prop_assert!(is_non_decreasing(&result.sorted));

        let mut got: Vec<String> = result.sorted.iter().map(|v| v.to_string()).collect();
        let mut want = words.clone();
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    /// Property: bubble and selection comparisons depend only on length.
    #[test]
    fn prop_quadratic_comparison_counts(ints in prop::collection::vec(any::<i64>(), 0..50)) {
        let n = ints.len() as u64;
        let expected = n * n.saturating_sub(1) / 2;
        let input = as_values(&ints);

        prop_assert_eq!(run(Algorithm::Bubble, &input).metrics.comparisons, expected);
        prop_assert_eq!(run(Algorithm::Selection, &input).metrics.comparisons, expected);
    }

    /// Property: bubble swaps equal inversions, selection swaps stay below n.
    #[test]
    fn prop_swap_counts(ints in prop::collection::vec(-50_i64..50, 0..50)) {
        let input = as_values(&ints);
        let bubble = run(Algorithm::Bubble, &input).metrics;
        let selection = run(Algorithm::Selection, &input).metrics;

        prop_assert_eq!(bubble.swaps, inversions(&ints));
        prop_assert!(selection.swaps <= (ints.len() as u64).saturating_sub(1));
        prop_assert_eq!(bubble.moves, 0);
        prop_assert_eq!(selection.moves, 0);
    }

    /// Property: each insertion key costs its shifts plus one placement.
    #[test]
    fn prop_insertion_moves(ints in prop::collection::vec(-50_i64..50, 1..50)) {
        let metrics = run(Algorithm::Insertion, &as_values(&ints)).metrics;
        prop_assert_eq!(metrics.moves, inversions(&ints) + ints.len() as u64 - 1);
        prop_assert_eq!(metrics.swaps, 0);
    }

    /// Property: merge sort stays within the divide-and-conquer bound.
    #[test]
    fn prop_merge_bounds(ints in prop::collection::vec(any::<i64>(), 2..200)) {
        let n = ints.len() as u64;
        let levels = 64 - (n - 1).leading_zeros() as u64;
        let metrics = run(Algorithm::Merge, &as_values(&ints)).metrics;

        prop_assert!(metrics.comparisons <= n * levels);
        prop_assert!(metrics.moves <= n * levels);
        prop_assert!(metrics.moves >= n);
        prop_assert_eq!(metrics.swaps, 0);
    }

    /// Property: reducing cost never lowers the rating.
    #[test]
    fn prop_rating_is_monotonic(
        comparisons in 0_u64..20_000,
        movements in 0_u64..20_000,
        time in 0.0_f64..200.0,
        saved in 0_u64..20_000,
    ) {
        let costly = Metrics {
            comparisons,
            moves: movements,
            execution_time: time,
            ..Default::default()
        };
        let cheaper = Metrics {
            comparisons: comparisons.saturating_sub(saved),
            ..costly
        };
        prop_assert!(rate(&cheaper) >= rate(&costly));
    }
}
