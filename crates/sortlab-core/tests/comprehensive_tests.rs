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


//! End-to-end tests: raw input through sorting to ranking.

use sortlab_core::{
    most_efficient, parse_input, rate, run, run_all, score, Algorithm, DataType, Rating,
    SampleGenerator, Value,
};

#[test]
fn test_integer_pipeline() {
    let values = parse_input("5, 3, 1", DataType::Integer).unwrap();
    let results = run_all(&values, &Algorithm::ALL);

    assert_eq!(results.len(), 4);
    for result in results.values() {
        assert_eq!(
            result.sorted,
            vec![Value::Int(1), Value::Int(3), Value::Int(5)]
        );
    }

    let bubble = &results[&Algorithm::Bubble].metrics;
    assert_eq!((bubble.comparisons, bubble.swaps, bubble.moves), (3, 3, 0));

    let selection = &results[&Algorithm::Selection].metrics;
    assert_eq!((selection.comparisons, selection.swaps), (3, 1));

    let insertion = &results[&Algorithm::Insertion].metrics;
    assert_eq!((insertion.comparisons, insertion.moves), (3, 5));

    let merge = &results[&Algorithm::Merge].metrics;
    assert_eq!((merge.comparisons, merge.moves), (2, 5));
}

#[test]
fn test_text_pipeline_sorts_case_insensitively() {
    let values = parse_input("cherry, Banana, apple", DataType::Text).unwrap();
    let result = run(Algorithm::Merge, &values);
    let sorted: Vec<String> = result.sorted.iter().map(Value::to_string).collect();
    assert_eq!(sorted, vec!["apple", "Banana", "cherry"]);
}

#[test]
fn test_text_pipeline_orders_punctuation_like_cldr() {
    let values = parse_input("report.txt, report_1.txt, a-b, a_b", DataType::Text).unwrap();
    let results = run_all(&values, &Algorithm::ALL);

    for result in results.values() {
        let sorted: Vec<String> = result.sorted.iter().map(Value::to_string).collect();
        assert_eq!(sorted, vec!["a_b", "a-b", "report_1.txt", "report.txt"]);
    }
}

#[test]
fn test_small_inputs_rate_excellent() {
    let values = parse_input("2, 1", DataType::Integer).unwrap();
    for result in run_all(&values, &Algorithm::ALL).values() {
        assert_eq!(rate(&result.metrics), Rating::Excellent);
    }
}

#[test]
fn test_most_efficient_is_lowest_score() {
    let raw = SampleGenerator::seeded(2025).generate(DataType::Integer, 300);
    let values = parse_input(&raw, DataType::Integer).unwrap();
    let results = run_all(&values, &Algorithm::ALL);

    let winner = most_efficient(&results).unwrap();
    let best = score(&results[&winner].metrics);
    assert!(results.values().all(|r| score(&r.metrics) >= best));
}

#[test]
fn test_merge_beats_quadratic_sorts_on_operation_count() {
    let values: Vec<Value> = (0..500).rev().map(Value::Int).collect();
    let results = run_all(&values, &Algorithm::ALL);

    let merge_ops = results[&Algorithm::Merge].metrics.total_operations();
    for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        assert!(results[&algorithm].metrics.total_operations() > merge_ops);
    }
}

#[test]
fn test_sorter_is_usable_across_threads() {
    let values: Vec<Value> = (0..100).rev().map(Value::Int).collect();
    let handles: Vec<_> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let values = values.clone();
            std::thread::spawn(move || run(algorithm, &values))
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.sorted.first(), Some(&Value::Int(0)));
        assert_eq!(result.sorted.len(), 100);
    }
}
