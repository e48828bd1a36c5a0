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


//! End-to-end JSON export over real runs.

use chrono::DateTime;
use serde_json::json;
use sortlab_core::{run_all, Algorithm, Value};
use sortlab_json::{from_json, to_json, to_json_value, to_json_writer, ToJsonConfig};
use sortlab_test::fixtures::builders::ResultSetBuilder;
use sortlab_test::{fixtures, with_fixed_timing};

#[test]
fn test_timestamp_is_rfc3339() {
    let input = fixtures::reversed_three();
    let results = run_all(&input, &Algorithm::ALL);
    let value = to_json_value(&input, &results).unwrap();

    let timestamp = value["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[test]
fn test_integer_export_counts() {
    let input = fixtures::reversed_three();
    let results = with_fixed_timing(run_all(&input, &Algorithm::ALL), 0.5);
    let value = to_json_value(&input, &results).unwrap();

    assert_eq!(value["originalData"], json!([5, 3, 1]));
    assert_eq!(value["results"]["bubble"]["metrics"]["swaps"], 3);
    assert_eq!(value["results"]["selection"]["metrics"]["swaps"], 1);
    assert_eq!(value["results"]["insertion"]["metrics"]["moves"], 5);
    assert_eq!(value["results"]["merge"]["metrics"]["comparisons"], 2);
    assert_eq!(value["results"]["merge"]["sorted"], json!([1, 3, 5]));

    // bubble: 0.5 + 0.3 + 0.3 = 1.1, the lowest score
    assert_eq!(value["summary"]["mostEfficient"], "bubble");
    assert_eq!(value["summary"]["totalAlgorithms"], 4);
    assert_eq!(value["summary"]["dataCount"], 3);
}

#[test]
fn test_text_values_are_strings() {
    let input = fixtures::mixed_case_names();
    let results = run_all(&input, &[Algorithm::Merge]);
    let value = to_json_value(&input, &results).unwrap();

    assert_eq!(
        value["results"]["merge"]["sorted"],
        json!(["Äpfel", "apple", "Apple", "banana", "Banana", "cherry"])
    );
}

#[test]
fn test_only_selected_algorithms_are_present() {
    let input = fixtures::sorted_integers();
    let results = run_all(&input, &[Algorithm::Insertion]);
    let value = to_json_value(&input, &results).unwrap();

    let keys: Vec<&String> = value["results"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["insertion"]);
}

#[test]
fn test_winner_from_built_metrics() {
    let results = ResultSetBuilder::new()
        .entry(Algorithm::Bubble, vec![Value::Int(1)], |m| m.comparisons(50))
        .entry(Algorithm::Merge, vec![Value::Int(1)], |m| m.comparisons(5))
        .build();
    let value = to_json_value(&[Value::Int(1)], &results).unwrap();
    assert_eq!(value["summary"]["mostEfficient"], "merge");
}

#[test]
fn test_writer_output_reads_back() {
    let input = fixtures::negative_integers();
    let results = run_all(&input, &Algorithm::ALL);

    let mut buffer = Vec::new();
    to_json_writer(&input, &results, &mut buffer, &ToJsonConfig { pretty: false }).unwrap();
    let export = from_json(std::str::from_utf8(&buffer).unwrap()).unwrap();

    assert_eq!(export.original_data, input);
    assert_eq!(export.results, results);
    assert_eq!(export.summary.data_count, input.len());
}

#[test]
fn test_string_output_reads_back() {
    let input = fixtures::filenames();
    let results = run_all(&input, &Algorithm::ALL);
    let json = to_json(&input, &results, &ToJsonConfig::default()).unwrap();

    let export = from_json(&json).unwrap();
    assert_eq!(export.results.len(), 4);
    for result in export.results.values() {
        assert_eq!(result.sorted[0], Value::from("archive_12.zip"));
    }
}
