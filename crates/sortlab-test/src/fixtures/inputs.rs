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


//! Valid input batches.

use sortlab_core::Value;

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

fn texts(values: &[&str]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

/// `[5, 3, 1]`, the smallest batch where every algorithm does real work.
pub fn reversed_three() -> Vec<Value> {
    ints(&[5, 3, 1])
}

/// Already sorted integers.
pub fn sorted_integers() -> Vec<Value> {
    ints(&[1, 2, 3, 4, 5, 6, 7, 8])
}

/// Strictly descending integers, the worst case for the quadratic sorts.
pub fn reversed_integers() -> Vec<Value> {
    ints(&[8, 7, 6, 5, 4, 3, 2, 1])
}

/// Integers with repeated values.
pub fn duplicate_integers() -> Vec<Value> {
    ints(&[4, 1, 4, 2, 1, 4])
}

/// Integers spanning zero and the `i64` extremes.
pub fn negative_integers() -> Vec<Value> {
    ints(&[0, -7, i64::MAX, 12, i64::MIN, -1])
}

/// A batch of one.
pub fn single_integer() -> Vec<Value> {
    ints(&[42])
}

/// File names as the sample generator produces them.
pub fn filenames() -> Vec<Value> {
    texts(&[
        "report_7.pdf",
        "archive_12.zip",
        "image_3.png",
        "data_100.csv",
        "audio_45.mp3",
    ])
}

/// Names that differ only in case and accents.
pub fn mixed_case_names() -> Vec<Value> {
    texts(&["banana", "Apple", "cherry", "apple", "Äpfel", "Banana"])
}
