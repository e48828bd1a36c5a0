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


//! Raw input that validation must reject.

use sortlab_core::{DataType, InputError};

/// Invalid raw inputs as `(name, raw, data_type, expected_error)`.
pub fn invalid_inputs() -> Vec<(&'static str, &'static str, DataType, InputError)> {
    vec![
        ("empty", "", DataType::Integer, InputError::Empty),
        ("whitespace_only", " \t\n ", DataType::Text, InputError::Empty),
        ("separators_only", ", , ,", DataType::Integer, InputError::NoValidData),
        (
            "leading_decimal_point",
            "1, .5, 3",
            DataType::Integer,
            InputError::InvalidInteger {
                token: ".5".to_string(),
            },
        ),
        (
            "word_in_integers",
            "10, twenty",
            DataType::Integer,
            InputError::InvalidInteger {
                token: "twenty".to_string(),
            },
        ),
        (
            "bare_hex_prefix",
            "1, 0x, 2",
            DataType::Integer,
            InputError::InvalidInteger {
                token: "0x".to_string(),
            },
        ),
    ]
}
