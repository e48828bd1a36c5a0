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


//! Canonical test fixtures.
//!
//! - **inputs**: valid batches of integers and file names
//! - **errors**: raw input that validation must reject
//! - **builders**: builder pattern for hand-made metrics and result sets

pub mod builders;
pub mod errors;
mod inputs;

pub use inputs::*;

use crate::FixtureList;

/// Returns all input fixtures for iteration.
///
/// Useful for running the same test across every batch.
pub fn all() -> FixtureList {
    vec![
        ("reversed_three", reversed_three),
        ("sorted_integers", sorted_integers),
        ("reversed_integers", reversed_integers),
        ("duplicate_integers", duplicate_integers),
        ("negative_integers", negative_integers),
        ("single_integer", single_integer),
        ("filenames", filenames),
        ("mixed_case_names", mixed_case_names),
    ]
}
