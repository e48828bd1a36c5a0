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


//! CSV export of Sortlab analysis results.
//!
//! One row per algorithm, in the result set's iteration order:
//!
//! ```text
//! Algorithm,Execution Time (ms),Comparisons,Swaps,Moves,Total Operations,Efficiency,Sorted Data
//! "bubble",0.0123,3,3,0,3,"Excellent","1;3;5"
//! ```
//!
//! The execution time is printed with four decimals and the sorted values are
//! joined by `;`.
//!
//! # Examples
//!
//! ```
//! use sortlab_core::{parse_input, run_all, Algorithm, DataType};
//! use sortlab_csv::to_csv;
//!
//! let values = parse_input("5, 3, 1", DataType::Integer).unwrap();
//! let results = run_all(&values, &[Algorithm::Merge]);
//!
//! let csv = to_csv(&results).unwrap();
//! assert!(csv.lines().nth(1).unwrap().starts_with("\"merge\","));
//! ```
//!
//! ## Custom Configuration
//!
//! ```
//! use sortlab_core::{ResultSet, Value};
//! use sortlab_csv::{to_csv_with_config, ToCsvConfig};
//!
//! let config = ToCsvConfig {
//!     delimiter: b'\t',
//!     include_headers: false,
//!     ..Default::default()
//! };
//! let csv = to_csv_with_config(&ResultSet::<Value>::new(), config).unwrap();
//! assert!(csv.is_empty());
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig, HEADERS,
};
