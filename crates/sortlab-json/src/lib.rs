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


//! JSON export of Sortlab analysis results.
//!
//! The export document carries the input batch, every algorithm's sorted
//! copy and metrics, and a short summary:
//!
//! ```text
//! {
//!   "timestamp": "2025-01-01T12:00:00.000000+00:00",
//!   "originalData": [5, 3, 1],
//!   "results": {
//!     "bubble": {
//!       "sorted": [1, 3, 5],
//!       "metrics": { "comparisons": 3, "swaps": 3, "moves": 0,
//!                    "startTime": 1.2, "endTime": 1.3, "executionTime": 0.1 }
//!     }
//!   },
//!   "summary": { "totalAlgorithms": 1, "mostEfficient": "bubble", "dataCount": 3 }
//! }
//! ```
//!
//! Integers serialize as JSON numbers and text as strings.
//!
//! # Examples
//!
//! ```
//! use sortlab_core::{parse_input, run_all, Algorithm, DataType};
//! use sortlab_json::{to_json, ToJsonConfig};
//!
//! let values = parse_input("b.txt, a.txt", DataType::Text).unwrap();
//! let results = run_all(&values, &Algorithm::ALL);
//!
//! let json = to_json(&values, &results, &ToJsonConfig::default()).unwrap();
//! assert!(json.contains("\"originalData\""));
//! assert!(json.contains("\"mostEfficient\""));
//! ```

mod error;
mod export;

pub use error::{JsonError, Result};
pub use export::{
    from_json, to_json, to_json_value, to_json_writer, AnalysisExport, Summary, ToJsonConfig,
};
