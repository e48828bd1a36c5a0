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


//! Instrumented sorting engine and efficiency scoring for Sortlab.
//!
//! This crate runs four textbook sorting algorithms (bubble, selection,
//! insertion, merge) over a batch of values and reports what each one cost:
//! comparisons, swaps, moves and elapsed time. A small scorer turns those
//! counts into a composite score, a four-tier rating and a winner.
//!
//! # Overview
//!
//! - [`parse_input`]: validate raw comma-separated input into [`Value`]s
//! - [`run`] / [`run_all`]: sort a private copy and collect [`Metrics`]
//! - [`score`], [`rate`], [`most_efficient`]: rank the results
//! - [`SampleGenerator`]: synthetic demo data
//!
//! # Examples
//!
//! ```
//! use sortlab_core::{most_efficient, parse_input, rate, run_all, Algorithm, DataType};
//!
//! let values = parse_input("42, 7, 19, 3", DataType::Integer).unwrap();
//! let results = run_all(&values, &Algorithm::ALL);
//!
//! for (algorithm, result) in &results {
//!     println!(
//!         "{}: {} comparisons, rated {}",
//!         algorithm.display_name(),
//!         result.metrics.comparisons,
//!         rate(&result.metrics)
//!     );
//! }
//!
//! assert!(most_efficient(&results).is_some());
//! ```
//!
//! # Counting Rules
//!
//! - Every evaluation of the ordering relation is one comparison, equal
//!   elements included.
//! - Bubble and selection sort exchange elements in place; each exchange is one
//!   swap.
//! - Insertion and merge sort assign elements into slots; each assignment is
//!   one move, including assignments that leave an element where it was.
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the data model.

mod algorithm;
pub mod collation;
mod error;
mod input;
mod limits;
mod metrics;
mod sample;
mod score;
pub mod sort;
mod sorter;
mod value;

pub use algorithm::Algorithm;
pub use error::{InputError, InputResult};
pub use input::{parse_algorithms, parse_input, parse_input_with_limits, require_algorithms, DataType};
pub use limits::Limits;
pub use metrics::{now_ms, Metrics, OpCounter};
pub use sample::{SampleGenerator, DEFAULT_SAMPLE_SIZE, MAX_SAMPLE_INT, MIN_SAMPLE_INT};
pub use score::{efficiency, most_efficient, rate, score, Rating, EFFICIENCY_SCALE, OPERATION_WEIGHT};
pub use sorter::{measure, run, run_all, ResultSet, SortResult};
pub use value::{Collate, Value};
