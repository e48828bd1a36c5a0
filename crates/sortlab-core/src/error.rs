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


//! Error types for input validation.
//!
//! The sorter and scorer never fail; every error in this crate comes from
//! turning raw user input into a batch of [`Value`](crate::Value)s or a set of
//! [`Algorithm`](crate::Algorithm)s.

use thiserror::Error;

/// An error raised while validating user input.
///
/// # Examples
///
/// ```
/// use sortlab_core::{parse_input, DataType, InputError};
///
/// let err = parse_input("4, x, 7", DataType::Integer).unwrap_err();
/// assert_eq!(err, InputError::InvalidInteger { token: "x".to_string() });
/// assert_eq!(err.to_string(), "\"x\" is not a valid integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The raw input was empty or contained only whitespace.
    #[error("Input cannot be empty")]
    Empty,

    /// Splitting the input produced no non-blank tokens (e.g. `", ,"`).
    #[error("No valid data found")]
    NoValidData,

    /// A token could not be parsed as a 64-bit integer in integer mode.
    ///
    /// Only the first offending token is reported; the whole batch is rejected.
    #[error("\"{token}\" is not a valid integer")]
    InvalidInteger {
        /// The token as it appeared in the input, trimmed.
        token: String,
    },

    /// The batch holds more values than [`Limits::max_values`](crate::Limits).
    #[error("Input has {actual} values, maximum allowed is {limit}")]
    TooManyValues {
        /// Configured maximum.
        limit: usize,
        /// Number of values in the batch.
        actual: usize,
    },

    /// A single token is longer than [`Limits::max_token_length`](crate::Limits).
    #[error("Token at position {position} is {actual} bytes long, maximum allowed is {limit}")]
    TokenTooLong {
        /// Zero-based position of the token among the non-blank tokens.
        position: usize,
        /// Configured maximum in bytes.
        limit: usize,
        /// Actual token length in bytes.
        actual: usize,
    },

    /// The declared data type is not `integer` or `text`.
    #[error("Unknown data type '{0}' (expected 'integer' or 'text')")]
    UnknownDataType(String),

    /// An algorithm identifier did not match any known algorithm.
    #[error("Unknown algorithm '{0}' (expected one of: bubble, selection, insertion, merge)")]
    UnknownAlgorithm(String),

    /// No algorithm was selected for the analysis.
    #[error("Please select at least one algorithm")]
    NoAlgorithmSelected,
}

/// Result alias for input validation.
pub type InputResult<T> = std::result::Result<T, InputError>;
