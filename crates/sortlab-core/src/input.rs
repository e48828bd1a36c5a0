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


//! Input validation and parsing.
//!
//! Raw input is a comma-separated list. Tokens are trimmed and blank tokens
//! are dropped, so `"5, 3,,1 "` yields three values.
//!
//! In integer mode each token is read up to its longest integer prefix, so
//! `"2.5"` is 2 and `"12abc"` is 12. A leading `0x` switches to hexadecimal.
//! Values beyond the `i64` range saturate. The whole batch is rejected at the
//! first token with no integer prefix; there is no partial acceptance.

use crate::algorithm::Algorithm;
use crate::error::{InputError, InputResult};
use crate::limits::Limits;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Declared type of an input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// Signed 64-bit integers, e.g. file sizes.
    #[default]
    Integer,
    /// Text tokens, e.g. file names.
    Text,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Text => f.write_str("text"),
        }
    }
}

impl FromStr for DataType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(Self::Integer),
            "text" | "string" => Ok(Self::Text),
            _ => Err(InputError::UnknownDataType(s.trim().to_string())),
        }
    }
}

/// Parse raw input with the default [`Limits`].
///
/// # Errors
///
/// See [`parse_input_with_limits`].
///
/// # Examples
///
/// ```
/// use sortlab_core::{parse_input, DataType, Value};
///
/// let values = parse_input(" 5, 3,, 1 ", DataType::Integer).unwrap();
/// assert_eq!(values, vec![Value::Int(5), Value::Int(3), Value::Int(1)]);
///
/// let names = parse_input("b.txt,a.txt", DataType::Text).unwrap();
/// assert_eq!(names, vec![Value::from("b.txt"), Value::from("a.txt")]);
/// ```
pub fn parse_input(raw: &str, data_type: DataType) -> InputResult<Vec<Value>> {
    parse_input_with_limits(raw, data_type, &Limits::default())
}

/// Parse raw input into a homogeneous batch of values.
///
/// # Errors
///
/// - [`InputError::Empty`] if `raw` is empty or whitespace only
/// - [`InputError::NoValidData`] if no non-blank token remains after splitting
/// - [`InputError::TooManyValues`] / [`InputError::TokenTooLong`] on limit violations
/// - [`InputError::InvalidInteger`] for the first token without an integer
///   prefix in [`DataType::Integer`] mode
pub fn parse_input_with_limits(
    raw: &str,
    data_type: DataType,
    limits: &Limits,
) -> InputResult<Vec<Value>> {
    if raw.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let tokens: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::NoValidData);
    }

    if tokens.len() > limits.max_values {
        return Err(InputError::TooManyValues {
            limit: limits.max_values,
            actual: tokens.len(),
        });
    }

    if let Some((position, token)) = tokens
        .iter()
        .enumerate()
        .find(|(_, token)| token.len() > limits.max_token_length)
    {
        return Err(InputError::TokenTooLong {
            position,
            limit: limits.max_token_length,
            actual: token.len(),
        });
    }

    let values = match data_type {
        DataType::Integer => tokens
            .iter()
            .map(|token| {
                parse_integer_prefix(token)
                    .map(Value::Int)
                    .ok_or_else(|| InputError::InvalidInteger {
                        token: token.to_string(),
                    })
            })
            .collect::<InputResult<Vec<_>>>()?,
        DataType::Text => tokens.iter().map(|token| Value::from(*token)).collect(),
    };

    debug!(count = values.len(), %data_type, "input validated");
    Ok(values)
}

/// Read the longest integer prefix of a trimmed token.
///
/// Returns `None` when no digit follows the optional sign and `0x` prefix.
fn parse_integer_prefix(token: &str) -> Option<i64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        let digit = i64::from(digit);
        value = value.saturating_mul(i64::from(radix));
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}

/// Parse a comma-separated list of algorithm identifiers.
///
/// Blank entries are ignored and duplicates are kept; [`run_all`](crate::run_all)
/// collapses them.
///
/// # Examples
///
/// ```
/// use sortlab_core::{parse_algorithms, Algorithm};
///
/// let selected = parse_algorithms("merge, bubble").unwrap();
/// assert_eq!(selected, vec![Algorithm::Merge, Algorithm::Bubble]);
/// ```
pub fn parse_algorithms(raw: &str) -> InputResult<Vec<Algorithm>> {
    let algorithms = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::parse)
        .collect::<InputResult<Vec<Algorithm>>>()?;

    require_algorithms(&algorithms)?;
    Ok(algorithms)
}

/// Reject an empty algorithm selection.
///
/// # Errors
///
/// Returns [`InputError::NoAlgorithmSelected`] if `algorithms` is empty.
pub fn require_algorithms(algorithms: &[Algorithm]) -> InputResult<()> {
    if algorithms.is_empty() {
        Err(InputError::NoAlgorithmSelected)
    } else {
        Ok(())
    }
}
