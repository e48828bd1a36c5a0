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


//! Value types fed to the sorter.

use crate::collation::locale_cmp;
use crate::input::DataType;
use std::cmp::Ordering;
use std::fmt;

/// The ordering relation the instrumented algorithms count.
///
/// Each call to [`OpCounter::compare`](crate::OpCounter::compare) invokes
/// `collate` exactly once.
pub trait Collate {
    /// Compare `self` with `other`.
    fn collate(&self, other: &Self) -> Ordering;
}

/// A single element of an analysis batch.
///
/// A batch is homogeneous: every value produced by
/// [`parse_input`](crate::parse_input) for one call shares the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Signed 64-bit integer.
    Int(i64),
    /// Text token, such as a filename.
    Text(String),
}

impl Value {
    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Try to get the value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// The data type this value belongs to.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Int(_) => DataType::Integer,
            Self::Text(_) => DataType::Text,
        }
    }
}

impl Collate for Value {
    /// Integers compare numerically, text compares with [`locale_cmp`].
    ///
    /// Mixed batches are outside the sorter's contract; they still get a total
    /// order (integers before text) so a malformed batch cannot panic.
    fn collate(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => locale_cmp(a, b),
            (Self::Int(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Int(_)) => Ordering::Greater,
        }
    }
}

impl Collate for i64 {
    fn collate(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Collate for String {
    fn collate(&self, other: &Self) -> Ordering {
        locale_cmp(self, other)
    }
}

impl Collate for &str {
    fn collate(&self, other: &Self) -> Ordering {
        locale_cmp(self, other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_compare_numerically() {
        assert_eq!(Value::Int(-5).collate(&Value::Int(3)), Ordering::Less);
        assert_eq!(Value::Int(10).collate(&Value::Int(9)), Ordering::Greater);
        assert_eq!(Value::Int(7).collate(&Value::Int(7)), Ordering::Equal);
    }

    #[test]
    fn test_extreme_integers_do_not_overflow() {
        assert_eq!(
            Value::Int(i64::MIN).collate(&Value::Int(i64::MAX)),
            Ordering::Less
        );
    }

    #[test]
    fn test_text_uses_locale_order() {
        assert_eq!(
            Value::from("apple").collate(&Value::from("Banana")),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_values_have_total_order() {
        assert_eq!(Value::Int(1).collate(&Value::from("1")), Ordering::Less);
        assert_eq!(Value::from("1").collate(&Value::Int(1)), Ordering::Greater);
    }

    #[test]
    fn test_accessors_and_display() {
        let n = Value::Int(42);
        assert_eq!(n.as_int(), Some(42));
        assert_eq!(n.as_text(), None);
        assert_eq!(n.data_type(), DataType::Integer);
        assert_eq!(n.to_string(), "42");

        let t = Value::from("report_7.pdf");
        assert_eq!(t.as_text(), Some("report_7.pdf"));
        assert_eq!(t.data_type(), DataType::Text);
        assert_eq!(t.to_string(), "report_7.pdf");
    }
}
