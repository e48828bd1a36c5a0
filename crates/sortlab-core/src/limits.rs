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


//! Resource limits for input parsing.

/// Bounds applied by [`parse_input_with_limits`](crate::parse_input_with_limits).
///
/// The quadratic algorithms make very large batches impractical long before
/// memory runs out, so the defaults are generous rather than tight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of values in one batch (default: 1M).
    pub max_values: usize,
    /// Maximum length of a single token in bytes (default: 4KB).
    pub max_token_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_values: 1_000_000,
            max_token_length: 4096,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_values: usize::MAX,
            max_token_length: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_values, 1_000_000);
        assert_eq!(limits.max_token_length, 4096);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_values, usize::MAX);
        assert_eq!(limits.max_token_length, usize::MAX);
    }
}
