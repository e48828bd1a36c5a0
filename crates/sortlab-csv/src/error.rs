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


//! Error types for CSV export.

use thiserror::Error;

/// CSV export error types.
///
/// # Examples
///
/// ```
/// use sortlab_csv::CsvError;
///
/// let err = CsvError::InvalidUtf8 {
///     context: "CSV output".to_string(),
/// };
/// assert_eq!(err.to_string(), "Invalid UTF-8 in CSV output");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Produced bytes were not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the bytes came from.
        context: String,
    },
}

/// Result type for CSV export.
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let err = CsvError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(matches!(err, CsvError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
