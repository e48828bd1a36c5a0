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


//! Structured error types for the Sortlab CLI.

use sortlab_core::InputError;
use sortlab_csv::CsvError;
use sortlab_json::JsonError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Sortlab CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use sortlab_cli::error::CliError;
///
/// fn load(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Input data or algorithm selection was rejected.
    #[error(transparent)]
    Input(#[from] InputError),

    /// CSV export error.
    #[error("CSV export error: {0}")]
    CsvExport(String),

    /// JSON export error.
    #[error("JSON export error: {0}")]
    JsonExport(String),

    /// Invalid combination of arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        Self::CsvExport(source.to_string())
    }
}

impl From<JsonError> for CliError {
    fn from(source: JsonError) -> Self {
        Self::JsonExport(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "data.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error for 'data.txt': not found");
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.txt", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.txt"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("(100 MB)"));
    }

    #[test]
    fn test_input_error_is_transparent() {
        let err = CliError::from(InputError::Empty);
        assert_eq!(err.to_string(), "Input cannot be empty");

        let err = CliError::from(InputError::InvalidInteger {
            token: "abc".to_string(),
        });
        assert_eq!(err.to_string(), "\"abc\" is not a valid integer");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("no data source");
        assert_eq!(err.to_string(), "Invalid input: no data source");
    }
}
