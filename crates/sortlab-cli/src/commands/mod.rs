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


//! Command implementations.
//!
//! Commands return [`CliError`]; the CLI layer turns it into the message
//! printed after `Error:`.

mod analyze;
mod completion;
mod generate;

pub use analyze::{analyze, format_preview, render_table, AnalyzeArgs};
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use generate::generate;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};

/// Default maximum input file size (100 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("SORTLAB_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file to a string, refusing files over the size limit.
///
/// The limit is `SORTLAB_MAX_FILE_SIZE` bytes when set, otherwise
/// [`DEFAULT_MAX_FILE_SIZE`]. The size is checked before anything is read.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file_missing() {
        let err = read_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_read_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "5, 3, 1").unwrap();
        let content = read_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(content, "5, 3, 1");
    }

    #[test]
    fn test_write_output_to_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_output("a,b\n", Some(path)).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "a,b\n");
    }
}
