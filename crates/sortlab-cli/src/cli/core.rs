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


//! Core Sortlab commands for analysis and sample generation.

use crate::commands::{self, AnalyzeArgs};
use clap::{Subcommand, ValueEnum};
use sortlab_core::{DataType, DEFAULT_SAMPLE_SIZE};

/// Output format of the analyze command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable metrics table with sorted previews
    Table,
    /// One CSV row per algorithm
    Csv,
    /// Full export document
    Json,
}

/// Core Sortlab commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Compare the sorting algorithms on a batch of data
    ///
    /// Data comes from exactly one source: the DATA argument, --file, or
    /// --sample. Values are comma-separated; blank entries are ignored.
    Analyze {
        /// Comma-separated values, e.g. "42, 7, 19"
        #[arg(value_name = "DATA")]
        data: Option<String>,

        /// Read comma-separated values from a file
        #[arg(long, value_name = "PATH")]
        file: Option<String>,

        /// Analyze N random sample values
        #[arg(long, value_name = "N")]
        sample: Option<usize>,

        /// Seed for --sample (random when omitted)
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Data type (integer, text)
        #[arg(short = 't', long = "type", default_value = "integer")]
        data_type: DataType,

        /// Algorithms to run, comma-separated
        #[arg(short, long, default_value = "bubble,selection,insertion,merge")]
        algorithms: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Number of sorted values to preview per algorithm (table format)
        #[arg(long, default_value_t = 10)]
        preview: usize,
    },

    /// Print random sample data
    ///
    /// Integers look like file sizes (100 to 10099); text values look like
    /// file names such as "report_42.pdf".
    Generate {
        /// Data type (integer, text)
        #[arg(short = 't', long = "type", default_value = "integer")]
        data_type: DataType,

        /// Number of values
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        size: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), String> {
        let result = match self {
            CoreCommands::Analyze {
                data,
                file,
                sample,
                seed,
                data_type,
                algorithms,
                format,
                output,
                preview,
            } => commands::analyze(AnalyzeArgs {
                data,
                file,
                sample,
                seed,
                data_type,
                algorithms,
                format,
                output,
                preview,
            }),
            CoreCommands::Generate {
                data_type,
                size,
                seed,
            } => commands::generate(data_type, size, seed),
        };
        result.map_err(|e| e.to_string())
    }
}
