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


//! Sortlab Command Line Interface

use clap::Parser;
use sortlab_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Sortlab - Instrumented sorting analysis
///
/// Runs bubble, selection, insertion and merge sort over the same data and
/// compares what each one cost.
///
/// # Examples
///
/// ```bash
/// # Analyze inline data
/// sortlab analyze "42, 7, 19, 3"
///
/// # Sort file names and export the results as JSON
/// sortlab analyze --file names.txt --type text --format json -o results.json
///
/// # Analyze 500 random integers with two algorithms
/// sortlab analyze --sample 500 --algorithms insertion,merge
///
/// # Debug logging
/// SORTLAB_LOG=debug sortlab analyze "3, 1, 2"
/// ```
#[derive(Parser)]
#[command(name = "sortlab")]
#[command(author, version, about = "Sortlab - Instrumented sorting analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SORTLAB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
