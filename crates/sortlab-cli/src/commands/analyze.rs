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


//! Analyze command - runs the sorting algorithms and reports their cost

use super::{read_file, write_output};
use crate::cli::OutputFormat;
use crate::error::CliError;
use colored::{ColoredString, Colorize};
use sortlab_core::{
    most_efficient, parse_algorithms, parse_input, rate, run_all, DataType, Rating, ResultSet,
    SampleGenerator, Value,
};
use sortlab_csv::to_csv;
use sortlab_json::{to_json, ToJsonConfig};
use tracing::{debug, info};

/// Arguments of the analyze command.
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Inline comma-separated data
    pub data: Option<String>,
    /// File holding comma-separated data
    pub file: Option<String>,
    /// Number of random sample values
    pub sample: Option<usize>,
    /// Seed for the sample generator
    pub seed: Option<u64>,
    pub data_type: DataType,
    /// Comma-separated algorithm identifiers
    pub algorithms: String,
    pub format: OutputFormat,
    /// Output file path (stdout when `None`)
    pub output: Option<String>,
    /// Sorted values shown per algorithm in the table
    pub preview: usize,
}

/// Run the selected algorithms over the input and print or export the
/// results.
///
/// # Errors
///
/// Returns `Err` if:
/// - Zero or several data sources are given
/// - The file cannot be read or is too large
/// - The input or the algorithm selection is invalid
/// - Export or writing the output fails
pub fn analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let algorithms = parse_algorithms(&args.algorithms)?;
    let raw = load_raw_input(&args)?;
    let values = parse_input(&raw, args.data_type)?;

    info!(
        count = values.len(),
        data_type = %args.data_type,
        algorithms = algorithms.len(),
        "starting analysis"
    );
    let results = run_all(&values, &algorithms);

    let content = match args.format {
        OutputFormat::Table => render_table(&values, &results, args.data_type, args.preview),
        OutputFormat::Csv => to_csv(&results)?,
        OutputFormat::Json => {
            let mut json = to_json(&values, &results, &ToJsonConfig::default())?;
            json.push('\n');
            json
        }
    };

    write_output(&content, args.output.as_deref())
}

fn load_raw_input(args: &AnalyzeArgs) -> Result<String, CliError> {
    match (&args.data, &args.file, args.sample) {
        (Some(data), None, None) => Ok(data.clone()),
        (None, Some(path), None) => {
            debug!(path = %path, "reading input file");
            read_file(path)
        }
        (None, None, Some(size)) => {
            let mut generator = match args.seed {
                Some(seed) => SampleGenerator::seeded(seed),
                None => SampleGenerator::new(),
            };
            Ok(generator.generate(args.data_type, size))
        }
        (None, None, None) => Err(CliError::invalid_input(
            "no data given; pass DATA, --file or --sample",
        )),
        _ => Err(CliError::invalid_input(
            "DATA, --file and --sample are mutually exclusive",
        )),
    }
}

/// Render the metrics table and the sorted previews.
pub fn render_table(
    values: &[Value],
    results: &ResultSet,
    data_type: DataType,
    preview: usize,
) -> String {
    let winner = most_efficient(results);
    let mut lines = vec![
        "Sorting Analysis".bold().to_string(),
        "================".to_string(),
        String::new(),
        format!("Input: {} {} values", values.len(), data_type),
        String::new(),
        format!(
            "  {:<16} {:>12} {:>12} {:>12}  {}",
            "Algorithm", "Time (ms)", "Comparisons", "Swaps+Moves", "Rating"
        ),
        format!("  {:-<16} {:-^12} {:-^12} {:-^12}  {:-<10}", "", "", "", "", ""),
    ];

    for (algorithm, result) in results {
        let metrics = &result.metrics;
        let marker = if winner == Some(*algorithm) {
            format!(" {}", "✓".green().bold())
        } else {
            String::new()
        };
        lines.push(format!(
            "  {:<16} {:>12.4} {:>12} {:>12}  {}{}",
            algorithm.display_name(),
            metrics.execution_time,
            metrics.comparisons,
            metrics.data_movements(),
            colorize_rating(rate(metrics)),
            marker
        ));
    }

    if let Some(algorithm) = winner {
        lines.push(String::new());
        lines.push(format!(
            "Most efficient: {}",
            algorithm.display_name().green().bold()
        ));
    }

    lines.push(String::new());
    lines.push("Sorted Output:".bold().to_string());
    for (algorithm, result) in results {
        lines.push(format!(
            "  {}: {}",
            algorithm.display_name(),
            format_preview(&result.sorted, preview)
        ));
    }

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

fn colorize_rating(rating: Rating) -> ColoredString {
    let label = format!("{:<10}", rating.label());
    match rating {
        Rating::Excellent => label.green(),
        Rating::Good => label.cyan(),
        Rating::Fair => label.yellow(),
        Rating::Poor => label.red(),
    }
}

/// The first `limit` values joined by `", "`, with a count of the rest.
///
/// # Examples
///
/// ```
/// use sortlab_cli::commands::format_preview;
///
/// let values: Vec<i64> = (1..=5).collect();
/// assert_eq!(format_preview(&values, 3), "1, 2, 3 ... and 2 more items");
/// assert_eq!(format_preview(&values, 10), "1, 2, 3, 4, 5");
/// ```
pub fn format_preview<T: std::fmt::Display>(values: &[T], limit: usize) -> String {
    let shown = values
        .iter()
        .take(limit)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let hidden = values.len().saturating_sub(limit);
    match (shown.is_empty(), hidden) {
        (_, 0) => shown,
        (true, _) => format!("... and {} more items", hidden),
        (false, _) => format!("{} ... and {} more items", shown, hidden),
    }
}
