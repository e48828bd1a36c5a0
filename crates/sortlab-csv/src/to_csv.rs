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


//! Result set to CSV conversion.

use crate::error::{CsvError, Result};
use sortlab_core::{rate, ResultSet};
use std::fmt::Display;
use std::io::Write;

/// Column headers, in order.
pub const HEADERS: [&str; 8] = [
    "Algorithm",
    "Execution Time (ms)",
    "Comparisons",
    "Swaps",
    "Moves",
    "Total Operations",
    "Efficiency",
    "Sorted Data",
];

const SORTED_SEPARATOR: &str = ";";

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: non-numeric)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::NonNumeric,
        }
    }
}

/// Convert a result set to a CSV string.
pub fn to_csv<T: Display>(results: &ResultSet<T>) -> Result<String> {
    to_csv_with_config(results, ToCsvConfig::default())
}

/// Convert a result set to a CSV string with custom configuration.
pub fn to_csv_with_config<T: Display>(results: &ResultSet<T>, config: ToCsvConfig) -> Result<String> {
    let estimated_size = estimate_csv_size(results);
    let mut buffer = Vec::with_capacity(estimated_size);

    to_csv_writer_with_config(results, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Rough output size: a fixed row overhead plus ~8 bytes per sorted value.
fn estimate_csv_size<T>(results: &ResultSet<T>) -> usize {
    let header = 96;
    let rows: usize = results
        .values()
        .map(|result| 64 + result.sorted.len() * 8)
        .sum();
    header + rows
}

/// Write a result set as CSV to `writer`.
pub fn to_csv_writer<T: Display, W: Write>(results: &ResultSet<T>, writer: W) -> Result<()> {
    to_csv_writer_with_config(results, writer, ToCsvConfig::default())
}

/// Write a result set as CSV to `writer` with custom configuration.
///
/// Fields follow `config.quote_style`, except that under
/// [`csv::QuoteStyle::NonNumeric`] the Sorted Data column is always quoted so
/// a single-value row reads the same as a multi-value one.
pub fn to_csv_writer_with_config<T: Display, W: Write>(
    results: &ResultSet<T>,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let sorted_style = match config.quote_style {
        csv::QuoteStyle::NonNumeric => csv::QuoteStyle::Always,
        style => style,
    };

    // Fields arrive pre-encoded, so the row writer adds no quoting of its own.
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    if config.include_headers {
        let headers = HEADERS
            .iter()
            .map(|header| encode_field(header, config.delimiter, config.quote_style))
            .collect::<Result<Vec<_>>>()?;
        wtr.write_record(&headers)?;
    }

    for (algorithm, result) in results {
        let metrics = &result.metrics;
        let sorted = result
            .sorted
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(SORTED_SEPARATOR);

        let mut record = [
            algorithm.id().to_string(),
            format!("{:.4}", metrics.execution_time),
            metrics.comparisons.to_string(),
            metrics.swaps.to_string(),
            metrics.moves.to_string(),
            metrics.total_operations().to_string(),
            rate(metrics).label().to_string(),
        ]
        .iter()
        .map(|field| encode_field(field, config.delimiter, config.quote_style))
        .collect::<Result<Vec<_>>>()?;
        record.push(encode_field(&sorted, config.delimiter, sorted_style)?);

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Quote and escape one field as it would appear in a record.
fn encode_field(field: &str, delimiter: u8, style: csv::QuoteStyle) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(style)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(field.len() + 2));
    wtr.write_field(field)?;
    wtr.write_record(None::<&[u8]>)?;

    let mut bytes = wtr.into_inner().map_err(|e| CsvError::Io(e.into_error()))?;
    bytes.pop();
    String::from_utf8(bytes).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV field".to_string(),
    })
}
