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


//! Export document model and conversion.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sortlab_core::{most_efficient, Algorithm, ResultSet, Value};
use std::io::Write;

/// Configuration for JSON output.
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Indent with two spaces (default: true)
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Summary block of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of algorithms that ran.
    pub total_algorithms: usize,
    /// Algorithm with the lowest score, `null` when nothing ran.
    pub most_efficient: Option<Algorithm>,
    /// Number of input values.
    pub data_count: usize,
}

/// A complete analysis export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisExport<T = Value> {
    /// RFC 3339 UTC time the export was produced.
    pub timestamp: String,
    /// The input batch, in input order.
    pub original_data: Vec<T>,
    /// Per-algorithm results keyed by identifier.
    pub results: ResultSet<T>,
    pub summary: Summary,
}

impl<T: Clone> AnalysisExport<T> {
    /// Build an export stamped with the current time.
    pub fn new(original: &[T], results: &ResultSet<T>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            original_data: original.to_vec(),
            results: results.clone(),
            summary: Summary {
                total_algorithms: results.len(),
                most_efficient: most_efficient(results),
                data_count: original.len(),
            },
        }
    }
}

/// Convert an analysis to a `serde_json::Value`.
pub fn to_json_value<T>(original: &[T], results: &ResultSet<T>) -> Result<serde_json::Value>
where
    T: Clone + Serialize,
{
    Ok(serde_json::to_value(AnalysisExport::new(original, results))?)
}

/// Convert an analysis to a JSON string.
pub fn to_json<T>(original: &[T], results: &ResultSet<T>, config: &ToJsonConfig) -> Result<String>
where
    T: Clone + Serialize,
{
    let export = AnalysisExport::new(original, results);
    let json = if config.pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    Ok(json)
}

/// Write an analysis as JSON to `writer`.
pub fn to_json_writer<T, W>(
    original: &[T],
    results: &ResultSet<T>,
    mut writer: W,
    config: &ToJsonConfig,
) -> Result<()>
where
    T: Clone + Serialize,
    W: Write,
{
    let export = AnalysisExport::new(original, results);
    if config.pretty {
        serde_json::to_writer_pretty(&mut writer, &export)?;
    } else {
        serde_json::to_writer(&mut writer, &export)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse a previously written export.
pub fn from_json(json: &str) -> Result<AnalysisExport> {
    Ok(serde_json::from_str(json)?)
}
