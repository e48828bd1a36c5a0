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


//! Synthetic sample data for demos.
//!
//! Generates either file-size-like integers or file names. The output is a
//! comma-separated string that [`parse_input`](crate::parse_input) accepts
//! unchanged. Seeded generators are reproducible.

use crate::input::DataType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of samples the demo flow requests.
pub const DEFAULT_SAMPLE_SIZE: usize = 15;

/// Smallest generated integer.
pub const MIN_SAMPLE_INT: i64 = 100;

/// Largest generated integer.
pub const MAX_SAMPLE_INT: i64 = 10_099;

const FILE_PREFIXES: [&str; 10] = [
    "document",
    "image",
    "video",
    "audio",
    "archive",
    "program",
    "data",
    "report",
    "presentation",
    "spreadsheet",
];

const FILE_EXTENSIONS: [&str; 10] = [
    ".pdf", ".doc", ".txt", ".jpg", ".png", ".mp4", ".mp3", ".zip", ".exe", ".csv",
];

/// Random sample generator.
///
/// # Examples
///
/// ```
/// use sortlab_core::{parse_input, DataType, SampleGenerator};
///
/// let mut generator = SampleGenerator::seeded(7);
/// let raw = generator.generate(DataType::Text, 5);
/// let values = parse_input(&raw, DataType::Text).unwrap();
/// assert_eq!(values.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `size` integers uniform in `100..=10099`.
    pub fn integers(&mut self, size: usize) -> Vec<i64> {
        (0..size)
            .map(|_| self.rng.gen_range(MIN_SAMPLE_INT..=MAX_SAMPLE_INT))
            .collect()
    }

    /// `size` file names shaped `{prefix}_{1..=100}{extension}`.
    pub fn filenames(&mut self, size: usize) -> Vec<String> {
        (0..size)
            .map(|_| {
                let prefix = FILE_PREFIXES[self.rng.gen_range(0..FILE_PREFIXES.len())];
                let extension = FILE_EXTENSIONS[self.rng.gen_range(0..FILE_EXTENSIONS.len())];
                let number: u32 = self.rng.gen_range(1..=100);
                format!("{}_{}{}", prefix, number, extension)
            })
            .collect()
    }

    /// Generate `size` samples of `data_type` joined by `", "`.
    pub fn generate(&mut self, data_type: DataType, size: usize) -> String {
        match data_type {
            DataType::Integer => self
                .integers(size)
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            DataType::Text => self.filenames(size).join(", "),
        }
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
