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


//! Generate command - prints random sample data

use crate::error::CliError;
use sortlab_core::{DataType, SampleGenerator};
use tracing::debug;

/// Print `size` random values of `data_type`, comma-separated.
///
/// The same `seed` always prints the same values.
///
/// # Errors
///
/// This function does not typically return errors, but uses `Result` for
/// consistency with other command functions.
pub fn generate(data_type: DataType, size: usize, seed: Option<u64>) -> Result<(), CliError> {
    let mut generator = match seed {
        Some(seed) => SampleGenerator::seeded(seed),
        None => SampleGenerator::new(),
    };

    debug!(%data_type, size, ?seed, "generating sample data");
    println!("{}", generator.generate(data_type, size));
    Ok(())
}
