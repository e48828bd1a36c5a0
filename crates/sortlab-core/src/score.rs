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


//! Efficiency scoring and ranking.
//!
//! Two transforms of the same weighted cost:
//!
//! ```text
//! cost       = execution_time + comparisons * 0.1 + (swaps + moves) * 0.1
//! score      = cost           (lower is better, used for ranking)
//! efficiency = 1000 / cost    (higher is better, used for the rating)
//! ```
//!
//! The weighting favours wall-clock time and discounts raw operation counts
//! by a factor of ten. It is a teaching heuristic, not a complexity measure.

use crate::algorithm::Algorithm;
use crate::metrics::Metrics;
use crate::sorter::ResultSet;
use std::fmt;

/// Weight applied to comparisons and to data movements.
pub const OPERATION_WEIGHT: f64 = 0.1;

/// Numerator of the efficiency reciprocal.
pub const EFFICIENCY_SCALE: f64 = 1000.0;

/// Coarse four-tier efficiency label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Rating {
    /// Label as shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    fn from_efficiency(efficiency: f64) -> Self {
        if efficiency > 50.0 {
            Self::Excellent
        } else if efficiency > 20.0 {
            Self::Good
        } else if efficiency > 10.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Composite cost of a run; lower is better.
///
/// # Examples
///
/// ```
/// use sortlab_core::{score, Metrics};
///
/// let metrics = Metrics {
///     comparisons: 10,
///     swaps: 4,
///     moves: 6,
///     execution_time: 0.5,
///     ..Default::default()
/// };
/// assert!((score(&metrics) - 2.5).abs() < 1e-9);
/// ```
pub fn score(metrics: &Metrics) -> f64 {
    metrics.execution_time
        + metrics.comparisons as f64 * OPERATION_WEIGHT
        + metrics.data_movements() as f64 * OPERATION_WEIGHT
}

/// Reciprocal efficiency, `1000 / score`.
///
/// A zero-cost run has infinite efficiency.
pub fn efficiency(metrics: &Metrics) -> f64 {
    EFFICIENCY_SCALE / score(metrics)
}

/// Rate a run.
///
/// `efficiency > 50` is Excellent, `> 20` Good, `> 10` Fair, anything else
/// Poor.
///
/// # Examples
///
/// ```
/// use sortlab_core::{rate, Metrics, Rating};
///
/// let cheap = Metrics { comparisons: 3, swaps: 3, ..Default::default() };
/// assert_eq!(rate(&cheap), Rating::Excellent);
///
/// let costly = Metrics { comparisons: 4950, swaps: 2400, ..Default::default() };
/// assert_eq!(rate(&costly), Rating::Poor);
/// ```
pub fn rate(metrics: &Metrics) -> Rating {
    Rating::from_efficiency(efficiency(metrics))
}

/// The algorithm with the strictly smallest [`score`].
///
/// Ties keep the first algorithm in iteration order. Returns `None` for an
/// empty set.
pub fn most_efficient<T>(results: &ResultSet<T>) -> Option<Algorithm> {
    let mut best: Option<(Algorithm, f64)> = None;

    for (&algorithm, result) in results {
        let candidate = score(&result.metrics);
        match best {
            Some((_, best_score)) if candidate >= best_score => {}
            _ => best = Some((algorithm, candidate)),
        }
    }

    best.map(|(algorithm, _)| algorithm)
}
