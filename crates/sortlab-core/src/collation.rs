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


//! Locale-aware text ordering.
//!
//! Text values are ordered by the Unicode Collation Algorithm with the CLDR
//! root collation at tertiary strength, the same ordering browsers use for
//! `String.prototype.localeCompare` without a locale:
//!
//! 1. **Primary**: base letters, case- and accent-insensitive. Whitespace
//!    sorts before punctuation (`_ - , ; : ! ? .`), then symbols, digits and
//!    letters.
//! 2. **Secondary**: accents.
//! 3. **Tertiary**: case, lowercase first.
//!
//! Canonically equivalent strings compare equal. If the collator cannot be
//! built the comparison falls back to code point order.

use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);

    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "root collator unavailable, using code point order");
            None
        }
    }
}

/// Compare two strings using locale-aware lexicographic order.
///
/// # Examples
///
/// ```
/// use sortlab_core::collation::locale_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_cmp("a", "A"), Ordering::Less);
/// assert_eq!(locale_cmp("résumé", "resume"), Ordering::Greater);
/// assert_eq!(locale_cmp("report_1.txt", "report.txt"), Ordering::Less);
/// assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
