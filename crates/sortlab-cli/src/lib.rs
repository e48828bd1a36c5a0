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


//! Sortlab CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **analyze**: Run the sorting algorithms over inline data, a file or a
//!   random sample, then print a metrics table or export CSV/JSON
//! - **generate**: Print random sample data
//! - **completion**: Generate shell completion scripts (bash, zsh, fish,
//!   powershell, elvish)
//!
//! # Environment
//!
//! - `SORTLAB_MAX_FILE_SIZE`: largest input file accepted, in bytes
//!   (default 100 MB)
//! - `SORTLAB_LOG`: `tracing` filter directives (default `warn`)

pub mod cli;
pub mod commands;
pub mod error;
