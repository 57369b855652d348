// Dweve Tabular Bench - Tabular Operation Latency Benchmarks
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

//! Error types for benchmark runs.
//!
//! Every failure is fatal: errors propagate to the binary's `main` and
//! terminate the run. Nothing in the crate retries or degrades.

use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while building tables, running benchmarks or
/// writing the report.
#[derive(Debug, Error)]
pub enum BenchError {
    // ==================== Configuration errors ====================
    /// Invalid configuration parameter.
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    // ==================== Table errors ====================
    /// A column name that the table does not contain.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// Column has a different type than the operation expects.
    #[error("column '{column}' is not {expected}")]
    ColumnType {
        /// Column name
        column: String,
        /// Expected type description
        expected: &'static str,
    },

    /// Identifier that cannot be safely spliced into SQL.
    #[error("invalid SQL identifier '{0}'")]
    InvalidIdentifier(String),

    /// The in-place table's schema differs after a mutating benchmark.
    #[error("schema drift on in-place table: expected {expected:?}, found {found:?}")]
    SchemaDrift {
        /// Column names before the benchmark
        expected: Vec<String>,
        /// Column names after the benchmark
        found: Vec<String>,
    },

    // ==================== Measurement/report errors ====================
    /// Statistics requested over an empty sample set.
    #[error("no samples recorded for '{0}'")]
    EmptySamples(String),

    /// Two summary tables map to the same sheet.
    #[error("duplicate sheet name '{0}'")]
    DuplicateSheet(String),

    // ==================== Wrapped library errors ====================
    /// Polars error.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),

    /// SQLite error.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Spreadsheet writer error.
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
