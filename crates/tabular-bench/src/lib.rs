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

//! Tabular Operation Latency Benchmarks
//!
//! Times five common table operations on the same 32-row dataset across
//! three table idioms and writes min/mean/median latencies to a workbook.
//!
//! ## Pipeline
//!
//! - **Dataset**: the embedded 32-car table, built as plain columns, an
//!   immutable polars frame and an in-place SQLite table
//! - **Runner**: every operation, every candidate, `repetitions` timed runs
//! - **Report**: one sheet per operation, one row per candidate
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --package tabular-bench
//! ```
//!
//! Per-operation criterion benchmarks:
//! ```bash
//! cargo bench --package tabular-bench --bench operations
//! ```

pub mod backends;
pub mod core;
pub mod datasets;
pub mod error;
pub mod harness;
pub mod reporters;

pub use backends::{Representations, Shape, TableBackend};
pub use crate::core::{BenchConfig, Operation};
pub use datasets::{build_representations, CarRecord, MTCARS};
pub use error::{BenchError, Result};
pub use harness::{BenchmarkResult, BenchmarkRunner, SummaryRow, SummaryTable};

use tracing::info;

/// Runs the whole pipeline and returns the summaries that were written.
///
/// Results travel as an ordered `Vec` from runner to aggregator to the
/// workbook; the first error stops the run.
pub fn run(config: &BenchConfig) -> Result<Vec<SummaryTable>> {
    let mut reps = build_representations()?;
    run_with(config, &mut reps)
}

/// Runs the pipeline against representations the caller has built.
///
/// Nothing is written unless every operation completes.
pub fn run_with(config: &BenchConfig, reps: &mut Representations) -> Result<Vec<SummaryTable>> {
    config.validate()?;
    info!(
        rows = datasets::ROW_COUNT,
        candidates = ?reps.labels(),
        "dataset ready"
    );

    let runner = BenchmarkRunner::new(config.clone());
    let results = runner.run_all(reps)?;
    let tables = harness::summarize_all(&results)?;

    reporters::print_summary(&tables);
    reporters::export_xlsx(&tables, &config.output_path)?;
    reporters::print_success(&config.output_path);

    Ok(tables)
}
