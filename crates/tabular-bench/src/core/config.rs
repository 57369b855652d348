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

//! Centralized benchmark configuration.
//!
//! The run is configured by constants only; there are no command line flags
//! and no environment variables. Tests override values through the builder.

use crate::error::{BenchError, Result};
use std::path::PathBuf;

/// Timed executions per candidate and operation.
pub const DEFAULT_REPETITIONS: u64 = 100;

/// Untimed executions per candidate before sampling starts.
pub const DEFAULT_WARMUP_RUNS: u64 = 2;

/// Spreadsheet written at the end of the run.
pub const DEFAULT_OUTPUT_FILE: &str = "tabular_benchmark_results.xlsx";

/// Benchmark configuration.
///
/// # Example
///
/// ```no_run
/// use tabular_bench::core::config::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_repetitions(5)
///     .with_output_path("target/smoke.xlsx");
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Timed executions per candidate.
    pub repetitions: u64,
    /// Untimed executions per candidate.
    pub warmup_runs: u64,
    /// Destination workbook.
    pub output_path: PathBuf,
}

impl BenchConfig {
    /// Sets the repetition count.
    pub fn with_repetitions(mut self, repetitions: u64) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the warmup count.
    pub fn with_warmup_runs(mut self, warmup_runs: u64) -> Self {
        self.warmup_runs = warmup_runs;
        self
    }

    /// Sets the destination workbook.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Checks the configuration before anything is measured.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig {
                parameter: "repetitions".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let is_xlsx = self
            .output_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        if !is_xlsx {
            return Err(BenchError::InvalidConfig {
                parameter: "output_path".to_string(),
                reason: format!("'{}' must end in .xlsx", self.output_path.display()),
            });
        }

        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            warmup_runs: DEFAULT_WARMUP_RUNS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
