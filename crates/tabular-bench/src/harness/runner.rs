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

//! Benchmark runner for executing and collecting samples.

use crate::backends::Representations;
use crate::core::config::BenchConfig;
use crate::core::{time_once, Operation};
use crate::error::{BenchError, Result};
use crate::reporters::console;
use std::time::Duration;
use tracing::{debug, info};

/// Samples of one candidate for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSamples {
    /// Candidate label.
    pub label: String,
    /// One elapsed time per timed execution.
    pub samples: Vec<Duration>,
}

/// All samples recorded for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Benchmarked operation.
    pub operation: Operation,
    /// Per-candidate samples, in candidate order.
    pub candidates: Vec<CandidateSamples>,
}

impl BenchmarkResult {
    /// Total number of timed executions across candidates.
    pub fn total_samples(&self) -> usize {
        self.candidates.iter().map(|c| c.samples.len()).sum()
    }
}

/// Runs every operation against every representation.
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Creates a new benchmark runner with the specified configuration.
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Samples one operation on all three candidates.
    ///
    /// Candidates are interleaved round-robin inside each repetition, and
    /// each execution is timed independently. The first error aborts the
    /// batch. For the in-place mutating operation the schema is compared
    /// against its pre-batch state once the batch is done.
    pub fn run_operation(
        &self,
        reps: &mut Representations,
        op: Operation,
    ) -> Result<BenchmarkResult> {
        let repetitions = self.config.repetitions as usize;
        let schema_before = if op.mutates_in_place() {
            Some(reps.in_place.schema()?)
        } else {
            None
        };

        let labels = reps.labels();
        let mut samples: Vec<Vec<Duration>> = labels
            .iter()
            .map(|_| Vec::with_capacity(repetitions))
            .collect();

        info!(operation = op.as_str(), repetitions, "running benchmark");

        let mut candidates = reps.candidates_mut();
        for candidate in candidates.iter_mut() {
            for _ in 0..self.config.warmup_runs {
                let shape = candidate.execute(op)?;
                debug!(candidate = candidate.label(), %shape, "warmup");
            }
        }

        for _ in 0..repetitions {
            for (slot, candidate) in samples.iter_mut().zip(candidates.iter_mut()) {
                let (elapsed, _shape) = time_once(|| candidate.execute(op))?;
                slot.push(elapsed);
            }
        }

        if let Some(expected) = schema_before {
            reps.in_place.settle_derived_column()?;
            check_schema(expected, reps.in_place.schema()?)?;
        }

        let result = BenchmarkResult {
            operation: op,
            candidates: labels
                .iter()
                .zip(samples)
                .map(|(label, samples)| CandidateSamples {
                    label: label.to_string(),
                    samples,
                })
                .collect(),
        };

        for candidate in &result.candidates {
            debug!(
                operation = op.as_str(),
                candidate = %candidate.label,
                samples = candidate.samples.len(),
                "candidate complete"
            );
        }

        Ok(result)
    }

    /// Runs all operations in order, printing a completion line after each.
    pub fn run_all(&self, reps: &mut Representations) -> Result<Vec<BenchmarkResult>> {
        let mut results = Vec::with_capacity(Operation::ALL.len());
        for op in Operation::ALL {
            let result = self.run_operation(reps, op)?;
            console::print_completion(&result);
            results.push(result);
        }
        Ok(results)
    }
}

/// Fails with [`BenchError::SchemaDrift`] unless both column lists match.
pub(crate) fn check_schema(expected: Vec<String>, found: Vec<String>) -> Result<()> {
    if found == expected {
        Ok(())
    } else {
        Err(BenchError::SchemaDrift { expected, found })
    }
}
