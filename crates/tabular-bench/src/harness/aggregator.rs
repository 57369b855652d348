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

//! Reduction of raw samples into summary tables.

use crate::core::{Operation, Statistics};
use crate::error::Result;
use crate::harness::runner::BenchmarkResult;

/// One report row: a candidate's summary statistics in nanoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Candidate label.
    pub label: String,
    /// Fastest sample.
    pub min_ns: f64,
    /// Mean of all samples.
    pub mean_ns: f64,
    /// Median of all samples.
    pub median_ns: f64,
    /// Slowest sample. Console only; the workbook has no column for it.
    pub max_ns: f64,
    /// Population standard deviation. Console only.
    pub std_dev_ns: f64,
}

/// Summary of one operation, one row per candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    /// Summarized operation.
    pub operation: Operation,
    /// Rows in candidate order.
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Worksheet this table is written to.
    pub fn sheet_name(&self) -> &'static str {
        self.operation.sheet_name()
    }

    /// Candidate with the lowest median.
    pub fn fastest(&self) -> Option<&SummaryRow> {
        self.rows
            .iter()
            .min_by(|a, b| a.median_ns.total_cmp(&b.median_ns))
    }
}

/// Summarizes one operation's samples.
///
/// # Arguments
///
/// * `result` - Samples of every candidate for one operation
///
/// # Returns
///
/// A table with one row per candidate, in candidate order.
pub fn summarize(result: &BenchmarkResult) -> Result<SummaryTable> {
    let rows = result
        .candidates
        .iter()
        .map(|candidate| {
            let name = format!("{}/{}", result.operation.as_str(), candidate.label);
            let stats = Statistics::from_samples(&name, &candidate.samples)?;
            Ok(SummaryRow {
                label: candidate.label.clone(),
                min_ns: stats.min_ns,
                mean_ns: stats.mean_ns,
                median_ns: stats.median_ns,
                max_ns: stats.max_ns,
                std_dev_ns: stats.std_dev_ns,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SummaryTable {
        operation: result.operation,
        rows,
    })
}

/// Summarizes every result, preserving order.
pub fn summarize_all(results: &[BenchmarkResult]) -> Result<Vec<SummaryTable>> {
    results.iter().map(summarize).collect()
}
