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

//! Console reporter for benchmark progress and results.

use crate::harness::{BenchmarkResult, SummaryTable};
use std::path::Path;

/// Formats the line printed when an operation's batch completes.
pub fn completion_line(result: &BenchmarkResult) -> String {
    let repetitions = result
        .candidates
        .first()
        .map_or(0, |c| c.samples.len());
    format!(
        "Completed {}: {} candidates x {} repetitions",
        result.operation,
        result.candidates.len(),
        repetitions
    )
}

/// Prints the completion line for one operation.
pub fn print_completion(result: &BenchmarkResult) {
    println!("{}", completion_line(result));
}

/// Renders summary tables as fixed-width text.
pub fn format_summary(tables: &[SummaryTable]) -> String {
    let mut out = String::new();
    for table in tables {
        out.push_str(&format!("\n{}\n", table.sheet_name()));
        out.push_str(&format!("{}\n", "-".repeat(98)));
        out.push_str(&format!(
            "{:<18} {:>15} {:>15} {:>15} {:>15} {:>15}\n",
            "Operation", "Min_ns", "Mean_ns", "Median_ns", "Max_ns", "StdDev_ns"
        ));
        for row in &table.rows {
            out.push_str(&format!(
                "{:<18} {:>15.1} {:>15.1} {:>15.1} {:>15.1} {:>15.1}\n",
                row.label, row.min_ns, row.mean_ns, row.median_ns, row.max_ns, row.std_dev_ns
            ));
        }
        if let Some(fastest) = table.fastest() {
            out.push_str(&format!("fastest (median): {}\n", fastest.label));
        }
    }
    out
}

/// Prints every summary table.
pub fn print_summary(tables: &[SummaryTable]) {
    print!("{}", format_summary(tables));
}

/// Prints the final success line.
pub fn print_success(path: &Path) {
    println!("\nBenchmark results written to {}", path.display());
}
