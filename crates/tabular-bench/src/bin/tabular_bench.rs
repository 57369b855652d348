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

//! Tabular benchmark binary.
//!
//! Runs the full benchmark with the built-in configuration and writes
//! `tabular_benchmark_results.xlsx` into the working directory.
//!
//! Usage:
//! ```bash
//! cargo run --release --package tabular-bench
//!
//! # Per-candidate debug logging
//! RUST_LOG=tabular_bench=debug cargo run --release --package tabular-bench
//! ```

use tabular_bench::{BenchConfig, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tabular_bench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tabular_bench::run(&BenchConfig::default())?;
    Ok(())
}
