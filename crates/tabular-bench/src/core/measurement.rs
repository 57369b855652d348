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

//! Measurement primitives.
//!
//! Single-shot wall-clock timing and the statistics reduced from a batch of
//! samples. Each execution is timed on its own so every sample is
//! independent of its neighbours.

use crate::error::{BenchError, Result};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Times one fallible call.
///
/// The result passes through [`black_box`] so the optimizer cannot discard
/// the measured work. Errors are returned as-is and no sample is produced.
///
/// # Example
///
/// ```no_run
/// use tabular_bench::core::measurement::time_once;
///
/// let (elapsed, sum) = time_once(|| Ok((0..1_000u64).sum::<u64>())).unwrap();
/// println!("{sum} in {elapsed:?}");
/// ```
pub fn time_once<T, F>(f: F) -> Result<(Duration, T)>
where
    F: FnOnce() -> Result<T>,
{
    let start = Instant::now();
    let value = black_box(f()?);
    let elapsed = start.elapsed();
    Ok((elapsed, value))
}

/// Summary statistics over a sample set, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Fastest sample.
    pub min_ns: f64,
    /// Slowest sample.
    pub max_ns: f64,
    /// Arithmetic mean.
    pub mean_ns: f64,
    /// Median; mean of the two middle samples for even counts.
    pub median_ns: f64,
    /// Population standard deviation.
    pub std_dev_ns: f64,
    /// Number of samples.
    pub count: usize,
}

impl Statistics {
    /// Computes statistics from raw samples.
    ///
    /// `name` only labels the error for an empty sample set.
    pub fn from_samples(name: &str, samples: &[Duration]) -> Result<Self> {
        if samples.is_empty() {
            return Err(BenchError::EmptySamples(name.to_string()));
        }

        let mut nanos: Vec<f64> = samples.iter().map(|d| d.as_nanos() as f64).collect();
        nanos.sort_by(f64::total_cmp);

        let count = nanos.len();
        let mean_ns = nanos.iter().sum::<f64>() / count as f64;

        let mid = count / 2;
        let median_ns = if count % 2 == 0 {
            (nanos[mid - 1] + nanos[mid]) / 2.0
        } else {
            nanos[mid]
        };

        let variance = nanos
            .iter()
            .map(|n| {
                let diff = n - mean_ns;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        Ok(Self {
            min_ns: nanos[0],
            max_ns: nanos[count - 1],
            mean_ns,
            median_ns,
            std_dev_ns: variance.sqrt(),
            count,
        })
    }
}
