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

//! Criterion benchmarks for each operation and representation.
//!
//! Complements the spreadsheet run with criterion's outlier analysis and
//! HTML reports. One group per operation, one function per representation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabular_bench::{build_representations, Operation};

fn bench_operations(c: &mut Criterion) {
    let mut reps = build_representations().expect("dataset builds");
    let labels = reps.labels();

    for op in Operation::ALL {
        let mut group = c.benchmark_group(op.as_str());

        for (label, backend) in labels.iter().zip(reps.candidates_mut()) {
            group.bench_function(BenchmarkId::from_parameter(label), |b| {
                b.iter(|| black_box(backend.execute(op).expect("operation runs")))
            });
        }

        group.finish();
    }

    reps.in_place
        .settle_derived_column()
        .expect("in-place table restores");
}

criterion_group!(benches, bench_operations);
criterion_main!(benches);
