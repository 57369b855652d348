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

//! End-to-end tests for the benchmark pipeline.
//!
//! Runs the full pipeline with a small repetition count and reads the
//! written workbook back.

use calamine::{open_workbook, Data, Reader, Xlsx};
use std::collections::HashSet;
use std::path::Path;
use tabular_bench::reporters::HEADERS;
use tabular_bench::{
    build_representations, run, run_with, BenchConfig, BenchError, BenchmarkRunner, Operation,
};
use tempfile::TempDir;

const LABELS: [&str; 3] = ["columns", "polars_lazy", "sqlite_inplace"];

fn config(path: &Path) -> BenchConfig {
    BenchConfig::default()
        .with_repetitions(5)
        .with_output_path(path)
}

fn cell_text(value: Option<&Data>) -> String {
    match value {
        Some(Data::String(s)) => s.clone(),
        other => panic!("Expected string cell, got {other:?}"),
    }
}

fn cell_number(value: Option<&Data>) -> f64 {
    match value {
        Some(Data::Float(f)) => *f,
        Some(Data::Int(i)) => *i as f64,
        other => panic!("Expected numeric cell, got {other:?}"),
    }
}

// ============================================================================
// Workbook contents
// ============================================================================

#[test]
fn test_end_to_end_workbook() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.xlsx");

    let tables = run(&config(&path)).unwrap();
    assert_eq!(tables.len(), 5);
    assert!(path.exists());

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let expected_sheets: Vec<String> = Operation::ALL
        .iter()
        .map(|op| op.sheet_name().to_string())
        .collect();
    assert_eq!(workbook.sheet_names(), expected_sheets);

    for sheet in &expected_sheets {
        let range = workbook.worksheet_range(sheet).unwrap();
        assert_eq!(range.get_size(), (4, 4), "{sheet}: header plus 3 rows");

        for (col, header) in HEADERS.iter().enumerate() {
            assert_eq!(cell_text(range.get_value((0, col as u32))), *header);
        }

        let labels: Vec<String> = (1..=3)
            .map(|row| cell_text(range.get_value((row, 0))))
            .collect();
        let unique: HashSet<_> = labels.iter().map(String::as_str).collect();
        assert_eq!(unique, LABELS.into_iter().collect::<HashSet<_>>(), "{sheet}");
        assert_eq!(labels.len(), 3, "{sheet}: no duplicate rows");

        for row in 1..=3 {
            let min = cell_number(range.get_value((row, 1)));
            let mean = cell_number(range.get_value((row, 2)));
            let median = cell_number(range.get_value((row, 3)));
            assert!(min > 0.0, "{sheet}: timings are positive");
            assert!(min <= mean, "{sheet}: min <= mean");
            assert!(min <= median, "{sheet}: min <= median");
        }
    }
}

#[test]
fn test_rerun_overwrites_workbook() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.xlsx");
    let config = config(&path).with_repetitions(2);

    run(&config).unwrap();
    run(&config).unwrap();

    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names().len(), 5);
}

#[test]
fn test_summary_rows_bounded_by_min() {
    let dir = TempDir::new().unwrap();
    let tables = run(&config(&dir.path().join("bounds.xlsx"))).unwrap();

    for table in &tables {
        assert_eq!(table.rows.len(), 3);
        for row in &table.rows {
            assert!(row.min_ns <= row.mean_ns, "{} / {}", table.operation, row.label);
            assert!(row.min_ns <= row.median_ns, "{} / {}", table.operation, row.label);
        }
    }
}

// ============================================================================
// Runner properties
// ============================================================================

#[test]
fn test_every_operation_has_three_full_sample_sets() {
    let mut reps = build_representations().unwrap();
    let runner = BenchmarkRunner::new(BenchConfig::default().with_repetitions(7));

    let results = runner.run_all(&mut reps).unwrap();
    assert_eq!(results.len(), 5);
    for result in &results {
        assert_eq!(result.candidates.len(), 3, "{}", result.operation);
        for candidate in &result.candidates {
            assert_eq!(candidate.samples.len(), 7, "{}", result.operation);
        }
    }
}

#[test]
fn test_in_place_table_unchanged_after_run() {
    let mut reps = build_representations().unwrap();
    let before = reps.in_place.snapshot().unwrap();

    let runner = BenchmarkRunner::new(BenchConfig::default().with_repetitions(3));
    runner.run_all(&mut reps).unwrap();

    let after = reps.in_place.snapshot().unwrap();
    assert_eq!(after.columns, before.columns);
    assert_eq!(after, before);
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.xlsx");

    let err = run(&config(&path).with_repetitions(0)).unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig { .. }));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("results.xlsx");

    let err = run(&config(&path).with_repetitions(1)).unwrap_err();
    assert!(matches!(err, BenchError::Xlsx(_)));
}

#[test]
fn test_candidate_error_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.xlsx");

    let mut reps = build_representations().unwrap();
    reps.in_place
        .connection()
        .execute_batch("ALTER TABLE cars ADD COLUMN hp_per_wt REAL")
        .unwrap();

    let err = run_with(&config(&path).with_repetitions(2), &mut reps).unwrap_err();
    assert!(matches!(err, BenchError::Sqlite(_)), "got {err:?}");
    assert!(!path.exists());
}
