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

//! Spreadsheet export for summary tables.

use crate::error::{BenchError, Result};
use crate::harness::SummaryTable;
use rust_xlsxwriter::{Format, Workbook};
use std::collections::HashSet;
use std::path::Path;

/// Header row of every sheet.
pub const HEADERS: [&str; 4] = ["Operation", "Min_ns", "Mean_ns", "Median_ns"];

/// Exports summary tables as one workbook, one sheet per table.
///
/// The workbook is built in memory and written in one go, replacing any
/// existing file at `path`. Sheet order follows `tables`.
///
/// # Arguments
///
/// * `tables` - Summary tables, one per operation
/// * `path` - Output file path
pub fn export_xlsx(tables: &[SummaryTable], path: &Path) -> Result<()> {
    let mut seen = HashSet::new();
    for table in tables {
        if !seen.insert(table.sheet_name()) {
            return Err(BenchError::DuplicateSheet(table.sheet_name().to_string()));
        }
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let number = Format::new().set_num_format("0.0");

    for table in tables {
        let sheet = workbook.add_worksheet();
        sheet.set_name(table.sheet_name())?;
        sheet.set_column_width(0, 18)?;

        for (col, title) in HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            let r = i as u32 + 1;
            sheet.write_string(r, 0, row.label.as_str())?;
            sheet.write_number_with_format(r, 1, row.min_ns, &number)?;
            sheet.write_number_with_format(r, 2, row.mean_ns, &number)?;
            sheet.write_number_with_format(r, 3, row.median_ns, &number)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use crate::harness::SummaryRow;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::TempDir;

    fn table(operation: Operation) -> SummaryTable {
        SummaryTable {
            operation,
            rows: ["columns", "polars_lazy", "sqlite_inplace"]
                .iter()
                .enumerate()
                .map(|(i, label)| SummaryRow {
                    label: label.to_string(),
                    min_ns: 100.0 * (i + 1) as f64,
                    mean_ns: 150.0 * (i + 1) as f64,
                    median_ns: 125.0 * (i + 1) as f64,
                    max_ns: 200.0 * (i + 1) as f64,
                    std_dev_ns: 10.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_export_xlsx() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.xlsx");
        let tables: Vec<_> = Operation::ALL.iter().map(|&op| table(op)).collect();

        export_xlsx(&tables, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names().len(), 5);

        let range = workbook.worksheet_range("2_Filter_Rows").unwrap();
        assert_eq!(range.get_size(), (4, 4));
        assert_eq!(range.get_value((0, 0)), Some(&Data::String("Operation".to_string())));
        assert_eq!(range.get_value((0, 3)), Some(&Data::String("Median_ns".to_string())));
        assert_eq!(range.get_value((2, 0)), Some(&Data::String("polars_lazy".to_string())));
        assert_eq!(range.get_value((3, 1)), Some(&Data::Float(300.0)));
    }

    #[test]
    fn test_duplicate_sheet_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dup.xlsx");
        let tables = vec![table(Operation::FilterRows), table(Operation::FilterRows)];

        let err = export_xlsx(&tables, &path).unwrap_err();
        assert!(matches!(err, BenchError::DuplicateSheet(ref s) if s == "2_Filter_Rows"));
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("results.xlsx");

        let err = export_xlsx(&[table(Operation::SelectColumns)], &path).unwrap_err();
        assert!(matches!(err, BenchError::Xlsx(_)));
    }
}
