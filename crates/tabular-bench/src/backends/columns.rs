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

//! Plain array-of-columns representation.
//!
//! Each column is a typed `Vec`; every operation is ordinary iterator code
//! and returns a fresh table (copy-on-modify), leaving the source untouched.

use super::{Shape, TableBackend};
use crate::core::operation::{
    DERIVED_COLUMN, FILTER_MPG_THRESHOLD, GROUP_KEY, SELECTED_COLUMNS,
};
use crate::core::Operation;
use crate::datasets::CarRecord;
use crate::error::{BenchError, Result};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A typed column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Float(Vec<f64>),
    Int(Vec<i64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Int(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gathers the rows at `indices`, in that order.
    fn take(&self, indices: &[usize]) -> Column {
        match self {
            Column::Float(v) => Column::Float(indices.iter().map(|&i| v[i]).collect()),
            Column::Int(v) => Column::Int(indices.iter().map(|&i| v[i]).collect()),
            Column::Text(v) => Column::Text(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

/// A rectangular table of named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnTable {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl ColumnTable {
    /// Builds the table from dataset records.
    pub fn from_records(records: &[CarRecord]) -> Self {
        let mut table = Self::default();
        table.push_column(
            "model",
            Column::Text(records.iter().map(|r| r.model.to_string()).collect()),
        );
        table.push_column("mpg", Column::Float(records.iter().map(|r| r.mpg).collect()));
        table.push_column("cyl", Column::Int(records.iter().map(|r| r.cyl).collect()));
        table.push_column("hp", Column::Int(records.iter().map(|r| r.hp).collect()));
        table.push_column("wt", Column::Float(records.iter().map(|r| r.wt).collect()));
        table
    }

    fn push_column(&mut self, name: &str, column: Column) {
        self.names.push(name.to_string());
        self.columns.push(column);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.height(), self.width())
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| BenchError::UnknownColumn(name.to_string()))
    }

    pub fn float(&self, name: &str) -> Result<&[f64]> {
        match self.column(name)? {
            Column::Float(v) => Ok(v),
            _ => Err(BenchError::ColumnType {
                column: name.to_string(),
                expected: "a float column",
            }),
        }
    }

    pub fn int(&self, name: &str) -> Result<&[i64]> {
        match self.column(name)? {
            Column::Int(v) => Ok(v),
            _ => Err(BenchError::ColumnType {
                column: name.to_string(),
                expected: "an integer column",
            }),
        }
    }

    pub fn text(&self, name: &str) -> Result<&[String]> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            _ => Err(BenchError::ColumnType {
                column: name.to_string(),
                expected: "a text column",
            }),
        }
    }

    /// Projects the named columns into a new table.
    pub fn select(&self, names: &[&str]) -> Result<ColumnTable> {
        let mut out = ColumnTable::default();
        for &name in names {
            out.push_column(name, self.column(name)?.clone());
        }
        Ok(out)
    }

    /// Gathers rows by index into a new table.
    pub fn take(&self, indices: &[usize]) -> ColumnTable {
        ColumnTable {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(indices)).collect(),
        }
    }

    /// Copies the table and appends one column.
    pub fn with_column(&self, name: &str, column: Column) -> ColumnTable {
        let mut out = self.clone();
        out.push_column(name, column);
        out
    }

    pub fn select_columns(&self) -> Result<ColumnTable> {
        self.select(&SELECTED_COLUMNS)
    }

    pub fn filter_rows(&self) -> Result<ColumnTable> {
        let keep: Vec<usize> = self
            .float("mpg")?
            .iter()
            .enumerate()
            .filter(|&(_, &mpg)| mpg > FILTER_MPG_THRESHOLD)
            .map(|(i, _)| i)
            .collect();
        Ok(self.take(&keep))
    }

    pub fn sort_table(&self) -> Result<ColumnTable> {
        let cyl = self.int("cyl")?;
        let mpg = self.float("mpg")?;

        let mut order: Vec<usize> = (0..self.height()).collect();
        order.sort_by(|&a, &b| match cyl[a].cmp(&cyl[b]) {
            Ordering::Equal => mpg[b].total_cmp(&mpg[a]),
            other => other,
        });
        Ok(self.take(&order))
    }

    pub fn create_column(&self) -> Result<ColumnTable> {
        let derived = self
            .int("hp")?
            .iter()
            .zip(self.float("wt")?)
            .map(|(&hp, &wt)| hp as f64 / wt)
            .collect();
        Ok(self.with_column(DERIVED_COLUMN, Column::Float(derived)))
    }

    /// Mean `mpg`, mean `hp` and row count per cylinder count, keys ascending.
    pub fn grouped_summary(&self) -> Result<ColumnTable> {
        let keys = self.int(GROUP_KEY)?;
        let mpg = self.float("mpg")?;
        let hp = self.int("hp")?;

        let mut groups: BTreeMap<i64, (f64, f64, i64)> = BTreeMap::new();
        for ((&key, &mpg), &hp) in keys.iter().zip(mpg).zip(hp) {
            let entry = groups.entry(key).or_default();
            entry.0 += mpg;
            entry.1 += hp as f64;
            entry.2 += 1;
        }

        let mut out = ColumnTable::default();
        out.push_column(GROUP_KEY, Column::Int(groups.keys().copied().collect()));
        out.push_column(
            "mean_mpg",
            Column::Float(groups.values().map(|g| g.0 / g.2 as f64).collect()),
        );
        out.push_column(
            "mean_hp",
            Column::Float(groups.values().map(|g| g.1 / g.2 as f64).collect()),
        );
        out.push_column("n", Column::Int(groups.values().map(|g| g.2).collect()));
        Ok(out)
    }
}

/// Candidate wrapping a [`ColumnTable`].
#[derive(Debug, Clone)]
pub struct ColumnBackend {
    table: ColumnTable,
}

impl ColumnBackend {
    pub fn from_records(records: &[CarRecord]) -> Self {
        Self {
            table: ColumnTable::from_records(records),
        }
    }

    pub fn table(&self) -> &ColumnTable {
        &self.table
    }
}

impl TableBackend for ColumnBackend {
    fn label(&self) -> &'static str {
        "columns"
    }

    fn execute(&mut self, op: Operation) -> Result<Shape> {
        let result = match op {
            Operation::SelectColumns => self.table.select_columns()?,
            Operation::FilterRows => self.table.filter_rows()?,
            Operation::SortTable => self.table.sort_table()?,
            Operation::CreateColumn => self.table.create_column()?,
            Operation::GroupedSummary => self.table.grouped_summary()?,
        };
        Ok(result.shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::MTCARS;

    fn table() -> ColumnTable {
        ColumnTable::from_records(&MTCARS)
    }

    #[test]
    fn test_from_records() {
        let t = table();
        assert_eq!(t.shape(), Shape::new(32, 5));
        assert_eq!(t.names(), ["model", "mpg", "cyl", "hp", "wt"]);
        assert_eq!(t.text("model").unwrap()[0], "Mazda RX4");
    }

    #[test]
    fn test_select_unknown_column() {
        let err = table().select(&["mpg", "disp"]).unwrap_err();
        assert!(matches!(err, BenchError::UnknownColumn(ref c) if c == "disp"));
    }

    #[test]
    fn test_wrong_column_type() {
        let err = table().float("cyl").unwrap_err();
        assert!(matches!(err, BenchError::ColumnType { .. }));
    }

    #[test]
    fn test_filter_rows() {
        let filtered = table().filter_rows().unwrap();
        assert_eq!(filtered.height(), 14);
        assert!(filtered.float("mpg").unwrap().iter().all(|&m| m > 20.0));
    }

    #[test]
    fn test_sort_table() {
        let sorted = table().sort_table().unwrap();
        let cyl = sorted.int("cyl").unwrap();
        let mpg = sorted.float("mpg").unwrap();

        assert!(cyl.windows(2).all(|w| w[0] <= w[1]));
        for i in 1..cyl.len() {
            if cyl[i] == cyl[i - 1] {
                assert!(mpg[i - 1] >= mpg[i]);
            }
        }
        assert_eq!(sorted.text("model").unwrap()[0], "Toyota Corolla");
        assert_eq!(sorted.text("model").unwrap()[31], "Lincoln Continental");
    }

    #[test]
    fn test_create_column_leaves_source_untouched() {
        let source = table();
        let with_derived = source.create_column().unwrap();

        assert_eq!(source.width(), 5);
        assert_eq!(with_derived.width(), 6);
        let ratio = with_derived.float(DERIVED_COLUMN).unwrap()[0];
        assert!((ratio - 110.0 / 2.620).abs() < 1e-9);
    }

    #[test]
    fn test_grouped_summary() {
        let summary = table().grouped_summary().unwrap();
        assert_eq!(summary.int("cyl").unwrap(), [4, 6, 8]);
        assert_eq!(summary.int("n").unwrap(), [11, 7, 14]);

        let mean_mpg = summary.float("mean_mpg").unwrap();
        assert!((mean_mpg[0] - 26.663636).abs() < 1e-5);
        assert!((mean_mpg[2] - 15.1).abs() < 1e-9);
        let mean_hp = summary.float("mean_hp").unwrap();
        assert!((mean_hp[1] - 122.285714).abs() < 1e-5);
    }

    #[test]
    fn test_backend_execute() {
        let mut backend = ColumnBackend::from_records(&MTCARS);
        assert_eq!(
            backend.execute(Operation::GroupedSummary).unwrap(),
            Shape::new(3, 4)
        );
        assert_eq!(backend.table().width(), 5);
    }
}
