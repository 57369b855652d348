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

//! Mutable in-place representation.
//!
//! An in-memory SQLite table. Reads are plain queries; column creation
//! alters the persistent table itself and is undone through
//! [`ScopedColumn`], so the schema is restored on every exit path.

use super::{Shape, TableBackend};
use crate::core::operation::{DERIVED_COLUMN, FILTER_MPG_THRESHOLD};
use crate::core::Operation;
use crate::datasets::CarRecord;
use crate::error::{BenchError, Result};
use rusqlite::types::Value;
use rusqlite::{params, Connection, Params};
use tracing::warn;

/// Name of the benchmark table.
pub const TABLE_NAME: &str = "cars";

const SELECT_SQL: &str = "SELECT mpg, cyl, hp FROM cars";
const FILTER_SQL: &str = "SELECT model, mpg, cyl, hp, wt FROM cars WHERE mpg > ?1";
const SORT_SQL: &str =
    "SELECT model, mpg, cyl, hp, wt FROM cars ORDER BY cyl ASC, mpg DESC, rowid ASC";
const GROUP_SQL: &str = "SELECT cyl, AVG(mpg) AS mean_mpg, AVG(hp) AS mean_hp, COUNT(*) AS n \
                         FROM cars GROUP BY cyl ORDER BY cyl";
const DERIVED_EXPR: &str = "CAST(hp AS REAL) / wt";

/// Materialized query result.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows.len(), self.columns.len())
    }
}

/// Full copy of the table's schema and contents, in rowid order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Checks that `ident` can be spliced into SQL unquoted.
pub fn validate_identifier(ident: &str) -> Result<()> {
    let mut chars = ident.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(BenchError::InvalidIdentifier(ident.to_string()))
    }
}

/// A column that exists only for the guard's lifetime.
///
/// `add` appends the column to the table and fills it; the column is dropped
/// again by [`ScopedColumn::finish`] or, failing that, when the guard is
/// dropped (early return, `?`, unwinding).
pub struct ScopedColumn<'conn> {
    conn: &'conn Connection,
    table: String,
    column: String,
    active: bool,
}

impl<'conn> ScopedColumn<'conn> {
    /// Adds `column` of `sql_type` to `table` and sets it to `expr`.
    ///
    /// `expr` is trusted SQL; identifiers are validated.
    pub fn add(
        conn: &'conn Connection,
        table: &str,
        column: &str,
        sql_type: &str,
        expr: &str,
    ) -> Result<Self> {
        validate_identifier(table)?;
        validate_identifier(column)?;
        validate_identifier(sql_type)?;

        conn.execute_batch(&format!(
            "ALTER TABLE {table} ADD COLUMN {column} {sql_type}"
        ))?;
        let guard = Self {
            conn,
            table: table.to_string(),
            column: column.to_string(),
            active: true,
        };

        // A failing fill drops the column via the guard
        conn.execute(&format!("UPDATE {table} SET {column} = {expr}"), [])?;
        Ok(guard)
    }

    /// Drops the column and reports failure to the caller.
    pub fn finish(mut self) -> Result<()> {
        self.active = false;
        self.drop_column()
    }

    fn drop_column(&self) -> Result<()> {
        self.conn.execute_batch(&format!(
            "ALTER TABLE {} DROP COLUMN {}",
            self.table, self.column
        ))?;
        Ok(())
    }
}

impl Drop for ScopedColumn<'_> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Err(e) = self.drop_column() {
            warn!(
                table = %self.table,
                column = %self.column,
                error = %e,
                "failed to drop scoped column"
            );
        }
    }
}

/// Candidate wrapping an in-memory SQLite table.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn from_records(records: &[CarRecord]) -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "CREATE TABLE cars (
                model TEXT NOT NULL,
                mpg REAL NOT NULL,
                cyl INTEGER NOT NULL,
                hp INTEGER NOT NULL,
                wt REAL NOT NULL
            )",
        )?;

        let tx = conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO cars (model, mpg, cyl, hp, wt) VALUES (?1, ?2, ?3, ?4, ?5)")?;
            for r in records {
                stmt.execute(params![r.model, r.mpg, r.cyl, r.hp, r.wt])?;
            }
        }
        tx.commit()?;

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Column names of the persistent table, in table order.
    pub fn schema(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
        let names = stmt
            .query_map([TABLE_NAME], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// Copies the schema and every row.
    pub fn snapshot(&self) -> Result<TableSnapshot> {
        let result = self.fetch_uncached("SELECT * FROM cars ORDER BY rowid", [])?;
        Ok(TableSnapshot {
            columns: result.columns,
            rows: result.rows,
        })
    }

    /// Reads a float column in rowid order.
    pub fn float_column(&self, name: &str) -> Result<Vec<f64>> {
        validate_identifier(name)?;
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {name} FROM {TABLE_NAME} ORDER BY rowid"))?;
        let values = stmt
            .query_map([], |row| row.get::<_, f64>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(values)
    }

    fn fetch(&self, sql: &str, params: impl Params) -> Result<QueryResult> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        collect_rows(&mut stmt, params)
    }

    /// Like `fetch`, for statements whose column set depends on the schema.
    fn fetch_uncached(&self, sql: &str, params: impl Params) -> Result<QueryResult> {
        let mut stmt = self.conn.prepare(sql)?;
        collect_rows(&mut stmt, params)
    }

    pub fn select_columns(&self) -> Result<QueryResult> {
        self.fetch(SELECT_SQL, [])
    }

    pub fn filter_rows(&self) -> Result<QueryResult> {
        self.fetch(FILTER_SQL, [FILTER_MPG_THRESHOLD])
    }

    pub fn sort_table(&self) -> Result<QueryResult> {
        self.fetch(SORT_SQL, [])
    }

    /// Adds the derived column in place, reads the widened table, then
    /// removes the column again.
    pub fn create_column(&self) -> Result<QueryResult> {
        let guard = ScopedColumn::add(&self.conn, TABLE_NAME, DERIVED_COLUMN, "REAL", DERIVED_EXPR)?;
        let result = self.fetch_uncached("SELECT * FROM cars", [])?;
        guard.finish()?;
        Ok(result)
    }

    /// Adds and removes the derived column once, outside any timed region.
    pub fn settle_derived_column(&self) -> Result<()> {
        ScopedColumn::add(&self.conn, TABLE_NAME, DERIVED_COLUMN, "REAL", DERIVED_EXPR)?.finish()
    }

    pub fn grouped_summary(&self) -> Result<QueryResult> {
        self.fetch(GROUP_SQL, [])
    }
}

fn collect_rows(stmt: &mut rusqlite::Statement<'_>, params: impl Params) -> Result<QueryResult> {
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();
    let rows = stmt
        .query_map(params, |row| {
            (0..width)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(QueryResult { columns, rows })
}

impl TableBackend for SqliteBackend {
    fn label(&self) -> &'static str {
        "sqlite_inplace"
    }

    fn execute(&mut self, op: Operation) -> Result<Shape> {
        let result = match op {
            Operation::SelectColumns => self.select_columns()?,
            Operation::FilterRows => self.filter_rows()?,
            Operation::SortTable => self.sort_table()?,
            Operation::CreateColumn => self.create_column()?,
            Operation::GroupedSummary => self.grouped_summary()?,
        };
        Ok(result.shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::MTCARS;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn backend() -> SqliteBackend {
        SqliteBackend::from_records(&MTCARS).unwrap()
    }

    fn base_schema() -> Vec<String> {
        ["model", "mpg", "cyl", "hp", "wt"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_table_loaded() {
        let b = backend();
        assert_eq!(b.schema().unwrap(), base_schema());
        assert_eq!(b.snapshot().unwrap().rows.len(), 32);
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("hp_per_wt").is_ok());
        assert!(validate_identifier("_x1").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("1abc").is_err());
        assert!(validate_identifier("mpg; DROP TABLE cars").is_err());
    }

    #[test]
    fn test_filter_and_sort() {
        let b = backend();
        assert_eq!(b.filter_rows().unwrap().shape(), Shape::new(14, 5));

        let sorted = b.sort_table().unwrap();
        assert_eq!(sorted.rows[0][0], Value::Text("Toyota Corolla".to_string()));
        assert_eq!(
            sorted.rows[31][0],
            Value::Text("Lincoln Continental".to_string())
        );
    }

    #[test]
    fn test_grouped_summary() {
        let summary = backend().grouped_summary().unwrap();
        assert_eq!(summary.columns, ["cyl", "mean_mpg", "mean_hp", "n"]);
        assert_eq!(summary.rows[0][0], Value::Integer(4));
        assert_eq!(summary.rows[2][3], Value::Integer(14));
        match summary.rows[2][1] {
            Value::Real(mean) => assert!((mean - 15.1).abs() < 1e-9),
            ref other => panic!("Expected REAL mean, got {other:?}"),
        }
    }

    #[test]
    fn test_create_column_restores_schema() {
        let b = backend();
        let before = b.snapshot().unwrap();

        let widened = b.create_column().unwrap();
        assert_eq!(widened.shape(), Shape::new(32, 6));
        assert_eq!(widened.columns.last().map(String::as_str), Some(DERIVED_COLUMN));

        assert_eq!(b.snapshot().unwrap(), before);
    }

    #[test]
    fn test_repeated_create_column() {
        let mut b = backend();
        for _ in 0..5 {
            assert_eq!(b.execute(Operation::CreateColumn).unwrap(), Shape::new(32, 6));
        }
        b.settle_derived_column().unwrap();
        assert_eq!(b.schema().unwrap(), base_schema());
    }

    #[test]
    fn test_guard_drops_on_early_return() {
        let b = backend();

        fn widen_then_fail(conn: &Connection) -> Result<()> {
            let _guard = ScopedColumn::add(conn, TABLE_NAME, "tmp", "REAL", "mpg * 2")?;
            Err(BenchError::UnknownColumn("forced".to_string()))
        }

        assert!(widen_then_fail(b.connection()).is_err());
        assert_eq!(b.schema().unwrap(), base_schema());
    }

    #[test]
    fn test_guard_drops_on_panic() {
        let b = backend();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = ScopedColumn::add(b.connection(), TABLE_NAME, "tmp", "REAL", "mpg").unwrap();
            panic!("benchmark body panicked");
        }));

        assert!(result.is_err());
        assert_eq!(b.schema().unwrap(), base_schema());
    }

    #[test]
    fn test_failed_fill_removes_column() {
        let b = backend();
        let result = ScopedColumn::add(b.connection(), TABLE_NAME, "tmp", "REAL", "no_such_col * 2");
        assert!(matches!(result, Err(BenchError::Sqlite(_))));
        assert_eq!(b.schema().unwrap(), base_schema());
    }

    #[test]
    fn test_unknown_column_read() {
        let err = backend().float_column("disp").unwrap_err();
        assert!(matches!(err, BenchError::Sqlite(_)));
    }
}
