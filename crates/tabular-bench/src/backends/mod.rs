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

//! Table representations under benchmark.
//!
//! Three idioms for the same table, each implementing every
//! [`Operation`]:
//!
//! - `columns`: plain `Vec` columns with hand-written iterator code
//! - `lazy_frame`: a polars frame treated as immutable, driven through the
//!   lazy expression API
//! - `sqlite`: an in-memory SQLite table mutated in place

pub mod columns;
pub mod lazy_frame;
pub mod sqlite;

pub use columns::{Column, ColumnBackend, ColumnTable};
pub use lazy_frame::LazyFrameBackend;
pub use sqlite::{ScopedColumn, SqliteBackend, TableSnapshot};

use crate::core::Operation;
use crate::error::Result;
use std::fmt;

/// Dimensions of a materialized operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}

/// A benchmark candidate: one representation able to run every operation.
///
/// `execute` must fully materialize the result so that the timed region
/// covers the real work, and must leave the representation's schema as it
/// found it.
pub trait TableBackend {
    /// Label used for the `Operation` column of the report.
    fn label(&self) -> &'static str;

    /// Runs one operation and returns the shape of its result.
    fn execute(&mut self, op: Operation) -> Result<Shape>;
}

/// The three synchronized representations of the reference dataset.
pub struct Representations {
    pub columns: ColumnBackend,
    pub lazy: LazyFrameBackend,
    pub in_place: SqliteBackend,
}

impl Representations {
    /// Candidates in report row order.
    pub fn candidates_mut(&mut self) -> [&mut dyn TableBackend; 3] {
        [&mut self.columns, &mut self.lazy, &mut self.in_place]
    }

    /// Candidate labels in report row order.
    pub fn labels(&self) -> [&'static str; 3] {
        [
            self.columns.label(),
            self.lazy.label(),
            self.in_place.label(),
        ]
    }
}
