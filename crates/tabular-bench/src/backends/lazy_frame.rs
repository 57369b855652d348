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

//! Immutable frame representation.
//!
//! The base `DataFrame` is never modified. Every operation builds a lazy
//! query plan over a cheap clone and collects a new frame.

use super::{Shape, TableBackend};
use crate::core::operation::{
    DERIVED_COLUMN, FILTER_MPG_THRESHOLD, GROUP_KEY, SELECTED_COLUMNS,
};
use crate::core::Operation;
use crate::datasets::CarRecord;
use crate::error::Result;
use polars::prelude::*;

/// Candidate wrapping a polars frame.
#[derive(Debug, Clone)]
pub struct LazyFrameBackend {
    frame: DataFrame,
}

impl LazyFrameBackend {
    pub fn from_records(records: &[CarRecord]) -> Result<Self> {
        let frame = df!(
            "model" => records.iter().map(|r| r.model).collect::<Vec<_>>(),
            "mpg" => records.iter().map(|r| r.mpg).collect::<Vec<_>>(),
            "cyl" => records.iter().map(|r| r.cyl).collect::<Vec<_>>(),
            "hp" => records.iter().map(|r| r.hp).collect::<Vec<_>>(),
            "wt" => records.iter().map(|r| r.wt).collect::<Vec<_>>(),
        )?;
        Ok(Self { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Reads a float column of the base frame.
    pub fn float_column(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.frame.column(name)?.f64()?.into_no_null_iter().collect())
    }

    fn plan(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn select_columns(&self) -> Result<DataFrame> {
        let exprs: Vec<Expr> = SELECTED_COLUMNS.iter().map(|&name| col(name)).collect();
        Ok(self.plan().select(exprs).collect()?)
    }

    pub fn filter_rows(&self) -> Result<DataFrame> {
        Ok(self
            .plan()
            .filter(col("mpg").gt(lit(FILTER_MPG_THRESHOLD)))
            .collect()?)
    }

    pub fn sort_table(&self) -> Result<DataFrame> {
        let options = SortMultipleOptions::default()
            .with_order_descending_multi([false, true])
            .with_maintain_order(true);
        Ok(self
            .plan()
            .sort_by_exprs([col("cyl"), col("mpg")], options)
            .collect()?)
    }

    pub fn create_column(&self) -> Result<DataFrame> {
        let derived = col("hp").cast(DataType::Float64) / col("wt");
        Ok(self
            .plan()
            .with_column(derived.alias(DERIVED_COLUMN))
            .collect()?)
    }

    pub fn grouped_summary(&self) -> Result<DataFrame> {
        Ok(self
            .plan()
            .group_by([col(GROUP_KEY)])
            .agg([
                col("mpg").mean().alias("mean_mpg"),
                col("hp").mean().alias("mean_hp"),
                col("model").count().alias("n"),
            ])
            .sort_by_exprs([col(GROUP_KEY)], SortMultipleOptions::default())
            .collect()?)
    }
}

impl TableBackend for LazyFrameBackend {
    fn label(&self) -> &'static str {
        "polars_lazy"
    }

    fn execute(&mut self, op: Operation) -> Result<Shape> {
        let result = match op {
            Operation::SelectColumns => self.select_columns()?,
            Operation::FilterRows => self.filter_rows()?,
            Operation::SortTable => self.sort_table()?,
            Operation::CreateColumn => self.create_column()?,
            Operation::GroupedSummary => self.grouped_summary()?,
        };
        let (rows, cols) = result.shape();
        Ok(Shape::new(rows, cols))
    }
}
