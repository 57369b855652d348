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

//! The benchmarked tabular operations.

use std::fmt;

/// Columns projected by [`Operation::SelectColumns`].
pub const SELECTED_COLUMNS: [&str; 3] = ["mpg", "cyl", "hp"];

/// Rows kept by [`Operation::FilterRows`] have `mpg` above this.
pub const FILTER_MPG_THRESHOLD: f64 = 20.0;

/// Name of the column added by [`Operation::CreateColumn`].
pub const DERIVED_COLUMN: &str = "hp_per_wt";

/// Grouping key for [`Operation::GroupedSummary`].
pub const GROUP_KEY: &str = "cyl";

/// A logical tabular transformation, identical across representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// Project `mpg`, `cyl`, `hp`.
    SelectColumns,
    /// Keep rows with `mpg > 20`.
    FilterRows,
    /// Order by `cyl` ascending, then `mpg` descending.
    SortTable,
    /// Add `hp_per_wt = hp / wt`.
    CreateColumn,
    /// Mean `mpg`, mean `hp` and row count per `cyl`.
    GroupedSummary,
}

impl Operation {
    /// All operations in run order. This is also the sheet order.
    pub const ALL: [Operation; 5] = [
        Operation::SelectColumns,
        Operation::FilterRows,
        Operation::SortTable,
        Operation::CreateColumn,
        Operation::GroupedSummary,
    ];

    /// Returns the worksheet name for this operation.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Operation::SelectColumns => "1_Select_Columns",
            Operation::FilterRows => "2_Filter_Rows",
            Operation::SortTable => "3_Sorting_Table",
            Operation::CreateColumn => "4_Create_Column",
            Operation::GroupedSummary => "5_Grouped_Summary",
        }
    }

    /// Returns a short snake_case name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::SelectColumns => "select_columns",
            Operation::FilterRows => "filter_rows",
            Operation::SortTable => "sort_table",
            Operation::CreateColumn => "create_column",
            Operation::GroupedSummary => "grouped_summary",
        }
    }

    /// Whether the in-place representation is mutated by this operation.
    pub fn mutates_in_place(&self) -> bool {
        matches!(self, Operation::CreateColumn)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}
