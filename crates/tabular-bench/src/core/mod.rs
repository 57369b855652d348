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

//! Core benchmark infrastructure.
//!
//! # Modules
//!
//! - `config`: Run configuration constants and builder
//! - `measurement`: Single-shot timing and sample statistics
//! - `operation`: The benchmarked tabular operations

pub mod config;
pub mod measurement;
pub mod operation;

pub use config::{BenchConfig, DEFAULT_OUTPUT_FILE, DEFAULT_REPETITIONS, DEFAULT_WARMUP_RUNS};
pub use measurement::{time_once, Statistics};
pub use operation::Operation;
