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

//! The fixed benchmark dataset.
//!
//! Thirty-two cars from the 1974 Motor Trend road tests: model name, fuel
//! economy (`mpg`), cylinder count (`cyl`), gross horsepower (`hp`) and
//! weight in 1000 lbs (`wt`). The data is embedded so runs never touch the
//! filesystem or the network before the report is written.

use crate::backends::{ColumnBackend, LazyFrameBackend, Representations, SqliteBackend};
use crate::error::Result;

/// Rows in the reference dataset.
pub const ROW_COUNT: usize = 32;

/// One car of the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarRecord {
    pub model: &'static str,
    pub mpg: f64,
    pub cyl: i64,
    pub hp: i64,
    pub wt: f64,
}

const fn car(model: &'static str, mpg: f64, cyl: i64, hp: i64, wt: f64) -> CarRecord {
    CarRecord {
        model,
        mpg,
        cyl,
        hp,
        wt,
    }
}

/// The reference dataset.
pub const MTCARS: [CarRecord; ROW_COUNT] = [
    car("Mazda RX4", 21.0, 6, 110, 2.620),
    car("Mazda RX4 Wag", 21.0, 6, 110, 2.875),
    car("Datsun 710", 22.8, 4, 93, 2.320),
    car("Hornet 4 Drive", 21.4, 6, 110, 3.215),
    car("Hornet Sportabout", 18.7, 8, 175, 3.440),
    car("Valiant", 18.1, 6, 105, 3.460),
    car("Duster 360", 14.3, 8, 245, 3.570),
    car("Merc 240D", 24.4, 4, 62, 3.190),
    car("Merc 230", 22.8, 4, 95, 3.150),
    car("Merc 280", 19.2, 6, 123, 3.440),
    car("Merc 280C", 17.8, 6, 123, 3.440),
    car("Merc 450SE", 16.4, 8, 180, 4.070),
    car("Merc 450SL", 17.3, 8, 180, 3.730),
    car("Merc 450SLC", 15.2, 8, 180, 3.780),
    car("Cadillac Fleetwood", 10.4, 8, 205, 5.250),
    car("Lincoln Continental", 10.4, 8, 215, 5.424),
    car("Chrysler Imperial", 14.7, 8, 230, 5.345),
    car("Fiat 128", 32.4, 4, 66, 2.200),
    car("Honda Civic", 30.4, 4, 52, 1.615),
    car("Toyota Corolla", 33.9, 4, 65, 1.835),
    car("Toyota Corona", 21.5, 4, 97, 2.465),
    car("Dodge Challenger", 15.5, 8, 150, 3.520),
    car("AMC Javelin", 15.2, 8, 150, 3.435),
    car("Camaro Z28", 13.3, 8, 245, 3.840),
    car("Pontiac Firebird", 19.2, 8, 175, 3.845),
    car("Fiat X1-9", 27.3, 4, 66, 1.935),
    car("Porsche 914-2", 26.0, 4, 91, 2.140),
    car("Lotus Europa", 30.4, 4, 113, 1.513),
    car("Ford Pantera L", 15.8, 8, 264, 3.170),
    car("Ferrari Dino", 19.7, 6, 175, 2.770),
    car("Maserati Bora", 15.0, 8, 335, 3.570),
    car("Volvo 142E", 21.4, 4, 109, 2.780),
];

/// Builds the three synchronized representations of [`MTCARS`].
///
/// Deterministic and free of I/O; the SQLite table lives in memory.
pub fn build_representations() -> Result<Representations> {
    Ok(Representations {
        columns: ColumnBackend::from_records(&MTCARS),
        lazy: LazyFrameBackend::from_records(&MTCARS)?,
        in_place: SqliteBackend::from_records(&MTCARS)?,
    })
}
