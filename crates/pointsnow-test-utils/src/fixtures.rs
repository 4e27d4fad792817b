//! Forcing fixtures: evenly spaced indices and synthetic tables.
//!
//! Synthetic series are seeded, so the same `(rows, seed)` pair always
//! yields the same table.

use std::f64::consts::TAU;

use chrono::{NaiveDate, TimeDelta};
use pointsnow_core::{ForcingField, Timestamp};
use pointsnow_forcing::ForcingTable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Midnight, 1 October 2023.
pub fn water_year_start() -> Timestamp {
    NaiveDate::from_ymd_opt(2023, 10, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid calendar date")
}

/// `rows` timestamps from `start`, `step` apart.
pub fn evenly_spaced(start: Timestamp, step: TimeDelta, rows: usize) -> Vec<Timestamp> {
    (0..rows).map(|i| start + step * i as i32).collect()
}

/// `rows` hourly timestamps from [`water_year_start`].
pub fn hourly_index(rows: usize) -> Vec<Timestamp> {
    evenly_spaced(water_year_start(), TimeDelta::hours(1), rows)
}

/// A table with every forcing column held at the same Celsius-scale
/// `value`.
pub fn constant_forcing(index: Vec<Timestamp>, value: f64) -> ForcingTable {
    let rows = index.len();
    let mut table = ForcingTable::new(index).expect("fixture index has unique timestamps");
    for field in ForcingField::ALL {
        table
            .insert_column(field.source_name(), vec![value; rows])
            .expect("fixture column matches index");
    }
    table
}

/// Seeded synthetic winter forcing on `index`.
///
/// Diurnal air temperature around -4 °C, intermittent precipitation that
/// falls as snow below freezing, and plausible radiation, vapor pressure
/// and wind.
pub fn synthetic_forcing(index: Vec<Timestamp>, seed: u64) -> ForcingTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = index.len();
    let mut cols: [Vec<f64>; 10] = Default::default();

    for i in 0..rows {
        let hour = (i % 24) as f64;
        let phase = (TAU * (hour - 9.0) / 24.0).sin();
        let air = -4.0 + 5.0 * phase + rng.gen_range(-1.0..1.0);
        let precip = if rng.gen_bool(0.2) {
            rng.gen_range(0.1..3.0)
        } else {
            0.0
        };
        let snowy = air < 0.5;

        cols[0].push(air);
        cols[1].push((600.0 * phase).max(0.0));
        cols[2].push(rng.gen_range(220.0..300.0));
        cols[3].push(rng.gen_range(300.0..600.0));
        cols[4].push(rng.gen_range(0.5..6.0));
        cols[5].push(0.0);
        cols[6].push(precip);
        cols[7].push(if snowy { 1.0 } else { 0.0 });
        cols[8].push(if snowy { rng.gen_range(80.0..150.0) } else { 0.0 });
        cols[9].push(air.min(0.0));
    }

    let mut table = ForcingTable::new(index).expect("fixture index has unique timestamps");
    for (field, values) in ForcingField::ALL.into_iter().zip(cols) {
        table
            .insert_column(field.source_name(), values)
            .expect("fixture column matches index");
    }
    table
}

/// [`synthetic_forcing`] on [`hourly_index`]`(rows)`.
pub fn hourly_forcing(rows: usize, seed: u64) -> ForcingTable {
    synthetic_forcing(hourly_index(rows), seed)
}
