//! End-to-end point runs through `run_point` with mock kernels.

use chrono::TimeDelta;
use pointsnow_core::{ForcingField, OutputField, RunError, TimestepLevel};
use pointsnow_engine::{initialize, run_point, Driver, RunConfig};
use pointsnow_forcing::ForcingTable;
use pointsnow_kernel::SnowKernel;
use pointsnow_test_utils::{
    constant_forcing, evenly_spaced, hourly_forcing, hourly_index, water_year_start,
    AccumulatingKernel, FailingKernel, NoopKernel, RecordingKernel,
};
use proptest::prelude::*;

fn snowing(rows: usize, precip: f64, air_c: f64) -> ForcingTable {
    let mut table = ForcingTable::new(hourly_index(rows)).unwrap();
    for field in ForcingField::ALL {
        let value = match field {
            ForcingField::Precip => precip,
            ForcingField::PercentSnow => 1.0,
            ForcingField::SnowDensity => 100.0,
            ForcingField::AirTemp | ForcingField::PrecipTemp => air_c,
            _ => 0.0,
        };
        table.insert_column(field.source_name(), vec![value; rows]).unwrap();
    }
    table
}

#[test]
fn thirty_hourly_rows_at_high_elevation() {
    let forcing = hourly_forcing(30, 2944);
    let out = run_point(NoopKernel::new(), &forcing, 2944.7, RunConfig::default()).unwrap();
    let idx = forcing.index();
    // One full day, then the final partial window.
    assert_eq!(out.len(), 2);
    assert_eq!(out.last().unwrap().timestamp, idx[29] - TimeDelta::hours(1));
}

#[test]
fn under_a_day_is_a_single_partial_record() {
    let forcing = hourly_forcing(24, 1);
    let out = run_point(NoopKernel::new(), &forcing, 2944.7, RunConfig::default()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(
        out.first().unwrap().timestamp,
        forcing.index()[23] - TimeDelta::hours(1)
    );
}

#[test]
fn accumulated_snow_reaches_output() {
    // 2 kg/m² per hour for 48 steps.
    let forcing = snowing(49, 2.0, -5.0);
    let out = run_point(AccumulatingKernel::new(), &forcing, 2103.0, RunConfig::default()).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out.column(OutputField::SpecificMass), vec![48.0, 96.0]);
    assert_eq!(out.column_by_name("snow_density"), Some(vec![100.0, 100.0]));

    let last = out.last().unwrap();
    assert!((last.temp_surf + 5.0).abs() < 1e-9);
    assert!((last.temp_snowcover + 5.0).abs() < 1e-9);
    assert!((last.thickness - 0.96).abs() < 1e-9);
}

#[test]
fn warm_pack_is_capped_at_freezing() {
    let forcing = snowing(3, 1.0, 4.0);
    let out = run_point(AccumulatingKernel::new(), &forcing, 2103.0, RunConfig::default()).unwrap();
    let rec = out.last().unwrap();
    assert!(rec.temp_surf.abs() < 1e-9, "{}", rec.temp_surf);
}

#[test]
fn failure_returns_no_records() {
    let forcing = hourly_forcing(72, 9);
    let err = run_point(FailingKernel::new(50), &forcing, 2000.0, RunConfig::default()).unwrap_err();
    match err {
        RunError::Integration { step, timestamp, status } => {
            assert_eq!(step, 51);
            assert_eq!(timestamp, forcing.index()[51]);
            assert_eq!(status, 0);
        }
        other => panic!("expected Integration, got {other:?}"),
    }
}

#[test]
fn boxed_kernels_drive_the_same_way() {
    let forcing = snowing(25, 1.0, -2.0);
    let kernel: Box<dyn SnowKernel> = Box::new(AccumulatingKernel::new());
    let out = run_point(kernel, &forcing, 2000.0, RunConfig::default()).unwrap();
    assert_eq!(out.column(OutputField::SpecificMass), vec![24.0]);
}

#[test]
fn driver_is_reusable_across_runs() {
    let mut driver = Driver::new(NoopKernel::new(), RunConfig::default()).unwrap();
    for rows in [5, 30, 60] {
        let forcing = hourly_forcing(rows, rows as u64);
        let init = initialize(forcing.index(), 1500.0).unwrap();
        let out = driver.run(&forcing, init).unwrap();
        assert_eq!(out.len(), (rows - 1).div_ceil(24));
        assert_eq!(driver.last_metrics().kernel_calls, rows as u64 - 1);
    }
}

#[test]
fn runs_share_no_state() {
    let forcing = snowing(25, 1.0, -2.0);
    let a = run_point(AccumulatingKernel::new(), &forcing, 2000.0, RunConfig::default()).unwrap();
    let b = run_point(AccumulatingKernel::new(), &forcing, 2000.0, RunConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn reversed_series_never_reaches_kernel() {
    let forcing = hourly_forcing(60, 3);
    let mut init = initialize(forcing.index(), 2000.0).unwrap();
    init.timestamps.reverse();
    let mut driver = Driver::new(RecordingKernel::new(), RunConfig::default()).unwrap();
    assert!(matches!(
        driver.run(&forcing, init),
        Err(RunError::IrregularSeries { .. })
    ));
    assert!(driver.kernel().calls().is_empty());
}

#[test]
fn quarter_hour_forcing_reports_daily() {
    // Level 0 (15 min) is finer than the fixed 1 h fine level.
    let idx = evenly_spaced(water_year_start(), TimeDelta::minutes(15), 201);
    let forcing = constant_forcing(idx.clone(), 0.0);
    let out = run_point(NoopKernel::new(), &forcing, 2000.0, RunConfig::default()).unwrap();
    let stamps: Vec<_> = out.timestamps().collect();
    let back = TimeDelta::minutes(15);
    assert_eq!(stamps, vec![idx[96] - back, idx[192] - back, idx[200] - back]);
}

#[test]
fn custom_hierarchy_reaches_kernel() {
    // 30 kg/m² per hour is under the standard 60 threshold but over 20.
    let forcing = snowing(25, 30.0, -2.0);
    let init = initialize(forcing.index(), 2000.0)
        .unwrap()
        .with_hierarchy([
            TimestepLevel::data(3600.0),
            TimestepLevel::fine(1800.0, 20.0, 2),
        ])
        .unwrap();
    let mut driver = Driver::new(AccumulatingKernel::new(), RunConfig::default()).unwrap();
    let out = driver.run(&forcing, init).unwrap();
    assert_eq!(out.column(OutputField::SpecificMass), vec![720.0]);
    assert_eq!(driver.kernel().substeps(), 48);
}

proptest! {
    #[test]
    fn record_count_matches_cadence(
        rows in 2usize..200,
        minutes in prop::sample::select(vec![15i64, 30, 60, 120, 180, 240, 360, 480, 720, 1440]),
    ) {
        let step = TimeDelta::minutes(minutes);
        let idx = evenly_spaced(water_year_start(), step, rows);
        let last = idx[rows - 1];
        let forcing = constant_forcing(idx, 0.0);
        let out = run_point(NoopKernel::new(), &forcing, 1000.0, RunConfig::default()).unwrap();

        let expected = ((rows as i64 - 1) * minutes + 1439) / 1440;
        prop_assert_eq!(out.len() as i64, expected);
        prop_assert_eq!(out.last().unwrap().timestamp, last - step);
    }

    #[test]
    fn output_timestamps_strictly_increase(rows in 2usize..150, seed in 0u64..1000) {
        let forcing = hourly_forcing(rows, seed);
        let out = run_point(AccumulatingKernel::new(), &forcing, 2500.0, RunConfig::default()).unwrap();
        let stamps: Vec<_> = out.timestamps().collect();
        prop_assert!(stamps.windows(2).all(|w| w[0] < w[1]));
        let mass = out.column(OutputField::SpecificMass);
        prop_assert!(mass.windows(2).all(|w| w[0] <= w[1]));
    }
}
