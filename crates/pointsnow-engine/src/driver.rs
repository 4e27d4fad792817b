//! The time-stepping driver.
//!
//! [`Driver`] owns a [`SnowKernel`] and runs it across a forcing series:
//! one kernel call per bracket of consecutive timestamps, strictly in
//! order, with output captured on the report cadence and at the final
//! timestamp.
//!
//! # Ownership model
//!
//! Each [`run()`](Driver::run) takes the [`Initialization`] by value. The
//! live [`SnowState`](pointsnow_core::SnowState) is owned by the run,
//! lent to the kernel by exclusive reference for one call at a time, and
//! dropped when the run ends. On kernel failure nothing captured so far
//! is returned.

use std::time::Instant;

use chrono::TimeDelta;
use pointsnow_core::{ConfigError, OutputTable, RunError, Timestamp, TimestepHierarchy};
use pointsnow_forcing::{infer_interval, ForcingAdapter, ForcingTable};
use pointsnow_kernel::{KernelContext, SnowKernel};
use tracing::{debug, info, info_span};

use crate::config::RunConfig;
use crate::egress::capture;
use crate::init::{initialize, Initialization};
use crate::metrics::RunMetrics;

// Compile-time assertion: Driver is Send whenever its kernel is.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Driver<Box<dyn SnowKernel>>>();
    }
};

// ── Driver ────────────────────────────────────────────────────────

/// Sequential driver for one point.
pub struct Driver<K: SnowKernel> {
    kernel: K,
    config: RunConfig,
    last_metrics: RunMetrics,
}

impl<K: SnowKernel> Driver<K> {
    /// Build a driver, validating `config`.
    pub fn new(kernel: K, config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            kernel,
            config,
            last_metrics: RunMetrics::default(),
        })
    }

    /// The kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Metrics from the most recent run that reached the kernel.
    pub fn last_metrics(&self) -> &RunMetrics {
        &self.last_metrics
    }

    /// Consume the driver, returning the kernel.
    pub fn into_kernel(self) -> K {
        self.kernel
    }

    /// Run the kernel across every bracket of `init.timestamps`.
    ///
    /// Order of operations:
    ///
    /// 1. Check the kernel's required fields against `forcing` once, then
    ///    check the timestamps and resolve each to its table row.
    /// 2. Adapt the first row as the opening bracket start.
    /// 3. For each later timestamp (step `j` from 1): adapt the bracket
    ///    end, call the kernel, abort on failure, then hand the end
    ///    record over as the next start.
    /// 4. After each successful step, capture a record if the elapsed
    ///    level-0 time since the last capture is a whole report period,
    ///    or if this is the last timestamp. Capturing resets the
    ///    state's `time_since_out`.
    ///
    /// # Errors
    ///
    /// - [`RunError::MissingField`] before any kernel call.
    /// - [`RunError::IrregularSeries`] before any kernel call, if the
    ///   timestamps are fewer than two, out of order, unevenly spaced,
    ///   spaced other than `init.interval` or level 0 of the hierarchy,
    ///   or not all present in `forcing`.
    /// - [`RunError::Integration`] on the first non-success status.
    pub fn run(
        &mut self,
        forcing: &ForcingTable,
        init: Initialization,
    ) -> Result<OutputTable, RunError> {
        let run_start = Instant::now();
        let Initialization {
            mut state,
            hierarchy,
            constants,
            timestamps,
            interval,
        } = init;

        let span = info_span!("point_run", kernel = self.kernel.name());
        let _enter = span.enter();

        forcing.require(self.kernel.required_fields())?;
        let rows = resolve_rows(forcing, &timestamps, interval, &hierarchy)?;
        let last = rows.len() - 1;

        let adapter = ForcingAdapter::new(forcing);

        let threads = self.config.resolved_threads();
        let period_secs = self.config.report_period_secs();
        let step_secs = interval.num_seconds();
        info!(
            steps = last,
            interval_secs = step_secs,
            threads,
            "starting point run"
        );

        let mut start = adapter.adapt(forcing, rows[0]);
        let mut output = OutputTable::new();
        let mut metrics = RunMetrics::default();
        let mut steps_since_output: i64 = 0;

        for (j, (&ts, &row)) in timestamps.iter().zip(&rows).enumerate().skip(1) {
            let end = adapter.adapt(forcing, row);
            let step = j as u64;

            let kernel_start = Instant::now();
            let status = {
                let mut ctx = KernelContext::new(
                    &start, &end, &mut state, &hierarchy, &constants, &constants, step, threads,
                );
                self.kernel.do_tstep(&mut ctx)
            };
            metrics.kernel_us += kernel_start.elapsed().as_micros() as u64;
            metrics.kernel_calls += 1;

            if !status.is_success() {
                metrics.total_us = run_start.elapsed().as_micros() as u64;
                self.last_metrics = metrics;
                return Err(RunError::Integration {
                    timestamp: ts,
                    step,
                    status: status.0,
                });
            }
            debug!(step, timestamp = %ts, "finished time step");

            start = end;
            steps_since_output += 1;

            if (steps_since_output * step_secs) % period_secs == 0 || j == last {
                let record = capture(&state, ts, interval);
                output
                    .push(record)
                    .map_err(|r| RunError::IrregularSeries {
                        reason: format!(
                            "output window {} does not follow the previous one",
                            r.timestamp
                        ),
                    })?;
                debug!(step, window = %record.timestamp, "captured output");
                steps_since_output = 0;
                state.time_since_out = 0.0;
            }
        }

        metrics.records_emitted = output.len();
        metrics.total_us = run_start.elapsed().as_micros() as u64;
        info!(
            records = metrics.records_emitted,
            kernel_calls = metrics.kernel_calls,
            total_us = metrics.total_us,
            "point run complete"
        );
        self.last_metrics = metrics;
        Ok(output)
    }
}

/// Check that `timestamps` is a regular series at `interval` matching
/// level 0 of `hierarchy`, and resolve each timestamp to its row in
/// `forcing`.
fn resolve_rows(
    forcing: &ForcingTable,
    timestamps: &[Timestamp],
    interval: TimeDelta,
    hierarchy: &TimestepHierarchy,
) -> Result<Vec<usize>, RunError> {
    let inferred = infer_interval(timestamps)?;
    if inferred != interval {
        return Err(RunError::IrregularSeries {
            reason: format!("timestamps are spaced {inferred}, expected {interval}"),
        });
    }
    if interval.num_seconds() as f64 != hierarchy.data_step_secs() {
        return Err(RunError::IrregularSeries {
            reason: format!(
                "interval {interval} does not match the {}s reporting level",
                hierarchy.data_step_secs()
            ),
        });
    }
    timestamps
        .iter()
        .map(|ts| {
            forcing.position(ts).ok_or_else(|| RunError::IrregularSeries {
                reason: format!("timestamp {ts} is not in the forcing table"),
            })
        })
        .collect()
}

// ── run_point ─────────────────────────────────────────────────────

/// Initialize and run one point end to end.
///
/// Validates `config`, derives the initial state from `forcing`'s index
/// and `elevation`, and drives `kernel` across the whole series.
pub fn run_point<K: SnowKernel>(
    kernel: K,
    forcing: &ForcingTable,
    elevation: f64,
    config: RunConfig,
) -> Result<OutputTable, RunError> {
    let mut driver = Driver::new(kernel, config)?;
    let init = initialize(forcing.index(), elevation)?;
    driver.run(forcing, init)
}
