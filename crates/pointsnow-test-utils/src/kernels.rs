//! Reusable kernel test fixtures.
//!
//! Four standard kernels for driver testing:
//!
//! - [`NoopKernel`]: succeeds without touching the state.
//! - [`FailingKernel`]: fails deterministically after N calls.
//! - [`RecordingKernel`]: records every call it receives.
//! - [`AccumulatingKernel`]: piles up snowfall so outputs are non-trivial.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use pointsnow_core::{ForcingField, ForcingRecord, SnowState, TimestepHierarchy, FREEZE};
use pointsnow_kernel::{KernelContext, KernelStatus, SnowKernel};

fn advance_clock(state: &mut SnowState, dt: f64) {
    state.current_time += dt;
    state.time_since_out += dt;
}

/// Succeeds on every call and leaves the state untouched.
pub struct NoopKernel {
    required: &'static [ForcingField],
}

impl NoopKernel {
    pub fn new() -> Self {
        Self {
            required: &ForcingField::ALL,
        }
    }

    /// A no-op kernel that only requires `fields`.
    pub fn requiring(fields: &'static [ForcingField]) -> Self {
        Self { required: fields }
    }
}

impl Default for NoopKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowKernel for NoopKernel {
    fn name(&self) -> &str {
        "noop"
    }

    fn required_fields(&self) -> &[ForcingField] {
        self.required
    }

    fn do_tstep(&self, _ctx: &mut KernelContext<'_>) -> KernelStatus {
        KernelStatus::SUCCESS
    }
}

/// Fails deterministically after a configurable number of successful calls.
///
/// Successful calls advance the state clock. Uses `AtomicUsize` for the
/// call counter so it satisfies `Send`.
pub struct FailingKernel {
    pub succeed_count: usize,
    pub status: KernelStatus,
    call_count: AtomicUsize,
}

impl FailingKernel {
    /// Create a kernel that succeeds `succeed_count` times then returns
    /// status `0`.
    pub fn new(succeed_count: usize) -> Self {
        Self::with_status(succeed_count, KernelStatus(0))
    }

    /// Same as [`new`](Self::new) with an explicit failure status.
    pub fn with_status(succeed_count: usize, status: KernelStatus) -> Self {
        Self {
            succeed_count,
            status,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `do_tstep()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl SnowKernel for FailingKernel {
    fn name(&self) -> &str {
        "failing"
    }

    fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return self.status;
        }
        let dt = ctx.hierarchy().data_step_secs();
        advance_clock(ctx.state_mut(), dt);
        KernelStatus::SUCCESS
    }
}

/// One call observed by [`RecordingKernel`].
#[derive(Clone, Debug, PartialEq)]
pub struct KernelCall {
    pub step: u64,
    pub start: ForcingRecord,
    pub end: ForcingRecord,
    pub threads: usize,
    /// `time_since_out` as the kernel found it.
    pub time_since_out: f64,
    pub data_step_secs: f64,
}

/// Records every call, then advances the state clock and succeeds.
pub struct RecordingKernel {
    calls: Mutex<Vec<KernelCall>>,
}

impl RecordingKernel {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls seen so far, in order.
    pub fn calls(&self) -> Vec<KernelCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for RecordingKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowKernel for RecordingKernel {
    fn name(&self) -> &str {
        "recording"
    }

    fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
        let dt = ctx.hierarchy().data_step_secs();
        let call = KernelCall {
            step: ctx.first_step(),
            start: *ctx.start(),
            end: *ctx.end(),
            threads: ctx.threads(),
            time_since_out: ctx.state().time_since_out,
            data_step_secs: dt,
        };
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        advance_clock(ctx.state_mut(), dt);
        KernelStatus::SUCCESS
    }
}

/// Accumulates the bracket-end snowfall into the pack.
///
/// Not physics: mass only grows, the pack sits at `min(T_a, 0 °C)`, and
/// rain goes straight to SWI. Large snowfall is integrated in sub-steps
/// chosen from the hierarchy thresholds, so the hierarchy is exercised.
pub struct AccumulatingKernel {
    substeps: AtomicUsize,
}

impl AccumulatingKernel {
    pub fn new() -> Self {
        Self {
            substeps: AtomicUsize::new(0),
        }
    }

    /// Total sub-steps taken across all calls.
    pub fn substeps(&self) -> usize {
        self.substeps.load(Ordering::Relaxed)
    }

    /// Number of sub-steps for a mass change of `change`.
    ///
    /// Descends one fine level for every threshold `change` exceeds.
    pub fn refinement(hierarchy: &TimestepHierarchy, change: f64) -> u32 {
        let mut n = 1;
        for level in hierarchy.fine_levels() {
            match (level.threshold, level.intervals) {
                (Some(threshold), Some(intervals)) if change > threshold => n *= intervals,
                _ => break,
            }
        }
        n
    }
}

impl Default for AccumulatingKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowKernel for AccumulatingKernel {
    fn name(&self) -> &str {
        "accumulating"
    }

    fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
        let end = *ctx.end();
        let dt = ctx.hierarchy().data_step_secs();
        let snowfall = end.precip_mass * end.percent_snow;
        let rain = end.precip_mass - snowfall;
        let n = Self::refinement(ctx.hierarchy(), snowfall);
        self.substeps.fetch_add(n as usize, Ordering::Relaxed);

        let state = ctx.state_mut();
        for _ in 0..n {
            state.specific_mass += snowfall / f64::from(n);
        }
        state.swi += rain;
        state.net_rad = end.net_solar + end.thermal;
        if state.specific_mass > 0.0 {
            let pack_temp = end.air_temp.min(FREEZE);
            state.layer_count = 1;
            if end.snow_density > 0.0 && snowfall > 0.0 {
                state.density = end.snow_density;
            }
            if state.density > 0.0 {
                state.thickness = state.specific_mass / state.density;
            }
            state.specific_mass_surface = state.specific_mass;
            state.thickness_surface = state.thickness;
            state.temp_surface = pack_temp;
            state.temp_lower = pack_temp;
            state.temp_snowcover = pack_temp;
        }
        advance_clock(state, dt);
        KernelStatus::SUCCESS
    }
}
