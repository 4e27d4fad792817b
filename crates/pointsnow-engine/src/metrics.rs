//! Per-run performance metrics for the driver.

/// Counters and timings collected during one [`Driver::run()`] call.
///
/// All durations are in microseconds. Populated on success and on
/// kernel failure; a run rejected before the first kernel call leaves
/// the previous metrics in place.
///
/// [`Driver::run()`]: crate::Driver::run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Kernel calls made, including a failing one.
    pub kernel_calls: u64,
    /// Output records emitted.
    pub records_emitted: usize,
    /// Wall-clock time spent inside the kernel.
    pub kernel_us: u64,
    /// Wall-clock time for the whole run.
    pub total_us: u64,
}
