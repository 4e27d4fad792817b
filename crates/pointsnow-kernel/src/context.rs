//! Call context passed to the kernel for one forcing bracket.
//!
//! [`KernelContext`] bundles the bracket records, the live state, the
//! refinement hierarchy, both constant blocks, the step ordinal, and the
//! thread hint, so the [`SnowKernel`](crate::SnowKernel) signature stays
//! stable as the contract grows.

use pointsnow_core::{ForcingRecord, SiteConstants, SnowState, TimestepHierarchy};

/// Execution context for one [`do_tstep()`](crate::SnowKernel::do_tstep)
/// call.
///
/// Everything except the state is read-only. The state is borrowed
/// exclusively for the duration of the call.
pub struct KernelContext<'a> {
    start: &'a ForcingRecord,
    end: &'a ForcingRecord,
    state: &'a mut SnowState,
    hierarchy: &'a TimestepHierarchy,
    params: &'a SiteConstants,
    constants: &'a SiteConstants,
    first_step: u64,
    threads: usize,
}

impl<'a> KernelContext<'a> {
    /// Construct a new kernel context.
    ///
    /// Typically called by the driver. Kernel tests build one directly.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start: &'a ForcingRecord,
        end: &'a ForcingRecord,
        state: &'a mut SnowState,
        hierarchy: &'a TimestepHierarchy,
        params: &'a SiteConstants,
        constants: &'a SiteConstants,
        first_step: u64,
        threads: usize,
    ) -> Self {
        Self {
            start,
            end,
            state,
            hierarchy,
            params,
            constants,
            first_step,
            threads,
        }
    }

    /// Forcing at the start of the bracket.
    pub fn start(&self) -> &ForcingRecord {
        self.start
    }

    /// Forcing at the end of the bracket.
    pub fn end(&self) -> &ForcingRecord {
        self.end
    }

    /// Read-only view of the live state.
    pub fn state(&self) -> &SnowState {
        self.state
    }

    /// The live state, for in-place integration.
    pub fn state_mut(&mut self) -> &mut SnowState {
        self.state
    }

    /// Refinement hierarchy. Level 0 is the bracket length.
    pub fn hierarchy(&self) -> &TimestepHierarchy {
        self.hierarchy
    }

    /// Parameter block.
    pub fn params(&self) -> &SiteConstants {
        self.params
    }

    /// Constant block.
    pub fn constants(&self) -> &SiteConstants {
        self.constants
    }

    /// Ordinal of this step within the run; the first call is 1.
    pub fn first_step(&self) -> u64 {
        self.first_step
    }

    /// Worker thread hint.
    pub fn threads(&self) -> usize {
        self.threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{KernelStatus, SnowKernel};
    use pointsnow_core::FREEZE;

    #[test]
    fn context_exposes_brackets_and_metadata() {
        let start = ForcingRecord {
            air_temp: FREEZE - 5.0,
            ..ForcingRecord::default()
        };
        let end = ForcingRecord {
            air_temp: FREEZE - 4.0,
            ..ForcingRecord::default()
        };
        let mut state = SnowState::bare_ground(2000.0);
        let hierarchy = TimestepHierarchy::for_interval(3600.0);
        let constants = SiteConstants::default();

        let ctx = KernelContext::new(
            &start, &end, &mut state, &hierarchy, &constants, &constants, 7, 2,
        );

        assert_eq!(ctx.start().air_temp, FREEZE - 5.0);
        assert_eq!(ctx.end().air_temp, FREEZE - 4.0);
        assert_eq!(ctx.state().elevation, 2000.0);
        assert_eq!(ctx.hierarchy().data_step_secs(), 3600.0);
        assert_eq!(ctx.params(), ctx.constants());
        assert_eq!(ctx.first_step(), 7);
        assert_eq!(ctx.threads(), 2);
    }

    struct SnowfallOnly;

    impl SnowKernel for SnowfallOnly {
        fn name(&self) -> &str {
            "snowfall_only"
        }

        fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
            let snow = ctx.end().precip_mass * ctx.end().percent_snow;
            let dt = ctx.hierarchy().data_step_secs();
            let state = ctx.state_mut();
            state.specific_mass += snow;
            state.current_time += dt;
            KernelStatus::SUCCESS
        }
    }

    #[test]
    fn kernel_mutates_state_through_context() {
        let start = ForcingRecord::default();
        let end = ForcingRecord {
            precip_mass: 4.0,
            percent_snow: 1.0,
            snow_density: 100.0,
            ..ForcingRecord::default()
        };
        let mut state = SnowState::bare_ground(2000.0);
        let hierarchy = TimestepHierarchy::for_interval(3600.0);
        let constants = SiteConstants::default();

        let status = {
            let mut ctx = KernelContext::new(
                &start, &end, &mut state, &hierarchy, &constants, &constants, 1, 1,
            );
            SnowfallOnly.do_tstep(&mut ctx)
        };

        assert_eq!(status, KernelStatus::SUCCESS);
        assert_eq!(state.specific_mass, 4.0);
        assert_eq!(state.current_time, 3600.0);
    }
}
