//! State initialization from a forcing index and a site elevation.

use chrono::TimeDelta;
use pointsnow_core::time::SECONDS_PER_MINUTE;
use pointsnow_core::{
    ConfigError, HierarchyError, RunError, SiteConstants, SnowState, Timestamp,
    TimestepHierarchy, TimestepLevel,
};
use pointsnow_forcing::infer_interval;
use tracing::debug;

/// Everything a run needs before its first kernel call.
#[derive(Clone, Debug, PartialEq)]
pub struct Initialization {
    /// Bare-ground state at the site elevation.
    pub state: SnowState,
    /// Refinement hierarchy; level 0 is the forcing interval.
    pub hierarchy: TimestepHierarchy,
    /// Site constants for the forcing interval.
    pub constants: SiteConstants,
    /// The forcing timestamps, in order.
    pub timestamps: Vec<Timestamp>,
    /// The forcing sampling interval.
    pub interval: TimeDelta,
}

impl Initialization {
    /// Replace the standard hierarchy with `levels`.
    ///
    /// Level 0 must be the reporting level at the forcing interval.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Hierarchy`] if `levels` fail validation or level 0
    /// is not the forcing interval.
    pub fn with_hierarchy(
        mut self,
        levels: impl IntoIterator<Item = TimestepLevel>,
    ) -> Result<Self, ConfigError> {
        let hierarchy = TimestepHierarchy::new(levels)?;
        let data_secs = self.constants.time_step_secs();
        if hierarchy.data_step_secs() != data_secs {
            return Err(HierarchyError::InvalidLevel {
                level: 0,
                reason: format!(
                    "step {}s does not match the {data_secs}s forcing interval",
                    hierarchy.data_step_secs()
                ),
            }
            .into());
        }
        self.hierarchy = hierarchy;
        Ok(self)
    }
}

/// Derive the initial run state from `index` and `elevation`.
///
/// The sampling interval is inferred from `index`. Level 0 of the
/// hierarchy is that interval; the fine levels are fixed. The state is
/// bare ground: zero everywhere except mask, elevation, and roughness.
///
/// # Errors
///
/// - [`RunError::Config`] if `elevation` is not finite.
/// - [`RunError::IrregularSeries`] if `index` has no single interval.
pub fn initialize(index: &[Timestamp], elevation: f64) -> Result<Initialization, RunError> {
    if !elevation.is_finite() {
        return Err(ConfigError::InvalidElevation { value: elevation }.into());
    }
    let interval = infer_interval(index)?;
    let minutes = interval.num_seconds() as f64 / SECONDS_PER_MINUTE as f64;
    let constants = SiteConstants::for_interval_minutes(minutes);
    let hierarchy = TimestepHierarchy::for_interval(constants.time_step_secs());
    debug!(
        rows = index.len(),
        interval_minutes = minutes,
        elevation,
        "initialized point state"
    );
    Ok(Initialization {
        state: SnowState::bare_ground(elevation),
        hierarchy,
        constants,
        timestamps: index.to_vec(),
        interval,
    })
}
