//! The [`SnowKernel`] trait and [`KernelStatus`] code.
//!
//! A kernel advances the snowpack over one data interval. The driver
//! calls it once per forcing bracket, strictly in order, and never
//! concurrently for the same state.

use std::fmt;

use pointsnow_core::ForcingField;

use crate::context::KernelContext;

/// Status code returned by a kernel call.
///
/// Exactly one value, [`KernelStatus::SUCCESS`], means success. Every
/// other value is a kernel-reported failure, and the driver aborts the
/// run on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KernelStatus(pub i32);

impl KernelStatus {
    /// The success sentinel.
    pub const SUCCESS: KernelStatus = KernelStatus(-1);

    /// Whether this is the success sentinel.
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

impl fmt::Display for KernelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(f, "success")
        } else {
            write!(f, "failure ({})", self.0)
        }
    }
}

impl From<i32> for KernelStatus {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// A mass and energy balance integrator for one point.
///
/// # Contract
///
/// - `do_tstep()` integrates over the full level-0 interval between the
///   bracket start and end records. When the change in state over a step
///   exceeds the next level's threshold it may subdivide internally using
///   the hierarchy's fine levels, recombining before it returns.
/// - On success the state must be internally consistent for the bracket
///   end. On failure the state may be left in any condition; the driver
///   will not read it again.
/// - The thread hint is advisory and only the kernel interprets it.
/// - `required_fields()` is called once per run, before the first step.
///
/// # Object safety
///
/// This trait is object-safe; `Box<dyn SnowKernel>` is a valid driver
/// kernel.
///
/// # Examples
///
/// A kernel that only keeps the clock:
///
/// ```
/// use pointsnow_kernel::{KernelContext, KernelStatus, SnowKernel};
///
/// struct Clock;
///
/// impl SnowKernel for Clock {
///     fn name(&self) -> &str { "clock" }
///
///     fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
///         let dt = ctx.hierarchy().data_step_secs();
///         let state = ctx.state_mut();
///         state.current_time += dt;
///         state.time_since_out += dt;
///         KernelStatus::SUCCESS
///     }
/// }
///
/// assert_eq!(Clock.name(), "clock");
/// assert_eq!(Clock.required_fields().len(), 10);
/// ```
pub trait SnowKernel: Send {
    /// Human-readable name for logging and error reporting.
    fn name(&self) -> &str;

    /// Forcing fields this kernel cannot run without.
    ///
    /// The driver checks these against the whole forcing table before
    /// the first call. Default: every field.
    fn required_fields(&self) -> &[ForcingField] {
        &ForcingField::ALL
    }

    /// Integrate one forcing bracket, mutating `ctx.state_mut()` in place.
    fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus;
}

impl<K: SnowKernel + ?Sized> SnowKernel for Box<K> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn required_fields(&self) -> &[ForcingField] {
        (**self).required_fields()
    }

    fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
        (**self).do_tstep(ctx)
    }
}
