//! Run configuration and validation.
//!
//! [`RunConfig`] carries the knobs that are not derived from the forcing
//! itself. [`validate()`](RunConfig::validate) checks them once, before
//! the driver is built.

use pointsnow_core::ConfigError;

/// Upper bound on the kernel thread hint.
pub const MAX_THREADS: usize = 64;

/// Hours between regular output records.
pub const DEFAULT_REPORT_PERIOD_HOURS: u32 = 24;

/// Driver configuration for one or more runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Worker thread hint passed to the kernel. `None` = 1.
    pub threads: Option<usize>,
    /// Simulated hours between output records. Default: 24.
    pub report_period_hours: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            threads: None,
            report_period_hours: DEFAULT_REPORT_PERIOD_HOURS,
        }
    }
}

impl RunConfig {
    /// Check structural invariants.
    ///
    /// A zero thread hint is not an error; it is clamped by
    /// [`resolved_threads()`](Self::resolved_threads).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_period_hours == 0 {
            return Err(ConfigError::ZeroReportPeriod);
        }
        Ok(())
    }

    /// Resolve the thread hint handed to the kernel.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_threads(&self) -> usize {
        match self.threads {
            Some(n) => n.clamp(1, MAX_THREADS),
            None => 1,
        }
    }

    /// Report period in seconds.
    pub fn report_period_secs(&self) -> i64 {
        i64::from(self.report_period_hours) * pointsnow_core::time::SECONDS_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_daily_single_threaded() {
        let c = RunConfig::default();
        assert_eq!(c.resolved_threads(), 1);
        assert_eq!(c.report_period_hours, 24);
        assert_eq!(c.report_period_secs(), 86_400);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn thread_hint_is_clamped() {
        let at = |n| RunConfig {
            threads: Some(n),
            ..RunConfig::default()
        };
        assert_eq!(at(0).resolved_threads(), 1);
        assert_eq!(at(8).resolved_threads(), 8);
        assert_eq!(at(1000).resolved_threads(), 64);
    }

    #[test]
    fn zero_report_period_rejected() {
        let c = RunConfig {
            report_period_hours: 0,
            ..RunConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroReportPeriod));
    }
}
