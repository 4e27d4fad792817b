//! Error types for the pointsnow simulation driver.
//!
//! Organized by where the failure is detected: hierarchy construction,
//! run configuration, and the run itself (forcing validation, interval
//! inference, kernel integration).

use std::error::Error;
use std::fmt;

use crate::forcing::ForcingField;
use crate::time::Timestamp;

// ── RunError ──────────────────────────────────────────────────────

/// Errors that abort a simulation run.
///
/// None of these are recovered locally. A run either completes and
/// returns every output record, or fails and returns none.
#[derive(Clone, Debug, PartialEq)]
pub enum RunError {
    /// A field the kernel requires is absent from the whole forcing table.
    ///
    /// Detected once, before the first kernel call.
    MissingField {
        /// The missing forcing field.
        field: ForcingField,
    },
    /// The forcing timestamps do not share a single sampling interval.
    IrregularSeries {
        /// Description of the irregularity.
        reason: String,
    },
    /// The kernel returned a non-success status for one timestep.
    Integration {
        /// End of the bracket the kernel was integrating.
        timestamp: Timestamp,
        /// Ordinal of the failing step (the first kernel call is step 1).
        step: u64,
        /// Raw status code reported by the kernel.
        status: i32,
    },
    /// The run configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(
                f,
                "forcing field '{}' ({}) is required by the kernel but absent",
                field.source_name(),
                field.kernel_name()
            ),
            Self::IrregularSeries { reason } => write!(f, "irregular forcing series: {reason}"),
            Self::Integration {
                timestamp,
                step,
                status,
            } => write!(
                f,
                "kernel integration failed on time step {timestamp} (step {step}, status {status})"
            ),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected while validating a run configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Site elevation is NaN or infinite.
    InvalidElevation {
        /// The invalid value.
        value: f64,
    },
    /// The report period is zero hours.
    ZeroReportPeriod,
    /// The time-step hierarchy failed validation.
    Hierarchy(HierarchyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElevation { value } => {
                write!(f, "elevation must be finite, got {value}")
            }
            Self::ZeroReportPeriod => write!(f, "report_period_hours must be at least 1"),
            Self::Hierarchy(e) => write!(f, "hierarchy: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Hierarchy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HierarchyError> for ConfigError {
    fn from(e: HierarchyError) -> Self {
        Self::Hierarchy(e)
    }
}

// ── HierarchyError ────────────────────────────────────────────────

/// Errors from [`TimestepHierarchy::new()`](crate::TimestepHierarchy::new).
#[derive(Clone, Debug, PartialEq)]
pub enum HierarchyError {
    /// No levels were supplied.
    Empty,
    /// Only the reporting level was supplied; the kernel needs at least
    /// one fine level to fall back to.
    NoFineLevels,
    /// A level's own fields are inconsistent.
    InvalidLevel {
        /// Index of the offending level.
        level: usize,
        /// Description of the problem.
        reason: String,
    },
    /// A fine level is not strictly finer than the fine level above it.
    NotFiner {
        /// Index of the offending level.
        level: usize,
        /// Step of the offending level, in seconds.
        step_secs: f64,
        /// Step of the parent level, in seconds.
        parent_step_secs: f64,
    },
    /// A fine level's sub-steps do not tile its parent step exactly.
    IntervalMismatch {
        /// Index of the offending level.
        level: usize,
        /// `intervals * step_secs` for the offending level.
        covered_secs: f64,
        /// Step of the parent level, in seconds.
        parent_step_secs: f64,
    },
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "hierarchy has no levels"),
            Self::NoFineLevels => write!(f, "hierarchy has no fine levels"),
            Self::InvalidLevel { level, reason } => write!(f, "level {level}: {reason}"),
            Self::NotFiner {
                level,
                step_secs,
                parent_step_secs,
            } => write!(
                f,
                "level {level} step {step_secs}s is not finer than parent step {parent_step_secs}s"
            ),
            Self::IntervalMismatch {
                level,
                covered_secs,
                parent_step_secs,
            } => write!(
                f,
                "level {level} sub-steps cover {covered_secs}s, parent step is {parent_step_secs}s"
            ),
        }
    }
}

impl Error for HierarchyError {}
