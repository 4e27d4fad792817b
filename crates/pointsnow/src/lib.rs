//! pointsnow: a point-scale snow mass and energy balance driver.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all pointsnow sub-crates. For most users, adding `pointsnow` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pointsnow::prelude::*;
//! use chrono::{NaiveDate, TimeDelta};
//!
//! // A kernel that only piles up snowfall.
//! struct Snowfall;
//! impl SnowKernel for Snowfall {
//!     fn name(&self) -> &str { "snowfall" }
//!     fn do_tstep(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
//!         let end = *ctx.end();
//!         let dt = ctx.hierarchy().data_step_secs();
//!         let state = ctx.state_mut();
//!         state.specific_mass += end.precip_mass * end.percent_snow;
//!         state.current_time += dt;
//!         state.time_since_out += dt;
//!         KernelStatus::SUCCESS
//!     }
//! }
//!
//! // Two days of hourly forcing with 1 mm of snow every hour.
//! let t0 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let index: Vec<_> = (0..49).map(|h| t0 + TimeDelta::hours(h)).collect();
//! let mut forcing = ForcingTable::new(index).unwrap();
//! for field in ForcingField::ALL {
//!     let value = match field {
//!         ForcingField::Precip | ForcingField::PercentSnow => 1.0,
//!         ForcingField::AirTemp => -5.0,
//!         _ => 0.0,
//!     };
//!     forcing.insert_column(field.source_name(), vec![value; 49]).unwrap();
//! }
//!
//! let out = run_point(Snowfall, &forcing, 2103.0, RunConfig::default()).unwrap();
//! assert_eq!(out.len(), 2);
//! assert_eq!(out.column(OutputField::SpecificMass), vec![24.0, 48.0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pointsnow-core` | State, forcing records, hierarchy, outputs, errors |
//! | [`kernel`] | `pointsnow-kernel` | The physics kernel boundary |
//! | [`forcing`] | `pointsnow-forcing` | Forcing tables, adaptation, interval inference |
//! | [`engine`] | `pointsnow-engine` | Initializer, driver, output capture |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`pointsnow-core`).
///
/// The live [`types::SnowState`], adapted [`types::ForcingRecord`]s, the
/// [`types::TimestepHierarchy`], [`types::SiteConstants`], output records
/// and tables, and the error taxonomy.
pub use pointsnow_core as types;

/// Physics kernel boundary (`pointsnow-kernel`).
///
/// The [`kernel::SnowKernel`] trait is the extension point for a mass
/// and energy balance integrator.
pub use pointsnow_kernel as kernel;

/// Forcing input handling (`pointsnow-forcing`).
pub use pointsnow_forcing as forcing;

/// Simulation driver (`pointsnow-engine`).
///
/// [`engine::Driver`] for repeated runs with one kernel,
/// [`engine::run_point`] for a single end-to-end run.
pub use pointsnow_engine as engine;

/// Common imports for typical pointsnow usage.
///
/// ```rust
/// use pointsnow::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pointsnow_core::{
        ForcingField, ForcingRecord, OutputField, OutputRecord, OutputTable, SiteConstants,
        SnowState, Timestamp, TimestepHierarchy, FREEZE,
    };

    // Errors
    pub use pointsnow_core::{ConfigError, HierarchyError, RunError};
    pub use pointsnow_forcing::TableError;

    // Kernel
    pub use pointsnow_kernel::{KernelContext, KernelStatus, SnowKernel};

    // Forcing
    pub use pointsnow_forcing::{adapt_row, infer_interval, ForcingAdapter, ForcingTable};

    // Engine
    pub use pointsnow_engine::{
        capture, initialize, run_point, Driver, Initialization, RunConfig, RunMetrics,
    };
}
