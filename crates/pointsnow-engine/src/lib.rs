//! Simulation driver for point snow energy-balance runs.
//!
//! Provides the three stages around the physics kernel:
//!
//! - [`initialize`]: derive the initial state, refinement hierarchy, and
//!   site constants from the forcing index and an elevation.
//! - [`Driver`]: step the kernel through every forcing bracket in order
//!   and decide when to report.
//! - [`capture`]: copy a reportable [`OutputRecord`](pointsnow_core::OutputRecord)
//!   out of the live state.
//!
//! [`run_point`] composes all three.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod egress;
pub mod init;
pub mod metrics;

pub use config::RunConfig;
pub use driver::{run_point, Driver};
pub use egress::capture;
pub use init::{initialize, Initialization};
pub use metrics::RunMetrics;
