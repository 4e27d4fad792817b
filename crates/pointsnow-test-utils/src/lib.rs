//! Test utilities and mock kernels for pointsnow development.
//!
//! - [`kernels`]: deterministic [`SnowKernel`](pointsnow_kernel::SnowKernel)
//!   implementations for driver tests.
//! - [`fixtures`]: evenly spaced timestamp indices and seeded synthetic
//!   forcing tables.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod kernels;

pub use fixtures::{
    constant_forcing, evenly_spaced, hourly_forcing, hourly_index, synthetic_forcing, water_year_start,
};
pub use kernels::{AccumulatingKernel, FailingKernel, KernelCall, NoopKernel, RecordingKernel};
