//! Physics kernel boundary for pointsnow simulations.
//!
//! The kernel integrates mass and energy conservation for one bracket
//! of forcing and is treated as a black box. This crate fixes its call
//! contract: the [`SnowKernel`] trait, the [`KernelContext`] it receives,
//! and the [`KernelStatus`] it returns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod kernel;

pub use context::KernelContext;
pub use kernel::{KernelStatus, SnowKernel};
