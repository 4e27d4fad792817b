//! Core types for the pointsnow simulation driver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by the rest of the workspace: the live snowpack
//! state, adapted forcing records, the time-step refinement hierarchy,
//! per-run site constants, output records, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod forcing;
pub mod hierarchy;
pub mod output;
pub mod state;
pub mod time;
pub mod units;

pub use constants::SiteConstants;
pub use error::{ConfigError, HierarchyError, RunError};
pub use forcing::{ForcingField, ForcingRecord};
pub use hierarchy::{TimestepHierarchy, TimestepLevel};
pub use output::{OutputField, OutputRecord, OutputTable};
pub use state::SnowState;
pub use time::Timestamp;
pub use units::{UnitTransform, FREEZE};
