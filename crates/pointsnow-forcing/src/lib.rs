//! Forcing input handling for pointsnow simulations.
//!
//! - [`ForcingTable`] holds a timestamp-indexed set of raw forcing columns.
//! - [`ForcingAdapter`] maps raw columns onto kernel fields and units.
//! - [`infer_interval`] recovers the table's sampling interval.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod error;
pub mod interval;
pub mod table;

pub use adapter::{adapt_row, ForcingAdapter};
pub use error::TableError;
pub use interval::infer_interval;
pub use table::{ForcingRow, ForcingTable};
