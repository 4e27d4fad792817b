//! Benchmark profiles for the pointsnow driver.
//!
//! - [`water_year_profile`]: one hourly water year (8760 rows) of seeded
//!   synthetic forcing.
//! - [`month_profile`]: one hourly month (720 rows).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pointsnow_engine::{initialize, Initialization};
use pointsnow_forcing::ForcingTable;
use pointsnow_test_utils::hourly_forcing;

/// Elevation used by every profile (m).
pub const PROFILE_ELEVATION: f64 = 2103.0;

/// A forcing table and the matching initialization.
pub struct Profile {
    /// Raw forcing.
    pub forcing: ForcingTable,
    /// Initial state, hierarchy, and constants for `forcing`.
    pub init: Initialization,
}

fn profile(rows: usize, seed: u64) -> Profile {
    let forcing = hourly_forcing(rows, seed);
    let init = initialize(forcing.index(), PROFILE_ELEVATION)
        .expect("synthetic forcing is evenly spaced");
    Profile { forcing, init }
}

/// One hourly water year of synthetic forcing.
pub fn water_year_profile(seed: u64) -> Profile {
    profile(365 * 24, seed)
}

/// One hourly month of synthetic forcing.
pub fn month_profile(seed: u64) -> Profile {
    profile(30 * 24, seed)
}
