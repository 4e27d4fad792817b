//! Timestamp alias and time-unit constants.

/// A forcing or output timestamp.
///
/// Forcing tables are naive (zone-less) wall-clock series; the driver
/// only ever compares and offsets them, so no time zone is attached.
pub type Timestamp = chrono::NaiveDateTime;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
