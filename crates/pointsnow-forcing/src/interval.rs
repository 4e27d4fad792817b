//! Sampling-interval inference for a forcing index.

use chrono::TimeDelta;
use pointsnow_core::{RunError, Timestamp};

/// Infer the single sampling interval of `index`.
///
/// Succeeds only if there are at least two timestamps and every gap
/// equals the first, which must be strictly positive.
///
/// # Errors
///
/// [`RunError::IrregularSeries`] if no consistent interval exists.
pub fn infer_interval(index: &[Timestamp]) -> Result<TimeDelta, RunError> {
    let (first, second) = match index {
        [a, b, ..] => (*a, *b),
        _ => {
            return Err(RunError::IrregularSeries {
                reason: format!(
                    "need at least two timestamps to infer an interval, got {}",
                    index.len()
                ),
            })
        }
    };
    let interval = second - first;
    if interval <= TimeDelta::zero() {
        return Err(RunError::IrregularSeries {
            reason: format!("timestamps are not increasing at {second}"),
        });
    }
    if interval.subsec_nanos() != 0 {
        return Err(RunError::IrregularSeries {
            reason: format!("interval {interval} is not a whole number of seconds"),
        });
    }
    for pair in index.windows(2).skip(1) {
        let gap = pair[1] - pair[0];
        if gap != interval {
            return Err(RunError::IrregularSeries {
                reason: format!(
                    "gap of {gap} before {} differs from interval {interval}",
                    pair[1]
                ),
            });
        }
    }
    Ok(interval)
}
