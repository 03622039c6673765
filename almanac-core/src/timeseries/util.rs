//! Shared helpers for series invariants.

use crate::AlmanacError;
use crate::timeseries::store::TimeSeries;

/// Ensure two series carry exactly the same date set.
///
/// # Errors
/// Returns `Err(AlmanacError::UnalignedSeries)` if the date sets differ.
pub fn ensure_aligned(left: &TimeSeries, right: &TimeSeries) -> Result<(), AlmanacError> {
    if left.len() == right.len() && left.data().keys().eq(right.data().keys()) {
        return Ok(());
    }
    Err(AlmanacError::UnalignedSeries {
        left_len: left.len(),
        right_len: right.len(),
    })
}

/// Ensure a computed value is finite.
///
/// # Errors
/// Returns `Err(AlmanacError::InvalidValue)` naming `what` if `value` is NaN or infinite.
pub fn ensure_finite_result(what: &str, value: f64) -> Result<f64, AlmanacError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AlmanacError::InvalidValue(format!(
            "{what} produced a non-finite value: {value}"
        )))
    }
}
