//! Resolve a requested, possibly absent date to a stored one.

use chrono::NaiveDate;

use crate::timeseries::store::TimeSeries;
use crate::{AlmanacError, SearchMode};

fn within(
    target: NaiveDate,
    hit: (NaiveDate, f64),
    tolerance_days: Option<u32>,
) -> Result<(NaiveDate, f64), AlmanacError> {
    let distance_days = (hit.0 - target).num_days().abs();
    match tolerance_days {
        Some(tol) if distance_days > i64::from(tol) => Err(AlmanacError::ToleranceExceeded {
            target,
            candidate: hit.0,
            distance_days,
            tolerance_days: tol,
        }),
        _ => Ok(hit),
    }
}

/// Largest stored observation with date `<= target`.
pub(crate) fn on_or_before(ts: &TimeSeries, target: NaiveDate) -> Option<(NaiveDate, f64)> {
    ts.data()
        .range(..=target)
        .next_back()
        .map(|(d, v)| (*d, *v))
}

/// Smallest stored observation with date `>= target`.
pub(crate) fn on_or_after(ts: &TimeSeries, target: NaiveDate) -> Option<(NaiveDate, f64)> {
    ts.data().range(target..).next().map(|(d, v)| (*d, *v))
}

/// Resolve `target` against `ts` using `mode`, rejecting candidates farther than
/// `tolerance_days` from the target.
///
/// - `Exact`: the date must be stored.
/// - `Previous`: the latest stored date on or before the target.
/// - `Next`: the earliest stored date on or after the target.
/// - `Nearest`: whichever of previous/next is closer; ties go to previous.
///
/// # Errors
/// - `KeyNotFound` for `Exact` without a match, or `Nearest` on an empty series.
/// - `NoDataBefore` / `NoDataAfter` when no candidate exists in that direction.
/// - `ToleranceExceeded` when the candidate is farther than `tolerance_days`.
///
/// ```
/// use almanac_core::{SearchMode, TimeSeries};
/// use almanac_core::timeseries::resolve::resolve;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
/// let ts = TimeSeries::new(vec![(d(1), 1.0), (d(10), 2.0)]).unwrap();
///
/// assert_eq!(resolve(&ts, d(4), SearchMode::Nearest, None).unwrap(), (d(1), 1.0));
/// assert_eq!(resolve(&ts, d(7), SearchMode::Nearest, None).unwrap(), (d(10), 2.0));
/// assert!(resolve(&ts, d(7), SearchMode::Previous, Some(3)).is_err());
/// ```
pub fn resolve(
    ts: &TimeSeries,
    target: NaiveDate,
    mode: SearchMode,
    tolerance_days: Option<u32>,
) -> Result<(NaiveDate, f64), AlmanacError> {
    match mode {
        SearchMode::Exact => ts.get(target).map(|v| (target, v)),
        SearchMode::Previous => {
            let hit = on_or_before(ts, target).ok_or(AlmanacError::NoDataBefore { date: target })?;
            within(target, hit, tolerance_days)
        }
        SearchMode::Next => {
            let hit = on_or_after(ts, target).ok_or(AlmanacError::NoDataAfter { date: target })?;
            within(target, hit, tolerance_days)
        }
        SearchMode::Nearest => {
            let hit = match (on_or_before(ts, target), on_or_after(ts, target)) {
                (Some(prev), Some(next)) => {
                    let back = (target - prev.0).num_days();
                    let ahead = (next.0 - target).num_days();
                    if ahead < back { next } else { prev }
                }
                (Some(prev), None) => prev,
                (None, Some(next)) => next,
                (None, None) => return Err(AlmanacError::not_found(target)),
            };
            within(target, hit, tolerance_days)
        }
    }
}
