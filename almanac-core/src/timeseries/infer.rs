//! Step estimation and frequency inference from observation dates.

use chrono::NaiveDate;

use crate::Frequency;

/// Estimate a representative step (in days) from positive adjacent date gaps.
///
/// Prefer the mode (most frequent positive gap); if there is no unique mode,
/// return the lower median.
///
/// Unique mode (7 days):
///
/// ```
/// use almanac_core::estimate_step_days;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
/// // Gaps: 7, 7, 7, 3  => unique mode is 7
/// assert_eq!(estimate_step_days([d(1), d(8), d(15), d(22), d(25)]), Some(7));
/// ```
///
/// No unique mode: fall back to lower median (2 days):
///
/// ```
/// use almanac_core::estimate_step_days;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
/// // Gaps: 1, 2, 3, 4  => lower median is 2
/// assert_eq!(estimate_step_days([d(1), d(2), d(4), d(7), d(11)]), Some(2));
/// ```
///
/// The input order does not matter; duplicates are ignored. Returns `None` if
/// fewer than two distinct dates are present.
#[must_use]
pub fn estimate_step_days<I>(dates: I) -> Option<i64>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    if dates.len() < 2 {
        return None;
    }
    dates.sort_unstable();
    dates.dedup();

    let mut deltas: Vec<i64> = dates
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .collect();
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    let mut best_delta: i64 = deltas[0];
    let mut best_count: usize = 0;
    let mut num_best_candidates: usize = 0;

    let mut cur_delta: i64 = deltas[0];
    let mut cur_count: usize = 1;
    for &d in deltas.iter().skip(1) {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        if cur_count > best_count {
            best_count = cur_count;
            best_delta = cur_delta;
            num_best_candidates = 1;
        } else if cur_count == best_count {
            num_best_candidates = num_best_candidates.saturating_add(1);
        }
        cur_delta = d;
        cur_count = 1;
    }
    // Finalize last run
    if cur_count > best_count {
        best_delta = cur_delta;
        num_best_candidates = 1;
    } else if cur_count == best_count {
        num_best_candidates = num_best_candidates.saturating_add(1);
    }

    if num_best_candidates == 1 {
        return Some(best_delta);
    }

    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}

/// Infer the frequency of a set of dates from its representative step.
///
/// Weekday-only daily data still infers as daily because its modal gap is one day.
/// Returns `Frequency::Unknown` for fewer than two dates or a step outside every band.
#[must_use]
pub fn infer_frequency<I>(dates: I) -> Frequency
where
    I: IntoIterator<Item = NaiveDate>,
{
    estimate_step_days(dates).map_or(Frequency::Unknown, Frequency::from_gap_days)
}
